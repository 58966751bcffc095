/// Errors produced by puzzle gateway calls.
///
/// All variants are recoverable: the game keeps its prior state and the
/// player can re-dispatch the triggering action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GatewayError {
    /// The request could not be sent or failed in transit.
    #[display("request failed: {message}")]
    Transport {
        /// Transport-level failure description.
        message: String,
    },
    /// The service answered with a non-success HTTP status.
    #[display("service returned HTTP {code}")]
    HttpStatus {
        /// The HTTP status code.
        code: u16,
    },
    /// The response body could not be decoded.
    #[display("malformed response: {message}")]
    MalformedResponse {
        /// Decoding failure description.
        message: String,
    },
    /// The service reported a board status this client does not know.
    #[display("unrecognized board status {status:?}")]
    UnknownStatus {
        /// The status string as received.
        status: String,
    },
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse {
                message: err.to_string(),
            }
        } else {
            Self::Transport {
                message: err.to_string(),
            }
        }
    }
}
