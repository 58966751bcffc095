use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use sudolink_board::{Difficulty, Grid};

use crate::{GatewayError, PuzzleGateway, ValidationStatus, encode};

/// Base URL of the public sugoku service.
pub const DEFAULT_BASE_URL: &str = "https://sugoku.onrender.com";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP client for a sugoku-compatible puzzle service.
///
/// Exposes the three service operations behind [`PuzzleGateway`]:
/// `GET /board`, `POST /validate`, and `POST /solve`. The POST bodies use
/// the service's bracketed, percent-encoded form encoding.
#[derive(Debug, Clone)]
pub struct SugokuClient {
    base_url: String,
    client: Client,
}

impl SugokuClient {
    /// Creates a client against the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post_board(
        &self,
        path: &str,
        board: &Grid,
    ) -> Result<reqwest::blocking::Response, GatewayError> {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(encode::board_form_body(board))
            .send()?;
        check_status(&response)?;
        Ok(response)
    }
}

impl Default for SugokuClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn check_status(response: &reqwest::blocking::Response) -> Result<(), GatewayError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(GatewayError::HttpStatus {
            code: status.as_u16(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct BoardResponse {
    board: Grid,
}

#[derive(Debug, Deserialize)]
struct ValidateResponse {
    status: String,
}

#[derive(Debug, Deserialize)]
struct SolveResponse {
    solution: Grid,
}

impl PuzzleGateway for SugokuClient {
    fn fetch_board(&self, difficulty: Difficulty) -> Result<Grid, GatewayError> {
        log::debug!("fetching board: difficulty={difficulty}");
        let response = self
            .client
            .get(format!("{}/board", self.base_url))
            .query(&[("difficulty", difficulty.as_str())])
            .send()?;
        check_status(&response)?;
        let body: BoardResponse = response.json()?;
        log::debug!("board received: size={}", body.board.len());
        Ok(body.board)
    }

    fn validate(&self, board: &Grid) -> Result<ValidationStatus, GatewayError> {
        log::debug!("validating board");
        let body: ValidateResponse = self.post_board("/validate", board)?.json()?;
        ValidationStatus::from_wire(&body.status).ok_or(GatewayError::UnknownStatus {
            status: body.status,
        })
    }

    fn solve(&self, board: &Grid) -> Result<Grid, GatewayError> {
        log::debug!("requesting solution");
        let body: SolveResponse = self.post_board("/solve", board)?.json()?;
        Ok(body.solution)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardResponse, SolveResponse, ValidateResponse};
    use crate::ValidationStatus;

    #[test]
    fn board_response_decodes() {
        let body: BoardResponse =
            serde_json::from_str(r#"{"board":[[0,1],[2,0]]}"#).unwrap();
        assert_eq!(body.board, vec![vec![0, 1], vec![2, 0]]);
    }

    #[test]
    fn validate_response_decodes_with_extra_fields() {
        let body: ValidateResponse =
            serde_json::from_str(r#"{"status":"solved","spent":"0.1s"}"#).unwrap();
        assert_eq!(ValidationStatus::from_wire(&body.status), Some(ValidationStatus::Solved));
    }

    #[test]
    fn solve_response_decodes_with_extra_fields() {
        let body: SolveResponse = serde_json::from_str(
            r#"{"difficulty":"easy","solution":[[1,2],[2,1]],"status":"solved"}"#,
        )
        .unwrap();
        assert_eq!(body.solution, vec![vec![1, 2], vec![2, 1]]);
    }

    #[test]
    fn unknown_wire_status_is_rejected() {
        assert_eq!(ValidationStatus::from_wire("weird"), None);
    }
}
