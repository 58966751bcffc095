//! Form encoding of board payloads.
//!
//! The sugoku service expects `application/x-www-form-urlencoded` bodies
//! where the nested array is bracketed, comma-joined, and percent-encoded:
//! row `[a,b,c]` becomes `%5Ba%2Cb%2Cc%5D`, rows are joined with `%2C`, and
//! the whole matrix is wrapped in another `%5B`/`%5D` pair. This must match
//! the service byte for byte, so it is built by hand rather than with a
//! generic form serializer.

use sudolink_board::Grid;

fn encode_row(row: &[u8]) -> String {
    let joined = row
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("%2C");
    format!("%5B{joined}%5D")
}

/// Encodes a board into the `board=...` form body.
pub(crate) fn board_form_body(board: &Grid) -> String {
    let rows = board
        .iter()
        .map(|row| encode_row(row))
        .collect::<Vec<_>>()
        .join("%2C");
    format!("board=%5B{rows}%5D")
}

#[cfg(test)]
mod tests {
    use super::board_form_body;

    #[test]
    fn single_row_matches_service_encoding() {
        let board = vec![vec![0, 1, 0]];
        assert_eq!(board_form_body(&board), "board=%5B%5B0%2C1%2C0%5D%5D");
    }

    #[test]
    fn rows_are_joined_with_encoded_commas() {
        let board = vec![vec![0, 1], vec![2, 0]];
        assert_eq!(
            board_form_body(&board),
            "board=%5B%5B0%2C1%5D%2C%5B2%2C0%5D%5D"
        );
    }

    #[test]
    fn four_by_four_board_encodes_fully() {
        let board = vec![
            vec![0, 1, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ];
        let body = board_form_body(&board);
        assert!(body.starts_with("board=%5B%5B0%2C1%2C0%2C0%5D%2C"));
        assert!(body.ends_with("%5B0%2C0%2C0%2C0%5D%5D"));
    }
}
