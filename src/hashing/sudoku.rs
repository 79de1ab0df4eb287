//! Sudoku board validity.

use std::collections::HashSet;

/// Check whether a partially filled 9x9 board violates any Sudoku rule.
///
/// `'.'` marks an empty cell; any other character is a claimed value that
/// must be unique within its row, column, and 3x3 box. Only the filled cells
/// are judged; the board does not have to be solvable.
///
/// # Examples
///
/// ```
/// use neetkit::hashing::is_valid_sudoku;
///
/// let mut board = [['.'; 9]; 9];
/// board[0][0] = '5';
/// board[0][8] = '5';
/// assert!(!is_valid_sudoku(&board));
/// ```
pub fn is_valid_sudoku(board: &[[char; 9]; 9]) -> bool {
    // Each claim is recorded once per unit it belongs to, keyed by
    // (unit kind, unit index, value).
    let mut seen: HashSet<(u8, usize, char)> = HashSet::new();

    for (r, row) in board.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            if value == '.' {
                continue;
            }
            let units = [
                (b'r', r, value),
                (b'c', c, value),
                (b'b', r / 3 * 3 + c / 3, value),
            ];
            for unit in units {
                if !seen.insert(unit) {
                    return false;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_rows(rows: [&str; 9]) -> [[char; 9]; 9] {
        let mut board = [['.'; 9]; 9];
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.chars().enumerate() {
                board[r][c] = value;
            }
        }
        board
    }

    #[test]
    fn test_valid_board() {
        let board = board_from_rows([
            "53..7....",
            "6..195...",
            ".98....6.",
            "8...6...3",
            "4..8.3..1",
            "7...2...6",
            ".6....28.",
            "...419..5",
            "....8..79",
        ]);
        assert!(is_valid_sudoku(&board));
    }

    #[test]
    fn test_row_conflict() {
        let mut board = [['.'; 9]; 9];
        board[3][1] = '8';
        board[3][7] = '8';
        assert!(!is_valid_sudoku(&board));
    }

    #[test]
    fn test_column_conflict() {
        let mut board = [['.'; 9]; 9];
        board[0][4] = '2';
        board[8][4] = '2';
        assert!(!is_valid_sudoku(&board));
    }

    #[test]
    fn test_box_conflict() {
        // Same 3x3 box, different row and column.
        let mut board = [['.'; 9]; 9];
        board[0][0] = '9';
        board[2][2] = '9';
        assert!(!is_valid_sudoku(&board));
    }

    #[test]
    fn test_empty_board_is_valid() {
        assert!(is_valid_sudoku(&[['.'; 9]; 9]));
    }

    #[test]
    fn test_same_value_in_distinct_units_is_valid() {
        let mut board = [['.'; 9]; 9];
        board[0][0] = '1';
        board[4][4] = '1';
        board[8][8] = '1';
        assert!(is_valid_sudoku(&board));
    }
}
