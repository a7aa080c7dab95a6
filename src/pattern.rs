//! Initial-pattern loading and seed patterns.
//!
//! The plain-text layout is a header of two integers (rows, then columns)
//! followed by `rows * cols` whitespace-separated boolean tokens in row-major
//! order. `true`/`false` (any case) and `1`/`0` are accepted.
//!
//! # Example
//!
//! ```
//! use toroidal_life::pattern;
//!
//! let grid = pattern::parse("2 3  1 0 0  0 1 1").unwrap();
//! assert_eq!(grid.rows(), 2);
//! assert_eq!(grid.cols(), 3);
//! assert_eq!(grid.live_count(), 3);
//! ```

use std::fs;
use std::path::Path;
use std::str::SplitWhitespace;

use crate::error::PatternError;
use crate::grid::Grid;

/// Live cells of the default 5x5 board.
///
/// A fixed constant, not derived; the board it seeds stops all activity
/// after four generations.
pub const DEFAULT: &[(usize, usize)] = &[(1, 1), (1, 3), (2, 2), (3, 2), (3, 3)];

/// Classic seed patterns as live-coordinate lists.
///
/// Stamp one onto a board with [`Grid::from_cells`].
pub mod presets {
    /// Blinker oscillator (period 2), horizontal.
    pub const BLINKER: &[(usize, usize)] = &[(2, 1), (2, 2), (2, 3)];

    /// Glider, heading down-left.
    pub const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

    /// Block still life.
    pub const BLOCK: &[(usize, usize)] = &[(1, 1), (1, 2), (2, 1), (2, 2)];
}

/// Parses a pattern from its plain-text form.
pub fn parse(input: &str) -> Result<Grid, PatternError> {
    let mut tokens = input.split_whitespace();
    let rows = dimension(&mut tokens, "row")?;
    let cols = dimension(&mut tokens, "column")?;
    if rows == 0 || cols == 0 {
        return Err(crate::error::GridError::EmptyGrid.into());
    }

    let expected = rows * cols;
    let mut cells = Vec::with_capacity(expected);
    for got in 0..expected {
        let token = tokens
            .next()
            .ok_or(PatternError::UnexpectedEnd { expected, got })?;
        cells.push(cell(token)?);
    }

    Ok(Grid::from_flat(rows, cols, cells))
}

/// Reads and parses a pattern file.
pub fn load(path: impl AsRef<Path>) -> Result<Grid, PatternError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

fn dimension(tokens: &mut SplitWhitespace<'_>, what: &'static str) -> Result<usize, PatternError> {
    let token = tokens.next().ok_or(PatternError::MissingDimension(what))?;
    token
        .parse()
        .map_err(|_| PatternError::InvalidDimension(token.to_string()))
}

fn cell(token: &str) -> Result<bool, PatternError> {
    if token == "1" || token.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if token == "0" || token.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(PatternError::InvalidCell(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    #[test]
    fn test_parse_numeric_tokens() {
        let grid = parse("2 3 1 0 0 0 1 1").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.live_count(), 3);
        assert!(grid.state(0, 0).unwrap());
        assert!(!grid.state(0, 1).unwrap());
        assert!(grid.state(1, 2).unwrap());
    }

    #[test]
    fn test_parse_word_tokens_any_case() {
        let grid = parse("1 4 true FALSE True false").unwrap();
        assert_eq!(grid.live_count(), 2);
        assert!(grid.state(0, 0).unwrap());
        assert!(grid.state(0, 2).unwrap());
    }

    #[test]
    fn test_parse_multiline_layout() {
        let text = "3 3\nfalse true false\nfalse true false\nfalse true false\n";
        let grid = parse(text).unwrap();
        assert_eq!(grid.live_count(), 3);
        assert!(grid.state(1, 1).unwrap());
    }

    #[test]
    fn test_missing_dimension() {
        assert!(matches!(
            parse(""),
            Err(PatternError::MissingDimension("row"))
        ));
        assert!(matches!(
            parse("4"),
            Err(PatternError::MissingDimension("column"))
        ));
    }

    #[test]
    fn test_invalid_dimension_token() {
        assert!(matches!(
            parse("x 3 1 1 1"),
            Err(PatternError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_invalid_cell_token() {
        let err = parse("1 2 1 maybe").unwrap_err();
        match err {
            PatternError::InvalidCell(token) => assert_eq!(token, "maybe"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_too_few_cells() {
        let err = parse("2 2 1 0 1").unwrap_err();
        match err {
            PatternError::UnexpectedEnd { expected, got } => {
                assert_eq!(expected, 4);
                assert_eq!(got, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_dimension() {
        assert!(matches!(
            parse("0 3"),
            Err(PatternError::Grid(GridError::EmptyGrid))
        ));
    }

    #[test]
    fn test_load_round_trip() {
        let path = std::env::temp_dir().join("toroidal_life_pattern_test.txt");
        fs::write(&path, "2 2 1 0 0 1").unwrap();
        let grid = load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(grid.live_count(), 2);
        assert!(grid.state(0, 0).unwrap());
        assert!(grid.state(1, 1).unwrap());
    }

    #[test]
    fn test_default_pattern_constant() {
        let grid = Grid::from_cells(5, 5, DEFAULT).unwrap();
        assert_eq!(grid.live_count(), 5);
        assert!(grid.state(1, 1).unwrap());
        assert!(grid.state(3, 3).unwrap());
    }
}
