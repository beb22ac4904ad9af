//! Parse grids from text

use crate::puzzle::error::{ParseGridError, ParseGridErrorType};
use crate::puzzle::{Grid, Value, GRID_WIDTH};

/// Parses a `Grid` from nine non-blank lines of nine whitespace-separated
/// integers 0-9. Blank lines are skipped.
pub fn parse_grid(s: &str) -> Result<Grid, ParseGridError> {
    let mut values = Vec::with_capacity(GRID_WIDTH * GRID_WIDTH);
    let mut row_count = 0;
    for (i, line) in s.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = i + 1;
        if row_count == GRID_WIDTH {
            return Err(ParseGridError::new(
                ParseGridErrorType::WrongRowCount,
                "extra row",
                line_no,
            ));
        }
        let row = parse_row(line, line_no)?;
        values.extend(row);
        row_count += 1;
    }
    if row_count != GRID_WIDTH {
        return Err(ParseGridError::from_type(ParseGridErrorType::WrongRowCount));
    }
    // shape and range were checked token by token
    Ok(Grid::new(values).unwrap())
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<Value>, ParseGridError> {
    let mut row = Vec::with_capacity(GRID_WIDTH);
    for token in line.split_whitespace() {
        let value: Value = token
            .parse()
            .map_err(|_| ParseGridError::new(ParseGridErrorType::InvalidToken, token, line_no))?;
        if value < 0 || value > GRID_WIDTH as Value {
            return Err(ParseGridError::new(
                ParseGridErrorType::ValueOutOfRange,
                token,
                line_no,
            ));
        }
        row.push(value);
    }
    if row.len() != GRID_WIDTH {
        return Err(ParseGridError::new(
            ParseGridErrorType::WrongColumnCount,
            row.len(),
            line_no,
        ));
    }
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_grid_text() -> String {
        vec!["0 0 0 0 0 0 0 0 0"; 9].join("\n")
    }

    #[test]
    fn parses_empty_grid() {
        let grid = parse_grid(&empty_grid_text()).unwrap();
        assert_eq!(81, grid.cells().len());
        assert!((0..81).all(|id| grid.is_blank(id)));
    }

    #[test]
    fn skips_blank_lines() {
        let text = format!("\n{}\n\n", empty_grid_text().replace('\n', "\n\n"));
        assert!(parse_grid(&text).is_ok());
    }

    #[test]
    fn rejects_invalid_token() {
        let text = empty_grid_text().replacen('0', "x", 1);
        let err = parse_grid(&text).unwrap_err();
        assert_eq!(&ParseGridErrorType::InvalidToken, err.error_type());
    }

    #[test]
    fn rejects_value_out_of_range() {
        let text = empty_grid_text().replacen('0', "10", 1);
        let err = parse_grid(&text).unwrap_err();
        assert_eq!(&ParseGridErrorType::ValueOutOfRange, err.error_type());
    }

    #[test]
    fn rejects_short_row() {
        let mut lines: Vec<_> = empty_grid_text().lines().map(String::from).collect();
        lines[4] = "0 0 0".into();
        let err = parse_grid(&lines.join("\n")).unwrap_err();
        assert_eq!(&ParseGridErrorType::WrongColumnCount, err.error_type());
    }

    #[test]
    fn rejects_wrong_row_count() {
        let short = empty_grid_text().lines().take(8).collect::<Vec<_>>().join("\n");
        let err = parse_grid(&short).unwrap_err();
        assert_eq!(&ParseGridErrorType::WrongRowCount, err.error_type());

        let long = format!("{}\n0 0 0 0 0 0 0 0 0", empty_grid_text());
        let err = parse_grid(&long).unwrap_err();
        assert_eq!(&ParseGridErrorType::WrongRowCount, err.error_type());
    }
}
