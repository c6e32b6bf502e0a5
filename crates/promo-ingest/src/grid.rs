//! CSV text to a grid of raw cells.
//!
//! Blank lines are the only boundary between the tables stacked in a
//! sheet, so the grid must keep them. The `csv` crate skips empty lines;
//! they are restored from the gaps between record line numbers.

use csv::{Position, ReaderBuilder, StringRecord};

use crate::error::Result;

/// Rows of raw, untrimmed cells. Rows may have different lengths.
pub type Grid = Vec<Vec<String>>;

/// Tokenizes CSV text into a grid, keeping blank rows and ragged rows.
///
/// Each skipped empty line becomes a row with one empty cell.
pub fn read_grid(text: &str) -> Result<Grid> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut grid = Grid::new();
    let mut next_line = 1;
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(next_line, Position::line);
        for _ in next_line..line {
            grid.push(vec![String::new()]);
        }
        next_line = line + 1 + embedded_newlines(&record);
        grid.push(record.iter().map(str::to_string).collect());
    }
    tracing::trace!(rows = grid.len(), "tokenized sheet");
    Ok(grid)
}

/// Line breaks inside quoted cells, which advance the physical line count.
fn embedded_newlines(record: &StringRecord) -> u64 {
    record
        .iter()
        .map(|field| field.matches('\n').count() as u64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_grid_simple() {
        let grid = read_grid("a,b,c\n1,2,3\n").unwrap();
        assert_eq!(grid, vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]);
    }

    #[test]
    fn test_read_grid_keeps_blank_lines() {
        let grid = read_grid("a,b\n\n\nc,d\n").unwrap();
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[1], vec![""]);
        assert_eq!(grid[2], vec![""]);
        assert_eq!(grid[3], vec!["c", "d"]);
    }

    #[test]
    fn test_read_grid_keeps_comma_only_rows() {
        let grid = read_grid("a,b\n,\nc,d\n").unwrap();
        assert_eq!(grid[1], vec!["", ""]);
    }

    #[test]
    fn test_read_grid_crlf() {
        let grid = read_grid("a,b\r\n\r\nc,d\r\n").unwrap();
        assert_eq!(grid, vec![vec!["a", "b"], vec![""], vec!["c", "d"]]);
    }

    #[test]
    fn test_read_grid_ragged_rows_and_trailing_empties() {
        let grid = read_grid("a,b,c\n1\n1,2,,\n").unwrap();
        assert_eq!(grid[1], vec!["1"]);
        assert_eq!(grid[2], vec!["1", "2", "", ""]);
    }

    #[test]
    fn test_read_grid_blank_line_inside_quotes_is_content() {
        let grid = read_grid("a,\"line one\n\nline three\"\nb,c\n").unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0][1], "line one\n\nline three");
        assert_eq!(grid[1], vec!["b", "c"]);
    }

    #[test]
    fn test_read_grid_mid_field_quote_keeps_later_blank_lines() {
        let grid = read_grid("P1,Acme 5\" Bank\n\nC1,Gold\n\nstray\n").unwrap();
        assert_eq!(
            grid,
            vec![
                vec!["P1", "Acme 5\" Bank"],
                vec![""],
                vec!["C1", "Gold"],
                vec![""],
                vec!["stray"],
            ]
        );
    }

    #[test]
    fn test_read_grid_blank_line_after_multiline_cell() {
        let grid = read_grid("a,\"one\ntwo\"\n\nb\n").unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[1], vec![""]);
        assert_eq!(grid[2], vec!["b"]);
    }

    #[test]
    fn test_read_grid_strips_bom() {
        let grid = read_grid("\u{feff}Partner_ID,Partner_Name\n").unwrap();
        assert_eq!(grid[0][0], "Partner_ID");
    }

    #[test]
    fn test_read_grid_leading_blank_line() {
        let grid = read_grid("\na,b\n").unwrap();
        assert_eq!(grid, vec![vec![""], vec!["a", "b"]]);
    }

    #[test]
    fn test_read_grid_empty() {
        assert!(read_grid("").unwrap().is_empty());
    }
}
