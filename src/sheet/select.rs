//! Quote selection - resolve the quote number from an operator-chosen row
//!
//! Row positions are 1-based to match what the operator sees in a
//! spreadsheet: row 1 is the header row and is never selectable.

use crate::core::QuoteError;
use crate::sheet::{Columns, Grid};

/// Resolve the quote number from a 1-based sheet row position
pub fn quote_no_at_row(grid: &Grid, row: usize, columns: &Columns) -> Result<String, QuoteError> {
    if row < 2 {
        return Err(QuoteError::HeaderRowSelected(row));
    }
    let total = grid.total_rows();
    if row > total {
        return Err(QuoteError::RowOutOfRange { row, total });
    }

    let data_row = &grid.rows()[row - 2];
    let quote_no = grid.cell(data_row, columns.quote_no).trim();
    if quote_no.is_empty() {
        return Err(QuoteError::EmptyQuoteNo(row));
    }
    Ok(quote_no.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ColumnNames;
    use crate::sheet::test_support::{default_header, grid};

    fn sample() -> (Grid, Columns) {
        let g = grid(&[
            default_header(),
            &["Q1", "2024-01-05", "가나상사", "김담당", "설치비", "", "1", "50000", ""],
            &["  Q2  ", "2024-01-06", "다라상사", "박담당", "서비스", "", "1", "10000", ""],
            &["", "", "", "", "", "", "", "", ""],
        ]);
        let columns = Columns::resolve(&g, &ColumnNames::default()).unwrap();
        (g, columns)
    }

    #[test]
    fn test_selects_quote_no_from_data_row() {
        let (g, columns) = sample();
        assert_eq!(quote_no_at_row(&g, 2, &columns).unwrap(), "Q1");
    }

    #[test]
    fn test_trims_padded_quote_no() {
        let (g, columns) = sample();
        assert_eq!(quote_no_at_row(&g, 3, &columns).unwrap(), "Q2");
    }

    #[test]
    fn test_header_row_is_rejected() {
        let (g, columns) = sample();
        assert!(matches!(
            quote_no_at_row(&g, 1, &columns),
            Err(QuoteError::HeaderRowSelected(1))
        ));
    }

    #[test]
    fn test_out_of_range_row() {
        let (g, columns) = sample();
        assert!(matches!(
            quote_no_at_row(&g, 9, &columns),
            Err(QuoteError::RowOutOfRange { row: 9, total: 4 })
        ));
    }

    #[test]
    fn test_empty_quote_no_cell() {
        let (g, columns) = sample();
        assert!(matches!(
            quote_no_at_row(&g, 4, &columns),
            Err(QuoteError::EmptyQuoteNo(4))
        ));
    }
}
