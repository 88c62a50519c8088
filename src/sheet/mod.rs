//! Row store access - reads a sheet export as a 2-D grid
//!
//! Row 0 of the export is the header row; headers are matched by exact
//! trimmed-string comparison when resolving required columns. Cells are
//! kept verbatim and trimmed at the point of use, so whitespace-padded
//! values still compare correctly.

pub mod select;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::ReaderBuilder;

use crate::core::{ColumnNames, QuoteError};

/// A sheet export: header row plus data rows, all cells as raw strings
#[derive(Debug, Clone)]
pub struct Grid {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Read a CSV export. The first record is the header row; rows may
    /// have ragged lengths (missing trailing cells read back as empty).
    pub fn from_csv_path(path: &Path) -> Result<Self, QuoteError> {
        let file = File::open(path).map_err(|source| QuoteError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut records = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|source| QuoteError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            records.push(record.iter().map(|s| s.to_string()).collect::<Vec<_>>());
        }

        Self::from_records(records)
    }

    /// Build a grid from in-memory records (first record = headers)
    pub fn from_records(mut records: Vec<Vec<String>>) -> Result<Self, QuoteError> {
        if records.len() < 2 {
            return Err(QuoteError::EmptySheet);
        }
        let headers = records.remove(0);
        Ok(Self {
            headers,
            rows: records,
        })
    }

    /// Resolve a column index by exact trimmed header-name match
    pub fn column(&self, name: &str) -> Result<usize, QuoteError> {
        self.headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| QuoteError::MissingColumn(name.to_string()))
    }

    /// Data rows (header excluded)
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Total row count including the header row, as the operator sees it
    pub fn total_rows(&self) -> usize {
        self.rows.len() + 1
    }

    /// Cell text of a data row, empty if the row is ragged and short
    pub fn cell<'a>(&self, row: &'a [String], col: usize) -> &'a str {
        row.get(col).map(String::as_str).unwrap_or("")
    }
}

/// Resolved indices for every required column
#[derive(Debug, Clone, Copy)]
pub struct Columns {
    pub quote_no: usize,
    pub date: usize,
    pub company: usize,
    pub recipient: usize,
    pub item: usize,
    pub spec: usize,
    pub qty: usize,
    pub unit_price: usize,
    pub note: usize,
}

impl Columns {
    /// Resolve every required column, failing with the first missing name
    pub fn resolve(grid: &Grid, names: &ColumnNames) -> Result<Self, QuoteError> {
        Ok(Self {
            quote_no: grid.column(&names.quote_no)?,
            date: grid.column(&names.date)?,
            company: grid.column(&names.company)?,
            recipient: grid.column(&names.recipient)?,
            item: grid.column(&names.item)?,
            spec: grid.column(&names.spec)?,
            qty: grid.column(&names.qty)?,
            unit_price: grid.column(&names.unit_price)?,
            note: grid.column(&names.note)?,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Grid;

    /// Build a grid from string slices, for tests
    pub fn grid(records: &[&[&str]]) -> Grid {
        Grid::from_records(
            records
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    /// The default nine-column header row
    pub fn default_header() -> &'static [&'static str] {
        &[
            "견적번호",
            "견적일",
            "업체명",
            "담당자",
            "품명",
            "공정",
            "수량",
            "단가",
            "비고",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{default_header, grid};
    use super::*;

    #[test]
    fn test_column_resolution_trims_header_names() {
        let g = grid(&[
            &[" 견적번호 ", "품명"],
            &["Q1", "설치비"],
        ]);
        assert_eq!(g.column("견적번호").unwrap(), 0);
        assert_eq!(g.column("품명").unwrap(), 1);
    }

    #[test]
    fn test_missing_column_names_the_column() {
        let g = grid(&[&["견적번호"], &["Q1"]]);
        let err = g.column("단가").unwrap_err();
        assert!(matches!(err, QuoteError::MissingColumn(ref name) if name == "단가"));
        assert!(err.to_string().contains("단가"));
    }

    #[test]
    fn test_resolve_all_required_columns() {
        let g = grid(&[
            default_header(),
            &["Q1", "2024-01-05", "가나상사", "김담당", "설치비", "", "1", "50000", ""],
        ]);
        let columns = Columns::resolve(&g, &ColumnNames::default()).unwrap();
        assert_eq!(columns.quote_no, 0);
        assert_eq!(columns.note, 8);
    }

    #[test]
    fn test_resolve_fails_on_first_missing() {
        let g = grid(&[
            &["견적번호", "견적일", "업체명", "담당자", "품명", "공정", "수량", "단가"],
            &["Q1", "", "", "", "", "", "", ""],
        ]);
        let err = Columns::resolve(&g, &ColumnNames::default()).unwrap_err();
        assert!(matches!(err, QuoteError::MissingColumn(ref name) if name == "비고"));
    }

    #[test]
    fn test_header_only_sheet_is_empty() {
        let records = vec![vec!["견적번호".to_string()]];
        assert!(matches!(
            Grid::from_records(records),
            Err(QuoteError::EmptySheet)
        ));
    }

    #[test]
    fn test_ragged_row_reads_empty_cells() {
        let g = grid(&[&["a", "b", "c"], &["1"]]);
        let row = &g.rows()[0];
        assert_eq!(g.cell(row, 0), "1");
        assert_eq!(g.cell(row, 2), "");
    }
}
