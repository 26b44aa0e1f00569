//! Header-driven CSV import.
//!
//! Supplier exports share a schema but not a layout: column order and header
//! spelling differ between vendors ("Cts" vs "Carats (cts)", "Grade" vs
//! "Clarity"). Columns are therefore found by substring search over the
//! lowercased header cells rather than by position.
//!
//! # Splitting
//!
//! Lines are split on the delimiter with quoting turned off. A value that
//! contains the delimiter shifts every later cell on its row; such files
//! have to be cleaned at the source. Records end at `\n` only; a stray `\r`
//! stays inside its cell, and the one ending a CRLF line is trimmed away.

use csv::{ReaderBuilder, StringRecord, Terminator, Trim};

use crate::error::{ImportError, Result};
use crate::row::{Column, DiamondRow};

/// Header names an import file must contain, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "stock",
    "shape",
    "cts",
    "color",
    "grade",
    "cut",
    "pol",
    "sym",
    "lab",
    "measurements",
    "report no",
    "image link",
];

/// Import settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    /// Cell separator for the header and data lines.
    pub delimiter: u8,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Parses a comma-separated inventory file.
///
/// # Example
///
/// ```rust
/// use atelier_inventory::parse_diamond_csv;
///
/// let csv = "Stock,Shape,Cts,Color,Grade,Cut,Pol,Sym,Lab,Measurements,Report No,Image Link\n\
///            S1,Round,1.01,D,VS1,EX,EX,EX,GIA,6.40x6.42x3.95,1234567,http://x";
///
/// let rows = parse_diamond_csv(csv).unwrap();
/// assert_eq!(rows[0].clarity, "VS1");
/// ```
pub fn parse_diamond_csv(text: &str) -> Result<Vec<DiamondRow>> {
    parse_diamond_csv_with(text, &ImportOptions::default())
}

/// Parses an inventory file with explicit options.
pub fn parse_diamond_csv_with(text: &str, options: &ImportOptions) -> Result<Vec<DiamondRow>> {
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.len() < 2 {
        return Err(ImportError::MissingData);
    }

    let joined = lines.join("\n");
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .trim(Trim::All)
        .from_reader(joined.as_bytes());

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => header_cells(&record?),
        None => return Err(ImportError::MissingData),
    };

    check_required(&header)?;
    let layout = ColumnLayout::resolve(&header);
    tracing::debug!(?layout, "resolved inventory columns");

    let mut rows = Vec::with_capacity(lines.len() - 1);
    for record in records {
        rows.push(layout.project(&record?));
    }

    tracing::debug!(rows = rows.len(), "parsed inventory rows");
    Ok(rows)
}

fn header_cells(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_lowercase).collect()
}

fn check_required(headers: &[String]) -> Result<()> {
    let present = |name: &str| {
        headers
            .iter()
            .any(|h| h.contains(name) || (name == "grade" && h.contains("clarity")))
    };

    let missing: Vec<String> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|name| !present(name))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ImportError::MissingColumns(missing))
    }
}

/// Source cell index for each schema column.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnLayout {
    indexes: [Option<usize>; 12],
}

impl ColumnLayout {
    fn resolve(headers: &[String]) -> Self {
        let indexes =
            Column::ALL.map(|column| headers.iter().position(|h| column.matches_header(h)));
        Self { indexes }
    }

    fn project(&self, record: &StringRecord) -> DiamondRow {
        let mut row = DiamondRow::default();
        for (column, index) in Column::ALL.iter().zip(self.indexes) {
            if let Some(cell) = index.and_then(|i| record.get(i)) {
                row.set(*column, cell);
            }
        }
        row
    }
}
