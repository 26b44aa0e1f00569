//! The diamond row schema and its export.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A field of [`DiamondRow`], in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    StockNumber,
    Shape,
    Carats,
    Color,
    Clarity,
    Cut,
    Polish,
    Symmetry,
    Lab,
    Measurements,
    ReportNumber,
    ImageLink,
}

impl Column {
    /// Every column in schema order.
    pub const ALL: [Column; 12] = [
        Column::StockNumber,
        Column::Shape,
        Column::Carats,
        Column::Color,
        Column::Clarity,
        Column::Cut,
        Column::Polish,
        Column::Symmetry,
        Column::Lab,
        Column::Measurements,
        Column::ReportNumber,
        Column::ImageLink,
    ];

    /// The serialized field name.
    pub fn field_name(self) -> &'static str {
        match self {
            Column::StockNumber => "stock_number",
            Column::Shape => "shape",
            Column::Carats => "carats",
            Column::Color => "color",
            Column::Clarity => "clarity",
            Column::Cut => "cut",
            Column::Polish => "polish",
            Column::Symmetry => "symmetry",
            Column::Lab => "lab",
            Column::Measurements => "measurements",
            Column::ReportNumber => "report_number",
            Column::ImageLink => "image_link",
        }
    }

    /// Whether a lowercased header cell feeds this column.
    ///
    /// The first matching header wins. `color` skips headers that also
    /// mention `image` so an image-color column is not taken for the grade.
    pub fn matches_header(self, header: &str) -> bool {
        match self {
            Column::StockNumber => header.contains("stock"),
            Column::Shape => header.contains("shape"),
            Column::Carats => header.contains("cts"),
            Column::Color => header.contains("color") && !header.contains("image"),
            Column::Clarity => header.contains("grade") || header.contains("clarity"),
            Column::Cut => header.contains("cut"),
            Column::Polish => header.contains("pol"),
            Column::Symmetry => header.contains("sym"),
            Column::Lab => header.contains("lab"),
            Column::Measurements => header.contains("measurements"),
            Column::ReportNumber => header.contains("report"),
            Column::ImageLink => header.contains("image link") || header.contains("image"),
        }
    }
}

/// One diamond from an inventory file. Every field is kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiamondRow {
    pub stock_number: String,
    pub shape: String,
    pub carats: String,
    pub color: String,
    pub clarity: String,
    pub cut: String,
    pub polish: String,
    pub symmetry: String,
    pub lab: String,
    pub measurements: String,
    pub report_number: String,
    pub image_link: String,
}

impl DiamondRow {
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::StockNumber => &self.stock_number,
            Column::Shape => &self.shape,
            Column::Carats => &self.carats,
            Column::Color => &self.color,
            Column::Clarity => &self.clarity,
            Column::Cut => &self.cut,
            Column::Polish => &self.polish,
            Column::Symmetry => &self.symmetry,
            Column::Lab => &self.lab,
            Column::Measurements => &self.measurements,
            Column::ReportNumber => &self.report_number,
            Column::ImageLink => &self.image_link,
        }
    }

    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        let slot = match column {
            Column::StockNumber => &mut self.stock_number,
            Column::Shape => &mut self.shape,
            Column::Carats => &mut self.carats,
            Column::Color => &mut self.color,
            Column::Clarity => &mut self.clarity,
            Column::Cut => &mut self.cut,
            Column::Polish => &mut self.polish,
            Column::Symmetry => &mut self.symmetry,
            Column::Lab => &mut self.lab,
            Column::Measurements => &mut self.measurements,
            Column::ReportNumber => &mut self.report_number,
            Column::ImageLink => &mut self.image_link,
        };
        *slot = value.into();
    }

    /// Fields in schema order.
    pub fn values(&self) -> [&str; 12] {
        Column::ALL.map(|column| self.get(column))
    }
}

/// Writes rows as CSV with a header in schema order.
///
/// Unlike the importer, the writer quotes fields that need it, so the output
/// can be opened by spreadsheet tools without misaligned columns.
pub fn write_rows_csv(rows: &[DiamondRow]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(Column::ALL.map(Column::field_name))?;
    for row in rows {
        wtr.write_record(row.values())?;
    }

    let bytes = wtr.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes rows as a pretty-printed JSON array.
pub fn write_rows_json(rows: &[DiamondRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}
