//! # Atelier Inventory - Diamond CSV Import
//!
//! Reads supplier inventory exports into [`DiamondRow`]s for review before
//! they are attached to a purchase order.
//!
//! ```rust
//! use atelier_inventory::{parse_diamond_csv, write_rows_csv, ImportError};
//!
//! let csv = "\
//! Stock,Shape,Cts,Color,Grade,Cut,Pol,Sym,Lab,Measurements,Report No,Image Link
//! S1,Round,1.01,D,VS1,Excellent,Excellent,Excellent,GIA,6.40x6.42x3.95,1234567,http://x
//! ";
//!
//! let rows = parse_diamond_csv(csv).unwrap();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].report_number, "1234567");
//!
//! let exported = write_rows_csv(&rows).unwrap();
//! assert!(exported.starts_with("stock_number,shape,carats"));
//!
//! let err = parse_diamond_csv("Stock,Shape\nS1,Round").unwrap_err();
//! assert!(matches!(err, ImportError::MissingColumns(_)));
//! ```
//!
//! Structural problems (no data, missing required columns) fail the whole
//! import. Anything wrong within a row degrades to empty cells.

mod error;
mod image;
mod import;
mod row;

pub use error::{ImportError, Result};
pub use image::{image_extension, image_object_key, ImageImportRequest};
pub use import::{parse_diamond_csv, parse_diamond_csv_with, ImportOptions, REQUIRED_COLUMNS};
pub use row::{write_rows_csv, write_rows_json, Column, DiamondRow};
