//! Data model for partner card configuration sheets.
//!
//! A single published sheet carries four tables: partners, card
//! presentation, product details, and display rules. This crate defines the
//! typed records for each table and the container that holds one recovered
//! snapshot of all four.

pub mod columns;
pub mod fields;
pub mod records;
pub mod table;
pub mod tables;

pub use fields::FieldMap;
pub use records::{CardPresentation, DisplayRule, Partner, ProductDetail, parse_priority};
pub use table::TableKind;
pub use tables::RecoveredTables;
