//! # vatkit
//!
//! UK small-business tax calculations: VAT invoice totals, HMRC approved
//! mileage rates, Making Tax Digital VAT breakdowns, and format validation
//! of UK regulatory identifiers (UTR, VAT number, company number, postcode).
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Rounding is half-away-from-zero to two decimal places, applied per line
//! item before aggregation.
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use vatkit::core::*;
//!
//! let lines = vec![
//!     LineItem::new("Consulting", dec!(2), dec!(100.00), VatCategory::Standard),
//!     LineItem::new("Travel", dec!(1), dec!(50.00), VatCategory::Zero),
//! ];
//!
//! let totals = aggregate_invoice(&lines, true);
//! assert_eq!(totals.subtotal, dec!(250.00));
//! assert_eq!(totals.vat, dec!(40.00));
//! assert_eq!(totals.total, dec!(290.00));
//! assert_eq!(format_gbp(totals.total), "£290.00");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`core`] | VAT categories and rates, line/invoice calculators, mileage, draft validation |
//! | [`report`] | Multi-invoice VAT breakdown reports, VAT-return figures, MTD quarters |
//! | [`uk`] | UK identifier format validators (UTR, VAT number, postcode, phone, email) |

pub mod core;
pub mod report;
pub mod uk;

// Re-export core types at crate root for convenience
pub use crate::core::*;
