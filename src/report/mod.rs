//! Period reporting: multi-invoice VAT breakdowns, VAT-return figures, and
//! Making Tax Digital quarter arithmetic.
//!
//! # Example
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use vatkit::core::*;
//! use vatkit::report::*;
//!
//! let invoice = vec![LineItem::new("Design", dec!(1), dec!(500.00), VatCategory::Standard)];
//! let report = vat_breakdown_report([invoice.as_slice()]);
//! assert_eq!(report.total_vat, dec!(100.00));
//! assert_eq!(report.total_gross, dec!(600.00));
//! ```

mod breakdown;
mod period;

pub use breakdown::*;
pub use period::*;
