//! UK regulatory identifier format validation.
//!
//! Client-side-shape checks only: no HMRC, Companies House, or VIES lookup
//! happens here. Every validator is a pure function over any string — it
//! never panics, and returns a [`CheckResult`] whose message is empty when
//! the value is valid.
//!
//! # Example
//!
//! ```rust
//! use vatkit::uk::*;
//!
//! assert!(validate_vat_number("GB123456789").is_valid);
//! assert!(validate_utr("1234567890").is_valid);
//! assert!(validate_postcode("SW1A 1AA").is_valid);
//!
//! let check = validate_utr("123");
//! assert!(!check.is_valid);
//! assert_eq!(check.message, "UTR must be exactly 10 digits");
//! ```

mod contact;
mod identifiers;

use serde::Serialize;

pub use contact::{validate_email, validate_phone_number, validate_postcode};
pub use identifiers::{validate_company_number, validate_utr, validate_vat_number};

/// Outcome of a format check: valid with an empty message, or invalid with a
/// fixed human-readable reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub is_valid: bool,
    pub message: &'static str,
}

impl CheckResult {
    pub(crate) const fn ok() -> Self {
        Self {
            is_valid: true,
            message: "",
        }
    }

    pub(crate) const fn fail(message: &'static str) -> Self {
        Self {
            is_valid: false,
            message,
        }
    }
}
