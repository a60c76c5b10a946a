//! Core VAT calculation engine.
//!
//! This module provides the UK VAT rate table, the per-line and per-invoice
//! calculators, HMRC mileage claims, currency rounding/formatting, and
//! request-shape validation for the entities that feed the calculators.

mod error;
mod invoice;
mod line;
mod mileage;
mod money;
mod rates;
mod validation;

pub use error::*;
pub use invoice::*;
pub use line::*;
pub use mileage::*;
pub use money::*;
pub use rates::*;
pub use validation::*;
