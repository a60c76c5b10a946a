//! Single-line VAT calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::round_currency;
use super::rates::{RateTable, VatCategory};

/// Net, VAT, and gross amounts for a single invoice line.
///
/// Each field is rounded to 2 decimal places independently, from the raw
/// intermediates. Aggregation sums these already-rounded values; switching
/// to round-after-sum would change totals by a cent in edge cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineCalculation {
    /// Net amount: quantity × unit price.
    pub line_total: Decimal,
    /// VAT charged on the net amount.
    pub vat_amount: Decimal,
    /// Gross amount: net + VAT.
    pub total_with_vat: Decimal,
}

/// Calculate a line using the statutory UK rate table.
///
/// Quantity and unit price are expected to be positive; the engine does not
/// enforce this (callers validate drafts first) and will faithfully produce
/// zero or negative results for out-of-contract input.
pub fn calculate_line(quantity: Decimal, unit_price: Decimal, category: VatCategory) -> LineCalculation {
    calculate_line_with(&RateTable::UK, quantity, unit_price, category)
}

/// Calculate a line against a caller-supplied rate table.
pub fn calculate_line_with(
    rates: &RateTable,
    quantity: Decimal,
    unit_price: Decimal,
    category: VatCategory,
) -> LineCalculation {
    line_from_rate(quantity, unit_price, rates.rate_for(category))
}

/// Calculate a line from a raw category code.
///
/// Unknown codes silently resolve to a 0% rate, matching
/// [`RateTable::rate_for_code`].
pub fn calculate_line_for_code(quantity: Decimal, unit_price: Decimal, code: &str) -> LineCalculation {
    line_from_rate(quantity, unit_price, RateTable::UK.rate_for_code(code))
}

fn line_from_rate(quantity: Decimal, unit_price: Decimal, rate: Decimal) -> LineCalculation {
    let net = quantity * unit_price;
    let vat = net * rate / Decimal::ONE_HUNDRED;

    LineCalculation {
        line_total: round_currency(net),
        vat_amount: round_currency(vat),
        total_with_vat: round_currency(net + vat),
    }
}
