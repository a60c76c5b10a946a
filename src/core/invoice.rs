//! Invoice-level aggregation of line calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line::{LineCalculation, calculate_line_with};
use super::rates::{RateTable, VatCategory};

/// A single billable invoice line, as supplied by the caller.
///
/// The engine never owns or mutates these; invoice updates re-invoke
/// [`aggregate_invoice`] with the full, final line set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub vat_category: VatCategory,
}

impl LineItem {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        vat_category: VatCategory,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            vat_category,
        }
    }

    /// The line's net/VAT/gross under the statutory UK rate table.
    pub fn calculation(&self) -> LineCalculation {
        calculate_line_with(&RateTable::UK, self.quantity, self.unit_price, self.vat_category)
    }
}

/// Accumulated VAT per category for one invoice.
///
/// All four categories are always present, zero-defaulted, so the serialized
/// breakdown has a stable shape regardless of which categories were used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatBreakdown {
    #[serde(rename = "STANDARD")]
    pub standard: Decimal,
    #[serde(rename = "REDUCED")]
    pub reduced: Decimal,
    #[serde(rename = "ZERO")]
    pub zero: Decimal,
    #[serde(rename = "EXEMPT")]
    pub exempt: Decimal,
}

impl VatBreakdown {
    /// Accumulated VAT for one category.
    pub fn amount_for(&self, category: VatCategory) -> Decimal {
        match category {
            VatCategory::Standard => self.standard,
            VatCategory::Reduced => self.reduced,
            VatCategory::Zero => self.zero,
            VatCategory::Exempt => self.exempt,
        }
    }

    /// Sum across all categories.
    pub fn total(&self) -> Decimal {
        self.standard + self.reduced + self.zero + self.exempt
    }

    fn add(&mut self, category: VatCategory, amount: Decimal) {
        let slot = match category {
            VatCategory::Standard => &mut self.standard,
            VatCategory::Reduced => &mut self.reduced,
            VatCategory::Zero => &mut self.zero,
            VatCategory::Exempt => &mut self.exempt,
        };
        *slot += amount;
    }
}

/// Invoice-level totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    /// Sum of rounded line net amounts. Reflects the full net value even for
    /// a business that is not VAT registered.
    pub subtotal: Decimal,
    /// Sum of rounded line VAT amounts; zero when not VAT registered.
    pub vat: Decimal,
    /// subtotal + vat, exactly.
    pub total: Decimal,
    /// Per-category VAT amounts; all zero when not VAT registered.
    pub vat_breakdown: VatBreakdown,
}

/// Aggregate line items into invoice totals under the UK rate table.
///
/// Each line is calculated (and rounded) individually; the totals are sums
/// of the rounded per-line values, so line order cannot affect the result.
/// When `vat_registered` is false the subtotal still accrues, but no VAT is
/// charged and the breakdown stays zero.
pub fn aggregate_invoice(lines: &[LineItem], vat_registered: bool) -> InvoiceTotals {
    aggregate_invoice_with(&RateTable::UK, lines, vat_registered)
}

/// Aggregate against a caller-supplied rate table.
pub fn aggregate_invoice_with(
    rates: &RateTable,
    lines: &[LineItem],
    vat_registered: bool,
) -> InvoiceTotals {
    let mut subtotal = Decimal::ZERO;
    let mut vat = Decimal::ZERO;
    let mut vat_breakdown = VatBreakdown::default();

    for line in lines {
        let calc = calculate_line_with(rates, line.quantity, line.unit_price, line.vat_category);
        subtotal += calc.line_total;
        if vat_registered {
            vat += calc.vat_amount;
            vat_breakdown.add(line.vat_category, calc.vat_amount);
        }
    }

    InvoiceTotals {
        subtotal,
        vat,
        total: subtotal + vat,
        vat_breakdown,
    }
}
