//! VAT breakdown aggregation across a collection of invoices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{LineItem, RateTable, VatCategory, calculate_line_with, round_currency};

/// Accumulated net and VAT for one category across a report period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTotals {
    pub net: Decimal,
    pub vat: Decimal,
}

/// Per-category totals; all four categories always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByRate {
    #[serde(rename = "STANDARD")]
    pub standard: RateTotals,
    #[serde(rename = "REDUCED")]
    pub reduced: RateTotals,
    #[serde(rename = "ZERO")]
    pub zero: RateTotals,
    #[serde(rename = "EXEMPT")]
    pub exempt: RateTotals,
}

impl ByRate {
    /// Totals for one category.
    pub fn totals_for(&self, category: VatCategory) -> RateTotals {
        match category {
            VatCategory::Standard => self.standard,
            VatCategory::Reduced => self.reduced,
            VatCategory::Zero => self.zero,
            VatCategory::Exempt => self.exempt,
        }
    }

    fn slot_mut(&mut self, category: VatCategory) -> &mut RateTotals {
        match category {
            VatCategory::Standard => &mut self.standard,
            VatCategory::Reduced => &mut self.reduced,
            VatCategory::Zero => &mut self.zero,
            VatCategory::Exempt => &mut self.exempt,
        }
    }
}

/// VAT breakdown across every line item of every invoice in a period —
/// the figures behind a quarterly VAT-return view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatBreakdownReport {
    pub total_net: Decimal,
    pub total_vat: Decimal,
    pub total_gross: Decimal,
    pub by_rate: ByRate,
}

/// Aggregate a VAT breakdown report over invoices, each supplied as its
/// slice of line items. Inputs are never mutated.
///
/// Per-line values arrive already rounded from the line calculator; the
/// accumulators are raw sums of those rounded values, and every output field
/// gets a terminal rounding pass at assembly. That terminal pass is a no-op
/// in practice but is applied for numeric parity with invoice storage.
pub fn vat_breakdown_report<'a>(
    invoices: impl IntoIterator<Item = &'a [LineItem]>,
) -> VatBreakdownReport {
    vat_breakdown_report_with(&RateTable::UK, invoices)
}

/// Aggregate against a caller-supplied rate table.
pub fn vat_breakdown_report_with<'a>(
    rates: &RateTable,
    invoices: impl IntoIterator<Item = &'a [LineItem]>,
) -> VatBreakdownReport {
    let mut total_net = Decimal::ZERO;
    let mut total_vat = Decimal::ZERO;
    let mut by_rate = ByRate::default();

    for lines in invoices {
        for line in lines {
            let calc = calculate_line_with(rates, line.quantity, line.unit_price, line.vat_category);
            total_net += calc.line_total;
            total_vat += calc.vat_amount;
            let slot = by_rate.slot_mut(line.vat_category);
            slot.net += calc.line_total;
            slot.vat += calc.vat_amount;
        }
    }

    let total_gross = total_net + total_vat;

    for category in VatCategory::ALL {
        let slot = by_rate.slot_mut(category);
        slot.net = round_currency(slot.net);
        slot.vat = round_currency(slot.vat);
    }

    VatBreakdownReport {
        total_net: round_currency(total_net),
        total_vat: round_currency(total_vat),
        total_gross: round_currency(total_gross),
        by_rate,
    }
}

/// Headline VAT-return figures for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatReturn {
    /// VAT charged on sales.
    pub vat_due: Decimal,
    /// VAT reclaimable on purchases.
    pub vat_reclaimed: Decimal,
    /// Net position: due minus reclaimed. Negative means a refund is due.
    pub net_vat: Decimal,
    /// Gross sales for the period.
    pub total_sales: Decimal,
    /// Gross purchases for the period.
    pub total_purchases: Decimal,
}

/// Combine the sales-side and purchase-side breakdowns of a period into the
/// VAT-return headline figures.
pub fn vat_return(sales: &VatBreakdownReport, purchases: &VatBreakdownReport) -> VatReturn {
    VatReturn {
        vat_due: sales.total_vat,
        vat_reclaimed: purchases.total_vat,
        net_vat: sales.total_vat - purchases.total_vat,
        total_sales: sales.total_gross,
        total_purchases: purchases.total_gross,
    }
}
