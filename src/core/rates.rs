//! UK VAT categories and the statutory rate table.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// UK VAT category of a supply.
///
/// Every line item carries exactly one category. `Zero` and `Exempt` both
/// charge no VAT but are reported separately on a VAT return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VatCategory {
    /// 20% — most goods and services.
    Standard,
    /// 5% — domestic fuel, children's car seats, etc.
    Reduced,
    /// 0% — zero-rated supplies (books, most food, children's clothes).
    Zero,
    /// Exempt supplies (insurance, postage, finance) — no VAT, no reclaim.
    Exempt,
}

impl VatCategory {
    /// All categories, in reporting order.
    pub const ALL: [VatCategory; 4] = [Self::Standard, Self::Reduced, Self::Zero, Self::Exempt];

    /// Wire/storage code for this category.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Reduced => "REDUCED",
            Self::Zero => "ZERO",
            Self::Exempt => "EXEMPT",
        }
    }

    /// Parse from a wire/storage code. Unknown codes return `None`; callers
    /// wanting the legacy zero-rate fallback use [`RateTable::rate_for_code`].
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "STANDARD" => Some(Self::Standard),
            "REDUCED" => Some(Self::Reduced),
            "ZERO" => Some(Self::Zero),
            "EXEMPT" => Some(Self::Exempt),
            _ => None,
        }
    }
}

/// Immutable VAT rate table mapping [`VatCategory`] to a percentage.
///
/// Constructed once and shared read-only; statutory rate changes mean a new
/// table value passed to the `_with` calculator entry points, never mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    standard: Decimal,
    reduced: Decimal,
    zero: Decimal,
    exempt: Decimal,
}

impl RateTable {
    /// UK rates in force since 4 January 2011 (unchanged through 2024/25).
    pub const UK: RateTable = RateTable {
        standard: dec!(20.00),
        reduced: dec!(5.00),
        zero: dec!(0.00),
        exempt: dec!(0.00),
    };

    /// Percentage rate for a category (e.g. `20.00` for `Standard`).
    pub fn rate_for(&self, category: VatCategory) -> Decimal {
        match category {
            VatCategory::Standard => self.standard,
            VatCategory::Reduced => self.reduced,
            VatCategory::Zero => self.zero,
            VatCategory::Exempt => self.exempt,
        }
    }

    /// Percentage rate for a raw category code.
    ///
    /// Unknown codes resolve to `0` rather than failing — the permissive
    /// default inherited from the stringly-typed callers this table serves.
    /// Strict callers parse with [`VatCategory::from_code`] first.
    pub fn rate_for_code(&self, code: &str) -> Decimal {
        VatCategory::from_code(code)
            .map(|c| self.rate_for(c))
            .unwrap_or(Decimal::ZERO)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::UK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uk_rates() {
        let t = RateTable::UK;
        assert_eq!(t.rate_for(VatCategory::Standard), dec!(20.00));
        assert_eq!(t.rate_for(VatCategory::Reduced), dec!(5.00));
        assert_eq!(t.rate_for(VatCategory::Zero), dec!(0.00));
        assert_eq!(t.rate_for(VatCategory::Exempt), dec!(0.00));
    }

    #[test]
    fn code_round_trip() {
        for category in VatCategory::ALL {
            assert_eq!(VatCategory::from_code(category.code()), Some(category));
        }
    }

    #[test]
    fn unknown_code_is_zero_rated() {
        assert_eq!(RateTable::UK.rate_for_code("SUPER_REDUCED"), Decimal::ZERO);
        assert_eq!(RateTable::UK.rate_for_code(""), Decimal::ZERO);
        assert_eq!(RateTable::UK.rate_for_code("standard"), Decimal::ZERO);
    }

    #[test]
    fn serde_uses_screaming_codes() {
        let json = serde_json::to_string(&VatCategory::Standard).unwrap();
        assert_eq!(json, "\"STANDARD\"");
    }
}
