//! HMRC approved mileage allowance payments.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::money::round_currency;

/// Vehicle category for a mileage claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Car,
    Van,
    Motorcycle,
    Bike,
}

impl VehicleCategory {
    /// Wire/storage code for this vehicle category.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Van => "van",
            Self::Motorcycle => "motorcycle",
            Self::Bike => "bike",
        }
    }

    /// Parse from a wire/storage code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "car" => Some(Self::Car),
            "van" => Some(Self::Van),
            "motorcycle" => Some(Self::Motorcycle),
            "bike" => Some(Self::Bike),
            _ => None,
        }
    }

    /// HMRC approved rate in £/mile (2024/25 rates, unchanged since 2011).
    pub fn rate(&self) -> Decimal {
        match self {
            Self::Car | Self::Van => dec!(0.45),
            Self::Motorcycle => dec!(0.24),
            Self::Bike => dec!(0.20),
        }
    }
}

/// Claim amount for a mileage expense: miles × approved rate, rounded to 2 dp.
pub fn calculate_mileage_expense(miles: Decimal, vehicle: VehicleCategory) -> Decimal {
    round_currency(miles * vehicle.rate())
}

/// Claim amount from a raw vehicle code. Unknown codes resolve to a 0 rate,
/// the same permissive default as the VAT rate table.
pub fn calculate_mileage_expense_for_code(miles: Decimal, code: &str) -> Decimal {
    let rate = VehicleCategory::from_code(code)
        .map(|v| v.rate())
        .unwrap_or(Decimal::ZERO);
    round_currency(miles * rate)
}

/// Resolve the amount to persist for an expense record.
///
/// When both mileage and vehicle category are present, the computed claim
/// overrides any client-supplied amount; otherwise the supplied amount stands.
pub fn resolve_expense_amount(
    amount: Decimal,
    mileage: Option<Decimal>,
    vehicle: Option<VehicleCategory>,
) -> Decimal {
    match (mileage, vehicle) {
        (Some(miles), Some(vehicle)) => calculate_mileage_expense(miles, vehicle),
        _ => amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approved_rates() {
        assert_eq!(VehicleCategory::Car.rate(), dec!(0.45));
        assert_eq!(VehicleCategory::Van.rate(), dec!(0.45));
        assert_eq!(VehicleCategory::Motorcycle.rate(), dec!(0.24));
        assert_eq!(VehicleCategory::Bike.rate(), dec!(0.20));
    }

    #[test]
    fn claim_amounts() {
        assert_eq!(calculate_mileage_expense(dec!(1000), VehicleCategory::Car), dec!(450.00));
        assert_eq!(calculate_mileage_expense(dec!(100), VehicleCategory::Bike), dec!(20.00));
        assert_eq!(
            calculate_mileage_expense(dec!(33.3), VehicleCategory::Motorcycle),
            dec!(7.99)
        );
    }

    #[test]
    fn unknown_vehicle_claims_nothing() {
        assert_eq!(calculate_mileage_expense_for_code(dec!(500), "boat"), dec!(0.00));
    }

    #[test]
    fn mileage_overrides_supplied_amount() {
        let amount = resolve_expense_amount(
            dec!(99.99),
            Some(dec!(100)),
            Some(VehicleCategory::Car),
        );
        assert_eq!(amount, dec!(45.00));
    }

    #[test]
    fn supplied_amount_stands_without_full_mileage_data() {
        assert_eq!(resolve_expense_amount(dec!(99.99), None, None), dec!(99.99));
        assert_eq!(
            resolve_expense_amount(dec!(99.99), Some(dec!(100)), None),
            dec!(99.99)
        );
        assert_eq!(
            resolve_expense_amount(dec!(99.99), None, Some(VehicleCategory::Van)),
            dec!(99.99)
        );
    }
}
