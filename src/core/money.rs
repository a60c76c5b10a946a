//! Currency rounding and GBP display formatting.

use rust_decimal::Decimal;

/// Round a monetary value to 2 decimal places using half-away-from-zero
/// (standard commercial rounding).
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as GBP with a fixed 2-decimal mask and thousands
/// grouping, e.g. `£1,234.56`. Negative amounts render as `-£209.80`.
///
/// Expects values already rounded by the calculators; anything finer is
/// rounded here so the mask never truncates.
pub fn format_gbp(amount: Decimal) -> String {
    let rounded = round_currency(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let mut abs = rounded.abs();
    abs.rescale(2);

    // "1234.56" → group the integer part from the right
    let text = abs.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-£{grouped}.{frac_part}")
    } else {
        format!("£{grouped}.{frac_part}")
    }
}
