//! Property-based tests for the calculators and validators.

use proptest::prelude::*;
use rust_decimal::Decimal;
use vatkit::core::*;
use vatkit::report::vat_breakdown_report;
use vatkit::uk;

// ── Strategies ──────────────────────────────────────────────────────────────

/// A price in pence, 0.01 to 99999.99.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (1u64..10_000_000u64).prop_map(|pence| Decimal::new(pence as i64, 2))
}

/// A quantity with up to 3 fraction digits, 0.001 to 10000.000.
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (1u64..10_000_000u64).prop_map(|thousandths| Decimal::new(thousandths as i64, 3))
}

fn arb_category() -> impl Strategy<Value = VatCategory> {
    prop_oneof![
        Just(VatCategory::Standard),
        Just(VatCategory::Reduced),
        Just(VatCategory::Zero),
        Just(VatCategory::Exempt),
    ]
}

fn arb_line() -> impl Strategy<Value = LineItem> {
    (arb_quantity(), arb_price(), arb_category())
        .prop_map(|(q, p, c)| LineItem::new("prop line", q, p, c))
}

fn arb_lines() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(arb_line(), 0..20)
}

// ── Line calculation ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn exempt_lines_never_charge_vat(q in arb_quantity(), p in arb_price()) {
        let calc = calculate_line(q, p, VatCategory::Exempt);
        prop_assert_eq!(calc.vat_amount, Decimal::ZERO);
        prop_assert_eq!(calc.line_total, calc.total_with_vat);
    }

    #[test]
    fn zero_rated_lines_never_charge_vat(q in arb_quantity(), p in arb_price()) {
        let calc = calculate_line(q, p, VatCategory::Zero);
        prop_assert_eq!(calc.vat_amount, Decimal::ZERO);
    }

    #[test]
    fn standard_vat_is_twenty_percent(q in arb_quantity(), p in arb_price()) {
        let calc = calculate_line(q, p, VatCategory::Standard);
        let expected = (q * p * Decimal::new(20, 2))
            .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(calc.vat_amount, expected);
    }

    #[test]
    fn all_line_fields_have_pence_precision(q in arb_quantity(), p in arb_price(), c in arb_category()) {
        let calc = calculate_line(q, p, c);
        prop_assert!(calc.line_total.scale() <= 2);
        prop_assert!(calc.vat_amount.scale() <= 2);
        prop_assert!(calc.total_with_vat.scale() <= 2);
    }
}

// ── Invoice aggregation ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn total_is_subtotal_plus_vat(lines in arb_lines(), registered in any::<bool>()) {
        let totals = aggregate_invoice(&lines, registered);
        prop_assert_eq!(totals.total, totals.subtotal + totals.vat);
    }

    #[test]
    fn breakdown_sums_to_vat(lines in arb_lines()) {
        let totals = aggregate_invoice(&lines, true);
        prop_assert_eq!(totals.vat_breakdown.total(), totals.vat);
    }

    #[test]
    fn unregistered_never_charges_vat(lines in arb_lines()) {
        let totals = aggregate_invoice(&lines, false);
        prop_assert_eq!(totals.vat, Decimal::ZERO);
        prop_assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn registration_does_not_change_subtotal(lines in arb_lines()) {
        let registered = aggregate_invoice(&lines, true);
        let unregistered = aggregate_invoice(&lines, false);
        prop_assert_eq!(registered.subtotal, unregistered.subtotal);
    }

    #[test]
    fn aggregation_is_pure(lines in arb_lines()) {
        prop_assert_eq!(aggregate_invoice(&lines, true), aggregate_invoice(&lines, true));
    }

    #[test]
    fn line_order_never_matters(mut lines in arb_lines()) {
        let forward = aggregate_invoice(&lines, true);
        lines.reverse();
        prop_assert_eq!(forward, aggregate_invoice(&lines, true));
    }

    #[test]
    fn report_headline_matches_invoice_sums(lines in arb_lines()) {
        let report = vat_breakdown_report([lines.as_slice()]);
        let totals = aggregate_invoice(&lines, true);
        prop_assert_eq!(report.total_net, totals.subtotal);
        prop_assert_eq!(report.total_vat, totals.vat);
        prop_assert_eq!(report.total_gross, totals.total);
    }
}

// ── Mileage ─────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn car_and_van_claims_match(miles in arb_quantity()) {
        prop_assert_eq!(
            calculate_mileage_expense(miles, VehicleCategory::Car),
            calculate_mileage_expense(miles, VehicleCategory::Van)
        );
    }

    #[test]
    fn claims_have_pence_precision(miles in arb_quantity()) {
        for vehicle in [VehicleCategory::Car, VehicleCategory::Motorcycle, VehicleCategory::Bike] {
            prop_assert!(calculate_mileage_expense(miles, vehicle).scale() <= 2);
        }
    }
}

// ── Validators never panic, never lie about emptiness ───────────────────────

proptest! {
    #[test]
    fn validators_handle_any_string(s in "\\PC*") {
        for check in [
            uk::validate_utr(&s),
            uk::validate_vat_number(&s),
            uk::validate_company_number(&s),
            uk::validate_postcode(&s),
            uk::validate_phone_number(&s),
            uk::validate_email(&s),
        ] {
            // Message is empty exactly when valid.
            prop_assert_eq!(check.is_valid, check.message.is_empty());
        }
    }

    #[test]
    fn utr_accepts_exactly_ten_digit_strings(s in "[0-9]{10}") {
        prop_assert!(uk::validate_utr(&s).is_valid);
    }

    #[test]
    fn vat_number_accepts_gb_plus_nine(s in "GB[0-9]{9}") {
        prop_assert!(uk::validate_vat_number(&s).is_valid);
    }

    #[test]
    fn postcode_accepts_generated_patterns(s in "[A-Z]{1,2}[0-9][A-Z0-9]? ?[0-9][A-Z]{2}") {
        prop_assert!(uk::validate_postcode(&s).is_valid, "rejected {}", s);
    }
}
