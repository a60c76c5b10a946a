//! Tax and company registration identifier formats.

use super::CheckResult;

/// Validate a Unique Taxpayer Reference: exactly 10 digits.
pub fn validate_utr(utr: &str) -> CheckResult {
    if utr.len() == 10 && utr.bytes().all(|b| b.is_ascii_digit()) {
        CheckResult::ok()
    } else {
        CheckResult::fail("UTR must be exactly 10 digits")
    }
}

/// Validate a UK VAT registration number: literal `GB` followed by exactly
/// 9 digits. Group and branch suffix formats are not supported.
pub fn validate_vat_number(vat: &str) -> CheckResult {
    let valid = matches!(vat.strip_prefix("GB"), Some(digits)
        if digits.len() == 9 && digits.bytes().all(|b| b.is_ascii_digit()));
    if valid {
        CheckResult::ok()
    } else {
        CheckResult::fail("VAT number must be in format GB123456789")
    }
}

/// Validate a Companies House company number: exactly 8 characters from
/// `[A-Z0-9]` (prefixed formats like `SC123456` pass; lowercase does not).
pub fn validate_company_number(company_number: &str) -> CheckResult {
    let valid = company_number.len() == 8
        && company_number
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
    if valid {
        CheckResult::ok()
    } else {
        CheckResult::fail("Company number must be 8 characters")
    }
}
