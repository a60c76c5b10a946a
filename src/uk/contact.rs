//! Postcode, phone, and email formats.

use super::CheckResult;

/// Validate a UK postcode, case-insensitively, with or without the space
/// before the inward code: `[A-Z]{1,2}[0-9][A-Z0-9]? ?[0-9][A-Z]{2}`.
pub fn validate_postcode(postcode: &str) -> CheckResult {
    if is_valid_postcode(&postcode.to_ascii_uppercase()) {
        CheckResult::ok()
    } else {
        CheckResult::fail("Invalid UK postcode format")
    }
}

fn is_valid_postcode(s: &str) -> bool {
    let b = s.as_bytes();
    let n = b.len();
    if n < 5 {
        return false;
    }

    // Inward code: digit + two letters at the end.
    if !(b[n - 3].is_ascii_digit() && b[n - 2].is_ascii_uppercase() && b[n - 1].is_ascii_uppercase())
    {
        return false;
    }

    // Outward code: one or two area letters, then a district digit.
    let mut i = 0;
    while i < 2 && i < n && b[i].is_ascii_uppercase() {
        i += 1;
    }
    if i == 0 || i >= n - 3 || !b[i].is_ascii_digit() {
        return false;
    }
    i += 1;

    // Between district digit and inward code: optional alphanumeric
    // sub-district, optional space.
    match &b[i..n - 3] {
        [] => true,
        [c] => c.is_ascii_alphanumeric() || *c == b' ',
        [c, b' '] => c.is_ascii_alphanumeric(),
        _ => false,
    }
}

/// Validate a UK phone number. Whitespace is stripped first; the number must
/// start `+44` or `0`, followed by a non-zero digit and 8 to 10 further
/// digits.
///
/// The digit-count range is the superset of the two legacy rule sets this
/// replaces (9–10 and 9–11 digits after the prefix).
pub fn validate_phone_number(phone: &str) -> CheckResult {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();

    let national = compact
        .strip_prefix("+44")
        .or_else(|| compact.strip_prefix('0'));

    let valid = matches!(national, Some(rest)
        if (9..=11).contains(&rest.len())
            && rest.as_bytes()[0] != b'0'
            && rest.bytes().all(|b| b.is_ascii_digit()));

    if valid {
        CheckResult::ok()
    } else {
        CheckResult::fail("Invalid UK phone number format")
    }
}

/// Validate an email address, RFC-light: a non-empty local part, `@`, and a
/// domain containing a dot, with no whitespace or second `@` anywhere.
pub fn validate_email(email: &str) -> CheckResult {
    if is_valid_email(email) {
        CheckResult::ok()
    } else {
        CheckResult::fail("Invalid email format")
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    // Domain needs a dot with something on both sides.
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}
