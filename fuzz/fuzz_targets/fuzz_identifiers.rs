#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — invalid results are fine, panics are bugs.
        let _ = vatkit::uk::validate_utr(s);
        let _ = vatkit::uk::validate_vat_number(s);
        let _ = vatkit::uk::validate_company_number(s);
        let _ = vatkit::uk::validate_phone_number(s);
        let _ = vatkit::uk::validate_email(s);
    }
});
