#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let check = vatkit::uk::validate_postcode(s);
        // Message is empty exactly when the postcode is valid.
        assert_eq!(check.is_valid, check.message.is_empty());
    }
});
