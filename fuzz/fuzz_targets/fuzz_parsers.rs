#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        let _ = firma::regon::validate_regon(s);
        let _ = firma::parse_date(s);
        if let Ok(amount) = firma::money::parse_amount(s) {
            let _ = firma::money::format_pln(amount);
        }
    }
});
