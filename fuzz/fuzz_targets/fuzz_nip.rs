#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Rejections are fine, panics are bugs.
        let normalized = firma::nip::normalize_nip(s);
        assert!(normalized.len() <= firma::nip::NIP_LENGTH);
        let _ = firma::nip::format_nip(s);
        let _ = firma::nip::validate_nip(s);
    }
});
