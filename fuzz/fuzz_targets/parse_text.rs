#![no_main]

use complex_lib::utils::ComplexNumber;
use libfuzzer_sys::fuzz_target;

// Parsing never panics, and whatever parses prints back to the same value.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(value) = text.parse::<ComplexNumber>() {
        if value.real().is_nan() || value.imag().is_nan() {
            return;
        }
        assert_eq!(value.to_string().parse::<ComplexNumber>(), Ok(value));
    }
});
