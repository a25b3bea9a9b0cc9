#![no_main]

use libfuzzer_sys::fuzz_target;
use milight_core::MacAddr;

fuzz_target!(|data: &str| {
    if let Ok(mac) = data.parse::<MacAddr>() {
        // Round-trips through the canonical display form.
        assert_eq!(mac.to_string().parse::<MacAddr>(), Ok(mac));
    }
});
