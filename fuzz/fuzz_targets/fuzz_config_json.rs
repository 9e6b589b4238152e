#![no_main]

use brightness_controller::config::{Preferences, Theme};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary config.json content must never panic the parser
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(prefs) = serde_json::from_str::<Preferences>(s) {
            // Whatever parsed must serialize back to something that parses the same
            let json = serde_json::to_string(&prefs).unwrap();
            let again: Preferences = serde_json::from_str(&json).unwrap();
            assert_eq!(prefs, again);
        }
        let _ = s.parse::<Theme>();
    }
});
