#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Arbitrary input must either parse or fail with an error, never panic
    if let Ok(document) = mzqc::reader::parse_mzqc_str(text) {
        // Whatever parsed must also emit and parse again
        let json = document.to_json();
        assert!(json.is_ok());
        if let Ok(json) = json {
            assert!(mzqc::document::MzQcDocument::from_json(&json).is_ok());
        }
    }
});
