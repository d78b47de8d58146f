//! Feeds arbitrary bytes through request parsing and validation.
//!
//! Any request that parses must validate without panicking, and a valid one
//! must survive a serialize/parse cycle.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wavegen_spec::{canonical_request_hash, validate_request, WaveformRequest};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(request) = WaveformRequest::from_json(text) else {
        return;
    };

    let result = validate_request(&request);
    let _ = request.total_samples();

    if result.is_ok() {
        let _ = canonical_request_hash(&request);
        if let Ok(json) = request.to_json_pretty() {
            let reparsed = WaveformRequest::from_json(&json);
            assert!(reparsed.is_ok(), "re-parse failed: {}", json);
        }
    }
});
