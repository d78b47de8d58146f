//! Canonical request hashing.
//!
//! A request hash identifies a synthesis job independently of JSON key order
//! or whitespace:
//!
//! ```text
//! request_hash = hex(BLAKE3(canonical_json(request)))
//! ```

use crate::error::RequestError;
use crate::request::WaveformRequest;

/// Computes the canonical BLAKE3 hash of a request.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
///
/// # Example
/// ```
/// use wavegen_spec::{canonical_request_hash, Waveform, WaveformRequest};
///
/// let request = WaveformRequest::new(Waveform::SineTime, 440.0, 1.0, 1.0);
/// let hash = canonical_request_hash(&request).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_request_hash(request: &WaveformRequest) -> Result<String, RequestError> {
    let value = serde_json::to_value(request)?;
    let canonical = canonicalize_value(&value);
    Ok(blake3::hash(canonical.as_bytes()).to_hex().to_string())
}

/// Serializes a JSON value with lexicographically sorted object keys and no whitespace.
pub fn canonicalize_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_value).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let pairs: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| {
                    format!(
                        "{}:{}",
                        serde_json::Value::String(k.clone()),
                        canonicalize_value(v)
                    )
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
        scalar => scalar.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Excitation, KarplusStrongParams, Waveform};

    #[test]
    fn test_hash_is_stable_across_key_order() {
        let a = r#"{"frequency":220.0,"amplitude":1.0,"duration":0.5,"waveform":{"type":"white-noise"}}"#;
        let b = r#"{"waveform":{"type":"white-noise"},"duration":0.5,"amplitude":1.0,"frequency":220.0}"#;

        let ha = canonical_request_hash(&WaveformRequest::from_json(a).unwrap()).unwrap();
        let hb = canonical_request_hash(&WaveformRequest::from_json(b).unwrap()).unwrap();
        assert_eq!(ha, hb);
    }

    #[test]
    fn test_hash_changes_with_parameters() {
        let base = WaveformRequest::new(
            Waveform::KarplusStrong(KarplusStrongParams::new(Excitation::WhiteNoise, 0.5)),
            220.0,
            1.0,
            1.0,
        );
        let mut other = base.clone();
        other.frequency = 221.0;

        assert_ne!(
            canonical_request_hash(&base).unwrap(),
            canonical_request_hash(&other).unwrap()
        );
    }

    #[test]
    fn test_canonicalize_sorts_nested_keys() {
        let value = serde_json::json!({"b": {"z": 1, "a": [true, null]}, "a": "x"});
        assert_eq!(
            canonicalize_value(&value),
            r#"{"a":"x","b":{"a":[true,null],"z":1}}"#
        );
    }
}
