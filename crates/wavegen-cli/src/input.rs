//! Loading synthesis requests from JSON files.
//!
//! Every command reads its request through [`load_request`], which also
//! records a BLAKE3 hash of the raw file so reports can name the exact
//! source they came from.

use std::path::{Path, PathBuf};

use thiserror::Error;
use wavegen_spec::{RequestError, WaveformRequest};

/// Result of loading a request file.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed request.
    pub request: WaveformRequest,
    /// BLAKE3 hash of the file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur while loading a request.
#[derive(Debug, Error)]
pub enum InputError {
    /// File could not be read.
    #[error("failed to read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid request JSON.
    #[error("JSON parse error: {message}")]
    JsonParse { message: String },

    /// The waveform type id is not recognized.
    #[error("unsupported waveform type: '{name}'")]
    UnsupportedType { name: String },
}

/// Loads a request from a JSON file.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use wavegen_cli::input::load_request;
///
/// let loaded = load_request(Path::new("request.json")).unwrap();
/// println!("{} samples", loaded.request.total_samples());
/// ```
pub fn load_request(path: &Path) -> Result<LoadResult, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();

    let request = WaveformRequest::from_json(&content).map_err(|e| match e {
        RequestError::UnsupportedType { name } => InputError::UnsupportedType { name },
        other => InputError::JsonParse {
            message: other.to_string(),
        },
    })?;

    Ok(LoadResult {
        request,
        source_hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavegen_spec::WaveformType;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_request() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(
            &tmp,
            "sine.json",
            r#"{
                "frequency": 440.0,
                "amplitude": 0.5,
                "duration": 1.0,
                "sample_rate": 8000,
                "waveform": { "type": "sine-time" }
            }"#,
        );

        let loaded = load_request(&path).unwrap();
        assert_eq!(loaded.request.waveform_type(), WaveformType::SineTime);
        assert_eq!(loaded.request.total_samples(), 8000);
        assert_eq!(loaded.source_hash.len(), 64);
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_request(&tmp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, InputError::FileRead { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_malformed_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(&tmp, "bad.json", "{ not json");
        let err = load_request(&path).unwrap_err();
        assert!(matches!(err, InputError::JsonParse { .. }));
    }

    #[test]
    fn test_load_unsupported_type() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(
            &tmp,
            "theremin.json",
            r#"{
                "frequency": 440.0,
                "amplitude": 0.5,
                "duration": 1.0,
                "waveform": { "type": "theremin" }
            }"#,
        );
        match load_request(&path).unwrap_err() {
            InputError::UnsupportedType { name } => assert_eq!(name, "theremin"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
