//! Spec file loading.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use texsynth_spec::{parse_and_validate, SpecError, TextureSpec, ValidationWarning};

/// Errors from loading a spec file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Spec(#[from] SpecError),
}

/// A parsed and validated spec.
#[derive(Debug)]
pub struct LoadResult {
    pub spec: TextureSpec,
    pub warnings: Vec<ValidationWarning>,
    /// BLAKE3 hash of the raw file bytes.
    pub source_hash: String,
}

/// Read, parse and validate a JSON spec file.
pub fn load_spec(path: &Path) -> Result<LoadResult, InputError> {
    let source = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let source_hash = blake3::hash(source.as_bytes()).to_hex().to_string();
    let (spec, warnings) = parse_and_validate(&source)?;
    log::debug!("loaded {} ({})", spec.asset_id, &source_hash[..16]);
    Ok(LoadResult {
        spec,
        warnings,
        source_hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file() {
        let err = load_spec(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_spec(file.path()).unwrap_err();
        assert!(matches!(err, InputError::Spec(SpecError::JsonParse(_))));
    }
}
