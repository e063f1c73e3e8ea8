//! Shared CLI helpers

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Load and deserialize a YAML file
pub fn load_yaml<T: DeserializeOwned + 'static>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_yml::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to parse {}", path.display()))
}
