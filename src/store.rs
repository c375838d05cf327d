use crate::error::{MergeError, Result};
use crate::types::catalog::{Catalog, ScoreRecord};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub fn load_score_record(path: &Path) -> Result<ScoreRecord> {
    load_document(path)
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog: Catalog = load_document(path)?;
    tracing::debug!(
        "loaded {} product(s) from {}",
        catalog.products.len(),
        path.display()
    );
    Ok(catalog)
}

fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(MergeError::PathNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path).map_err(MergeError::Io)?;
    serde_json::from_str(&content)
        .map_err(|e| MergeError::malformed(path.display().to_string(), e.to_string()))
}

/// Writes the catalog as two-space indented JSON. The file is staged next to
/// its destination and renamed into place.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(MergeError::Io)?;
    }
    let mut json = serde_json::to_string_pretty(catalog)?;
    json.push('\n');

    stage_and_rename(path, &json).map_err(MergeError::Io)?;
    tracing::debug!("wrote catalog to {}", path.display());
    Ok(())
}

fn stage_and_rename(path: &Path, content: &str) -> std::io::Result<()> {
    let mut staged = path.as_os_str().to_owned();
    staged.push(format!(".tmp.{}", std::process::id()));
    let staged = PathBuf::from(staged);

    fs::write(&staged, content)?;
    if let Err(e) = fs::rename(&staged, path) {
        let _ = fs::remove_file(&staged);
        return Err(e);
    }
    Ok(())
}
