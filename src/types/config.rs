use crate::error::MergeError;
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_CATALOG_PATH: &str = "src/data/products.json";
pub const DEFAULT_OUTPUT_PATH: &str = "src/data/products_updated.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MergeConfig {
    pub paths: Option<PathsConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    pub catalog: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Catalog input and output locations after flag, config and default resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub catalog: PathBuf,
    pub output: PathBuf,
}

impl MergeConfig {
    pub fn catalog_path(&self) -> Option<&Path> {
        self.paths.as_ref()?.catalog.as_deref()
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.paths.as_ref()?.output.as_deref()
    }

    pub fn validate(&self) -> Result<(), MergeError> {
        for (key, value) in [
            ("paths.catalog", self.catalog_path()),
            ("paths.output", self.output_path()),
        ] {
            if value.is_some_and(|path| path.as_os_str().is_empty()) {
                return Err(MergeError::ConfigParse(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

pub fn resolve_catalog_path(
    root: &Path,
    cfg: Option<&MergeConfig>,
    catalog_flag: Option<&Path>,
) -> PathBuf {
    let catalog = catalog_flag
        .or_else(|| cfg.and_then(MergeConfig::catalog_path))
        .unwrap_or(Path::new(DEFAULT_CATALOG_PATH));
    root.join(catalog)
}

/// Resolves paths relative to `root`: explicit flag, then config, then built-in default.
pub fn resolve_paths(
    root: &Path,
    cfg: Option<&MergeConfig>,
    catalog_flag: Option<&Path>,
    output_flag: Option<&Path>,
) -> Result<ResolvedPaths, MergeError> {
    let output = output_flag
        .or_else(|| cfg.and_then(MergeConfig::output_path))
        .unwrap_or(Path::new(DEFAULT_OUTPUT_PATH));

    let resolved = ResolvedPaths {
        catalog: resolve_catalog_path(root, cfg, catalog_flag),
        output: root.join(output),
    };
    if file_location(&resolved.catalog) == file_location(&resolved.output) {
        return Err(MergeError::ConfigParse(format!(
            "output path must differ from catalog path: {}",
            resolved.output.display()
        )));
    }
    Ok(resolved)
}

/// Where `path` actually lands on disk, so `a/../x` and symlinked aliases
/// compare equal to `x`. Falls back to the lexical form for parts that do not
/// exist yet.
fn file_location(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    let lexical = normalize_lexically(path);
    match (lexical.parent(), lexical.file_name()) {
        (Some(parent), Some(name)) => parent
            .canonicalize()
            .map(|parent| parent.join(name))
            .unwrap_or(lexical),
        _ => lexical,
    }
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = normalized.components().next_back();
                if matches!(last, Some(Component::Normal(_))) {
                    normalized.pop();
                } else {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
