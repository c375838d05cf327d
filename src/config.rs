use crate::error::{MergeError, Result};
use crate::types::config::MergeConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "score-merge.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".score-merge/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/score-merge/config.toml";

pub fn load_config(root: &Path) -> Result<Option<MergeConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Config files in increasing precedence: global, repo, local.
fn layer_paths(root: &Path, global_path: Option<&Path>) -> Vec<PathBuf> {
    global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)])
        .collect()
}

/// Deep-merges every layer that exists. `None` when no layer exists at all.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<MergeConfig>> {
    let mut merged: Option<Value> = None;
    for path in layer_paths(root, global_path) {
        if !path.exists() {
            continue;
        }
        tracing::debug!("merging config layer {}", path.display());
        let layer = read_toml_value(&path)?;
        match merged.as_mut() {
            Some(base) => merge_toml(base, layer),
            None => merged = Some(layer),
        }
    }

    let Some(merged) = merged else {
        tracing::debug!("no config layers found for {}", root.display());
        return Ok(None);
    };
    let cfg: MergeConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| MergeError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str::<Map<String, Value>>(&content)
        .map(Value::Table)
        .map_err(|e| MergeError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
