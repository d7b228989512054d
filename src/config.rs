use crate::error::{PromptCheckError, Result};
use crate::types::config::PromptCheckConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "promptcheck.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/promptcheck/config.toml";

/// Loads the global config, then either `explicit` or `promptcheck.toml` under `root`.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<PromptCheckConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<PromptCheckConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(PromptCheckError::ConfigNotFound(path.display().to_string()));
            }
            merge_file_if_exists(&mut merged, path)?;
        }
        None => merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?,
    }

    let cfg: PromptCheckConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| PromptCheckError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config layer absent");
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    tracing::info!(path = %path.display(), "loaded config layer");
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| PromptCheckError::ConfigParse(format!("{}: {}", path.display(), e)))
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
