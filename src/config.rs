use crate::error::{Result, ScoreError};
use crate::scoring::ScoringModel;
use crate::types::config::ScoringConfig;
use std::path::{Path, PathBuf};
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "talentscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".talentscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/talentscore/config.toml";

const EMBEDDED_DEFAULTS: &str = include_str!("../config/defaults.toml");

/// Built-in brackets, catalog and benchmarks with no overrides applied.
pub fn default_config() -> Result<ScoringConfig> {
    let cfg: ScoringConfig = toml::from_str(EMBEDDED_DEFAULTS)
        .map_err(|e| ScoreError::ConfigParse(format!("embedded defaults: {e}")))?;
    Ok(cfg)
}

pub fn load_config(root: &Path) -> Result<ScoringConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Loads and validates the layered configuration into a scoring model.
pub fn load_model(root: &Path) -> Result<ScoringModel> {
    let cfg = load_config(root)?;
    ScoringModel::from_config(&cfg)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<ScoringConfig> {
    if !root.exists() {
        return Err(ScoreError::PathNotFound(root.display().to_string()));
    }

    let mut merged: Value = toml::from_str(EMBEDDED_DEFAULTS)
        .map_err(|e| ScoreError::ConfigParse(format!("embedded defaults: {e}")))?;
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: ScoringConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScoreError::ConfigParse(e.to_string()))?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    debug!(path = %path.display(), "merged config layer");
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
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
