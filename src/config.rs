use crate::types::FieldConfig;
use std::fs;
use std::path::PathBuf;

/// Returns the config file path: `<config dir>/starfall/config.json`.
/// The file is optional and read-only at runtime; edit it by hand to change
/// the layer composition.
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("starfall").join("config.json")
}

/// Load the layer composition from disk, returning the default three-layer
/// field if the file is missing or unreadable.
pub fn load_config() -> FieldConfig {
    let path = config_path();
    if !path.exists() {
        return FieldConfig::default();
    }
    match fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => FieldConfig::default(),
    }
}
