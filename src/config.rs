use crate::error::{NicenessError, Result};
use crate::types::config::NicenessConfig;
use std::path::{Path, PathBuf};
use toml::map::{Entry, Map};
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "niceness.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".niceness/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/niceness/config.toml";

/// Load the layered configuration: global (`~/.config/niceness/config.toml`)
/// overlaid by the project file (`--config PATH` or `./niceness.toml`),
/// overlaid by `.niceness/local.toml` next to the project file. With no
/// files at all the built-in defaults apply.
pub fn load_config(explicit: Option<&Path>) -> Result<NicenessConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_layered(explicit, global.as_deref())
}

pub(crate) fn load_config_layered(
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<NicenessConfig> {
    let project = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(NicenessError::ConfigNotFound(path.display().to_string()));
            }
            Some(path.to_path_buf())
        }
        None => {
            let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
            candidate.exists().then_some(candidate)
        }
    };

    let mut layers = Vec::new();
    if let Some(path) = global_path {
        layers.push(path.to_path_buf());
    }
    if let Some(path) = &project {
        layers.push(path.clone());
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        layers.push(base.join(DEFAULT_LOCAL_FILE));
    }

    let mut merged = Value::Table(Map::new());
    for path in &layers {
        if !path.exists() {
            continue;
        }
        tracing::debug!(path = %path.display(), "merging config layer");
        merge_value(&mut merged, read_toml_value(path)?);
    }

    let cfg: NicenessConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| NicenessError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| NicenessError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_value(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.entry(key) {
                    Entry::Occupied(mut slot) => merge_value(slot.get_mut(), value),
                    Entry::Vacant(slot) => {
                        slot.insert(value);
                    }
                }
            }
        }
        // arrays and scalars replace wholesale, so a local override can
        // redefine the full signal list rather than splicing into it
        (slot, value) => {
            *slot = value;
        }
    }
}
