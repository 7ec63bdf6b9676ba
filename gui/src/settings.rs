//! Startup configuration lookup.

use std::path::{Path, PathBuf};

use elist_core::types::AppConfig;

/// Config ready for use plus the problems found while loading it.
///
/// Loading happens before the subscriber exists, so problems are collected
/// here and logged by `main` once logging is up.
pub struct LoadedConfig {
    pub config: AppConfig,
    pub warnings: Vec<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| AppConfig::path(&dir))
}

pub fn load() -> LoadedConfig {
    match config_path() {
        Some(path) => load_from(&path),
        None => LoadedConfig {
            config: AppConfig::default(),
            warnings: vec!["no config directory on this platform, using defaults".to_string()],
        },
    }
}

pub fn load_from(path: &Path) -> LoadedConfig {
    let mut warnings = Vec::new();

    let config = match AppConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            warnings.push(format!(
                "failed to load {}: {e}, using defaults",
                path.display()
            ));
            AppConfig::default()
        }
    };

    for problem in config.validate() {
        warnings.push(format!("{problem}, using default"));
    }

    LoadedConfig {
        config: config.with_defaults_for_invalid(),
        warnings,
    }
}
