use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use tracker_core::Variant;

pub const DEFAULT_CONFIG_FILE: &str = "gps_tracker.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `None` means ask on startup.
    pub variant: Option<Variant>,
    pub log_filter: String,
    pub summary_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: None,
            log_filter: "warn".into(),
            summary_json: false,
        }
    }
}

/// Settings plus the values that were present but unusable. Logging is not
/// up yet while loading, so the caller reports these.
#[derive(Debug, Default)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub ignored: Vec<String>,
}

/// Defaults, then `path` (or `gps_tracker.toml` in the working directory when
/// present), then `APP__*` environment variables.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<LoadedSettings> {
    let file_cfg = read_file_config(path)?;
    Ok(resolve_settings(&file_cfg, |key| std::env::var(key).ok()))
}

fn read_file_config(path: Option<&Path>) -> anyhow::Result<HashMap<String, String>> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if !required && err.kind() == io::ErrorKind::NotFound => {
            return Ok(HashMap::new())
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    };

    parse_file_config(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))
}

fn parse_file_config(raw: &str) -> anyhow::Result<HashMap<String, String>> {
    let table: toml::Table = toml::from_str(raw)?;
    Ok(table
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                toml::Value::String(s) => s,
                other => other.to_string(),
            };
            (key, value)
        })
        .collect())
}

fn resolve_settings(
    file_cfg: &HashMap<String, String>,
    env: impl Fn(&str) -> Option<String>,
) -> LoadedSettings {
    let mut loaded = LoadedSettings::default();

    let sources = [
        ("variant", file_cfg.get("variant").cloned(), "config file"),
        ("variant", env("APP__VARIANT"), "APP__VARIANT"),
        ("log_filter", file_cfg.get("log_filter").cloned(), "config file"),
        ("log_filter", env("APP__LOG_FILTER"), "APP__LOG_FILTER"),
        ("summary_json", file_cfg.get("summary_json").cloned(), "config file"),
        ("summary_json", env("APP__SUMMARY_JSON"), "APP__SUMMARY_JSON"),
    ];

    for (key, value, source) in sources {
        let Some(value) = value else {
            continue;
        };
        match key {
            "variant" => match value.parse::<Variant>() {
                Ok(variant) => loaded.settings.variant = Some(variant),
                Err(err) => loaded.ignored.push(format!("{source}: {err}")),
            },
            "log_filter" => {
                if value.trim().is_empty() {
                    loaded.ignored.push(format!("{source}: empty log filter"));
                } else {
                    loaded.settings.log_filter = value.trim().to_string();
                }
            }
            _ => match parse_flag(&value) {
                Some(flag) => loaded.settings.summary_json = flag,
                None => loaded
                    .ignored
                    .push(format!("{source}: '{value}' is not a boolean")),
            },
        }
    }

    loaded
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
