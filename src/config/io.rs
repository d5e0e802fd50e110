use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load configuration from `path`, falling back to defaults when the file
/// is missing or unparsable. A broken config should never keep the drill
/// from launching.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(raw) => match parse_config(&raw) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), "Invalid configuration, using defaults: {err}");
                AppConfig::default()
            }
        },
        Err(err) => {
            debug!(path = %path.display(), "No configuration file, using defaults: {err}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(raw: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(raw).context("Parsing config TOML")?;
    Ok(tables.into())
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    let tables = ConfigTables::from(config);
    toml::to_string_pretty(&tables).context("Serializing config TOML")
}

/// Best-effort write-back; setting changes should survive restarts but a
/// read-only config dir must not disturb the session.
pub fn save_config(path: &Path, config: &AppConfig) {
    let serialized = match serialize_config(config) {
        Ok(serialized) => serialized,
        Err(err) => {
            warn!("Failed to serialize configuration: {err}");
            return;
        }
    };
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            warn!(path = %path.display(), "Failed to create config directory: {err}");
            return;
        }
    }
    if let Err(err) = fs::write(path, serialized) {
        warn!(path = %path.display(), "Failed to save configuration: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use hafalan_core::{Direction, Mode};

    #[test]
    fn empty_input_yields_defaults() {
        let config = parse_config("").expect("empty config parses");
        assert_eq!(config.day_from, 1);
        assert_eq!(config.mode, Mode::Manual);
        assert_eq!(config.theme, ThemeMode::Night);
    }

    #[test]
    fn partial_tables_fill_missing_fields_with_defaults() {
        let config = parse_config(
            r#"
            [playback]
            direction = "indonesian-first"
            mode = "automatic"
            day_to = 4

            [appearance]
            theme = "day"
            "#,
        )
        .expect("partial config parses");

        assert_eq!(config.direction, Direction::IndonesianFirst);
        assert_eq!(config.mode, Mode::Automatic);
        assert_eq!(config.day_from, 1);
        assert_eq!(config.day_to, 4);
        assert_eq!(config.theme, ThemeMode::Day);
        assert!((config.secondary_reveal_secs - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn serialized_config_round_trips() {
        let mut config = AppConfig::default();
        config.shuffle = true;
        config.day_from = 3;
        config.day_to = 9;
        config.key_safe_quit = "ctrl+q".to_string();

        let raw = serialize_config(&config).expect("config serializes");
        let parsed = parse_config(&raw).expect("serialized config parses");

        assert!(parsed.shuffle);
        assert_eq!(parsed.day_from, 3);
        assert_eq!(parsed.day_to, 9);
        assert_eq!(parsed.key_safe_quit, "ctrl+q");
    }
}
