use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use hafalan_core::{Direction, Mode};
use serde::Deserialize;

/// On-disk layout: the flat `AppConfig` is grouped into TOML tables so the
/// file stays readable by hand.
#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    playback: PlaybackConfig,
    #[serde(default)]
    narration: NarrationConfig,
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    ui: UiConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct PlaybackConfig {
    #[serde(default)]
    direction: Direction,
    #[serde(default)]
    mode: Mode,
    #[serde(default)]
    shuffle: bool,
    #[serde(default = "defaults::default_day_from")]
    day_from: u32,
    #[serde(default = "defaults::default_day_to")]
    day_to: u32,
    #[serde(default = "defaults::default_secondary_reveal_secs")]
    secondary_reveal_secs: f32,
    #[serde(default = "defaults::default_item_advance_secs")]
    item_advance_secs: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            mode: Mode::default(),
            shuffle: false,
            day_from: defaults::default_day_from(),
            day_to: defaults::default_day_to(),
            secondary_reveal_secs: defaults::default_secondary_reveal_secs(),
            item_advance_secs: defaults::default_item_advance_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct NarrationConfig {
    #[serde(default = "defaults::default_voice_english")]
    voice_english: String,
    #[serde(default = "defaults::default_voice_indonesian")]
    voice_indonesian: String,
    #[serde(default = "defaults::default_espeak_data_path")]
    espeak_data_path: String,
    #[serde(default = "defaults::default_narration_speed")]
    speed: f32,
    #[serde(default = "defaults::default_narration_volume")]
    volume: f32,
    #[serde(default = "defaults::default_narration_cache_dir")]
    cache_dir: String,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            voice_english: defaults::default_voice_english(),
            voice_indonesian: defaults::default_voice_indonesian(),
            espeak_data_path: defaults::default_espeak_data_path(),
            speed: defaults::default_narration_speed(),
            volume: defaults::default_narration_volume(),
            cache_dir: defaults::default_narration_cache_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default = "defaults::default_theme")]
    theme: ThemeMode,
    #[serde(default = "defaults::default_primary_font_size")]
    primary_font_size: u32,
    #[serde(default = "defaults::default_secondary_font_size")]
    secondary_font_size: u32,
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
    #[serde(default)]
    window_pos_x: Option<f32>,
    #[serde(default)]
    window_pos_y: Option<f32>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: defaults::default_theme(),
            primary_font_size: defaults::default_primary_font_size(),
            secondary_font_size: defaults::default_secondary_font_size(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct UiConfig {
    #[serde(default = "defaults::default_show_settings")]
    show_settings: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_settings: defaults::default_show_settings(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_tap")]
    tap: String,
    #[serde(default = "defaults::default_key_toggle_play_pause")]
    toggle_play_pause: String,
    #[serde(default = "defaults::default_key_reset")]
    reset: String,
    #[serde(default = "defaults::default_key_toggle_focus")]
    toggle_focus: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            tap: defaults::default_key_tap(),
            toggle_play_pause: defaults::default_key_toggle_play_pause(),
            reset: defaults::default_key_reset(),
            toggle_focus: defaults::default_key_toggle_focus(),
            safe_quit: defaults::default_key_safe_quit(),
        }
    }
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            window_width: tables.appearance.window_width,
            window_height: tables.appearance.window_height,
            window_pos_x: tables.appearance.window_pos_x,
            window_pos_y: tables.appearance.window_pos_y,
            primary_font_size: tables.appearance.primary_font_size,
            secondary_font_size: tables.appearance.secondary_font_size,
            direction: tables.playback.direction,
            mode: tables.playback.mode,
            shuffle: tables.playback.shuffle,
            day_from: tables.playback.day_from,
            day_to: tables.playback.day_to,
            secondary_reveal_secs: tables.playback.secondary_reveal_secs,
            item_advance_secs: tables.playback.item_advance_secs,
            voice_english: tables.narration.voice_english,
            voice_indonesian: tables.narration.voice_indonesian,
            espeak_data_path: tables.narration.espeak_data_path,
            narration_speed: tables.narration.speed,
            narration_volume: tables.narration.volume,
            narration_cache_dir: tables.narration.cache_dir,
            show_settings: tables.ui.show_settings,
            log_level: tables.logging.log_level,
            key_tap: tables.keys.tap,
            key_toggle_play_pause: tables.keys.toggle_play_pause,
            key_reset: tables.keys.reset,
            key_toggle_focus: tables.keys.toggle_focus,
            key_safe_quit: tables.keys.safe_quit,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            playback: PlaybackConfig {
                direction: config.direction,
                mode: config.mode,
                shuffle: config.shuffle,
                day_from: config.day_from,
                day_to: config.day_to,
                secondary_reveal_secs: config.secondary_reveal_secs,
                item_advance_secs: config.item_advance_secs,
            },
            narration: NarrationConfig {
                voice_english: config.voice_english.clone(),
                voice_indonesian: config.voice_indonesian.clone(),
                espeak_data_path: config.espeak_data_path.clone(),
                speed: config.narration_speed,
                volume: config.narration_volume,
                cache_dir: config.narration_cache_dir.clone(),
            },
            appearance: AppearanceConfig {
                theme: config.theme,
                primary_font_size: config.primary_font_size,
                secondary_font_size: config.secondary_font_size,
                window_width: config.window_width,
                window_height: config.window_height,
                window_pos_x: config.window_pos_x,
                window_pos_y: config.window_pos_y,
            },
            ui: UiConfig {
                show_settings: config.show_settings,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            keys: KeysConfig {
                tap: config.key_tap.clone(),
                toggle_play_pause: config.key_toggle_play_pause.clone(),
                reset: config.key_reset.clone(),
                toggle_focus: config.key_toggle_focus.clone(),
                safe_quit: config.key_safe_quit.clone(),
            },
        }
    }
}
