pub(crate) fn default_theme() -> crate::config::ThemeMode {
    crate::config::ThemeMode::Night
}

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_primary_font_size() -> u32 {
    72
}

pub(crate) fn default_secondary_font_size() -> u32 {
    44
}

pub(crate) fn default_day_from() -> u32 {
    1
}

pub(crate) fn default_day_to() -> u32 {
    1
}

pub(crate) fn default_secondary_reveal_secs() -> f32 {
    2.5
}

pub(crate) fn default_item_advance_secs() -> f32 {
    5.5
}

pub(crate) fn default_voice_english() -> String {
    "/usr/share/piper-voices/en/en_US/ryan/high/en_US-ryan-high.onnx".to_string()
}

pub(crate) fn default_voice_indonesian() -> String {
    "/usr/share/piper-voices/id/id_ID/news/medium/id_ID-news-medium.onnx".to_string()
}

pub(crate) fn default_espeak_data_path() -> String {
    "/usr/share".to_string()
}

pub(crate) fn default_narration_speed() -> f32 {
    0.9
}

pub(crate) fn default_narration_volume() -> f32 {
    1.0
}

pub(crate) fn default_narration_cache_dir() -> String {
    ".cache/narration".to_string()
}

pub(crate) fn default_show_settings() -> bool {
    true
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_tap() -> String {
    "enter".to_string()
}

pub(crate) fn default_key_toggle_play_pause() -> String {
    "space".to_string()
}

pub(crate) fn default_key_reset() -> String {
    "r".to_string()
}

pub(crate) fn default_key_toggle_focus() -> String {
    "d".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
