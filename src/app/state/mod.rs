mod constants;

use crate::config::AppConfig;
use crate::narration::{NarrationService, NarrationSettings};
use crate::vocab::JsonVocabulary;
use crate::wake::ScreenWake;
use hafalan_core::{PlaybackSession, QueueSpec};
use iced::Task;
use std::path::PathBuf;

use super::messages::Message;

pub(crate) use constants::*;

/// Core application state: the playback engine plus its collaborators.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) config_path: PathBuf,
    pub(super) vocabulary: JsonVocabulary,
    pub(super) session: PlaybackSession,
    pub(super) narration: NarrationService,
    pub(super) wake: ScreenWake,
    pub(super) focus_mode: bool,
    pub(super) day_from_input: String,
    pub(super) day_to_input: String,
}

impl App {
    pub(crate) fn bootstrap(
        vocabulary: JsonVocabulary,
        config: AppConfig,
    ) -> (Self, Task<Message>) {
        let narration = NarrationService::spawn(NarrationSettings::from_config(&config));
        let session = PlaybackSession::new(config.mode, config.direction, config.playback_timing());
        let mut app = App {
            day_from_input: config.day_from.to_string(),
            day_to_input: config.day_to.to_string(),
            config,
            config_path: PathBuf::from("conf/config.toml"),
            vocabulary,
            session,
            narration,
            wake: ScreenWake::default(),
            focus_mode: false,
        };
        // Nothing is speaking before the first frame, so the reset effects
        // of the initial rebuild can be dropped.
        let queue = app.build_queue();
        let _ = app.session.rebuild(queue, app.config.direction);
        (app, Task::none())
    }

    /// Assemble a queue from the current range/shuffle/direction settings.
    pub(super) fn build_queue(&self) -> Vec<hafalan_core::VocabItem> {
        let spec = QueueSpec {
            day_from: self.config.day_from,
            day_to: self.config.day_to,
            direction: self.config.direction,
            shuffle: self.config.shuffle,
        };
        hafalan_core::build_queue(&self.vocabulary, &spec, &mut rand::rng())
    }

    /// Parse a day-range input field; out-of-range values are clamped and
    /// anything unparsable is rejected.
    pub(super) fn parse_day(raw: &str) -> Option<u32> {
        raw.trim()
            .parse::<u32>()
            .ok()
            .map(|day| day.clamp(MIN_DAY, MAX_DAY))
    }
}
