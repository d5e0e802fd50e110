use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::config::save_config;
use hafalan_core::Mode;
use iced::{Event, Task, event, keyboard, window};
use tracing::debug;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveConfig => {
                save_config(&self.config_path, &self.config);
                Task::none()
            }
            Effect::Speak { text, language } => {
                self.narration.speak(text, language);
                Task::none()
            }
            Effect::StopNarration => {
                self.narration.stop();
                Task::none()
            }
            Effect::ScheduleTimer { token, kind, delay } => Task::perform(
                async move {
                    tokio::time::sleep(delay).await;
                },
                move |_| Message::TimerElapsed { token, kind },
            ),
            Effect::SyncWakeLock => {
                let hold = self.session.mode() == Mode::Automatic && self.session.is_playing();
                self.wake.sync(hold);
                Task::none()
            }
            Effect::QuitSafely => {
                debug!("Safe quit requested");
                save_config(&self.config_path, &self.config);
                self.narration.stop();
                self.wake.release();
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Window(window::Event::Moved(position)) => Some(Message::WindowMoved {
            x: position.x,
            y: position.y,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
