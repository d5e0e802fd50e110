use super::messages::Message;
use super::state::App;
use crate::config::ThemeMode;
use hafalan_core::{Direction, Mode};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, checkbox, column, container, horizontal_space, mouse_area, pick_list, progress_bar,
    row, text, text_input,
};
use iced::{Element, Length};

const DIRECTIONS: [Direction; 2] = [Direction::EnglishFirst, Direction::IndonesianFirst];
const MODES: [Mode; 2] = [Mode::Manual, Mode::Automatic];

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let mut layout = column![].width(Length::Fill).height(Length::Fill);

        if !self.focus_mode {
            layout = layout.push(self.settings_panel());
            if let Some(progress) = self.progress_row() {
                layout = layout.push(progress);
            }
        }
        layout = layout.push(self.drill_surface());
        layout = layout.push(self.footer());

        layout.into()
    }

    fn settings_panel(&self) -> Element<'_, Message> {
        let theme_label = if matches!(self.config.theme, ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };
        let settings_label = if self.config.show_settings {
            "Hide Settings"
        } else {
            "Show Settings"
        };
        let header = row![
            text("Hafalan").size(20),
            horizontal_space(),
            button(theme_label).on_press(Message::ToggleTheme),
            button(settings_label).on_press(Message::ToggleSettings),
        ]
        .spacing(10)
        .align_y(Vertical::Center);

        let mut panel = column![header].spacing(12).padding(16).width(Length::Fill);

        if self.config.show_settings {
            let selectors = row![
                column![
                    text("Direction").size(14),
                    pick_list(
                        DIRECTIONS,
                        Some(self.config.direction),
                        Message::DirectionSelected
                    ),
                ]
                .spacing(4)
                .width(Length::FillPortion(1)),
                column![
                    text("Mode").size(14),
                    pick_list(MODES, Some(self.config.mode), Message::ModeSelected),
                ]
                .spacing(4)
                .width(Length::FillPortion(1)),
            ]
            .spacing(12);

            let shuffle = checkbox(
                "Shuffle (every word appears once)",
                self.config.shuffle,
            )
            .on_toggle(Message::ShuffleToggled);

            let range = row![
                text("From day"),
                text_input("1", &self.day_from_input)
                    .on_input(Message::DayFromChanged)
                    .width(Length::Fixed(70.0)),
                text("to"),
                text_input("1", &self.day_to_input)
                    .on_input(Message::DayToChanged)
                    .width(Length::Fixed(70.0)),
                text(format!("({} words)", self.session.len())).size(14),
            ]
            .spacing(10)
            .align_y(Vertical::Center);

            panel = panel.push(selectors).push(shuffle).push(range);

            if self.config.mode == Mode::Automatic {
                let play_label = if self.session.is_playing() {
                    "Pause"
                } else {
                    "Play"
                };
                let controls = row![
                    button(play_label)
                        .on_press(Message::TogglePlayPause)
                        .width(Length::FillPortion(3)),
                    button("Reset")
                        .on_press(Message::ResetPlayback)
                        .width(Length::FillPortion(1)),
                ]
                .spacing(10);
                panel = panel.push(controls);
            }
        }

        panel.into()
    }

    fn progress_row(&self) -> Option<Element<'_, Message>> {
        let total = self.session.len();
        if total == 0 || self.session.current_item().is_none() {
            return None;
        }
        let position = self.session.current_index() + 1;
        let fraction = position as f32 / total as f32;
        Some(
            row![
                text(format!("{position} / {total}")).size(14),
                progress_bar(0.0..=1.0, fraction).height(Length::Fixed(8.0)),
                text(format!("{}%", (fraction * 100.0).round() as u32)).size(14),
            ]
            .spacing(12)
            .padding([4, 16])
            .align_y(Vertical::Center)
            .into(),
        )
    }

    fn drill_surface(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = if let Some(item) = self.session.current_item() {
            let mut lines = column![
                text(item.primary.clone()).size(self.config.primary_font_size as f32)
            ]
            .spacing(24)
            .align_x(Horizontal::Center);
            if self.session.show_secondary() {
                lines = lines.push(
                    text(item.secondary.clone()).size(self.config.secondary_font_size as f32),
                );
            }
            lines.into()
        } else {
            let prompt = if self.session.is_empty() {
                "No words in this day range"
            } else {
                match self.session.mode() {
                    Mode::Manual => "Tap the screen to start memorizing",
                    Mode::Automatic => "Set the range, then press Play",
                }
            };
            column![
                text(prompt).size(28),
                text(format!("{} words ready", self.session.len())).size(16),
            ]
            .spacing(12)
            .align_x(Horizontal::Center)
            .into()
        };

        let surface = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .padding(24);

        if self.session.mode() == Mode::Manual {
            mouse_area(surface).on_press(Message::ScreenTapped).into()
        } else {
            surface.into()
        }
    }

    fn footer(&self) -> Element<'_, Message> {
        let focus_label = if self.focus_mode { "Exit Focus" } else { "Focus" };
        let mut footer = row![button(focus_label).on_press(Message::ToggleFocusMode)]
            .spacing(12)
            .padding(8)
            .align_y(Vertical::Center);
        if !self.focus_mode
            && self.session.mode() == Mode::Manual
            && self.session.current_item().is_some()
        {
            footer = footer.push(text("Tap to continue").size(14));
        }
        footer.into()
    }
}
