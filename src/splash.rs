use std::time::Duration;

use iced::{Align, Column, Container, Element, Length, ProgressBar, Text};

use crate::style::{self, HIGHLIGHT};
use crate::theme::Theme;
use crate::Message;

const BAR_DELAY: Duration = Duration::from_millis(500);
const BAR_FILL: Duration = Duration::from_millis(2000);

/// Loader fill for the time since mount, in `[0, 1]`.
pub fn progress(elapsed: Duration) -> f32 {
    if elapsed <= BAR_DELAY {
        return 0.0;
    }
    ((elapsed - BAR_DELAY).as_secs_f32() / BAR_FILL.as_secs_f32()).min(1.0)
}

pub fn view<'a>(name: &str, elapsed: Duration) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(12)
        .align_items(Align::Center)
        .push(Text::new("</>").size(64).color(HIGHLIGHT))
        .push(Text::new(name).size(28))
        .push(Text::new("Loading Portfolio...").color(style::colors(Theme::Dark).muted))
        .push(
            ProgressBar::new(0.0..=1.0, progress(elapsed))
                .width(Length::Units(200))
                .height(Length::Units(4))
                .style(style::Level {
                    theme: Theme::Dark,
                    color: HIGHLIGHT,
                }),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .style(style::Splash)
        .into()
}
