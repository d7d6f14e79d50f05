use iced::{button, Align, Button, Column, Container, Element, Length, Row, Space, Text};

use crate::content::Experience;
use crate::style::{self, HIGHLIGHT};
use crate::theme::Theme;
use crate::Message;

/// Accordion over the work history: at most one entry open.
pub struct Work {
    expanded: Option<usize>,
    headers: Vec<button::State>,
}

impl Default for Work {
    fn default() -> Self {
        Work {
            expanded: Some(0),
            headers: Vec::new(),
        }
    }
}

impl Work {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Resets the accordion for a new list of `count` entries.
    pub fn reset(&mut self, count: usize) {
        self.headers.clear();
        self.headers.resize_with(count, Default::default);
        self.expanded = if count > 0 { Some(0) } else { None };
    }

    pub fn view<'a>(&'a mut self, experiences: &[Experience], theme: Theme) -> Element<'a, Message> {
        if self.headers.len() != experiences.len() {
            self.headers.resize_with(experiences.len(), Default::default);
        }
        let colors = style::colors(theme);
        let expanded = self.expanded;

        let heading = Row::new()
            .spacing(10)
            .push(Text::new("Work").size(40))
            .push(Text::new("Experience").size(40).color(HIGHLIGHT));

        let entries = self.headers.iter_mut().zip(experiences).enumerate().fold(
            Column::new().spacing(16),
            |column, (index, (state, job))| {
                let header = Row::new()
                    .align_items(Align::Center)
                    .spacing(16)
                    .push(
                        Container::new(Space::new(Length::Units(6), Length::Units(40)))
                            .style(style::Tag(job.color.0)),
                    )
                    .push(
                        Column::new()
                            .spacing(4)
                            .width(Length::Fill)
                            .push(Text::new(job.position.clone()).size(22))
                            .push(Text::new(job.company.clone()).color(job.color.0)),
                    )
                    .push(Text::new(job.period.clone()).size(14).color(colors.muted));

                let mut card = Column::new().spacing(12).push(
                    Button::new(state, header)
                        .width(Length::Fill)
                        .padding(8)
                        .on_press(Message::ExperienceToggled(index))
                        .style(style::Pill {
                            theme,
                            selected: false,
                        }),
                );

                if expanded == Some(index) {
                    card = card.push(Text::new(job.description.clone()).color(colors.muted));
                    card = job.achievements.iter().fold(card, |card, achievement| {
                        card.push(Text::new(format!("•  {}", achievement)))
                    });
                    card = card.push(job.technologies.iter().fold(
                        Row::new().spacing(8),
                        |row, technology| {
                            row.push(
                                Container::new(Text::new(technology.clone()).size(14))
                                    .padding(6)
                                    .style(style::Tag(job.color.0)),
                            )
                        },
                    ));
                }

                column.push(
                    Container::new(card)
                        .padding(16)
                        .width(Length::Fill)
                        .style(style::Card(theme)),
                )
            },
        );

        Column::new()
            .spacing(30)
            .padding(40)
            .push(heading)
            .push(
                Text::new("30 years of shaping digital experiences across leading tech companies")
                    .color(colors.muted),
            )
            .push(entries)
            .into()
    }
}
