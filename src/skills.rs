use iced::{Column, Container, Element, Length, ProgressBar, Row, Text};

use crate::content::SkillGroup;
use crate::style::{self, HIGHLIGHT};
use crate::theme::Theme;
use crate::Message;

const COLUMNS: usize = 3;

pub fn level(value: u8) -> f32 {
    f32::from(value.min(100)) / 100.0
}

pub fn view<'a>(groups: &[SkillGroup], theme: Theme) -> Element<'a, Message> {
    let colors = style::colors(theme);

    let heading = Row::new()
        .spacing(10)
        .push(Text::new("Technical").size(40))
        .push(Text::new("Skills").size(40).color(HIGHLIGHT));

    let grid = groups.chunks(COLUMNS).fold(Column::new().spacing(20), |grid, chunk| {
        let row = chunk.iter().fold(Row::new().spacing(20), |row, group| {
            let card = group.skills.iter().fold(
                Column::new()
                    .spacing(10)
                    .push(Text::new(group.title.clone()).size(22).color(group.color.0)),
                |card, skill| {
                    card.push(
                        Row::new()
                            .push(Text::new(skill.name.clone()).width(Length::Fill))
                            .push(Text::new(format!("{}%", skill.level)).color(colors.muted)),
                    )
                    .push(
                        ProgressBar::new(0.0..=1.0, level(skill.level))
                            .height(Length::Units(6))
                            .style(style::Level {
                                theme,
                                color: group.color.0,
                            }),
                    )
                },
            );
            row.push(
                Container::new(card)
                    .padding(20)
                    .width(Length::FillPortion(1))
                    .style(style::Card(theme)),
            )
        });
        grid.push(row)
    });

    Column::new()
        .spacing(30)
        .padding(40)
        .push(heading)
        .push(grid)
        .into()
}
