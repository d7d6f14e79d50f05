use iced::{button, Button, Column, Container, Element, Length, Row, Text};

use crate::content::{Category, Project};
use crate::style::{self, HIGHLIGHT};
use crate::theme::Theme;
use crate::Message;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Only(Category),
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

impl Filter {
    pub const ALL: [Filter; 4] = [
        Filter::All,
        Filter::Only(Category::Mobile),
        Filter::Only(Category::Web),
        Filter::Only(Category::Design),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All Projects",
            Filter::Only(Category::Mobile) => "Mobile",
            Filter::Only(Category::Web) => "Web",
            Filter::Only(Category::Design) => "UI/UX",
        }
    }

    pub fn accepts(self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => project.category == category,
        }
    }
}

#[derive(Default)]
pub struct Projects {
    filter: Filter,
    buttons: [button::State; 4],
}

impl Projects {
    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn select(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn visible<'p>(&self, projects: &'p [Project]) -> Vec<&'p Project> {
        projects
            .iter()
            .filter(|project| self.filter.accepts(project))
            .collect()
    }

    pub fn view<'a>(&'a mut self, projects: &[Project], theme: Theme) -> Element<'a, Message> {
        let colors = style::colors(theme);
        let current = self.filter;

        let heading = Row::new()
            .spacing(10)
            .push(Text::new("Featured").size(40))
            .push(Text::new("Projects").size(40).color(HIGHLIGHT));

        let cards = self
            .visible(projects)
            .into_iter()
            .fold(Column::new().spacing(16), |column, project| {
                let mut title = Row::new()
                    .spacing(12)
                    .push(Text::new(project.title.clone()).size(24).width(Length::Fill));
                if project.featured {
                    title = title.push(
                        Container::new(Text::new("Featured").size(12))
                            .padding(6)
                            .style(style::Tag(HIGHLIGHT)),
                    );
                }

                let technologies = project.technologies.iter().fold(
                    Row::new().spacing(8),
                    |row, technology| {
                        row.push(
                            Container::new(Text::new(technology.clone()).size(14))
                                .padding(6)
                                .style(style::Tag(style::ACCENT)),
                        )
                    },
                );

                column.push(
                    Container::new(
                        Column::new()
                            .spacing(10)
                            .push(title)
                            .push(Text::new(project.description.clone()).color(colors.muted))
                            .push(technologies),
                    )
                    .padding(20)
                    .width(Length::Fill)
                    .style(style::Card(theme)),
                )
            });

        let filters = self.buttons.iter_mut().zip(Filter::ALL.iter()).fold(
            Row::new().spacing(12),
            |row, (state, &filter)| {
                row.push(
                    Button::new(state, Text::new(filter.label()))
                        .padding(10)
                        .on_press(Message::FilterChanged(filter))
                        .style(style::Pill {
                            theme,
                            selected: filter == current,
                        }),
                )
            },
        );

        Column::new()
            .spacing(30)
            .padding(40)
            .push(heading)
            .push(
                Text::new(
                    "A collection of projects that showcase my expertise in \
                     software engineering and design",
                )
                .color(colors.muted),
            )
            .push(filters)
            .push(cards)
            .into()
    }
}
