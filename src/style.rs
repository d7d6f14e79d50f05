use iced::{button, container, progress_bar, text_input, Background, Color, Vector};

use crate::theme::Theme;

pub const HIGHLIGHT: Color = Color {
    r: 0.914,
    g: 0.271,
    b: 0.376,
    a: 1.0,
};

pub const ACCENT: Color = Color {
    r: 0.059,
    g: 0.204,
    b: 0.376,
    a: 1.0,
};

/// Base colors every themed widget draws from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Colors {
    pub background: Color,
    pub card: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub field: Color,
}

pub fn colors(theme: Theme) -> Colors {
    match theme {
        Theme::Dark => Colors {
            background: Color::from_rgb8(0x1a, 0x1a, 0x2e),
            card: Color::from_rgba8(0x11, 0x18, 0x27, 0.5),
            text: Color::WHITE,
            muted: Color::from_rgb8(0x9c, 0xa3, 0xaf),
            border: Color::from_rgb8(0x37, 0x41, 0x51),
            field: Color::from_rgb8(0x1f, 0x29, 0x37),
        },
        Theme::Light => Colors {
            background: Color::from_rgb8(0xe0, 0xe7, 0xff),
            card: Color::from_rgba8(0xff, 0xff, 0xff, 0.8),
            text: Color::from_rgb8(0x1f, 0x29, 0x37),
            muted: Color::from_rgb8(0x4b, 0x55, 0x63),
            border: Color::from_rgb8(0xd1, 0xd5, 0xdb),
            field: Color::WHITE,
        },
    }
}

pub struct Page(pub Theme);

impl container::StyleSheet for Page {
    fn style(&self) -> container::Style {
        let colors = colors(self.0);
        container::Style {
            text_color: Some(colors.text),
            background: Some(Background::Color(colors.background)),
            ..container::Style::default()
        }
    }
}

pub struct Splash;

impl container::StyleSheet for Splash {
    fn style(&self) -> container::Style {
        container::Style {
            text_color: Some(Color::WHITE),
            background: Some(Background::Color(Color::from_rgb8(0x0f, 0x0f, 0x1a))),
            ..container::Style::default()
        }
    }
}

pub struct Card(pub Theme);

impl container::StyleSheet for Card {
    fn style(&self) -> container::Style {
        let colors = colors(self.0);
        container::Style {
            text_color: Some(colors.text),
            background: Some(Background::Color(colors.card)),
            border_radius: 16.0,
            border_width: 1.0,
            border_color: colors.border,
        }
    }
}

/// Footer and header bars.
pub struct Bar(pub Theme);

impl container::StyleSheet for Bar {
    fn style(&self) -> container::Style {
        let colors = colors(self.0);
        container::Style {
            text_color: Some(colors.text),
            background: Some(Background::Color(colors.card)),
            border_width: 1.0,
            border_color: colors.border,
            ..container::Style::default()
        }
    }
}

/// Small colored tag, used for technologies and the featured marker.
pub struct Tag(pub Color);

impl container::StyleSheet for Tag {
    fn style(&self) -> container::Style {
        container::Style {
            text_color: Some(Color::WHITE),
            background: Some(Background::Color(self.0)),
            border_radius: 10.0,
            ..container::Style::default()
        }
    }
}

pub struct Toggle(pub Theme);

impl button::StyleSheet for Toggle {
    fn active(&self) -> button::Style {
        let gray = Color::from_rgb8(0x1f, 0x29, 0x37);
        let yellow = Color::from_rgb8(0xfa, 0xcc, 0x15);
        let (background, text_color) = match self.0 {
            Theme::Dark => (gray, yellow),
            Theme::Light => (yellow, gray),
        };
        button::Style {
            background: Some(Background::Color(background)),
            border_radius: 20.0,
            text_color,
            ..button::Style::default()
        }
    }

    fn hovered(&self) -> button::Style {
        button::Style {
            shadow_offset: Vector::new(0.0, 2.0),
            ..self.active()
        }
    }
}

/// Filter pills and accordion headers; `selected` fills them in.
pub struct Pill {
    pub theme: Theme,
    pub selected: bool,
}

impl button::StyleSheet for Pill {
    fn active(&self) -> button::Style {
        let colors = colors(self.theme);
        if self.selected {
            button::Style {
                background: Some(Background::Color(HIGHLIGHT)),
                border_radius: 20.0,
                text_color: Color::WHITE,
                ..button::Style::default()
            }
        } else {
            button::Style {
                background: Some(Background::Color(colors.card)),
                border_radius: 20.0,
                border_width: 1.0,
                border_color: colors.border,
                text_color: colors.text,
                ..button::Style::default()
            }
        }
    }

    fn hovered(&self) -> button::Style {
        button::Style {
            border_color: HIGHLIGHT,
            ..self.active()
        }
    }
}

pub struct Primary;

impl button::StyleSheet for Primary {
    fn active(&self) -> button::Style {
        button::Style {
            background: Some(Background::Color(HIGHLIGHT)),
            border_radius: 8.0,
            text_color: Color::WHITE,
            ..button::Style::default()
        }
    }

    fn hovered(&self) -> button::Style {
        button::Style {
            background: Some(Background::Color(ACCENT)),
            shadow_offset: Vector::new(0.0, 2.0),
            ..self.active()
        }
    }
}

pub struct Input(pub Theme);

impl text_input::StyleSheet for Input {
    fn active(&self) -> text_input::Style {
        let colors = colors(self.0);
        text_input::Style {
            background: Background::Color(colors.field),
            border_radius: 8.0,
            border_width: 1.0,
            border_color: colors.border,
        }
    }

    fn focused(&self) -> text_input::Style {
        text_input::Style {
            border_width: 2.0,
            border_color: HIGHLIGHT,
            ..self.active()
        }
    }

    fn placeholder_color(&self) -> Color {
        colors(self.0).muted
    }

    fn value_color(&self) -> Color {
        colors(self.0).text
    }

    fn selection_color(&self) -> Color {
        Color {
            a: 0.5,
            ..HIGHLIGHT
        }
    }
}

/// Progress bars: the splash loader and skill levels.
pub struct Level {
    pub theme: Theme,
    pub color: Color,
}

impl progress_bar::StyleSheet for Level {
    fn style(&self) -> progress_bar::Style {
        progress_bar::Style {
            background: Background::Color(colors(self.theme).border),
            bar: Background::Color(self.color),
            border_radius: 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::button::StyleSheet as _;
    use iced::container::StyleSheet as _;
    use iced::text_input::StyleSheet as _;

    #[test]
    fn every_themed_surface_changes_with_the_theme() {
        let (dark, light) = (Theme::Dark, Theme::Light);

        assert_ne!(Page(dark).style().background, Page(light).style().background);
        assert_ne!(Page(dark).style().text_color, Page(light).style().text_color);
        assert_ne!(Card(dark).style().background, Card(light).style().background);
        assert_ne!(Bar(dark).style().border_color, Bar(light).style().border_color);
        assert_ne!(Toggle(dark).active().background, Toggle(light).active().background);
        assert_ne!(Toggle(dark).active().text_color, Toggle(light).active().text_color);
        assert_ne!(Input(dark).value_color(), Input(light).value_color());

        let unselected = |theme| Pill {
            theme,
            selected: false,
        };
        assert_ne!(unselected(dark).active().text_color, unselected(light).active().text_color);
    }

    #[test]
    fn splash_ignores_the_theme() {
        assert_eq!(Splash.style().text_color, Some(Color::WHITE));
    }

    #[test]
    fn toggle_swaps_its_colors() {
        let dark = Toggle(Theme::Dark).active();
        let light = Toggle(Theme::Light).active();
        assert_eq!(dark.background, Some(Background::Color(light.text_color)));
        assert_eq!(light.background, Some(Background::Color(dark.text_color)));
    }
}
