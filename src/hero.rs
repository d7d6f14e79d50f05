use std::time::{Duration, Instant};

use iced::canvas::{self, Cursor, Frame, Geometry, Path};
use iced::{Color, HorizontalAlignment, Point, Rectangle, VerticalAlignment};

use crate::content::Profile;
use crate::field::{Parameters, ParticleField};
use crate::style::{self, HIGHLIGHT};
use crate::theme::Theme;
use crate::Message;

pub const ROLE_INTERVAL: Duration = Duration::from_millis(3000);

const CURSOR_RADIUS: f32 = 16.0;
const BIO_LINE: usize = 64;

/// Steps through a list of roles on a fixed interval.
#[derive(Debug, Default)]
pub struct RoleCycler {
    index: usize,
    since: Option<Instant>,
}

impl RoleCycler {
    pub fn start(&mut self, now: Instant) {
        self.index = 0;
        self.since = Some(now);
    }

    pub fn tick(&mut self, now: Instant, len: usize) {
        let mut since = match self.since {
            Some(since) if len > 0 => since,
            _ => return,
        };
        while now.saturating_duration_since(since) >= ROLE_INTERVAL {
            self.index = (self.index + 1) % len;
            since += ROLE_INTERVAL;
        }
        self.since = Some(since);
    }

    pub fn current<'r>(&self, roles: &'r [String]) -> Option<&'r str> {
        if roles.is_empty() {
            None
        } else {
            Some(roles[self.index % roles.len()].as_str())
        }
    }
}

/// Greedy word wrap at `width` characters.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[derive(Debug, Default)]
struct Headline {
    name: String,
    roles: Vec<String>,
    bio: Vec<String>,
    highlights: String,
}

impl Headline {
    fn from_profile(profile: &Profile) -> Self {
        Headline {
            name: profile.name.clone(),
            roles: profile.roles.clone(),
            bio: wrap_words(&profile.bio, BIO_LINE),
            highlights: profile.highlights.join("   ·   "),
        }
    }
}

/// Introductory section: the particle field with the headline on top.
#[derive(Default)]
pub struct Hero {
    pub field: ParticleField,
    theme: Theme,
    roles: RoleCycler,
    headline: Headline,
}

impl Hero {
    pub fn new(parameters: Parameters, profile: &Profile) -> Self {
        Hero {
            field: ParticleField::new(parameters),
            theme: Theme::default(),
            roles: RoleCycler::default(),
            headline: Headline::from_profile(profile),
        }
    }

    pub fn set_profile(&mut self, profile: &Profile) {
        self.headline = Headline::from_profile(profile);
    }

    /// Follows the page theme with the headline and the particle colors.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.field.recolor(theme);
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn start(&mut self, width: u32, height: u32, theme: Theme, now: Instant) {
        self.theme = theme;
        self.field.start(width, height, theme);
        self.roles.start(now);
    }

    pub fn stop(&mut self) {
        self.field.stop();
    }

    pub fn is_running(&self) -> bool {
        self.field.is_running()
    }

    pub fn tick(&mut self, now: Instant) {
        self.field.step();
        self.roles.tick(now, self.headline.roles.len());
    }

    pub fn role(&self) -> Option<&str> {
        self.roles.current(&self.headline.roles)
    }

    fn draw_headline(&self, frame: &mut Frame) {
        let colors = style::colors(self.theme);
        let center = frame.center();
        let text = canvas::Text {
            color: colors.text,
            horizontal_alignment: HorizontalAlignment::Center,
            vertical_alignment: VerticalAlignment::Center,
            ..Default::default()
        };

        frame.fill_text(canvas::Text {
            content: self.headline.name.clone(),
            position: Point::new(center.x, center.y - 120.0),
            size: 64.0,
            ..text
        });

        if let Some(role) = self.role() {
            frame.fill_text(canvas::Text {
                content: role.to_string(),
                position: Point::new(center.x, center.y - 50.0),
                color: HIGHLIGHT,
                size: 30.0,
                ..text
            });
        }

        for (line, content) in self.headline.bio.iter().enumerate() {
            frame.fill_text(canvas::Text {
                content: content.clone(),
                position: Point::new(center.x, center.y + 10.0 + line as f32 * 28.0),
                size: 20.0,
                ..text
            });
        }

        let below_bio = center.y + 40.0 + self.headline.bio.len() as f32 * 28.0;
        frame.fill_text(canvas::Text {
            content: self.headline.highlights.clone(),
            position: Point::new(center.x, below_bio),
            color: colors.muted,
            size: 18.0,
            ..text
        });
    }
}

impl canvas::Program<Message> for Hero {
    fn draw(&self, bounds: Rectangle, cursor: Cursor) -> Vec<Geometry> {
        let mut frame = Frame::new(bounds.size());

        self.field.draw(&mut frame);

        if let Some(position) = cursor.position_in(&bounds) {
            let halo = Path::circle(position, CURSOR_RADIUS);
            frame.fill(&halo, Color { a: 0.5, ..HIGHLIGHT });
        }

        self.draw_headline(&mut frame);

        vec![frame.into_geometry()]
    }
}
