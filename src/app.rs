use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{debug, info};

use iced::button::{self, Button};
use iced::canvas::Canvas;
use iced::scrollable::{self, Scrollable};
use iced::time;
use iced::{
    Align, Application, Clipboard, Column, Command, Container, Element, Length, Row,
    Subscription, Text,
};
use iced_native::{window, Event};

use crate::{config, contact, field, skills, splash, style};
use crate::boot::{BootSequencer, BootState};
use crate::config::Config;
use crate::contact::ContactForm;
use crate::content::Profile;
use crate::hero::Hero;
use crate::projects::{Filter, Projects};
use crate::style::HIGHLIGHT;
use crate::theme::Theme;
use crate::work::Work;

pub const WINDOW_SIZE: (u32, u32) = (1024, 768);

#[derive(Clone, Debug)]
pub enum Message {
    Frame(Instant),
    EventOccurred(Event),
    ConfigLoaded(Config),
    ToggleTheme,
    ExperienceToggled(usize),
    FilterChanged(Filter),
    ContactEdited(contact::Field, String),
    ContactSubmitted,
}

#[derive(Default)]
struct Controls {
    toggle_button: button::State,
    scroll: scrollable::State,
}

pub struct Portfolio {
    boot: BootSequencer,
    theme: Theme,
    profile: Profile,
    viewport: (u32, u32),
    now: Instant,
    hero: Hero,
    work: Work,
    projects: Projects,
    contact: ContactForm,
    controls: Controls,
}

impl Portfolio {
    fn mounted(now: Instant) -> Self {
        let profile = Profile::default();
        let mut boot = BootSequencer::default();
        boot.start(now);

        let mut work = Work::default();
        work.reset(profile.experience.len());

        Self {
            boot,
            theme: Theme::default(),
            hero: Hero::new(field::Parameters::default(), &profile),
            profile,
            viewport: WINDOW_SIZE,
            now,
            work,
            projects: Projects::default(),
            contact: ContactForm::default(),
            controls: Controls::default(),
        }
    }

    /// Whether the frame clock and the window events are still needed.
    fn is_live(&self) -> bool {
        self.boot.is_pending() || self.hero.is_running()
    }

    fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.hero.field.parameters().frame_interval_ms.max(1))
    }

    fn handle(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Frame(now) => self.frame(now),
            Message::EventOccurred(Event::Window(window::Event::Resized { width, height })) => {
                self.viewport = (width, height);
                self.hero.field.resize(width, height);
            }
            Message::EventOccurred(_) => {}
            Message::ConfigLoaded(config) => {
                self.hero.field.set_parameters(config.field);
                self.hero.set_profile(&config.profile);
                self.work.reset(config.profile.experience.len());
                self.profile = config.profile;
            }
            Message::ToggleTheme => {
                self.theme.toggle();
                self.hero.set_theme(self.theme);
                info!("theme switched to {:?}", self.theme);
            }
            Message::ExperienceToggled(index) => self.work.toggle(index),
            Message::FilterChanged(filter) => self.projects.select(filter),
            Message::ContactEdited(field, value) => self.contact.edit(field, value),
            Message::ContactSubmitted => match self.contact.submit() {
                Ok(submission) => info!(
                    "contact request from {} <{}>: {}",
                    submission.name, submission.email, submission.subject
                ),
                Err(err) => debug!("contact form rejected: {}", err),
            },
        }
        Command::none()
    }

    fn frame(&mut self, now: Instant) {
        self.now = now;
        match self.boot.state() {
            BootState::Loading => {
                if self.boot.poll(now) {
                    info!("boot complete, mounting content");
                    let (width, height) = self.viewport;
                    self.hero.start(width, height, self.theme, now);
                }
            }
            BootState::Ready => self.hero.tick(now),
        }
    }

    fn header<'a>(
        state: &'a mut button::State,
        initials: &str,
        theme: Theme,
    ) -> Element<'a, Message> {
        let bar = Row::new()
            .align_items(Align::Center)
            .push(
                Text::new(initials)
                    .size(30)
                    .color(HIGHLIGHT)
                    .width(Length::Fill),
            )
            .push(
                Button::new(state, Text::new(theme.toggle_label()))
                    .padding(12)
                    .on_press(Message::ToggleTheme)
                    .style(style::Toggle(theme)),
            );

        Container::new(bar)
            .padding(16)
            .width(Length::Fill)
            .style(style::Bar(theme))
            .into()
    }

    fn footer<'a>(name: &str, theme: Theme) -> Element<'a, Message> {
        let muted = style::colors(theme).muted;
        let bar = Row::new()
            .align_items(Align::Center)
            .push(
                Row::new()
                    .spacing(6)
                    .width(Length::Fill)
                    .push(Text::new("Made with").color(muted))
                    .push(Text::new("love").color(HIGHLIGHT))
                    .push(Text::new(format!("by {}", name)).color(muted)),
            )
            .push(Text::new("© 2024 All rights reserved").color(muted));

        Container::new(bar)
            .padding(24)
            .width(Length::Fill)
            .style(style::Bar(theme))
            .into()
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        self.boot.stop();
        self.hero.stop();
    }
}

impl Application for Portfolio {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Flags = ();

    fn new(_flags: Self::Flags) -> (Self, Command<Message>) {
        (
            Self::mounted(Instant::now()),
            Command::perform(
                config::load(PathBuf::from(config::CONFIG_PATH)),
                Message::ConfigLoaded,
            ),
        )
    }

    fn title(&self) -> String {
        format!("{} | Portfolio", self.profile.name)
    }

    fn subscription(&self) -> Subscription<Message> {
        if !self.is_live() {
            return Subscription::none();
        }
        Subscription::batch(vec![
            time::every(self.frame_interval()).map(Message::Frame),
            iced_native::subscription::events().map(Message::EventOccurred),
        ])
    }

    fn update(&mut self, message: Self::Message, _clipboard: &mut Clipboard) -> Command<Message> {
        self.handle(message)
    }

    fn view(&mut self) -> Element<Message> {
        let theme = self.theme;

        if self.boot.state() == BootState::Loading {
            return splash::view(&self.profile.name, self.boot.elapsed(self.now));
        }

        let profile = &self.profile;
        let hero_height = self.viewport.1.min(u32::from(u16::MAX)) as u16;

        let content = Column::new()
            .width(Length::Fill)
            .push(Self::header(
                &mut self.controls.toggle_button,
                &profile.initials,
                theme,
            ))
            .push(
                Canvas::new(&mut self.hero)
                    .width(Length::Fill)
                    .height(Length::Units(hero_height)),
            )
            .push(self.work.view(&profile.experience, theme))
            .push(self.projects.view(&profile.projects, theme))
            .push(skills::view(&profile.skills, theme))
            .push(self.contact.view(&profile.contact, &profile.social, theme))
            .push(Self::footer(&profile.name, theme));

        let page = Scrollable::new(&mut self.controls.scroll)
            .width(Length::Fill)
            .height(Length::Fill)
            .push(content);

        Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::Page(theme))
            .into()
    }
}
