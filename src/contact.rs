use std::fmt;

use iced::{button, text_input, Button, Column, Container, Element, Length, Row, Text, TextInput};

use crate::content::{ContactMethod, SocialLink};
use crate::style::{self, HIGHLIGHT};
use crate::theme::Theme;
use crate::Message;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your full name",
            Field::Email => "your.email@example.com",
            Field::Subject => "What's this about?",
            Field::Message => "Tell me about your project...",
        }
    }
}

/// Why a submission was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    /// A required field is blank.
    Missing(Field),
    /// The email address is not of the form `local@domain.tld`.
    InvalidEmail,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Missing(field) => write!(f, "{} is required", field.label()),
            FormError::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

impl std::error::Error for FormError {}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Submission {
    fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        for &field in Field::ALL.iter() {
            if self.get(field).trim().is_empty() {
                return Err(FormError::Missing(field));
            }
        }
        if is_email(self.email.trim()) {
            Ok(())
        } else {
            Err(FormError::InvalidEmail)
        }
    }
}

fn is_email(address: &str) -> bool {
    let mut parts = address.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !address.contains(char::is_whitespace)
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Status {
    Editing,
    Rejected(FormError),
    Sent,
}

impl Default for Status {
    fn default() -> Self {
        Status::Editing
    }
}

#[derive(Default)]
struct Inputs {
    name: text_input::State,
    email: text_input::State,
    subject: text_input::State,
    message: text_input::State,
    send: button::State,
}

#[derive(Default)]
pub struct ContactForm {
    values: Submission,
    status: Status,
    inputs: Inputs,
}

impl ContactForm {
    pub fn values(&self) -> &Submission {
        &self.values
    }

    pub fn error(&self) -> Option<&FormError> {
        match &self.status {
            Status::Rejected(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_sent(&self) -> bool {
        self.status == Status::Sent
    }

    pub fn edit(&mut self, field: Field, value: String) {
        *self.values.get_mut(field) = value;
        self.status = Status::Editing;
    }

    /// Accepts the form when it validates. An accepted form is cleared; a
    /// rejected one keeps its input.
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        match self.values.validate() {
            Ok(()) => {
                self.status = Status::Sent;
                Ok(std::mem::take(&mut self.values))
            }
            Err(error) => {
                self.status = Status::Rejected(error.clone());
                Err(error)
            }
        }
    }

    pub fn view<'a>(
        &'a mut self,
        methods: &[ContactMethod],
        social: &[SocialLink],
        theme: Theme,
    ) -> Element<'a, Message> {
        let colors = style::colors(theme);

        let heading = Row::new()
            .spacing(10)
            .push(Text::new("Let's").size(40))
            .push(Text::new("Connect").size(40).color(HIGHLIGHT));

        let info = methods.iter().fold(
            Column::new()
                .spacing(12)
                .width(Length::FillPortion(1))
                .push(Text::new("Get in Touch").size(26))
                .push(
                    Text::new(
                        "I'm always interested in new opportunities and collaborations. \
                         Whether you have a project in mind or just want to say hello, \
                         I'd love to hear from you.",
                    )
                    .color(colors.muted),
                ),
            |column, method| {
                column.push(
                    Container::new(
                        Column::new()
                            .spacing(4)
                            .push(Text::new(method.label.clone()).size(18))
                            .push(Text::new(method.value.clone()).color(colors.muted)),
                    )
                    .padding(14)
                    .width(Length::Fill)
                    .style(style::Card(theme)),
                )
            },
        );

        let links = social.iter().fold(Row::new().spacing(10), |row, link| {
            row.push(
                Container::new(Text::new(link.label.clone()).size(14))
                    .padding(8)
                    .style(style::Tag(link.color.0)),
            )
        });
        let info = info.push(Text::new("Follow Me").size(18)).push(links);

        let Inputs {
            name,
            email,
            subject,
            message,
            send,
        } = &mut self.inputs;
        let values = &self.values;

        let input = |state: &'a mut text_input::State, field: Field| {
            Column::new()
                .spacing(6)
                .push(Text::new(field.label()).size(14))
                .push(
                    TextInput::new(state, field.placeholder(), values.get(field), move |value| {
                        Message::ContactEdited(field, value)
                    })
                    .padding(12)
                    .on_submit(Message::ContactSubmitted)
                    .style(style::Input(theme)),
                )
        };

        let mut form = Column::new()
            .spacing(16)
            .push(
                Row::new()
                    .spacing(16)
                    .push(input(name, Field::Name).width(Length::FillPortion(1)))
                    .push(input(email, Field::Email).width(Length::FillPortion(1))),
            )
            .push(input(subject, Field::Subject))
            .push(input(message, Field::Message))
            .push(
                Button::new(send, Text::new("Send Message"))
                    .padding(14)
                    .width(Length::Fill)
                    .on_press(Message::ContactSubmitted)
                    .style(style::Primary),
            );

        match &self.status {
            Status::Rejected(error) => {
                form = form.push(Text::new(error.to_string()).color(HIGHLIGHT));
            }
            Status::Sent => {
                form = form.push(
                    Text::new("Thanks! Your message is ready for delivery.").color(colors.muted),
                );
            }
            Status::Editing => {}
        }

        let form = Container::new(form)
            .padding(24)
            .width(Length::FillPortion(1))
            .style(style::Card(theme));

        Column::new()
            .spacing(30)
            .padding(40)
            .push(heading)
            .push(
                Text::new(
                    "Ready to bring your next project to life? \
                     Let's discuss how we can work together.",
                )
                .color(colors.muted),
            )
            .push(Row::new().spacing(40).push(info).push(form))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Ada Lovelace".into());
        form.edit(Field::Email, "ada@engine.org".into());
        form.edit(Field::Subject, "Collaboration".into());
        form.edit(Field::Message, "Shall we compute?".into());
        form
    }

    #[test]
    fn accepted_form_is_cleared() {
        let mut form = filled();
        let submission = form.submit().unwrap();
        assert_eq!(submission.email, "ada@engine.org");
        assert_eq!(form.values(), &Submission::default());
        assert!(form.is_sent());
    }

    #[test]
    fn first_blank_field_is_reported() {
        let mut form = filled();
        form.edit(Field::Subject, "   ".into());
        form.edit(Field::Message, String::new());
        assert_eq!(form.submit(), Err(FormError::Missing(Field::Subject)));
        assert_eq!(form.values().name, "Ada Lovelace");
        assert_eq!(form.error(), Some(&FormError::Missing(Field::Subject)));
    }

    #[test]
    fn editing_clears_the_notice() {
        let mut form = filled();
        form.edit(Field::Email, "nope".into());
        assert_eq!(form.submit(), Err(FormError::InvalidEmail));
        form.edit(Field::Email, "ada@engine.org".into());
        assert!(form.error().is_none());
        assert!(!form.is_sent());
    }

    #[test]
    fn email_shapes() {
        for good in &["a@b.co", "first.last@mail.example.org"] {
            assert!(is_email(good), "{}", good);
        }
        for bad in &["", "plain", "@b.co", "a@b", "a@.co", "a@co.", "a@b@c.co", "a b@c.co"] {
            assert!(!is_email(bad), "{}", bad);
        }
    }

    #[test]
    fn errors_read_naturally() {
        assert_eq!(
            FormError::Missing(Field::Email).to_string(),
            "Email Address is required"
        );
    }
}
