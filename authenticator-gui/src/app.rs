use std::convert::Infallible;

use authenticator_ui::{
    component::{
        button::{self, Frame},
        field::{AttributeType, CustomField},
        sign_up_input_field, text, Field, Rule, SignUpField, SignUpForm,
    },
    options::Options,
    theme::{self, button::ButtonStyle, Theme},
    widget::*,
};
use iced::Length;

use crate::config::Config;

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(usize, String),
    Submit,
    Reset,
    ToggleTheme,
}

pub struct App {
    theme: Theme,
    options: Options,
    form: SignUpForm,
    submitted: Option<Vec<(String, String)>>,
}

fn sign_up_fields() -> SignUpForm {
    let mut form = SignUpForm::new([
        Field::username(),
        Field::password(),
        Field::email(true),
        Field::phone_number(false),
        Field::birthdate(false),
        Field::text(AttributeType::Website, false),
    ]);
    form.fields.push(
        SignUpField::new(Field::custom(
            CustomField::new("nickname", |value| {
                iced::widget::text_input("Pick a nickname", value)
                    .on_input(|value| value)
                    .into()
            })
            .label("Nickname")
            .required(true)
            .error_content(|theme: &Theme, message| -> Element<'static, Infallible> {
                text::subheadline(theme, message).into()
            }),
        ))
        .rule(Rule::custom(|value| {
            value
                .contains(char::is_whitespace)
                .then(|| "%@ cannot contain spaces".to_string())
        })),
    );
    form
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            theme: config.theme(),
            options: config.options(),
            form: sign_up_fields(),
            submitted: None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::FieldChanged(index, value) => {
                self.form.set_value(index, value);
            }
            Message::Submit => {
                if self.form.validate_all() {
                    let values = self.form.values();
                    tracing::info!("Sign-up submitted with {} fields", values.len());
                    self.submitted = Some(values);
                } else {
                    tracing::info!("Sign-up form has invalid fields");
                    self.submitted = None;
                }
            }
            Message::Reset => {
                tracing::debug!("Resetting sign-up form");
                self.form = sign_up_fields();
                self.submitted = None;
            }
            Message::ToggleTheme => {
                self.theme = if self.theme.colors == Theme::dark().colors {
                    Theme::light()
                } else {
                    Theme::dark()
                };
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let fields = self
            .form
            .fields
            .iter()
            .enumerate()
            .fold(Column::new(), |col, (index, field)| {
                col.push(sign_up_input_field(
                    &self.theme,
                    &self.options,
                    field,
                    move |value| Message::FieldChanged(index, value),
                ))
            })
            .spacing(16);

        let summary = self.submitted.as_ref().map(|values| {
            values.iter().fold(
                Column::new().push(text::body(&self.theme, "Account created:")),
                |col, (key, value)| {
                    col.push(
                        text::subheadline(&self.theme, format!("{}: {}", key, value))
                            .style(theme::text::secondary),
                    )
                },
            )
        });

        Container::new(
            Container::new(
                Column::new()
                    .push(text::title(&self.theme, "Create Account"))
                    .push(fields)
                    .push(button::primary(&self.theme, "Create Account").on_press(Message::Submit))
                    .push(
                        button::Button::new(&self.theme, "Reset")
                            .style(ButtonStyle::Default)
                            .frame(Frame {
                                max_width: Some(200.0),
                                ..Default::default()
                            })
                            .on_press(Message::Reset),
                    )
                    .push(button::link(&self.theme, "Switch theme").on_press(Message::ToggleTheme))
                    .push_maybe(summary)
                    .spacing(20)
                    .max_width(480.0),
            )
            .padding(24)
            .style(theme::container::card),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .padding(20)
        .style(theme::container::background)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authenticator_ui::component::ValidationState;

    #[test]
    fn submit_requires_valid_fields() {
        let mut app = App::new(&Config::default());
        app.update(Message::Submit);
        assert!(app.submitted.is_none());
        assert!(!app.form.fields[0].validator().is_valid());

        app.update(Message::FieldChanged(0, "neo".to_string()));
        app.update(Message::FieldChanged(1, "redpill1".to_string()));
        app.update(Message::FieldChanged(2, "neo@matrix.io".to_string()));
        app.update(Message::FieldChanged(6, "the one".to_string()));
        assert_eq!(
            app.form.fields[6].validator().state(),
            &ValidationState::Error(Some("%@ cannot contain spaces".to_string()))
        );
        assert_eq!(
            app.form.fields[6]
                .error_message(&app.options.localizer)
                .as_deref(),
            Some("Nickname cannot contain spaces")
        );
        app.update(Message::FieldChanged(6, "theone".to_string()));

        app.update(Message::Submit);
        let submitted = app.submitted.clone().unwrap();
        assert!(submitted.contains(&("email".to_string(), "neo@matrix.io".to_string())));
        assert!(submitted.contains(&("nickname".to_string(), "theone".to_string())));

        app.update(Message::Reset);
        assert!(app.submitted.is_none());
        assert_eq!(app.form.fields[0].value(), "");
    }

    #[test]
    fn toggle_theme() {
        let mut app = App::new(&Config::default());
        assert_eq!(app.theme(), Theme::light());
        app.update(Message::ToggleTheme);
        assert_eq!(app.theme(), Theme::dark());
        app.update(Message::ToggleTheme);
        assert_eq!(app.theme(), Theme::light());
    }

    #[test]
    fn view_renders() {
        let mut app = App::new(&Config::default());
        app.update(Message::Submit);
        let _ = app.view();
    }
}
