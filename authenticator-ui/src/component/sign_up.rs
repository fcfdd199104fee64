use iced::Length;

use crate::{
    component::{
        field::{BaseField, CustomField, KeyboardType, Presentation, SignUpField},
        form::Form,
        text,
    },
    options::Options,
    theme::{self, Theme},
    widget::*,
};

/// Length of a `YYYY-MM-DD` date.
pub const DATE_LENGTH: usize = 10;

/// Renders one sign-up field.
///
/// Custom fields get their caller-supplied widgets, base fields one of the four input
/// presentations. Edits are reported through `on_change` with the complete new value, which the
/// caller commits with [`SignUpField::set_value`].
pub fn sign_up_input_field<'a, Message, F>(
    theme: &'a Theme,
    options: &'a Options,
    field: &'a SignUpField,
    on_change: F,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: 'a + Fn(String) -> Message,
{
    let value = field.value();
    let form = match field.field.presentation() {
        Presentation::Custom(custom) => {
            return custom_view(theme, options, field, custom, on_change);
        }
        Presentation::Text(base) => {
            let keyboard = base.content_hint().keyboard;
            Form::new(theme, placeholder(base), value, move |value| {
                on_change(keyboard.filter(&value))
            })
        }
        Presentation::Password(base) => {
            Form::new(theme, placeholder(base), value, on_change).secure(true)
        }
        Presentation::Date(base) => {
            let keyboard = base.content_hint().keyboard;
            Form::new(theme, placeholder(base), value, move |value| {
                on_change(date_input(keyboard, &value))
            })
        }
        Presentation::PhoneNumber(base) => {
            let keyboard = base.content_hint().keyboard;
            let dial_code = options.default_dial_code.as_str();
            Form::new(
                theme,
                placeholder(base),
                national_number(dial_code, value),
                move |value| on_change(phone_value(dial_code, keyboard, &value)),
            )
            .prefix(dial_code)
        }
    };

    form.maybe_label(
        field.field.displayed_label(&options.localizer),
        field.foreground_color(theme),
    )
    .invalid(!field.validator().is_valid())
    .maybe_error(field.error_message(&options.localizer))
    .into()
}

fn custom_view<'a, Message, F>(
    theme: &'a Theme,
    options: &'a Options,
    field: &'a SignUpField,
    custom: &'a CustomField,
    on_change: F,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: 'a + Fn(String) -> Message,
{
    let color = field.foreground_color(theme);
    Column::new()
        .push_maybe(
            field
                .field
                .displayed_label(&options.localizer)
                .map(|label| text::body(theme, label).color(color)),
        )
        .push(custom.content(field.value()).map(on_change))
        .push_maybe(field.error_message(&options.localizer).map(|message| {
            Container::new(
                custom
                    .error(theme, message)
                    .map(|never| -> Message { match never {} }),
            )
            .style(theme::container::foreground(color))
        }))
        .spacing(theme.components.field.spacing.vertical)
        .width(Length::Fill)
        .into()
}

fn placeholder(base: &BaseField) -> &str {
    base.placeholder.as_deref().unwrap_or_default()
}

/// Keeps the date characters of the input, up to a full `YYYY-MM-DD`.
pub fn date_input(keyboard: KeyboardType, input: &str) -> String {
    keyboard.filter(input).chars().take(DATE_LENGTH).collect()
}

/// Part of a stored phone number shown in the input, after the dial code prefix.
pub fn national_number<'a>(dial_code: &str, value: &'a str) -> &'a str {
    value.strip_prefix(dial_code).unwrap_or(value)
}

/// Value stored for a phone number input: the dial code followed by the typed digits, unless
/// the user typed a full international number.
pub fn phone_value(dial_code: &str, keyboard: KeyboardType, input: &str) -> String {
    let number = keyboard.filter(input);
    if number.is_empty() || number.starts_with('+') {
        number
    } else {
        format!("{}{}", dial_code, number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::field::{AttributeType, Field};
    use crate::font::{self, FontToken};
    use std::cell::Cell;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Debug, Clone)]
    enum Message {
        Changed(usize, String),
    }

    #[test]
    fn test_phone_value() {
        assert_eq!(phone_value("+1", KeyboardType::PhonePad, "555 1234"), "+15551234");
        assert_eq!(phone_value("+1", KeyboardType::PhonePad, "+33 612"), "+33612");
        assert_eq!(phone_value("+1", KeyboardType::PhonePad, "abc"), "");
        assert_eq!(
            phone_value("+1", KeyboardType::PhonePad, " +33612345678"),
            "+33612345678"
        );
        assert_eq!(national_number("+1", "+15551234"), "5551234");
        assert_eq!(national_number("+1", "+33612"), "+33612");
    }

    #[test]
    fn test_date_input() {
        assert_eq!(
            date_input(KeyboardType::NumbersAndPunctuation, "1990-02-28x"),
            "1990-02-28"
        );
        assert_eq!(
            date_input(KeyboardType::NumbersAndPunctuation, "1990-02-281"),
            "1990-02-28"
        );
        assert_eq!(
            date_input(KeyboardType::NumbersAndPunctuation, "28/02/1990"),
            "28021990"
        );
    }

    #[test]
    fn every_presentation_renders() {
        let theme = Theme::dark();
        let options = Options::default();
        let mut fields = vec![
            SignUpField::new(Field::username()),
            SignUpField::new(Field::password()),
            SignUpField::new(Field::birthdate(true)),
            SignUpField::new(Field::phone_number(true)),
            SignUpField::new(Field::text(AttributeType::Nickname, false)),
            SignUpField::new(Field::custom(
                CustomField::new("nickname", |value| iced::widget::text(value).into())
                    .label("Nickname")
                    .error_content(|_theme, message| -> Element<'static, Infallible> {
                        iced::widget::text(message).into()
                    }),
            )),
        ];
        for field in &mut fields {
            field
                .validator_mut()
                .set_error(Some("You must fill %@".to_string()));
        }
        let elements: Vec<Element<Message>> = fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                sign_up_input_field(&theme, &options, field, move |value| {
                    Message::Changed(i, value)
                })
            })
            .collect();
        assert_eq!(elements.len(), fields.len());
    }

    #[test]
    fn custom_error_uses_rendering_theme() {
        let mut theme = Theme::light();
        theme.fonts.subheadline = FontToken::new(font::BOLD, 30);
        let seen = Rc::new(Cell::new(None));
        let recorder = seen.clone();
        let mut field = SignUpField::new(Field::custom(
            CustomField::new("nickname", |value| iced::widget::text(value).into())
                .error_content(move |theme: &Theme, message| -> Element<'static, Infallible> {
                    recorder.set(Some(theme.fonts.subheadline));
                    iced::widget::text(message).into()
                }),
        ));
        field
            .validator_mut()
            .set_error(Some("You must fill %@".to_string()));

        let options = Options::default();
        let _: Element<Message> =
            sign_up_input_field(&theme, &options, &field, |value| Message::Changed(0, value));
        assert_eq!(seen.get(), Some(FontToken::new(font::BOLD, 30)));
    }
}
