use iced::alignment::Vertical;
use iced::{Color, Length};

use crate::{component::text, theme, theme::Theme, widget::*};

/// A labelled single-line input with its validation error underneath.
pub struct Form<'a, Message> {
    theme: &'a Theme,
    input: TextInput<'a, Message>,
    label: Option<(String, Color)>,
    prefix: Option<String>,
    error: Option<String>,
    invalid: bool,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - the theme the fonts and spacing are taken from
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(theme: &'a Theme, placeholder: &str, value: &str, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            theme,
            input: TextInput::new(placeholder, value)
                .on_input(on_change)
                .font(theme.fonts.body.font)
                .size(theme.fonts.body.size)
                .padding(theme.authenticator.padding.unwrap_or(10.0)),
            label: None,
            prefix: None,
            error: None,
            invalid: false,
        }
    }

    /// Sets the label shown above the input, in the given color.
    pub fn maybe_label(mut self, label: Option<String>, color: Color) -> Self {
        self.label = label.map(|label| (label, color));
        self
    }

    /// Sets a fixed text shown before the input, like a dial code.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Hides the typed characters.
    pub fn secure(mut self, is_secure: bool) -> Self {
        self.input = self.input.secure(is_secure);
        self
    }

    /// Draws the input as invalid.
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Sets the [`Form`] with an error message, shown below the input.
    pub fn maybe_error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        let spacing = form.theme.components.field.spacing;
        let input = if form.invalid {
            form.input.style(theme::text_input::invalid)
        } else {
            form.input
        };
        let input: Element<'a, Message> = match form.prefix {
            Some(prefix) => Row::new()
                .push(text::body(form.theme, prefix).style(theme::text::secondary))
                .push(input)
                .spacing(spacing.horizontal)
                .align_y(Vertical::Center)
                .into(),
            None => input.into(),
        };
        Container::new(
            Column::new()
                .push_maybe(
                    form.label
                        .map(|(label, color)| text::body(form.theme, label).color(color)),
                )
                .push(input)
                .push_maybe(
                    form.error
                        .map(|message| {
                            text::subheadline(form.theme, message).style(theme::text::error)
                        }),
                )
                .width(Length::Fill)
                .spacing(spacing.vertical),
        )
        .width(Length::Fill)
        .into()
    }
}
