use crate::{font::FontToken, theme::Theme, widget::Text};
use iced::advanced::text::Shaping;
use std::fmt::Display;

pub fn token<'a>(token: FontToken, content: impl Display) -> Text<'a> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .font(token.font)
        .size(token.size)
}

pub fn body<'a>(theme: &Theme, content: impl Display) -> Text<'a> {
    token(theme.fonts.body, content)
}

pub fn subheadline<'a>(theme: &Theme, content: impl Display) -> Text<'a> {
    token(theme.fonts.subheadline, content)
}

pub fn title<'a>(theme: &Theme, content: impl Display) -> Text<'a> {
    token(theme.fonts.title, content)
}
