use iced::widget::container::{transparent, Catalog, Style, StyleFn};
use iced::Background;

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(transparent)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

pub fn background(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.background.primary)),
        text_color: Some(theme.colors.foreground.primary),
        ..Default::default()
    }
}

/// Sets the default text color of everything inside the container.
pub fn foreground(color: iced::Color) -> impl Fn(&Theme) -> Style {
    move |_theme: &Theme| Style {
        text_color: Some(color),
        ..Default::default()
    }
}

pub fn card(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.background.secondary)),
        text_color: Some(theme.colors.foreground.primary),
        border: iced::Border {
            color: theme.colors.border.primary,
            width: theme.authenticator.border_width,
            radius: theme.authenticator.corner_radius.into(),
        },
        ..Default::default()
    }
}
