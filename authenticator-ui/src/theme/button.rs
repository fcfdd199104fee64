use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::Theme;
use crate::font::FontToken;

/// Opacity factor applied to the background and label colors while a button is held down.
pub const PRESSED_OPACITY: f32 = 0.5;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(default)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Default,
    Primary,
    Link,
}

/// Visual attributes of a button variant, resolved from the theme tokens.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Appearance {
    pub background: Color,
    pub foreground: Color,
    pub border: Border,
    pub corner_radius: f32,
    pub font: FontToken,
    pub padding: Option<f32>,
}

impl Appearance {
    pub fn resolve(theme: &Theme, style: ButtonStyle) -> Self {
        match style {
            ButtonStyle::Primary => Self {
                background: theme.colors.background.interactive,
                foreground: theme.colors.foreground.inverse,
                border: no_border(theme.buttons.primary.corner_radius),
                corner_radius: theme.buttons.primary.corner_radius,
                font: theme.buttons.primary.font,
                padding: theme.buttons.primary.padding,
            },
            ButtonStyle::Link => Self {
                background: Color::TRANSPARENT,
                foreground: theme.colors.foreground.interactive,
                border: no_border(theme.buttons.link.corner_radius),
                corner_radius: theme.buttons.link.corner_radius,
                font: theme.buttons.link.font,
                padding: theme.buttons.link.padding,
            },
            ButtonStyle::Default => Self {
                background: theme.colors.background.error,
                foreground: theme.colors.foreground.primary,
                border: Border {
                    color: theme.colors.border.interactive,
                    width: theme.authenticator.border_width,
                    radius: theme.authenticator.corner_radius.into(),
                },
                corner_radius: theme.authenticator.corner_radius,
                font: theme.fonts.body,
                padding: theme.authenticator.padding,
            },
        }
    }

    pub fn style(&self, status: Status) -> Style {
        let opacity = opacity(status);
        let text_color = with_opacity(self.foreground, opacity);
        Style {
            background: Some(Background::Color(with_opacity(self.background, opacity))),
            text_color: if status == Status::Disabled {
                Color { a: 0.2, ..text_color }
            } else {
                text_color
            },
            border: self.border,
            ..Default::default()
        }
    }
}

pub fn opacity(status: Status) -> f32 {
    match status {
        Status::Pressed => PRESSED_OPACITY,
        Status::Active | Status::Hovered | Status::Disabled => 1.0,
    }
}

pub fn authenticator(style: ButtonStyle) -> impl Fn(&Theme, Status) -> Style {
    move |theme, status| Appearance::resolve(theme, style).style(status)
}

pub fn default(theme: &Theme, status: Status) -> Style {
    Appearance::resolve(theme, ButtonStyle::Default).style(status)
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    Appearance::resolve(theme, ButtonStyle::Primary).style(status)
}

pub fn link(theme: &Theme, status: Status) -> Style {
    Appearance::resolve(theme, ButtonStyle::Link).style(status)
}

fn no_border(radius: f32) -> Border {
    Border {
        color: Color::TRANSPARENT,
        width: 0.0,
        radius: radius.into(),
    }
}

fn with_opacity(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}
