use iced::{
    widget::text_input::{Catalog, Status, Style, StyleFn},
    Background, Border, Color,
};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    text_input(theme, theme.colors.border.primary, status)
}

pub fn invalid(theme: &Theme, status: Status) -> Style {
    text_input(theme, theme.colors.border.error, status)
}

fn text_input(theme: &Theme, border: Color, status: Status) -> Style {
    let active = Style {
        background: Background::Color(theme.colors.background.primary),
        border: Border {
            radius: theme.authenticator.corner_radius.into(),
            width: theme.authenticator.border_width,
            color: border,
        },
        icon: theme.colors.foreground.secondary,
        placeholder: theme.colors.border.primary,
        value: theme.colors.foreground.primary,
        selection: theme.colors.background.interactive,
    };

    match status {
        Status::Active | Status::Hovered => active,
        Status::Focused { .. } => Style {
            border: Border {
                color: if border == theme.colors.border.error {
                    border
                } else {
                    theme.colors.border.interactive
                },
                ..active.border
            },
            ..active
        },
        Status::Disabled => Style {
            background: Background::Color(theme.colors.background.secondary),
            value: theme.colors.foreground.secondary,
            ..active
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_keeps_error_border_when_focused() {
        let theme = Theme::light();
        assert_eq!(
            invalid(&theme, Status::Focused).border.color,
            theme.colors.border.error
        );
        assert_eq!(
            primary(&theme, Status::Focused).border.color,
            theme.colors.border.interactive
        );
        assert_eq!(
            primary(&theme, Status::Active).border.color,
            theme.colors.border.primary
        );
    }
}
