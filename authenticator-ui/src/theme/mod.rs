pub mod button;
pub mod container;
pub mod palette;
pub mod text;
pub mod text_input;
pub mod tokens;

use self::palette::Palette;
use self::tokens::{AuthenticatorStyle, Buttons, Components, Fonts};

/// Design tokens consumed by every authenticator view.
///
/// The same value is handed to the view functions, to read layout tokens such as spacing and
/// fonts, and to iced as the application theme, so the style functions see identical colors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Theme {
    pub colors: Palette,
    pub fonts: Fonts,
    pub buttons: Buttons,
    pub authenticator: AuthenticatorStyle,
    pub components: Components,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            colors: Palette::light(),
            fonts: Fonts::default(),
            buttons: Buttons::default(),
            authenticator: AuthenticatorStyle::default(),
            components: Components::default(),
        }
    }

    pub fn dark() -> Self {
        Self {
            colors: Palette::dark(),
            ..Self::light()
        }
    }
}

impl std::default::Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl iced::application::DefaultStyle for Theme {
    fn default_style(&self) -> iced::application::Appearance {
        iced::application::Appearance {
            background_color: self.colors.background.primary,
            text_color: self.colors.foreground.primary,
        }
    }
}
