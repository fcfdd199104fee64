use crate::font::{self, FontToken};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fonts {
    pub body: FontToken,
    pub subheadline: FontToken,
    pub title: FontToken,
}

impl std::default::Default for Fonts {
    fn default() -> Self {
        Self {
            body: FontToken::new(font::REGULAR, font::BODY_SIZE),
            subheadline: FontToken::new(font::REGULAR, font::SUBHEADLINE_SIZE),
            title: FontToken::new(font::BOLD, font::TITLE_SIZE),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: ButtonTokens,
    pub link: ButtonTokens,
}

/// Shape and typography of one button variant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonTokens {
    pub corner_radius: f32,
    pub font: FontToken,
    /// `None` lets the label sit at the host's default padding.
    pub padding: Option<f32>,
}

impl std::default::Default for Buttons {
    fn default() -> Self {
        Self {
            primary: ButtonTokens {
                corner_radius: 5.0,
                font: FontToken::new(font::SEMIBOLD, font::BODY_SIZE),
                padding: Some(16.0),
            },
            link: ButtonTokens {
                corner_radius: 0.0,
                font: FontToken::new(font::REGULAR, font::SUBHEADLINE_SIZE),
                padding: Some(4.0),
            },
        }
    }
}

/// Container-level tokens shared by the authenticator screens.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AuthenticatorStyle {
    pub corner_radius: f32,
    pub border_width: f32,
    pub padding: Option<f32>,
}

impl std::default::Default for AuthenticatorStyle {
    fn default() -> Self {
        Self {
            corner_radius: 5.0,
            border_width: 1.0,
            padding: Some(12.0),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Components {
    pub field: FieldTokens,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FieldTokens {
    pub spacing: Spacing,
}

impl std::default::Default for FieldTokens {
    fn default() -> Self {
        Self {
            spacing: Spacing {
                vertical: 6.0,
                horizontal: 8.0,
            },
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spacing {
    pub vertical: f32,
    pub horizontal: f32,
}
