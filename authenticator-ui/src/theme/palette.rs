use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub background: Background,
    pub foreground: Foreground,
    pub border: Border,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Background {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub interactive: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Foreground {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub inverse: iced::Color,
    pub interactive: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub primary: iced::Color,
    pub interactive: iced::Color,
    pub error: iced::Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Background {
                primary: color::WHITE,
                secondary: color::NEUTRAL_10,
                interactive: color::TEAL_80,
                error: color::RED_10,
            },
            foreground: Foreground {
                primary: color::NEUTRAL_100,
                secondary: color::NEUTRAL_80,
                inverse: color::WHITE,
                interactive: color::TEAL_80,
                error: color::RED_80,
            },
            border: Border {
                primary: color::NEUTRAL_60,
                interactive: color::TEAL_90,
                error: color::RED_80,
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Background {
                primary: color::NEUTRAL_100,
                secondary: color::NEUTRAL_90,
                interactive: color::TEAL_40,
                error: color::RED_90,
            },
            foreground: Foreground {
                primary: color::WHITE,
                secondary: color::NEUTRAL_40,
                inverse: color::NEUTRAL_100,
                interactive: color::TEAL_40,
                error: color::RED_40,
            },
            border: Border {
                primary: color::NEUTRAL_60,
                interactive: color::TEAL_40,
                error: color::RED_40,
            },
        }
    }
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
