use iced::{
    font::{Family, Stretch, Weight},
    Font,
};

pub const BOLD: Font = Font {
    family: Family::SansSerif,
    weight: Weight::Bold,
    style: iced::font::Style::Normal,
    stretch: Stretch::Normal,
};

pub const SEMIBOLD: Font = Font {
    family: Family::SansSerif,
    weight: Weight::Semibold,
    style: iced::font::Style::Normal,
    stretch: Stretch::Normal,
};

pub const REGULAR: Font = Font {
    family: Family::SansSerif,
    weight: Weight::Normal,
    style: iced::font::Style::Normal,
    stretch: Stretch::Normal,
};

pub const BODY_SIZE: u16 = 16;
pub const SUBHEADLINE_SIZE: u16 = 14;
pub const TITLE_SIZE: u16 = 24;

/// A font face paired with the size it is rendered at.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontToken {
    pub font: Font,
    pub size: u16,
}

impl FontToken {
    pub const fn new(font: Font, size: u16) -> Self {
        Self { font, size }
    }
}
