use iced::Color;
pub const BLACK: Color = iced::Color::BLACK;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;

// =============================================================================
// NEUTRALS
// =============================================================================

pub const NEUTRAL_10: Color = Color::from_rgb(
    0xFA as f32 / 255.0,
    0xFA as f32 / 255.0,
    0xFA as f32 / 255.0,
); // #FAFAFA

pub const NEUTRAL_20: Color = Color::from_rgb(
    0xEF as f32 / 255.0,
    0xF0 as f32 / 255.0,
    0xF0 as f32 / 255.0,
); // #EFF0F0

pub const NEUTRAL_40: Color = Color::from_rgb(
    0xDC as f32 / 255.0,
    0xDE as f32 / 255.0,
    0xE0 as f32 / 255.0,
); // #DCDEE0

pub const NEUTRAL_60: Color = Color::from_rgb(
    0x89 as f32 / 255.0,
    0x94 as f32 / 255.0,
    0x9F as f32 / 255.0,
); // #89949F

pub const NEUTRAL_80: Color = Color::from_rgb(
    0x30 as f32 / 255.0,
    0x40 as f32 / 255.0,
    0x50 as f32 / 255.0,
); // #304050

pub const NEUTRAL_90: Color = Color::from_rgb(
    0x1A as f32 / 255.0,
    0x26 as f32 / 255.0,
    0x33 as f32 / 255.0,
); // #1A2633

pub const NEUTRAL_100: Color = Color::from_rgb(
    0x0D as f32 / 255.0,
    0x1A as f32 / 255.0,
    0x26 as f32 / 255.0,
); // #0D1A26

// =============================================================================
// BRAND (teal accent)
// =============================================================================

pub const TEAL_40: Color = Color::from_rgb(
    0x7D as f32 / 255.0,
    0xD6 as f32 / 255.0,
    0xE8 as f32 / 255.0,
); // #7DD6E8

pub const TEAL_80: Color = Color::from_rgb(
    0x04 as f32 / 255.0,
    0x7D as f32 / 255.0,
    0x95 as f32 / 255.0,
); // #047D95

pub const TEAL_90: Color = Color::from_rgb(
    0x00 as f32 / 255.0,
    0x55 as f32 / 255.0,
    0x66 as f32 / 255.0,
); // #005566

// =============================================================================
// STATUS
// =============================================================================

pub const RED_10: Color = Color::from_rgb(
    0xFC as f32 / 255.0,
    0xE9 as f32 / 255.0,
    0xE9 as f32 / 255.0,
); // #FCE9E9

pub const RED_40: Color = Color::from_rgb(
    0xEF as f32 / 255.0,
    0x8F as f32 / 255.0,
    0x8F as f32 / 255.0,
); // #EF8F8F

pub const RED_80: Color = Color::from_rgb(
    0x95 as f32 / 255.0,
    0x04 as f32 / 255.0,
    0x04 as f32 / 255.0,
); // #950404

pub const RED_90: Color = Color::from_rgb(
    0x66 as f32 / 255.0,
    0x00 as f32 / 255.0,
    0x00 as f32 / 255.0,
); // #660000
