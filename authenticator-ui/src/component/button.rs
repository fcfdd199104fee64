use iced::{Alignment, Length};

use super::text;
use crate::theme::{
    self,
    button::{Appearance, ButtonStyle},
    Theme,
};
use crate::widget::{Container, Element};

/// Size constraints of a button, mirroring a layout frame: any bound can be left open.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub min_width: Option<f32>,
    pub ideal_width: Option<f32>,
    pub max_width: Option<f32>,
    pub min_height: Option<f32>,
    pub ideal_height: Option<f32>,
    pub max_height: Option<f32>,
    pub alignment: Alignment,
}

impl std::default::Default for Frame {
    fn default() -> Self {
        Self {
            min_width: None,
            ideal_width: None,
            max_width: Some(f32::INFINITY),
            min_height: None,
            ideal_height: None,
            max_height: None,
            alignment: Alignment::Center,
        }
    }
}

impl Frame {
    pub fn width(&self) -> Length {
        axis_length(self.min_width, self.ideal_width, self.max_width)
    }

    pub fn height(&self) -> Length {
        axis_length(self.min_height, self.ideal_height, self.max_height)
    }
}

// An ideal size is fixed within [min, max]. Any max bound otherwise lets the button grow, a
// finite one is enforced by the wrapping container.
fn axis_length(min: Option<f32>, ideal: Option<f32>, max: Option<f32>) -> Length {
    match (ideal, max) {
        (Some(ideal), _) => {
            let size = min.map_or(ideal, |min| ideal.max(min));
            Length::Fixed(max.map_or(size, |max| size.min(max)))
        }
        (None, Some(_)) => Length::Fill,
        (None, None) => Length::Shrink,
    }
}

fn finite(bound: Option<f32>) -> Option<f32> {
    bound.filter(|bound| bound.is_finite())
}

/// Button following the authenticator theme.
pub struct Button<'a, Message> {
    theme: &'a Theme,
    label: String,
    style: ButtonStyle,
    frame: Frame,
    on_press: Option<Message>,
}

impl<'a, Message: Clone + 'a> Button<'a, Message> {
    pub fn new(theme: &'a Theme, label: impl Into<String>) -> Self {
        Self {
            theme,
            label: label.into(),
            style: ButtonStyle::default(),
            frame: Frame::default(),
            on_press: None,
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// A button without message is drawn disabled.
    pub fn on_press_maybe(mut self, message: Option<Message>) -> Self {
        self.on_press = message;
        self
    }
}

impl<'a, Message: Clone + 'a> From<Button<'a, Message>> for Element<'a, Message> {
    fn from(button: Button<'a, Message>) -> Element<'a, Message> {
        let appearance = Appearance::resolve(button.theme, button.style);
        let frame = button.frame;
        let label = text::token(appearance.font, button.label).align_x(Alignment::Center);

        let mut content = iced::widget::button(
            Container::new(label)
                .align_x(frame.alignment)
                .align_y(frame.alignment)
                .width(frame.width())
                .height(frame.height()),
        )
        .style(theme::button::authenticator(button.style))
        .width(frame.width())
        .height(frame.height())
        .on_press_maybe(button.on_press);
        if let Some(padding) = appearance.padding {
            content = content.padding(padding);
        }

        let mut wrapper = Container::new(content).align_x(frame.alignment);
        if let Some(max_width) = finite(frame.max_width) {
            wrapper = wrapper.max_width(max_width);
        }
        if let Some(max_height) = finite(frame.max_height) {
            wrapper = wrapper.max_height(max_height);
        }
        wrapper.into()
    }
}

pub fn primary<'a, T: Clone + 'a>(theme: &'a Theme, label: impl Into<String>) -> Button<'a, T> {
    Button::new(theme, label).style(ButtonStyle::Primary)
}

pub fn link<'a, T: Clone + 'a>(theme: &'a Theme, label: impl Into<String>) -> Button<'a, T> {
    Button::new(theme, label).style(ButtonStyle::Link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_fills_width() {
        let frame = Frame::default();
        assert_eq!(frame.max_width, Some(f32::INFINITY));
        assert_eq!(frame.alignment, Alignment::Center);
        assert_eq!(frame.width(), Length::Fill);
        assert_eq!(frame.height(), Length::Shrink);
        assert_eq!(finite(frame.max_width), None);
    }

    #[test]
    fn ideal_size_is_clamped() {
        let frame = Frame {
            min_width: Some(100.0),
            ideal_width: Some(50.0),
            ideal_height: Some(80.0),
            max_height: Some(44.0),
            ..Default::default()
        };
        assert_eq!(frame.width(), Length::Fixed(100.0));
        assert_eq!(frame.height(), Length::Fixed(44.0));
    }

    #[test]
    fn finite_max_width_is_a_cap() {
        let frame = Frame {
            max_width: Some(300.0),
            ..Default::default()
        };
        assert_eq!(frame.width(), Length::Fill);
        assert_eq!(finite(frame.max_width), Some(300.0));

        let frame = Frame {
            max_width: None,
            ..Default::default()
        };
        assert_eq!(frame.width(), Length::Shrink);
    }

    #[test]
    fn buttons_render() {
        let theme = Theme::light();
        let _: Element<()> = primary(&theme, "Create Account").on_press(()).into();
        let _: Element<()> = link(&theme, "Back to Sign In").on_press(()).into();
        let _: Element<()> = Button::new(&theme, "Cancel")
            .frame(Frame {
                max_width: Some(200.0),
                alignment: Alignment::Start,
                ..Default::default()
            })
            .into();
    }
}
