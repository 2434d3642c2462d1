//! Visual style for the round button.

use rondel_render::{Color, Font, FontFamily, FontWeight};

/// The visual configuration of a [`RoundButton`](super::widgets::RoundButton).
///
/// All fields are plain data; the widget exposes per-property setters that
/// schedule a redraw on change. Radius and border thickness are unsigned
/// pixel counts, so a negative value is unrepresentable; a radius larger
/// than half the shorter widget dimension is clamped by the shape builder
/// at paint time.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    /// Corner radius in pixels.
    pub corner_radius: u32,
    /// Border color.
    pub border_color: Color,
    /// Border thickness in pixels. 0 disables the border stroke.
    pub border_thickness: u32,
    /// Fill color in the idle state.
    pub idle_color: Color,
    /// Fill color while hovered.
    pub hover_color: Color,
    /// Fill color while pressed.
    pub pressed_color: Color,
    /// Label text color.
    pub foreground: Color,
    /// Label text.
    pub label: String,
    /// Label font.
    pub font: Font,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            corner_radius: 20,
            border_color: Color::GRAY,
            border_thickness: 2,
            idle_color: Color::WHITE,
            hover_color: Color::LIGHT_GRAY,
            pressed_color: Color::DARK_GRAY,
            foreground: Color::BLACK,
            label: String::new(),
            font: Font::new(FontFamily::SansSerif, 10.0).with_weight(FontWeight::BOLD),
        }
    }
}

impl ButtonStyle {
    /// Create a style with the default appearance and the given label.
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }
}
