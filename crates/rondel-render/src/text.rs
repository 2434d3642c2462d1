//! Text measurement for widget labels.
//!
//! This module wraps cosmic-text behind small font and layout types. Only
//! measurement lives here: the label is drawn by the host surface through
//! [`Renderer::draw_text`](crate::Renderer::draw_text), but the widget needs
//! the text extents to center the label and to report a size hint.

use crate::types::{Point, Rect};

/// A font family selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontFamily {
    /// A named font family, e.g. "Inter".
    Name(String),
    /// Generic serif family.
    Serif,
    /// Generic sans-serif family.
    SansSerif,
    /// Generic monospace family.
    Monospace,
    /// Generic cursive family.
    Cursive,
    /// Generic fantasy family.
    Fantasy,
}

/// Font weight (100-900, CSS scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const THIN: Self = Self(100);
    pub const LIGHT: Self = Self(300);
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const SEMIBOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
    pub const BLACK: Self = Self(900);

    /// Convert to cosmic-text's weight type.
    pub fn to_cosmic(self) -> cosmic_text::Weight {
        cosmic_text::Weight(self.0)
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Italic glyphs.
    Italic,
}

impl FontStyle {
    /// Convert to cosmic-text's style type.
    pub fn to_cosmic(self) -> cosmic_text::Style {
        match self {
            Self::Normal => cosmic_text::Style::Normal,
            Self::Italic => cosmic_text::Style::Italic,
        }
    }
}

/// A font specification: family, size, and styling.
///
/// `Font` carries styling attributes only; [`FontSystem`] resolves it to
/// actual font face data during layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    /// Font size in pixels.
    size: f32,
    weight: FontWeight,
    style: FontStyle,
}

impl Font {
    /// Create a new font with the given family and size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// Get the font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Get the font size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Get the font weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Get the font style.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Create a copy of this font with a different size.
    pub fn with_size(&self, size: f32) -> Self {
        let mut font = self.clone();
        font.size = size;
        font
    }

    /// Create a copy of this font with a different weight.
    pub fn with_weight(&self, weight: FontWeight) -> Self {
        let mut font = self.clone();
        font.weight = weight;
        font
    }

    /// Create a copy of this font with a different style.
    pub fn with_style(&self, style: FontStyle) -> Self {
        let mut font = self.clone();
        font.style = style;
        font
    }

    /// Convert to cosmic-text Attrs for shaping.
    pub fn to_attrs(&self) -> cosmic_text::Attrs<'_> {
        let family = match &self.family {
            FontFamily::Name(name) => cosmic_text::Family::Name(name.as_str()),
            FontFamily::Serif => cosmic_text::Family::Serif,
            FontFamily::SansSerif => cosmic_text::Family::SansSerif,
            FontFamily::Monospace => cosmic_text::Family::Monospace,
            FontFamily::Cursive => cosmic_text::Family::Cursive,
            FontFamily::Fantasy => cosmic_text::Family::Fantasy,
        };

        cosmic_text::Attrs::new()
            .family(family)
            .weight(self.weight.to_cosmic())
            .style(self.style.to_cosmic())
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 16.0)
    }
}

/// Owns the font database used to resolve and shape text.
pub struct FontSystem {
    inner: cosmic_text::FontSystem,
}

impl FontSystem {
    /// Create a font system backed by the system font database.
    pub fn new() -> Self {
        Self {
            inner: cosmic_text::FontSystem::new(),
        }
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// A measured single-block text layout.
#[derive(Debug, Clone)]
pub struct TextLayout {
    text: String,
    width: f32,
    height: f32,
}

impl TextLayout {
    /// Shape and measure `text` with the given font.
    pub fn new(font_system: &mut FontSystem, text: &str, font: &Font) -> Self {
        let metrics = cosmic_text::Metrics::new(font.size(), font.size() * 1.2);
        let mut buffer = cosmic_text::Buffer::new(&mut font_system.inner, metrics);
        buffer.set_text(
            &mut font_system.inner,
            text,
            font.to_attrs(),
            cosmic_text::Shaping::Advanced,
        );
        buffer.shape_until_scroll(&mut font_system.inner, false);

        let mut width = 0.0f32;
        let mut height = 0.0f32;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            height += run.line_height;
        }

        Self {
            text: text.to_string(),
            width,
            height,
        }
    }

    /// Get the original text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the total width of the layout.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Get the total height of the layout.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Top-left origin that centers this layout in `rect`, both axes.
    pub fn centered_origin(&self, rect: Rect) -> Point {
        let center = rect.center();
        Point::new(center.x - self.width / 2.0, center.y - self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_builder_surface() {
        let font = Font::new(FontFamily::SansSerif, 10.0)
            .with_weight(FontWeight::BOLD)
            .with_style(FontStyle::Italic);

        assert_eq!(font.size(), 10.0);
        assert_eq!(font.weight(), FontWeight::BOLD);
        assert_eq!(font.style(), FontStyle::Italic);
        assert_eq!(font.with_size(12.0).size(), 12.0);
    }

    #[test]
    fn test_empty_text_has_no_width() {
        let mut font_system = FontSystem::new();
        let layout = TextLayout::new(&mut font_system, "", &Font::default());
        assert_eq!(layout.width(), 0.0);
    }

    #[test]
    fn test_centered_origin() {
        let mut font_system = FontSystem::new();
        let layout = TextLayout::new(&mut font_system, "OK", &Font::default());

        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        let origin = layout.centered_origin(rect);

        assert_eq!(origin.x, 50.0 - layout.width() / 2.0);
        assert_eq!(origin.y, 20.0 - layout.height() / 2.0);
    }
}
