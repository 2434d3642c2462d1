//! Size hints for host layout negotiation.

use rondel_render::Size;

/// Size hint containing the preferred, minimum, and maximum sizes for a widget.
///
/// The host layout reads this to decide how to size the widget. The actual
/// assigned geometry may differ; the widget reads it back each paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHint {
    /// The preferred size for the widget to display optimally.
    pub preferred: Size,

    /// The minimum acceptable size. If `None`, the widget has no minimum
    /// constraint (can shrink to zero).
    pub minimum: Option<Size>,

    /// The maximum size the widget should be. If `None`, the widget has no
    /// maximum constraint (can grow without bound).
    pub maximum: Option<Size>,
}

impl SizeHint {
    /// Create a size hint with only a preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
            maximum: None,
        }
    }

    /// Create a size hint from preferred dimensions.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Set the minimum size.
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the minimum size from dimensions.
    pub fn with_minimum_dimensions(self, width: f32, height: f32) -> Self {
        self.with_minimum(Size::new(width, height))
    }

    /// Set the maximum size.
    pub fn with_maximum(mut self, maximum: Size) -> Self {
        self.maximum = Some(maximum);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_hint_builders() {
        let hint = SizeHint::from_dimensions(100.0, 40.0)
            .with_minimum_dimensions(64.0, 24.0)
            .with_maximum(Size::new(400.0, 80.0));

        assert_eq!(hint.preferred, Size::new(100.0, 40.0));
        assert_eq!(hint.minimum, Some(Size::new(64.0, 24.0)));
        assert_eq!(hint.maximum, Some(Size::new(400.0, 80.0)));
    }
}
