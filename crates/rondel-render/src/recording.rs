//! A renderer that records draw commands instead of rasterizing.
//!
//! Useful for headless verification: tests paint a widget into a
//! [`RecordingRenderer`] and assert on the recorded command stream, without
//! a GPU or window system.

use crate::paint::{FillRule, Paint, Stroke};
use crate::renderer::Renderer;
use crate::text::Font;
use crate::types::{Color, Path, Point};

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// State saved.
    Save,
    /// State restored.
    Restore,
    /// Clip set to a path.
    ClipPath(Path),
    /// Path filled.
    FillPath {
        path: Path,
        paint: Paint,
        fill_rule: FillRule,
    },
    /// Path stroked.
    StrokePath { path: Path, stroke: Stroke },
    /// Text drawn at an origin.
    DrawText {
        text: String,
        origin: Point,
        font: Font,
        color: Color,
    },
}

/// A [`Renderer`] that appends every operation to a command list.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    depth: i32,
    min_depth: i32,
}

impl RecordingRenderer {
    /// Create an empty recording renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, in submission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Whether every `save` was matched by a `restore` and no `restore` ran
    /// without a prior `save`.
    pub fn is_balanced(&self) -> bool {
        self.depth == 0 && self.min_depth >= 0
    }

    /// Discard the recording, keeping the renderer reusable.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.depth = 0;
        self.min_depth = 0;
    }

    /// Find the first fill command, if any.
    pub fn first_fill(&self) -> Option<(&Path, Paint)> {
        self.commands.iter().find_map(|cmd| match cmd {
            DrawCommand::FillPath { path, paint, .. } => Some((path, *paint)),
            _ => None,
        })
    }

    /// Find the first text command, if any.
    pub fn first_text(&self) -> Option<(&str, Point)> {
        self.commands.iter().find_map(|cmd| match cmd {
            DrawCommand::DrawText { text, origin, .. } => Some((text.as_str(), *origin)),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.depth -= 1;
        self.min_depth = self.min_depth.min(self.depth);
        self.commands.push(DrawCommand::Restore);
    }

    fn clip_path(&mut self, path: &Path) {
        self.commands.push(DrawCommand::ClipPath(path.clone()));
    }

    fn fill_path(&mut self, path: &Path, paint: Paint, fill_rule: FillRule) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            paint,
            fill_rule,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, font: &Font, color: Color) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            origin,
            font: font.clone(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    #[test]
    fn test_records_in_order() {
        let mut renderer = RecordingRenderer::new();
        let path = Path::rect(Rect::new(0.0, 0.0, 10.0, 10.0));

        renderer.save();
        renderer.fill_path(&path, Paint::solid(Color::WHITE), FillRule::NonZero);
        renderer.restore();

        assert_eq!(renderer.commands().len(), 3);
        assert_eq!(renderer.commands()[0], DrawCommand::Save);
        assert!(matches!(renderer.commands()[1], DrawCommand::FillPath { .. }));
        assert_eq!(renderer.commands()[2], DrawCommand::Restore);
        assert!(renderer.is_balanced());
    }

    #[test]
    fn test_unbalanced_restore_detected() {
        let mut renderer = RecordingRenderer::new();
        renderer.restore();
        renderer.save();
        assert!(!renderer.is_balanced());
    }

    #[test]
    fn test_clear_resets_state() {
        let mut renderer = RecordingRenderer::new();
        renderer.save();
        renderer.clear();
        assert!(renderer.commands().is_empty());
        assert!(renderer.is_balanced());
    }
}
