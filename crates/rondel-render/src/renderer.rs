//! The drawing surface trait implemented by the host.
//!
//! The widget never owns a rendering backend. At paint time the host hands
//! it a surface scoped to the widget's bounding rectangle, expressed as a
//! `&mut dyn Renderer`. Backends tessellate paths with
//! [`tessellate_fill`](crate::tessellate_fill) /
//! [`tessellate_stroke`](crate::tessellate_stroke) or map the operations
//! onto their own vector API.

use crate::paint::{FillRule, Paint, Stroke};
use crate::text::Font;
use crate::types::{Color, Path, Point};

/// The 2D drawing operations a widget performs during paint.
///
/// # Coordinate System
///
/// All coordinates are widget-local: (0, 0) is the widget's top-left corner.
///
/// # State Stack
///
/// The surface maintains a clip/state stack. A paint pass brackets its work
/// in [`save`](Self::save) / [`restore`](Self::restore); implementations
/// must release any resources acquired for the pass when `restore` runs,
/// even if an operation in between failed, since paint may be invoked every
/// frame during a resize or drag.
pub trait Renderer {
    /// Save the current render state (clip, etc.).
    fn save(&mut self);

    /// Restore the previously saved render state.
    fn restore(&mut self);

    /// Clip subsequent drawing to the interior of a path.
    ///
    /// Clips nest: each call intersects with the current clip and is undone
    /// by the matching [`restore`](Self::restore).
    fn clip_path(&mut self, path: &Path);

    /// Fill a path with the specified paint.
    fn fill_path(&mut self, path: &Path, paint: Paint, fill_rule: FillRule);

    /// Stroke a path with the specified stroke options.
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);

    /// Draw a single run of text with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, font: &Font, color: Color);
}
