//! Path tessellation using lyon.
//!
//! This module converts paths into triangle meshes suitable for GPU
//! rendering and hit testing. It uses the lyon tessellation library.

use lyon::math::point as lyon_point;
use lyon::path::Path as LyonPath;
use lyon::path::builder::SvgPathBuilder;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule as LyonFillRule, FillTessellator, FillVertex,
    FillVertexConstructor, LineCap as LyonLineCap, LineJoin as LyonLineJoin, StrokeOptions,
    StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use crate::error::RenderResult;
use crate::paint::{FillRule, LineCap, LineJoin, Stroke};
use crate::types::{Path, PathCommand, arc_point};

/// Default tessellation tolerance.
///
/// This value provides a good balance between accuracy and vertex count.
/// Smaller values produce more accurate curves but more vertices.
pub const DEFAULT_TOLERANCE: f32 = 0.1;

/// Tessellated path output suitable for GPU rendering.
#[derive(Debug, Clone, Default)]
pub struct TessellatedPath {
    /// Vertex positions (x, y).
    pub vertices: Vec<[f32; 2]>,
    /// Triangle indices.
    pub indices: Vec<u32>,
}

impl TessellatedPath {
    /// Create a new empty tessellated path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the tessellation is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Vertex positions as raw bytes, ready for a GPU vertex buffer.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Triangle indices as raw bytes, ready for a GPU index buffer.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Convert our Path to lyon's Path format.
pub fn to_lyon_path(path: &Path) -> LyonPath {
    let mut builder = LyonPath::svg_builder();

    for cmd in path.commands() {
        match cmd {
            PathCommand::MoveTo(p) => {
                builder.move_to(lyon_point(p.x, p.y));
            }
            PathCommand::LineTo(p) => {
                builder.line_to(lyon_point(p.x, p.y));
            }
            PathCommand::QuadTo { control, end } => {
                builder.quadratic_bezier_to(
                    lyon_point(control.x, control.y),
                    lyon_point(end.x, end.y),
                );
            }
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => {
                builder.cubic_bezier_to(
                    lyon_point(control1.x, control1.y),
                    lyon_point(control2.x, control2.y),
                    lyon_point(end.x, end.y),
                );
            }
            PathCommand::ArcTo {
                center,
                radius,
                start_angle,
                sweep_angle,
            } => {
                // Center parameterization to SVG endpoint parameterization.
                // A positive sweep is clockwise in the y-down coordinate
                // system, which is SVG's sweep flag.
                let end = arc_point(*center, *radius, *start_angle + *sweep_angle);
                let flags = lyon::path::ArcFlags {
                    large_arc: sweep_angle.abs() > 180.0,
                    sweep: *sweep_angle > 0.0,
                };
                builder.arc_to(
                    lyon::math::Vector::new(*radius, *radius),
                    lyon::math::Angle::radians(0.0),
                    flags,
                    lyon_point(end.x, end.y),
                );
            }
            PathCommand::Close => {
                builder.close();
            }
        }
    }

    builder.build()
}

/// Convert our FillRule to lyon's FillRule.
fn to_lyon_fill_rule(rule: FillRule) -> LyonFillRule {
    match rule {
        FillRule::NonZero => LyonFillRule::NonZero,
        FillRule::EvenOdd => LyonFillRule::EvenOdd,
    }
}

/// Convert our LineCap to lyon's LineCap.
fn to_lyon_line_cap(cap: LineCap) -> LyonLineCap {
    match cap {
        LineCap::Butt => LyonLineCap::Butt,
        LineCap::Round => LyonLineCap::Round,
        LineCap::Square => LyonLineCap::Square,
    }
}

/// Convert our LineJoin to lyon's LineJoin.
fn to_lyon_line_join(join: LineJoin) -> LyonLineJoin {
    match join {
        LineJoin::Miter => LyonLineJoin::Miter,
        LineJoin::Round => LyonLineJoin::Round,
        LineJoin::Bevel => LyonLineJoin::Bevel,
    }
}

/// Simple vertex constructor for fill tessellation.
struct FillVertexCtor;

impl FillVertexConstructor<[f32; 2]> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> [f32; 2] {
        [vertex.position().x, vertex.position().y]
    }
}

/// Simple vertex constructor for stroke tessellation.
struct StrokeVertexCtor;

impl StrokeVertexConstructor<[f32; 2]> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> [f32; 2] {
        [vertex.position().x, vertex.position().y]
    }
}

/// Tessellate a path for filling.
///
/// # Arguments
///
/// * `path` - The path to tessellate
/// * `fill_rule` - The fill rule to use (NonZero or EvenOdd)
/// * `tolerance` - Curve approximation tolerance (smaller = more accurate, more vertices)
pub fn tessellate_fill(
    path: &Path,
    fill_rule: FillRule,
    tolerance: f32,
) -> RenderResult<TessellatedPath> {
    if path.is_empty() {
        return Ok(TessellatedPath::new());
    }

    let lyon_path = to_lyon_path(path);

    let mut buffers: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    let mut tessellator = FillTessellator::new();

    let options = FillOptions::default()
        .with_fill_rule(to_lyon_fill_rule(fill_rule))
        .with_tolerance(tolerance);

    tessellator.tessellate_path(
        &lyon_path,
        &options,
        &mut BuffersBuilder::new(&mut buffers, FillVertexCtor),
    )?;

    tracing::trace!(
        target: "rondel_render::tessellate",
        vertices = buffers.vertices.len(),
        indices = buffers.indices.len(),
        "fill tessellated"
    );

    Ok(TessellatedPath {
        vertices: buffers.vertices,
        indices: buffers.indices,
    })
}

/// Tessellate a path for stroking.
///
/// # Arguments
///
/// * `path` - The path to tessellate
/// * `stroke` - Stroke options (width, cap, join, etc.)
/// * `tolerance` - Curve approximation tolerance
pub fn tessellate_stroke(
    path: &Path,
    stroke: &Stroke,
    tolerance: f32,
) -> RenderResult<TessellatedPath> {
    if path.is_empty() {
        return Ok(TessellatedPath::new());
    }

    let lyon_path = to_lyon_path(path);

    let mut buffers: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    let mut tessellator = StrokeTessellator::new();

    let options = StrokeOptions::default()
        .with_line_width(stroke.width)
        .with_line_cap(to_lyon_line_cap(stroke.cap))
        .with_line_join(to_lyon_line_join(stroke.join))
        .with_miter_limit(stroke.miter_limit)
        .with_tolerance(tolerance);

    tessellator.tessellate_path(
        &lyon_path,
        &options,
        &mut BuffersBuilder::new(&mut buffers, StrokeVertexCtor),
    )?;

    tracing::trace!(
        target: "rondel_render::tessellate",
        vertices = buffers.vertices.len(),
        indices = buffers.indices.len(),
        "stroke tessellated"
    );

    Ok(TessellatedPath {
        vertices: buffers.vertices,
        indices: buffers.indices,
    })
}
