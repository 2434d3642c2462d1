//! Rendering primitives for Rondel.
//!
//! This crate provides the geometry and drawing vocabulary shared by the
//! widget crate and the host's paint surface:
//!
//! - Basic types: [`Point`], [`Size`], [`Rect`], [`Color`], [`Path`]
//! - The rounded-rectangle shape builder ([`Path::rounded_rect`])
//! - Paint styles: [`Paint`], [`Stroke`], [`FillRule`]
//! - Path tessellation into triangle meshes via lyon
//! - Hit-test [`Region`]s backed by tessellation
//! - Text measurement via cosmic-text ([`Font`], [`TextLayout`])
//! - The [`Renderer`] trait implemented by the host's drawing surface
//! - A [`RecordingRenderer`] for headless verification
//!
//! The crate draws nothing itself: rasterization belongs to whichever
//! surface the host hands the widget at paint time.

mod error;
mod paint;
mod recording;
mod region;
mod renderer;
mod tessellate;
pub mod text;
mod types;

pub use error::{RenderError, RenderResult};
pub use paint::{FillRule, LineCap, LineJoin, Paint, Stroke};
pub use recording::{DrawCommand, RecordingRenderer};
pub use region::Region;
pub use renderer::Renderer;
pub use tessellate::{DEFAULT_TOLERANCE, TessellatedPath, tessellate_fill, tessellate_stroke};
pub use text::{Font, FontFamily, FontStyle, FontSystem, FontWeight, TextLayout};
pub use types::{Color, Path, PathCommand, Point, Rect, Size};
