//! Hit-test regions backed by tessellation.
//!
//! A [`Region`] is the area within which the host should deliver pointer
//! events to a widget. Building the region from the widget's outline path is
//! what makes a rounded button interactively non-rectangular: points inside
//! the bounding rectangle but outside the rounded silhouette are rejected.

use crate::error::RenderResult;
use crate::paint::FillRule;
use crate::tessellate::{TessellatedPath, tessellate_fill};
use crate::types::{Path, Point, Rect};

/// A 2D region supporting point containment queries.
///
/// Internally the region stores the triangle mesh of the source path; a
/// point is inside the region when it is inside any triangle. The mesh is
/// exact for polygonal paths and flattens curves at the given tolerance.
#[derive(Debug, Clone, Default)]
pub struct Region {
    mesh: TessellatedPath,
    bounds: Rect,
}

impl Region {
    /// Create an empty region containing no points.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a region covering the interior of a path.
    pub fn from_path(path: &Path, tolerance: f32) -> RenderResult<Self> {
        let mesh = tessellate_fill(path, FillRule::NonZero, tolerance)?;
        let bounds = mesh_bounds(&mesh);
        Ok(Self { mesh, bounds })
    }

    /// Check if the region contains no points.
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// The axis-aligned bounding rectangle of the region.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Check if a point is inside the region.
    pub fn contains(&self, point: Point) -> bool {
        if self.is_empty() {
            return false;
        }
        // Bounds check first; contains() is half-open, so widen by the edge
        // to keep boundary behavior with the triangle test.
        if point.x < self.bounds.left()
            || point.x > self.bounds.right()
            || point.y < self.bounds.top()
            || point.y > self.bounds.bottom()
        {
            return false;
        }

        let p = point.to_vec2();
        self.mesh.indices.chunks_exact(3).any(|tri| {
            let a = Point::from(self.mesh.vertices[tri[0] as usize]).to_vec2();
            let b = Point::from(self.mesh.vertices[tri[1] as usize]).to_vec2();
            let c = Point::from(self.mesh.vertices[tri[2] as usize]).to_vec2();
            point_in_triangle(p, a, b, c)
        })
    }
}

fn mesh_bounds(mesh: &TessellatedPath) -> Rect {
    let mut min = glam::Vec2::splat(f32::MAX);
    let mut max = glam::Vec2::splat(f32::MIN);
    if mesh.vertices.is_empty() {
        return Rect::ZERO;
    }
    for [x, y] in &mesh.vertices {
        min = min.min(glam::Vec2::new(*x, *y));
        max = max.max(glam::Vec2::new(*x, *y));
    }
    Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
}

/// Point-in-triangle test via edge sign checks, tolerant of either winding.
fn point_in_triangle(p: glam::Vec2, a: glam::Vec2, b: glam::Vec2, c: glam::Vec2) -> bool {
    let d1 = (b - a).perp_dot(p - a);
    let d2 = (c - b).perp_dot(p - b);
    let d3 = (a - c).perp_dot(p - c);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tessellate::DEFAULT_TOLERANCE;

    #[test]
    fn test_empty_region() {
        let region = Region::empty();
        assert!(region.is_empty());
        assert!(!region.contains(Point::ZERO));

        let from_empty_path = Region::from_path(&Path::new(), DEFAULT_TOLERANCE).unwrap();
        assert!(from_empty_path.is_empty());
    }

    #[test]
    fn test_rect_region() {
        let path = Path::rect(Rect::new(0.0, 0.0, 100.0, 40.0));
        let region = Region::from_path(&path, DEFAULT_TOLERANCE).unwrap();

        assert!(region.contains(Point::new(50.0, 20.0)));
        assert!(region.contains(Point::new(1.0, 1.0)));
        assert!(!region.contains(Point::new(150.0, 20.0)));
        assert!(!region.contains(Point::new(50.0, -5.0)));
    }

    #[test]
    fn test_rounded_rect_region_excludes_corners() {
        // 100x40 at radius 20: corner points of the old rectangular bounds
        // fall outside the rounded silhouette.
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 40.0), 20.0);
        let region = Region::from_path(&path, DEFAULT_TOLERANCE).unwrap();

        assert!(region.contains(Point::new(50.0, 20.0)));
        assert!(region.contains(Point::new(20.0, 20.0)));

        for corner in [
            Point::new(1.0, 1.0),
            Point::new(99.0, 1.0),
            Point::new(99.0, 39.0),
            Point::new(1.0, 39.0),
        ] {
            assert!(!region.contains(corner), "corner {corner:?} should be out");
        }
    }

    #[test]
    fn test_region_bounds_match_path() {
        let path = Path::rounded_rect(Rect::new(10.0, 10.0, 80.0, 30.0), 8.0);
        let region = Region::from_path(&path, DEFAULT_TOLERANCE).unwrap();
        let bounds = region.bounds();

        assert!((bounds.left() - 10.0).abs() < 0.5);
        assert!((bounds.top() - 10.0).abs() < 0.5);
        assert!((bounds.right() - 90.0).abs() < 0.5);
        assert!((bounds.bottom() - 40.0).abs() < 0.5);
    }
}
