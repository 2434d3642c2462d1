//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the common implementation details for
//! widgets: geometry assigned by the host layout, visibility and enabled
//! state, the dirty flag that backs redraw requests, and the hit-test
//! region maintained by painting.

use rondel_core::Signal;
use rondel_render::{Point, Rect, Region, Size};

/// The base implementation for widgets.
///
/// This struct provides the functionality every widget needs:
/// - Geometry management (position and size, owned by the host layout)
/// - Visibility and enabled state
/// - Redraw requests ([`update`](Self::update) / [`needs_repaint`](Self::needs_repaint))
/// - The hit-test region that makes a widget interactively non-rectangular
///
/// Widget implementations include this as a field and delegate common
/// operations to it.
pub struct WidgetBase {
    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    /// Whether the widget is visible.
    visible: bool,

    /// Whether the widget is enabled (can receive input).
    enabled: bool,

    /// Whether the widget needs to be repainted.
    needs_repaint: bool,

    /// The hit/paint region, set during paint. `None` falls back to the
    /// rectangular bounds.
    hit_region: Option<Region>,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,

    /// Signal emitted when enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetBase {
    /// Create a new widget base.
    pub fn new() -> Self {
        Self {
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            needs_repaint: true,
            hit_region: None,
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// Called by the host layout. Emits `geometry_changed` and marks the
    /// widget dirty if the geometry actually changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.needs_repaint = true;
            self.geometry_changed.emit(rect);
        }
    }

    /// Get the widget's position relative to its parent.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Resize the widget.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.set_geometry(Rect {
            origin: self.geometry.origin,
            size: Size::new(width, height),
        });
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.geometry.size.width
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.geometry.size.height
    }

    /// Get a rectangle representing the widget's local coordinate space.
    ///
    /// This is always positioned at (0, 0) with the widget's size.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.size.width, self.geometry.size.height)
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the widget is visible.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
            self.visible_changed.emit(visible);
        }
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_repaint = true;
            self.enabled_changed.emit(enabled);
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the widget.
    ///
    /// This is the redraw-request primitive: it marks the widget dirty so
    /// the host schedules a repaint. Multiple calls before the next paint
    /// are coalesced.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint flag (called at the end of painting).
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }

    // =========================================================================
    // Hit Region
    // =========================================================================

    /// The widget's current hit/paint region, if painting has set one.
    pub fn hit_region(&self) -> Option<&Region> {
        self.hit_region.as_ref()
    }

    /// Set the hit/paint region.
    ///
    /// Called during paint so the region tracks the painted silhouette
    /// across resizes. Does not mark the widget dirty.
    pub fn set_hit_region(&mut self, region: Option<Region>) {
        self.hit_region = region;
    }

    /// Check if a point (in local coordinates) is inside the widget.
    ///
    /// When painting has installed a hit region, the region decides; the
    /// host must not deliver pointer events outside it. Before the first
    /// paint the rectangular bounds are used.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        match &self.hit_region {
            Some(region) => region.contains(point),
            None => self.rect().contains(point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_base_is_dirty() {
        let base = WidgetBase::new();
        assert!(base.needs_repaint());
        assert!(base.is_visible());
        assert!(base.is_enabled());
        assert_eq!(base.geometry(), Rect::ZERO);
    }

    #[test]
    fn test_set_geometry_marks_dirty_and_signals() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicU32, Ordering};

        let mut base = WidgetBase::new();
        base.clear_repaint_flag();

        let changes = Arc::new(AtomicU32::new(0));
        let changes_clone = changes.clone();
        base.geometry_changed.connect(move |_| {
            changes_clone.fetch_add(1, Ordering::SeqCst);
        });

        base.set_geometry(Rect::new(0.0, 0.0, 100.0, 40.0));
        assert!(base.needs_repaint());
        assert_eq!(changes.load(Ordering::SeqCst), 1);

        // Setting the same geometry again is a no-op.
        base.clear_repaint_flag();
        base.set_geometry(Rect::new(0.0, 0.0, 100.0, 40.0));
        assert!(!base.needs_repaint());
        assert_eq!(changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_contains_point_without_region_uses_rect() {
        let mut base = WidgetBase::new();
        base.set_geometry(Rect::new(10.0, 10.0, 100.0, 40.0));

        // Local coordinates, rectangular bounds.
        assert!(base.contains_point(Point::new(1.0, 1.0)));
        assert!(!base.contains_point(Point::new(101.0, 20.0)));
    }
}
