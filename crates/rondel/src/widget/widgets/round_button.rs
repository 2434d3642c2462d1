//! Rounded push button widget implementation.
//!
//! This module provides [`RoundButton`], a push button with a
//! rounded-rectangle silhouette, configurable border, and distinct fill
//! colors for the idle, hovered, and pressed states.
//!
//! # Example
//!
//! ```no_run
//! use rondel::widget::widgets::RoundButton;
//!
//! let button = RoundButton::new("Click me!");
//!
//! // Connect to the clicked signal
//! button.clicked.connect(|_| {
//!     println!("Button clicked!");
//! });
//! ```

use rondel_core::Signal;
use rondel_render::{
    Color, DEFAULT_TOLERANCE, FillRule, Font, FontSystem, Paint, Path, Region, Size, Stroke,
    TextLayout,
};

use crate::widget::state::{InteractionState, PointerEvent, transition};
use crate::widget::style::ButtonStyle;
use crate::widget::{MouseButton, PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent};

/// A push button with a rounded-rectangle silhouette.
///
/// The button's appearance is driven by a three-state interaction machine:
/// the pointer entering, leaving, pressing, and releasing selects between
/// the style's idle, hover, and pressed fill colors. Every transition
/// requests a redraw; painting recomputes the outline and installs it as
/// the widget's hit/paint region, so pointer events outside the rounded
/// silhouette never reach the button.
///
/// # Signals
///
/// - `clicked`: emitted when a press completes with a release inside the
///   button (leaving while held cancels the click)
/// - `pressed`: emitted when the primary button goes down
/// - `released`: emitted when the primary button is released
pub struct RoundButton {
    /// Widget base for common widget functionality.
    base: WidgetBase,

    /// The button's visual configuration.
    style: ButtonStyle,

    /// Current interaction state. Derived purely from pointer events.
    state: InteractionState,

    /// Signal emitted when the button is clicked.
    pub clicked: Signal<()>,

    /// Signal emitted when the button is pressed down.
    pub pressed: Signal<()>,

    /// Signal emitted when the button is released.
    pub released: Signal<()>,
}

impl RoundButton {
    /// Default preferred size, used as the floor of the size hint.
    pub const DEFAULT_SIZE: Size = Size::new(100.0, 40.0);

    /// Horizontal label padding in pixels.
    const H_PADDING: f32 = 16.0;
    /// Vertical label padding in pixels.
    const V_PADDING: f32 = 8.0;

    /// Create a new round button with the specified label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            style: ButtonStyle::with_label(label),
            state: InteractionState::Idle,
            clicked: Signal::new(),
            pressed: Signal::new(),
            released: Signal::new(),
        }
    }

    // =========================================================================
    // Label
    // =========================================================================

    /// Get the button's label text.
    pub fn label(&self) -> &str {
        &self.style.label
    }

    /// Set the button's label text.
    pub fn set_label(&mut self, label: impl Into<String>) {
        let label = label.into();
        if self.style.label != label {
            self.style.label = label;
            self.base.update();
        }
    }

    /// Set the label using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.style.label = label.into();
        self
    }

    // =========================================================================
    // Corner Radius
    // =========================================================================

    /// Get the corner radius in pixels.
    pub fn corner_radius(&self) -> u32 {
        self.style.corner_radius
    }

    /// Set the corner radius in pixels.
    ///
    /// A radius larger than half the shorter widget dimension is clamped at
    /// paint time, degenerating the shape to a stadium.
    pub fn set_corner_radius(&mut self, radius: u32) {
        if self.style.corner_radius != radius {
            self.style.corner_radius = radius;
            self.base.update();
        }
    }

    /// Set corner radius using builder pattern.
    pub fn with_corner_radius(mut self, radius: u32) -> Self {
        self.style.corner_radius = radius;
        self
    }

    // =========================================================================
    // Border
    // =========================================================================

    /// Get the border color.
    pub fn border_color(&self) -> Color {
        self.style.border_color
    }

    /// Set the border color.
    pub fn set_border_color(&mut self, color: Color) {
        if self.style.border_color != color {
            self.style.border_color = color;
            self.base.update();
        }
    }

    /// Set border color using builder pattern.
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.style.border_color = color;
        self
    }

    /// Get the border thickness in pixels.
    pub fn border_thickness(&self) -> u32 {
        self.style.border_thickness
    }

    /// Set the border thickness in pixels. 0 disables the border stroke.
    pub fn set_border_thickness(&mut self, thickness: u32) {
        if self.style.border_thickness != thickness {
            self.style.border_thickness = thickness;
            self.base.update();
        }
    }

    /// Set border thickness using builder pattern.
    pub fn with_border_thickness(mut self, thickness: u32) -> Self {
        self.style.border_thickness = thickness;
        self
    }

    // =========================================================================
    // Fill Colors
    // =========================================================================

    /// Get the idle (background) fill color.
    pub fn idle_color(&self) -> Color {
        self.style.idle_color
    }

    /// Set the idle (background) fill color.
    pub fn set_idle_color(&mut self, color: Color) {
        if self.style.idle_color != color {
            self.style.idle_color = color;
            self.base.update();
        }
    }

    /// Set idle color using builder pattern.
    pub fn with_idle_color(mut self, color: Color) -> Self {
        self.style.idle_color = color;
        self
    }

    /// Get the hover fill color.
    pub fn hover_color(&self) -> Color {
        self.style.hover_color
    }

    /// Set the hover fill color.
    pub fn set_hover_color(&mut self, color: Color) {
        if self.style.hover_color != color {
            self.style.hover_color = color;
            self.base.update();
        }
    }

    /// Set hover color using builder pattern.
    pub fn with_hover_color(mut self, color: Color) -> Self {
        self.style.hover_color = color;
        self
    }

    /// Get the pressed fill color.
    pub fn pressed_color(&self) -> Color {
        self.style.pressed_color
    }

    /// Set the pressed fill color.
    pub fn set_pressed_color(&mut self, color: Color) {
        if self.style.pressed_color != color {
            self.style.pressed_color = color;
            self.base.update();
        }
    }

    /// Set pressed color using builder pattern.
    pub fn with_pressed_color(mut self, color: Color) -> Self {
        self.style.pressed_color = color;
        self
    }

    // =========================================================================
    // Foreground and Font
    // =========================================================================

    /// Get the label text color.
    pub fn foreground(&self) -> Color {
        self.style.foreground
    }

    /// Set the label text color.
    pub fn set_foreground(&mut self, color: Color) {
        if self.style.foreground != color {
            self.style.foreground = color;
            self.base.update();
        }
    }

    /// Set foreground color using builder pattern.
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.style.foreground = color;
        self
    }

    /// Get the label font.
    pub fn font(&self) -> &Font {
        &self.style.font
    }

    /// Set the label font.
    pub fn set_font(&mut self, font: Font) {
        if self.style.font != font {
            self.style.font = font;
            self.base.update();
        }
    }

    /// Set font using builder pattern.
    pub fn with_font(mut self, font: Font) -> Self {
        self.style.font = font;
        self
    }

    // =========================================================================
    // Style Access
    // =========================================================================

    /// Get the full style.
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Replace the full style.
    pub fn set_style(&mut self, style: ButtonStyle) {
        if self.style != style {
            self.style = style;
            self.base.update();
        }
    }

    // =========================================================================
    // Interaction State
    // =========================================================================

    /// The current interaction state.
    pub fn interaction_state(&self) -> InteractionState {
        self.state
    }

    /// The fill color selected by the current interaction state.
    pub fn active_fill(&self) -> Color {
        self.state.fill_color(&self.style)
    }

    /// Check if the pointer is currently over the button.
    pub fn is_hovered(&self) -> bool {
        self.state == InteractionState::Hovered
    }

    /// Check if the button is currently held down.
    pub fn is_pressed(&self) -> bool {
        self.state == InteractionState::Pressed
    }

    /// Programmatically click the button.
    pub fn click(&mut self) {
        if !self.base.is_enabled() {
            return;
        }
        self.clicked.emit(());
        self.base.update();
    }

    /// Run one pointer event through the state machine and apply its side
    /// effects (redraw request on change).
    fn apply_pointer(&mut self, event: PointerEvent) {
        let change = transition(self.state, event);
        if change.changed {
            tracing::trace!(
                target: "rondel::widget",
                from = ?self.state,
                to = ?change.next,
                event = ?event,
                "state transition"
            );
            self.state = change.next;
            self.base.update();
        }
    }
}

impl Widget for RoundButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let mut font_system = FontSystem::new();
        let layout = TextLayout::new(&mut font_system, &self.style.label, &self.style.font);

        let preferred = Size::new(
            (layout.width() + Self::H_PADDING * 2.0).max(Self::DEFAULT_SIZE.width),
            (layout.height() + Self::V_PADDING * 2.0).max(Self::DEFAULT_SIZE.height),
        );

        SizeHint::new(preferred).with_minimum_dimensions(64.0, 24.0)
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let path = Path::rounded_rect(rect, self.style.corner_radius as f32);

        // The hit region must track the painted outline on every paint; the
        // host may have resized the widget since the last one.
        match Region::from_path(&path, DEFAULT_TOLERANCE) {
            Ok(region) => self.base.set_hit_region(Some(region)),
            Err(err) => {
                tracing::warn!(target: "rondel::widget", error = %err, "hit region not updated");
            }
        }

        let fill = self.active_fill();

        let renderer = ctx.renderer();
        renderer.save();
        renderer.clip_path(&path);
        renderer.fill_path(&path, Paint::solid(fill), FillRule::NonZero);

        if self.style.border_thickness > 0 {
            let stroke = Stroke::new(self.style.border_color, self.style.border_thickness as f32);
            renderer.stroke_path(&path, &stroke);
        }

        if !self.style.label.is_empty() {
            let mut font_system = FontSystem::new();
            let layout = TextLayout::new(&mut font_system, &self.style.label, &self.style.font);
            // Centered within the full widget rectangle, not the inset shape.
            let origin = layout.centered_origin(rect);
            renderer.draw_text(&self.style.label, origin, &self.style.font, self.style.foreground);
        }

        renderer.restore();
        self.base.clear_repaint_flag();
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        if !self.base.is_enabled() {
            return false;
        }

        match event {
            WidgetEvent::Enter(_) => {
                self.apply_pointer(PointerEvent::Entered);
                event.accept();
                true
            }
            WidgetEvent::Leave(_) => {
                self.apply_pointer(PointerEvent::Left);
                event.accept();
                true
            }
            WidgetEvent::MousePress(e) if e.button == MouseButton::Left => {
                self.apply_pointer(PointerEvent::Pressed);
                self.pressed.emit(());
                event.accept();
                true
            }
            WidgetEvent::MouseRelease(e) if e.button == MouseButton::Left => {
                // A release completes a click only while still pressed; a
                // leave while held has already reset the machine to Idle.
                let completes_click = self.state == InteractionState::Pressed;
                self.apply_pointer(PointerEvent::Released);
                self.released.emit(());
                if completes_click {
                    self.clicked.emit(());
                }
                event.accept();
                true
            }
            _ => false,
        }
    }
}

// Widgets are handed between the host's setup code and its UI thread.
static_assertions::assert_impl_all!(RoundButton: Send, Sync);
