//! Widget system for Rondel.
//!
//! This module provides the widget architecture:
//!
//! - [`Widget`] trait: the interface the host drives
//! - [`WidgetBase`]: common implementation for widget functionality
//! - Widget events for pointer input and lifecycle
//! - The interaction state machine shared by button-like widgets
//!
//! # Overview
//!
//! A widget is driven entirely by its host: the host assigns geometry from
//! its layout pass, delivers pointer events through [`Widget::event`], and
//! calls [`Widget::paint`] with a surface when the widget is dirty. The
//! widget never draws outside a paint call and never blocks.
//!
//! # Creating a Widget
//!
//! 1. Define a struct with a [`WidgetBase`] field
//! 2. Implement the [`Widget`] trait
//! 3. Provide `size_hint()` for the host layout
//! 4. Implement `paint()` for rendering
//!
//! # Coordinate System
//!
//! Widgets work in local coordinates: (0, 0) is the widget's top-left
//! corner. The host translates window events into local positions before
//! delivering them.

mod base;
mod events;
mod geometry;
pub mod state;
mod style;
mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{
    EnterEvent, EventBase, KeyboardModifiers, LeaveEvent, MouseButton, MousePressEvent,
    MouseReleaseEvent, PaintEvent, ResizeEvent, WidgetEvent,
};
pub use geometry::SizeHint;
pub use state::{InteractionState, PointerEvent, StateChange, transition};
pub use style::ButtonStyle;
pub use traits::{PaintContext, Widget};

// Re-export widgets for convenience
pub use widgets::RoundButton;
