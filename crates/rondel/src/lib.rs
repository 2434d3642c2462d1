//! Rondel: a rounded push-button widget for host window systems.
//!
//! Rondel provides a single widget, [`RoundButton`]: a push button with a
//! rounded-rectangle silhouette, configurable border, and distinct fill
//! colors for the idle, hovered, and pressed states. The host application's
//! window system owns the event loop, layout, and focus; it feeds the widget
//! pointer events, asks it to paint onto a [`Renderer`](render::Renderer)
//! surface, and watches the dirty flag for redraw requests.
//!
//! # Example
//!
//! ```
//! use rondel::RoundButton;
//! use rondel::render::{Color, Rect};
//! use rondel::widget::Widget;
//!
//! let mut button = RoundButton::new("OK")
//!     .with_corner_radius(12)
//!     .with_hover_color(Color::from_rgb8(230, 230, 230));
//!
//! button.clicked.connect(|_| {
//!     println!("Button clicked!");
//! });
//!
//! // The host layout assigns geometry:
//! button.set_geometry(Rect::new(0.0, 0.0, 100.0, 40.0));
//! ```

pub mod widget;

pub use rondel_core::{ConnectionGuard, ConnectionId, Signal};
pub use rondel_render as render;
pub use widget::RoundButton;
