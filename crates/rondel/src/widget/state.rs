//! The interaction state machine for button-like widgets.
//!
//! Pointer events map onto a three-state machine through the pure
//! [`transition`] function. The widget applies the side effects (selecting
//! the active fill color, requesting a redraw, emitting signals) outside
//! the transition, which keeps the machine itself trivially testable.

use rondel_render::Color;

use super::style::ButtonStyle;

/// The visual interaction state of a button.
///
/// Transient: re-derived from the last pointer event, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No pointer over the widget.
    #[default]
    Idle,
    /// Pointer over the widget, no button held.
    Hovered,
    /// Primary button held on the widget.
    Pressed,
}

impl InteractionState {
    /// The fill color this state selects from a style.
    pub fn fill_color(&self, style: &ButtonStyle) -> Color {
        match self {
            Self::Idle => style.idle_color,
            Self::Hovered => style.hover_color,
            Self::Pressed => style.pressed_color,
        }
    }
}

/// Pointer events reported by the host, as seen by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer entered the widget.
    Entered,
    /// The pointer left the widget.
    Left,
    /// The primary button went down over the widget.
    Pressed,
    /// The primary button was released.
    Released,
}

/// The outcome of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    /// The state after the event.
    pub next: InteractionState,
    /// Whether the state actually changed (and a redraw is due).
    pub changed: bool,
}

/// Compute the next state for a pointer event.
///
/// The function is total: pairs outside the transition table are identity
/// transitions with `changed == false`, so repeating an event from a stable
/// state is a no-op. Leaving the widget always cancels hover, taking
/// priority over the press state: `Pressed` + `Left` lands on `Idle`, not
/// `Hovered`.
pub fn transition(state: InteractionState, event: PointerEvent) -> StateChange {
    use InteractionState as S;
    use PointerEvent as E;

    let next = match (state, event) {
        (S::Idle, E::Entered) => S::Hovered,
        (S::Hovered, E::Left) => S::Idle,
        (S::Hovered, E::Pressed) => S::Pressed,
        (S::Pressed, E::Released) => S::Hovered,
        (S::Pressed, E::Left) => S::Idle,
        // Press without a prior enter (e.g. touch, or a synthetic click).
        (S::Idle, E::Pressed) => S::Pressed,
        (current, _) => current,
    };

    StateChange {
        next,
        changed: next != state,
    }
}
