//! Concrete widget implementations.

mod round_button;

pub use round_button::RoundButton;
