//! Logging facilities for Rondel.
//!
//! Rondel uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in the host application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Host application code...
//! }
//! ```

/// Span names used throughout Rondel for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Widget paint span.
    pub const PAINT: &str = "rondel::paint";
    /// Interaction state transition span.
    pub const STATE: &str = "rondel::state";
    /// Signal emission span.
    pub const SIGNAL: &str = "rondel::signal";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core target.
    pub const CORE: &str = "rondel_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "rondel_core::signal";
    /// Widget system target.
    pub const WIDGET: &str = "rondel::widget";
    /// Rendering target.
    pub const RENDER: &str = "rondel::render";
}
