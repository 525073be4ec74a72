//! Outbound application events.
//!
//! The [`ModeEngine`](super::service::ModeEngine) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other
//! side decide what to do with them.

use crate::fsm::Mode;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The engine has started (carries the initial mode).
    Started(Mode),

    /// A button press advanced the mode.
    ModeChanged { from: Mode, to: Mode },
}
