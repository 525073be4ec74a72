//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing one `[MODE] <NAME>` line per event
//! to the `log` facade (stderr via env_logger in the binary).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

/// The single line logged for `event`.
pub fn format_event(event: &AppEvent) -> String {
    match event {
        AppEvent::Started(mode) | AppEvent::ModeChanged { to: mode, .. } => {
            format!("[MODE] {}", mode.name())
        }
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        info!("{}", format_event(event));
    }
}
