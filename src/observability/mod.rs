//! Observability for property validation
//!
//! Structured, synchronous JSON logging of typed events.
//!
//! ```ignore
//! use cfprops::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ObsoletePropertyIgnored, &[("property", "foo")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity, LOG_LEVEL_ENV};

#[cfg(test)]
pub(crate) use logger::capture_events;

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
