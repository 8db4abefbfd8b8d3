//! Observable events for property validation

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Validator configuration loaded from disk
    ConfigLoaded,
    /// Property set received for validation
    PropertiesReceived,
    /// Property set passed validation
    PropertiesValidated,
    /// Property set rejected
    PropertiesRejected,
    /// Obsolete property tolerated and ignored
    ObsoletePropertyIgnored,
    /// Type token resolved
    TypeResolved,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::PropertiesReceived => "PROPERTIES_RECEIVED",
            Event::PropertiesValidated => "PROPERTIES_VALIDATED",
            Event::PropertiesRejected => "PROPERTIES_REJECTED",
            Event::ObsoletePropertyIgnored => "OBSOLETE_PROPERTY_IGNORED",
            Event::TypeResolved => "TYPE_RESOLVED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ObsoletePropertyIgnored | Event::PropertiesRejected => Severity::Warn,
            Event::PropertiesReceived | Event::TypeResolved => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
