use std::time::Duration;

/// Requests for the shell. The engine never performs them itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenExternal { url: String },
    ScrollToSection { section: String, delay: Duration },
    /// Drop any deferred scroll that has not fired yet.
    CancelDeferred,
}
