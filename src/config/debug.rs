//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every quote the worker resolves (rate, legs, duration).
    pub log_quotes: bool,

    /// Log debounce activity: edits, rescheduled windows, submissions.
    pub log_debounce: bool,

    /// Log screen changes (landing <-> converter).
    pub log_navigation: bool,

    /// Log engine channel traffic (requests out, results drained).
    pub log_engine: bool,
}

pub const DF: LogFlags = LogFlags {
    log_quotes: true,

    log_debounce: false,
    log_navigation: false,
    log_engine: false,
};
