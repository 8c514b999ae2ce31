//! Trading-session and file-timestamp helpers.
//!
//! Futures output files carry a session tag derived from the local wall
//! clock *at save time* (the FORTS day session ends at 19:00 local). The tag
//! labels the file, not the trades themselves; a file saved after the
//! evening open can still contain day-session trades.

use chrono::{DateTime, Local, Timelike};

/// Trading session tag used in futures filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    /// Day session, before 19:00 local.
    Day,
    /// Evening session, 19:00 local onwards.
    Evening,
}

impl Session {
    /// Session for a given local wall-clock instant.
    pub fn at(now: DateTime<Local>) -> Self {
        if now.hour() < 19 { Session::Day } else { Session::Evening }
    }

    /// Filename tag: `"day"` or `"evening"`.
    pub fn tag(&self) -> &'static str {
        match self {
            Session::Day => "day",
            Session::Evening => "evening",
        }
    }
}

/// `YYYY-MM-DD` date component for filenames.
pub fn file_date(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// `HH-MM` minute-resolution time component for futures filenames.
pub fn file_time(now: DateTime<Local>) -> String {
    now.format("%H-%M").to_string()
}
