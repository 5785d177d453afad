//! Display-date source for store-assigned date fields.

use chrono::Local;

const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Supplies the display date stamped on new records.
pub trait Clock {
    fn today(&self) -> String;
}

/// Local wall clock formatted as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> String {
        Local::now().format(DISPLAY_DATE_FORMAT).to_string()
    }
}

/// Clock pinned to one display date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock {
    date: String,
}

impl FixedClock {
    pub fn new(date: impl Into<String>) -> Self {
        Self { date: date.into() }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> String {
        self.date.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, SystemClock};

    #[test]
    fn system_clock_formats_iso_date() {
        let today = SystemClock.today();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }
}
