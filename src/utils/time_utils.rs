use chrono::{DateTime, Local};

/// Monotonic clock that also works on wasm32 (std::time::Instant panics
/// there). Used for debounce timing and worker duration measurements.
pub use web_time::Instant as AppInstant;

/// Wall-clock time for the "Last updated" line, local timezone.
pub fn format_clock_time(t: &DateTime<Local>) -> String {
    t.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_clock_time() {
        let t = Local.with_ymd_and_hms(2024, 6, 1, 9, 5, 30).unwrap();
        assert_eq!(format_clock_time(&t), "09:05:30");
    }
}
