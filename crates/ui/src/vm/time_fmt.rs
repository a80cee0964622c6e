use chrono::Duration;

/// Compact duration for the results line ("1m 05s", "42s").
#[must_use]
pub fn format_duration(value: Duration) -> String {
    let total_secs = value.num_seconds().max(0);
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_seconds_and_minutes() {
        assert_eq!(format_duration(Duration::seconds(42)), "42s");
        assert_eq!(format_duration(Duration::seconds(65)), "1m 05s");
        assert_eq!(format_duration(Duration::seconds(-3)), "0s");
    }
}
