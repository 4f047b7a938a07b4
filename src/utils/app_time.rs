// src/utils/app_time.rs
// `web_time` re-exports `std::time` on native and uses `performance.now()` in the browser.

use std::time::Duration;

pub type AppInstant = web_time::Instant;

pub fn now() -> AppInstant {
    AppInstant::now()
}

/// Compact duration text for the status bar: "850ms", "2.4s", "1.5m"
pub fn format_duration_short(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1_000 {
        return format!("{}ms", millis);
    }

    let seconds = duration.as_secs_f64();
    if seconds < 60.0 {
        format!("{:.1}s", seconds)
    } else {
        format!("{:.1}m", seconds / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_durations() {
        assert_eq!(format_duration_short(Duration::from_millis(850)), "850ms");
        assert_eq!(format_duration_short(Duration::from_millis(2_400)), "2.4s");
        assert_eq!(format_duration_short(Duration::from_secs(90)), "1.5m");
    }
}
