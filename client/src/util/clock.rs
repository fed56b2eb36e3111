//! Local calendar helpers for the daily swipe reset and message timestamps.
//!
//! Browser builds read the local clock through `js_sys::Date`; the server
//! render and native tests see a fixed epoch day.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Format a calendar date as the `YYYY-MM-DD` key stored in `dailySwipes`.
pub fn day_key(year: u32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Seconds from a local time of day until the next midnight.
pub fn seconds_until_midnight(hours: u32, minutes: u32, seconds: u32) -> u32 {
    let elapsed = (hours * 3600 + minutes * 60 + seconds).min(SECONDS_PER_DAY);
    SECONDS_PER_DAY - elapsed
}

/// Render a countdown such as `"5h 07m"`, or `"<1m"` for the final minute.
pub fn format_countdown(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    match (hours, minutes) {
        (0, 0) => "<1m".to_owned(),
        (0, m) => format!("{m}m"),
        (h, m) => format!("{h}h {m:02}m"),
    }
}

/// `HH:MM` label for a message sent at the given local time.
pub fn time_label(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

/// Today's local date key.
pub fn today_key() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        day_key(now.get_full_year(), now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        day_key(1970, 1, 1)
    }
}

/// Seconds left before the local date changes.
pub fn seconds_until_reset() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        seconds_until_midnight(now.get_hours(), now.get_minutes(), now.get_seconds())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SECONDS_PER_DAY
    }
}

/// `HH:MM` label for the current local time.
pub fn now_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        time_label(now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time_label(0, 0)
    }
}

/// Current local hour, `0..24`.
pub fn current_hour() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        12
    }
}
