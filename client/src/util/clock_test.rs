use super::*;

#[test]
fn day_key_zero_pads_month_and_day() {
    assert_eq!(day_key(2024, 3, 7), "2024-03-07");
    assert_eq!(day_key(2024, 12, 31), "2024-12-31");
}

#[test]
fn seconds_until_midnight_counts_down_the_day() {
    assert_eq!(seconds_until_midnight(0, 0, 0), 86_400);
    assert_eq!(seconds_until_midnight(23, 59, 59), 1);
    assert_eq!(seconds_until_midnight(12, 0, 0), 43_200);
}

#[test]
fn seconds_until_midnight_saturates_on_leap_seconds() {
    assert_eq!(seconds_until_midnight(23, 59, 61), 0);
}

#[test]
fn format_countdown_shows_hours_and_minutes() {
    assert_eq!(format_countdown(5 * 3600 + 7 * 60 + 30), "5h 07m");
    assert_eq!(format_countdown(42 * 60), "42m");
    assert_eq!(format_countdown(30), "<1m");
}

#[test]
fn time_label_zero_pads() {
    assert_eq!(time_label(9, 5), "09:05");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn native_clock_is_pinned_to_epoch() {
    assert_eq!(today_key(), "1970-01-01");
    assert_eq!(seconds_until_reset(), 86_400);
    assert_eq!(now_label(), "00:00");
    assert_eq!(current_hour(), 12);
}
