//! Linear fare, distance and travel time model.
//!
//! Every number here is a static estimate (fixed km and minutes per stop),
//! the constants are not calibrated against real traffic. All functions are
//! total: out of range input is clamped, never rejected.

pub const RATE_PER_KM: f64 = 2.45;
pub const MIN_FARE: f64 = 10.0;
pub const KM_PER_STOP: f64 = 1.2;
pub const MINUTES_PER_STOP: u32 = 5;

/// Estimated distance of a path that touches `count` stops.
/// A negative count clamps to zero.
pub fn distance_from_stops(count: i64, km_per_stop: f64) -> f64 {
    if count < 0 {
        return 0.0;
    }
    count as f64 * km_per_stop
}

/// Fare for a distance, never below `min_fare`.
/// A negative distance clamps to the minimum fare.
pub fn fare_for_distance(distance_km: f64, rate_per_km: f64, min_fare: f64) -> f64 {
    if distance_km < 0.0 {
        return min_fare;
    }
    f64::max(min_fare, distance_km * rate_per_km)
}

/// Fare for a travelled segment: rounded to a whole amount before the
/// minimum is applied.
pub fn segment_fare(distance_km: f64, rate_per_km: f64, min_fare: f64) -> f64 {
    f64::max(min_fare, (distance_km * rate_per_km).round())
}

/// Estimated travel time over `stop_count` stops, in minutes.
/// A negative count clamps to zero.
pub fn travel_time(stop_count: i64, minutes_per_stop: u32) -> u32 {
    if stop_count < 0 {
        return 0;
    }
    stop_count as u32 * minutes_per_stop
}

/// Renders minutes as "2 hr", "45 mins" or "1 hr 30 mins".
/// The unit is always "mins", even for a single minute.
pub fn format_duration(minutes: i64) -> String {
    if minutes <= 0 {
        return "0 mins".to_string();
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        if mins > 0 {
            format!("{} hr {} mins", hours, mins)
        } else {
            format!("{} hr", hours)
        }
    } else {
        format!("{} mins", mins)
    }
}

/// One decimal place, the precision route distances are stored at.
pub fn round_to_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

#[test]
fn distance_scales_with_stops() {
    assert_eq!(distance_from_stops(10, KM_PER_STOP), 12.0);
    assert_eq!(distance_from_stops(0, KM_PER_STOP), 0.0);
    assert_eq!(distance_from_stops(8, 2.0), 16.0);
}

#[test]
fn distance_negative_count_clamps() {
    assert_eq!(distance_from_stops(-3, KM_PER_STOP), 0.0);
}

#[test]
fn fare_above_minimum() {
    assert_eq!(fare_for_distance(10.0, RATE_PER_KM, MIN_FARE), 24.5);
}

#[test]
fn fare_clamps_to_minimum() {
    assert_eq!(fare_for_distance(2.0, RATE_PER_KM, MIN_FARE), MIN_FARE);
    assert_eq!(fare_for_distance(0.0, RATE_PER_KM, MIN_FARE), MIN_FARE);
    assert_eq!(fare_for_distance(-5.0, RATE_PER_KM, MIN_FARE), MIN_FARE);
}

#[test]
fn fare_custom_rate_and_minimum() {
    assert_eq!(fare_for_distance(10.0, 3.0, 10.0), 30.0);
    assert_eq!(fare_for_distance(5.0, RATE_PER_KM, 50.0), 50.0);
}

#[test]
fn segment_fare_rounds_whole() {
    assert_eq!(segment_fare(10.0, RATE_PER_KM, MIN_FARE), 25.0);
    assert_eq!(segment_fare(2.0, RATE_PER_KM, MIN_FARE), MIN_FARE);
}

#[test]
fn travel_time_scales_with_stops() {
    assert_eq!(travel_time(6, MINUTES_PER_STOP), 30);
    assert_eq!(travel_time(0, MINUTES_PER_STOP), 0);
    assert_eq!(travel_time(-2, MINUTES_PER_STOP), 0);
}

#[test]
fn format_hours_and_minutes() {
    assert_eq!(format_duration(90), "1 hr 30 mins");
}

#[test]
fn format_whole_hours() {
    assert_eq!(format_duration(120), "2 hr");
}

#[test]
fn format_minutes_only() {
    assert_eq!(format_duration(45), "45 mins");
    assert_eq!(format_duration(1), "1 mins");
}

#[test]
fn format_zero_and_negative() {
    assert_eq!(format_duration(0), "0 mins");
    assert_eq!(format_duration(-30), "0 mins");
}

#[test]
fn round_to_tenth_keeps_one_decimal() {
    assert_eq!(round_to_tenth(6.4799999), 6.5);
    assert_eq!(round_to_tenth(6.0), 6.0);
}
