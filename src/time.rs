//! Slot codec.
//!
//! Converts between slot indices and calendar representations.
//!
//! # Slot Model
//! The week view has 5 days (Mon–Fri) of [`SLOTS_PER_DAY`] half-hour cells
//! starting at 8:00 AM. A slot is `30 * day + half_hour`, so slots range
//! over `0..SLOT_COUNT`.
//!
//! # Reference Week
//! Dates are anchored to the week of 2001-01-01, which starts on a Monday.
//! Only the weekday and time of day carry meaning; the absolute date exists
//! so that calendar widgets can place events.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Half-hour calendar cell index.
pub type Slot = u32;

/// Number of weekdays shown.
pub const DAYS_PER_WEEK: Slot = 5;
/// Number of half-hour cells per day.
pub const SLOTS_PER_DAY: Slot = 30;
/// Total number of slots in the week.
pub const SLOT_COUNT: Slot = DAYS_PER_WEEK * SLOTS_PER_DAY;
/// Hour of the first cell of each day.
pub const FIRST_HOUR: u32 = 8;

/// Display strings for each weekday, in slot order.
pub const WEEKDAY_STRINGS: [&str; DAYS_PER_WEEK as usize] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// Display strings for each half-hour cell of a day, in slot order.
pub const TIMESLOT_STRINGS: [&str; SLOTS_PER_DAY as usize] = [
    "8:00 AM", "8:30 AM", "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM",
    "12:00 PM", "12:30 PM", "1:00 PM", "1:30 PM", "2:00 PM", "2:30 PM", "3:00 PM", "3:30 PM",
    "4:00 PM", "4:30 PM", "5:00 PM", "5:30 PM", "6:00 PM", "6:30 PM", "7:00 PM", "7:30 PM",
    "8:00 PM", "8:30 PM", "9:00 PM", "9:30 PM", "10:00 PM", "10:30 PM",
];

const REFERENCE_YEAR: i32 = 2001;
const REFERENCE_MONTH: u32 = 1;

/// Converts a slot to a date in the reference week.
///
/// Returns `None` for slots outside `0..SLOT_COUNT`.
pub fn slot_to_date(slot: Slot) -> Option<NaiveDateTime> {
    if slot >= SLOT_COUNT {
        return None;
    }
    let day = slot / SLOTS_PER_DAY + 1;
    let hour = (slot % SLOTS_PER_DAY) / 2 + FIRST_HOUR;
    let minute = (slot % 2) * 30;
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, REFERENCE_MONTH, day)?.and_hms_opt(hour, minute, 0)
}

/// Converts a date to the slot containing it.
///
/// Only the weekday and time of day are used. Returns `None` for weekends
/// and for times before 8:00 AM or after the last cell of the day.
pub fn date_to_slot(date: &NaiveDateTime) -> Option<Slot> {
    let day = date.weekday().num_days_from_monday();
    if day >= DAYS_PER_WEEK {
        return None;
    }
    let hour = date.hour().checked_sub(FIRST_HOUR)?;
    let half_hour = 2 * hour + date.minute() / 30;
    if half_hour >= SLOTS_PER_DAY {
        return None;
    }
    Some(SLOTS_PER_DAY * day + half_hour)
}

/// Weekday string for a slot, e.g. `"Mon"`.
pub fn slot_to_day_string(slot: Slot) -> Option<&'static str> {
    if slot >= SLOT_COUNT {
        return None;
    }
    WEEKDAY_STRINGS.get((slot / SLOTS_PER_DAY) as usize).copied()
}

/// Time-of-day string for a slot, e.g. `"9:30 AM"`.
pub fn slot_to_time_string(slot: Slot) -> Option<&'static str> {
    if slot >= SLOT_COUNT {
        return None;
    }
    TIMESLOT_STRINGS.get((slot % SLOTS_PER_DAY) as usize).copied()
}

/// Inverse of [`slot_to_day_string`] and [`slot_to_time_string`].
///
/// Returns `None` (the out-of-range result) if either string is not in its
/// table.
pub fn day_time_to_slot(day: &str, time: &str) -> Option<Slot> {
    let day_index = WEEKDAY_STRINGS.iter().position(|d| *d == day)?;
    let time_index = TIMESLOT_STRINGS.iter().position(|t| *t == time)?;
    Some(SLOTS_PER_DAY * day_index as Slot + time_index as Slot)
}
