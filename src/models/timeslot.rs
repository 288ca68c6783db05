//! Contiguous runs of slots.
//!
//! # Time Model
//! A timeslot is the half-open slot interval `[start_slot, start_slot + num_slots)`.
//! A well-formed timeslot stays within one day.

use std::fmt;
use std::ops::Range;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::time::{slot_to_date, slot_to_day_string, Slot, SLOTS_PER_DAY, SLOT_COUNT};

const DISPLAY_TIME_FORMAT: &str = "%-I:%M %p";

/// A run of consecutive slots on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timeslot {
    /// First slot (inclusive).
    pub start_slot: Slot,
    /// Number of slots covered.
    pub num_slots: Slot,
}

impl Timeslot {
    /// Creates a new timeslot.
    pub fn new(start_slot: Slot, num_slots: Slot) -> Self {
        Self {
            start_slot,
            num_slots,
        }
    }

    /// First slot after this timeslot (exclusive end).
    #[inline]
    pub fn end_slot(&self) -> Slot {
        self.start_slot.saturating_add(self.num_slots)
    }

    /// Slots covered by this timeslot.
    pub fn slots(&self) -> Range<Slot> {
        self.start_slot..self.end_slot()
    }

    /// Whether a slot falls within this timeslot.
    #[inline]
    pub fn contains(&self, slot: Slot) -> bool {
        slot >= self.start_slot && slot < self.end_slot()
    }

    /// Whether two timeslots share at least one slot.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_slot < other.end_slot() && other.start_slot < self.end_slot()
    }

    /// Whether this timeslot is non-empty and lies within a single day of the week.
    pub fn is_within_day(&self) -> bool {
        self.num_slots > 0
            && self.end_slot() <= SLOT_COUNT
            && self.start_slot % SLOTS_PER_DAY + self.num_slots <= SLOTS_PER_DAY
    }

    /// Start of this timeslot in the reference week.
    pub fn start_time(&self) -> Option<NaiveDateTime> {
        slot_to_date(self.start_slot)
    }

    /// End of this timeslot in the reference week.
    pub fn end_time(&self) -> Option<NaiveDateTime> {
        if self.num_slots == 0 {
            return self.start_time();
        }
        slot_to_date(self.end_slot() - 1).map(|last| last + Duration::minutes(30))
    }
}

impl fmt::Display for Timeslot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (
            slot_to_day_string(self.start_slot),
            self.start_time(),
            self.end_time(),
        ) {
            (Some(day), Some(start), Some(end)) => write!(
                f,
                "{day} {} – {}",
                start.format(DISPLAY_TIME_FORMAT),
                end.format(DISPLAY_TIME_FORMAT)
            ),
            _ => write!(f, "slots {}..{}", self.start_slot, self.end_slot()),
        }
    }
}
