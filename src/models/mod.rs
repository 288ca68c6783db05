//! Timetable domain models.
//!
//! Provides the data types the calendar operates on: timeslots, sections
//! groups with their lock state, activities, and raw catalog records.
//!
//! # Domain Mappings
//!
//! | u-timetable | Meaning |
//! |-------------|---------|
//! | Timeslot | Contiguous half-hour cells on one day |
//! | Section | One meeting-time option |
//! | Sections | Mutually exclusive options for a lecture, recitation, ... |
//! | Activity | A class or a free-form commitment on the calendar |
//! | ClassRecord | A class as delivered by the catalog |

mod activity;
mod catalog;
mod section;
mod timeslot;

pub use activity::{Activity, Class, NonClass};
pub use catalog::{Catalog, ClassRecord, SectionRecord, SectionsRecord};
pub use section::{Section, SectionKind, SectionLock, SectionOption, Sections};
pub use timeslot::Timeslot;
