//! Automatic section assignment and conflict metrics.
//!
//! Fills the cached selection of every Auto sections group so that the
//! calendar has as few overlapping meetings as possible, and reports
//! which activities still overlap.
//!
//! # Algorithm
//!
//! `SectionScheduler` runs a depth-first branch-and-bound search over the
//! Auto groups. Locked sections and non-class times are fixed occupancy.
//!
//! # Metrics
//!
//! `ConflictReport` counts overlapping timeslot pairs in total, per
//! activity, and per pair of activities.

mod conflicts;
mod sections;

pub use conflicts::{conflicts_between, count_conflicts, ConflictReport};
pub use sections::{Assignment, SchedulerConfig, SectionScheduler};
