//! Calendar conflict metrics.
//!
//! A conflict is one pair of occupied timeslots that share a slot.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total | Overlapping timeslot pairs across all activities |
//! | By activity | Pairs involving the activity |
//! | Pairs | Activity pairs with at least one overlap |

use std::collections::BTreeMap;

use crate::models::{Activity, Timeslot};

/// Overlapping pairs within one list of timeslots.
pub fn count_conflicts(timeslots: &[Timeslot]) -> usize {
    timeslots
        .iter()
        .enumerate()
        .map(|(i, a)| timeslots[i + 1..].iter().filter(|b| a.overlaps(b)).count())
        .sum()
}

/// Overlapping pairs with one timeslot from each list.
pub fn conflicts_between(a: &[Timeslot], b: &[Timeslot]) -> usize {
    a.iter()
        .map(|x| b.iter().filter(|y| x.overlaps(y)).count())
        .sum()
}

/// Overlaps among a set of activities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictReport {
    /// Total overlapping timeslot pairs.
    pub total: usize,
    /// Overlapping pairs involving each activity ID.
    pub by_activity: BTreeMap<String, usize>,
    /// Activity ID pairs (in list order) with their overlap counts.
    pub pairs: Vec<(String, String, usize)>,
}

impl ConflictReport {
    /// Computes conflicts for the activities' current selections.
    pub fn calculate(activities: &[Activity]) -> Self {
        let slots: Vec<Vec<Timeslot>> = activities.iter().map(Activity::timeslots).collect();
        let mut report = Self::default();

        for (i, act) in activities.iter().enumerate() {
            let internal = count_conflicts(&slots[i]);
            if internal > 0 {
                report.total += internal;
                *report.by_activity.entry(act.id().to_string()).or_insert(0) += internal;
            }
            for (j, other) in activities.iter().enumerate().skip(i + 1) {
                let n = conflicts_between(&slots[i], &slots[j]);
                if n == 0 {
                    continue;
                }
                report.total += n;
                *report.by_activity.entry(act.id().to_string()).or_insert(0) += n;
                *report.by_activity.entry(other.id().to_string()).or_insert(0) += n;
                report
                    .pairs
                    .push((act.id().to_string(), other.id().to_string(), n));
            }
        }

        report
    }

    /// Whether any activities overlap.
    pub fn has_conflicts(&self) -> bool {
        self.total > 0
    }

    /// Overlapping pairs involving an activity.
    pub fn conflicts_for(&self, id: &str) -> usize {
        self.by_activity.get(id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NonClass;

    #[test]
    fn test_count_conflicts() {
        let slots = [Timeslot::new(0, 4), Timeslot::new(2, 2), Timeslot::new(3, 1), Timeslot::new(10, 2)];
        // (0,1) (0,2) (1,2)
        assert_eq!(count_conflicts(&slots), 3);
        assert_eq!(count_conflicts(&[]), 0);
    }

    #[test]
    fn test_conflicts_between() {
        let a = [Timeslot::new(0, 2), Timeslot::new(30, 2)];
        let b = [Timeslot::new(1, 2), Timeslot::new(32, 2)];
        assert_eq!(conflicts_between(&a, &b), 1);
    }

    #[test]
    fn test_report() {
        let acts = vec![
            Activity::from(NonClass::new("a", "A").with_timeslot(Timeslot::new(0, 4))),
            Activity::from(NonClass::new("b", "B").with_timeslot(Timeslot::new(2, 4))),
            Activity::from(NonClass::new("c", "C").with_timeslot(Timeslot::new(60, 2))),
        ];
        let report = ConflictReport::calculate(&acts);
        assert!(report.has_conflicts());
        assert_eq!(report.total, 1);
        assert_eq!(report.conflicts_for("a"), 1);
        assert_eq!(report.conflicts_for("b"), 1);
        assert_eq!(report.conflicts_for("c"), 0);
        assert_eq!(report.pairs, vec![("a".to_string(), "b".to_string(), 1)]);
    }

    #[test]
    fn test_report_empty() {
        let report = ConflictReport::calculate(&[]);
        assert!(!report.has_conflicts());
        assert!(report.pairs.is_empty());
    }
}
