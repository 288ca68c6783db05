//! Branch-and-bound section assignment.
//!
//! # Algorithm
//!
//! 1. Collect fixed occupancy: non-class timeslots and the sections of
//!    locked groups.
//! 2. Collect choices: every Auto group with at least one section, in
//!    activity order, then group order.
//! 3. Depth-first over choices, trying sections in catalog order. A branch
//!    is cut as soon as its partial conflict count reaches the best found.
//! 4. Write the best choice into each Auto group's cached selection.
//!
//! Only strictly better leaves replace the incumbent, so the first optimum
//! in search order wins and the result is deterministic.
//!
//! # Complexity
//! Worst case O(s^g) for g Auto groups with s sections each; bounded by
//! `SchedulerConfig::max_nodes`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::conflicts::{conflicts_between, count_conflicts};
use crate::models::{Activity, Timeslot};

/// Search limits for [`SectionScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Maximum search nodes to expand. The first complete assignment is always reached.
    pub max_nodes: usize,
}

impl SchedulerConfig {
    /// Sets the node limit.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { max_nodes: 100_000 }
    }
}

/// Outcome of an auto assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    /// Overlapping timeslot pairs in the chosen calendar.
    pub conflicts: usize,
    /// Search nodes expanded.
    pub explored: usize,
    /// Whether the search finished within the node limit.
    pub complete: bool,
}

/// One Auto group to decide.
struct Choice {
    activity: usize,
    group: usize,
    /// Timeslots per section, in catalog order.
    options: Vec<Vec<Timeslot>>,
    /// Conflicts of each option with fixed occupancy and with itself.
    base_cost: Vec<usize>,
}

struct Search<'a> {
    choices: &'a [Choice],
    max_nodes: usize,
    path: Vec<usize>,
    best: Option<(usize, Vec<usize>)>,
    explored: usize,
    truncated: bool,
}

impl Search<'_> {
    fn run(&mut self, depth: usize, cost: usize) {
        if let Some((best_cost, _)) = &self.best {
            if cost >= *best_cost {
                return;
            }
            if self.explored >= self.max_nodes {
                self.truncated = true;
                return;
            }
        }
        if depth == self.choices.len() {
            self.best = Some((cost, self.path.clone()));
            return;
        }

        self.explored += 1;
        let choices = self.choices;
        let choice = &choices[depth];
        for (option, slots) in choice.options.iter().enumerate() {
            let mut added = choice.base_cost[option];
            for (prev_depth, &prev_option) in self.path.iter().enumerate() {
                added += conflicts_between(slots, &choices[prev_depth].options[prev_option]);
            }
            self.path.push(option);
            self.run(depth + 1, cost + added);
            self.path.pop();
        }
    }
}

/// Assigns sections to Auto groups to minimize calendar conflicts.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Activity, Class, NonClass, Section, SectionKind, Sections, Timeslot};
/// use u_timetable::scheduler::SectionScheduler;
///
/// let lecture = Sections::new(SectionKind::Lecture)
///     .with_section(Section::new(0, "M9").with_timeslot(Timeslot::new(2, 2)))
///     .with_section(Section::new(1, "M10").with_timeslot(Timeslot::new(4, 2)));
/// let mut activities = vec![
///     Activity::from(NonClass::new("nc-1", "Work").with_timeslot(Timeslot::new(2, 2))),
///     Activity::from(Class::new("6.042J", "Math for CS").with_sections(lecture)),
/// ];
///
/// let result = SectionScheduler::new().assign(&mut activities);
/// assert_eq!(result.conflicts, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SectionScheduler {
    config: SchedulerConfig,
}

impl SectionScheduler {
    /// Creates a scheduler with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search limits.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Fills the cached selection of every Auto group, in place.
    ///
    /// Locked groups, None groups, and non-class activities are never modified.
    pub fn assign(&self, activities: &mut [Activity]) -> Assignment {
        let (fixed, choices) = Self::collect(activities);
        let fixed_cost = count_conflicts(&fixed);

        let mut search = Search {
            choices: &choices,
            max_nodes: self.config.max_nodes,
            path: Vec::with_capacity(choices.len()),
            best: None,
            explored: 0,
            truncated: false,
        };
        search.run(0, fixed_cost);

        let explored = search.explored;
        let complete = !search.truncated;
        let (conflicts, picks) = search.best.unwrap_or((fixed_cost, Vec::new()));

        for (choice, &pick) in choices.iter().zip(&picks) {
            if let Activity::Class(class) = &mut activities[choice.activity] {
                class.sections[choice.group].set_auto_selection(Some(pick));
            }
        }

        debug!(
            groups = choices.len(),
            conflicts, explored, complete, "auto-assigned sections"
        );
        Assignment {
            conflicts,
            explored,
            complete,
        }
    }

    fn collect(activities: &[Activity]) -> (Vec<Timeslot>, Vec<Choice>) {
        let mut fixed = Vec::new();
        let mut choices = Vec::new();

        for (activity, act) in activities.iter().enumerate() {
            match act {
                Activity::NonClass(nc) => fixed.extend(nc.timeslots.iter().copied()),
                Activity::Class(class) => {
                    for (group, secs) in class.sections.iter().enumerate() {
                        if secs.is_locked() {
                            if let Some(sec) = secs.selected() {
                                fixed.extend(sec.timeslots.iter().copied());
                            }
                        } else {
                            let options: Vec<Vec<Timeslot>> =
                                secs.sections.iter().map(|s| s.timeslots.clone()).collect();
                            choices.push(Choice {
                                activity,
                                group,
                                options,
                                base_cost: Vec::new(),
                            });
                        }
                    }
                }
            }
        }

        for choice in &mut choices {
            choice.base_cost = choice
                .options
                .iter()
                .map(|slots| conflicts_between(slots, &fixed) + count_conflicts(slots))
                .collect();
        }

        (fixed, choices)
    }
}
