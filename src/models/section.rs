//! Sections and section locking.
//!
//! A [`Sections`] group holds the interchangeable meeting-time options for
//! one aspect of a class (lecture, recitation, ...). At most one option is
//! selected at a time.
//!
//! # Lock States
//!
//! | State | `locked` | `selected` |
//! |-------|----------|------------|
//! | Auto | `false` | any (cached hint from auto assignment) |
//! | None | `true` | `None` |
//! | Locked(section) | `true` | `Some(section)` |
//!
//! Transitions happen only through [`Sections::lock_section`], which replaces
//! both fields at once. Every state is reachable from every other.
//!
//! A group with no sections is always in the None state.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Timeslot;
use crate::error::{Error, Result};

/// Aspect of a class that a sections group covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Lecture.
    Lecture,
    /// Recitation.
    Recitation,
    /// Laboratory.
    Lab,
    /// Design studio.
    Design,
}

impl SectionKind {
    /// Human-readable group name, e.g. `"Lecture"`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Lecture => "Lecture",
            Self::Recitation => "Recitation",
            Self::Lab => "Lab",
            Self::Design => "Design",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Lecture => "lecture",
            Self::Recitation => "recitation",
            Self::Lab => "lab",
            Self::Design => "design",
        };
        f.write_str(s)
    }
}

/// Lock state of a sections group, and the target of a lock request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLock {
    /// Left to automatic assignment.
    Auto,
    /// Explicitly no section.
    None,
    /// Pinned to the section with this ordinal.
    Section(usize),
}

impl fmt::Display for SectionLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::None => f.write_str("none"),
            Self::Section(ordinal) => write!(f, "section {ordinal}"),
        }
    }
}

/// One meeting-time option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Ordinal of this section within its group.
    pub index: usize,
    /// Catalog display string for the meeting time, e.g. `"MWF10"`.
    pub raw_time: String,
    /// Meeting times.
    pub timeslots: Vec<Timeslot>,
    /// Meeting room, if known.
    pub room: Option<String>,
}

impl Section {
    /// Creates a section with no meeting times.
    pub fn new(index: usize, raw_time: impl Into<String>) -> Self {
        Self {
            index,
            raw_time: raw_time.into(),
            timeslots: Vec::new(),
            room: None,
        }
    }

    /// Adds a meeting time.
    pub fn with_timeslot(mut self, timeslot: Timeslot) -> Self {
        self.timeslots.push(timeslot);
        self
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }
}

/// One option in a section-selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOption {
    /// Lock request issued when this option is chosen.
    pub target: SectionLock,
    /// Option label: `"auto"`, `"none"`, or the section's raw time.
    pub label: String,
    /// Whether this option reflects the current state.
    pub checked: bool,
}

/// A group of mutually exclusive sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections {
    /// Which aspect of the class this group covers.
    pub kind: SectionKind,
    /// Display name, e.g. `"Lecture"`.
    pub name: String,
    /// Options, in catalog order.
    pub sections: Vec<Section>,
    locked: bool,
    /// Position in `sections` of the selected option.
    selected: Option<usize>,
}

impl Sections {
    /// Creates an empty group in the Auto state.
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            name: kind.display_name().to_string(),
            sections: Vec::new(),
            locked: false,
            selected: None,
        }
    }

    /// Overrides the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a section option.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Whether the choice is fixed by the user rather than left to auto assignment.
    pub fn is_locked(&self) -> bool {
        self.locked || self.sections.is_empty()
    }

    /// The currently selected section, if any.
    ///
    /// In the Auto state this is the hint left by the last auto assignment.
    pub fn selected(&self) -> Option<&Section> {
        self.selected.and_then(|pos| self.sections.get(pos))
    }

    /// Current lock state.
    pub fn lock_state(&self) -> SectionLock {
        if !self.is_locked() {
            return SectionLock::Auto;
        }
        match self.selected() {
            Some(section) => SectionLock::Section(section.index),
            None => SectionLock::None,
        }
    }

    /// Finds a section by ordinal.
    pub fn section(&self, ordinal: usize) -> Option<&Section> {
        self.sections.iter().find(|s| s.index == ordinal)
    }

    fn position_of(&self, ordinal: usize) -> Option<usize> {
        self.sections.iter().position(|s| s.index == ordinal)
    }

    /// Applies a lock request.
    ///
    /// `Auto` keeps the cached selection as a hint. On a group with no
    /// sections, `Auto` resolves to `None`.
    ///
    /// # Errors
    /// [`Error::UnknownSection`] if `target` names an ordinal not in this group.
    /// The state is unchanged on error.
    pub fn lock_section(&mut self, target: SectionLock) -> Result<()> {
        let (locked, selected) = match target {
            SectionLock::Auto if self.sections.is_empty() => (true, None),
            SectionLock::Auto => (false, self.selected),
            SectionLock::None => (true, None),
            SectionLock::Section(ordinal) => {
                let pos = self
                    .position_of(ordinal)
                    .ok_or_else(|| Error::UnknownSection {
                        kind: self.kind.to_string(),
                        ordinal,
                    })?;
                (true, Some(pos))
            }
        };
        debug!(kind = %self.kind, from = %self.lock_state(), to = %target, "lock section");
        self.locked = locked;
        self.selected = selected;
        Ok(())
    }

    /// Stores an auto-assignment choice by position. Ignored unless in the Auto state.
    pub(crate) fn set_auto_selection(&mut self, position: Option<usize>) {
        if !self.is_locked() {
            self.selected = position.filter(|&p| p < self.sections.len());
        }
    }

    /// Whether the option for `target` should be shown checked.
    ///
    /// Exactly one of `Auto`, `None`, and the group's sections is checked.
    pub fn is_checked(&self, target: SectionLock) -> bool {
        self.lock_state() == target
    }

    /// Options for a selection control: `auto`, `none`, then each section.
    pub fn options(&self) -> Vec<SectionOption> {
        let fixed = [
            (SectionLock::Auto, "auto".to_string()),
            (SectionLock::None, "none".to_string()),
        ];
        let sections = self
            .sections
            .iter()
            .map(|s| (SectionLock::Section(s.index), s.raw_time.clone()));
        fixed
            .into_iter()
            .chain(sections)
            .map(|(target, label)| SectionOption {
                target,
                label,
                checked: self.is_checked(target),
            })
            .collect()
    }
}
