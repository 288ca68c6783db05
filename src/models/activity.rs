//! Activity models.
//!
//! An activity is anything that occupies time on the weekly calendar:
//! either a catalog [`Class`] or a free-form [`NonClass`] commitment.
//!
//! # Colors
//! Every activity carries an optional manual color chosen by the user and a
//! background color written by [`crate::color::assign_colors`]. A manual
//! color always wins.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{ClassRecord, Section, SectionKind, SectionLock, Sections, Timeslot};
use crate::color::{fallback_color, text_color, ColorScheme};
use crate::error::Result;
use crate::time::Slot;

/// A catalog class added to the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Class number, e.g. `"6.042J"`. Also the activity ID.
    pub number: String,
    /// Class title.
    pub name: String,
    /// One sections group per kind, in catalog order.
    pub sections: Vec<Sections>,
    manual_color: Option<String>,
    background_color: Option<String>,
}

impl Class {
    /// Creates a class with no sections.
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            sections: Vec::new(),
            manual_color: None,
            background_color: None,
        }
    }

    /// Adds a sections group.
    pub fn with_sections(mut self, sections: Sections) -> Self {
        self.sections.push(sections);
        self
    }

    /// Builds a class from a catalog record.
    ///
    /// Groups start in the Auto state unless the record supplies a default.
    ///
    /// # Errors
    /// [`crate::Error::UnknownSection`] if a default names a missing ordinal.
    pub fn from_record(record: &ClassRecord) -> Result<Self> {
        let mut class = Self::new(&record.number, &record.name);
        for group in &record.sections {
            let mut secs = Sections::new(group.kind);
            if let Some(name) = &group.name {
                secs = secs.with_name(name);
            }
            for (index, sec) in group.sections.iter().enumerate() {
                let mut section = Section::new(index, &sec.raw_time);
                section.timeslots = sec.timeslots.clone();
                section.room = sec.room.clone();
                secs = secs.with_section(section);
            }
            if let Some(default) = group.default {
                secs.lock_section(default)?;
            }
            class.sections.push(secs);
        }
        Ok(class)
    }

    /// Finds the sections group for a kind.
    pub fn sections_of(&self, kind: SectionKind) -> Option<&Sections> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Applies a lock request to the group of the given kind.
    ///
    /// Returns `Ok(false)` if the class has no group of that kind.
    pub fn lock_section(&mut self, kind: SectionKind, target: SectionLock) -> Result<bool> {
        match self.sections.iter_mut().find(|s| s.kind == kind) {
            Some(secs) => secs.lock_section(target).map(|()| true),
            None => Ok(false),
        }
    }

    /// Timeslots of every selected section, across all groups.
    pub fn timeslots(&self) -> Vec<Timeslot> {
        self.sections
            .iter()
            .filter_map(Sections::selected)
            .flat_map(|s| s.timeslots.iter().copied())
            .collect()
    }
}

/// A free-form commitment (work, sports, office hours).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonClass {
    /// Stable activity ID supplied by the caller.
    pub id: String,
    /// User-editable name.
    pub name: String,
    /// Occupied times, in insertion order.
    pub timeslots: Vec<Timeslot>,
    manual_color: Option<String>,
    background_color: Option<String>,
}

impl NonClass {
    /// Creates a non-class activity with no times.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            timeslots: Vec::new(),
            manual_color: None,
            background_color: None,
        }
    }

    /// Adds a timeslot at construction.
    pub fn with_timeslot(mut self, timeslot: Timeslot) -> Self {
        self.add_timeslot(timeslot);
        self
    }

    /// Renames the activity. Blank names are ignored.
    ///
    /// Returns whether the name changed.
    pub fn rename(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.name = trimmed.to_string();
        true
    }

    /// Adds a timeslot unless an identical one exists.
    ///
    /// Returns whether it was added.
    pub fn add_timeslot(&mut self, timeslot: Timeslot) -> bool {
        if self.timeslots.contains(&timeslot) {
            return false;
        }
        self.timeslots.push(timeslot);
        true
    }

    /// Removes an identical timeslot.
    ///
    /// Returns whether one was removed.
    pub fn remove_timeslot(&mut self, timeslot: &Timeslot) -> bool {
        let before = self.timeslots.len();
        self.timeslots.retain(|t| t != timeslot);
        self.timeslots.len() != before
    }

    /// Every slot covered by at least one timeslot.
    pub fn occupied_slots(&self) -> BTreeSet<Slot> {
        self.timeslots.iter().flat_map(Timeslot::slots).collect()
    }
}

/// A schedulable commitment on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Activity {
    /// A catalog class.
    Class(Class),
    /// A free-form commitment.
    NonClass(NonClass),
}

impl Activity {
    /// Stable identifier. Seeds the color hash.
    pub fn id(&self) -> &str {
        match self {
            Self::Class(c) => &c.number,
            Self::NonClass(n) => &n.id,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Class(c) => &c.name,
            Self::NonClass(n) => &n.name,
        }
    }

    /// User-chosen color override.
    pub fn manual_color(&self) -> Option<&str> {
        match self {
            Self::Class(c) => c.manual_color.as_deref(),
            Self::NonClass(n) => n.manual_color.as_deref(),
        }
    }

    /// Sets or clears the manual color override.
    pub fn set_manual_color(&mut self, color: Option<String>) {
        match self {
            Self::Class(c) => c.manual_color = color,
            Self::NonClass(n) => n.manual_color = color,
        }
    }

    /// Effective background color: the manual color if set, else the assigned one.
    pub fn background_color(&self) -> Option<&str> {
        self.manual_color().or(match self {
            Self::Class(c) => c.background_color.as_deref(),
            Self::NonClass(n) => n.background_color.as_deref(),
        })
    }

    pub(crate) fn set_background_color(&mut self, color: impl Into<String>) {
        let color = Some(color.into());
        match self {
            Self::Class(c) => c.background_color = color,
            Self::NonClass(n) => n.background_color = color,
        }
    }

    /// Background color, or the scheme's neutral color if none is assigned.
    pub fn display_color(&self, scheme: ColorScheme) -> &str {
        self.background_color()
            .unwrap_or_else(|| fallback_color(scheme))
    }

    /// Text color readable on this activity's display color.
    pub fn text_color(&self, scheme: ColorScheme) -> &'static str {
        text_color(self.display_color(scheme))
    }

    /// Occupied timeslots: selected sections for classes, stored times otherwise.
    pub fn timeslots(&self) -> Vec<Timeslot> {
        match self {
            Self::Class(c) => c.timeslots(),
            Self::NonClass(n) => n.timeslots.clone(),
        }
    }
}

impl From<Class> for Activity {
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}

impl From<NonClass> for Activity {
    fn from(non_class: NonClass) -> Self {
        Self::NonClass(non_class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SectionRecord, SectionsRecord};

    fn record() -> ClassRecord {
        ClassRecord::new("6.042J", "Mathematics for Computer Science")
            .with_sections(
                SectionsRecord::new(SectionKind::Lecture)
                    .with_section(SectionRecord::new("TR2.30-4").with_timeslot(Timeslot::new(43, 3))),
            )
            .with_sections(
                SectionsRecord::new(SectionKind::Recitation)
                    .with_section(SectionRecord::new("WF10").with_timeslot(Timeslot::new(64, 2)))
                    .with_section(SectionRecord::new("WF11").with_timeslot(Timeslot::new(66, 2)))
                    .with_default(SectionLock::Section(1)),
            )
    }

    #[test]
    fn test_from_record() {
        let class = Class::from_record(&record()).unwrap();
        assert_eq!(class.number, "6.042J");
        assert_eq!(class.sections.len(), 2);

        let lec = class.sections_of(SectionKind::Lecture).unwrap();
        assert_eq!(lec.lock_state(), SectionLock::Auto);

        let rec = class.sections_of(SectionKind::Recitation).unwrap();
        assert_eq!(rec.lock_state(), SectionLock::Section(1));
        assert_eq!(rec.selected().map(|s| s.raw_time.as_str()), Some("WF11"));
    }

    #[test]
    fn test_from_record_bad_default() {
        let rec = ClassRecord::new("8.01", "Physics I").with_sections(
            SectionsRecord::new(SectionKind::Lecture)
                .with_section(SectionRecord::new("MW9"))
                .with_default(SectionLock::Section(4)),
        );
        assert!(Class::from_record(&rec).is_err());
    }

    #[test]
    fn test_class_lock_section() {
        let mut class = Class::from_record(&record()).unwrap();
        assert!(class.lock_section(SectionKind::Lecture, SectionLock::None).unwrap());
        assert!(!class.lock_section(SectionKind::Lab, SectionLock::None).unwrap());
        assert_eq!(
            class.sections_of(SectionKind::Lecture).unwrap().lock_state(),
            SectionLock::None
        );
    }

    #[test]
    fn test_class_timeslots_follow_selection() {
        let mut class = Class::from_record(&record()).unwrap();
        assert_eq!(class.timeslots(), vec![Timeslot::new(66, 2)]);

        class
            .lock_section(SectionKind::Lecture, SectionLock::Section(0))
            .unwrap();
        assert_eq!(
            class.timeslots(),
            vec![Timeslot::new(43, 3), Timeslot::new(66, 2)]
        );
    }

    #[test]
    fn test_non_class_editing() {
        let mut nc = NonClass::new("nc-1", "New Activity");
        assert!(nc.rename("Rowing"));
        assert!(!nc.rename("   "));
        assert_eq!(nc.name, "Rowing");

        assert!(nc.add_timeslot(Timeslot::new(0, 2)));
        assert!(!nc.add_timeslot(Timeslot::new(0, 2)));
        assert!(nc.add_timeslot(Timeslot::new(1, 2)));
        assert_eq!(nc.occupied_slots().into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);

        assert!(nc.remove_timeslot(&Timeslot::new(0, 2)));
        assert!(!nc.remove_timeslot(&Timeslot::new(0, 2)));
        assert_eq!(nc.timeslots, vec![Timeslot::new(1, 2)]);
    }

    #[test]
    fn test_activity_colors() {
        let mut act: Activity = NonClass::new("nc-1", "Gym").into();
        assert_eq!(act.background_color(), None);
        assert_eq!(act.display_color(ColorScheme::Light), fallback_color(ColorScheme::Light));

        act.set_background_color("#2E7D32");
        assert_eq!(act.background_color(), Some("#2E7D32"));

        act.set_manual_color(Some("#FFFFFF".into()));
        assert_eq!(act.background_color(), Some("#FFFFFF"));
        assert_eq!(act.text_color(ColorScheme::Light), "#000000");

        act.set_manual_color(None);
        assert_eq!(act.background_color(), Some("#2E7D32"));
    }

    #[test]
    fn test_activity_ids() {
        let class: Activity = Class::new("18.06", "Linear Algebra").into();
        let other: Activity = NonClass::new("nc-7", "Work").into();
        assert_eq!(class.id(), "18.06");
        assert_eq!(other.id(), "nc-7");
        assert_eq!(other.name(), "Work");
    }
}
