//! Catalog records and lookup.
//!
//! Raw class records as delivered by the data source, plus an in-memory
//! index for search and class-number display ordering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{SectionKind, SectionLock, Timeslot};
use crate::class_number::{class_number_matches, sort_by_class_number};

/// A class as delivered by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Class number, e.g. `"6.042J"`.
    pub number: String,
    /// Class title.
    pub name: String,
    /// Sections groups, one per kind.
    #[serde(default)]
    pub sections: Vec<SectionsRecord>,
}

impl ClassRecord {
    /// Creates a record with no sections.
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// Adds a sections group.
    pub fn with_sections(mut self, sections: SectionsRecord) -> Self {
        self.sections.push(sections);
        self
    }
}

/// A sections group as delivered by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionsRecord {
    /// Group kind.
    pub kind: SectionKind,
    /// Display name; defaults to the kind's name.
    #[serde(default)]
    pub name: Option<String>,
    /// Options in catalog order. The position is the section's ordinal.
    #[serde(default)]
    pub sections: Vec<SectionRecord>,
    /// Initial lock state; Auto when absent.
    #[serde(default)]
    pub default: Option<SectionLock>,
}

impl SectionsRecord {
    /// Creates an empty group record.
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            name: None,
            sections: Vec::new(),
            default: None,
        }
    }

    /// Adds a section.
    pub fn with_section(mut self, section: SectionRecord) -> Self {
        self.sections.push(section);
        self
    }

    /// Sets the initial lock state.
    pub fn with_default(mut self, default: SectionLock) -> Self {
        self.default = Some(default);
        self
    }
}

/// A section as delivered by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Display time string.
    pub raw_time: String,
    /// Meeting times.
    #[serde(default)]
    pub timeslots: Vec<Timeslot>,
    /// Room, if known.
    #[serde(default)]
    pub room: Option<String>,
}

impl SectionRecord {
    /// Creates a section record with no meeting times.
    pub fn new(raw_time: impl Into<String>) -> Self {
        Self {
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
}

/// Class records indexed by class number.
///
/// When two records share a number, the later one wins. Use
/// [`crate::validation::validate_catalog`] to detect that upstream.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    classes: BTreeMap<String, ClassRecord>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from records.
    pub fn from_records(records: impl IntoIterator<Item = ClassRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Inserts or replaces a record.
    pub fn insert(&mut self, record: ClassRecord) {
        self.classes.insert(record.number.clone(), record);
    }

    /// Looks up a class by exact number.
    pub fn get(&self, number: &str) -> Option<&ClassRecord> {
        self.classes.get(number)
    }

    /// Whether a class with this exact number exists.
    pub fn contains(&self, number: &str) -> bool {
        self.classes.contains_key(number)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// All class numbers in display order.
    pub fn sorted_numbers(&self) -> Vec<&str> {
        let mut numbers: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        sort_by_class_number(&mut numbers, |n| *n);
        numbers
    }

    /// Records whose number matches `query`, in display order.
    pub fn search(&self, query: &str, exact: bool) -> Vec<&ClassRecord> {
        let mut hits: Vec<&ClassRecord> = self
            .classes
            .values()
            .filter(|c| class_number_matches(query, &c.number, exact))
            .collect();
        sort_by_class_number(&mut hits, |c| c.number.as_str());
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_records([
            ClassRecord::new("6.042J", "Mathematics for Computer Science"),
            ClassRecord::new("6.0421", "Seminar"),
            ClassRecord::new("18.06", "Linear Algebra"),
            ClassRecord::new("21W.THU", "Thesis Workshop"),
            ClassRecord::new("6.006", "Introduction to Algorithms"),
            ClassRecord::new("CMS.100", "Media Studies"),
        ])
    }

    #[test]
    fn test_lookup() {
        let cat = catalog();
        assert_eq!(cat.len(), 6);
        assert!(cat.contains("18.06"));
        assert!(!cat.contains("18.0"));
        assert_eq!(cat.get("6.006").map(|c| c.name.as_str()), Some("Introduction to Algorithms"));
    }

    #[test]
    fn test_sorted_numbers() {
        assert_eq!(
            catalog().sorted_numbers(),
            vec!["6.006", "6.0421", "6.042J", "18.06", "21W.THU", "CMS.100"]
        );
    }

    #[test]
    fn test_search_punctuation_insensitive() {
        let cat = catalog();
        let hits: Vec<_> = cat.search("6042", false).iter().map(|c| c.number.as_str()).collect();
        assert_eq!(hits, vec!["6.0421", "6.042J"]);
    }

    #[test]
    fn test_search_exact() {
        let cat = catalog();
        let hits: Vec<_> = cat.search("6.042j", true).iter().map(|c| c.number.as_str()).collect();
        assert_eq!(hits, vec!["6.042J"]);
        assert!(cat.search("6.04", true).is_empty());
    }

    #[test]
    fn test_later_record_wins() {
        let mut cat = catalog();
        cat.insert(ClassRecord::new("18.06", "Linear Algebra (new)"));
        assert_eq!(cat.len(), 6);
        assert_eq!(cat.get("18.06").unwrap().name, "Linear Algebra (new)");
    }

    #[test]
    fn test_record_deserialize_defaults() {
        let json = r#"{
            "number": "8.01",
            "name": "Physics I",
            "sections": [
                {"kind": "lecture", "sections": [{"raw_time": "MWF10"}], "default": "none"}
            ]
        }"#;
        let rec: ClassRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.sections[0].kind, SectionKind::Lecture);
        assert_eq!(rec.sections[0].default, Some(SectionLock::None));
        assert!(rec.sections[0].sections[0].timeslots.is_empty());
    }
}
