//! Input validation for catalog records.
//!
//! Checks structural integrity of class records before they are indexed
//! or added to a schedule. Detects:
//! - Duplicate class numbers
//! - Unparseable class numbers
//! - Duplicate sections kinds within a class
//! - Timeslots that leave the week grid or cross a day boundary
//! - Default lock targets naming a missing section

use std::collections::HashSet;

use crate::class_number::ParsedClassNumber;
use crate::models::{ClassRecord, SectionLock};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records share the same class number.
    DuplicateClass,
    /// A class number does not match the class-number pattern.
    UnparseableClassNumber,
    /// A class has two sections groups of the same kind.
    DuplicateSectionKind,
    /// A timeslot is empty, leaves the week, or spans two days.
    InvalidTimeslot,
    /// A default lock target names a section ordinal that does not exist.
    InvalidDefault,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates catalog records.
///
/// Checks:
/// 1. No duplicate class numbers
/// 2. Every class number parses
/// 3. No duplicate sections kinds within a class
/// 4. Every timeslot lies within one day of the week grid
/// 5. Every default lock target names an existing section
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(records: &[ClassRecord]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut numbers = HashSet::new();

    for record in records {
        if !numbers.insert(record.number.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateClass,
                format!("Duplicate class number: {}", record.number),
            ));
        }

        if !ParsedClassNumber::parse(&record.number).is_parsed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnparseableClassNumber,
                format!("Unparseable class number: '{}'", record.number),
            ));
        }

        let mut kinds = HashSet::new();
        for group in &record.sections {
            if !kinds.insert(group.kind) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateSectionKind,
                    format!("Class '{}' has two {} groups", record.number, group.kind),
                ));
            }

            for (ordinal, section) in group.sections.iter().enumerate() {
                for slot in section.timeslots.iter().filter(|t| !t.is_within_day()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidTimeslot,
                        format!(
                            "Class '{}' {} section {} has invalid timeslot {}+{}",
                            record.number, group.kind, ordinal, slot.start_slot, slot.num_slots
                        ),
                    ));
                }
            }

            if let Some(SectionLock::Section(ordinal)) = group.default {
                if ordinal >= group.sections.len() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidDefault,
                        format!(
                            "Class '{}' {} default names missing section {}",
                            record.number, group.kind, ordinal
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
