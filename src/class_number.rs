//! Class-number parsing, ordering, and search matching.
//!
//! A class number looks like `6.042J` or `21W.THU`: optional course digits,
//! optional course letters, a required `.`, then an alphanumeric suffix.
//!
//! # Failure Mode
//! Parsing never fails loudly. An unparseable string yields
//! [`ParsedClassNumber::Unparseable`], which sorts as equal to everything
//! and is otherwise carried through untouched.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

static CLASS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<course_digits>[0-9]*)(?P<course_letters>[A-Z]*)\.(?P<class_number>[0-9A-Z]*)$")
        .expect("class number pattern is valid")
});

/// Result of splitting a class number into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedClassNumber<'a> {
    /// The string matched the class-number pattern.
    Parsed {
        /// Leading digits (`"6"`, `"21"`), possibly empty.
        course_digits: &'a str,
        /// Letters after the digits (`""`, `"W"`), possibly empty.
        course_letters: &'a str,
        /// Suffix after the `.` (`"042J"`, `"THU"`).
        class_number: &'a str,
    },
    /// The string did not match.
    Unparseable,
}

impl<'a> ParsedClassNumber<'a> {
    /// Parses a class number.
    pub fn parse(s: &'a str) -> Self {
        let Some(caps) = CLASS_REGEX.captures(s) else {
            return Self::Unparseable;
        };
        let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());
        Self::Parsed {
            course_digits: group("course_digits"),
            course_letters: group("course_letters"),
            class_number: group("class_number"),
        }
    }

    /// Whether the string matched the pattern.
    pub fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed { .. })
    }
}

/// Compares course digit strings numerically, with empty sorting last.
fn compare_course_digits(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Three-way comparison for class numbers.
///
/// Orders by course number (numerically, missing digits last), then course
/// letters, then the suffix. If either side is unparseable the result is
/// `Equal`, so a stable sort keeps such entries where they were.
pub fn class_number_compare(a: &str, b: &str) -> Ordering {
    match (ParsedClassNumber::parse(a), ParsedClassNumber::parse(b)) {
        (
            ParsedClassNumber::Parsed {
                course_digits: a_digits,
                course_letters: a_letters,
                class_number: a_number,
            },
            ParsedClassNumber::Parsed {
                course_digits: b_digits,
                course_letters: b_letters,
                class_number: b_number,
            },
        ) => compare_course_digits(a_digits, b_digits)
            .then_with(|| a_letters.cmp(b_letters))
            .then_with(|| a_number.cmp(b_number)),
        _ => Ordering::Equal,
    }
}

/// Sorts items by class number, stably.
///
/// Items whose number is unparseable keep their relative order and are
/// placed after the parseable ones.
pub fn sort_by_class_number<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_key(|item| !ParsedClassNumber::parse(key(item)).is_parsed());
    let parsed = items
        .iter()
        .take_while(|item| ParsedClassNumber::parse(key(*item)).is_parsed())
        .count();
    items[..parsed].sort_by(|a, b| class_number_compare(key(a), key(b)));
}

/// Lowercases and keeps only ASCII alphanumerics.
pub fn simplify_string(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Class-number search matching.
///
/// Case-insensitive. If `search` contains a `.`, punctuation is kept on both
/// sides; otherwise both sides are reduced by [`simplify_string`] first.
/// `exact` selects equality instead of substring containment.
pub fn class_number_matches(search: &str, class_number: &str, exact: bool) -> bool {
    let punctuated = search.contains('.');
    let process = |s: &str| {
        if punctuated {
            s.to_lowercase()
        } else {
            simplify_string(s)
        }
    };
    let haystack = process(class_number);
    let needle = process(search);
    if exact {
        haystack == needle
    } else {
        haystack.contains(&needle)
    }
}
