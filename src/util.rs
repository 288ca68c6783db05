//! Small helpers for activity summaries and descriptions.

use crate::models::Catalog;

/// Characters that separate class numbers in free text.
const LINK_DELIMITERS: &[char] = &[' ', ',', ';', '[', ']', '(', ')', '/'];

/// Sum of a list of numbers (e.g. units or hours across activities).
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Formats `x` with `decimals` fractional digits and comma thousands separators.
pub fn format_number(x: f64, decimals: usize) -> String {
    let fixed = format!("{x:.decimals$}");
    if !x.is_finite() {
        return fixed;
    }
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// A piece of text split by [`link_classes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSegment<'a> {
    /// Plain text, including delimiters.
    Text(&'a str),
    /// A class number present in the catalog.
    Class(&'a str),
}

/// Splits text into plain segments and catalog class references.
///
/// Text is split on spaces and `,;[]()/`, keeping each delimiter as its own
/// segment. A token that exactly names a catalog class becomes
/// [`LinkSegment::Class`].
pub fn link_classes<'a>(catalog: &Catalog, text: &'a str) -> Vec<LinkSegment<'a>> {
    let mut segments = Vec::new();
    let mut token_start = 0;

    let push_token = |segments: &mut Vec<LinkSegment<'a>>, token: &'a str| {
        if token.is_empty() {
            return;
        }
        if catalog.contains(token) {
            segments.push(LinkSegment::Class(token));
        } else {
            segments.push(LinkSegment::Text(token));
        }
    };

    for (i, c) in text.char_indices() {
        if LINK_DELIMITERS.contains(&c) {
            push_token(&mut segments, &text[token_start..i]);
            let end = i + c.len_utf8();
            segments.push(LinkSegment::Text(&text[i..end]));
            token_start = end;
        }
    }
    push_token(&mut segments, &text[token_start..]);

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClassRecord;

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[]), 0.0);
        assert_eq!(sum(&[12.0, 9.0, 6.5]), 27.5);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(999.0, 1), "999.0");
        assert_eq!(format_number(1234.5, 1), "1,234.5");
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-98765.0, 0), "-98,765");
        assert_eq!(format_number(f64::INFINITY, 2), "inf");
    }

    #[test]
    fn test_link_classes() {
        let catalog = Catalog::from_records([
            ClassRecord::new("6.042J", "Math for CS"),
            ClassRecord::new("18.06", "Linear Algebra"),
        ]);
        let segments = link_classes(&catalog, "Prereq: 6.042J, (18.06/18.700)");
        assert_eq!(
            segments,
            vec![
                LinkSegment::Text("Prereq:"),
                LinkSegment::Text(" "),
                LinkSegment::Class("6.042J"),
                LinkSegment::Text(","),
                LinkSegment::Text(" "),
                LinkSegment::Text("("),
                LinkSegment::Class("18.06"),
                LinkSegment::Text("/"),
                LinkSegment::Text("18.700"),
                LinkSegment::Text(")"),
            ]
        );
    }

    #[test]
    fn test_link_classes_plain_text() {
        let catalog = Catalog::new();
        assert_eq!(link_classes(&catalog, "None"), vec![LinkSegment::Text("None")]);
        assert!(link_classes(&catalog, "").is_empty());
    }

    #[test]
    fn test_link_classes_preserves_text() {
        let catalog = Catalog::from_records([ClassRecord::new("8.01", "Physics I")]);
        let text = "[8.01; GIR:PHY1]";
        let joined: String = link_classes(&catalog, text)
            .into_iter()
            .map(|s| match s {
                LinkSegment::Text(t) | LinkSegment::Class(t) => t,
            })
            .collect();
        assert_eq!(joined, text);
    }
}
