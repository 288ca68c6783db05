//! Error types.
//!
//! Fallible operations are section lock requests, color scheme parsing, and
//! the state codec. Matching, ordering, and table lookups degrade to
//! "no match", `Ordering::Equal`, or `None` instead of returning an error.

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by timetable operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A lock request named a section ordinal not present in the group.
    #[error("no section with ordinal {ordinal} in {kind} group")]
    UnknownSection {
        /// Kind of the group the request targeted.
        kind: String,
        /// The requested ordinal.
        ordinal: usize,
    },

    /// A color scheme name did not match any scheme.
    #[error("unknown color scheme: {0}")]
    UnknownColorScheme(String),

    /// The value could not be packed.
    #[error("failed to encode state: {0}")]
    Encode(String),

    /// The serialized text is corrupt.
    #[error("corrupt state: {0}")]
    Decode(#[from] DecodeError),
}

/// Stage at which decoding of serialized state failed.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Text is not valid URL-safe base64.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Bytes are not a valid MessagePack value of the requested shape.
    #[error("invalid MessagePack payload: {0}")]
    MessagePack(#[from] rmp_serde::decode::Error),

    /// A complete value was read but bytes remained.
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_section_message() {
        let err = Error::UnknownSection {
            kind: "lecture".into(),
            ordinal: 4,
        };
        assert_eq!(err.to_string(), "no section with ordinal 4 in lecture group");
    }

    #[test]
    fn test_decode_wraps() {
        let err: Error = DecodeError::TrailingBytes(3).into();
        assert!(matches!(err, Error::Decode(DecodeError::TrailingBytes(3))));
        assert!(err.to_string().contains("3 trailing bytes"));
    }
}
