//! Defines the `Format` tag which may constrain a binding segment.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// The tag recognised as a decimal integer constraint.
pub const INT_FORMAT: &str = "int";

/// A format tag attached to a `Present` or `Optional` segment, e.g. the `int` in `:[int]id`.
///
/// The set of tags is open. Only `Int` constrains which values are accepted; any other tag is
/// retained as `Other` so it can be reported, but it never causes a value to be rejected.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Format {
    /// Values must be base-10 integers, and are bound as `PathValue::Int`.
    Int,

    /// Any unrecognised tag. Inert for comparison and binding purposes.
    Other(String),
}

impl Format {
    /// Creates the `Format` represented by the text between the brackets of a segment.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            INT_FORMAT => Format::Int,
            other => Format::Other(other.to_string()),
        }
    }

    /// Provides the tag text as it appeared in the pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Format::Int => INT_FORMAT,
            Format::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn format_regex() -> &'static Regex {
    static FORMAT_REGEX: OnceLock<Regex> = OnceLock::new();
    FORMAT_REGEX.get_or_init(|| Regex::new(r"^\[([^\]]+)\](.+)$").expect("valid format regex"))
}

/// Splits the remainder of a binding segment (the text after `:` or `?`) into an optional
/// `Format` and the binding name.
///
/// The remainder must have the shape `[format]name` for a format to be extracted; anything else
/// is taken verbatim as the name.
pub(crate) fn split_format(remainder: &str) -> (Option<Format>, &str) {
    match format_regex().captures(remainder) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(tag), Some(name)) => (Some(Format::from_tag(tag.as_str())), name.as_str()),
            _ => (None, remainder),
        },
        None => (None, remainder),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_format_tests() {
        assert_eq!(split_format("[int]id"), (Some(Format::Int), "id"));
        assert_eq!(
            split_format("[uuid]key"),
            (Some(Format::Other("uuid".to_string())), "key")
        );
        assert_eq!(split_format("name"), (None, "name"));
        assert_eq!(split_format("[int]"), (None, "[int]"));
        assert_eq!(split_format("[]name"), (None, "[]name"));
    }

    #[test]
    fn format_tag_round_trips_through_display() {
        assert_eq!(Format::from_tag("int").to_string(), "int");
        assert_eq!(Format::from_tag("Int"), Format::Other("Int".to_string()));
    }
}
