//! Parses route pattern strings into an ordered `Pattern` of `MatchItem` values.
//!
//! A pattern such as `/users/:[int]id/?tab` is split on `/` and each non-empty segment becomes a
//! `MatchItem` at the next position:
//!
//! * `users` is matched exactly;
//! * `:[int]id` must be present and must be an integer, and is bound as `id`;
//! * `?tab` may be absent, and is bound as `tab`.

mod format;

use std::convert::Infallible;
use std::str::FromStr;

use log::trace;

pub use self::format::{Format, INT_FORMAT};

const PRESENT_PREFIX: char = ':';
const OPTIONAL_PREFIX: char = '?';

/// Indicates how a single segment of a target path is compared, and what it binds.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum MatchRule {
    /// The segment must equal the literal text exactly. Format tags are never parsed here.
    Exact(String),

    /// The segment must be non-empty (and satisfy the format, if any). Bound as `name`.
    Present {
        /// The binding name.
        name: String,
        /// Optional format constraint.
        format: Option<Format>,
    },

    /// The segment may be empty or absent; when supplied it must satisfy the format, if any.
    /// Bound as `name`.
    Optional {
        /// The binding name.
        name: String,
        /// Optional format constraint.
        format: Option<Format>,
    },
}

/// One positional rule within a `Pattern`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MatchItem {
    position: usize,
    rule: MatchRule,
}

impl MatchItem {
    /// Creates a `MatchItem` from its parts.
    pub fn new(position: usize, rule: MatchRule) -> Self {
        MatchItem { position, rule }
    }

    /// Creates an `Exact` item.
    pub fn exact<S: Into<String>>(position: usize, value: S) -> Self {
        MatchItem::new(position, MatchRule::Exact(value.into()))
    }

    /// Creates a `Present` item.
    pub fn present<S: Into<String>>(position: usize, name: S, format: Option<Format>) -> Self {
        MatchItem::new(
            position,
            MatchRule::Present {
                name: name.into(),
                format,
            },
        )
    }

    /// Creates an `Optional` item.
    pub fn optional<S: Into<String>>(position: usize, name: S, format: Option<Format>) -> Self {
        MatchItem::new(
            position,
            MatchRule::Optional {
                name: name.into(),
                format,
            },
        )
    }

    /// The zero-based segment index this item occupies.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The comparison rule for this item.
    pub fn rule(&self) -> &MatchRule {
        &self.rule
    }

    /// The literal text for `Exact` items, or the binding name for `Present`/`Optional` items.
    pub fn value(&self) -> &str {
        match &self.rule {
            MatchRule::Exact(value) => value,
            MatchRule::Present { name, .. } | MatchRule::Optional { name, .. } => name,
        }
    }

    /// The format constraint. Always `None` for `Exact` items.
    pub fn format(&self) -> Option<&Format> {
        match &self.rule {
            MatchRule::Exact(_) => None,
            MatchRule::Present { format, .. } | MatchRule::Optional { format, .. } => {
                format.as_ref()
            }
        }
    }

    /// True for `Optional` items.
    pub fn is_optional(&self) -> bool {
        matches!(self.rule, MatchRule::Optional { .. })
    }
}

/// An ordered sequence of `MatchItem` values, used as an immutable comparison template.
///
/// # Examples
///
/// ```rust
/// use navroute::pattern::{Format, Pattern};
///
/// let pattern = Pattern::parse("/users/:[int]id/?tab");
/// assert_eq!(pattern.len(), 3);
/// assert_eq!(pattern.items()[1].value(), "id");
/// assert_eq!(pattern.items()[1].format(), Some(&Format::Int));
/// assert!(pattern.items()[2].is_optional());
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Pattern {
    items: Vec<MatchItem>,
}

impl Pattern {
    /// Parses a pattern string. Equivalent to `parse_matches`.
    pub fn parse(pattern: &str) -> Self {
        parse_matches(pattern)
    }

    /// Creates a `Pattern` directly from items, which are kept in the order supplied.
    pub fn from_items(items: Vec<MatchItem>) -> Self {
        Pattern { items }
    }

    /// The items of this pattern.
    pub fn items(&self) -> &[MatchItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the pattern has no items, i.e. it was parsed from `/` or an empty string.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_matches(s))
    }
}

impl From<Vec<MatchItem>> for Pattern {
    fn from(items: Vec<MatchItem>) -> Self {
        Pattern::from_items(items)
    }
}

/// Splits `pattern` on `/`, discarding empty segments, and parses each remaining segment at its
/// left-to-right index.
pub fn parse_matches(pattern: &str) -> Pattern {
    let items = pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(position, segment)| parse_match(segment, position))
        .collect();

    Pattern { items }
}

/// Parses a single pattern segment into a `MatchItem` at `position`.
pub fn parse_match(segment: &str, position: usize) -> MatchItem {
    let item = if let Some(remainder) = segment.strip_prefix(PRESENT_PREFIX) {
        let (format, name) = format::split_format(remainder);
        MatchItem::present(position, name, format)
    } else if let Some(remainder) = segment.strip_prefix(OPTIONAL_PREFIX) {
        let (format, name) = format::split_format(remainder);
        MatchItem::optional(position, name, format)
    } else {
        MatchItem::exact(position, segment)
    };

    trace!(" parsed pattern segment {:?} as {:?}", segment, item.rule);
    item
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_correct_number_of_matches() {
        assert_eq!(parse_matches("/a/b/c/d").len(), 4);
    }

    #[test]
    fn removes_empty_segments() {
        let pattern = parse_matches("/a/b/c//d/");
        assert_eq!(pattern.len(), 4);

        let positions: Vec<usize> = pattern.items().iter().map(MatchItem::position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
        assert_eq!(pattern.items()[3].value(), "d");
    }

    #[test]
    fn root_pattern_is_empty() {
        assert!(parse_matches("/").is_empty());
        assert!(parse_matches("").is_empty());
        assert!(parse_matches("///").is_empty());
    }

    #[test]
    fn parses_exact_match() {
        let item = parse_match("exactSegment", 0);
        assert_eq!(item.position(), 0);
        assert_eq!(item.format(), None);
        assert_eq!(item.rule(), &MatchRule::Exact("exactSegment".to_string()));
        assert_eq!(item.value(), "exactSegment");
    }

    #[test]
    fn exact_match_keeps_brackets_as_literal_text() {
        let item = parse_match("[int]segment", 1);
        assert_eq!(item.value(), "[int]segment");
        assert_eq!(item.format(), None);
    }

    #[test]
    fn parses_present_match() {
        let item = parse_match(":matchValue", 1);
        assert_eq!(item.position(), 1);
        assert_eq!(item.format(), None);
        assert!(matches!(item.rule(), MatchRule::Present { .. }));
        assert_eq!(item.value(), "matchValue");
    }

    #[test]
    fn parses_int_present_match() {
        let item = parse_match(":[int]id", 2);
        assert_eq!(item, MatchItem::present(2, "id", Some(Format::Int)));
    }

    #[test]
    fn parses_optional_match() {
        let item = parse_match("?name", 1);
        assert_eq!(item, MatchItem::optional(1, "name", None));
    }

    #[test]
    fn parses_int_optional_match() {
        let item = parse_match("?[int]intOptionalMatch", 1);
        assert_eq!(item.position(), 1);
        assert_eq!(item.format(), Some(&Format::Int));
        assert!(item.is_optional());
        assert_eq!(item.value(), "intOptionalMatch");
    }

    #[test]
    fn keeps_unrecognised_format_tags() {
        let item = parse_match(":[slug]title", 0);
        assert_eq!(item.format(), Some(&Format::Other("slug".to_string())));
        assert_eq!(item.value(), "title");
    }

    #[test]
    fn pattern_from_str() {
        let pattern: Pattern = "/:a/b".parse().unwrap();
        let expected: Pattern =
            vec![MatchItem::present(0, "a", None), MatchItem::exact(1, "b")].into();
        assert_eq!(pattern, expected);
    }
}
