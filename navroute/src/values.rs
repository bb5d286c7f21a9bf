//! Extracts the values bound by a `Pattern` from a `NavigationTarget`.

use std::collections::HashMap;
use std::fmt;

use log::trace;
use serde::Serialize;

use crate::matcher::sorted_and_filled_pattern;
use crate::pattern::{Format, MatchItem, Pattern};
use crate::target::NavigationTarget;

/// A single bound value.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathValue {
    /// A segment bound without a format, or with a format other than `int`.
    Text(String),

    /// A segment bound with the `int` format.
    Int(i64),
}

impl PathValue {
    /// The textual value, if this is `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PathValue::Text(s) => Some(s),
            PathValue::Int(_) => None,
        }
    }

    /// The integer value, if this is `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PathValue::Int(i) => Some(*i),
            PathValue::Text(_) => None,
        }
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathValue::Text(s) => f.write_str(s),
            PathValue::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for PathValue {
    fn from(s: &str) -> Self {
        PathValue::Text(s.to_string())
    }
}

impl From<i64> for PathValue {
    fn from(i: i64) -> Self {
        PathValue::Int(i)
    }
}

/// Mapping of binding names to their values. Bindings for absent segments map to `None`.
pub type PathValues = HashMap<String, Option<PathValue>>;

/// Converts a raw segment into the value bound for `item`.
///
/// Absent segments stay absent. With the `int` format the segment is parsed as a base-10
/// integer; a segment which does not parse is bound as `Text` instead. Any other format leaves
/// the segment unchanged.
pub fn parsed_path(raw: Option<&str>, item: &MatchItem) -> Option<PathValue> {
    let raw = raw?;

    match item.format() {
        Some(Format::Int) => match raw.parse::<i64>() {
            Ok(i) => Some(PathValue::Int(i)),
            Err(e) => {
                trace!(" unable to bind {:?} as int: {}", raw, e);
                Some(PathValue::Text(raw.to_string()))
            }
        },
        _ => Some(PathValue::Text(raw.to_string())),
    }
}

/// Binds every item of the gap-filled `pattern` to the target segment at its position.
///
/// `Exact` items are bound under their own literal text.
///
/// ```rust
/// use navroute::pattern::Pattern;
/// use navroute::target::{build_navigation_target, NavigationTarget};
/// use navroute::values::{parse_path_values, PathValue};
///
/// let target: NavigationTarget = build_navigation_target("/app/users/12", None, "app");
/// let values = parse_path_values(&target, &Pattern::parse("/users/:[int]id/?tab"));
///
/// assert_eq!(values["users"], Some(PathValue::from("users")));
/// assert_eq!(values["id"], Some(PathValue::Int(12)));
/// assert_eq!(values["tab"], None);
/// ```
pub fn parse_path_values<D>(target: &NavigationTarget<D>, pattern: &Pattern) -> PathValues {
    sorted_and_filled_pattern(pattern)
        .items()
        .iter()
        .map(|item| {
            let raw = target.paths().get(item.position()).map(String::as_str);
            (item.value().to_string(), parsed_path(raw, item))
        })
        .collect()
}
