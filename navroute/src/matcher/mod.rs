//! Compares `NavigationTarget` values against parsed `Pattern` values.
//!
//! Two notions of fit are provided:
//!
//! * `nav_target_matches_pattern` is a loose, prefix-tolerant fit: every position spanned by the
//!   pattern must accept the corresponding target segment, and extra target segments are ignored.
//! * `data_fits_pattern` additionally requires the number of target segments to lie between the
//!   number of required segments and the total number of segments of the pattern. It is used to
//!   pick the most specific of several loosely fitting patterns.

mod fill;

use log::trace;

use crate::pattern::{Format, MatchItem, MatchRule, Pattern};
use crate::target::NavigationTarget;

pub use self::fill::sorted_and_filled_pattern;

/// Determines if a single target segment satisfies `item`.
///
/// Absent segments are represented by the empty string.
pub fn compare_match(value: &str, item: &MatchItem) -> bool {
    match item.rule() {
        MatchRule::Exact(literal) => value == literal,
        MatchRule::Present { .. } => !value.is_empty() && check_numeric_match(value, item),
        MatchRule::Optional { .. } => value.is_empty() || check_numeric_match(value, item),
    }
}

/// Checks `value` against the format of `item`.
///
/// Only `Format::Int` constrains the value, which must then be a non-empty base-10 integer. Items
/// without a format, or with an unrecognised one, accept every value.
pub fn check_numeric_match(value: &str, item: &MatchItem) -> bool {
    match item.format() {
        Some(Format::Int) => !value.is_empty() && value.parse::<i64>().is_ok(),
        _ => true,
    }
}

/// Provides the highest position among the items of `pattern`, skipping `Optional` items unless
/// `include_optional` is set. `None` when no item qualifies.
pub fn max_pattern_index(pattern: &Pattern, include_optional: bool) -> Option<usize> {
    pattern
        .items()
        .iter()
        .filter(|item| include_optional || !item.is_optional())
        .map(MatchItem::position)
        .max()
}

/// Span of a filled pattern, counted as a number of segments.
fn span(filled: &Pattern, include_optional: bool) -> usize {
    max_pattern_index(filled, include_optional).map_or(0, |i| i.saturating_add(1))
}

/// Determines if every position spanned by `pattern` accepts the corresponding segment of
/// `target`. Target segments beyond the span of the pattern are not considered, and an empty
/// pattern matches every target.
///
/// ```rust
/// use navroute::matcher::nav_target_matches_pattern;
/// use navroute::pattern::Pattern;
/// use navroute::target::{build_navigation_target, NavigationTarget};
///
/// let target: NavigationTarget = build_navigation_target("/app/path1/path2", None, "app");
///
/// assert!(nav_target_matches_pattern(&target, &Pattern::parse("/:first/path2")));
/// assert!(nav_target_matches_pattern(&target, &Pattern::parse("/path1")));
/// assert!(!nav_target_matches_pattern(&target, &Pattern::parse("/path/path")));
/// ```
pub fn nav_target_matches_pattern<D>(target: &NavigationTarget<D>, pattern: &Pattern) -> bool {
    let filled = sorted_and_filled_pattern(pattern);
    positions_match(target, &filled)
}

fn positions_match<D>(target: &NavigationTarget<D>, filled: &Pattern) -> bool {
    let paths = target.paths();
    let mut next = 0;

    for item in filled.items() {
        let position = item.position();

        // Positions skipped by an unfillable pattern are required segments without a format.
        if position > next && position > paths.len() {
            trace!(" no segment for unfilled position {}", position - 1);
            return false;
        }

        let value = paths.get(position).map_or("", String::as_str);
        if !compare_match(value, item) {
            trace!(
                " segment {} value {:?} does not satisfy {:?}",
                position,
                value,
                item.rule()
            );
            return false;
        }

        next = position.saturating_add(1);
    }

    true
}

/// Determines if `target` loosely matches `pattern` and has a number of segments within the
/// inclusive range of required segments to total segments of the pattern.
///
/// ```rust
/// use navroute::matcher::data_fits_pattern;
/// use navroute::pattern::Pattern;
/// use navroute::target::{build_navigation_target, NavigationTarget};
///
/// let pattern = Pattern::parse("/path1/:second/?optional");
/// let fits = |location: &str| {
///     let target: NavigationTarget = build_navigation_target(location, None, "app");
///     data_fits_pattern(&target, &pattern)
/// };
///
/// assert!(fits("/app/path1/path2"));
/// assert!(fits("/app/path1/path2/op1"));
/// assert!(!fits("/app/path1"));
/// assert!(!fits("/app/path1/path2/op1/path3"));
/// ```
pub fn data_fits_pattern<D>(target: &NavigationTarget<D>, pattern: &Pattern) -> bool {
    let filled = sorted_and_filled_pattern(pattern);
    let min_len = span(&filled, false);
    let max_len = span(&filled, true);
    let len = target.paths().len();

    if len < min_len || len > max_len {
        trace!(
            " target with {} segment(s) outside of pattern range [{}, {}]",
            len,
            min_len,
            max_len
        );
        return false;
    }

    positions_match(target, &filled)
}
