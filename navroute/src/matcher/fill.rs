//! Sorting and gap-filling of patterns prior to positional comparison.

use log::trace;

use crate::pattern::{MatchItem, Pattern};

const SYNTHETIC_FIELD_PREFIX: &str = "field";

/// Sorts the items of `pattern` by position and fills every missing position below the highest
/// one with a `Present` item named `field<position>`, so that item `i` of the result occupies
/// position `i`.
///
/// Where several items share a position, the first one in the original order is kept. The
/// transformation is idempotent. When the gaps are too many to allocate, e.g. for an item built
/// by hand at `usize::MAX`, the items are only sorted and deduplicated.
///
/// ```rust
/// use navroute::matcher::sorted_and_filled_pattern;
/// use navroute::pattern::{MatchItem, Pattern};
///
/// let pattern = Pattern::from_items(vec![
///     MatchItem::present(4, "fifth", None),
///     MatchItem::present(0, "first", None),
///     MatchItem::present(2, "third", None),
/// ]);
///
/// let filled = sorted_and_filled_pattern(&pattern);
/// let names: Vec<&str> = filled.items().iter().map(|i| i.value()).collect();
/// assert_eq!(names, ["first", "field1", "third", "field3", "fifth"]);
/// ```
pub fn sorted_and_filled_pattern(pattern: &Pattern) -> Pattern {
    let mut sorted: Vec<&MatchItem> = pattern.items().iter().collect();
    sorted.sort_by_key(|item| item.position());
    sorted.dedup_by_key(|item| item.position());

    let span = sorted.last().map_or(0, |item| item.position().saturating_add(1));

    let mut filled: Vec<MatchItem> = Vec::new();
    if filled.try_reserve_exact(span).is_err() {
        trace!(" unable to fill {} positions, keeping pattern sorted only", span);
        return Pattern::from_items(sorted.into_iter().cloned().collect());
    }

    for item in sorted {
        while filled.len() < item.position() {
            let position = filled.len();
            filled.push(MatchItem::present(
                position,
                format!("{}{}", SYNTHETIC_FIELD_PREFIX, position),
                None,
            ));
        }

        filled.push(item.clone());
    }

    Pattern::from_items(filled)
}
