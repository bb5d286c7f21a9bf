//! Normalizes raw location strings into `NavigationTarget` values.

pub mod path;
pub mod query_string;

use std::collections::HashMap;

use log::trace;
use serde::Deserialize;

use crate::extractor::{self, ExtractorError};

use self::query_string::QueryStringMapping;

/// The payload type used when a collaborator has no payload of its own.
pub type Payload = HashMap<String, String>;

/// A normalized, immutable snapshot of one navigation event.
///
/// `D` is the payload attached by the caller, passed through unchanged.
///
/// # Examples
///
/// ```rust
/// use navroute::target::{build_navigation_target, Payload};
///
/// let mut data = Payload::new();
/// data.insert("key".to_string(), "value".to_string());
///
/// let target = build_navigation_target(
///     "/app/path1//path2/   /value3?queryKey=queryValue#!",
///     Some(data),
///     "app",
/// );
///
/// assert_eq!(target.paths(), ["path1", "path2", "value3"]);
/// assert_eq!(target.query()["queryKey"], "queryValue");
/// assert_eq!(target.data()["key"], "value");
/// assert!(target.parsed().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationTarget<D = Payload> {
    original: String,
    paths: Vec<String>,
    query: QueryStringMapping,
    data: D,
    parsed: HashMap<String, String>,
}

impl<D> NavigationTarget<D> {
    /// The raw location string as received.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The trimmed, non-empty path segments, after base path and fragment stripping.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// The raw query parameters. Empty when the location had no query string.
    pub fn query(&self) -> &QueryStringMapping {
        &self.query
    }

    /// The caller supplied payload.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Reserved, and currently always empty.
    pub fn parsed(&self) -> &HashMap<String, String> {
        &self.parsed
    }

    /// Deserializes the query parameters into `T`, form-url-decoding each value first.
    pub fn query_values<T>(&self) -> Result<T, ExtractorError>
    where
        T: for<'de> Deserialize<'de>,
    {
        extractor::from_query_string(&self.query)
    }

    /// Consumes the target, returning the payload.
    pub fn into_data(self) -> D {
        self.data
    }
}

/// Builds a `NavigationTarget` from a raw location.
///
/// The location is cleaned against `base_path` (see `path::clean_path`), split into path and
/// query, and the path split into trimmed non-empty segments. An omitted payload becomes
/// `D::default()`.
pub fn build_navigation_target<D>(
    raw_location: &str,
    data: Option<D>,
    base_path: &str,
) -> NavigationTarget<D>
where
    D: Default,
{
    let cleaned = path::clean_path(raw_location, base_path);
    let (location_path, query) = path::split_path_and_query(cleaned);
    let paths = path::split_segments(location_path);

    trace!(
        " built navigation target from {:?}: {} segment(s), query present: {}",
        raw_location,
        paths.len(),
        query.is_some()
    );

    NavigationTarget {
        original: raw_location.to_string(),
        paths,
        query: query_string::split(query),
        data: data.unwrap_or_default(),
        parsed: HashMap::new(),
    }
}
