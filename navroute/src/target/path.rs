//! Defines helper functions for processing the raw location path

const HASH_BANG: &str = "#!";

/// Removes the base path prefix, a single leading `/` and a trailing `#!` from a raw location.
///
/// The base path is compared as the literal text `/` + `base_path`, without regard for segment
/// boundaries, and only the first occurrence at the start of the location is removed.
///
/// ```rust
/// use navroute::target::path::clean_path;
///
/// assert_eq!(clean_path("/app/path", "app"), "path");
/// assert_eq!(clean_path("/app/app/test/", "app"), "app/test/");
/// assert_eq!(clean_path("/app/appz/test/#!", "app"), "appz/test/");
/// ```
pub fn clean_path<'a>(raw_location: &'a str, base_path: &str) -> &'a str {
    let prefix = format!("/{}", base_path);
    let path = raw_location
        .strip_prefix(prefix.as_str())
        .unwrap_or(raw_location);
    let path = path.strip_prefix('/').unwrap_or(path);
    path.strip_suffix(HASH_BANG).unwrap_or(path)
}

/// Splits a cleaned location at the first `?`.
///
/// A location without `?` has no query (`None`), which is distinct from a location ending in `?`
/// (an empty query).
pub fn split_path_and_query(location: &str) -> (&str, Option<&str>) {
    match location.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (location, None),
    }
}

/// Splits a path into trimmed, non-empty segments.
///
/// Repeated slashes and whitespace-only segments are skipped, so a path of
/// `path1//path2/   /value3` will be split into segments:
///
/// ```plain
/// ["path1", "path2", "value3"]
/// ```
pub fn split_segments(path: &str) -> Vec<String> {
    path.split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
