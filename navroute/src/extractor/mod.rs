//! Deserializes bound path values and query parameters into type-safe structs using Serde.
//!
//! # Examples
//!
//! ```rust
//! use serde::Deserialize;
//!
//! use navroute::extractor::from_path_values;
//! use navroute::pattern::Pattern;
//! use navroute::target::{build_navigation_target, NavigationTarget};
//! use navroute::values::parse_path_values;
//!
//! #[derive(Deserialize)]
//! struct ArticleParams {
//!     id: u32,
//!     slug: String,
//!     page: Option<u16>,
//! }
//!
//! let target: NavigationTarget =
//!     build_navigation_target("/app/article/1551/ten-reasons", None, "app");
//! let values = parse_path_values(&target, &Pattern::parse("/article/:[int]id/:slug/?[int]page"));
//!
//! let ArticleParams { id, slug, page } = from_path_values(&values).unwrap();
//! assert_eq!(id, 1551);
//! assert_eq!(slug, "ten-reasons");
//! assert_eq!(page, None);
//! ```

mod internal;

use std::fmt::Display;
use std::str::Utf8Error;

use serde::{de, Deserialize};
use thiserror::Error;

use crate::target::query_string::{form_url_decode, QueryStringMapping};
use crate::values::PathValues;

/// Describes the error cases which can result from deserializing bound values or query
/// parameters into a struct provided by the application.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// The target type is not one which can be deserialized from key / value pairs. A
    /// structured type (usually a custom struct, or a map) is required.
    #[error("unsupported target type for extractor: {0}")]
    UnexpectedTargetType(&'static str),

    /// The type of a field is not one which can be deserialized from a single value, e.g. a
    /// nested struct or a sequence.
    #[error("unsupported value type for extractor: {0}")]
    UnexpectedValueType(&'static str),

    /// Only unit variants of an enum can be deserialized from a value.
    #[error("unsupported enum variant for extractor: {0}")]
    UnexpectedEnumVariantType(&'static str),

    /// A binding was present but had no value, and the field is not an `Option`.
    #[error("no value present for non-optional field")]
    NoValue,

    /// The deserializer attempted to access a value before retrieving its key.
    #[error("value requested without a current key")]
    NoCurrentItem,

    /// A value could not be parsed into the field type. For example, binding `abc` to an `i32`
    /// field.
    #[error("unable to parse value: {0}")]
    ParseError(String),

    /// A query value was not valid UTF-8 after percent-decoding.
    #[error("unable to decode query value: {0}")]
    Decode(#[from] Utf8Error),

    /// A `Deserialize` impl provided a custom error message.
    #[error("{0}")]
    Custom(String),
}

impl de::Error for ExtractorError {
    fn custom<T>(t: T) -> ExtractorError
    where
        T: Display,
    {
        ExtractorError::Custom(t.to_string())
    }
}

/// Deserializes a value of type `T` from bound path values. Each binding name maps to a field;
/// absent bindings deserialize as `None` into `Option` fields.
pub fn from_path_values<T>(values: &PathValues) -> Result<T, ExtractorError>
where
    T: for<'de> Deserialize<'de>,
{
    let rendered: Vec<(&str, Option<String>)> = values
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_ref().map(ToString::to_string)))
        .collect();

    internal::from_pairs(rendered.iter().map(|(k, v)| (*k, v.as_deref())))
}

/// Deserializes a value of type `T` from query parameters. Each value is form-url-decoded
/// before it is parsed.
pub fn from_query_string<T>(qsm: &QueryStringMapping) -> Result<T, ExtractorError>
where
    T: for<'de> Deserialize<'de>,
{
    let decoded = qsm
        .iter()
        .map(|(k, v)| form_url_decode(v).map(|decoded| (k.as_str(), decoded)))
        .collect::<Result<Vec<(&str, String)>, Utf8Error>>()?;

    internal::from_pairs(decoded.iter().map(|(k, v)| (*k, Some(v.as_str()))))
}
