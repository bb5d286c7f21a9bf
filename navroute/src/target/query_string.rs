//! Defines helper functions for the location query string

use std::collections::HashMap;

use log::trace;
use percent_encoding::percent_decode;

/// Provides a mapping of keys from the location query string to their raw supplied values
pub type QueryStringMapping = HashMap<String, String>;

/// Splits a query string into pairs and provides a mapping of keys to values.
///
/// Pairs are separated by `&` and split at the first `=`. A key supplied without `=` maps to an
/// empty value, empty pairs and empty keys are skipped, and when a key is repeated the last value
/// wins. Values are kept exactly as supplied; see `form_url_decode` for decoding.
pub fn split(query: Option<&str>) -> QueryStringMapping {
    let mut query_string_mapping = QueryStringMapping::new();

    if let Some(query) = query {
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            if k.is_empty() {
                trace!(" skipping query pair without key: {}", pair);
                continue;
            }

            query_string_mapping.insert(k.to_string(), v.to_string());
        }
    }

    query_string_mapping
}

/// Decode form-urlencoded strings (`+` as space, then percent-decoding) and ensure that the
/// result is valid UTF-8.
pub fn form_url_decode(raw: &str) -> Result<String, std::str::Utf8Error> {
    match percent_decode(raw.replace('+', " ").as_bytes()).decode_utf8() {
        Ok(pd) => {
            trace!(" form_url_decode: {}, src: {}", pd, raw);
            Ok(pd.into_owned())
        }
        Err(e) => {
            trace!(" form_url_decode: error, src: {}", raw);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_pairs(qsm: &QueryStringMapping) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = qsm
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        pairs.sort();
        pairs
    }

    #[test]
    fn query_string_mapping_tests() {
        let qsm = split(Some("a=b&c=d&e=f"));
        assert_eq!(to_pairs(&qsm), vec![("a", "b"), ("c", "d"), ("e", "f")]);

        let qsm = split(Some("a=b&a=d&e=f"));
        assert_eq!(to_pairs(&qsm), vec![("a", "d"), ("e", "f")]);

        let qsm = split(Some("a&b="));
        assert_eq!(to_pairs(&qsm), vec![("a", ""), ("b", "")]);

        let qsm = split(Some("a=b=c&&=x&d=e"));
        assert_eq!(to_pairs(&qsm), vec![("a", "b=c"), ("d", "e")]);

        let qsm = split(Some("q=a+b%20c"));
        assert_eq!(to_pairs(&qsm), vec![("q", "a+b%20c")]);
    }

    #[test]
    fn empty_or_missing_query_is_empty() {
        assert!(split(None).is_empty());
        assert!(split(Some("")).is_empty());
    }

    #[test]
    fn ensure_valid_www_form_url_encoded_value() {
        let f = form_url_decode("%41+%42%2B%63%20%64").unwrap();
        assert_eq!("A B+c d", f);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        assert!(form_url_decode("%ff").is_err());
    }
}
