use thiserror::Error;

/// Returned by the `Router` when no declared handler accepts a navigation target.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("no route found for {location:?}")]
pub struct RouteNonMatch {
    location: String,
}

impl RouteNonMatch {
    pub(super) fn new(location: &str) -> RouteNonMatch {
        RouteNonMatch {
            location: location.to_string(),
        }
    }

    /// The original location of the target which was not matched.
    pub fn location(&self) -> &str {
        &self.location
    }
}
