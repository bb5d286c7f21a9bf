//! Defines types for navigation handlers
//!
//! A `NavHandler` declares the `Pattern` of locations it accepts, and describes the targets it
//! is selected for. Rendering a view for a target is the business of the embedding application;
//! the handler only carries what is needed to select it and to label the result.

use crate::matcher::nav_target_matches_pattern;
use crate::pattern::Pattern;
use crate::target::{NavigationTarget, Payload};

/// A declared route, evaluated by the `Router` for each navigation target.
pub trait NavHandler<D = Payload> {
    /// The pattern of locations this handler accepts.
    fn match_pattern(&self) -> &Pattern;

    /// Identifies the kind of view this handler selects, e.g. `"user-profile"`.
    fn type_identifier(&self) -> &str;

    /// Identifies the data shown for `target`. Two targets with equal identifiers show the same
    /// data.
    ///
    /// Defaults to the original location.
    fn data_identifier(&self, target: &NavigationTarget<D>) -> String {
        target.original().to_string()
    }

    /// A human readable title for `target`.
    ///
    /// Defaults to the type identifier.
    fn title(&self, _target: &NavigationTarget<D>) -> String {
        self.type_identifier().to_string()
    }

    /// Determines if this handler is willing to accept `target`.
    ///
    /// Defaults to a loose fit against `match_pattern`.
    fn handles_type(&self, target: &NavigationTarget<D>) -> bool {
        nav_target_matches_pattern(target, self.match_pattern())
    }
}

/// A `NavHandler` made from a type identifier and a pattern string, using every default.
///
/// # Examples
///
/// ```rust
/// use navroute::handler::{NavHandler, PatternHandler};
/// use navroute::target::{build_navigation_target, NavigationTarget};
///
/// let handler = PatternHandler::new("user", "/users/:[int]id");
/// let target: NavigationTarget = build_navigation_target("/users/12", None, "");
///
/// assert!(handler.handles_type(&target));
/// assert_eq!(handler.title(&target), "user");
/// assert_eq!(handler.data_identifier(&target), "/users/12");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PatternHandler {
    type_identifier: String,
    pattern: Pattern,
}

impl PatternHandler {
    /// Creates a new `PatternHandler`, parsing `pattern`.
    pub fn new<S: Into<String>>(type_identifier: S, pattern: &str) -> Self {
        PatternHandler {
            type_identifier: type_identifier.into(),
            pattern: Pattern::parse(pattern),
        }
    }

    /// Identifies the kind of view this handler selects.
    pub fn type_identifier(&self) -> &str {
        &self.type_identifier
    }

    /// The parsed pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl<D> NavHandler<D> for PatternHandler {
    fn match_pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn type_identifier(&self) -> &str {
        &self.type_identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::build_navigation_target;

    struct UserHandler {
        pattern: Pattern,
    }

    impl NavHandler for UserHandler {
        fn match_pattern(&self) -> &Pattern {
            &self.pattern
        }

        fn type_identifier(&self) -> &str {
            "user"
        }

        fn data_identifier(&self, target: &NavigationTarget) -> String {
            format!("user:{}", target.paths()[1])
        }

        fn title(&self, target: &NavigationTarget) -> String {
            format!("User #{}", target.paths()[1])
        }
    }

    #[test]
    fn custom_handler_overrides() {
        let handler = UserHandler {
            pattern: Pattern::parse("/users/:[int]id"),
        };
        let target: NavigationTarget =
            build_navigation_target("/app/users/7?tab=1", None, "app");

        assert!(handler.handles_type(&target));
        assert_eq!(handler.data_identifier(&target), "user:7");
        assert_eq!(handler.title(&target), "User #7");
    }

    #[test]
    fn pattern_handler_defaults() {
        let handler = PatternHandler::new("settings", "/settings/?section");
        let target: NavigationTarget = build_navigation_target("/app/settings", None, "app");
        let other: NavigationTarget = build_navigation_target("/app/users/1", None, "app");

        assert!(handler.handles_type(&target));
        assert!(!handler.handles_type(&other));
        assert_eq!(handler.type_identifier(), "settings");
        assert_eq!(handler.title(&target), "settings");
        assert_eq!(handler.data_identifier(&target), "/app/settings");
    }
}
