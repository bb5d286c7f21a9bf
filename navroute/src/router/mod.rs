//! Defines the `Router` and supporting types.
//!
//! The `Router` holds the base path of the application and the declared `NavHandler` values, in
//! declaration order. For each navigation target it determines the candidate handlers which
//! loosely match, and selects the most specific one.

pub mod builder;
mod non_match;

use std::fmt;

use log::{debug, trace};
use serde::Deserialize;

use crate::extractor::{self, ExtractorError};
use crate::handler::NavHandler;
use crate::matcher::data_fits_pattern;
use crate::target::{build_navigation_target, NavigationTarget, Payload};
use crate::values::{parse_path_values, PathValues};

pub use self::builder::{build_router, build_simple_router, RouterBuilder};
pub use self::non_match::RouteNonMatch;

/// A boxed handler as stored by the `Router`.
pub type BoxedNavHandler<D> = Box<dyn NavHandler<D> + Send + Sync>;

/// Selects a declared `NavHandler` for each navigation target.
///
/// # Examples
///
/// ```rust
/// use navroute::router::{build_router, Router};
///
/// let router: Router = build_router("app", |route| {
///     route.declare("users", "/users");
///     route.declare("user", "/users/:[int]id/?tab");
/// });
///
/// let target = router.target("/app/users/12/settings", None);
/// let route_match = router.resolve(&target).unwrap();
///
/// assert_eq!(route_match.handler().type_identifier(), "user");
/// assert_eq!(route_match.values()["id"].as_ref().unwrap().as_int(), Some(12));
/// assert!(router.resolve(&router.target("/app/orders", None)).is_err());
/// ```
pub struct Router<D = Payload> {
    base_path: String,
    handlers: Vec<BoxedNavHandler<D>>,
}

impl<D> Router<D> {
    pub(crate) fn internal_new(base_path: String, handlers: Vec<BoxedNavHandler<D>>) -> Self {
        Router {
            base_path,
            handlers,
        }
    }

    /// The base path which is stripped from every location.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// The declared handlers, in declaration order.
    pub fn handlers(&self) -> &[BoxedNavHandler<D>] {
        &self.handlers
    }

    /// Builds a `NavigationTarget` for `raw_location`, relative to the base path.
    pub fn target(&self, raw_location: &str, data: Option<D>) -> NavigationTarget<D>
    where
        D: Default,
    {
        build_navigation_target(raw_location, data, &self.base_path)
    }

    /// Provides every handler willing to accept `target`, in declaration order.
    pub fn candidates(
        &self,
        target: &NavigationTarget<D>,
    ) -> Vec<&(dyn NavHandler<D> + Send + Sync)> {
        self.handlers
            .iter()
            .map(|handler| handler.as_ref())
            .filter(|handler| handler.handles_type(target))
            .collect()
    }

    /// Selects the handler for `target`.
    ///
    /// The first candidate whose pattern strictly fits the target is selected. Where no candidate
    /// fits strictly, the first candidate is selected. Where there are no candidates at all, a
    /// `RouteNonMatch` is returned.
    pub fn resolve(
        &self,
        target: &NavigationTarget<D>,
    ) -> Result<RouteMatch<'_, D>, RouteNonMatch> {
        let candidates = self.candidates(target);
        trace!(
            " {} candidate handler(s) for {:?}",
            candidates.len(),
            target.original()
        );

        let selected = candidates
            .iter()
            .find(|handler| data_fits_pattern(target, handler.match_pattern()))
            .map(|handler| (*handler, true))
            .or_else(|| candidates.first().map(|handler| (*handler, false)));

        match selected {
            Some((handler, exact_fit)) => {
                debug!(
                    " selected handler {:?} for {:?} (exact fit: {})",
                    handler.type_identifier(),
                    target.original(),
                    exact_fit
                );

                Ok(RouteMatch {
                    handler,
                    values: parse_path_values(target, handler.match_pattern()),
                    exact_fit,
                })
            }
            None => {
                debug!(" no route found for {:?}", target.original());
                Err(RouteNonMatch::new(target.original()))
            }
        }
    }

    /// Builds the target for `raw_location` and resolves it.
    pub fn navigate(
        &self,
        raw_location: &str,
        data: Option<D>,
    ) -> Result<(NavigationTarget<D>, RouteMatch<'_, D>), RouteNonMatch>
    where
        D: Default,
    {
        let target = self.target(raw_location, data);
        let route_match = self.resolve(&target)?;
        Ok((target, route_match))
    }
}

/// The handler selected for a navigation target, with the values bound by its pattern.
pub struct RouteMatch<'r, D = Payload> {
    handler: &'r (dyn NavHandler<D> + Send + Sync),
    values: PathValues,
    exact_fit: bool,
}

impl<'r, D> RouteMatch<'r, D> {
    /// The selected handler.
    pub fn handler(&self) -> &'r (dyn NavHandler<D> + Send + Sync) {
        self.handler
    }

    /// The values bound by the pattern of the selected handler.
    pub fn values(&self) -> &PathValues {
        &self.values
    }

    /// True when the target strictly fits the pattern of the selected handler, rather than only
    /// matching it as a prefix.
    pub fn is_exact_fit(&self) -> bool {
        self.exact_fit
    }

    /// The title the selected handler gives `target`.
    pub fn title(&self, target: &NavigationTarget<D>) -> String {
        self.handler.title(target)
    }

    /// The data identifier the selected handler gives `target`.
    pub fn data_identifier(&self, target: &NavigationTarget<D>) -> String {
        self.handler.data_identifier(target)
    }

    /// Deserializes the bound values into `T`.
    pub fn extract<T>(&self) -> Result<T, ExtractorError>
    where
        T: for<'de> Deserialize<'de>,
    {
        extractor::from_path_values(&self.values)
    }

    /// Consumes the match, returning the bound values.
    pub fn into_values(self) -> PathValues {
        self.values
    }
}

impl<'r, D> fmt::Debug for RouteMatch<'r, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("handler", &self.handler.type_identifier())
            .field("values", &self.values)
            .field("exact_fit", &self.exact_fit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::PatternHandler;
    use crate::pattern::Pattern;
    use crate::values::PathValue;

    fn router() -> Router {
        build_router("app", |route| {
            route.declare("home", "/");
            route.declare("users", "/users/?[int]page");
            route.declare("user", "/users/:[int]id");
            route.declare("user-tab", "/users/:[int]id/:tab/?sub");
        })
    }

    fn selected(router: &Router, location: &str) -> Option<String> {
        let target = router.target(location, None);
        router
            .resolve(&target)
            .ok()
            .map(|m| m.handler().type_identifier().to_string())
    }

    #[test]
    fn selects_most_specific_handler() {
        let router = router();

        assert_eq!(selected(&router, "/app"), Some("home".to_string()));
        assert_eq!(selected(&router, "/app/users"), Some("users".to_string()));
        assert_eq!(selected(&router, "/app/users/2"), Some("users".to_string()));
        assert_eq!(
            selected(&router, "/app/users/2/posts"),
            Some("user-tab".to_string())
        );
        assert_eq!(
            selected(&router, "/app/users/2/posts/latest"),
            Some("user-tab".to_string())
        );
    }

    #[test]
    fn falls_back_to_first_loose_candidate() {
        let router = router();
        let target = router.target("/app/users/2/posts/latest/extra", None);

        let route_match = router.resolve(&target).unwrap();
        assert_eq!(route_match.handler().type_identifier(), "home");
        assert!(!route_match.is_exact_fit());
    }

    #[test]
    fn candidates_in_declaration_order() {
        let router = router();
        let target = router.target("/app/users/2", None);

        let names: Vec<&str> = router
            .candidates(&target)
            .into_iter()
            .map(|h| h.type_identifier())
            .collect();
        assert_eq!(names, ["home", "users", "user"]);
    }

    #[test]
    fn no_route_found() {
        let router: Router = build_router("app", |route| {
            route.declare("users", "/users");
        });

        let err = router.navigate("/app/orders/1", None).unwrap_err();
        assert_eq!(err.location(), "/app/orders/1");
        assert_eq!(err.to_string(), "no route found for \"/app/orders/1\"");
    }

    #[test]
    fn binds_values_of_selected_handler() {
        let router = router();
        let (target, route_match) = router.navigate("/app/users/12/posts", None).unwrap();

        assert!(route_match.is_exact_fit());
        assert_eq!(route_match.values()["id"], Some(PathValue::Int(12)));
        assert_eq!(route_match.values()["tab"], Some(PathValue::from("posts")));
        assert_eq!(route_match.values()["sub"], None);
        assert_eq!(route_match.title(&target), "user-tab");
        assert_eq!(route_match.data_identifier(&target), "/app/users/12/posts");

        let values = route_match.into_values();
        assert_eq!(values.len(), 4);
        assert_eq!(values["users"], Some(PathValue::from("users")));
    }

    #[test]
    fn extracts_values_of_selected_handler() {
        #[derive(Deserialize)]
        struct UserTab {
            id: u32,
            tab: String,
            sub: Option<String>,
        }

        let router = router();
        let (_, route_match) = router.navigate("/app/users/12/posts/7", None).unwrap();

        let UserTab { id, tab, sub } = route_match.extract().unwrap();
        assert_eq!(id, 12);
        assert_eq!(tab, "posts");
        assert_eq!(sub, Some("7".to_string()));
    }

    #[test]
    fn custom_payload_and_handler() {
        #[derive(Default)]
        struct Origin {
            from_history: bool,
        }

        struct HistoryOnly {
            pattern: Pattern,
        }

        impl NavHandler<Origin> for HistoryOnly {
            fn match_pattern(&self) -> &Pattern {
                &self.pattern
            }

            fn type_identifier(&self) -> &str {
                "history"
            }

            fn handles_type(&self, target: &NavigationTarget<Origin>) -> bool {
                target.data().from_history
            }
        }

        let router: Router<Origin> = build_router("", |route| {
            route.handler(HistoryOnly {
                pattern: Pattern::parse("/:anything"),
            });
            route.handler(PatternHandler::new("fallback", "/"));
        });

        let (_, m) = router
            .navigate("/x", Some(Origin { from_history: true }))
            .unwrap();
        assert_eq!(m.handler().type_identifier(), "history");

        let (_, m) = router.navigate("/x", None).unwrap();
        assert_eq!(m.handler().type_identifier(), "fallback");
    }

    #[test]
    fn router_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Router>();
    }
}
