//! Defines a builder API for constructing a `Router`.

use log::trace;

use crate::handler::{NavHandler, PatternHandler};
use crate::router::{BoxedNavHandler, Router};
use crate::target::Payload;

/// Builds a `Router` using the provided closure. Handlers are declared using the `RouterBuilder`
/// value passed to the closure, and the `Router` is constructed before returning.
///
/// Every location resolved by the `Router` has `/` + `base_path` removed from its start.
///
/// ```rust
/// use navroute::router::{build_router, Router};
///
/// fn router() -> Router {
///     build_router("app", |route| {
///         route
///             .declare("inbox", "/mail/?folder")
///             .declare("message", "/mail/:folder/:[int]id");
///     })
/// }
///
/// let router = router();
/// assert_eq!(router.base_path(), "app");
/// assert_eq!(router.handlers().len(), 2);
/// ```
pub fn build_router<D, F>(base_path: &str, f: F) -> Router<D>
where
    F: FnOnce(&mut RouterBuilder<D>),
{
    trace!(" building router with base path {:?}", base_path);

    let mut builder = RouterBuilder {
        handlers: Vec::new(),
    };

    f(&mut builder);

    Router::internal_new(base_path.to_string(), builder.handlers)
}

/// Builds a `Router` with an empty base path using the provided closure.
///
/// ```rust
/// use navroute::router::{build_simple_router, Router};
///
/// let router: Router = build_simple_router(|route| {
///     route.declare("about", "/about");
/// });
///
/// assert!(router.navigate("/about", None).is_ok());
/// ```
pub fn build_simple_router<D, F>(f: F) -> Router<D>
where
    F: FnOnce(&mut RouterBuilder<D>),
{
    build_router("", f)
}

/// The top-level builder which is created by `build_router` and passed to the provided closure.
pub struct RouterBuilder<D = Payload> {
    handlers: Vec<BoxedNavHandler<D>>,
}

impl<D> RouterBuilder<D> {
    /// Declares a handler. Handlers are evaluated in declaration order.
    pub fn handler<H>(&mut self, handler: H) -> &mut Self
    where
        H: NavHandler<D> + Send + Sync + 'static,
    {
        trace!(
            " declaring handler {:?} for pattern {:?}",
            handler.type_identifier(),
            handler.match_pattern()
        );
        self.handlers.push(Box::new(handler));
        self
    }

    /// Declares a `PatternHandler` for `pattern`.
    pub fn declare(&mut self, type_identifier: &str, pattern: &str) -> &mut Self {
        self.handler(PatternHandler::new(type_identifier, pattern))
    }
}
