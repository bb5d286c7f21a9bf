//! Navroute &ndash; Route patterns and navigation target matching for client-side navigation.
//!
//! An application declares its views as `NavHandler` values, each with a `Pattern` such as
//! `/users/:[int]id/?tab`. A location like `/app/users/12?sort=asc` becomes a
//! `NavigationTarget`, and the `Router` selects the most specific handler for it, binding the
//! values named by the pattern.
//!
//! ```rust
//! use navroute::router::build_router;
//! use navroute::Router;
//!
//! let router: Router = build_router("app", |route| {
//!     route.declare("home", "/");
//!     route.declare("user", "/users/:[int]id/?tab");
//! });
//!
//! let (target, route_match) = router.navigate("/app/users/12?sort=asc", None).unwrap();
//! assert_eq!(route_match.handler().type_identifier(), "user");
//! assert_eq!(target.query()["sort"], "asc");
//! ```
#![warn(missing_docs, deprecated)]
#![doc(test(no_crate_inject, attr(deny(warnings))))]

pub mod extractor;
pub mod handler;
pub mod matcher;
pub mod pattern;
pub mod router;
pub mod target;
pub mod values;

pub use crate::handler::{NavHandler, PatternHandler};
pub use crate::pattern::{MatchItem, MatchRule, Pattern};
pub use crate::router::{RouteMatch, RouteNonMatch, Router};
pub use crate::target::{build_navigation_target, NavigationTarget};
pub use crate::values::{PathValue, PathValues};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;
