//! Farepath library entry points.
//!
//! This crate stores directed, costed routes between airport codes and
//! answers cheapest travel-route queries over them: enumerate every chained
//! sequence of routes from an origin to a destination, then pick the one with
//! the lowest exact total cost. Higher-level consumers (CLI, services) should
//! only depend on the items exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod route;
pub mod search;
pub mod store;

pub use error::{Error, Result};
pub use route::{normalize_code, Route, RouteId};
pub use search::{
    find_cheapest_route, find_cheapest_route_with_limits, find_travel_routes, SearchLimits,
    TravelRoute,
};
pub use store::{RouteSource, RouteStore};
