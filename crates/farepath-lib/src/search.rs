use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::route::{normalize_code, Route};
use crate::store::RouteSource;

/// Ordered, chained sequence of routes from an origin to a destination.
///
/// Consecutive legs satisfy `routes[i].to == routes[i + 1].from`; the total
/// cost is the exact decimal sum of the leg costs. Travel routes are built
/// per query and never outlive it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelRoute {
    pub routes: Vec<Route>,
    pub total_cost: Decimal,
}

impl TravelRoute {
    fn from_legs(routes: Vec<Route>) -> Self {
        let total_cost = routes
            .iter()
            .fold(Decimal::ZERO, |total, route| total + route.cost);
        Self { routes, total_cost }
    }

    /// Code of the first leg's departure.
    pub fn origin(&self) -> Option<&str> {
        self.routes.first().map(|route| route.from.as_str())
    }

    /// Code of the last leg's arrival.
    pub fn destination(&self) -> Option<&str> {
        self.routes.last().map(|route| route.to.as_str())
    }

    pub fn hop_count(&self) -> usize {
        self.routes.len()
    }
}

/// Resource bounds applied during enumeration.
///
/// The per-branch visited set already guarantees termination on cyclic
/// graphs; these limits additionally reject pathological inputs instead of
/// letting memory grow with the candidate set.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Maximum number of legs in any single travel route.
    pub max_depth: usize,
    /// Maximum number of candidate travel routes accumulated per query.
    pub max_candidates: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_candidates: 10_000,
        }
    }
}

/// Find the cheapest travel route between two codes using default limits.
pub fn find_cheapest_route<S>(source: &S, from: &str, to: &str) -> Result<TravelRoute>
where
    S: RouteSource + ?Sized,
{
    find_cheapest_route_with_limits(source, from, to, &SearchLimits::default())
}

/// Find the cheapest travel route between two codes.
///
/// Enumerates every candidate and selects the stable minimum by total cost:
/// among equally cheap candidates the first one in enumeration order wins.
pub fn find_cheapest_route_with_limits<S>(
    source: &S,
    from: &str,
    to: &str,
    limits: &SearchLimits,
) -> Result<TravelRoute>
where
    S: RouteSource + ?Sized,
{
    let candidates = find_travel_routes(source, from, to, limits)?;
    candidates
        .into_iter()
        .reduce(|best, candidate| {
            if candidate.total_cost < best.total_cost {
                candidate
            } else {
                best
            }
        })
        .ok_or_else(|| Error::NoTravelRoute {
            from: normalize_code(from),
            to: normalize_code(to),
        })
}

/// Enumerate every simple travel route from `from` to `to`.
///
/// Depth-first over the routes supplied by `source`, with strict
/// push-before-recurse / pop-after-sibling backtracking: the leg buffer at
/// any point holds exactly the path from the origin to the node being
/// expanded, so a partially built path can never leak into a sibling branch.
/// A node never repeats within one travel route, and expansion stops at the
/// destination; routes departing from it belong to a different query.
pub fn find_travel_routes<S>(
    source: &S,
    from: &str,
    to: &str,
    limits: &SearchLimits,
) -> Result<Vec<TravelRoute>>
where
    S: RouteSource + ?Sized,
{
    let origin = normalize_code(from);
    let destination = normalize_code(to);

    let mut legs = Vec::new();
    let mut visited = HashSet::new();
    visited.insert(origin.clone());
    let mut found = Vec::new();

    explore(
        source,
        &origin,
        &destination,
        limits,
        &mut legs,
        &mut visited,
        &mut found,
    )?;
    debug!(
        %origin,
        %destination,
        candidates = found.len(),
        "travel route enumeration finished"
    );
    Ok(found)
}

fn explore<S>(
    source: &S,
    current: &str,
    destination: &str,
    limits: &SearchLimits,
    legs: &mut Vec<Route>,
    visited: &mut HashSet<String>,
    found: &mut Vec<TravelRoute>,
) -> Result<()>
where
    S: RouteSource + ?Sized,
{
    if legs.len() >= limits.max_depth {
        warn!(limit = limits.max_depth, "travel route search hit the depth limit");
        return Err(Error::DepthLimitExceeded {
            limit: limits.max_depth,
        });
    }

    for route in source.routes_from(current) {
        legs.push(route.clone());
        if route.to == destination {
            if found.len() >= limits.max_candidates {
                warn!(
                    limit = limits.max_candidates,
                    "travel route search hit the candidate limit"
                );
                return Err(Error::SearchSpaceExhausted {
                    limit: limits.max_candidates,
                });
            }
            // Snapshot the buffer; later pops must not mutate the candidate.
            found.push(TravelRoute::from_legs(legs.clone()));
        } else if !visited.contains(&route.to) {
            visited.insert(route.to.clone());
            explore(source, &route.to, destination, limits, legs, visited, found)?;
            visited.remove(&route.to);
        }
        legs.pop();
    }
    Ok(())
}
