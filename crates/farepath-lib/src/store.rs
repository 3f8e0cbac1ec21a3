use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::route::{normalize_code, Route, RouteId};

/// Source of outgoing routes consumed by the search.
///
/// Implementations must enumerate routes in a stable, deterministic order for
/// a given origin; tie-breaking between equally cheap travel routes depends
/// on it.
pub trait RouteSource {
    /// All routes departing from `from`. Empty, never an error, when the code
    /// has no outgoing routes.
    fn routes_from(&self, from: &str) -> &[Route];

    /// Whether `route` arrives at the queried destination.
    fn is_terminal(&self, route: &Route, to: &str) -> bool {
        route.to == normalize_code(to)
    }
}

/// In-memory route storage with validation at ingestion.
///
/// Routes are grouped by origin and kept in insertion order. The search
/// assumes well-formed routes, so malformed ones (negative cost, self-loop)
/// and duplicate (from, to) pairs are rejected here and never reach it.
#[derive(Debug, Clone)]
pub struct RouteStore {
    adjacency: HashMap<String, Vec<Route>>,
    next_id: RouteId,
}

/// Shape of one CSV record in a routes file.
#[derive(Debug, Deserialize)]
struct RouteRecord {
    from: String,
    to: String,
    cost: Decimal,
}

impl RouteStore {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            next_id: 1,
        }
    }

    /// Load a store from a CSV file with a `from,to,cost` header row.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let reader = csv::Reader::from_path(path)?;
        Self::load(reader)
    }

    /// Load a store from CSV content with a `from,to,cost` header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::load(csv::Reader::from_reader(reader))
    }

    fn load<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut store = Self::new();
        for record in reader.deserialize::<RouteRecord>() {
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    let line = err.position().map(|pos| pos.line()).unwrap_or_default();
                    return Err(Error::InvalidRecord {
                        line,
                        message: err.to_string(),
                    });
                }
            };
            store.add_route(&record.from, &record.to, record.cost)?;
        }
        debug!(routes = store.len(), "loaded route store");
        Ok(store)
    }

    /// Store a new route, normalizing its endpoints and assigning the next id.
    pub fn add_route(&mut self, from: &str, to: &str, cost: Decimal) -> Result<RouteId> {
        let from = normalize_code(from);
        let to = normalize_code(to);

        if cost.is_sign_negative() {
            return Err(Error::NegativeCost { from, to, cost });
        }
        if from == to {
            return Err(Error::SelfLoop { code: from });
        }
        if self.route_between(&from, &to).is_some() {
            return Err(Error::DuplicateRoute { from, to });
        }

        let id = self.next_id;
        self.next_id += 1;
        debug!(%from, %to, %cost, id, "storing route");

        let route = Route {
            id: Some(id),
            from: from.clone(),
            to,
            cost,
        };
        self.adjacency.entry(from).or_default().push(route);
        Ok(id)
    }

    /// All routes departing from `from`, in insertion order.
    pub fn routes_from(&self, from: &str) -> &[Route] {
        self.adjacency
            .get(&normalize_code(from))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Lookup a stored route by identifier.
    pub fn route(&self, id: RouteId) -> Result<&Route> {
        self.adjacency
            .values()
            .flatten()
            .find(|route| route.id == Some(id))
            .ok_or(Error::UnknownRouteId { id })
    }

    /// The stored route covering the (from, to) pair, if any.
    pub fn route_between(&self, from: &str, to: &str) -> Option<&Route> {
        let to = normalize_code(to);
        self.routes_from(from).iter().find(|route| route.to == to)
    }

    /// All stored routes, ordered by identifier.
    pub fn routes(&self) -> Vec<&Route> {
        let mut all: Vec<&Route> = self.adjacency.values().flatten().collect();
        all.sort_by_key(|route| route.id);
        all
    }

    pub fn len(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl Default for RouteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteSource for RouteStore {
    fn routes_from(&self, from: &str) -> &[Route] {
        RouteStore::routes_from(self, from)
    }
}
