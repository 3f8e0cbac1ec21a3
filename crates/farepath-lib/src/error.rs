use rust_decimal::Decimal;
use thiserror::Error;

use crate::route::RouteId;

/// Convenient result alias for the farepath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when no chain of routes connects the origin to the destination.
    #[error("no travel route found between {from} and {to}")]
    NoTravelRoute { from: String, to: String },

    /// Raised when storing a route for an already covered (from, to) pair.
    #[error("there is already a route departing from {from} and arriving in {to}")]
    DuplicateRoute { from: String, to: String },

    /// Raised when storing a route with a negative cost.
    #[error("route from {from} to {to} has negative cost {cost}")]
    NegativeCost {
        from: String,
        to: String,
        cost: Decimal,
    },

    /// Raised when storing a route departing from and arriving at the same code.
    #[error("route from {code} to itself is not allowed")]
    SelfLoop { code: String },

    /// Raised when a route lookup by identifier finds nothing.
    #[error("there is no route for the id {id}")]
    UnknownRouteId { id: RouteId },

    /// Raised when the search recursion exceeds the configured depth bound.
    #[error("travel route search exceeded the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// Raised when candidate accumulation exceeds the configured bound.
    #[error("travel route search exceeded the candidate limit of {limit}")]
    SearchSpaceExhausted { limit: usize },

    /// Raised when a CSV record cannot be parsed into a route.
    #[error("invalid route record on line {line}: {message}")]
    InvalidRecord { line: u64, message: String },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
