use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Numeric identifier assigned to a stored route.
///
/// Identity is external bookkeeping only; the search ignores it.
pub type RouteId = u64;

/// Directed, costed connection between two airport codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RouteId>,
    pub from: String,
    pub to: String,
    pub cost: Decimal,
}

impl Route {
    /// Build an unstored route with normalized endpoint codes.
    pub fn new(from: &str, to: &str, cost: Decimal) -> Self {
        Self {
            id: None,
            from: normalize_code(from),
            to: normalize_code(to),
            cost,
        }
    }
}

/// Normalize an airport code for storage and comparison.
///
/// Codes are case-insensitive at the boundary and uppercase internally. Every
/// external entry point folds case through this function exactly once; no
/// other layer compares codes case-insensitively.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}
