//! JSON serializer.
//!
//! [`RouteDocument`] is the stable, serde-friendly view of a route. It
//! carries both the segment chain and the derived point trail so that
//! consumers do not need to recompute either.

use serde::{Deserialize, Serialize};

use waymark_route::{Point, Route, Segment};

/// Serializable snapshot of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDocument {
    /// Display name of the route.
    pub name: String,
    /// Whether the chain was arranged when the snapshot was taken.
    pub arranged: bool,
    /// The chain in its current order.
    pub segments: Vec<Segment>,
    /// Every stop along the chain, start to end.
    pub points: Vec<Point>,
}

impl From<&Route> for RouteDocument {
    fn from(route: &Route) -> Self {
        Self {
            name: route.name().to_string(),
            arranged: route.is_arranged(),
            segments: route.segments().to_vec(),
            points: route.points().cloned().collect(),
        }
    }
}

/// Serialize a route as pretty-printed JSON.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if serialization fails.
pub fn to_json(route: &Route) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&RouteDocument::from(route))
}
