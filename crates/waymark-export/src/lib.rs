//! waymark-export: Pure format serializers (sans-IO)
//!
//! Converts arranged routes into output formats: a numbered text listing,
//! a trail of point names, and a JSON document.

pub mod json;
pub mod listing;

pub use json::{RouteDocument, to_json};
pub use listing::{LISTING_RULE_WIDTH, to_listing, to_point_trail};
