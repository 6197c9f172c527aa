//! Shared types for the waymark route engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named stop on a route.
///
/// Equality and hashing are by name only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point {
    name: String,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The identifying name of this point.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Point {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Point {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// A directed edge from `start` to `end`.
///
/// Equality is order-sensitive: `A → B` and `B → A` are different
/// segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// Where the segment begins.
    pub start: Point,
    /// Where the segment ends.
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Swap `start` and `end` in place.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }

    /// Returns a copy of this segment pointing the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end.clone(), self.start.clone())
    }

    /// Returns `true` if `next` starts where this segment ends.
    #[must_use]
    pub fn connects_to(&self, next: &Self) -> bool {
        self.end == next.start
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

impl<S: Into<String>, E: Into<String>> From<(S, E)> for Segment {
    fn from((start, end): (S, E)) -> Self {
        Self::new(Point::new(start), Point::new(end))
    }
}

/// Errors that can occur while accepting or arranging segments.
///
/// Every variant is a caller-correctable input problem. Variants carry
/// plain data so errors serialize and deserialize without losing detail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum RouteError {
    /// No segments were provided, or none are held when arranging.
    #[error("route input is empty")]
    EmptyInput,

    /// A raw entry did not contain exactly two points.
    #[error("segment {index} has {arity} points, expected 2")]
    InvalidSegment {
        /// Position of the offending entry in the raw input.
        index: usize,
        /// Number of elements the entry actually had.
        arity: usize,
    },

    /// A raw byte entry was not valid UTF-8.
    #[error("segment {index} is not valid UTF-8: {message}")]
    InvalidUtf8 {
        /// Position of the offending entry in the raw input.
        index: usize,
        /// Description of the decoding failure.
        message: String,
    },

    /// The segments do not form one unbroken chain.
    #[error("route is disrupted: {unchained} segments cannot attach to a chain of {chained}")]
    DisruptedRoute {
        /// Length of the partial chain when progress stopped.
        chained: usize,
        /// Segments left over.
        unchained: usize,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn points_with_same_name_are_equal() {
        assert_eq!(Point::new("Abc, 42"), Point::new("Abc, 42"));
    }

    #[test]
    fn points_with_different_names_are_not_equal() {
        assert_ne!(Point::new("Abc, 42"), Point::new("24, xyZ"));
    }

    #[test]
    fn point_hash_follows_name() {
        let mut set = std::collections::HashSet::new();
        set.insert(Point::new("Сити"));
        assert!(set.contains(&Point::new("Сити")));
        assert!(!set.contains(&Point::new("Челси")));
    }

    #[test]
    fn segment_reverse_swaps_endpoints() {
        let mut segment = Segment::from(("Abc, 42", "24, xyZ"));
        segment.reverse();
        assert_eq!(segment.start, Point::new("24, xyZ"));
        assert_eq!(segment.end, Point::new("Abc, 42"));
    }

    #[test]
    fn segment_and_its_reverse_are_not_equal() {
        let segment = Segment::from(("A", "B"));
        assert_ne!(segment, segment.reversed());
        assert_eq!(segment, segment.reversed().reversed());
    }

    #[test]
    fn segment_connects_to_next() {
        let ab = Segment::from(("A", "B"));
        let bc = Segment::from(("B", "C"));
        assert!(ab.connects_to(&bc));
        assert!(!bc.connects_to(&ab));
    }

    #[test]
    fn segment_display_uses_arrow() {
        let segment = Segment::from(("Сити", "Вестминстер"));
        assert_eq!(segment.to_string(), "Сити → Вестминстер");
    }

    // --- RouteError tests ---

    #[test]
    fn error_empty_input_display() {
        assert_eq!(RouteError::EmptyInput.to_string(), "route input is empty");
    }

    #[test]
    fn error_invalid_segment_display() {
        let err = RouteError::InvalidSegment { index: 5, arity: 1 };
        assert_eq!(err.to_string(), "segment 5 has 1 points, expected 2");
    }

    #[test]
    fn error_disrupted_display() {
        let err = RouteError::DisruptedRoute {
            chained: 4,
            unchained: 5,
        };
        assert_eq!(
            err.to_string(),
            "route is disrupted: 5 segments cannot attach to a chain of 4",
        );
    }

    // --- Serde tests ---

    #[test]
    fn point_serializes_as_bare_name() {
        let json = serde_json::to_string(&Point::new("Челси")).unwrap();
        assert_eq!(json, "\"Челси\"");
    }

    #[test]
    fn segment_serializes_with_named_endpoints() {
        let json = serde_json::to_string(&Segment::from(("A", "B"))).unwrap();
        assert_eq!(json, r#"{"start":"A","end":"B"}"#);
    }

    #[test]
    fn error_serde_preserves_disruption_counts() {
        let err = RouteError::DisruptedRoute {
            chained: 3,
            unchained: 2,
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: RouteError = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            back,
            RouteError::DisruptedRoute {
                chained: 3,
                unchained: 2
            }
        ));
    }

    #[test]
    fn error_serde_invalid_utf8_keeps_message() {
        let source = String::from_utf8(vec![0xFF, 0xFE]).unwrap_err().utf8_error();
        let err = RouteError::InvalidUtf8 {
            index: 7,
            message: source.to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: RouteError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
        assert_eq!(back.to_string(), err.to_string());
        assert!(back.to_string().starts_with("segment 7 is not valid UTF-8: invalid utf-8"));
    }
}
