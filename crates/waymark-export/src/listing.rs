//! Human-readable text serializers.
//!
//! The listing mirrors the arranged chain exactly: same order, same
//! direction, one numbered line per segment.
//!
//! These are pure functions with no I/O -- they return a `String`.

use std::fmt::Write;

use waymark_route::{Point, Segment};

/// Width of the separator line under the route name.
pub const LISTING_RULE_WIDTH: usize = 40;

/// Separator placed between consecutive points in a trail.
const TRAIL_ARROW: &str = " → ";

/// Render a route as a numbered listing.
///
/// A non-empty route produces a `Route "{name}":` header, a separator
/// line, then `{index:03}. {start} → {end}` per segment with 1-based
/// indices. An empty route produces the single line
/// `Route {name} is currently empty`.
///
/// # Examples
///
/// ```
/// use waymark_route::Segment;
/// use waymark_export::to_listing;
///
/// let listing = to_listing("Demo", &[Segment::from(("A", "B"))]);
/// assert!(listing.ends_with("001. A → B\n"));
/// ```
#[must_use]
pub fn to_listing(name: &str, segments: &[Segment]) -> String {
    if segments.is_empty() {
        return format!("Route {name} is currently empty\n");
    }

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Route \"{name}\":");
    let _ = writeln!(out, "{}", "-".repeat(LISTING_RULE_WIDTH));
    for (idx, segment) in segments.iter().enumerate() {
        let _ = writeln!(out, "{:03}. {segment}", idx + 1);
    }
    out
}

/// Join point names with arrows: `A → B → C`.
///
/// Returns an empty string when there are no points.
#[must_use]
pub fn to_point_trail<'a, I>(points: I) -> String
where
    I: IntoIterator<Item = &'a Point>,
{
    points
        .into_iter()
        .map(Point::name)
        .collect::<Vec<_>>()
        .join(TRAIL_ARROW)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Vec<Segment> {
        vec![
            Segment::from(("Сити", "Вестминстер")),
            Segment::from(("Вестминстер", "Теддингтон")),
        ]
    }

    #[test]
    fn listing_has_header_rule_and_numbered_lines() {
        let listing = to_listing("Лондон", &chain());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Route \"Лондон\":");
        assert_eq!(lines[1], "-".repeat(LISTING_RULE_WIDTH));
        assert_eq!(lines[2], "001. Сити → Вестминстер");
        assert_eq!(lines[3], "002. Вестминстер → Теддингтон");
    }

    #[test]
    fn listing_pads_index_to_three_digits() {
        let segments: Vec<Segment> = (0..12)
            .map(|i| Segment::from((i.to_string(), (i + 1).to_string())))
            .collect();
        let listing = to_listing("long", &segments);
        assert!(listing.contains("\n009. 8 → 9\n"));
        assert!(listing.contains("\n012. 11 → 12\n"));
    }

    #[test]
    fn empty_listing_is_marked() {
        assert_eq!(to_listing("Токио", &[]), "Route Токио is currently empty\n");
    }

    #[test]
    fn trail_joins_names_with_arrows() {
        let points = [Point::new("A"), Point::new("B"), Point::new("C")];
        assert_eq!(to_point_trail(&points), "A → B → C");
    }

    #[test]
    fn empty_trail_is_empty_string() {
        assert_eq!(to_point_trail(&[]), "");
    }
}
