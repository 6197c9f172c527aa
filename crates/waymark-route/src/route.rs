//! The arrangement engine: chain unordered segments into one route.
//!
//! A [`Route`] holds the accepted input set and, once arranged, the ordered
//! chain. Arrangement seeds the chain with the first accepted segment and
//! then repeatedly scans the remaining segments, attaching each one that
//! continues the tail or precedes the head. A pass that attaches nothing
//! means the input cannot form a single chain.
//!
//! The result is deterministic: the seed and the scan order both follow
//! the order in which segments were first accepted. For a chain without
//! branches the outcome does not depend on that order at all.

use std::collections::{HashSet, VecDeque};

use crate::decode::SegmentDecoder;
use crate::types::{Point, RouteError, Segment};

/// A named route built from unordered segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    name: String,
    input: Vec<Segment>,
    chain: Vec<Segment>,
}

impl Route {
    /// Create an empty route with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the input set with a deduplicated copy of `segments`.
    ///
    /// The first occurrence of a repeated segment wins. A previously
    /// arranged chain is kept until the next [`arrange`](Self::arrange).
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::EmptyInput`] if `segments` yields nothing; the
    /// route is left unchanged.
    pub fn accept_segments<I>(&mut self, segments: I) -> Result<(), RouteError>
    where
        I: IntoIterator<Item = Segment>,
    {
        let mut seen = HashSet::new();
        let input: Vec<Segment> = segments
            .into_iter()
            .filter(|segment| seen.insert(segment.clone()))
            .collect();

        if input.is_empty() {
            return Err(RouteError::EmptyInput);
        }

        self.input = input;
        Ok(())
    }

    /// Decode `raw` with `decoder` and accept the resulting segments.
    ///
    /// # Errors
    ///
    /// Returns any decoding error (see [`SegmentDecoder::decode`]); the
    /// route is left unchanged.
    pub fn accept_raw<D, T, E>(&mut self, decoder: &D, raw: &[E]) -> Result<(), RouteError>
    where
        D: SegmentDecoder<T>,
        E: AsRef<[T]>,
    {
        let segments = decoder.decode(raw)?;
        self.accept_segments(segments)
    }

    /// Arrange the accepted segments into a single continuous chain.
    ///
    /// When a segment could extend both ends, it goes to the tail.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::EmptyInput`] if no segments were accepted.
    /// Returns [`RouteError::DisruptedRoute`] if some segments cannot be
    /// attached; the chain is cleared in that case.
    pub fn arrange(&mut self) -> Result<(), RouteError> {
        let Some((seed, rest)) = self.input.split_first() else {
            return Err(RouteError::EmptyInput);
        };

        let mut chained = VecDeque::with_capacity(self.input.len());
        chained.push_back(seed.clone());
        let mut pending: Vec<Segment> = rest.to_vec();

        while !pending.is_empty() {
            let before = pending.len();

            pending.retain(|segment| {
                if chained.back().is_some_and(|last| last.connects_to(segment)) {
                    chained.push_back(segment.clone());
                    false
                } else if chained.front().is_some_and(|first| segment.connects_to(first)) {
                    chained.push_front(segment.clone());
                    false
                } else {
                    true
                }
            });

            if pending.len() == before {
                self.chain.clear();
                return Err(RouteError::DisruptedRoute {
                    chained: chained.len(),
                    unchained: pending.len(),
                });
            }
        }

        self.chain = chained.into();
        Ok(())
    }

    /// Flip the direction of the whole chain.
    ///
    /// Every segment is reversed and the order of segments is inverted.
    /// Does nothing if the route is not arranged.
    pub fn reverse(&mut self) {
        self.chain.reverse();
        self.chain.iter_mut().for_each(Segment::reverse);
    }

    /// Clear the name, the accepted input and the chain.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if segments have been accepted.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.input.is_empty()
    }

    /// Returns `true` if the chain is arranged.
    #[must_use]
    pub fn is_arranged(&self) -> bool {
        !self.chain.is_empty()
    }

    /// Number of segments in the arranged chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the arranged chain has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// The arranged chain in its current order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.chain
    }

    /// Iterate over the arranged chain in its current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.chain.iter()
    }

    /// Iterate over the stops of the arranged chain.
    ///
    /// Yields the start of every segment followed by the end of the last
    /// one, so a chain of `n` segments yields `n + 1` points. Yields nothing
    /// if the route is not arranged.
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.chain
            .iter()
            .map(|segment| &segment.start)
            .chain(self.chain.last().map(|segment| &segment.end))
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
