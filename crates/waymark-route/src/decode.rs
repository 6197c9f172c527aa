//! Raw input decoding: turn pairs of tokens into validated segments.
//!
//! Callers pick the decoder explicitly. This module defines the
//! [`SegmentDecoder`] trait for token formats and the [`DecoderKind`]
//! enum for runtime selection (CLI flags, config files).

use serde::{Deserialize, Serialize};

use crate::types::{Point, RouteError, Segment};

/// Selects which decoder interprets raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecoderKind {
    /// Each entry is a pair of text tokens.
    #[default]
    Text,

    /// Each entry is a pair of byte buffers holding UTF-8 text.
    Utf8Bytes,
}

/// Trait for raw token formats.
///
/// Input: a sequence of entries, each expected to hold exactly two tokens.
/// Output: one [`Segment`] per entry, in input order.
pub trait SegmentDecoder<T> {
    /// Decode one token of the entry at `index` into a point.
    ///
    /// # Errors
    ///
    /// Implementations return an error naming `index` when the token
    /// cannot be read.
    fn decode_point(&self, index: usize, token: &T) -> Result<Point, RouteError>;

    /// Decode every entry of `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::EmptyInput`] if `raw` is empty.
    /// Returns [`RouteError::InvalidSegment`] for the first entry that does
    /// not hold exactly two tokens.
    /// Propagates any error from [`decode_point`](Self::decode_point).
    fn decode<E: AsRef<[T]>>(&self, raw: &[E]) -> Result<Vec<Segment>, RouteError> {
        if raw.is_empty() {
            return Err(RouteError::EmptyInput);
        }

        raw.iter()
            .enumerate()
            .map(|(index, entry)| match entry.as_ref() {
                [start, end] => Ok(Segment::new(
                    self.decode_point(index, start)?,
                    self.decode_point(index, end)?,
                )),
                other => Err(RouteError::InvalidSegment {
                    index,
                    arity: other.len(),
                }),
            })
            .collect()
    }
}

/// Decoder for text tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPairs;

impl<T: AsRef<str>> SegmentDecoder<T> for TextPairs {
    fn decode_point(&self, _index: usize, token: &T) -> Result<Point, RouteError> {
        Ok(Point::new(token.as_ref()))
    }
}

/// Decoder for byte buffers holding UTF-8 text.
///
/// Invalid UTF-8 is rejected rather than replaced, so two different
/// malformed buffers never collapse into the same point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8BytePairs;

impl<T: AsRef<[u8]>> SegmentDecoder<T> for Utf8BytePairs {
    fn decode_point(&self, index: usize, token: &T) -> Result<Point, RouteError> {
        std::str::from_utf8(token.as_ref())
            .map(Point::new)
            .map_err(|source| RouteError::InvalidUtf8 {
                index,
                message: source.to_string(),
            })
    }
}

/// Owned raw input tagged with the decoder that understands it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Pairs of text tokens.
    Text(Vec<Vec<String>>),
    /// Pairs of UTF-8 byte buffers.
    Utf8Bytes(Vec<Vec<Vec<u8>>>),
}

impl RawInput {
    /// The decoder this input is meant for.
    #[must_use]
    pub const fn kind(&self) -> DecoderKind {
        match self {
            Self::Text(_) => DecoderKind::Text,
            Self::Utf8Bytes(_) => DecoderKind::Utf8Bytes,
        }
    }

    /// Number of raw entries, valid or not.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(entries) => entries.len(),
            Self::Utf8Bytes(entries) => entries.len(),
        }
    }

    /// Returns `true` if there are no raw entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode with the matching decoder.
    ///
    /// # Errors
    ///
    /// See [`SegmentDecoder::decode`].
    pub fn decode(&self) -> Result<Vec<Segment>, RouteError> {
        match self {
            Self::Text(entries) => TextPairs.decode(entries),
            Self::Utf8Bytes(entries) => Utf8BytePairs.decode(entries),
        }
    }
}
