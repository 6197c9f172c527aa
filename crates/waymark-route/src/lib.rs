//! waymark-route: Pure segment chaining engine (sans-IO).
//!
//! Turns an unordered collection of directed segments into one continuous
//! route:
//! raw pairs -> decoder -> unique segment set -> arrangement -> ordered chain.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! data and returns structured results. Reading files, printing and
//! logging live in the `waymark` binary.

pub mod config;
pub mod decode;
pub mod route;
pub mod samples;
pub mod types;

pub use config::RouteConfig;
pub use decode::{DecoderKind, RawInput, SegmentDecoder, TextPairs, Utf8BytePairs};
pub use route::Route;
pub use samples::Sample;
pub use types::{Point, RouteError, Segment};

/// Decode `raw` and arrange it into a new route called `name`.
///
/// Convenience for one-shot callers that do not keep the [`Route`]
/// around between inputs.
///
/// # Errors
///
/// Returns any decoding error from [`RawInput::decode`] and any
/// arrangement error from [`Route::arrange`].
pub fn arrange(name: &str, raw: &RawInput) -> Result<Route, RouteError> {
    let mut route = Route::new(name);
    route.accept_segments(raw.decode()?)?;
    route.arrange()?;
    Ok(route)
}
