//! Run configuration shared by front ends.

use serde::{Deserialize, Serialize};

use crate::decode::DecoderKind;

/// How a route should be built and presented.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Display name of the route. Built-in samples keep their own name
    /// unless this is set.
    pub name: Option<String>,

    /// Which decoder reads the raw input.
    pub decoder: DecoderKind,

    /// Whether to reverse the route after arranging it.
    pub reverse: bool,

    /// Whether to present the route as a trail of points instead of a
    /// numbered segment listing.
    pub points: bool,
}

impl RouteConfig {
    /// Display name used when none is configured.
    pub const DEFAULT_NAME: &'static str = "route";

    /// The configured name, or [`DEFAULT_NAME`](Self::DEFAULT_NAME).
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or(Self::DEFAULT_NAME)
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            name: None,
            decoder: DecoderKind::default(),
            reverse: false,
            points: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = RouteConfig::default();
        assert_eq!(config.name, None);
        assert_eq!(config.name_or_default(), "route");
        assert_eq!(config.decoder, DecoderKind::Text);
        assert!(!config.reverse);
        assert!(!config.points);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: RouteConfig =
            serde_json::from_str(r#"{"decoder":"utf8-bytes","reverse":true}"#).unwrap();
        assert_eq!(
            config,
            RouteConfig {
                decoder: DecoderKind::Utf8Bytes,
                reverse: true,
                ..RouteConfig::default()
            }
        );
    }

    #[test]
    fn configured_name_replaces_default() {
        let config: RouteConfig = serde_json::from_str(r#"{"name":"Лондон"}"#).unwrap();
        assert_eq!(config.name.as_deref(), Some("Лондон"));
        assert_eq!(config.name_or_default(), "Лондон");
    }

    #[test]
    fn unknown_decoder_is_rejected() {
        let result = serde_json::from_str::<RouteConfig>(r#"{"decoder":"latin1"}"#);
        assert!(result.is_err());
    }
}
