// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component configuration.

use alloc::string::{String, ToString};

use serde::Deserialize;
use waymark_outline::HeadingLevels;

/// Default tracking line, in pixels below the viewport top.
pub const DEFAULT_OFFSET: f64 = 120.0;
/// Default gap left between the viewport top and a heading after a click.
pub const DEFAULT_LANDING_GAP: f64 = 16.0;
/// Default delay before the corrective scroll, in milliseconds.
pub const DEFAULT_CORRECTION_DELAY_MS: u32 = 200;
/// Default marker (element id) of the content container.
pub const DEFAULT_CONTAINER: &str = "post-content";

/// Invalid configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON for [`TocConfig`].
    #[error("invalid table-of-contents config: {0}")]
    Json(String),
    /// A pixel setting is NaN or infinite.
    #[error("`{0}` must be a finite number of pixels")]
    NonFinite(&'static str),
    /// The container marker is empty.
    #[error("`container` must name the content container")]
    EmptyContainer,
    /// No heading level is selected.
    #[error("`levels` must select at least one heading level")]
    NoLevels,
}

/// Table-of-contents settings.
///
/// Every field has a default, so `{}` is a complete configuration.
///
/// ```
/// use waymark_spy::config::TocConfig;
///
/// let config = TocConfig::from_json(r#"{"offset": 96, "levels": "H2 | H3"}"#).unwrap();
/// assert_eq!(config.offset, 96.0);
/// assert_eq!(config.container, "post-content");
/// assert_eq!(config.correction(), -80.0);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TocConfig {
    /// Distance from the viewport top at which a heading counts as reached.
    pub offset: f64,
    /// Gap kept above a heading after click navigation settles.
    pub landing_gap: f64,
    /// Delay between the smooth scroll and the corrective scroll.
    pub correction_delay_ms: u32,
    /// Id of the element whose headings form the outline.
    pub container: String,
    /// Heading levels collected into the outline.
    pub levels: HeadingLevels,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            landing_gap: DEFAULT_LANDING_GAP,
            correction_delay_ms: DEFAULT_CORRECTION_DELAY_MS,
            container: String::from(DEFAULT_CONTAINER),
            levels: HeadingLevels::H2,
        }
    }
}

impl TocConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings for values the tracker cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.offset.is_finite() {
            return Err(ConfigError::NonFinite("offset"));
        }
        if !self.landing_gap.is_finite() {
            return Err(ConfigError::NonFinite("landing_gap"));
        }
        if self.container.is_empty() {
            return Err(ConfigError::EmptyContainer);
        }
        if self.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        Ok(())
    }

    /// Vertical delta of the corrective scroll applied after click navigation.
    pub fn correction(&self) -> f64 {
        -self.offset + self.landing_gap
    }
}
