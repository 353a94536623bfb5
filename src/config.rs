//! Preview configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::error::PreviewError;

pub const DEFAULT_TICK_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Prefix joined onto relative image paths. Never ends with `/`.
    pub image_base_url: String,
    /// Countdown refresh period in milliseconds.
    pub tick_ms: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { image_base_url: String::new(), tick_ms: DEFAULT_TICK_MS }
    }
}

impl PreviewConfig {
    /// Build typed preview config from environment variables.
    ///
    /// Optional:
    /// - `SLIDE_PREVIEW_IMAGE_BASE_URL`: default empty (paths stay relative)
    /// - `SLIDE_PREVIEW_TICK_MS`: default 1000, must be a positive integer
    pub fn from_env() -> Result<Self, PreviewError> {
        let image_base_url = normalize_base_url(&std::env::var("SLIDE_PREVIEW_IMAGE_BASE_URL").unwrap_or_default());
        let tick_ms = parse_tick_ms(std::env::var("SLIDE_PREVIEW_TICK_MS").ok().as_deref())?;
        Ok(Self { image_base_url, tick_ms })
    }

    /// Override the image base URL, normalizing the trailing slash.
    #[must_use]
    pub fn with_image_base_url(mut self, base: &str) -> Self {
        self.image_base_url = normalize_base_url(base);
        self
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_tick_ms(raw: Option<&str>) -> Result<u64, PreviewError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TICK_MS);
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(PreviewError::ConfigParse("SLIDE_PREVIEW_TICK_MS must be greater than zero".into())),
        Ok(ms) => Ok(ms),
        Err(_) => Err(PreviewError::ConfigParse(format!("invalid SLIDE_PREVIEW_TICK_MS: {raw}"))),
    }
}
