use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::models::MinRating;
use crate::opentripmap::{SearchOptions, DEFAULT_BASE_URL};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub places: PlacesConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct PlacesConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub radius: u32,
    pub category: String,
    pub min_rating: MinRating,
    pub format_kinds: bool,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        let options = SearchOptions::default();
        Self {
            radius: options.radius,
            category: options.category,
            min_rating: options.min_rating,
            format_kinds: options.format_kinds,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;
        config.places.endpoint_base()?;
        if config.places.timeout_secs == 0 {
            anyhow::bail!("places.timeout_secs must be greater than zero");
        }
        Ok(config)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            radius: self.search.radius,
            category: self.search.category.clone(),
            min_rating: self.search.min_rating,
            format_kinds: self.search.format_kinds,
        }
    }
}

impl PlacesConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL the endpoint names are joined onto.
    ///
    /// A trailing '/' is added when missing, otherwise `Url::join` would
    /// replace the last path segment.
    pub fn endpoint_base(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid places.base_url '{}'", self.base_url))?;
        if url.cannot_be_a_base() {
            anyhow::bail!("places.base_url '{}' cannot be a base URL", self.base_url);
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
