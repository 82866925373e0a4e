use thiserror::Error;
use url::Url;

use crate::shell::DEFAULT_PAGE_SIZE;

pub const DEFAULT_START_PATH: &str = "/";
pub const DEFAULT_BASE_URL: &str = "app://assetdesk/";
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidPageSize { var: &'static str, value: String },
    #[error("{var} is not a valid URL: {source}")]
    InvalidBaseUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Session settings, resolved from defaults, then `ASSETDESK_*` environment
/// variables, then command line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub start_path: String,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub base_url: Url,
    pub seed_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_path: DEFAULT_START_PATH.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            seed_data: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup("ASSETDESK_START_PATH") {
            config.start_path = path;
        }
        if let Some(size) = lookup("ASSETDESK_PAGE_SIZE") {
            config.page_size = parse_page_size("ASSETDESK_PAGE_SIZE", &size)?;
        }
        if let Some(sizes) = lookup("ASSETDESK_PAGE_SIZES") {
            config.page_size_options = sizes
                .split(',')
                .map(|s| parse_page_size("ASSETDESK_PAGE_SIZES", s))
                .collect::<Result<_, _>>()?;
        }
        if let Some(base) = lookup("ASSETDESK_BASE_URL") {
            config.base_url = Url::parse(&base).map_err(|source| ConfigError::InvalidBaseUrl {
                var: "ASSETDESK_BASE_URL",
                source,
            })?;
        }
        if let Some(flag) = lookup("ASSETDESK_EMPTY") {
            config.seed_data = !matches!(flag.as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }

    /// Applies command line overrides on top of the resolved values.
    pub fn with_overrides(
        mut self,
        start_path: Option<String>,
        page_size: Option<usize>,
        empty: bool,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = start_path {
            self.start_path = path;
        }
        if let Some(size) = page_size {
            if size == 0 {
                return Err(ConfigError::InvalidPageSize {
                    var: "--page-size",
                    value: size.to_string(),
                });
            }
            self.page_size = size;
        }
        if empty {
            self.seed_data = false;
        }
        Ok(self)
    }
}

fn parse_page_size(var: &'static str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidPageSize {
            var,
            value: raw.to_string(),
        }),
    }
}
