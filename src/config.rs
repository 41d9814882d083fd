use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use birthday_calendar::StaffSource;
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given. Missing is fine.
pub const DEFAULT_CONFIG: &str = "birthday.toml";

/// Set to `true` to read the fixture instead of calling the API.
pub const ENV_USE_MOCK: &str = "BIRTHDAY_USE_MOCK";
/// Base URL of the staff API.
pub const ENV_API_BASE_URL: &str = "BIRTHDAY_API_BASE_URL";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Read staff from `fixture` rather than the API.
    #[serde(default)]
    pub use_mock: bool,

    /// Staff API base URL; `/v1/staff` is appended.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Static staff fixture.
    #[serde(default = "default_fixture")]
    pub fixture: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            use_mock: false,
            api_base_url: None,
            fixture: default_fixture(),
        }
    }
}

fn default_fixture() -> PathBuf {
    PathBuf::from("mock/staff/test.json")
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("no staff API base URL: set api_base_url, BIRTHDAY_API_BASE_URL or --api-base-url, or use the fixture")]
    MissingBaseUrl,
}

impl AppConfig {
    /// Reads the config file. An explicit path must exist; the default one may not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG).exists() => Path::new(DEFAULT_CONFIG),
            None => {
                debug!("no config file, using defaults");
                return Ok(Self::default());
            },
        };

        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_toml(&toml_str).with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Applies environment overrides, looked up through `var`.
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(use_mock) = var(ENV_USE_MOCK) {
            self.use_mock = use_mock == "true";
        }
        if let Some(base_url) = var(ENV_API_BASE_URL) {
            self.api_base_url = Some(base_url);
        }
    }

    /// Applies command-line overrides. Either one also picks the source.
    pub fn apply_cli(&mut self, fixture: Option<PathBuf>, api_base_url: Option<String>) {
        if let Some(fixture) = fixture {
            self.fixture = fixture;
            self.use_mock = true;
        }
        if let Some(base_url) = api_base_url {
            self.api_base_url = Some(base_url);
            self.use_mock = false;
        }
    }

    /// The staff source this configuration selects.
    pub fn source(&self) -> Result<StaffSource, ConfigError> {
        if self.use_mock {
            return Ok(StaffSource::Fixture(self.fixture.clone()));
        }
        self.api_base_url
            .clone()
            .map(|base_url| StaffSource::Remote { base_url })
            .ok_or(ConfigError::MissingBaseUrl)
    }
}
