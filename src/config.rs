//! Configuration file handling for portfolio-term.
//!
//! Loads configuration from `~/.config/portfolio-term/config.toml` or a custom path.
//! A `PORTFOLIO_URL` environment variable (possibly from `.env`) overrides
//! `server.url`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::{DEFAULT_SERVER_URL, PORTFOLIO_URL_ENV};

/// Configuration file structure for portfolio-term.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ascii: AsciiConfig,
    #[serde(default)]
    pub about: AboutConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_url")]
    pub url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Image viewer conversion settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AsciiConfig {
    #[serde(default = "default_image_width")]
    pub image_width: u32,
    #[serde(default = "default_image_height")]
    pub image_height: u32,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            image_width: default_image_width(),
            image_height: default_image_height(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AsciiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// About panel resources.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AboutConfig {
    #[serde(default = "default_about_image")]
    pub image: String,
    #[serde(default = "default_about_image_width")]
    pub image_width: u32,
    #[serde(default = "default_about_image_height")]
    pub image_height: u32,
    #[serde(default = "default_about_text")]
    pub text: String,
    #[serde(default = "default_contacts_text")]
    pub contacts: String,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            image: default_about_image(),
            image_width: default_about_image_width(),
            image_height: default_about_image_height(),
            text: default_about_text(),
            contacts: default_contacts_text(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub status_bar: bool,
    #[serde(default = "default_scrollback")]
    pub scrollback: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_bar: true,
            scrollback: default_scrollback(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_image_width() -> u32 {
    140
}

fn default_image_height() -> u32 {
    70
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_about_image() -> String {
    "/data/static/images/face.png".to_string()
}

fn default_about_image_width() -> u32 {
    100
}

fn default_about_image_height() -> u32 {
    50
}

fn default_about_text() -> String {
    "/data/static/text/about.txt".to_string()
}

fn default_contacts_text() -> String {
    "/data/static/text/contacts.txt".to_string()
}

fn default_scrollback() -> usize {
    crate::shell::DEFAULT_SCROLLBACK
}

/// Default config file written by `config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# portfolio-term configuration

[server]
# Portfolio backend (overridden by PORTFOLIO_URL)
url = "http://localhost:8080"
# HTTP request timeout in seconds
request_timeout_secs = 10

[ascii]
# ASCII art size for the image viewer
image_width = 140
image_height = 70
# Give up on an image after this many milliseconds
timeout_ms = 5000

[about]
image = "/data/static/images/face.png"
image_width = 100
image_height = 50
text = "/data/static/text/about.txt"
contacts = "/data/static/text/contacts.txt"

[ui]
# Show status bar
status_bar = true
# Output lines kept in scrollback
scrollback = 2000
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Apply the `PORTFOLIO_URL` override from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_server_override(std::env::var(PORTFOLIO_URL_ENV).ok());
    }

    /// Replace `server.url` with a non-empty override.
    pub fn apply_server_override(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.server.url = url;
        }
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Load variables from a `.env` file in the working directory, if present.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => log::info!("Loaded environment from {}", path.display()),
        Err(e) => log::debug!("No .env file loaded: {}", e),
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("portfolio-term").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/portfolio-term/config.toml")
        })
}
