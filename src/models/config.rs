//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings shared by every fetch
    #[serde(default)]
    pub http: HttpConfig,

    /// Catalog site endpoints and identity
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        self.catalog.validate()
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Catalog site settings.
///
/// Path templates are appended to `base_url`; `{code}` and `{reference}`
/// are replaced with the form-url-encoded identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Site root, e.g. `https://www.lddb.com`
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Short site name; generic title matches containing it are page chrome
    #[serde(default = "defaults::site_name")]
    pub site_name: String,

    /// Search endpoint for product codes
    #[serde(default = "defaults::code_search_path")]
    pub code_search_path: String,

    /// Search endpoint for catalog references
    #[serde(default = "defaults::reference_search_path")]
    pub reference_search_path: String,

    /// Item detail page
    #[serde(default = "defaults::detail_path")]
    pub detail_path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            site_name: defaults::site_name(),
            code_search_path: defaults::code_search_path(),
            reference_search_path: defaults::reference_search_path(),
            detail_path: defaults::detail_path(),
        }
    }
}

impl CatalogConfig {
    /// Validate the site URL and path templates.
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::validation(format!(
                "catalog.base_url must be http or https, got '{}'",
                base.scheme()
            )));
        }
        if self.site_name.trim().is_empty() {
            return Err(AppError::validation("catalog.site_name is empty"));
        }
        for (name, template, placeholder) in [
            ("code_search_path", &self.code_search_path, "{code}"),
            (
                "reference_search_path",
                &self.reference_search_path,
                "{reference}",
            ),
            ("detail_path", &self.detail_path, "{reference}"),
        ] {
            if !template.contains(placeholder) {
                return Err(AppError::validation(format!(
                    "catalog.{name} must contain {placeholder}"
                )));
            }
        }
        Ok(())
    }

    /// Search URL for a normalized product code.
    pub fn code_search_url(&self, code: &str) -> String {
        self.build(&self.code_search_path, "{code}", code)
    }

    /// Search URL for a catalog reference.
    pub fn reference_search_url(&self, reference: &str) -> String {
        self.build(&self.reference_search_path, "{reference}", reference)
    }

    /// Detail page URL for a catalog reference.
    pub fn detail_url(&self, reference: &str) -> String {
        self.build(&self.detail_path, "{reference}", reference)
    }

    /// Scheme, host and port of the site, without a trailing slash.
    pub fn origin(&self) -> Option<String> {
        let url = Url::parse(&self.base_url).ok()?;
        let origin = url.origin();
        origin.is_tuple().then(|| origin.ascii_serialization())
    }

    fn build(&self, template: &str, placeholder: &str, value: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            template.replace(placeholder, &encoded)
        )
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
            .into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Catalog defaults
    pub fn base_url() -> String {
        "https://www.lddb.com".into()
    }
    pub fn site_name() -> String {
        "lddb".into()
    }
    pub fn code_search_path() -> String {
        "/search.php?UPC={code}".into()
    }
    pub fn reference_search_path() -> String {
        "/search.php?ref={reference}".into()
    }
    pub fn detail_path() -> String {
        "/laserdisc/{reference}".into()
    }
}
