//! Deployment regions and their endpoint profiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};

/// Default path, relative to a base URL template, of the version-discovery endpoint.
pub const DEFAULT_DISCOVERY_PATH: &str = "versions";

/// A LambdaTest deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// United States (default).
    #[default]
    Us,
    /// European Union.
    Eu,
}

impl Region {
    /// The lowercase identifier used in configuration (`"us"` / `"eu"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
        }
    }

    /// Parse an optional region, defaulting to [`Region::Us`] when absent.
    pub fn parse_or_default(value: Option<&str>) -> Result<Self> {
        match value {
            None => Ok(Region::default()),
            Some(v) => v.parse(),
        }
    }

    /// The built-in endpoint profile for this region.
    pub fn profile(&self) -> RegionProfile {
        RegionProfile::for_region(*self)
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "us" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            other => Err(Error::new(ErrorKind::InvalidRegion(other.to_string()))),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Endpoint configuration for one region.
///
/// The base URL templates end with `/`; a resolved base URL is
/// `template + version` (e.g. `https://api.lambdatest.com/automation/api/v1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionProfile {
    /// Template for the standard automation API.
    pub base_url: String,
    /// Template for the app (mobile) automation API.
    pub base_url_app: String,
    /// Pinned version for the standard API. `None` means the version must be probed.
    pub version: Option<String>,
    /// Pinned version for the app API.
    pub app_version: Option<String>,
    /// Path of the version-discovery endpoint, appended to the selected template.
    pub discovery_path: String,
}

impl RegionProfile {
    /// The built-in profile for a region.
    pub fn for_region(region: Region) -> Self {
        match region {
            Region::Us => Self {
                base_url: "https://api.lambdatest.com/automation/api/".to_string(),
                base_url_app: "https://mobile-api.lambdatest.com/mobile-automation/api/"
                    .to_string(),
                version: Some("v1".to_string()),
                app_version: Some("v1".to_string()),
                discovery_path: DEFAULT_DISCOVERY_PATH.to_string(),
            },
            Region::Eu => Self {
                base_url: "https://eu-api.lambdatest.com/automation/api/".to_string(),
                base_url_app: "https://eu-mobile-api.lambdatest.com/mobile-automation/api/"
                    .to_string(),
                version: Some("v1".to_string()),
                app_version: Some("v1".to_string()),
                discovery_path: DEFAULT_DISCOVERY_PATH.to_string(),
            },
        }
    }

    /// A profile pointing both templates at the same host, with no pinned version.
    ///
    /// Useful for self-hosted gateways and for tests against a mock server.
    pub fn custom(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_template(base_url.into())?;
        Ok(Self {
            base_url_app: base_url.clone(),
            base_url,
            version: None,
            app_version: None,
            discovery_path: DEFAULT_DISCOVERY_PATH.to_string(),
        })
    }

    /// Set the app template.
    pub fn with_app_base_url(mut self, base_url_app: impl Into<String>) -> Result<Self> {
        self.base_url_app = normalize_template(base_url_app.into())?;
        Ok(self)
    }

    /// Pin the standard API version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Pin the app API version.
    pub fn with_app_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = Some(version.into());
        self
    }

    /// Set the discovery endpoint path.
    pub fn with_discovery_path(mut self, path: impl Into<String>) -> Self {
        self.discovery_path = path.into().trim_start_matches('/').to_string();
        self
    }

    /// The URL template for the standard or app API.
    pub fn template(&self, is_app: bool) -> &str {
        if is_app {
            &self.base_url_app
        } else {
            &self.base_url
        }
    }

    /// The pinned version for the standard or app API, if any.
    pub fn pinned_version(&self, is_app: bool) -> Option<&str> {
        if is_app {
            self.app_version.as_deref()
        } else {
            self.version.as_deref()
        }
    }

    /// The version-discovery URL for the standard or app API.
    pub fn discovery_url(&self, is_app: bool) -> String {
        format!("{}{}", self.template(is_app), self.discovery_path)
    }
}

/// Validate a template and make sure it ends with `/`.
fn normalize_template(template: String) -> Result<String> {
    url::Url::parse(&template)?;
    if template.ends_with('/') {
        Ok(template)
    } else {
        Ok(format!("{}/", template))
    }
}
