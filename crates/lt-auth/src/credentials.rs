//! Static LambdaTest credentials.
//!
//! The access key is redacted in Debug output.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

use crate::error::{Error, ErrorKind, Result};
use crate::region::{Region, RegionProfile};

/// Username, access key and deployment selection for one LambdaTest account.
///
/// Construction does not validate; call [`ClientCredentials::validate`] (the
/// API client does so when it is built).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    username: String,
    access_key: String,
    region: Region,
    is_app: bool,
    log_file: Option<PathBuf>,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("username", &self.username)
            .field("access_key", &"[REDACTED]")
            .field("region", &self.region)
            .field("is_app", &self.is_app)
            .field("log_file", &self.log_file)
            .finish()
    }
}

impl ClientCredentials {
    /// Create credentials for the default region (`us`).
    pub fn new(username: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            access_key: access_key.into(),
            region: Region::default(),
            is_app: false,
            log_file: None,
        }
    }

    /// Select the region.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Select the region from its configuration identifier (`"us"` or `"eu"`).
    pub fn with_region_str(self, region: &str) -> Result<Self> {
        Ok(self.with_region(region.parse()?))
    }

    /// Target the app (mobile) automation API instead of the standard one.
    pub fn for_app(mut self, is_app: bool) -> Self {
        self.is_app = is_app;
        self
    }

    /// Path of the log file used when request logging is enabled.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Load credentials from environment variables.
    ///
    /// Required environment variables:
    /// - `LT_USERNAME`
    /// - `LT_ACCESS_KEY`
    ///
    /// Optional:
    /// - `LT_REGION` (`us` or `eu`, default: `us`)
    /// - `LT_IS_APP` (`true` selects the app API)
    /// - `LT_LOG_FILE`
    pub fn from_env() -> Result<Self> {
        let username = std::env::var("LT_USERNAME")
            .map_err(|e| Error::with_source(ErrorKind::EnvVar("LT_USERNAME".to_string()), e))?;

        let access_key = std::env::var("LT_ACCESS_KEY")
            .map_err(|e| Error::with_source(ErrorKind::EnvVar("LT_ACCESS_KEY".to_string()), e))?;

        let region = Region::parse_or_default(std::env::var("LT_REGION").ok().as_deref())?;

        let is_app = std::env::var("LT_IS_APP")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let mut creds = Self::new(username, access_key)
            .with_region(region)
            .for_app(is_app);
        if let Ok(path) = std::env::var("LT_LOG_FILE") {
            creds = creds.with_log_file(path);
        }

        creds.validate()?;
        debug!(
            username = creds.username(),
            region = %creds.region(),
            is_app,
            "Loaded credentials from environment"
        );
        Ok(creds)
    }

    /// Check that username and access key are present.
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() {
            return Err(Error::new(ErrorKind::MissingUsername));
        }
        if self.access_key.is_empty() {
            return Err(Error::new(ErrorKind::MissingAccessKey));
        }
        Ok(())
    }

    /// The account username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The account access key.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// The selected region.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Whether the app API is targeted.
    pub fn is_app(&self) -> bool {
        self.is_app
    }

    /// The configured log file, if any.
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// `Authorization` header value: `Basic base64(username:accessKey)`.
    pub fn auth_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.access_key));
        format!("Basic {}", token)
    }

    /// The built-in endpoint profile for the selected region.
    pub fn profile(&self) -> RegionProfile {
        self.region.profile()
    }
}
