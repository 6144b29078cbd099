//! Client configuration.

use crate::retry::RetryConfig;
use std::time::Duration;

/// How the API version (and therefore the base URL) is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStrategy {
    /// Use the version pinned in the region profile. No network call.
    Pinned,
    /// Ask the version-discovery endpoint.
    Probed {
        /// Version the caller insists on. Must be listed as supported.
        requested_version: Option<String>,
    },
}

impl VersionStrategy {
    /// Probe for the latest supported version.
    pub fn probed() -> Self {
        VersionStrategy::Probed {
            requested_version: None,
        }
    }

    /// Probe, requiring a specific version.
    pub fn probed_for(version: impl Into<String>) -> Self {
        VersionStrategy::Probed {
            requested_version: Some(version.into()),
        }
    }
}

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Version strategy. `None` picks Pinned when the region profile carries a
    /// pinned version and Probed otherwise.
    pub version_strategy: Option<VersionStrategy>,
    /// Retry budget for version discovery.
    pub discovery_retry: RetryConfig,
    /// Request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    /// Connection timeout. `None` keeps the transport default.
    pub connect_timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: String,
    /// Whether to emit per-request tracing events.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version_strategy: None,
            discovery_retry: RetryConfig::default(),
            timeout: None,
            connect_timeout: None,
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Always use the pinned version from the region profile.
    pub fn pinned_version(mut self) -> Self {
        self.config.version_strategy = Some(VersionStrategy::Pinned);
        self
    }

    /// Discover the latest version from the service.
    pub fn probe_version(mut self) -> Self {
        self.config.version_strategy = Some(VersionStrategy::probed());
        self
    }

    /// Discover versions from the service and require `version` to be supported.
    pub fn request_version(mut self, version: impl Into<String>) -> Self {
        self.config.version_strategy = Some(VersionStrategy::probed_for(version));
        self
    }

    /// Set the version strategy explicitly.
    pub fn with_version_strategy(mut self, strategy: VersionStrategy) -> Self {
        self.config.version_strategy = Some(strategy);
        self
    }

    /// Set the discovery retry configuration.
    pub fn with_discovery_retry(mut self, retry: RetryConfig) -> Self {
        self.config.discovery_retry = retry;
        self
    }

    /// Set the number of discovery attempts.
    pub fn with_discovery_attempts(mut self, attempts: u32) -> Self {
        self.config.discovery_retry.max_attempts = attempts;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
