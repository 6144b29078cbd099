//! API version resolution.
//!
//! Produces the concrete base URL (`template + version`) either from the
//! region profile (pinned) or from the version-discovery endpoint (probed).

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use lambdatest_auth::RegionProfile;

use crate::client::{LtHttpClient, OutboundRequest};
use crate::config::{ClientConfig, VersionStrategy};
use crate::error::{Error, ErrorKind, Result};
use crate::retry::RetryConfig;

/// Body of the version-discovery endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Versions the service accepts, in service order.
    #[serde(rename = "supportedVersions", default)]
    pub supported_versions: Vec<String>,
    /// The newest version.
    #[serde(rename = "latestVersion", default)]
    pub latest_version: Option<String>,
}

/// What one discovery answer means for the resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSelection {
    /// Use this version.
    Selected(String),
    /// The requested version is not supported. Retrying cannot fix this.
    Unsupported(String),
    /// The answer is unusable; ask again.
    Retry(String),
}

impl VersionInfo {
    /// Pick a version, honouring an explicitly requested one.
    pub fn select(&self, requested: Option<&str>) -> VersionSelection {
        if self.supported_versions.is_empty() {
            return VersionSelection::Retry("supportedVersions is absent or empty".to_string());
        }

        match requested {
            Some(version) if self.supported_versions.iter().any(|v| v == version) => {
                VersionSelection::Selected(version.to_string())
            }
            Some(version) => VersionSelection::Unsupported(version.to_string()),
            None => match &self.latest_version {
                Some(latest) if !latest.is_empty() => VersionSelection::Selected(latest.clone()),
                _ => VersionSelection::Retry("latestVersion is absent".to_string()),
            },
        }
    }
}

/// Remaining budget of a probed resolution. Not kept after bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionProbe {
    /// Attempts left after the current one; resolution fails once this drops below zero.
    pub attempts_remaining: i32,
    /// Version the caller insists on.
    pub requested_version: Option<String>,
}

impl VersionProbe {
    /// A probe allowing `max_attempts` discovery calls in total (at least one).
    pub fn new(max_attempts: u32, requested_version: Option<String>) -> Self {
        let budget = i32::try_from(max_attempts.max(1)).unwrap_or(i32::MAX);
        Self {
            attempts_remaining: budget - 1,
            requested_version,
        }
    }

    /// Record a failed attempt. Returns false once the budget is exhausted.
    pub fn record_failure(&mut self) -> bool {
        self.attempts_remaining -= 1;
        self.attempts_remaining >= 0
    }
}

/// Resolves the base URL for one client.
#[derive(Debug, Clone)]
pub struct VersionResolver {
    strategy: VersionStrategy,
    template: String,
    pinned_version: Option<String>,
    discovery_url: url::Url,
    retry: RetryConfig,
}

impl VersionResolver {
    /// Build a resolver for the standard or app template of `profile`.
    ///
    /// Without an explicit strategy, a profile carrying a pinned version is
    /// resolved without network calls; otherwise the version is probed.
    pub fn new(profile: &RegionProfile, is_app: bool, config: &ClientConfig) -> Result<Self> {
        let pinned_version = profile.pinned_version(is_app).map(str::to_string);

        let strategy = match (&config.version_strategy, &pinned_version) {
            (Some(VersionStrategy::Pinned), None) => {
                return Err(Error::new(ErrorKind::Config(
                    "pinned version strategy requires a version in the region profile".to_string(),
                )))
            }
            (Some(strategy), _) => strategy.clone(),
            (None, Some(_)) => VersionStrategy::Pinned,
            (None, None) => VersionStrategy::probed(),
        };

        let discovery_url = url::Url::parse(&profile.discovery_url(is_app)).map_err(|e| {
            Error::with_source(ErrorKind::Config(format!("Invalid discovery URL: {}", e)), e)
        })?;

        Ok(Self {
            strategy,
            template: profile.template(is_app).to_string(),
            pinned_version,
            discovery_url,
            retry: config.discovery_retry.clone(),
        })
    }

    /// The strategy in effect.
    pub fn strategy(&self) -> &VersionStrategy {
        &self.strategy
    }

    /// The base URL template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The version-discovery URL.
    pub fn discovery_url(&self) -> &url::Url {
        &self.discovery_url
    }

    /// Resolve the base URL.
    #[instrument(skip(self, http, authorization), fields(template = %self.template))]
    pub async fn resolve(&self, http: &LtHttpClient, authorization: &str) -> Result<String> {
        let version = match &self.strategy {
            VersionStrategy::Pinned => match &self.pinned_version {
                Some(version) => version.clone(),
                None => {
                    return Err(Error::new(ErrorKind::VersionResolution {
                        reason: "no pinned version configured".to_string(),
                        attempts: 0,
                    }))
                }
            },
            VersionStrategy::Probed { requested_version } => {
                let probe = VersionProbe::new(self.retry.max_attempts, requested_version.clone());
                self.probe(http, authorization, probe).await?
            }
        };

        let base_url = format!("{}{}", self.template, version);
        info!(%base_url, %version, "Resolved API base URL");
        Ok(base_url)
    }

    /// Query the discovery endpoint until a version is chosen or the budget runs out.
    async fn probe(
        &self,
        http: &LtHttpClient,
        authorization: &str,
        mut probe: VersionProbe,
    ) -> Result<String> {
        let request = OutboundRequest::get(self.discovery_url.clone(), authorization);
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;

            let outcome = match http.send(&request).await {
                Ok(response) => response.into_json::<VersionInfo>(),
                Err(err) => Err(err),
            };

            let failure = match outcome {
                Ok(info) => match info.select(probe.requested_version.as_deref()) {
                    VersionSelection::Selected(version) => {
                        debug!(attempts, %version, "Version discovery succeeded");
                        return Ok(version);
                    }
                    VersionSelection::Unsupported(version) => {
                        warn!(%version, supported = ?info.supported_versions, "Requested API version is not supported");
                        return Err(Error::new(ErrorKind::VersionResolution {
                            reason: format!("requested version '{}' is not supported", version),
                            attempts,
                        }));
                    }
                    VersionSelection::Retry(reason) => reason,
                },
                Err(err) if err.is_retryable() => err.to_string(),
                Err(err) => return Err(err),
            };

            if !probe.record_failure() {
                warn!(attempts, error = %failure, "Version discovery exhausted its retry budget");
                return Err(Error::new(ErrorKind::VersionResolution {
                    reason: format!("discovery failed: {}", failure),
                    attempts,
                }));
            }

            let delay = self.retry.delay_for(attempts - 1);
            warn!(
                attempt = attempts,
                remaining = probe.attempts_remaining,
                delay_ms = delay.as_millis() as u64,
                error = %failure,
                "Version discovery failed, retrying"
            );
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
    }
}
