//! Query and update types for automation resources.
//!
//! Every list and update operation accepts any `Serialize` value; these
//! types cover the common parameters.

use serde::{Deserialize, Serialize};

/// Filters for listing builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Comma-separated build statuses, e.g. `running,completed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fromdate: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todate: Option<String>,
    /// e.g. `asc.build_id` or `desc.start_time`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl BuildQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Filters for listing sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fromdate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl SessionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build_id(mut self, build_id: u64) -> Self {
        self.build_id = Some(build_id);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Changes to apply to a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl BuildUpdate {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Changes to apply to a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `passed` or `failed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_ind: Option<String>,
}

impl SessionUpdate {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status_ind = Some(status.into());
        self
    }
}

/// Per-session log streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionLog {
    Command,
    Selenium,
    Network,
    Console,
}

impl SessionLog {
    /// Path below `/sessions/{id}`.
    pub fn path(&self) -> &'static str {
        match self {
            SessionLog::Command => "log/command",
            SessionLog::Selenium => "log/selenium",
            SessionLog::Network => "log/network",
            SessionLog::Console => "log/console",
        }
    }
}
