//! # lambdatest-client
//!
//! Core HTTP dispatch for the LambdaTest automation API.
//!
//! This crate provides:
//! - Base URL resolution, either pinned per region or probed from the
//!   API's version-discovery endpoint with a bounded retry budget
//! - Single-flight resolution shared by every clone of a client
//! - Authenticated JSON requests with uniform success/error classification
//! - Awaitable and completion-callback calling conventions
//! - An opt-in JSON request log (`LT_API_LOG=true`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (lambdatest-automation)                                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       ApiClient                             │
//! │  - Holds auth header + region profile                       │
//! │  - Resolves the base URL once (VersionResolver)             │
//! │  - dispatch / dispatch_with_callback                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     LtHttpClient                            │
//! │  - One authenticated call per request                       │
//! │  - Standard headers, whole-body reads                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use lambdatest_auth::ClientCredentials;
//! use lambdatest_client::{ApiClient, RequestSpec};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambdatest_client::Error> {
//!     let creds = ClientCredentials::from_env()?;
//!     let client = ApiClient::new(&creds)?;
//!
//!     let builds = client
//!         .dispatch(RequestSpec::url("/builds").query("limit", 10))
//!         .await?;
//!     println!("{builds}");
//!
//!     Ok(())
//! }
//! ```

mod api_client;
mod callback;
mod client;
mod config;
mod error;
pub mod logging;
mod request;
mod response;
mod retry;
pub mod security;
mod version;

pub use api_client::{ApiClient, ResolutionState};
pub use callback::spawn_with_callback;
pub use client::{LtHttpClient, OutboundRequest, CLIENT_HEADER, VERSION_HEADER};
pub use config::{ClientConfig, ClientConfigBuilder, VersionStrategy};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBody, RequestMethod, RequestSpec, RequestTarget};
pub use response::{ApiResult, RawResponse};
pub use retry::{BackoffStrategy, RetryConfig, DEFAULT_DISCOVERY_ATTEMPTS};
pub use version::{VersionInfo, VersionProbe, VersionResolver, VersionSelection};

pub use lambdatest_auth::{ClientCredentials, Region, RegionProfile};

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("lambdatest-api/", env!("CARGO_PKG_VERSION"));

/// Value of the `client` header sent with every request
pub const CLIENT_NAME: &str = "rust-rest-client";

/// Value of the `version` header sent with every request
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");
