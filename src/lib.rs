//! # lambdatest-api
//!
//! A LambdaTest automation API client library for Rust.
//!
//! This library provides access to the LambdaTest automation REST API with
//! region-aware endpoints, API version discovery, and uniform error
//! classification. Every operation can be awaited or driven with a
//! completion callback.
//!
//! ## Security
//!
//! - Access keys and auth headers are redacted in Debug output
//! - Tracing skips credential parameters
//! - Caller-supplied ids are URL-encoded before being placed in paths
//!
//! ## Crates
//!
//! - **lambdatest-auth** - Credentials, regions, per-region endpoint profiles
//! - **lambdatest-client** - Version resolution, request dispatch, request log
//! - **lambdatest-automation** - Builds, sessions, session artifacts, tunnels, platforms
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lambdatest_api::{AutomationClient, ClientCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // LT_USERNAME, LT_ACCESS_KEY, LT_REGION
//!     let creds = ClientCredentials::from_env()?;
//!     let client = AutomationClient::new(&creds)?;
//!
//!     let sessions = client.fetch_sessions(&()).await?;
//!     for session in sessions["data"].as_array().into_iter().flatten() {
//!         println!("{}", session["session_id"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use lambdatest_auth as auth;
#[cfg(feature = "automation")]
pub use lambdatest_automation as automation;
#[cfg(feature = "client")]
pub use lambdatest_client as client;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use lambdatest_auth::{ClientCredentials, Region, RegionProfile};
#[cfg(feature = "automation")]
pub use lambdatest_automation::AutomationClient;
#[cfg(feature = "client")]
pub use lambdatest_client::{
    ApiClient, ClientConfig, Error, ErrorKind, RequestMethod, RequestSpec, Result,
};
