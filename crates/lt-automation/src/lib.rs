//! # lambdatest-automation
//!
//! LambdaTest automation API client.
//!
//! ## Features
//!
//! - **Builds** - List, fetch, rename and delete builds
//! - **Sessions** - List, fetch, update and delete test sessions
//! - **Session artifacts** - Screenshots, video, and command, Selenium,
//!   network and console logs
//! - **Tunnels** - List and stop tunnels
//! - **Platforms** - Available browser/OS combinations
//!
//! Every operation returns the response body as `serde_json::Value`, or an
//! [`Error`] classifying what went wrong. Operations taking an id fail with
//! `InvalidRequest` before any network call when the id is empty.
//!
//! ## Example
//!
//! ```rust,ignore
//! use lambdatest_automation::{AutomationClient, BuildQuery, ClientCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambdatest_automation::Error> {
//!     let client = AutomationClient::new(
//!         &ClientCredentials::new("username", "access_key"),
//!     )?;
//!
//!     let builds = client.fetch_builds(&BuildQuery::new().limit(10)).await?;
//!     println!("{builds}");
//!
//!     // Callback style
//!     client.with_callback(
//!         |c| async move { c.fetch_session_video("SESSION_ID").await },
//!         |result| println!("{result:?}"),
//!     );
//!
//!     Ok(())
//! }
//! ```

mod client;
mod types;

// Main client
pub use client::AutomationClient;

// Query and update types
pub use types::{BuildQuery, BuildUpdate, SessionLog, SessionQuery, SessionUpdate};

// Re-export lambdatest-client types that users might need
pub use lambdatest_client::{
    ApiClient, ApiResult, ClientConfig, ClientConfigBuilder, Error, ErrorKind, RequestMethod,
    RequestSpec, Result,
};
pub use lambdatest_auth::{ClientCredentials, Region};
