//! # lambdatest-auth
//!
//! LambdaTest credentials and region selection.
//!
//! ## Security
//!
//! - The access key is redacted in Debug output
//! - Error messages never carry credential values
//!
//! ## What lives here
//!
//! - [`ClientCredentials`] - username/access key, region, app flag, log file
//! - [`Region`] - `us` / `eu` deployment selector
//! - [`RegionProfile`] - base URL templates and pinned versions per region
//!
//! ## Example
//!
//! ```rust
//! use lambdatest_auth::{ClientCredentials, Region};
//!
//! let creds = ClientCredentials::new("user", "key").with_region(Region::Eu);
//! creds.validate().unwrap();
//! assert_eq!(creds.auth_header(), "Basic dXNlcjprZXk=");
//! ```

mod credentials;
mod error;
mod region;

pub use credentials::ClientCredentials;
pub use error::{Error, ErrorKind, Result};
pub use region::{Region, RegionProfile, DEFAULT_DISCOVERY_PATH};
