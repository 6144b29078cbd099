//! Security utilities for building LambdaTest API paths.
//!
//! Build, session and tunnel ids come from callers and end up inside URL
//! paths. They MUST be encoded before being joined into a path:
//!
//! ```rust
//! use lambdatest_client::security::url;
//!
//! // CORRECT
//! let path = format!("/sessions/{}/video", url::encode_param("abc/../tunnels"));
//! assert_eq!(path, "/sessions/abc%2F..%2Ftunnels/video");
//!
//! // WRONG - NEVER do this with user input
//! // let path = format!("/sessions/{}/video", session_id);
//! ```

/// URL path utilities.
pub mod url {
    /// URL-encode a value for use as a single path segment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lambdatest_client::security::url;
    ///
    /// assert_eq!(url::encode_param("build 7"), "build%207");
    /// ```
    #[must_use]
    pub fn encode_param(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    /// Returns true if `id` can identify a resource.
    ///
    /// Ids are opaque, so only empty, whitespace-only, dot-segment (`.`,
    /// `..`) and control-character values are rejected. Everything else is
    /// encoded by [`encode_param`].
    #[must_use]
    pub fn is_usable_id(id: &str) -> bool {
        !id.trim().is_empty()
            && id != "."
            && id != ".."
            && !id.chars().any(char::is_control)
    }

    /// Build `/{collection}/{id}[/{suffix}]` with the id encoded.
    ///
    /// Returns `None` when the id is not usable.
    ///
    /// ```rust
    /// use lambdatest_client::security::url;
    ///
    /// assert_eq!(
    ///     url::resource_path("sessions", "a b", Some("log/command")),
    ///     Some("/sessions/a%20b/log/command".to_string())
    /// );
    /// assert_eq!(url::resource_path("builds", "  ", None), None);
    /// ```
    #[must_use]
    pub fn resource_path(collection: &str, id: &str, suffix: Option<&str>) -> Option<String> {
        if !is_usable_id(id) {
            return None;
        }
        let collection = collection.trim_matches('/');
        let encoded = encode_param(id);
        Some(match suffix {
            Some(suffix) => format!("/{}/{}/{}", collection, encoded, suffix.trim_matches('/')),
            None => format!("/{}/{}", collection, encoded),
        })
    }
}
