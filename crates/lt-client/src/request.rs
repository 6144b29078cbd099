//! Request specifications for the dispatcher.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::security;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMethod {
    #[default]
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Where a request goes, relative to the resolved base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTarget {
    /// A path such as `/builds` or `/sessions/abc/log/command`.
    Url(String),
    /// A resource collection and identifier, sent as `/{path}/{id}`.
    Resource { path: String, id: String },
}

/// Request body content.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// A JSON value, serialized when the request is sent.
    Json(Value),
    /// JSON text the caller already serialized; sent as-is.
    Raw(String),
}

impl RequestBody {
    /// The body as it goes on the wire.
    pub fn to_json_string(&self) -> Result<String> {
        match self {
            RequestBody::Json(value) => Ok(serde_json::to_string(value)?),
            RequestBody::Raw(text) => Ok(text.clone()),
        }
    }
}

/// A request for [`ApiClient::dispatch`](crate::ApiClient::dispatch).
///
/// # Example
///
/// ```rust
/// use lambdatest_client::{RequestMethod, RequestSpec};
///
/// let spec = RequestSpec::resource("builds", "1234")
///     .method(RequestMethod::Patch)
///     .json_value(serde_json::json!({"name": "nightly"}));
/// assert_eq!(spec.path().unwrap(), "/builds/1234");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub(crate) target: RequestTarget,
    pub(crate) method: RequestMethod,
    pub(crate) body: Option<RequestBody>,
    pub(crate) query: Vec<(String, String)>,
}

impl RequestSpec {
    /// Request a path relative to the base URL.
    pub fn url(url: impl Into<String>) -> Self {
        Self::with_target(RequestTarget::Url(url.into()))
    }

    /// Request `/{path}/{id}` relative to the base URL.
    pub fn resource(path: impl Into<String>, id: impl Into<String>) -> Self {
        Self::with_target(RequestTarget::Resource {
            path: path.into(),
            id: id.into(),
        })
    }

    fn with_target(target: RequestTarget) -> Self {
        Self {
            target,
            method: RequestMethod::default(),
            body: None,
            query: Vec::new(),
        }
    }

    /// Set the HTTP method (default GET).
    pub fn method(mut self, method: RequestMethod) -> Self {
        self.method = method;
        self
    }

    /// Set a JSON body from any serializable value.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    /// Set a JSON body.
    pub fn json_value(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Set a body that is already serialized JSON text.
    pub fn raw_json(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Raw(body.into()));
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Add query parameters from a value that serializes to a flat object of scalars.
    ///
    /// `null` (or `()`/`None`) adds nothing. Null fields are skipped. Nested
    /// arrays or objects are rejected.
    pub fn query_params<Q: Serialize + ?Sized>(mut self, params: &Q) -> Result<Self> {
        let value = serde_json::to_value(params)?;
        let map = match value {
            Value::Null => return Ok(self),
            Value::Object(map) => map,
            _ => {
                return Err(Error::invalid_request(
                    "query parameters must be a string-keyed mapping",
                ))
            }
        };

        for (name, value) in map {
            let rendered = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(Error::invalid_request(format!(
                        "query parameter '{}' must be a scalar",
                        name
                    )))
                }
            };
            self.query.push((name, rendered));
        }
        Ok(self)
    }

    /// The request target.
    pub fn target(&self) -> &RequestTarget {
        &self.target
    }

    /// The HTTP method.
    pub fn http_method(&self) -> RequestMethod {
        self.method
    }

    /// The body, if any.
    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// Query parameters in insertion order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// The path to append to the base URL.
    ///
    /// Fails with `InvalidRequest` when neither a URL nor both path and id are present.
    pub fn path(&self) -> Result<String> {
        match &self.target {
            RequestTarget::Url(url) if !url.is_empty() => Ok(url.clone()),
            RequestTarget::Resource { path, id } if !path.trim_matches('/').is_empty() => {
                security::url::resource_path(path, id, None).ok_or_else(|| {
                    Error::invalid_request("missing required parameters: url or path & id")
                })
            }
            _ => Err(Error::invalid_request(
                "missing required parameters: url or path & id",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_url_target() {
        let spec = RequestSpec::url("/builds");
        assert_eq!(spec.http_method(), RequestMethod::Get);
        assert_eq!(spec.path().unwrap(), "/builds");
        assert!(spec.body().is_none());
    }

    #[test]
    fn test_resource_target() {
        let spec = RequestSpec::resource("sessions", "abc123");
        assert_eq!(spec.path().unwrap(), "/sessions/abc123");

        let spec = RequestSpec::resource("/sessions/", "abc123");
        assert_eq!(spec.path().unwrap(), "/sessions/abc123");
    }

    #[test]
    fn test_missing_target_is_invalid() {
        for spec in [
            RequestSpec::url(""),
            RequestSpec::resource("builds", ""),
            RequestSpec::resource("", "42"),
        ] {
            let err = spec.path().unwrap_err();
            assert!(matches!(err.kind, ErrorKind::InvalidRequest(_)), "{spec:?}");
        }
    }

    #[test]
    fn test_resource_id_stays_in_one_segment() {
        let cases = [
            ("../tunnels/7", "/builds/..%2Ftunnels%2F7"),
            ("a?b", "/builds/a%3Fb"),
            ("a#b", "/builds/a%23b"),
            ("with space", "/builds/with%20space"),
        ];
        for (id, expected) in cases {
            assert_eq!(RequestSpec::resource("builds", id).path().unwrap(), expected);
        }

        for id in ["..", ".", " "] {
            let err = RequestSpec::resource("builds", id).path().unwrap_err();
            assert!(matches!(err.kind, ErrorKind::InvalidRequest(_)), "{id:?}");
        }
    }

    #[test]
    fn test_json_body() {
        #[derive(Serialize)]
        struct Update<'a> {
            name: &'a str,
        }

        let spec = RequestSpec::resource("builds", "1")
            .method(RequestMethod::Patch)
            .json(&Update { name: "nightly" })
            .unwrap();

        assert_eq!(spec.http_method(), RequestMethod::Patch);
        assert_eq!(
            spec.body(),
            Some(&RequestBody::Json(json!({"name": "nightly"})))
        );
        assert_eq!(
            spec.body().unwrap().to_json_string().unwrap(),
            r#"{"name":"nightly"}"#
        );
    }

    #[test]
    fn test_raw_body_is_not_reserialized() {
        let spec = RequestSpec::url("/builds/1").raw_json(r#"{"status":"done"}"#);
        assert_eq!(
            spec.body().unwrap().to_json_string().unwrap(),
            r#"{"status":"done"}"#
        );
    }

    #[test]
    fn test_query_params_from_object() {
        let spec = RequestSpec::url("/builds")
            .query_params(&json!({"limit": 10, "offset": 0, "status": "running", "skip": null, "sort": true}))
            .unwrap();

        let mut pairs = spec.query_pairs().to_vec();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("limit".to_string(), "10".to_string()),
                ("offset".to_string(), "0".to_string()),
                ("sort".to_string(), "true".to_string()),
                ("status".to_string(), "running".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_none() {
        let spec = RequestSpec::url("/builds").query_params(&()).unwrap();
        assert!(spec.query_pairs().is_empty());

        let spec = RequestSpec::url("/builds")
            .query_params(&None::<Value>)
            .unwrap();
        assert!(spec.query_pairs().is_empty());
    }

    #[test]
    fn test_query_params_reject_nested_values() {
        let err = RequestSpec::url("/builds")
            .query_params(&json!({"tags": ["a", "b"]}))
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidRequest(_)));

        let err = RequestSpec::url("/builds")
            .query_params(&json!([1, 2]))
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidRequest(_)));
    }

    #[test]
    fn test_single_query_param() {
        let spec = RequestSpec::url("/sessions").query("limit", 5).query("build_id", "b1");
        assert_eq!(
            spec.query_pairs(),
            &[
                ("limit".to_string(), "5".to_string()),
                ("build_id".to_string(), "b1".to_string())
            ]
        );
    }
}
