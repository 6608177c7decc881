//! HTTP client for the Spendwell server
//!
//! Wraps a blocking reqwest client with base-URL handling, bearer
//! authentication from the session context, and uniform error mapping.
//! Backend errors carry a structured `{"detail": ...}` body; the detail is
//! surfaced verbatim when present, otherwise a per-action fallback message
//! is used.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Settings;
use crate::error::{SpendwellError, SpendwellResult};

/// Client for the Spendwell REST API
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from settings and an optional session token
    pub fn new(settings: &Settings, token: Option<String>) -> SpendwellResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| SpendwellError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: settings.server_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// The server this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a session token is attached
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: Method, path: &str) -> SpendwellResult<RequestBuilder> {
        let token = self.token.as_deref().ok_or(SpendwellError::NotSignedIn)?;
        let url = format!("{}{}", self.base_url, path);
        Ok(self.http.request(method, url).bearer_auth(token))
    }

    fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> SpendwellResult<T> {
        let response = builder
            .send()
            .map_err(|e| SpendwellError::Http(e.to_string()))?;
        decode_response(response, fallback)
    }

    /// GET with query parameters
    pub fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> SpendwellResult<T> {
        let builder = self.request(Method::GET, path)?.query(query);
        self.send(builder, fallback)
    }

    /// POST a JSON body
    pub fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> SpendwellResult<T> {
        let builder = self.request(Method::POST, path)?.json(body);
        self.send(builder, fallback)
    }

    /// PUT a JSON body
    pub fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> SpendwellResult<T> {
        let builder = self.request(Method::PUT, path)?.json(body);
        self.send(builder, fallback)
    }

    /// DELETE with query parameters
    pub fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> SpendwellResult<T> {
        let builder = self.request(Method::DELETE, path)?.query(query);
        self.send(builder, fallback)
    }
}

fn decode_response<T: DeserializeOwned>(response: Response, fallback: &str) -> SpendwellResult<T> {
    let status = response.status().as_u16();

    if (200..300).contains(&status) {
        return response
            .json()
            .map_err(|e| SpendwellError::Http(format!("Failed to decode server response: {}", e)));
    }

    let body = response.text().unwrap_or_default();
    Err(api_error(status, &body, fallback))
}

/// Map a non-success response to an error
///
/// 401 means the session token is missing or stale; everything else carries
/// the backend's structured detail when one can be extracted.
pub(crate) fn api_error(status: u16, body: &str, fallback: &str) -> SpendwellError {
    if status == 401 {
        return SpendwellError::NotSignedIn;
    }

    let detail = extract_detail(body).unwrap_or_else(|| fallback.to_string());
    SpendwellError::Api { status, detail }
}

/// Pull the `detail` string out of a backend error body
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|d| d.as_str())
        .map(str::to_string)
}

/// Re-map 403 responses on admin endpoints to the fixed privileges message
pub(crate) fn require_admin<T>(result: SpendwellResult<T>) -> SpendwellResult<T> {
    match result {
        Err(SpendwellError::Api { status: 403, .. }) => Err(SpendwellError::AdminRequired),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail() {
        assert_eq!(
            extract_detail(r#"{"detail": "Account not found"}"#),
            Some("Account not found".to_string())
        );
        assert_eq!(extract_detail(r#"{"error": "nope"}"#), None);
        assert_eq!(extract_detail("<html>502</html>"), None);
    }

    #[test]
    fn test_api_error_uses_detail_verbatim() {
        let err = api_error(400, r#"{"detail": "Unsupported backup version: 0.9"}"#, "fallback");
        match err {
            SpendwellError::Api { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail, "Unsupported backup version: 0.9");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_falls_back_on_opaque_body() {
        let err = api_error(500, "internal", "Failed to create backup");
        match err {
            SpendwellError::Api { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail, "Failed to create backup");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_401_maps_to_not_signed_in() {
        let err = api_error(401, r#"{"detail": "Could not validate credentials"}"#, "x");
        assert!(matches!(err, SpendwellError::NotSignedIn));
    }

    #[test]
    fn test_require_admin_maps_403() {
        let res: SpendwellResult<()> = Err(SpendwellError::Api {
            status: 403,
            detail: "System admin privileges required".into(),
        });
        assert!(matches!(
            require_admin(res),
            Err(SpendwellError::AdminRequired)
        ));

        let res: SpendwellResult<()> = Err(SpendwellError::Api {
            status: 404,
            detail: "missing".into(),
        });
        assert!(matches!(
            require_admin(res),
            Err(SpendwellError::Api { status: 404, .. })
        ));
    }

    #[test]
    fn test_unauthenticated_client_refuses_requests() {
        let client = ApiClient::new(&Settings::default(), None).unwrap();
        assert!(!client.is_authenticated());
        let err = client
            .request(Method::GET, "/api/organizations")
            .err()
            .unwrap();
        assert!(matches!(err, SpendwellError::NotSignedIn));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let mut settings = Settings::default();
        settings.server_url = "http://localhost:8000/".into();
        let client = ApiClient::new(&settings, Some("t".into())).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
