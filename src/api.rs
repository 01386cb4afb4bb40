//! REST client for the marketplace backend.
//!
//! One generic JSON request core plus a typed method per endpoint. The
//! client never retries, never times out on its own and never cancels an
//! in-flight call; screens own all error presentation.

use gloo_net::http::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

use crate::model::{
    LoginRequest, NewProductManager, Snack, SnackPayload, UserRegistration, Vendor,
    VendorRegistration,
};

pub const API_BASE_URL: &str = "http://localhost:8080";

/// Failure of a single API call.
///
/// `status` is `None` when no response arrived at all (transport failure)
/// or when a 2xx body did not decode into the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub status: Option<u16>,
    pub message: String,
}

impl RequestError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "[{}] {}", status, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for RequestError {}

/// Builds the error for a non-2xx response: the body's JSON `message`
/// field if present, otherwise the raw body text, otherwise the status
/// line.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
    }
    if !body.trim().is_empty() {
        return body.to_string();
    }
    format!("HTTP error! status: {status}")
}

/// Maps a received response body to the call result. An empty 2xx body
/// resolves to `{}`; a non-JSON 2xx body is wrapped as a message object
/// rather than failing the call.
pub(crate) fn decode_response(status: u16, ok: bool, body: &str) -> Result<Value, RequestError> {
    if !ok {
        return Err(RequestError {
            status: Some(status),
            message: error_message(status, body),
        });
    }

    if body.is_empty() {
        return Ok(Value::Object(Default::default()));
    }

    Ok(serde_json::from_str(body).unwrap_or_else(|_| serde_json::json!({ "message": body })))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Generic request core. Serializes `body` as JSON and attaches
    /// `Authorization: Bearer <token>` when a token is given.
    pub async fn request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<Value, RequestError> {
        let url = self.url(path);
        let mut builder = RequestBuilder::new(&url).method(method);
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        // `.json` sets Content-Type: application/json on the request.
        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| RequestError::transport(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| RequestError::transport(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| RequestError::transport(e.to_string()))?;

        let status = response.status();
        let ok = response.ok();
        let body = response.text().await.map_err(|e| RequestError {
            status: Some(status),
            message: e.to_string(),
        })?;

        decode_response(status, ok, &body)
    }

    async fn fetch<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<T, RequestError> {
        let value = self.request(method, path, body, token).await?;
        serde_json::from_value(value)
            .map_err(|e| RequestError::transport(format!("unexpected response shape: {e}")))
    }

    // --- Authentication ---

    pub async fn login_user(&self, credentials: &LoginRequest) -> Result<Value, RequestError> {
        self.request(Method::POST, "/auth/user/login", Some(credentials), None)
            .await
    }

    pub async fn login_vendor(&self, credentials: &LoginRequest) -> Result<Value, RequestError> {
        self.request(Method::POST, "/auth/vendor/login", Some(credentials), None)
            .await
    }

    pub async fn login_staff(&self, credentials: &LoginRequest) -> Result<Value, RequestError> {
        self.request(Method::POST, "/auth/staff/login", Some(credentials), None)
            .await
    }

    pub async fn register_user(&self, payload: &UserRegistration) -> Result<Value, RequestError> {
        self.request(Method::POST, "/auth/user/register", Some(payload), None)
            .await
    }

    pub async fn register_vendor(
        &self,
        payload: &VendorRegistration,
    ) -> Result<Value, RequestError> {
        self.request(Method::POST, "/auth/vendor/register", Some(payload), None)
            .await
    }

    pub async fn create_product_manager(
        &self,
        payload: &NewProductManager,
        token: &str,
    ) -> Result<Value, RequestError> {
        self.request(
            Method::POST,
            "/admin/create-product-manager",
            Some(payload),
            Some(token),
        )
        .await
    }

    // --- Snacks ---

    pub async fn approved_snacks(&self, token: &str) -> Result<Vec<Snack>, RequestError> {
        self.fetch(Method::GET, "/snacks/approved", None::<&()>, Some(token))
            .await
    }

    pub async fn vendor_snacks(
        &self,
        vendor_id: &str,
        token: &str,
    ) -> Result<Vec<Snack>, RequestError> {
        self.fetch(
            Method::GET,
            &format!("/snacks/vendor/{vendor_id}"),
            None::<&()>,
            Some(token),
        )
        .await
    }

    pub async fn create_snack(
        &self,
        payload: &SnackPayload,
        token: &str,
    ) -> Result<Value, RequestError> {
        self.request(Method::POST, "/snacks", Some(payload), Some(token))
            .await
    }

    pub async fn update_snack(
        &self,
        id: &str,
        payload: &SnackPayload,
        token: &str,
    ) -> Result<Snack, RequestError> {
        self.fetch(
            Method::PUT,
            &format!("/snacks/{id}"),
            Some(payload),
            Some(token),
        )
        .await
    }

    pub async fn delete_snack(&self, id: &str, token: &str) -> Result<(), RequestError> {
        self.request(
            Method::DELETE,
            &format!("/snacks/{id}"),
            None::<&()>,
            Some(token),
        )
        .await?;
        Ok(())
    }

    // --- Staff review queues ---

    pub async fn vendors(&self, token: &str) -> Result<Vec<Vendor>, RequestError> {
        self.fetch(Method::GET, "/admin/vendors", None::<&()>, Some(token))
            .await
    }

    pub async fn approve_vendor(&self, id: &str, token: &str) -> Result<Value, RequestError> {
        self.request(
            Method::PUT,
            &format!("/admin/vendor/approve/{id}"),
            None::<&()>,
            Some(token),
        )
        .await
    }

    pub async fn reject_vendor(&self, id: &str, token: &str) -> Result<Value, RequestError> {
        self.request(
            Method::PUT,
            &format!("/admin/vendor/reject/{id}"),
            None::<&()>,
            Some(token),
        )
        .await
    }

    pub async fn snacks_under_review(&self, token: &str) -> Result<Vec<Snack>, RequestError> {
        self.fetch(Method::GET, "/admin/snacks", None::<&()>, Some(token))
            .await
    }

    pub async fn approve_snack(&self, id: &str, token: &str) -> Result<Value, RequestError> {
        self.request(
            Method::PUT,
            &format!("/admin/snack/approve/{id}"),
            None::<&()>,
            Some(token),
        )
        .await
    }

    pub async fn reject_snack(&self, id: &str, token: &str) -> Result<Value, RequestError> {
        self.request(
            Method::PUT,
            &format!("/admin/snack/reject/{id}"),
            None::<&()>,
            Some(token),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_message_field_wins() {
        let err = decode_response(403, false, r#"{"message":"no"}"#).unwrap_err();
        assert_eq!(err.status, Some(403));
        assert_eq!(err.message, "no");
    }

    #[test]
    fn non_json_error_body_is_passed_through() {
        let err = decode_response(500, false, "boom").unwrap_err();
        assert_eq!(err.status, Some(500));
        assert_eq!(err.message, "boom");
    }

    #[test]
    fn json_error_body_without_message_falls_back_to_raw_text() {
        let err = decode_response(400, false, r#"{"error":"bad"}"#).unwrap_err();
        assert_eq!(err.message, r#"{"error":"bad"}"#);
    }

    #[test]
    fn empty_error_body_falls_back_to_status_line() {
        let err = decode_response(502, false, "").unwrap_err();
        assert_eq!(err.message, "HTTP error! status: 502");
    }

    #[test]
    fn empty_success_body_resolves_to_empty_object() {
        let value = decode_response(204, true, "").unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn non_json_success_body_is_wrapped_as_a_message() {
        let value = decode_response(200, true, "created").unwrap();
        assert_eq!(value, serde_json::json!({ "message": "created" }));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.url("/snacks"), "http://localhost:8080/snacks");
        assert_eq!(client.url("snacks"), "http://localhost:8080/snacks");
    }
}
