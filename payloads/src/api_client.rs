use crate::{CompanyId, requests, responses};
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Shown when a failed response carries nothing we can display.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";
/// Display text of [`ClientError::Network`].
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection.";
/// Display text of [`ClientError::Decode`].
pub const DECODE_ERROR_MESSAGE: &str = "Unexpected response from the server.";
/// Sent for a logo whose type the browser couldn't tell.
pub const FALLBACK_LOGO_CONTENT_TYPE: &str = "application/octet-stream";

/// An API client for interfacing with the company portal backend.
#[derive(Clone)]
pub struct APIClient {
    /// Base url every endpoint path is joined onto, e.g.
    /// `https://host/api/CompanyPortal`.
    pub address: String,
    pub inner_client: reqwest::Client,
    /// Attached as `Authorization: Bearer ...` to every request when set.
    pub bearer_token: Option<String>,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
            bearer_token: None,
        }
    }

    pub fn with_bearer_token(mut self, token: Option<String>) -> Self {
        self.bearer_token = token;
        self
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", self.address.trim_end_matches('/'))
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);
        self.authorize(request).send().await
    }

    async fn multipart_post(&self, path: &str, form: Form) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).multipart(form);
        self.authorize(request).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Register a new company. The account password is set later through the
    /// emailed OTP.
    pub async fn sign_up(
        &self,
        details: &requests::CompanyRegistration,
    ) -> Result<responses::SignupResponse, ClientError> {
        let response = self.post("signUp-Company", details).await?;
        ok_lenient(response).await
    }

    /// A 2xx answer with `success: false` is reported as an
    /// [`ClientError::APIError`] like any other refusal.
    pub async fn login(
        &self,
        details: &requests::LoginRequest,
    ) -> Result<responses::LoginResponse, ClientError> {
        let response = self.post("AccountPortal/login", details).await?;
        let status = response.status();
        let body: Value = ok_body(response).await?;
        if body.get("success").and_then(Value::as_bool) == Some(false) {
            let message = message_from_json(&body)
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
            tracing::warn!(%status, %message, "login refused");
            return Err(ClientError::APIError(status, message));
        }
        Ok(serde_json::from_value(body)?)
    }

    /// Email an OTP that authorizes setting a new password.
    pub async fn forget_password(
        &self,
        details: &requests::SendOtpRequest,
    ) -> Result<responses::PortalMessage, ClientError> {
        let response = self
            .post("AccountPortal/forget-password-portal", details)
            .await?;
        ok_lenient(response).await
    }

    pub async fn resend_otp(
        &self,
        details: &requests::SendOtpRequest,
    ) -> Result<responses::PortalMessage, ClientError> {
        let response =
            self.post("AccountPortal/resend-otp-portal", details).await?;
        ok_lenient(response).await
    }

    pub async fn set_password(
        &self,
        details: &requests::SetPasswordRequest,
    ) -> Result<responses::PortalMessage, ClientError> {
        let response = self.post("AccountPortal/setpassword", details).await?;
        ok_lenient(response).await
    }

    pub async fn upload_logo(
        &self,
        company_id: CompanyId,
        logo: &requests::LogoFile,
    ) -> Result<responses::PortalMessage, ClientError> {
        let content_type = match logo.content_type.trim() {
            "" => FALLBACK_LOGO_CONTENT_TYPE,
            content_type => content_type,
        };
        let part = Part::bytes(logo.data.clone())
            .file_name(logo.file_name.clone())
            .mime_str(content_type)?;
        let form = Form::new().part("logoFile", part);
        let response = self
            .multipart_post(&format!("File/upload-logo/{company_id}"), form)
            .await?;
        ok_lenient(response).await
    }
}

/// Every failed call is reduced to one of these, with the display message
/// already extracted from whatever error body the backend sent.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-success response and its normalized message.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    /// A success response whose body didn't have the expected shape.
    #[error("Unexpected response from the server.")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of the failure, or 0 when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            Self::APIError(status, _) => status.as_u16(),
            Self::Network(e) => e.status().map_or(0, |s| s.as_u16()),
            Self::Decode(_) => 0,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let response = check_status(response).await?;
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// Like [`ok_body`], but a body that is empty or doesn't match `T` is still a
/// success and yields `T::default()`.
pub async fn ok_lenient<T: DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let response = check_status(response).await?;
    let text = response.text().await?;
    Ok(serde_json::from_str(&text).unwrap_or_default())
}

async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await?;
    let message = normalize_error_body(&body);
    tracing::warn!(%status, %message, raw = %body, "portal api error");
    Err(ClientError::APIError(status, message))
}

/// Extract a display message from an error response body.
///
/// Checked in order: an `errors` list (or an object of per-field lists),
/// `message`, `errorMessage`, `title`, a nested `error` object. A body that
/// isn't JSON is used as-is. Falls back to [`DEFAULT_ERROR_MESSAGE`].
pub fn normalize_error_body(body: &str) -> String {
    let trimmed = body.trim();
    let message = match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => message_from_json(&value),
        Err(_) => non_empty(trimmed),
    };
    message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
}

fn message_from_json(value: &Value) -> Option<String> {
    if let Value::String(s) = value {
        return non_empty(s);
    }
    if let Some(joined) = value.get("errors").and_then(join_errors) {
        return Some(joined);
    }
    ["message", "errorMessage", "title"]
        .iter()
        .find_map(|key| value.get(*key)?.as_str().and_then(non_empty))
        .or_else(|| value.get("error").and_then(message_from_json))
}

fn join_errors(errors: &Value) -> Option<String> {
    let mut messages = Vec::new();
    collect_strings(errors, &mut messages);
    if messages.is_empty() {
        None
    } else {
        Some(messages.join("\n"))
    }
}

fn collect_strings(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => out.extend(non_empty(s)),
        Value::Array(items) => {
            items.iter().for_each(|item| collect_strings(item, out))
        }
        Value::Object(fields) => {
            fields.values().for_each(|field| collect_strings(field, out))
        }
        _ => {}
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_list_wins_over_message() {
        let body = r#"{"message":"ignored","errors":["Email is taken","Phone is taken"]}"#;
        assert_eq!(normalize_error_body(body), "Email is taken\nPhone is taken");
    }

    #[test]
    fn validation_problem_details_are_flattened() {
        let body = r#"{
            "title": "One or more validation errors occurred.",
            "status": 400,
            "errors": {"Password": ["Password is too weak"]}
        }"#;
        assert_eq!(normalize_error_body(body), "Password is too weak");
    }

    #[test]
    fn empty_errors_fall_through_to_message() {
        let body = r#"{"errors":[],"message":"OTP has expired"}"#;
        assert_eq!(normalize_error_body(body), "OTP has expired");
    }

    #[test]
    fn error_message_then_title() {
        assert_eq!(
            normalize_error_body(r#"{"errorMessage":"Invalid OTP"}"#),
            "Invalid OTP"
        );
        assert_eq!(
            normalize_error_body(r#"{"title":"Not Found","status":404}"#),
            "Not Found"
        );
    }

    #[test]
    fn nested_error_object() {
        let body = r#"{"error":{"message":"OTP has expired"}}"#;
        assert_eq!(normalize_error_body(body), "OTP has expired");
    }

    #[test]
    fn plain_text_and_json_string_bodies() {
        assert_eq!(normalize_error_body("User not found\n"), "User not found");
        assert_eq!(normalize_error_body(r#""User not found""#), "User not found");
    }

    #[test]
    fn fallback_when_nothing_usable() {
        assert_eq!(normalize_error_body(""), DEFAULT_ERROR_MESSAGE);
        assert_eq!(normalize_error_body("{}"), DEFAULT_ERROR_MESSAGE);
        assert_eq!(
            normalize_error_body(r#"{"message":"  ","status":500}"#),
            DEFAULT_ERROR_MESSAGE
        );
    }

    #[test]
    fn api_error_displays_its_message() {
        let err = ClientError::APIError(
            StatusCode::BAD_REQUEST,
            "OTP has expired".into(),
        );
        assert_eq!(err.message(), "OTP has expired");
        assert_eq!(err.status(), 400);
    }
}
