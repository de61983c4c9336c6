use crate::CompanyId;
use serde::{Deserialize, Serialize};

/// The `{message}` body most portal endpoints answer with. Success is decided
/// by the HTTP status alone, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortalMessage {
    pub message: Option<String>,
    pub success: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: Option<String>,
    /// Needed to upload the company logo after registration.
    pub company_id: Option<CompanyId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub data: Option<LoginData>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// JWT issued by the backend; attached as a bearer token afterwards.
    pub token: String,
    pub expires_in_minutes: i64,
    pub user_id: i64,
    pub company_id: CompanyId,
    pub email: String,
    pub company_name: String,
    pub company_arabic_name: String,
    pub token_type: String,
}
