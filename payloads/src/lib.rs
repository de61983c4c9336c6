pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError, normalize_error_body};
pub use reqwest::StatusCode;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Id of a registered company, as assigned by the portal backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CompanyId(pub i64);
