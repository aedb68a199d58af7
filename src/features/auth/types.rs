//! Wire types for the auth endpoints. Field names follow the backend's
//! camelCase JSON; verification tokens must never be logged.

use serde::{Deserialize, Serialize};

/// Body for `POST /auth/verify-email`, built from the link's query
/// parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailRequest {
    pub verification_token: String,
    pub email: String,
}

/// Generic 200 body: the server may attach a human-readable message.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub msg: Option<String>,
}

/// 200 body of `POST /auth/register`; carries the verification token the
/// backend emailed out.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub verification_token: Option<String>,
}
