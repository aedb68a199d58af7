//! Client wrappers for the auth API endpoints. These keep endpoint paths and
//! response types in one place so route code only deals with payloads and
//! outcomes.

use crate::{
    app_lib::{AppError, api::post_json},
    features::{
        auth::types::{ApiMessage, RegisterResponse, VerifyEmailRequest},
        forms::SubmitPayload,
    },
};

/// Signs a user in with email and password.
pub async fn login(payload: &SubmitPayload) -> Result<ApiMessage, AppError> {
    post_json("/auth/login", payload).await
}

/// Creates an account; the 200 body carries the verification token the
/// backend also emails out. Must never be logged.
pub async fn register(payload: &SubmitPayload) -> Result<RegisterResponse, AppError> {
    post_json("/auth/register", payload).await
}

/// Requests a password-reset email.
pub async fn forgot_password(payload: &SubmitPayload) -> Result<ApiMessage, AppError> {
    post_json("/auth/forgot-password", payload).await
}

/// Confirms an email address with the token from the verification link.
pub async fn verify_email(request: &VerifyEmailRequest) -> Result<ApiMessage, AppError> {
    post_json("/auth/verify-email", request).await
}
