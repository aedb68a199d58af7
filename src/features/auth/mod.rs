//! Auth API surface: one wrapper per backend endpoint plus the wire types
//! they exchange. Every flow is a single POST; the backend owns sessions,
//! tokens, and persistence.
//!
//! Flow overview: login navigates to the dashboard on success, registration
//! prompts the user to verify their email, forgot-password always reports
//! that the request was sent, and verify-email fires automatically from the
//! link's query parameters and then navigates to login.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
