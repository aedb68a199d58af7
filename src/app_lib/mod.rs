//! Shared frontend utilities: HTTP submission helper, configuration, errors,
//! and build metadata. Centralizing these keeps network behavior consistent
//! across the auth pages and out of route code.

pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;

/// Git commit the binary was built from, for the page footer.
#[allow(dead_code)]
pub(crate) const GIT_COMMIT: &str = env!("CHURCHDAY_WEB_GIT_SHA");

pub(crate) use errors::AppError;
