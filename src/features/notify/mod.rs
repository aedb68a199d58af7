//! Toast notifications for submission outcomes. The stack itself is a plain
//! data structure; the Leptos context wrapper makes it an explicit,
//! context-scoped collaborator instead of a global container, so the pages
//! stay testable without a rendering environment.

#[cfg(target_arch = "wasm32")]
mod context;
mod state;

#[cfg(target_arch = "wasm32")]
pub(crate) use context::{ToastProvider, use_toasts};
pub(crate) use state::{Toast, ToastLevel, ToastStack};
