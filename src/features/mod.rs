//! Feature modules: the schema-driven form engine, the auth API surface, and
//! the toast notification stack.

pub(crate) mod auth;
pub(crate) mod forms;
pub(crate) mod notify;
