//! Leptos context around the toast stack. Routes call `use_toasts()` and
//! push outcomes; the host component in `components::ui::toast` renders and
//! dismisses them.

use crate::features::notify::state::{ToastLevel, ToastStack};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Toast stack handle shared through Leptos context.
pub struct ToastContext {
    pub stack: RwSignal<ToastStack>,
}

impl ToastContext {
    fn new() -> Self {
        Self {
            stack: RwSignal::new(ToastStack::new()),
        }
    }

    /// Pushes a transient notification onto the stack.
    pub fn notify(&self, level: ToastLevel, message: impl Into<String>) {
        let message = message.into();
        self.stack.update(|stack| {
            stack.push(level, message);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.stack.update(|stack| stack.dismiss(id));
    }
}

/// Provides the toast context to the app tree.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_context(ToastContext::new());
    view! { {children()} }
}

/// Returns the current toast context or a detached fallback stack.
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(ToastContext::new)
}
