//! Renders the toast stack in a fixed corner. Each toast is dismissible and
//! the stack grows downward, newest last.

use crate::features::notify::{Toast, ToastLevel, use_toasts};
use leptos::prelude::*;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed top-4 right-4 z-50 flex w-80 flex-col gap-2" aria-live="polite">
            <For
                each=move || toasts.stack.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.level {
                        ToastLevel::Success => {
                            "flex items-start justify-between gap-3 rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 shadow"
                        }
                        ToastLevel::Error => {
                            "flex items-start justify-between gap-3 rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 shadow"
                        }
                    };
                    view! {
                        <div class=class role="status">
                            <span>{toast.message.clone()}</span>
                            <button
                                type="button"
                                class="font-bold opacity-60 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
