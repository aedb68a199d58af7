//! Landing page pointing at the auth flows.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-lg mx-auto space-y-4">
                <h1 class="text-2xl font-semibold text-slate-900">"Welcome to churchday"</h1>
                <p class="text-sm text-slate-500">
                    "Go to "
                    <A href="/register" {..} class="underline hover:text-blue-700">
                        "register"
                    </A>
                    " to create an account, or "
                    <A href="/login" {..} class="underline hover:text-blue-700">
                        "login"
                    </A>
                    " if you already have one."
                </p>
            </div>
        </AppShell>
    }
}
