//! Post-login landing page. Intentionally minimal; the dashboard proper
//! lives in another part of the platform.

use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <h1 class="text-2xl font-semibold text-slate-900">"Dashboard"</h1>
        </AppShell>
    }
}
