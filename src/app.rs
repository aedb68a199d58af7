use crate::components::ToastHost;
use crate::features::notify::ToastProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ToastProvider>
            <ToastHost />
            <Router>
                <AppRoutes />
            </Router>
        </ToastProvider>
    }
}
