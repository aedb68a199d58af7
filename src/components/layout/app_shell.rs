//! Shared layout wrapper with the site header and content container. It
//! centralizes header markup so routes can focus on content. Navigation is
//! client-side only; the backend enforces access control.

use crate::app_lib::GIT_COMMIT;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header, main content container, and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <header class="bg-blue-500">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3">
                        <span class="font-semibold whitespace-nowrap text-white">
                            "churchday"
                        </span>
                    </A>
                    <ul class="font-medium flex flex-row space-x-6">
                        <li>
                            <A
                                href="/login"
                                {..}
                                class="block py-2 px-3 text-white rounded hover:bg-blue-600"
                            >
                                "Log in"
                            </A>
                        </li>
                        <li>
                            <A
                                href="/register"
                                {..}
                                class="block py-2 px-3 text-white rounded hover:bg-blue-600"
                            >
                                "Register"
                            </A>
                        </li>
                    </ul>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="p-4 text-center text-xs text-gray-400">
                {format!(
                    "churchday {} ({})",
                    env!("CARGO_PKG_VERSION"),
                    &GIT_COMMIT[..GIT_COMMIT.len().min(7)],
                )}
            </footer>
        </div>
    }
}
