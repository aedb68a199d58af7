//! Email verification page. The verification POST fires exactly once,
//! automatically, from the link's `token` and `email` query parameters; no
//! user action is involved. On success the user is sent to the login page.

use crate::components::{Alert, AlertKind, Spinner};
use crate::features::auth::client;
use crate::features::auth::types::VerifyEmailRequest;
use crate::features::notify::use_toasts;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

#[derive(Clone, Debug, PartialEq)]
enum VerifyStatus {
    Idle,
    MissingParams,
    Pending,
    Success,
    Error(String),
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let (status, set_status) = signal(VerifyStatus::Idle);
    let query = use_query_map();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let verify_action = Action::new_local(move |request: &VerifyEmailRequest| {
        let request = request.clone();
        async move { client::verify_email(&request).await }
    });

    // Dispatch once on mount; the status guard keeps re-runs from firing a
    // second request.
    Effect::new(move |_| {
        if status.get() != VerifyStatus::Idle {
            return;
        }

        let token = query.with_untracked(|params| params.get("token"));
        let email = query.with_untracked(|params| params.get("email"));
        match (token, email) {
            (Some(token), Some(email)) if !token.is_empty() && !email.is_empty() => {
                set_status.set(VerifyStatus::Pending);
                verify_action.dispatch(VerifyEmailRequest {
                    verification_token: token,
                    email,
                });
            }
            _ => set_status.set(VerifyStatus::MissingParams),
        }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(_) => {
                    set_status.set(VerifyStatus::Success);
                    toasts.success("Verified email, redirecting to login");
                    navigate("/login", Default::default());
                }
                Err(err) => {
                    let message = err.user_message();
                    toasts.error(message.clone());
                    set_status.set(VerifyStatus::Error(message));
                }
            }
        }
    });

    view! {
        <main class="flex h-screen items-center justify-center">
            <div class="text-center">
                {move || match status.get() {
                    VerifyStatus::Idle | VerifyStatus::Pending => view! {
                        <div>
                            <h1 class="text-blue-500">"Verifying your account..."</h1>
                            <div class="mt-4"><Spinner /></div>
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Success => view! {
                        <div class="max-w-md">
                            <Alert
                                kind=AlertKind::Success
                                message="Email verified. You can sign in now.".to_string()
                            />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::MissingParams => view! {
                        <div class="max-w-md">
                            <Alert
                                kind=AlertKind::Error
                                message="Missing verification details. Check your email link."
                                    .to_string()
                            />
                        </div>
                    }
                    .into_any(),
                    VerifyStatus::Error(message) => view! {
                        <div class="max-w-md">
                            <Alert kind=AlertKind::Error message=message />
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </main>
    }
}
