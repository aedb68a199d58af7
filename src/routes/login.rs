//! Login page: validates email and password locally, submits once, and on
//! success redirects to the dashboard.

use crate::components::{AppShell, Button, Spinner, TextField};
use crate::features::auth::client;
use crate::features::forms::{
    FieldDef, FieldKind, FormController, FormSchema, SubmitGate, SubmitPayload,
};
use crate::features::notify::use_toasts;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

fn login_schema() -> FormSchema {
    FormSchema::builder()
        .field(
            FieldDef::new("email", FieldKind::Email)
                .required("Email is required")
                .email("Invalid email address"),
        )
        .field(
            FieldDef::new("password", FieldKind::Password)
                .required("Password is required")
                .min_length(6, "Password must be at least 6 characters long"),
        )
        .build()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(FormController::new(login_schema()));
    let toasts = use_toasts();
    let navigate = use_navigate();

    let login_action = Action::new_local(move |payload: &SubmitPayload| {
        let payload = payload.clone();
        async move { client::login(&payload).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            form.update(|form| form.finish_submit());
            match result {
                Ok(_) => {
                    toasts.success("Login successful, redirecting to dashboard");
                    navigate("/dashboard", Default::default());
                }
                Err(err) => toasts.error(err.user_message()),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let gate = form
            .try_update(|form| form.try_begin_submit())
            .unwrap_or(SubmitGate::InFlight);
        if let SubmitGate::Ready(payload) = gate {
            login_action.dispatch(payload);
        }
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <div class="space-y-2">
                    <h1 class="text-2xl font-semibold text-slate-900">"Log in"</h1>
                    <p class="text-sm text-slate-500">
                        "Go to "
                        <A href="/register" {..} class="underline hover:text-blue-700">
                            "register"
                        </A>
                        " to create an account if you don't have one yet."
                    </p>
                </div>
                <div class="mt-6 space-y-4">
                    <TextField
                        form=form
                        name="email"
                        label="Email"
                        placeholder="Enter email address"
                        autocomplete="email"
                    />
                    <TextField
                        form=form
                        name="password"
                        label="Password"
                        placeholder="Enter password"
                        autocomplete="current-password"
                    />
                    <Button button_type="submit" disabled=login_action.pending()>
                        "Log in"
                    </Button>
                </div>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                <p class="mt-6 text-sm text-slate-500">
                    "Forgot password? "
                    <A href="/reset-password" {..} class="underline hover:text-blue-700">
                        "Reset"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
