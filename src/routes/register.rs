//! Registration page. One schema-driven form replaces the three divergent
//! drafts in the original app: name, email, password, and confirmation, with
//! the mismatch error attached to the confirmation field. On success the
//! user stays on the page and is told to check their inbox.

use crate::components::{AppShell, Button, Spinner, TextField};
use crate::features::auth::client;
use crate::features::forms::{
    FieldDef, FieldKind, FormController, FormSchema, SubmitGate, SubmitPayload,
};
use crate::features::notify::use_toasts;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

fn register_schema() -> FormSchema {
    FormSchema::builder()
        .field(
            FieldDef::new("name", FieldKind::Text)
                .required("Name is required")
                .min_length(6, "Name must be at least 6 characters long"),
        )
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
        .field(
            FieldDef::new("confirmPassword", FieldKind::Password)
                .required("Confirm password is required")
                .min_length(6, "Confirm password must be at least 6 characters long")
                .equals("password", "Passwords do not match"),
        )
        .build()
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(FormController::new(register_schema()));
    let toasts = use_toasts();

    let register_action = Action::new_local(move |payload: &SubmitPayload| {
        let payload = payload.clone();
        async move { client::register(&payload).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            form.update(|form| form.finish_submit());
            match result {
                Ok(_) => toasts
                    .success("Registration successful, visit email address to verify account"),
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
            register_action.dispatch(payload);
        }
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <div class="space-y-2">
                    <h1 class="text-2xl font-semibold text-slate-900">"Create account"</h1>
                    <p class="text-sm text-slate-500">
                        "Enter details to register an account. If you already have one, you can "
                        <A href="/login" {..} class="underline hover:text-blue-700">
                            "login"
                        </A>
                        "."
                    </p>
                </div>
                <div class="mt-6 space-y-4">
                    <TextField
                        form=form
                        name="name"
                        label="Name"
                        placeholder="Enter name..."
                        autocomplete="name"
                    />
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
                        autocomplete="new-password"
                    />
                    <TextField
                        form=form
                        name="confirmPassword"
                        label="Confirm password"
                        placeholder="Confirm password"
                        autocomplete="new-password"
                    />
                    <Button button_type="submit" disabled=register_action.pending()>
                        "Create account"
                    </Button>
                </div>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
            </form>
        </AppShell>
    }
}
