//! Password-reset request page: a single email field. The server always
//! answers without revealing whether the account exists.

use crate::components::{AppShell, Button, Spinner, TextField};
use crate::features::auth::client;
use crate::features::forms::{
    FieldDef, FieldKind, FormController, FormSchema, SubmitGate, SubmitPayload,
};
use crate::features::notify::use_toasts;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

fn forgot_password_schema() -> FormSchema {
    FormSchema::builder()
        .field(
            FieldDef::new("email", FieldKind::Email)
                .required("Email is required")
                .email("Invalid email address"),
        )
        .build()
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let form = RwSignal::new(FormController::new(forgot_password_schema()));
    let toasts = use_toasts();

    let reset_action = Action::new_local(move |payload: &SubmitPayload| {
        let payload = payload.clone();
        async move { client::forgot_password(&payload).await }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            form.update(|form| form.finish_submit());
            match result {
                Ok(_) => toasts.success("Password reset request sent successfully"),
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
            reset_action.dispatch(payload);
        }
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <div class="space-y-2">
                    <h1 class="text-2xl font-semibold text-slate-900">"Reset password"</h1>
                    <p class="text-sm text-slate-500">
                        "Enter your email address and submit to reset your password."
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
                    <Button button_type="submit" disabled=reset_action.pending()>
                        "Reset password"
                    </Button>
                </div>
                {move || {
                    reset_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
            </form>
        </AppShell>
    }
}
