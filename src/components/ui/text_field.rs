//! Labelled input bound to a `FormController` field. The controller is the
//! source of truth: the input reports keystrokes and blur, and renders the
//! controller's current value and error.

use crate::features::forms::FormController;
use leptos::prelude::*;

#[component]
pub fn TextField(
    form: RwSignal<FormController>,
    name: &'static str,
    label: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    let input_type = form.with_untracked(|form| form.kind(name).input_type());
    let error = move || form.with(|form| form.bind(name).error);

    view! {
        <div>
            <label class="block mb-2 text-sm font-medium text-slate-700" for=name>
                {label}
            </label>
            <input
                id=name
                name=name
                type=input_type
                class="w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200"
                class:border-red-500=move || error().is_some()
                placeholder=placeholder.unwrap_or("")
                autocomplete=autocomplete.unwrap_or("off")
                prop:value=move || form.with(|form| form.bind(name).value)
                on:input=move |event| {
                    form.update(|form| form.input(name, event_target_value(&event)));
                }
                on:blur=move |_| form.update(|form| form.blur(name))
            />
            {move || {
                error()
                    .map(|message| view! { <p class="mt-1 text-xs text-red-500">{message}</p> })
            }}
        </div>
    }
}
