//! Shared form controls: a labeled text input wired to a string signal
//! with its per-field validation message.

use leptos::prelude::*;

use crate::validate::ValidationErrors;

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    /// HTML input type; defaults to `text`.
    #[prop(optional)]
    input_type: Option<&'static str>,
    value: RwSignal<String>,
    errors: RwSignal<ValidationErrors>,
    /// Key into the validation error map.
    field: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=input_type.unwrap_or("text")
                class="input input-bordered"
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
            />
            {move || {
                errors.get().get(field).map(|message| {
                    view! {
                        <span class="label-text-alt text-error">{message.to_string()}</span>
                    }
                })
            }}
        </div>
    }
}
