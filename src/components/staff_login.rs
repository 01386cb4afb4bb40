//! Staff (admin / product manager) login.
//!
//! Goes through the shared auth service like every other login; the role
//! comes from the server's response.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::auth::{login_staff, use_auth};
use crate::validate::{ValidationErrors, validate_login};
use crate::web::router::use_router;

#[component]
pub fn StaffLoginPage() -> impl IntoView {
    let ctx = use_auth();
    let api = expect_context::<ApiClient>();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let errors = RwSignal::new(ValidationErrors::default());
    let (general_error, set_general_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let checked = validate_login(&email.get(), &password.get());
        errors.set(checked.clone());
        if !checked.is_empty() {
            return;
        }

        set_is_submitting.set(true);
        set_general_error.set(None);

        let api = api.clone();
        spawn_local(async move {
            match login_staff(ctx, &api, &email.get_untracked(), &password.get_untracked()).await
            {
                Ok(result) => router.navigate(result.landing_route()),
                Err(err) => set_general_error.set(Some(err.message)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-2">
                    <h1 class="text-3xl font-bold">"Staff login"</h1>
                    <p class="text-base-content/70">
                        "For administrators and product managers"
                    </p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || general_error.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || general_error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="staff-email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="staff-email"
                                type="email"
                                class="input input-bordered"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                            />
                            {move || {
                                errors.get().get("email").map(|message| {
                                    view! {
                                        <span class="label-text-alt text-error">
                                            {message.to_string()}
                                        </span>
                                    }
                                })
                            }}
                        </div>

                        <div class="form-control">
                            <label class="label" for="staff-password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="staff-password"
                                type="password"
                                class="input input-bordered"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                            />
                            {move || {
                                errors.get().get("password").map(|message| {
                                    view! {
                                        <span class="label-text-alt text-error">
                                            {message.to_string()}
                                        </span>
                                    }
                                })
                            }}
                        </div>

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || {
                                    if is_submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "Signing in..."
                                        }
                                        .into_any()
                                    } else {
                                        "Sign in".into_any()
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
