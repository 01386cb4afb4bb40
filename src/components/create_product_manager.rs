//! Admin: provision a product-manager account.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::auth::{create_product_manager, use_auth};
use crate::components::feedback::{AccessDenied, BannerAlert};
use crate::components::form::TextField;
use crate::error::UiError;
use crate::model::{NewProductManager, Role};
use crate::screen::Banners;
use crate::validate::{ValidationErrors, validate_product_manager};

#[component]
pub fn CreateProductManagerPage() -> impl IntoView {
    let ctx = use_auth();
    let api = expect_context::<ApiClient>();
    let session = ctx.session();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let banners = Banners::new();

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let checked =
                validate_product_manager(&username.get(), &email.get(), &password.get());
            errors.set(checked.clone());
            if !checked.is_empty() {
                return;
            }

            set_is_submitting.set(true);
            let payload = NewProductManager {
                username: username.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            let api = api.clone();
            spawn_local(async move {
                match create_product_manager(ctx, &api, &payload).await {
                    Ok(_) => {
                        banners.success("Product manager account created.");
                        username.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                        errors.set(ValidationErrors::default());
                    }
                    Err(err) => banners.error(UiError::from(err).message()),
                }
                set_is_submitting.set(false);
            });
        }
    };

    view! {
        <Show
            when=move || session.get().has_role(&[Role::Admin])
            fallback=move || {
                let signed_in = session.get_untracked().is_authenticated();
                view! {
                    <AccessDenied
                        message="Only administrators can create product managers."
                        show_login=!signed_in
                    />
                }
            }
        >
            <div class="max-w-md mx-auto p-6 space-y-4">
                <h1 class="text-3xl font-bold">"New product manager"</h1>
                <BannerAlert banners=banners />

                <form
                    class="card bg-base-100 shadow-md card-body"
                    on:submit=on_submit.clone()
                >
                    <TextField
                        id="pm-username"
                        label="Username"
                        value=username
                        errors=errors
                        field="username"
                    />
                    <TextField
                        id="pm-email"
                        label="Email"
                        input_type="email"
                        value=email
                        errors=errors
                        field="email"
                    />
                    <TextField
                        id="pm-password"
                        label="Password"
                        input_type="password"
                        value=password
                        errors=errors
                        field="password"
                    />

                    <div class="form-control mt-4">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || {
                                if is_submitting.get() {
                                    view! {
                                        <span class="loading loading-spinner"></span>
                                        "Creating..."
                                    }
                                    .into_any()
                                } else {
                                    "Create account".into_any()
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
