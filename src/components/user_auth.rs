//! Combined login / signup screen for shoppers and vendors.
//!
//! All validation runs client-side before any request; a successful login
//! writes the session through the auth service and redirects by role.
//! Registration never logs the account in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::auth::{login_user, login_vendor, use_auth};
use crate::components::form::TextField;
use crate::model::{UserRegistration, VendorRegistration};
use crate::validate::{ValidationErrors, validate_login, validate_signup, validate_vendor_signup};
use crate::web::router::use_router;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Login,
    Signup,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum AccountKind {
    User,
    Vendor,
}

#[component]
pub fn UserAuthPage() -> impl IntoView {
    let ctx = use_auth();
    let api = expect_context::<ApiClient>();
    let router = use_router();

    let (tab, set_tab) = signal(Tab::Login);
    let (kind, set_kind) = signal(AccountKind::User);
    let (is_submitting, set_is_submitting) = signal(false);
    let errors = RwSignal::new(ValidationErrors::default());
    let (general_error, set_general_error) = signal(Option::<String>::None);
    let (success_message, set_success_message) = signal(Option::<String>::None);

    // Login fields.
    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());

    // Signup fields.
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());

    // Vendor-only signup fields.
    let business_name = RwSignal::new(String::new());
    let business_license_number = RwSignal::new(String::new());
    let tax_id = RwSignal::new(String::new());
    let business_address = RwSignal::new(String::new());
    let business_description = RwSignal::new(String::new());

    let select_tab = move |next: Tab| {
        set_tab.set(next);
        errors.set(ValidationErrors::default());
        set_general_error.set(None);
    };

    let on_login = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let checked = validate_login(&login_email.get(), &login_password.get());
            errors.set(checked.clone());
            if !checked.is_empty() {
                return;
            }

            set_is_submitting.set(true);
            set_general_error.set(None);

            let api = api.clone();
            spawn_local(async move {
                let email = login_email.get_untracked();
                let password = login_password.get_untracked();
                let outcome = match kind.get_untracked() {
                    AccountKind::User => login_user(ctx, &api, &email, &password).await,
                    AccountKind::Vendor => login_vendor(ctx, &api, &email, &password).await,
                };
                match outcome {
                    Ok(result) => {
                        login_password.set(String::new());
                        router.navigate(result.landing_route());
                    }
                    Err(err) => set_general_error.set(Some(err.message)),
                }
                set_is_submitting.set(false);
            });
        }
    };

    let on_signup = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let mut checked = validate_signup(
                &username.get(),
                &email.get(),
                &password.get(),
                &confirm_password.get(),
                &phone_number.get(),
            );
            if kind.get() == AccountKind::Vendor {
                validate_vendor_signup(
                    &mut checked,
                    &business_name.get(),
                    &business_license_number.get(),
                    &tax_id.get(),
                    &business_address.get(),
                );
            }
            errors.set(checked.clone());
            if !checked.is_empty() {
                return;
            }

            set_is_submitting.set(true);
            set_general_error.set(None);

            let api = api.clone();
            spawn_local(async move {
                let outcome = match kind.get_untracked() {
                    AccountKind::User => {
                        let payload = UserRegistration {
                            username: username.get_untracked(),
                            email: email.get_untracked(),
                            password: password.get_untracked(),
                            phone_number: phone_number.get_untracked(),
                        };
                        crate::auth::register_user(&api, &payload).await
                    }
                    AccountKind::Vendor => {
                        let payload = VendorRegistration {
                            username: username.get_untracked(),
                            email: email.get_untracked(),
                            password: password.get_untracked(),
                            phone_number: phone_number.get_untracked(),
                            business_name: business_name.get_untracked(),
                            business_license_number: business_license_number.get_untracked(),
                            tax_id: tax_id.get_untracked(),
                            business_address: business_address.get_untracked(),
                            business_description: business_description.get_untracked(),
                        };
                        crate::auth::register_vendor(&api, &payload).await
                    }
                };
                match outcome {
                    Ok(_) => {
                        set_success_message
                            .set(Some("Registration successful! Please log in.".to_string()));
                        password.set(String::new());
                        confirm_password.set(String::new());
                        set_tab.set(Tab::Login);
                    }
                    Err(err) => set_general_error.set(Some(err.message)),
                }
                set_is_submitting.set(false);
            });
        }
    };

    let submit_label = move || match tab.get() {
        Tab::Login => "Log in",
        Tab::Signup => "Create account",
    };

    view! {
        <div class="hero min-h-[80vh] bg-base-200 py-8">
            <div class="hero-content flex-col w-full max-w-lg">
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <div class="card-body">
                        <div role="tablist" class="tabs tabs-boxed">
                            <a
                                role="tab"
                                class=move || {
                                    if tab.get() == Tab::Login { "tab tab-active" } else { "tab" }
                                }
                                on:click=move |_| select_tab(Tab::Login)
                            >
                                "Login"
                            </a>
                            <a
                                role="tab"
                                class=move || {
                                    if tab.get() == Tab::Signup { "tab tab-active" } else { "tab" }
                                }
                                on:click=move |_| select_tab(Tab::Signup)
                            >
                                "Sign up"
                            </a>
                        </div>

                        <div class="join justify-center my-2">
                            <button
                                class=move || {
                                    if kind.get() == AccountKind::User {
                                        "btn btn-sm join-item btn-primary"
                                    } else {
                                        "btn btn-sm join-item"
                                    }
                                }
                                on:click=move |_| set_kind.set(AccountKind::User)
                            >
                                "Shopper"
                            </button>
                            <button
                                class=move || {
                                    if kind.get() == AccountKind::Vendor {
                                        "btn btn-sm join-item btn-primary"
                                    } else {
                                        "btn btn-sm join-item"
                                    }
                                }
                                on:click=move |_| set_kind.set(AccountKind::Vendor)
                            >
                                "Vendor"
                            </button>
                        </div>

                        <Show when=move || success_message.get().is_some()>
                            <div role="alert" class="alert alert-success text-sm py-2">
                                <span>{move || success_message.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <Show when=move || general_error.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || general_error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <Show
                            when=move || tab.get() == Tab::Login
                            fallback=move || {
                                view! {
                                    <form on:submit=on_signup.clone()>
                                        <TextField
                                            id="signup-username"
                                            label="Username"
                                            value=username
                                            errors=errors
                                            field="username"
                                        />
                                        <TextField
                                            id="signup-email"
                                            label="Email"
                                            input_type="email"
                                            value=email
                                            errors=errors
                                            field="email"
                                        />
                                        <TextField
                                            id="signup-password"
                                            label="Password"
                                            input_type="password"
                                            value=password
                                            errors=errors
                                            field="password"
                                        />
                                        <TextField
                                            id="signup-confirm"
                                            label="Confirm password"
                                            input_type="password"
                                            value=confirm_password
                                            errors=errors
                                            field="confirmPassword"
                                        />
                                        <TextField
                                            id="signup-phone"
                                            label="Phone number"
                                            value=phone_number
                                            errors=errors
                                            field="phoneNumber"
                                        />

                                        <Show when=move || kind.get() == AccountKind::Vendor>
                                            <TextField
                                                id="signup-business-name"
                                                label="Business name"
                                                value=business_name
                                                errors=errors
                                                field="businessName"
                                            />
                                            <TextField
                                                id="signup-license"
                                                label="Business license number"
                                                value=business_license_number
                                                errors=errors
                                                field="businessLicenseNumber"
                                            />
                                            <TextField
                                                id="signup-tax"
                                                label="Tax ID"
                                                value=tax_id
                                                errors=errors
                                                field="taxId"
                                            />
                                            <TextField
                                                id="signup-address"
                                                label="Business address"
                                                value=business_address
                                                errors=errors
                                                field="businessAddress"
                                            />
                                            <div class="form-control">
                                                <label class="label" for="signup-description">
                                                    <span class="label-text">
                                                        "Business description (optional)"
                                                    </span>
                                                </label>
                                                <textarea
                                                    id="signup-description"
                                                    class="textarea textarea-bordered"
                                                    on:input=move |ev| {
                                                        business_description
                                                            .set(event_target_value(&ev))
                                                    }
                                                    prop:value=business_description
                                                ></textarea>
                                            </div>
                                        </Show>

                                        <div class="form-control mt-6">
                                            <button
                                                class="btn btn-primary"
                                                disabled=move || is_submitting.get()
                                            >
                                                {submit_label}
                                            </button>
                                        </div>
                                    </form>
                                }
                            }
                        >
                            <form on:submit=on_login.clone()>
                                <TextField
                                    id="login-email"
                                    label="Email"
                                    input_type="email"
                                    value=login_email
                                    errors=errors
                                    field="email"
                                />
                                <TextField
                                    id="login-password"
                                    label="Password"
                                    input_type="password"
                                    value=login_password
                                    errors=errors
                                    field="password"
                                />
                                <div class="form-control mt-6">
                                    <button
                                        class="btn btn-primary"
                                        disabled=move || is_submitting.get()
                                    >
                                        {move || {
                                            if is_submitting.get() {
                                                view! {
                                                    <span class="loading loading-spinner"></span>
                                                    "Signing in..."
                                                }
                                                .into_any()
                                            } else {
                                                submit_label().into_any()
                                            }
                                        }}
                                    </button>
                                </div>
                            </form>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
