//! Vendor: list a new snack.
//!
//! The form is validated client-side; the payload carries the vendor id
//! from the session and lands in the review queue as pending approval.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::feedback::{AccessDenied, BannerAlert};
use crate::model::Role;
use crate::screen::Banners;
use crate::validate::{SnackForm, ValidationErrors};

/// One labeled input bound to a field of the shared [`SnackForm`] signal.
#[component]
pub(super) fn SnackField(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    form: RwSignal<SnackForm>,
    /// Writes the raw input string into the form.
    setter: fn(&mut SnackForm, String),
    /// Reads the field back out for `prop:value`.
    getter: fn(&SnackForm) -> String,
    errors: RwSignal<ValidationErrors>,
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
                class="input input-bordered input-sm"
                on:input=move |ev| form.update(|f| setter(f, event_target_value(&ev)))
                prop:value=move || getter(&form.get())
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

#[component]
pub fn AddSnackPage() -> impl IntoView {
    let ctx = use_auth();
    let api = expect_context::<ApiClient>();
    let session = ctx.session();

    let form = RwSignal::new(SnackForm::default());
    let errors = RwSignal::new(ValidationErrors::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let banners = Banners::new();

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let checked = form.get().validate();
            errors.set(checked.clone());
            if !checked.is_empty() {
                return;
            }

            let current = session.get_untracked();
            let (Some(token), Some(vendor_id)) = (current.token, current.subject_id) else {
                banners.error("Authentication required. Please log in again.");
                return;
            };

            set_is_submitting.set(true);
            let payload = form.get_untracked().to_payload(Some(vendor_id));
            let api = api.clone();
            spawn_local(async move {
                match api.create_snack(&payload, &token).await {
                    Ok(_) => {
                        banners.success("Snack submitted for approval!");
                        form.set(SnackForm::default());
                        errors.set(ValidationErrors::default());
                    }
                    Err(err) => banners.error(crate::error::UiError::from(err).message()),
                }
                set_is_submitting.set(false);
            });
        }
    };

    view! {
        <Show
            when=move || session.get().has_role(&[Role::Vendor])
            fallback=move || {
                let signed_in = session.get_untracked().is_authenticated();
                view! {
                    <AccessDenied
                        message="Only approved vendors can list snacks."
                        show_login=!signed_in
                    />
                }
            }
        >
            <div class="max-w-3xl mx-auto p-6 space-y-4">
                <h1 class="text-3xl font-bold">"List a new snack"</h1>
                <BannerAlert banners=banners />

                <form
                    class="card bg-base-100 shadow-md card-body grid grid-cols-1 md:grid-cols-2 gap-3"
                    on:submit=on_submit.clone()
                >
                    <SnackField
                        id="snack-name" label="Snack name" form=form
                        setter=|f, v| f.snack_name = v
                        getter=|f| f.snack_name.clone()
                        errors=errors field="snackName"
                    />
                    <SnackField
                        id="snack-type" label="Snack type" form=form
                        setter=|f, v| f.snack_type = v
                        getter=|f| f.snack_type.clone()
                        errors=errors field="snackType"
                    />
                    <SnackField
                        id="snack-price" label="Price" input_type="number" form=form
                        setter=|f, v| f.price = v
                        getter=|f| f.price.clone()
                        errors=errors field="price"
                    />
                    <SnackField
                        id="snack-quantity" label="Quantity" input_type="number" form=form
                        setter=|f, v| f.quantity = v
                        getter=|f| f.quantity.clone()
                        errors=errors field="quantity"
                    />
                    <SnackField
                        id="snack-expiry" label="Expiry (months)" input_type="number" form=form
                        setter=|f, v| f.expiry_in_months = v
                        getter=|f| f.expiry_in_months.clone()
                        errors=errors field="expiryInMonths"
                    />
                    <SnackField
                        id="snack-sku" label="SKU" form=form
                        setter=|f, v| f.sku = v
                        getter=|f| f.sku.clone()
                        errors=errors field="sku"
                    />
                    <SnackField
                        id="snack-ingredients" label="Ingredients" form=form
                        setter=|f, v| f.ingredients = v
                        getter=|f| f.ingredients.clone()
                        errors=errors field="ingredients"
                    />
                    <SnackField
                        id="snack-description" label="Description" form=form
                        setter=|f, v| f.description = v
                        getter=|f| f.description.clone()
                        errors=errors field="description"
                    />
                    <SnackField
                        id="snack-nutrition" label="Nutritional info" form=form
                        setter=|f, v| f.nutritional_info = v
                        getter=|f| f.nutritional_info.clone()
                        errors=errors field="nutritionalInfo"
                    />
                    <SnackField
                        id="snack-stock" label="Current stock" input_type="number" form=form
                        setter=|f, v| f.current_stock = v
                        getter=|f| f.current_stock.clone()
                        errors=errors field="currentStock"
                    />
                    <SnackField
                        id="snack-reorder" label="Reorder point" input_type="number" form=form
                        setter=|f, v| f.reorder_point = v
                        getter=|f| f.reorder_point.clone()
                        errors=errors field="reorderPoint"
                    />
                    <SnackField
                        id="snack-max" label="Max stock" input_type="number" form=form
                        setter=|f, v| f.max_stock = v
                        getter=|f| f.max_stock.clone()
                        errors=errors field="maxStock"
                    />

                    <div class="form-control md:col-span-2 mt-2">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || {
                                if is_submitting.get() {
                                    view! {
                                        <span class="loading loading-spinner"></span>
                                        "Submitting..."
                                    }
                                    .into_any()
                                } else {
                                    "Submit for approval".into_any()
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
