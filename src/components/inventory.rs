//! Vendor inventory management.
//!
//! Lists the vendor's own snacks with inline edit and delete. Mutations
//! are per-row: only the row with a request in flight has its controls
//! disabled, and every collection update is keyed by snack id so
//! responses may arrive in any order.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::add_snack::SnackField;
use crate::components::feedback::{AccessDenied, BannerAlert, LoadingView};
use crate::error::UiError;
use crate::model::{Role, Snack, SnackStatus};
use crate::screen::{Banners, FetchState, patch_by_id, remove_by_id};
use crate::validate::{SnackForm, ValidationErrors};

#[component]
pub fn InventoryPage() -> impl IntoView {
    let ctx = use_auth();
    let api = expect_context::<ApiClient>();
    let session = ctx.session();

    let state = RwSignal::new(FetchState::<Snack>::Idle);
    let busy = RwSignal::new(HashSet::<String>::new());
    let editing = RwSignal::new(Option::<(String, SnackForm)>::None);
    let edit_errors = RwSignal::new(ValidationErrors::default());
    let status_filter = RwSignal::new(Option::<SnackStatus>::None);
    let banners = Banners::new();

    let load = {
        let api = api.clone();
        move || {
            let current = session.get_untracked();
            let (Some(token), Some(vendor_id)) = (current.token, current.subject_id) else {
                state.set(FetchState::Failed(UiError::AuthRequired));
                return;
            };
            state.set(FetchState::Loading);
            let api = api.clone();
            spawn_local(async move {
                match api.vendor_snacks(&vendor_id, &token).await {
                    Ok(snacks) => state.set(FetchState::Loaded(snacks)),
                    Err(err) => state.set(FetchState::Failed(err.into())),
                }
            });
        }
    };

    Effect::new({
        let load = load.clone();
        move |_| {
            if session.get().has_role(&[Role::Vendor])
                && matches!(state.get_untracked(), FetchState::Idle)
            {
                load();
            }
        }
    });

    let visible = move || {
        let filter = status_filter.get();
        state
            .get()
            .items()
            .map(|snacks| {
                snacks
                    .iter()
                    .filter(|s| filter.is_none_or(|status| s.status == status))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    let start_edit = move |snack: &Snack| {
        editing.set(Some((snack.id.clone(), SnackForm::from_snack(snack))));
        edit_errors.set(ValidationErrors::default());
    };

    let save_edit = {
        let api = api.clone();
        move |id: String, form: SnackForm| {
            let checked = form.validate();
            edit_errors.set(checked.clone());
            if !checked.is_empty() {
                return;
            }

            let Some(token) = ctx.store().token() else {
                banners.error(UiError::AuthRequired.message());
                return;
            };

            busy.update(|set| {
                set.insert(id.clone());
            });
            let payload = form.to_payload(session.get_untracked().subject_id);
            let api = api.clone();
            spawn_local(async move {
                match api.update_snack(&id, &payload, &token).await {
                    Ok(updated) => {
                        state.update(|s| {
                            if let FetchState::Loaded(snacks) = s {
                                patch_by_id(snacks, &id, |s| &s.id, |row| *row = updated.clone());
                            }
                        });
                        editing.set(None);
                        banners.success("Snack updated successfully!");
                    }
                    // The collection is left untouched on failure.
                    Err(err) => banners.error(UiError::from(err).message()),
                }
                busy.update(|set| {
                    set.remove(&id);
                });
            });
        }
    };

    let delete_snack = {
        let api = api.clone();
        move |id: String| {
            let Some(token) = ctx.store().token() else {
                banners.error(UiError::AuthRequired.message());
                return;
            };

            busy.update(|set| {
                set.insert(id.clone());
            });
            let api = api.clone();
            spawn_local(async move {
                match api.delete_snack(&id, &token).await {
                    Ok(()) => {
                        state.update(|s| {
                            if let FetchState::Loaded(snacks) = s {
                                remove_by_id(snacks, &id, |s| &s.id);
                            }
                        });
                        banners.success("Snack deleted.");
                    }
                    Err(err) => banners.error(UiError::from(err).message()),
                }
                busy.update(|set| {
                    set.remove(&id);
                });
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
                        message="Only vendors can manage an inventory."
                        show_login=!signed_in
                    />
                }
            }
        >
            <div class="max-w-5xl mx-auto p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h1 class="text-3xl font-bold">"Your inventory"</h1>
                    <div class="flex gap-2">
                        <select
                            class="select select-bordered select-sm"
                            on:change=move |ev| {
                                status_filter.set(match event_target_value(&ev).as_str() {
                                    "PENDING_APPROVAL" => Some(SnackStatus::PendingApproval),
                                    "APPROVED" => Some(SnackStatus::Approved),
                                    "REJECTED" => Some(SnackStatus::Rejected),
                                    _ => None,
                                })
                            }
                        >
                            <option value="ALL" selected>"All statuses"</option>
                            <option value="PENDING_APPROVAL">"Pending approval"</option>
                            <option value="APPROVED">"Approved"</option>
                            <option value="REJECTED">"Rejected"</option>
                        </select>
                        <button class="btn btn-sm btn-ghost" on:click={
                            let load = load.clone();
                            move |_| load()
                        }>
                            "Refresh"
                        </button>
                    </div>
                </div>
                <BannerAlert banners=banners />

                {
                    let save_edit = save_edit.clone();
                    let delete_snack = delete_snack.clone();
                    move || match state.get() {
                        FetchState::Idle | FetchState::Loading => {
                            view! { <LoadingView /> }.into_any()
                        }
                        FetchState::Failed(err) => view! {
                            <div role="alert" class="alert alert-error">
                                <span>{err.message()}</span>
                            </div>
                        }
                        .into_any(),
                        FetchState::Loaded(_) => {
                            let save_edit = save_edit.clone();
                            let delete_snack = delete_snack.clone();
                            view! {
                                <div class="space-y-3">
                                    {move || {
                                        let save_edit = save_edit.clone();
                                        let delete_snack = delete_snack.clone();
                                        visible()
                                            .into_iter()
                                            .map(move |snack| {
                                                let save_edit = save_edit.clone();
                                                let delete_snack = delete_snack.clone();
                                                view! {
                                                    <InventoryRow
                                                        snack=snack
                                                        busy=busy
                                                        editing=editing
                                                        edit_errors=edit_errors
                                                        on_edit=start_edit
                                                        on_save=save_edit
                                                        on_delete=delete_snack
                                                    />
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </div>
                            }
                            .into_any()
                        }
                    }
                }
            </div>
        </Show>
    }
}

#[component]
fn InventoryRow(
    snack: Snack,
    busy: RwSignal<HashSet<String>>,
    editing: RwSignal<Option<(String, SnackForm)>>,
    edit_errors: RwSignal<ValidationErrors>,
    on_edit: impl Fn(&Snack) + Copy + 'static,
    on_save: impl Fn(String, SnackForm) + Clone + Send + Sync + 'static,
    on_delete: impl Fn(String) + Clone + 'static,
) -> impl IntoView {
    let id = snack.id.clone();
    let row_busy = {
        let id = id.clone();
        move || busy.get().contains(&id)
    };
    let is_editing = {
        let id = id.clone();
        move || matches!(editing.get(), Some((edit_id, _)) if edit_id == id)
    };

    let status_badge = match snack.status {
        SnackStatus::Approved => "badge badge-success",
        SnackStatus::PendingApproval => "badge badge-warning",
        SnackStatus::Rejected => "badge badge-error",
    };

    let edit_form = RwSignal::new(SnackForm::default());
    // Mirror the shared editing slot into a local form signal for binding.
    Effect::new({
        let id = id.clone();
        move |_| {
            if let Some((edit_id, form)) = editing.get() {
                if edit_id == id {
                    edit_form.set(form);
                }
            }
        }
    });

    let save = {
        let id = id.clone();
        move |_| on_save(id.clone(), edit_form.get_untracked())
    };
    let delete = {
        let id = id.clone();
        move |_| on_delete(id.clone())
    };

    let snack_for_edit = snack.clone();

    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body py-4">
                <div class="flex items-center justify-between gap-4">
                    <div>
                        <span class="font-semibold">{snack.snack_name.clone()}</span>
                        <span class=format!("{status_badge} badge-sm ml-2")>
                            {snack.status.label()}
                        </span>
                        <p class="text-sm text-base-content/60">
                            {format!(
                                "${:.2} · {} in stock · SKU {}",
                                snack.price, snack.current_stock, snack.sku,
                            )}
                        </p>
                    </div>
                    <div class="flex gap-2">
                        <button
                            class="btn btn-sm btn-outline"
                            disabled=row_busy.clone()
                            on:click=move |_| on_edit(&snack_for_edit)
                        >
                            "Edit"
                        </button>
                        <button
                            class="btn btn-sm btn-error btn-outline"
                            disabled=row_busy.clone()
                            on:click=delete
                        >
                            "Delete"
                        </button>
                    </div>
                </div>

                <Show when=is_editing.clone()>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-2 mt-3 border-t pt-3">
                        <SnackField
                            id="edit-price" label="Price" input_type="number" form=edit_form
                            setter=|f, v| f.price = v
                            getter=|f| f.price.clone()
                            errors=edit_errors field="price"
                        />
                        <SnackField
                            id="edit-quantity" label="Quantity" input_type="number" form=edit_form
                            setter=|f, v| f.quantity = v
                            getter=|f| f.quantity.clone()
                            errors=edit_errors field="quantity"
                        />
                        <SnackField
                            id="edit-stock" label="Current stock" input_type="number"
                            form=edit_form
                            setter=|f, v| f.current_stock = v
                            getter=|f| f.current_stock.clone()
                            errors=edit_errors field="currentStock"
                        />
                        <SnackField
                            id="edit-reorder" label="Reorder point" input_type="number"
                            form=edit_form
                            setter=|f, v| f.reorder_point = v
                            getter=|f| f.reorder_point.clone()
                            errors=edit_errors field="reorderPoint"
                        />
                        <SnackField
                            id="edit-max" label="Max stock" input_type="number" form=edit_form
                            setter=|f, v| f.max_stock = v
                            getter=|f| f.max_stock.clone()
                            errors=edit_errors field="maxStock"
                        />
                        <SnackField
                            id="edit-expiry" label="Expiry (months)" input_type="number"
                            form=edit_form
                            setter=|f, v| f.expiry_in_months = v
                            getter=|f| f.expiry_in_months.clone()
                            errors=edit_errors field="expiryInMonths"
                        />
                        <div class="flex items-end gap-2 md:col-span-3">
                            <button
                                class="btn btn-sm btn-primary"
                                disabled=row_busy.clone()
                                on:click=save.clone()
                            >
                                "Save"
                            </button>
                            <button
                                class="btn btn-sm btn-ghost"
                                on:click=move |_| editing.set(None)
                            >
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
