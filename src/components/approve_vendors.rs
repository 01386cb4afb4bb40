//! Staff: vendor approval queue.
//!
//! Shows applications still pending by default; approve/reject act per
//! row, and on success the row's status is patched in place rather than
//! refetching the whole queue.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::feedback::{AccessDenied, BannerAlert, LoadingView};
use crate::error::UiError;
use crate::model::{Vendor, VendorStatus};
use crate::screen::{Banners, FetchState, patch_by_id};
use crate::web::route::STAFF_ROLES;

/// Applies the queue's status filter; `None` shows every application.
fn visible_vendors(vendors: &[Vendor], filter: Option<VendorStatus>) -> Vec<Vendor> {
    vendors
        .iter()
        .filter(|v| filter.is_none_or(|status| v.status == status))
        .cloned()
        .collect()
}

#[component]
pub fn ApproveVendorsPage() -> impl IntoView {
    let ctx = use_auth();
    let api = expect_context::<ApiClient>();
    let session = ctx.session();

    let state = RwSignal::new(FetchState::<Vendor>::Idle);
    let busy = RwSignal::new(HashSet::<String>::new());
    // Reviewers land on the work that still needs a decision.
    let status_filter = RwSignal::new(Some(VendorStatus::Pending));
    let banners = Banners::new();

    let load = {
        let api = api.clone();
        move || {
            let Some(token) = ctx.store().token() else {
                state.set(FetchState::Failed(UiError::AuthRequired));
                return;
            };
            state.set(FetchState::Loading);
            let api = api.clone();
            spawn_local(async move {
                match api.vendors(&token).await {
                    Ok(vendors) => state.set(FetchState::Loaded(vendors)),
                    Err(err) => state.set(FetchState::Failed(err.into())),
                }
            });
        }
    };

    Effect::new({
        let load = load.clone();
        move |_| {
            if session.get().has_role(STAFF_ROLES)
                && matches!(state.get_untracked(), FetchState::Idle)
            {
                load();
            }
        }
    });

    let review = {
        let api = api.clone();
        move |id: String, approve: bool| {
            let Some(token) = ctx.store().token() else {
                banners.error(UiError::AuthRequired.message());
                return;
            };

            busy.update(|set| {
                set.insert(id.clone());
            });
            let api = api.clone();
            spawn_local(async move {
                let outcome = if approve {
                    api.approve_vendor(&id, &token).await
                } else {
                    api.reject_vendor(&id, &token).await
                };
                match outcome {
                    Ok(_) => {
                        state.update(|s| {
                            if let FetchState::Loaded(vendors) = s {
                                patch_by_id(vendors, &id, |v| &v.id, |row| {
                                    row.status = if approve {
                                        VendorStatus::Approved
                                    } else {
                                        VendorStatus::Rejected
                                    };
                                });
                            }
                        });
                        banners.success(if approve {
                            "Vendor approved."
                        } else {
                            "Vendor rejected."
                        });
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
            when=move || session.get().has_role(STAFF_ROLES)
            fallback=move || {
                let signed_in = session.get_untracked().is_authenticated();
                view! {
                    <AccessDenied
                        message="Vendor review is restricted to staff accounts."
                        show_login=!signed_in
                    />
                }
            }
        >
            <div class="max-w-5xl mx-auto p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h1 class="text-3xl font-bold">"Vendor applications"</h1>
                    <div class="flex gap-2">
                        <select
                            class="select select-bordered select-sm"
                            on:change=move |ev| {
                                status_filter.set(match event_target_value(&ev).as_str() {
                                    "PENDING" => Some(VendorStatus::Pending),
                                    "APPROVED" => Some(VendorStatus::Approved),
                                    "REJECTED" => Some(VendorStatus::Rejected),
                                    _ => None,
                                })
                            }
                        >
                            <option value="PENDING" selected>"Pending"</option>
                            <option value="APPROVED">"Approved"</option>
                            <option value="REJECTED">"Rejected"</option>
                            <option value="ALL">"All statuses"</option>
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
                    let review = review.clone();
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
                        FetchState::Loaded(vendors) => {
                            let review = review.clone();
                            view! {
                                <div class="space-y-3">
                                    {move || {
                                        let review = review.clone();
                                        visible_vendors(&vendors, status_filter.get())
                                            .into_iter()
                                            .map(move |vendor| {
                                                let review = review.clone();
                                                view! {
                                                    <VendorRow vendor=vendor busy=busy on_review=review />
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
fn VendorRow(
    vendor: Vendor,
    busy: RwSignal<HashSet<String>>,
    on_review: impl Fn(String, bool) + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let id = vendor.id.clone();
    let row_busy = {
        let id = id.clone();
        move || busy.get().contains(&id)
    };
    let pending = vendor.status == VendorStatus::Pending;

    let status_badge = match vendor.status {
        VendorStatus::Approved => "badge badge-success",
        VendorStatus::Pending => "badge badge-warning",
        VendorStatus::Rejected => "badge badge-error",
    };

    let approve = {
        let id = id.clone();
        let on_review = on_review.clone();
        move |_| on_review(id.clone(), true)
    };
    let reject = {
        let id = id.clone();
        move |_| on_review(id.clone(), false)
    };

    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body py-4">
                <div class="flex items-start justify-between gap-4">
                    <div>
                        <span class="font-semibold">{vendor.business_name.clone()}</span>
                        <span class=format!("{status_badge} badge-sm ml-2")>
                            {vendor.status.label()}
                        </span>
                        <p class="text-sm text-base-content/60">
                            {vendor.email.clone()} " · License " {vendor.business_license_number.clone()}
                            " · Tax ID " {vendor.tax_id.clone()}
                        </p>
                        <p class="text-sm text-base-content/60">{vendor.business_address.clone()}</p>
                        <Show when={
                            let description = vendor.business_description.clone();
                            move || !description.is_empty()
                        }>
                            <p class="text-sm mt-1">{vendor.business_description.clone()}</p>
                        </Show>
                    </div>
                    <Show when=move || pending>
                        <div class="flex gap-2">
                            <button
                                class="btn btn-sm btn-success"
                                disabled=row_busy.clone()
                                on:click=approve.clone()
                            >
                                "Approve"
                            </button>
                            <button
                                class="btn btn-sm btn-error btn-outline"
                                disabled=row_busy.clone()
                                on:click=reject.clone()
                            >
                                "Reject"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(id: &str, status: VendorStatus) -> Vendor {
        Vendor {
            id: id.to_string(),
            business_name: format!("Shop {id}"),
            status,
            ..Vendor::default()
        }
    }

    #[test]
    fn default_pending_filter_hides_decided_applications() {
        let queue = vec![
            vendor("a", VendorStatus::Pending),
            vendor("b", VendorStatus::Approved),
            vendor("c", VendorStatus::Rejected),
            vendor("d", VendorStatus::Pending),
        ];

        let pending = visible_vendors(&queue, Some(VendorStatus::Pending));
        let ids: Vec<&str> = pending.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["a", "d"]);
    }

    #[test]
    fn clearing_the_filter_shows_every_application() {
        let queue = vec![
            vendor("a", VendorStatus::Approved),
            vendor("b", VendorStatus::Rejected),
        ];
        assert_eq!(visible_vendors(&queue, None).len(), 2);
        assert!(visible_vendors(&queue, Some(VendorStatus::Pending)).is_empty());
    }
}
