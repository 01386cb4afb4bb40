//! Staff: snack review queue.
//!
//! Same per-row review flow as the vendor queue: pending listings shown
//! by default, decided rows patched in place.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::feedback::{AccessDenied, BannerAlert, LoadingView};
use crate::error::UiError;
use crate::model::{Snack, SnackStatus};
use crate::screen::{Banners, FetchState, patch_by_id};
use crate::web::route::STAFF_ROLES;

/// Applies the queue's status filter; `None` shows every listing.
fn visible_snacks(snacks: &[Snack], filter: Option<SnackStatus>) -> Vec<Snack> {
    snacks
        .iter()
        .filter(|s| filter.is_none_or(|status| s.status == status))
        .cloned()
        .collect()
}

#[component]
pub fn ApproveSnacksPage() -> impl IntoView {
    let ctx = use_auth();
    let api = expect_context::<ApiClient>();
    let session = ctx.session();

    let state = RwSignal::new(FetchState::<Snack>::Idle);
    let busy = RwSignal::new(HashSet::<String>::new());
    // Reviewers land on the work that still needs a decision.
    let status_filter = RwSignal::new(Some(SnackStatus::PendingApproval));
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
                match api.snacks_under_review(&token).await {
                    Ok(snacks) => state.set(FetchState::Loaded(snacks)),
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
                    api.approve_snack(&id, &token).await
                } else {
                    api.reject_snack(&id, &token).await
                };
                match outcome {
                    Ok(_) => {
                        state.update(|s| {
                            if let FetchState::Loaded(snacks) = s {
                                patch_by_id(snacks, &id, |s| &s.id, |row| {
                                    row.status = if approve {
                                        SnackStatus::Approved
                                    } else {
                                        SnackStatus::Rejected
                                    };
                                });
                            }
                        });
                        banners.success(if approve {
                            "Snack approved."
                        } else {
                            "Snack rejected."
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
                        message="Snack review is restricted to staff accounts."
                        show_login=!signed_in
                    />
                }
            }
        >
            <div class="max-w-5xl mx-auto p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h1 class="text-3xl font-bold">"Snacks under review"</h1>
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
                            <option value="PENDING_APPROVAL" selected>"Pending approval"</option>
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
                        FetchState::Loaded(snacks) => {
                            let review = review.clone();
                            view! {
                                <div class="space-y-3">
                                    {move || {
                                        let review = review.clone();
                                        visible_snacks(&snacks, status_filter.get())
                                            .into_iter()
                                            .map(move |snack| {
                                                let review = review.clone();
                                                view! {
                                                    <ReviewRow snack=snack busy=busy on_review=review />
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
fn ReviewRow(
    snack: Snack,
    busy: RwSignal<HashSet<String>>,
    on_review: impl Fn(String, bool) + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let id = snack.id.clone();
    let row_busy = {
        let id = id.clone();
        move || busy.get().contains(&id)
    };
    let pending = snack.status == SnackStatus::PendingApproval;

    let status_badge = match snack.status {
        SnackStatus::Approved => "badge badge-success",
        SnackStatus::PendingApproval => "badge badge-warning",
        SnackStatus::Rejected => "badge badge-error",
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
                        <span class="font-semibold">{snack.snack_name.clone()}</span>
                        <span class="badge badge-ghost badge-sm ml-2">
                            {snack.snack_type.clone()}
                        </span>
                        <span class=format!("{status_badge} badge-sm ml-2")>
                            {snack.status.label()}
                        </span>
                        <p class="text-sm text-base-content/60">
                            {format!("${:.2} · SKU {}", snack.price, snack.sku)}
                        </p>
                        <p class="text-sm text-base-content/70">{snack.description.clone()}</p>
                        <p class="text-xs text-base-content/50">
                            "Ingredients: " {snack.ingredients.clone()}
                        </p>
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

    fn snack(id: &str, status: SnackStatus) -> Snack {
        Snack {
            id: id.to_string(),
            snack_name: format!("Snack {id}"),
            status,
            ..Snack::default()
        }
    }

    #[test]
    fn default_pending_filter_hides_decided_listings() {
        let queue = vec![
            snack("a", SnackStatus::PendingApproval),
            snack("b", SnackStatus::Approved),
            snack("c", SnackStatus::Rejected),
        ];

        let pending = visible_snacks(&queue, Some(SnackStatus::PendingApproval));
        let ids: Vec<&str> = pending.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a"]);
    }

    #[test]
    fn clearing_the_filter_shows_every_listing() {
        let queue = vec![
            snack("a", SnackStatus::Approved),
            snack("b", SnackStatus::PendingApproval),
        ];
        assert_eq!(visible_snacks(&queue, None).len(), 2);
        assert_eq!(
            visible_snacks(&queue, Some(SnackStatus::Rejected)).len(),
            0,
        );
    }
}
