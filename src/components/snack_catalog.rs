//! Approved-snacks catalog.
//!
//! Any authenticated session may browse. The screen re-checks the session
//! defensively before fetching, mirroring the route guard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::feedback::{AccessDenied, LoadingView};
use crate::error::UiError;
use crate::model::Snack;
use crate::screen::FetchState;

const ALL_TYPES: &str = "ALL";

/// Case-insensitive match against the fields a shopper searches by. An
/// empty query matches everything.
fn matches_search(snack: &Snack, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    snack.snack_name.to_lowercase().contains(&query)
        || snack.description.to_lowercase().contains(&query)
        || snack.snack_type.to_lowercase().contains(&query)
}

#[component]
pub fn SnackCatalogPage() -> impl IntoView {
    let ctx = use_auth();
    let api = expect_context::<ApiClient>();
    let session = ctx.session();

    let state = RwSignal::new(FetchState::<Snack>::Idle);
    let type_filter = RwSignal::new(ALL_TYPES.to_string());
    let search = RwSignal::new(String::new());

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
                match api.approved_snacks(&token).await {
                    Ok(snacks) => state.set(FetchState::Loaded(snacks)),
                    Err(err) => state.set(FetchState::Failed(err.into())),
                }
            });
        }
    };

    Effect::new({
        let load = load.clone();
        move |_| {
            if session.get().is_authenticated() && matches!(state.get_untracked(), FetchState::Idle)
            {
                load();
            }
        }
    });

    let snack_types = move || {
        let mut types: Vec<String> = state
            .get()
            .items()
            .map(|snacks| snacks.iter().map(|s| s.snack_type.clone()).collect())
            .unwrap_or_default();
        types.sort();
        types.dedup();
        types
    };

    let visible = move || {
        let filter = type_filter.get();
        let query = search.get();
        state
            .get()
            .items()
            .map(|snacks| {
                snacks
                    .iter()
                    .filter(|s| filter == ALL_TYPES || s.snack_type == filter)
                    .filter(|s| matches_search(s, &query))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    };

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| {
                view! {
                    <AccessDenied
                        message="Log in to browse the snack catalog."
                        show_login=true
                    />
                }
            }
        >
            <div class="max-w-6xl mx-auto p-6 space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-3xl font-bold">"Vegan snacks"</h1>
                    <div class="flex gap-2">
                        <input
                            type="search"
                            class="input input-bordered input-sm"
                            placeholder="Search snacks..."
                            on:input=move |ev| search.set(event_target_value(&ev))
                            prop:value=search
                        />
                        <select
                            class="select select-bordered select-sm"
                            on:change=move |ev| type_filter.set(event_target_value(&ev))
                        >
                            <option value=ALL_TYPES selected>"All types"</option>
                            {move || {
                                snack_types()
                                    .into_iter()
                                    .map(|t| view! { <option value=t.clone()>{t.clone()}</option> })
                                    .collect_view()
                            }}
                        </select>
                        <button class="btn btn-sm btn-ghost" on:click={
                            let load = load.clone();
                            move |_| load()
                        }>
                            "Refresh"
                        </button>
                    </div>
                </div>

                {move || match state.get() {
                    FetchState::Idle | FetchState::Loading => view! { <LoadingView /> }.into_any(),
                    FetchState::Failed(err) => view! {
                        <div role="alert" class="alert alert-error">
                            <span>{err.message()}</span>
                        </div>
                    }
                    .into_any(),
                    FetchState::Loaded(_) => view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                            {move || {
                                visible()
                                    .into_iter()
                                    .map(|snack| view! { <SnackCard snack=snack /> })
                                    .collect_view()
                            }}
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </Show>
    }
}

#[component]
fn SnackCard(snack: Snack) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-md">
            <div class="card-body">
                <div class="flex items-start justify-between">
                    <h2 class="card-title">{snack.snack_name.clone()}</h2>
                    <span class="badge badge-ghost">{snack.snack_type.clone()}</span>
                </div>
                <p class="text-sm text-base-content/70">{snack.description.clone()}</p>
                <p class="text-xs text-base-content/50">
                    "Ingredients: " {snack.ingredients.clone()}
                </p>
                <div class="card-actions items-center justify-between mt-2">
                    <span class="text-lg font-semibold text-primary">
                        {format!("${:.2}", snack.price)}
                    </span>
                    <span class="text-sm text-base-content/60">
                        {format!("{} in stock", snack.current_stock)}
                    </span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snack(name: &str, description: &str, snack_type: &str) -> Snack {
        Snack {
            id: name.to_string(),
            snack_name: name.to_string(),
            description: description.to_string(),
            snack_type: snack_type.to_string(),
            ..Snack::default()
        }
    }

    #[test]
    fn search_matches_name_description_and_type_case_insensitively() {
        let kale = snack("Kale Chips", "Crunchy baked kale", "Chips");
        assert!(matches_search(&kale, "KALE"));
        assert!(matches_search(&kale, "crunchy"));
        assert!(matches_search(&kale, "chips"));
        assert!(!matches_search(&kale, "chocolate"));
    }

    #[test]
    fn blank_query_matches_everything() {
        let bar = snack("Date Bar", "Sweet and chewy", "Bars");
        assert!(matches_search(&bar, ""));
        assert!(matches_search(&bar, "   "));
    }
}
