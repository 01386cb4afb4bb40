//! Shared feedback views: transient banners, the access-denied screen and
//! the loading spinner.

use leptos::prelude::*;

use crate::screen::{Banner, Banners};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// Renders the current banner, if any. The slot clears itself after five
/// seconds (see `screen::Banners`).
#[component]
pub fn BannerAlert(banners: Banners) -> impl IntoView {
    move || {
        banners.current().map(|banner| match banner {
            Banner::Success(message) => view! {
                <div role="alert" class="alert alert-success shadow-lg">
                    <span>{message}</span>
                </div>
            }
            .into_any(),
            Banner::Error(message) => view! {
                <div role="alert" class="alert alert-error shadow-lg">
                    <span>{message}</span>
                </div>
            }
            .into_any(),
        })
    }
}

/// Full-screen denial view rendered by guarded screens instead of
/// fetching. With `show_login` it carries the login call-to-action used
/// for unauthenticated visitors.
#[component]
pub fn AccessDenied(
    #[prop(into)] message: String,
    #[prop(optional)] show_login: bool,
) -> impl IntoView {
    let router = use_router();

    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="text-center space-y-4">
                <h2 class="text-3xl font-bold text-error">"Access denied"</h2>
                <p class="text-base-content/70">{message}</p>
                <Show when=move || show_login>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| router.navigate(AppRoute::login_redirect())
                    >
                        "Log in"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[40vh]">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}
