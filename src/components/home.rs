//! Public landing page.

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_auth();
    let router = use_router();
    let session = ctx.session();

    // Browsing needs a session; send visitors to login first.
    let browse = move |_| {
        if session.get_untracked().is_authenticated() {
            router.navigate(AppRoute::Snacks);
        } else {
            router.navigate(AppRoute::Auth);
        }
    };

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-lg space-y-6">
                    <h1 class="text-5xl font-bold text-primary">"SnackLeaf"</h1>
                    <p class="text-lg text-base-content/70">
                        "A marketplace for vegan snacks. Browse approved treats, or join as a vendor and list your own."
                    </p>
                    <div class="flex gap-4 justify-center">
                        <button class="btn btn-primary" on:click=browse>
                            "Browse snacks"
                        </button>
                        <button
                            class="btn btn-outline"
                            on:click=move |_| router.navigate(AppRoute::Auth)
                        >
                            "Become a vendor"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
