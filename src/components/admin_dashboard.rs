//! Admin landing page: shortcuts into the staff tools.

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::feedback::AccessDenied;
use crate::model::Role;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let ctx = use_auth();
    let session = ctx.session();
    let router = use_router();

    let shortcuts: &[(AppRoute, &str, &str)] = &[
        (
            AppRoute::ApproveVendors,
            "Vendor applications",
            "Review and approve new vendor accounts.",
        ),
        (
            AppRoute::ApproveSnacks,
            "Snack review queue",
            "Approve or reject newly listed snacks.",
        ),
        (
            AppRoute::CreateProductManager,
            "Product managers",
            "Provision a new product-manager account.",
        ),
    ];

    view! {
        <Show
            when=move || session.get().has_role(&[Role::Admin])
            fallback=move || {
                let signed_in = session.get_untracked().is_authenticated();
                view! {
                    <AccessDenied
                        message="The admin dashboard is restricted to administrators."
                        show_login=!signed_in
                    />
                }
            }
        >
            <div class="max-w-4xl mx-auto p-6 space-y-6">
                <h1 class="text-3xl font-bold">"Admin dashboard"</h1>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {shortcuts
                        .iter()
                        .map(|&(route, title, blurb)| {
                            view! {
                                <button
                                    class="card bg-base-100 shadow-md hover:shadow-lg text-left"
                                    on:click=move |_| router.navigate(route)
                                >
                                    <div class="card-body">
                                        <h2 class="card-title text-lg">{title}</h2>
                                        <p class="text-sm text-base-content/70">{blurb}</p>
                                    </div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}
