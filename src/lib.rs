//! SnackLeaf marketplace frontend.
//!
//! Context-driven architecture:
//! - `web::route` / `web::router`: route definitions and the guard-aware
//!   routing engine
//! - `session` / `auth`: persisted session state and the auth operations
//! - `api`: typed REST client for the backend
//! - `components`: screens and shared UI pieces

mod api;
mod auth;
mod error;
mod model;
mod screen;
mod session;
mod validate;

mod components {
    pub mod add_snack;
    pub mod admin_dashboard;
    pub mod approve_snacks;
    pub mod approve_vendors;
    pub mod create_product_manager;
    mod feedback;
    mod form;
    pub mod home;
    pub mod inventory;
    pub mod navbar;
    pub mod snack_catalog;
    pub mod staff_login;
    pub mod user_auth;
}

// Native Web API wrappers. Thin layers over `web_sys` instead of the
// gloo-* storage/timer crates to keep the WASM binary small.
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::{LocalStorage, on_storage_change};
}

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::auth::provide_auth;
use crate::components::add_snack::AddSnackPage;
use crate::components::admin_dashboard::AdminDashboardPage;
use crate::components::approve_snacks::ApproveSnacksPage;
use crate::components::approve_vendors::ApproveVendorsPage;
use crate::components::create_product_manager::CreateProductManagerPage;
use crate::components::home::HomePage;
use crate::components::inventory::InventoryPage;
use crate::components::navbar::NavBar;
use crate::components::snack_catalog::SnackCatalogPage;
use crate::components::staff_login::StaffLoginPage;
use crate::components::user_auth::UserAuthPage;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// Maps the current route to its screen. Routes arrive here already
/// guard-checked by the router.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Auth => view! { <UserAuthPage /> }.into_any(),
        AppRoute::StaffLogin => view! { <StaffLoginPage /> }.into_any(),
        AppRoute::Snacks => view! { <SnackCatalogPage /> }.into_any(),
        AppRoute::AddSnack => view! { <AddSnackPage /> }.into_any(),
        AppRoute::Inventory => view! { <InventoryPage /> }.into_any(),
        AppRoute::ApproveVendors => view! { <ApproveVendorsPage /> }.into_any(),
        AppRoute::ApproveSnacks => view! { <ApproveSnacksPage /> }.into_any(),
        AppRoute::CreateProductManager => view! { <CreateProductManagerPage /> }.into_any(),
        AppRoute::Admin => view! { <AdminDashboardPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Session context first: the router's guard reads through it.
    let auth_ctx = provide_auth();
    provide_context(ApiClient::default());

    view! {
        <Router store=auth_ctx.store() session=auth_ctx.session_signal()>
            <NavBar />
            <main class="pt-16 min-h-screen bg-base-200">
                <RouterOutlet matcher=route_matcher />
            </main>
            <footer class="footer footer-center bg-base-100 text-base-content/60 p-4">
                <p>"SnackLeaf: plant-based snacks from independent vendors"</p>
            </footer>
        </Router>
    }
}
