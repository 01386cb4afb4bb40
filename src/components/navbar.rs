//! Session-reactive navigation bar.
//!
//! Recomputes its link set and login/logout affordance from the session
//! signal, so a login, a logout or a cross-tab storage change re-renders
//! it without a reload.

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::model::Role;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// Role-specific link set. Everyone sees the base links; vendors get
/// inventory tools, staff get the approval queues, admins additionally
/// get product-manager creation.
fn links_for(role: Option<Role>) -> Vec<(AppRoute, &'static str)> {
    let mut links = vec![(AppRoute::Home, "Home"), (AppRoute::Snacks, "Snacks")];
    match role {
        Some(Role::Vendor) => {
            links.push((AppRoute::AddSnack, "Add Snack"));
            links.push((AppRoute::Inventory, "Inventory"));
        }
        Some(Role::ProductManager) => {
            links.push((AppRoute::ApproveVendors, "Approve Vendors"));
            links.push((AppRoute::ApproveSnacks, "Approve Snacks"));
        }
        Some(Role::Admin) => {
            links.push((AppRoute::ApproveVendors, "Approve Vendors"));
            links.push((AppRoute::ApproveSnacks, "Approve Snacks"));
            links.push((AppRoute::CreateProductManager, "Create PM"));
        }
        Some(Role::User) | None => {}
    }
    links
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_auth();
    let router = use_router();
    let session = ctx.session();
    let current_route = router.current_route();

    let is_authenticated = move || session.get().is_authenticated();
    let display_email = move || session.get().email.unwrap_or_default();
    let display_role = move || {
        session
            .get()
            .role
            .map(|role| role.label())
            .unwrap_or_default()
    };

    // Guard-before-navigate: any role-sensitive link clicked while signed
    // out goes to the login screen instead of its destination.
    let handle_nav = move |route: AppRoute| {
        if route.guard().is_some() && !session.get_untracked().is_authenticated() {
            router.navigate(AppRoute::login_redirect());
        } else {
            router.navigate(route);
        }
    };

    let on_logout = move |_| {
        ctx.logout();
        router.navigate(AppRoute::Home);
    };

    view! {
        <nav class="navbar bg-base-100 shadow-md fixed top-0 z-40 px-4">
            <div class="flex-1">
                <button
                    class="btn btn-ghost text-xl text-primary font-bold"
                    on:click=move |_| router.navigate(AppRoute::Home)
                >
                    "🌱 SnackLeaf"
                </button>
                <div class="hidden md:flex gap-1">
                    {move || {
                        let current = current_route.get();
                        links_for(session.get().role)
                            .into_iter()
                            .map(|(route, label)| {
                                let active = if route == current { "btn-active" } else { "" };
                                view! {
                                    <button
                                        class=format!("btn btn-ghost btn-sm {active}")
                                        on:click=move |_| handle_nav(route)
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=is_authenticated
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn-ghost btn-sm"
                                on:click=move |_| router.navigate(AppRoute::StaffLogin)
                            >
                                "Staff"
                            </button>
                            <button
                                class="btn btn-primary btn-sm"
                                on:click=move |_| router.navigate(AppRoute::Auth)
                            >
                                "Log in"
                            </button>
                        }
                    }
                >
                    <span class="badge badge-outline">{display_role}</span>
                    <span class="text-sm text-base-content/70 hidden sm:inline">
                        {display_email}
                    </span>
                    <button class="btn btn-outline btn-sm" on:click=on_logout>
                        "Log out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes(role: Option<Role>) -> Vec<AppRoute> {
        links_for(role).into_iter().map(|(route, _)| route).collect()
    }

    #[test]
    fn signed_out_and_plain_users_see_only_the_base_links() {
        assert_eq!(routes(None), [AppRoute::Home, AppRoute::Snacks]);
        assert_eq!(routes(Some(Role::User)), [AppRoute::Home, AppRoute::Snacks]);
    }

    #[test]
    fn vendors_get_inventory_tools() {
        assert_eq!(
            routes(Some(Role::Vendor)),
            [
                AppRoute::Home,
                AppRoute::Snacks,
                AppRoute::AddSnack,
                AppRoute::Inventory,
            ],
        );
    }

    #[test]
    fn only_admins_get_the_create_pm_link() {
        assert!(!routes(Some(Role::ProductManager)).contains(&AppRoute::CreateProductManager));
        assert!(routes(Some(Role::Admin)).contains(&AppRoute::CreateProductManager));
    }
}
