//! Route definitions and the access decision.
//!
//! Pure domain logic: no DOM or `web_sys` in here, so the guard laws are
//! unit-testable on any target.

use crate::model::Role;
use crate::session::Session;
use std::fmt::Display;

/// The roles allowed to work the approval queues.
pub const STAFF_ROLES: &[Role] = &[Role::ProductManager, Role::Admin];
const VENDOR_ONLY: &[Role] = &[Role::Vendor];
const ADMIN_ONLY: &[Role] = &[Role::Admin];
/// Any authenticated session, no particular role.
const ANY_AUTHENTICATED: &[Role] = &[];

/// Application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Public landing page (default route).
    #[default]
    Home,
    /// Combined user/vendor login and signup.
    Auth,
    /// Staff (admin / product manager) login.
    StaffLogin,
    /// Approved-snacks catalog.
    Snacks,
    /// Vendor: list a new snack.
    AddSnack,
    /// Vendor: inventory management.
    Inventory,
    /// Staff: vendor approval queue.
    ApproveVendors,
    /// Staff: snack approval queue.
    ApproveSnacks,
    /// Admin: create a product manager account.
    CreateProductManager,
    /// Admin overview.
    Admin,
}

/// Outcome of a guarded navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

impl AppRoute {
    /// Parses a URL path. Unknown paths fall back to the landing page.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Home,
            "/auth" => Self::Auth,
            "/staff-login" => Self::StaffLogin,
            "/snacks" => Self::Snacks,
            "/add-snack" => Self::AddSnack,
            "/inventory" => Self::Inventory,
            "/approve-vendors" => Self::ApproveVendors,
            "/approve-snacks" => Self::ApproveSnacks,
            "/create-product-manager" => Self::CreateProductManager,
            "/admin" => Self::Admin,
            _ => Self::Home,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Auth => "/auth",
            Self::StaffLogin => "/staff-login",
            Self::Snacks => "/snacks",
            Self::AddSnack => "/add-snack",
            Self::Inventory => "/inventory",
            Self::ApproveVendors => "/approve-vendors",
            Self::ApproveSnacks => "/approve-snacks",
            Self::CreateProductManager => "/create-product-manager",
            Self::Admin => "/admin",
        }
    }

    /// Access requirement: `None` is public, `Some(&[])` needs any
    /// authenticated session, a non-empty slice needs one of the roles.
    pub fn guard(&self) -> Option<&'static [Role]> {
        match self {
            Self::Home | Self::Auth | Self::StaffLogin => None,
            Self::Snacks => Some(ANY_AUTHENTICATED),
            Self::AddSnack | Self::Inventory => Some(VENDOR_ONLY),
            Self::ApproveVendors | Self::ApproveSnacks => Some(STAFF_ROLES),
            Self::CreateProductManager | Self::Admin => Some(ADMIN_ONLY),
        }
    }

    /// Where a denied-because-unauthenticated navigation lands.
    pub fn login_redirect() -> Self {
        Self::Auth
    }

    /// Where a denied-because-wrong-role navigation lands.
    pub fn home_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// The route guard. Re-evaluated with a fresh session read on every
/// navigation; never cached.
pub fn can_access(session: &Session, required: Option<&[Role]>) -> RouteDecision {
    let Some(required) = required else {
        return RouteDecision::Allow;
    };

    if !session.is_authenticated() {
        return RouteDecision::RedirectToLogin;
    }

    if !required.is_empty() && !session.has_role(required) {
        return RouteDecision::RedirectToHome;
    }

    RouteDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Option<Role>) -> Session {
        Session {
            token: Some("tok".into()),
            role,
            subject_id: Some("id-1".into()),
            email: None,
        }
    }

    #[test]
    fn unauthenticated_always_redirects_to_login() {
        let anon = Session::default();
        for route in [
            AppRoute::Snacks,
            AppRoute::AddSnack,
            AppRoute::Inventory,
            AppRoute::ApproveVendors,
            AppRoute::ApproveSnacks,
            AppRoute::CreateProductManager,
            AppRoute::Admin,
        ] {
            assert_eq!(
                can_access(&anon, route.guard()),
                RouteDecision::RedirectToLogin,
                "route {route}",
            );
        }
    }

    #[test]
    fn wrong_role_redirects_home() {
        assert_eq!(
            can_access(&session(Some(Role::User)), AppRoute::Inventory.guard()),
            RouteDecision::RedirectToHome,
        );
        assert_eq!(
            can_access(&session(Some(Role::Vendor)), AppRoute::ApproveSnacks.guard()),
            RouteDecision::RedirectToHome,
        );
        assert_eq!(
            can_access(
                &session(Some(Role::ProductManager)),
                AppRoute::CreateProductManager.guard(),
            ),
            RouteDecision::RedirectToHome,
        );
    }

    #[test]
    fn matching_role_is_allowed() {
        assert_eq!(
            can_access(&session(Some(Role::Vendor)), AppRoute::AddSnack.guard()),
            RouteDecision::Allow,
        );
        assert_eq!(
            can_access(
                &session(Some(Role::ProductManager)),
                AppRoute::ApproveVendors.guard(),
            ),
            RouteDecision::Allow,
        );
        assert_eq!(
            can_access(&session(Some(Role::Admin)), AppRoute::Admin.guard()),
            RouteDecision::Allow,
        );
    }

    #[test]
    fn any_authenticated_session_may_browse_the_catalog() {
        for role in [Role::User, Role::Vendor, Role::ProductManager, Role::Admin] {
            assert_eq!(
                can_access(&session(Some(role)), AppRoute::Snacks.guard()),
                RouteDecision::Allow,
            );
        }
    }

    #[test]
    fn public_routes_ignore_the_session() {
        let anon = Session::default();
        for route in [AppRoute::Home, AppRoute::Auth, AppRoute::StaffLogin] {
            assert_eq!(can_access(&anon, route.guard()), RouteDecision::Allow);
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(AppRoute::from_path("/no-such-page"), AppRoute::Home);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::Auth,
            AppRoute::StaffLogin,
            AppRoute::Snacks,
            AppRoute::AddSnack,
            AppRoute::Inventory,
            AppRoute::ApproveVendors,
            AppRoute::ApproveSnacks,
            AppRoute::CreateProductManager,
            AppRoute::Admin,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }
}
