//! Router service over the History API.
//!
//! All `window.history` access is concentrated here. Every navigation
//! (link click, initial load, popstate, session change) runs through the
//! guard with a fresh read of the session store, so a logout in another
//! tab is honored on the very next navigation.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, RouteDecision, can_access};
use crate::session::SessionStore;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Applies the guard to a requested route and picks the route that will
/// actually render.
fn resolve(store: &SessionStore, target: AppRoute) -> AppRoute {
    match can_access(&store.get_session(), target.guard()) {
        RouteDecision::Allow => target,
        RouteDecision::RedirectToLogin => {
            web_sys::console::log_1(&"[router] unauthenticated, redirecting to login".into());
            AppRoute::login_redirect()
        }
        RouteDecision::RedirectToHome => {
            web_sys::console::log_1(&"[router] insufficient role, redirecting home".into());
            AppRoute::home_redirect()
        }
    }
}

/// Router service shared through context.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    store: SessionStore,
}

impl RouterService {
    fn new(store: SessionStore) -> Self {
        // The initial URL is guarded too: deep-linking into a protected
        // screen without a session lands on the login page.
        let initial = resolve(&store, AppRoute::from_path(&current_path()));
        replace_history_state(initial.to_path());
        let (current_route, set_route) = signal(initial);

        Self {
            current_route,
            set_route,
            store,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigate to a route, passing through the guard.
    pub fn navigate(&self, target: AppRoute) {
        let resolved = resolve(&self.store, target);
        push_history_state(resolved.to_path());
        self.set_route.set(resolved);
    }

    pub fn navigate_path(&self, path: &str) {
        self.navigate(AppRoute::from_path(path));
    }

    /// Browser back/forward: re-run the guard against the restored URL.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let store = self.store;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            let resolved = resolve(&store, target);
            if resolved != target {
                replace_history_state(resolved.to_path());
            }
            set_route.set(resolved);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the listener alive for the lifetime of the page.
        closure.forget();
    }

    /// Re-check the current route whenever the session signal changes, so
    /// a logout on a guarded screen redirects without a reload.
    fn setup_session_redirect(&self, session: Signal<crate::session::Session>) {
        let current_route = self.current_route;
        let set_route = self.set_route;

        Effect::new(move |_| {
            let session = session.get();
            let route = current_route.get_untracked();

            match can_access(&session, route.guard()) {
                RouteDecision::Allow => {}
                RouteDecision::RedirectToLogin => {
                    let redirect = AppRoute::login_redirect();
                    push_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
                RouteDecision::RedirectToHome => {
                    let redirect = AppRoute::home_redirect();
                    push_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
            }
        });
    }
}

fn provide_router(store: SessionStore, session: Signal<crate::session::Session>) -> RouterService {
    let router = RouterService::new(store);

    router.init_popstate_listener();
    router.setup_session_redirect(session);

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// Returns a navigate closure for event handlers.
pub fn use_navigate() -> impl Fn(AppRoute) + Clone {
    let router = use_router();
    move |to: AppRoute| {
        router.navigate(to);
    }
}

// ============================================================================
// UI components
// ============================================================================

/// Router root. Provides the routing context; place at the top of the app.
#[component]
pub fn Router(
    /// Session store consulted by the guard on every navigation.
    store: SessionStore,
    /// Session signal driving logout redirects.
    session: Signal<crate::session::Session>,
    /// Child components.
    children: Children,
) -> impl IntoView {
    provide_router(store, session);

    children()
}

/// Renders the view matching the current route.
#[component]
pub fn RouterOutlet(
    /// Route matcher: maps the current route to its view.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
