//! Authentication state and operations.
//!
//! `AuthContext` carries the session as a Leptos signal shared through
//! context: updating the signal IS the auth-changed notification, so every
//! listener (navbar, router redirect effect, screens) is statically known.
//! All three login flows go through one response parser and one storage
//! write; no screen touches the session keys directly.

use leptos::prelude::*;
use serde_json::Value;

use crate::api::{ApiClient, RequestError};
use crate::model::{LoginRequest, NewProductManager, Role};
use crate::session::{Session, SessionStorage, SessionStore};
use crate::web::route::AppRoute;

/// Parsed outcome of a successful login, tagged by who logged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginResult {
    User { user_id: String },
    Vendor { vendor_id: String },
    Staff { role: Role, user_id: String },
}

impl LoginResult {
    pub fn role(&self) -> Role {
        match self {
            LoginResult::User { .. } => Role::User,
            LoginResult::Vendor { .. } => Role::Vendor,
            LoginResult::Staff { role, .. } => *role,
        }
    }

    pub fn subject_id(&self) -> &str {
        match self {
            LoginResult::User { user_id } => user_id,
            LoginResult::Vendor { vendor_id } => vendor_id,
            LoginResult::Staff { user_id, .. } => user_id,
        }
    }

    /// Where the UI lands after this login.
    pub fn landing_route(&self) -> AppRoute {
        match self.role() {
            Role::User => AppRoute::Home,
            Role::Vendor => AppRoute::AddSnack,
            Role::ProductManager | Role::Admin => AppRoute::ApproveVendors,
        }
    }
}

/// Reads an identifier that the backend may send as a string or a number.
fn id_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// The single login-response parser.
///
/// `expected` pins the role for the user/vendor endpoints; the staff
/// endpoint passes `None` and takes the role the server returns (ADMIN or
/// PRODUCT_MANAGER).
pub fn parse_login_response(
    expected: Option<Role>,
    value: &Value,
) -> Result<(String, LoginResult), RequestError> {
    let token = value
        .get("token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| RequestError::transport("login response is missing a token"))?
        .to_string();

    let result = match expected {
        Some(Role::User) => {
            let user_id = id_field(value, "userId")
                .ok_or_else(|| RequestError::transport("login response is missing userId"))?;
            LoginResult::User { user_id }
        }
        Some(Role::Vendor) => {
            let vendor_id = id_field(value, "vendorId")
                .ok_or_else(|| RequestError::transport("login response is missing vendorId"))?;
            LoginResult::Vendor { vendor_id }
        }
        _ => {
            let role = value
                .get("role")
                .and_then(Value::as_str)
                .and_then(Role::parse)
                .filter(Role::is_staff)
                .ok_or_else(|| {
                    RequestError::transport("login response carries no staff role")
                })?;
            let user_id = id_field(value, "userId")
                .ok_or_else(|| RequestError::transport("login response is missing userId"))?;
            LoginResult::Staff { role, user_id }
        }
    };

    Ok((token, result))
}

/// Writes a parsed login into the session store.
pub(crate) fn store_login<S: SessionStorage>(
    store: &SessionStore<S>,
    token: &str,
    result: &LoginResult,
    email: &str,
) {
    store.set_session(token, result.role(), result.subject_id(), Some(email));
}

/// Session state shared through context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: ReadSignal<Session>,
    set_session: WriteSignal<Session>,
    store: SessionStore,
}

impl AuthContext {
    pub fn new() -> Self {
        let store = SessionStore::default();
        // Restore whatever session the last visit left behind.
        let (session, set_session) = signal(store.get_session());
        Self {
            session,
            set_session,
            store,
        }
    }

    pub fn session(&self) -> ReadSignal<Session> {
        self.session
    }

    pub fn session_signal(&self) -> Signal<Session> {
        self.session.into()
    }

    pub fn store(&self) -> SessionStore {
        self.store
    }

    /// Re-reads the store into the signal. This is the auth-changed
    /// notification: every subscriber recomputes its derived state.
    pub fn refresh(&self) {
        self.set_session.set(self.store.get_session());
    }

    /// Clears the session. Navigation afterwards is the caller's job.
    pub fn logout(&self) {
        self.store.clear_session();
        self.refresh();
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the context, provides it, and wires the cross-tab `storage`
/// listener so a logout elsewhere is reflected here.
pub fn provide_auth() -> AuthContext {
    let ctx = AuthContext::new();
    provide_context(ctx);

    crate::web::on_storage_change(move || ctx.refresh());

    ctx
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

// =========================================================
// Operations
// =========================================================

async fn login_with(
    ctx: AuthContext,
    email: &str,
    expected: Option<Role>,
    response: Result<Value, RequestError>,
) -> Result<LoginResult, RequestError> {
    // A failed login must never disturb an existing session; the store is
    // only written after the response parsed cleanly.
    let response = response?;
    let (token, result) = parse_login_response(expected, &response)?;
    store_login(&ctx.store(), &token, &result, email);
    ctx.refresh();
    Ok(result)
}

pub async fn login_user(
    ctx: AuthContext,
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<LoginResult, RequestError> {
    let credentials = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response = api.login_user(&credentials).await;
    login_with(ctx, email, Some(Role::User), response).await
}

pub async fn login_vendor(
    ctx: AuthContext,
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<LoginResult, RequestError> {
    let credentials = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response = api.login_vendor(&credentials).await;
    login_with(ctx, email, Some(Role::Vendor), response).await
}

pub async fn login_staff(
    ctx: AuthContext,
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<LoginResult, RequestError> {
    let credentials = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response = api.login_staff(&credentials).await;
    login_with(ctx, email, None, response).await
}

/// Registration acknowledges only; it never creates a session.
pub async fn register_user(
    api: &ApiClient,
    payload: &crate::model::UserRegistration,
) -> Result<Value, RequestError> {
    api.register_user(payload).await
}

pub async fn register_vendor(
    api: &ApiClient,
    payload: &crate::model::VendorRegistration,
) -> Result<Value, RequestError> {
    api.register_vendor(payload).await
}

/// Admin-only: requires the current session's token.
pub async fn create_product_manager(
    ctx: AuthContext,
    api: &ApiClient,
    payload: &NewProductManager,
) -> Result<Value, RequestError> {
    let token = ctx
        .store()
        .token()
        .ok_or_else(|| RequestError::transport("not signed in"))?;
    api.create_product_manager(payload, &token).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::MemoryStorage;
    use serde_json::json;

    #[test]
    fn user_login_parses_into_the_user_variant() {
        let response = json!({ "token": "tok-u", "userId": 17 });
        let (token, result) = parse_login_response(Some(Role::User), &response).unwrap();
        assert_eq!(token, "tok-u");
        assert_eq!(result, LoginResult::User { user_id: "17".into() });
        assert_eq!(result.landing_route(), AppRoute::Home);
    }

    #[test]
    fn vendor_login_requires_the_vendor_id() {
        let response = json!({ "token": "tok-v", "vendorId": "v-3" });
        let (_, result) = parse_login_response(Some(Role::Vendor), &response).unwrap();
        assert_eq!(result, LoginResult::Vendor { vendor_id: "v-3".into() });
        assert_eq!(result.landing_route(), AppRoute::AddSnack);

        let missing = json!({ "token": "tok-v", "userId": "u-3" });
        assert!(parse_login_response(Some(Role::Vendor), &missing).is_err());
    }

    #[test]
    fn staff_login_takes_the_role_from_the_server() {
        let admin = json!({ "token": "t", "role": "ADMIN", "userId": "a-1" });
        let (_, result) = parse_login_response(None, &admin).unwrap();
        assert_eq!(
            result,
            LoginResult::Staff { role: Role::Admin, user_id: "a-1".into() },
        );

        let pm = json!({ "token": "t", "role": "PRODUCT_MANAGER", "userId": "pm-1" });
        let (_, result) = parse_login_response(None, &pm).unwrap();
        assert_eq!(result.role(), Role::ProductManager);
        assert_eq!(result.landing_route(), AppRoute::ApproveVendors);
    }

    #[test]
    fn staff_login_rejects_non_staff_roles() {
        let response = json!({ "token": "t", "role": "USER", "userId": "u-1" });
        assert!(parse_login_response(None, &response).is_err());
    }

    #[test]
    fn missing_token_is_an_error() {
        assert!(parse_login_response(Some(Role::User), &json!({ "userId": 1 })).is_err());
        assert!(parse_login_response(Some(Role::User), &json!({ "token": "" })).is_err());
    }

    #[test]
    fn stored_vendor_login_populates_the_vendor_slot() {
        let store = SessionStore::new(MemoryStorage::default());
        let result = LoginResult::Vendor { vendor_id: "v-9".into() };
        store_login(&store, "tok", &result, "shop@veg.com");

        let session = store.get_session();
        assert_eq!(session.role, Some(Role::Vendor));
        assert_eq!(session.subject_id.as_deref(), Some("v-9"));
        assert_eq!(session.email.as_deref(), Some("shop@veg.com"));
    }
}
