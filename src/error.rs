//! Screen-boundary error taxonomy.
//!
//! Every network-originating failure is classified here before it reaches
//! the user; nothing propagates past a screen and nothing is retried.
//! Validation failures never become a `UiError`: they are caught before
//! any request is made (see `validate`).

use std::fmt;

use crate::api::RequestError;

/// What a failed screen action means to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// No token present before the call was even attempted. Rendered as a
    /// full-screen access-denied view with a login call-to-action.
    AuthRequired,
    /// 401 on an authenticated call. Banner suggesting re-login; the
    /// stored session is left untouched.
    SessionExpired,
    /// 403: the session's role may not perform this action.
    Forbidden,
    /// 404 on a mutation target; shown inline for that action only.
    NotFound,
    /// Network failure, or a response that could not be interpreted.
    Transport(String),
}

impl UiError {
    /// User-facing text for banners and denial views.
    pub fn message(&self) -> String {
        match self {
            UiError::AuthRequired => "Authentication required. Please log in.".to_string(),
            UiError::SessionExpired => {
                "Your session has expired. Please log in again.".to_string()
            }
            UiError::Forbidden => {
                "You do not have permission to perform this action.".to_string()
            }
            UiError::NotFound => "The requested item could not be found.".to_string(),
            UiError::Transport(detail) => format!("{detail}. Please try again."),
        }
    }
}

impl From<RequestError> for UiError {
    fn from(err: RequestError) -> Self {
        match err.status {
            Some(401) => UiError::SessionExpired,
            Some(403) => UiError::Forbidden,
            Some(404) => UiError::NotFound,
            _ => UiError::Transport(err.message),
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UiError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(status: Option<u16>, message: &str) -> RequestError {
        RequestError {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn statuses_map_to_the_taxonomy() {
        assert_eq!(
            UiError::from(err(Some(401), "expired")),
            UiError::SessionExpired,
        );
        assert_eq!(UiError::from(err(Some(403), "no")), UiError::Forbidden);
        assert_eq!(UiError::from(err(Some(404), "gone")), UiError::NotFound);
    }

    #[test]
    fn everything_else_is_transport() {
        assert_eq!(
            UiError::from(err(None, "Failed to fetch")),
            UiError::Transport("Failed to fetch".to_string()),
        );
        assert_eq!(
            UiError::from(err(Some(500), "boom")),
            UiError::Transport("boom".to_string()),
        );
    }

    #[test]
    fn transport_message_carries_the_detail() {
        let e = UiError::Transport("Failed to fetch".to_string());
        assert_eq!(e.message(), "Failed to fetch. Please try again.");
    }
}
