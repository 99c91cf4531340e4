//! Read-only view of the identity provider's session.
//!
//! The provider owns sign-in; this only mirrors its session into the flags
//! the storefront renders from, including whether prices may be shown.

use serde::{Deserialize, Serialize};

pub const ADMIN_ROLE: &str = "admin";

/// Session as delivered by the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    logged_in: bool,
    is_admin: bool,
    display_name: String,
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn from_session(session: Option<&Session>) -> Self {
        let Some(session) = session else {
            return Self::signed_out();
        };

        let display_name = session
            .display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(session.email.as_deref())
            .unwrap_or_default()
            .to_string();

        Self {
            logged_in: true,
            is_admin: session
                .roles
                .iter()
                .any(|role| role.eq_ignore_ascii_case(ADMIN_ROLE)),
            display_name,
        }
    }

    pub fn logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Prices are hidden until the visitor signs in.
    pub fn visible_price(&self, price: f64) -> Option<f64> {
        self.logged_in.then_some(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_out_hides_prices() {
        let state = AuthState::from_session(None);
        assert!(!state.logged_in());
        assert!(!state.is_admin());
        assert_eq!(state.display_name(), "");
        assert_eq!(state.visible_price(2899.0), None);
    }

    #[test]
    fn admin_role_is_detected() {
        let session = Session {
            user_id: "u1".to_string(),
            display_name: Some("Dana".to_string()),
            email: Some("dana@example.com".to_string()),
            roles: vec!["Admin".to_string()],
        };
        let state = AuthState::from_session(Some(&session));
        assert!(state.logged_in());
        assert!(state.is_admin());
        assert_eq!(state.display_name(), "Dana");
        assert_eq!(state.visible_price(59.0), Some(59.0));
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let session: Session =
            serde_json::from_str(r#"{"userId":"u2","displayName":" ","email":"buyer@example.com"}"#)
                .unwrap();
        let state = AuthState::from_session(Some(&session));
        assert!(!state.is_admin());
        assert_eq!(state.display_name(), "buyer@example.com");
    }
}
