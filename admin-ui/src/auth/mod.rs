//! Session state shared across pages.
//!
//! `AuthState` lives in a context signal provided by `App`. Pages read it to
//! decide whether to render, redirect to `/login`, or show a forbidden notice.

use dioxus::prelude::*;
use shared_types::{AuthResponse, AuthUser};

use crate::api;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum AuthState {
    /// Haven't checked /api/auth/me yet.
    #[default]
    Unknown,
    Unauthenticated,
    Authenticated { user: AuthUser, is_admin: bool },
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated { .. })
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, AuthState::Authenticated { is_admin: true, .. })
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            AuthState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }
}

impl From<AuthResponse> for AuthState {
    fn from(response: AuthResponse) -> Self {
        AuthState::Authenticated {
            user: response.user,
            is_admin: response.is_admin,
        }
    }
}

/// Probe /api/auth/me once and update the context signal.
pub async fn probe_session(mut auth: Signal<AuthState>) {
    match api::fetch_me().await {
        Ok(me) => match me.user {
            Some(user) if me.authenticated => auth.set(AuthState::Authenticated {
                user,
                is_admin: me.is_admin,
            }),
            _ => auth.set(AuthState::Unauthenticated),
        },
        Err(e) => {
            dioxus_logger::tracing::warn!("session probe failed: {e}");
            auth.set(AuthState::Unauthenticated);
        }
    }
}

pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthUser {
        AuthUser {
            telegram_id: 7,
            display_name: "Ivan".into(),
            username: None,
            photo_url: None,
        }
    }

    #[test]
    fn login_response_becomes_authenticated() {
        let state = AuthState::from(AuthResponse {
            user: user(),
            is_admin: true,
        });
        assert!(state.is_authenticated());
        assert!(state.is_admin());
        assert_eq!(state.user().map(|u| u.telegram_id), Some(7));
    }

    #[test]
    fn unknown_is_neither() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(!state.is_admin());
    }
}
