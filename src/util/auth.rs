//! Session gate for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AppShell` classifies the auth state once per change and both the layout
//! and the `/login` redirect key off that classification, so the two can
//! never disagree about whether a visitor is signed in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::navigation::Role;

pub const LOGIN_PATH: &str = "/login";

/// Where a visitor stands relative to the protected area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionGate {
    /// The session lookup has not finished yet.
    Pending,
    SignedIn(Role),
    SignedOut,
}

impl SessionGate {
    #[must_use]
    pub fn of(state: &AuthState) -> Self {
        if state.loading {
            Self::Pending
        } else if state.user.is_some() {
            Self::SignedIn(state.role())
        } else {
            Self::SignedOut
        }
    }

    #[must_use]
    pub fn is_signed_in(self) -> bool {
        matches!(self, Self::SignedIn(_))
    }

    /// Placeholder text shown instead of the layout.
    #[must_use]
    pub fn waiting_message(self) -> &'static str {
        match self {
            Self::Pending => "Cargando...",
            Self::SignedOut => "Redirigiendo al inicio de sesión...",
            Self::SignedIn(_) => "",
        }
    }
}

/// Whether a protected route should bounce to the login page.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    SessionGate::of(state) == SessionGate::SignedOut
}

/// Navigate to the login page each time the gate settles on `SignedOut`.
pub fn install_unauth_redirect<F>(gate: Memo<SessionGate>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if gate.get() == SessionGate::SignedOut {
            log::debug!("no session; redirecting to {LOGIN_PATH}");
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
