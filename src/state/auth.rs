#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::util::navigation::Role;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Role of the signed-in user; `Role::User` when signed out.
    #[must_use]
    pub fn role(&self) -> Role {
        self.user.as_ref().map_or(Role::User, User::role)
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(String::new, |u| u.name.clone())
    }
}
