//! REST DTOs read from the rental API.
//!
//! DESIGN
//! ======
//! Fields the UI does not need are ignored by serde; optional fields default
//! so partially populated API responses still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::navigation::Role;

/// Authenticated user as returned by `/auth/me` and `/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Raw role string from the session; see [`User::role`].
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    /// Normalized role, defaulting to `Role::User`.
    #[must_use]
    pub fn role(&self) -> Role {
        Role::from_session(self.role.as_deref())
    }
}

/// Credentials posted to `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Contact form body posted to `/contact`; also the locally saved draft.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Guest review attached to a property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

/// Rental listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub city: String,
    /// Nightly price in the listing currency's minor units.
    pub price_per_night: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

fn default_currency() -> String {
    "USD".to_owned()
}

impl Property {
    /// Nightly price formatted as `"USD 120.00"`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!(
            "{} {}.{:02}",
            self.currency,
            self.price_per_night / 100,
            self.price_per_night % 100
        )
    }
}
