//! REST API helpers for the rental backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! listing failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactMessage, LoginRequest, Property, User};
use crate::config::ClientConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{action} failed: {status}")]
    Status { action: &'static str, status: u16 },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn current_user_endpoint(config: &ClientConfig) -> String {
    config.endpoint("/auth/me")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(config: &ClientConfig) -> String {
    config.endpoint("/auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(config: &ClientConfig) -> String {
    config.endpoint("/auth/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn properties_endpoint(config: &ClientConfig) -> String {
    config.endpoint("/properties")
}

#[cfg(any(test, feature = "hydrate"))]
fn property_endpoint(config: &ClientConfig, property_id: &str) -> String {
    config.endpoint(&format!("/properties/{property_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn contact_endpoint(config: &ClientConfig) -> String {
    config.endpoint("/contact")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = match gloo_net::http::Request::get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("GET {url} failed: {e}");
            return None;
        }
    };
    if !resp.ok() {
        log::debug!("GET {url} returned {}", resp.status());
        return None;
    }
    resp.json::<T>().await.ok()
}

/// Fetch the currently authenticated user.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user(config: &ClientConfig) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&current_user_endpoint(config)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        None
    }
}

/// Sign in with email and password.
///
/// # Errors
///
/// Returns an error if the request fails, the server rejects the
/// credentials, or the response body is not a user.
pub async fn login(config: &ClientConfig, request: &LoginRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&login_endpoint(config))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { action: "login", status: resp.status() });
        }
        resp.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// End the current session.
pub async fn logout(config: &ClientConfig) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(&logout_endpoint(config)).send().await {
            log::warn!("logout failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}

/// Fetch the property listing. Empty on failure or on the server.
pub async fn fetch_properties(config: &ClientConfig) -> Vec<Property> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&properties_endpoint(config)).await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Vec::new()
    }
}

/// Fetch a single property with its photos and reviews.
pub async fn fetch_property(config: &ClientConfig, property_id: &str) -> Option<Property> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&property_endpoint(config, property_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, property_id);
        None
    }
}

/// Submit the contact form.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a
/// non-OK status.
pub async fn send_contact_message(config: &ClientConfig, message: &ContactMessage) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&contact_endpoint(config))
            .json(message)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { action: "contact", status: resp.status() });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, message);
        Err(ApiError::Unavailable)
    }
}
