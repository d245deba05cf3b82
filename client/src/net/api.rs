//! REST helpers for the auth collaborator.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth fetch
//! failures degrade to the signed-out flow without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::SessionUser;

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    match status {
        401 => "Email or password not recognized.".to_owned(),
        _ => format!("login failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_failed_message(status: u16) -> String {
    match status {
        409 => "An account with that email already exists.".to_owned(),
        _ => format!("signup failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn role_update_failed_message(status: u16) -> String {
    format!("role update failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn reset_request_failed_message(status: u16) -> String {
    format!("reset request failed: {status}")
}

/// Fetch the currently authenticated account from `GET /api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a display-ready message when the request fails or is rejected.
pub async fn login(email: &str, password: &str) -> Result<SessionUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<SessionUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/signup`. The role is optional; an
/// account created without one lands on role selection after sign-in.
///
/// # Errors
///
/// Returns a display-ready message when the request fails or is rejected.
pub async fn signup(
    name: &str,
    email: &str,
    password: &str,
    role: Option<&str>,
) -> Result<SessionUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
            "role": role,
        });
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(signup_failed_message(resp.status()));
        }
        resp.json::<SessionUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password, role);
        Err("not available on server".to_owned())
    }
}

/// Persist a role selection via `POST /api/auth/role`.
///
/// # Errors
///
/// Returns a display-ready message when the request fails or is rejected.
pub async fn select_role(role: &str) -> Result<SessionUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "role": role });
        let resp = gloo_net::http::Request::post("/api/auth/role")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(role_update_failed_message(resp.status()));
        }
        resp.json::<SessionUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = role;
        Err("not available on server".to_owned())
    }
}

/// Request a password reset email via `POST /api/auth/forgot-password`.
///
/// # Errors
///
/// Returns a display-ready message when the request fails.
pub async fn request_password_reset(email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/forgot-password")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(reset_request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Log out the current account via `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}
