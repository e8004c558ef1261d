//! Portfolio Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod mail;
pub mod models;
pub mod routes;
pub mod security;
pub mod session;
pub mod uploads;

pub use config::{Config, MailConfig};
pub use db::{create_pool, Store};
pub use error::{AppError, Result};

use axum::extract::{DefaultBodyLimit, FromRef};
use axum::routing::{get, post};
use axum::Router;
use axum_extra::extract::cookie::Key;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use constants::MAX_UPLOAD_BODY_BYTES;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Config,
    key: Key,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    ///
    /// The cookie signing key is derived from the configured secret.
    pub fn new(store: Store, config: Config) -> Self {
        let key = session::signing_key(&config.secret_key);
        Self { store, config, key }
    }
}

// SignedCookieJar pulls its key out of whatever state the router carries.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

/// Build the full application router
///
/// Shared between `main` and the integration tests so both exercise the
/// same route table and layers.
pub fn router(state: AppState) -> Router {
    use routes::*;

    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/health", get(health_check))
        // Public read API
        .route("/api/projects", get(api_projects))
        .route("/api/profile", get(api_profile))
        .route("/api/contact-info", get(api_contact_info))
        .route("/api/skills", get(api_skills))
        .route("/api/experience", get(api_experience))
        // Authentication + dashboard
        .route("/admin", get(admin_dashboard))
        .route("/admin/login", post(admin_login))
        .route("/admin/logout", get(admin_logout))
        .route("/admin-reset", get(admin_session_reset))
        // Account settings
        .route("/admin/change-username", post(change_username))
        .route("/admin/change-password", post(change_password))
        .route("/admin/upload-pfp", post(upload_pfp))
        .route("/admin/remove-pfp", post(remove_pfp))
        // Site settings
        .route("/admin/update-contact", post(update_contact))
        .route("/admin/update-experience", post(update_experience))
        // Skills CRUD
        .route("/admin/skills/add", post(skills_add))
        .route("/admin/skills/update/:id", post(skills_update))
        .route("/admin/skills/delete/:id", post(skills_delete))
        // Projects CRUD (with uploads)
        .route("/admin/upload", post(add_project))
        .route("/admin/edit-project", post(edit_project))
        .route("/admin/delete-project", post(delete_project))
        // Contact form
        .route("/contact/send", post(contact_send))
        // Uploaded images (and any dropped-in frontend shell)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
