use axum::extract::{Multipart, State};
use axum::response::Redirect;
use axum::Form;
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

use crate::constants::{
    DASHBOARD_PATH, ERR_INVALID_FILE, ERR_MISSING_USERNAME, ERR_WRONG_PASSWORD,
};
use crate::error::{AppError, Result};
use crate::session::{self, AdminSession};
use crate::{security, uploads, AppState};

#[derive(Debug, Deserialize)]
pub struct ChangeUsernameForm {
    #[serde(default)]
    pub new_username: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordForm {
    #[serde(default)]
    pub current_pw: String,
    #[serde(default)]
    pub new_pw: String,
}

/// Rename the admin account and refresh the session cookie to match.
pub async fn change_username(
    _session: AdminSession,
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<ChangeUsernameForm>,
) -> Result<(SignedCookieJar, Redirect)> {
    if form.new_username.is_empty() {
        return Err(AppError::InvalidInput(ERR_MISSING_USERNAME.to_string()));
    }

    state.store.set_username(&form.new_username).await?;
    tracing::info!("Admin username changed");
    let jar = jar.add(session::session_cookie(&form.new_username));
    Ok((jar, Redirect::to(DASHBOARD_PATH)))
}

/// Change the admin password after verifying the current one.
pub async fn change_password(
    _session: AdminSession,
    State(state): State<AppState>,
    Form(form): Form<ChangePasswordForm>,
) -> Result<Redirect> {
    let verified = match state.store.admin().await? {
        Some(admin) => security::verify_password(&form.current_pw, &admin.password_hash),
        None => false,
    };
    if !verified {
        return Err(AppError::InvalidInput(ERR_WRONG_PASSWORD.to_string()));
    }

    let new_hash = security::hash_password(&form.new_pw)?;
    state.store.set_password_hash(&new_hash).await?;
    tracing::info!("Admin password changed");
    Ok(Redirect::to(DASHBOARD_PATH))
}

/// Store a new profile picture and point the admin record at it.
///
/// The stored name gets a `pfp_` prefix after sanitizing, so profile
/// pictures are recognizable in the upload directory and can never
/// collide with an empty name.
pub async fn upload_pfp(
    _session: AdminSession,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect> {
    let mut upload: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("pfp") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;
            upload = Some((filename, data));
        }
    }

    let (filename, data) = match upload {
        Some((name, data)) if uploads::allowed_file(&name) => (name, data),
        _ => return Err(AppError::InvalidInput(ERR_INVALID_FILE.to_string())),
    };

    let stored_name = format!("pfp_{}", uploads::sanitize_filename(&filename));
    uploads::save(&state.config.upload_dir, &stored_name, &data).await?;
    state
        .store
        .set_pfp(&uploads::public_url(&stored_name))
        .await?;

    tracing::info!("Profile picture updated");
    Ok(Redirect::to(DASHBOARD_PATH))
}

/// Drop the profile picture reference. The image file itself stays on
/// disk; only the admin record forgets it, so the default shows again.
pub async fn remove_pfp(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Redirect> {
    state.store.set_pfp("").await?;
    Ok(Redirect::to(DASHBOARD_PATH))
}
