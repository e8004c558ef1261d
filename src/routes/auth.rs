use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;
use serde_json::json;

use crate::constants::{
    DASHBOARD_PATH, DEFAULT_PFP_PATH, ERR_LOGIN_FAILED, LOGIN_PAGE_PATH, SESSION_COOKIE,
};
use crate::error::Result;
use crate::{security, session, AppState};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Log the admin in and start a signed session.
///
/// An unknown username and a wrong password get the same answer, so the
/// response does not reveal which part was wrong.
pub async fn admin_login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let admin = state.store.admin_by_username(&form.username).await?;

    match admin {
        Some(admin) if security::verify_password(&form.password, &admin.password_hash) => {
            tracing::info!("Admin login succeeded");
            // The cookie carries the username as stored, not as typed.
            let jar = jar.add(session::session_cookie(&admin.username));
            Ok((jar, Redirect::to(DASHBOARD_PATH)).into_response())
        }
        _ => {
            tracing::warn!("Admin login failed");
            Ok((StatusCode::UNAUTHORIZED, ERR_LOGIN_FAILED).into_response())
        }
    }
}

/// End the session and send the visitor back to the public site.
pub async fn admin_logout(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    (jar.remove(session::removal_cookie()), Redirect::to("/"))
}

/// Clear the session unconditionally. Escape hatch for a wedged cookie,
/// usable without being logged in.
pub async fn admin_session_reset(jar: SignedCookieJar) -> (SignedCookieJar, &'static str) {
    (jar.remove(session::removal_cookie()), "Session cleared.")
}

/// Dashboard data for the admin UI.
///
/// Unlike the mutation endpoints, an unauthenticated visitor is redirected
/// to the login page instead of getting a 401.
pub async fn admin_dashboard(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Response> {
    let logged_in = jar
        .get(SESSION_COOKIE)
        .map_or(false, |c| !c.value().is_empty());
    if !logged_in {
        return Ok(Redirect::to(LOGIN_PAGE_PATH).into_response());
    }

    let skills = state.store.skills().await?;
    let years = state.store.experience_years().await?.unwrap_or(0);
    let pfp = match state.store.admin().await? {
        Some(admin) => match admin.pfp {
            Some(p) if !p.is_empty() => p,
            _ => DEFAULT_PFP_PATH.to_string(),
        },
        None => DEFAULT_PFP_PATH.to_string(),
    };
    let project_count = state.store.project_count().await?;
    let contact = match state.store.contact().await? {
        Some(contact) => json!(contact),
        None => json!({}),
    };

    Ok(Json(json!({
        "skills": skills,
        "years": years,
        "pfp": pfp,
        "project_count": project_count,
        "contact": contact,
    }))
    .into_response())
}
