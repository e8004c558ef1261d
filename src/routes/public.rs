use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::constants::{DEFAULT_ADMIN_USERNAME, DEFAULT_PFP_PATH};
use crate::error::Result;
use crate::models::{Project, Skill};
use crate::AppState;

/// All projects for the public site, newest first.
pub async fn api_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>> {
    Ok(Json(state.store.projects_newest_first().await?))
}

/// Public profile: display name and profile picture.
///
/// A missing admin record and an empty or whitespace picture path both fall
/// back to defaults, so the frontend always has something to render.
pub async fn api_profile(State(state): State<AppState>) -> Result<Json<Value>> {
    let profile = match state.store.admin().await? {
        Some(admin) => {
            let pfp = match admin.pfp {
                Some(p) if !p.trim().is_empty() => p,
                _ => DEFAULT_PFP_PATH.to_string(),
            };
            json!({ "username": admin.username, "pfp": pfp })
        }
        None => json!({ "username": DEFAULT_ADMIN_USERNAME, "pfp": DEFAULT_PFP_PATH }),
    };
    Ok(Json(profile))
}

/// Contact details and hero text, `{}` when not yet seeded.
pub async fn api_contact_info(State(state): State<AppState>) -> Result<Json<Value>> {
    let value = match state.store.contact().await? {
        Some(contact) => json!(contact),
        None => json!({}),
    };
    Ok(Json(value))
}

/// All skills in insertion order.
pub async fn api_skills(State(state): State<AppState>) -> Result<Json<Vec<Skill>>> {
    Ok(Json(state.store.skills().await?))
}

/// Years of experience, `null` when not yet seeded.
pub async fn api_experience(State(state): State<AppState>) -> Result<Json<Value>> {
    let years = state.store.experience_years().await?;
    Ok(Json(json!({ "years": years })))
}
