use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;

use super::forms::int_or_zero;
use crate::constants::DASHBOARD_PATH;
use crate::error::Result;
use crate::session::AdminSession;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillForm {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub percentage: String,
}

/// Add a skill. A blank label is silently skipped, and the percentage is
/// stored verbatim even when it falls outside 0-100.
pub async fn skills_add(
    _session: AdminSession,
    State(state): State<AppState>,
    Form(form): Form<SkillForm>,
) -> Result<Redirect> {
    let label = form.label.trim();
    if !label.is_empty() {
        state
            .store
            .add_skill(label, int_or_zero(&form.percentage))
            .await?;
    }
    Ok(Redirect::to(DASHBOARD_PATH))
}

/// Replace a skill's label and percentage. An unknown id updates nothing.
pub async fn skills_update(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<SkillForm>,
) -> Result<Redirect> {
    state
        .store
        .update_skill(id, form.label.trim(), int_or_zero(&form.percentage))
        .await?;
    Ok(Redirect::to(DASHBOARD_PATH))
}

/// Remove a skill. An unknown id is a no-op.
pub async fn skills_delete(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect> {
    state.store.delete_skill(id).await?;
    Ok(Redirect::to(DASHBOARD_PATH))
}
