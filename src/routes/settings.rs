use axum::extract::State;
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;

use super::forms::int_or_zero;
use crate::constants::DASHBOARD_PATH;
use crate::error::Result;
use crate::models::ContactSettings;
use crate::session::AdminSession;
use crate::AppState;

/// Replace all contact fields at once. A partial form clears whatever
/// it omits.
pub async fn update_contact(
    _session: AdminSession,
    State(state): State<AppState>,
    Form(form): Form<ContactSettings>,
) -> Result<Redirect> {
    state.store.set_contact(&form).await?;
    Ok(Redirect::to(DASHBOARD_PATH))
}

#[derive(Debug, Deserialize)]
pub struct ExperienceForm {
    #[serde(default)]
    pub years: String,
}

/// Set the years-of-experience figure. Non-numeric input becomes 0.
pub async fn update_experience(
    _session: AdminSession,
    State(state): State<AppState>,
    Form(form): Form<ExperienceForm>,
) -> Result<Redirect> {
    state
        .store
        .set_experience_years(int_or_zero(&form.years))
        .await?;
    Ok(Redirect::to(DASHBOARD_PATH))
}
