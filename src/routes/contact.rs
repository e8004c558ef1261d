use axum::extract::State;
use axum::Form;
use serde::Deserialize;

use crate::constants::ERR_MISSING_FIELDS;
use crate::error::{AppError, Result};
use crate::{mail, AppState};

#[derive(Debug, Deserialize)]
pub struct ContactSendForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

/// Handle a visitor's contact form submission.
///
/// A message and an email address are required. Without SMTP configured
/// the submission is still accepted, and the body says it went nowhere.
pub async fn contact_send(
    State(state): State<AppState>,
    Form(form): Form<ContactSendForm>,
) -> Result<&'static str> {
    if form.message.is_empty() || form.email.is_empty() {
        return Err(AppError::InvalidInput(ERR_MISSING_FIELDS.to_string()));
    }

    match &state.config.mail {
        Some(mail_config) => {
            mail::send_contact_email(
                mail_config,
                &form.name,
                &form.email,
                &form.phone,
                &form.message,
            )
            .await?;
            Ok("Sent")
        }
        None => Ok("Received (SMTP not enabled)"),
    }
}
