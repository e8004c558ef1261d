use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;

use super::forms::int_or_zero;
use crate::constants::DASHBOARD_PATH;
use crate::error::Result;
use crate::session::AdminSession;
use crate::{uploads, AppState};

/// Save a valid uploaded image and return its public URL.
///
/// An absent file or a disallowed extension yields `None` - the project
/// simply goes without an image instead of failing the whole request.
async fn store_project_image(
    state: &AppState,
    image: Option<(String, Bytes)>,
) -> Result<Option<String>> {
    let (filename, data) = match image {
        Some((name, data)) if uploads::allowed_file(&name) => (name, data),
        _ => return Ok(None),
    };

    let stored_name = uploads::sanitize_filename(&filename);
    uploads::save(&state.config.upload_dir, &stored_name, &data).await?;
    Ok(Some(uploads::public_url(&stored_name)))
}

/// Create a project from a multipart form with an optional image.
pub async fn add_project(
    _session: AdminSession,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect> {
    let mut title = String::new();
    let mut description = String::new();
    let mut link = String::new();
    let mut image: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("title") => title = field.text().await?,
            Some("description") => description = field.text().await?,
            Some("link") => link = field.text().await?,
            Some("image") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                image = Some((filename, data));
            }
            _ => {}
        }
    }

    let img_url = store_project_image(&state, image).await?;
    state
        .store
        .add_project(&title, &description, &link, img_url.as_deref())
        .await?;

    tracing::info!("Project added");
    Ok(Redirect::to(DASHBOARD_PATH))
}

/// Update a project's fields, replacing the image only when a valid new
/// one was uploaded. An unknown id updates nothing.
pub async fn edit_project(
    _session: AdminSession,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect> {
    let mut id: i64 = 0;
    let mut title = String::new();
    let mut description = String::new();
    let mut link = String::new();
    let mut image: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("id") => id = int_or_zero(&field.text().await?),
            Some("title") => title = field.text().await?,
            Some("description") => description = field.text().await?,
            Some("link") => link = field.text().await?,
            Some("image") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                image = Some((filename, data));
            }
            _ => {}
        }
    }

    match store_project_image(&state, image).await? {
        Some(img_url) => {
            state
                .store
                .update_project_with_image(id, &title, &description, &link, &img_url)
                .await?
        }
        None => {
            state
                .store
                .update_project(id, &title, &description, &link)
                .await?
        }
    }

    Ok(Redirect::to(DASHBOARD_PATH))
}

#[derive(Debug, Deserialize)]
pub struct DeleteProjectForm {
    #[serde(default)]
    pub project_id: String,
}

/// Delete a project. A missing or non-numeric id deletes nothing rather
/// than erroring, and any stored image file stays on disk.
pub async fn delete_project(
    _session: AdminSession,
    State(state): State<AppState>,
    Form(form): Form<DeleteProjectForm>,
) -> Result<Redirect> {
    let id = int_or_zero(&form.project_id);
    state.store.delete_project(id).await?;
    Ok(Redirect::to(DASHBOARD_PATH))
}
