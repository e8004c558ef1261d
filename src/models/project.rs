use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// A showcased portfolio project.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// External link to the live project or its repository.
    pub link: String,
    /// URL path of the uploaded image, `None` when the project has none.
    pub img_url: Option<String>,
    pub created_at: NaiveDateTime,
}
