use serde::Serialize;
use sqlx::FromRow;

/// A skill with a proficiency percentage.
///
/// The percentage is whatever the admin submitted - it is not clamped to
/// 0-100, so the rendering side decides how to display out-of-range values.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Skill {
    pub id: i64,
    pub label: String,
    pub percentage: i64,
}
