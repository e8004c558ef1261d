use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Contact details and landing-page hero text, editable as one unit.
///
/// Doubles as the admin form payload; fields missing from the form
/// deserialize as empty strings and clear what they omit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct ContactSettings {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub address: String,
    pub hero_title: String,
    pub hero_sub: String,
}
