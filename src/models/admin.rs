use sqlx::FromRow;

/// The single administrator account.
///
/// Never serialized directly - the password hash must not leave the server,
/// so responses that need profile data pick fields out by hand.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub username: String,
    /// Argon2 hash in PHC string format.
    pub password_hash: String,
    /// URL path of the profile picture, e.g. `/static/uploads/pfp_me.png`.
    /// Empty or missing means the default picture is shown.
    pub pfp: Option<String>,
}
