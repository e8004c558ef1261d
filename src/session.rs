use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, Key, SignedCookieJar};
use sha2::{Digest, Sha512};

use crate::constants::SESSION_COOKIE;
use crate::error::AppError;
use crate::AppState;

/// Derive the cookie signing key from the configured secret.
///
/// `Key::from` wants 64 bytes of key material, so the secret is stretched
/// through SHA-512 first. Any secret length works and the same secret always
/// yields the same key, so sessions survive restarts.
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Session cookie carrying the admin username, signed by the jar.
pub fn session_cookie(username: &str) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, username.to_owned()))
        .path("/")
        .http_only(true)
        .build()
}

/// Cookie with the session's name and path, for removal.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .build()
}

/// Extractor that admits only a logged-in admin.
///
/// Handlers taking this as an argument reject requests without a valid
/// signed session cookie with 401 before the handler body runs. A cookie
/// with a bad signature is treated the same as no cookie at all.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar: SignedCookieJar<Key> = SignedCookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Unauthorized)?;

        match jar.get(SESSION_COOKIE) {
            Some(cookie) if !cookie.value().is_empty() => Ok(AdminSession {
                username: cookie.value().to_owned(),
            }),
            _ => Err(AppError::Unauthorized),
        }
    }
}
