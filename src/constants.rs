/// File extensions accepted for image uploads (compared case-insensitively)
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// URL prefix under which uploaded images are served
pub const UPLOADS_URL_PREFIX: &str = "/static/uploads";

/// Profile picture shown when none has been uploaded (or it was removed)
pub const DEFAULT_PFP_PATH: &str = "/static/uploads/default_pfp.png";

/// Maximum request body size in bytes (16MB)
/// Multipart uploads carry whole images; the framework default of 2MB
/// would reject ordinary photos.
pub const MAX_UPLOAD_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Session cookie holding the logged-in admin's username (signed)
pub const SESSION_COOKIE: &str = "portfolio_session";

/// Login page the dashboard redirects to when no session is active
pub const LOGIN_PAGE_PATH: &str = "/super-secret-login";

/// Admin dashboard path, the redirect target of every successful mutation
pub const DASHBOARD_PATH: &str = "/admin";

// =============================================================================
// Bootstrap Defaults
// =============================================================================

/// Default admin credentials seeded on first run
/// A known weak default - production deployments must rotate it.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Experience years seeded on first run
pub const DEFAULT_EXPERIENCE_YEARS: i64 = 2;

/// Session signing secret used when SECRET_KEY is not configured
pub const DEFAULT_SECRET_KEY: &str = "change-me";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a failed login (never attributes the failing field)
pub const ERR_LOGIN_FAILED: &str = "Login failed";

/// Error message for a username change without a new username
pub const ERR_MISSING_USERNAME: &str = "Missing username";

/// Error message for a password change with a wrong current password
pub const ERR_WRONG_PASSWORD: &str = "Incorrect current password";

/// Error message for a rejected or absent upload file
pub const ERR_INVALID_FILE: &str = "Invalid file";

/// Error message for a contact submission missing message or email
pub const ERR_MISSING_FIELDS: &str = "Missing fields";
