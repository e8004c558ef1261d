use std::path::Path;

use crate::constants::{ALLOWED_IMAGE_EXTENSIONS, UPLOADS_URL_PREFIX};
use crate::error::Result;

/// Whether the filename carries an allowed image extension.
///
/// The check is case-insensitive and looks at the part after the last dot,
/// so `photo.PNG` passes and `photo.exe` or a bare `photo` does not.
pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Reduce a client-supplied filename to a safe basename.
///
/// Path separators become separators between name parts, whitespace runs
/// collapse to `_`, anything outside ASCII alphanumerics plus `.`, `-`, `_`
/// is dropped, and leading or trailing `.`/`_` are stripped. The result
/// never escapes the upload directory.
pub fn sanitize_filename(name: &str) -> String {
    let spaced = name.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// The URL path under which a stored upload is served.
pub fn public_url(filename: &str) -> String {
    format!("{}/{}", UPLOADS_URL_PREFIX, filename)
}

/// Write the upload to disk under the configured directory.
pub async fn save(dir: impl AsRef<Path>, filename: &str, data: &[u8]) -> Result<()> {
    let path = dir.as_ref().join(filename);
    tokio::fs::write(&path, data).await?;
    tracing::debug!("Saved upload to {}", path.display());
    Ok(())
}
