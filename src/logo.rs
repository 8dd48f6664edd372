//! Logo asset for branded labels.
//!
//! The logo is read once at startup and kept as a `data:` URI so labels can
//! embed it inline without any per-request disk access.

use std::path::Path;
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine};

/// Read the image at `path` and encode it as a `data:` URI.
pub fn logo_data_uri<P: AsRef<Path>>(path: P) -> std::io::Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    Ok(format!("data:{};base64,{}", mime_type(path), STANDARD.encode(bytes)))
}

/// Load the logo for embedding, degrading to an empty image source when the
/// file cannot be read.
pub fn load_logo_src(path: &str) -> Arc<str> {
    match logo_data_uri(path) {
        Ok(uri) => {
            tracing::info!(path = %path, bytes = uri.len(), "Loaded logo asset");
            Arc::from(uri)
        }
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "Could not load logo asset, labels will have no logo");
            Arc::from("")
        }
    }
}

fn mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}
