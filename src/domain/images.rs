use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// A data URI split into its content type and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Parse a `data:` URI as produced by the browser's `FileReader` (or by
/// [`to_data_url`]). Returns `None` for anything malformed.
pub fn parse_data_url(data_url: &str) -> Option<DecodedImage> {
    let rest = data_url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;

    let (content_type, is_base64) = match meta.strip_suffix(";base64") {
        Some(mime) => (mime, true),
        None => (meta, false),
    };
    let content_type = if content_type.is_empty() {
        "application/octet-stream"
    } else {
        content_type
    };

    let bytes = if is_base64 {
        BASE64.decode(payload.as_bytes()).ok()?
    } else {
        payload.as_bytes().to_vec()
    };

    Some(DecodedImage {
        content_type: content_type.to_string(),
        bytes,
    })
}

/// Encode raw image bytes as a self-contained data URI.
pub fn to_data_url(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{content_type};base64,{}", BASE64.encode(bytes))
}

/// Guess an image content type from a file extension. Used by the CLI
/// when turning local files into data URIs.
pub fn content_type_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
