/// Normalize the request path: trim surrounding whitespace, then strip any
/// leading slashes. Returns `None` when the path is absent or nothing is
/// left after normalization.
pub fn normalize_path(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

/// Build the S3 key for a normalized path: `{prefix}/{path}`.
pub fn storage_key(prefix: &str, path: &str) -> String {
    format!("{prefix}/{path}")
}
