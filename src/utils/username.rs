// src/utils/username.rs

/// Normalize raw input into the form every probe uses:
/// trimmed of surrounding spaces and line breaks, internal spaces removed, lower-cased.
pub fn normalize_username(raw: &str) -> String {
    raw.trim_matches(|c| c == ' ' || c == '\r' || c == '\n')
        .replace(' ', "")
        .to_lowercase()
}
