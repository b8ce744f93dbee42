/// Canonical form used for both insertion and lookup: trimmed, then lowercased.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
