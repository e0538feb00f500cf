//! Text helpers shared by lookups, search and boundary normalisation

/// Trimmed, lowercased form used for exact comparisons
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Lowercased alphanumerics only, for loose comparisons
/// ("Sealants & Adhesives" and "sealants-adhesives" share a loose key)
pub fn loose_key(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Collapse empty and whitespace-only strings to `None`, trimming the rest
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == v.len() {
            Some(v)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Render a number without a trailing `.0` so `10` and `10.0` print alike
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
