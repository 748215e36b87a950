//! Pull a JSON object out of model text.

use serde::de::DeserializeOwned;

use super::ProviderError;

/// Locate the JSON object in `text`.
///
/// Accepts, in order: the whole trimmed text when it is `{...}`, the body of
/// a ```` ```json ```` fence, or the span from the first `{` to the last `}`.
pub fn find_json_object(text: &str) -> Option<&str> {
    let t = text.trim();
    if t.starts_with('{') && t.ends_with('}') {
        return Some(t);
    }

    if let Some(stripped) = t.strip_prefix("```") {
        let stripped = stripped.trim_start();
        let stripped = stripped.strip_prefix("json").unwrap_or(stripped).trim_start();
        let stripped = stripped.strip_suffix("```").unwrap_or(stripped).trim();
        if stripped.starts_with('{') && stripped.ends_with('}') {
            return Some(stripped);
        }
    }

    let start = t.find('{')?;
    let end = t.rfind('}')?;
    if end > start {
        t.get(start..=end)
    } else {
        None
    }
}

/// Deserialize the JSON object embedded in `text`.
///
/// # Errors
///
/// Returns `ProviderError::Parse` when no object is found or it does not
/// match `T`.
pub fn extract_json<T: DeserializeOwned>(text: &str) -> Result<T, ProviderError> {
    let raw = find_json_object(text)
        .ok_or_else(|| ProviderError::Parse("no JSON object in model output".to_owned()))?;
    serde_json::from_str(raw).map_err(|e| ProviderError::Parse(e.to_string()))
}
