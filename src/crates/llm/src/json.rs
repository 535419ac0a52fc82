//! Extraction of a typed value from a model response.
//!
//! Backends are instructed to answer with a single JSON value, but
//! models still wrap answers in markdown fences or conversational
//! framing often enough that a staged extraction pays for itself.

use crate::error::{LlmError, Result};
use serde::de::DeserializeOwned;

/// Extract and parse a JSON value from an LLM response.
///
/// Stages: direct parse, markdown fence stripping, then a scan for the
/// outermost `{...}` or `[...]` span. Anything that survives no stage is
/// a schema failure.
pub fn extract_json<T: DeserializeOwned>(response: &str) -> Result<T> {
    let trimmed = response.trim();

    if let Ok(parsed) = serde_json::from_str::<T>(trimmed) {
        return Ok(parsed);
    }

    let cleaned = strip_code_fences(trimmed);
    if let Ok(parsed) = serde_json::from_str::<T>(&cleaned) {
        return Ok(parsed);
    }

    if let Some(span) = find_json_value(&cleaned) {
        if let Ok(parsed) = serde_json::from_str::<T>(span) {
            return Ok(parsed);
        }
    }

    if let Some(span) = find_json_value(trimmed) {
        if let Ok(parsed) = serde_json::from_str::<T>(span) {
            return Ok(parsed);
        }
    }

    Err(LlmError::Schema(format!(
        "response did not parse into the expected shape. Preview: {}...",
        trimmed.chars().take(200).collect::<String>()
    )))
}

/// Remove ```json ... ``` or ``` ... ``` wrapping.
fn strip_code_fences(text: &str) -> String {
    let mut result = text.to_string();

    if result.starts_with("```json") {
        result = result.strip_prefix("```json").unwrap_or(&result).to_string();
    } else if result.starts_with("```") {
        result = result.strip_prefix("```").unwrap_or(&result).to_string();
    }

    result = result.trim().to_string();
    if result.ends_with("```") {
        result = result.strip_suffix("```").unwrap_or(&result).to_string();
    }

    result.trim().to_string()
}

/// Find the outermost JSON object or array by delimiter counting.
///
/// The family of the first opening delimiter decides what is counted, so
/// objects nested in arrays (and the reverse) pass through untouched.
fn find_json_value(text: &str) -> Option<&str> {
    let (open, close) = match text.find(['{', '['])? {
        i if text.as_bytes()[i] == b'{' => ('{', '}'),
        _ => ('[', ']'),
    };

    let mut depth = 0usize;
    let mut start_idx: Option<usize> = None;

    for (i, ch) in text.char_indices() {
        if ch == open {
            if depth == 0 {
                start_idx = Some(i);
            }
            depth += 1;
        } else if ch == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                if let Some(start) = start_idx {
                    return Some(&text[start..=i]);
                }
            }
        }
    }
    None
}
