//! Best-effort recovery of a typed analysis result from raw model output.
//!
//! The model is asked for a JSON object with four known fields but is not
//! contractually bound to produce valid JSON. Recovery normalizes the common
//! defects (markdown code fences, unquoted object keys, stray control bytes)
//! and then parses; anything still unparsable is a `RecoveryError`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The structured analysis produced by the model, one per run.
/// Constructed only here; missing fields take the documented defaults and
/// unknown fields are discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Free-form match text ("80%"); the model is not trusted to emit a number.
    #[serde(rename = "JD_Match", default)]
    pub jd_match: String,

    #[serde(rename = "MissingKeywords", default)]
    pub missing_keywords: Vec<String>,

    #[serde(rename = "Profile_Summary", default)]
    pub profile_summary: String,

    #[serde(rename = "Enhancements_to_be_done", default)]
    pub enhancements: Vec<String>,
}

#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("failed to parse model response as JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

// Bare word run directly before a colon. Also matches colon-adjacent words
// inside string values ("Note: fix X"), which get wrapped too; known
// fragility, left unguarded.
static BARE_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+):").unwrap());

/// Recovers an `AnalysisResult` from the model's raw completion text.
pub fn recover_analysis(raw: &str) -> Result<AnalysisResult, RecoveryError> {
    let normalized = normalize(raw);
    Ok(serde_json::from_str(&normalized)?)
}

/// Normalization pipeline: strip fences, quote bare keys, drop control bytes.
/// Idempotent: a second application never changes the output of the first.
fn normalize(raw: &str) -> String {
    let text = strip_json_fences(raw);
    let text = quote_bare_keys(text);
    strip_control_chars(&text)
}

/// Wraps unquoted object keys in double quotes. A syntactic heuristic, not a
/// tokenizer: already-quoted keys are left alone because the character before
/// the colon is a quote, not a word character.
fn quote_bare_keys(text: &str) -> String {
    BARE_KEY.replace_all(text, "\"$1\":").into_owned()
}

/// Removes every byte in the ASCII control range (0x00–0x1F, 0x7F). Strict
/// JSON parsers reject these even inside string values.
fn strip_control_chars(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_control()).collect()
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
