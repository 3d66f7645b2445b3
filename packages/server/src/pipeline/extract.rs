//! Best-effort JSON extraction from free-text model output.
//!
//! Models are asked to answer strictly in JSON but routinely wrap the answer
//! in markdown fences or surround it with prose. Extraction never fails as
//! control flow: an unparseable answer becomes `ExtractionResult::Failed`
//! carrying the original text.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    /// First fenced block, optionally tagged `json`, shortest match.
    static ref FENCED_BLOCK: Regex =
        Regex::new(r"```(?:json|JSON)?\s*([\s\S]*?)\s*```").expect("fence pattern is valid");

    /// Fenced block spanning to the last closing fence, for payloads that
    /// themselves contain triple backticks.
    static ref FENCED_BLOCK_GREEDY: Regex =
        Regex::new(r"```(?:json|JSON)?\s*([\s\S]*)\s*```").expect("fence pattern is valid");
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    Parsed(Value),
    /// Original, unstripped model text
    Failed(String),
}

impl ExtractionResult {
    pub fn is_parsed(&self) -> bool {
        matches!(self, ExtractionResult::Parsed(_))
    }
}

/// Parse a model answer into JSON, tolerating markdown fences.
pub fn extract(raw: &str) -> ExtractionResult {
    for candidate in candidates(raw) {
        if let Ok(value) = serde_json::from_str::<Value>(&candidate) {
            return ExtractionResult::Parsed(value);
        }
    }
    ExtractionResult::Failed(raw.to_string())
}

/// Candidate texts in the order they are tried.
///
/// With a fenced block present, only its inner content is tried (shortest
/// match first, then up to the last fence). Otherwise the whole text with
/// backticks removed is the single candidate.
fn candidates(raw: &str) -> Vec<String> {
    if let Some(inner) = fenced_content(&FENCED_BLOCK, raw) {
        let mut out = vec![inner.to_string()];
        if let Some(greedy) = fenced_content(&FENCED_BLOCK_GREEDY, raw) {
            if greedy != inner {
                out.push(greedy.to_string());
            }
        }
        return out;
    }

    vec![raw.replace('`', "").trim().to_string()]
}

fn fenced_content<'a>(pattern: &Regex, raw: &'a str) -> Option<&'a str> {
    pattern
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|inner| !inner.is_empty())
}
