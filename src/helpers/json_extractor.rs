use serde_json::Value;
use crate::enums::extraction::{Extraction, UnavailableReason};

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Best-effort recovery of a JSON document from model output.
///
/// Only the first fenced block is considered: text between the first "```json" and
/// the next "```", or failing that between the first two "```". Unfenced text is
/// parsed whole. Nothing here fails; unusable output yields `Unavailable`.
pub fn extract_structured(raw_text: &str, json_mode: bool) -> Extraction {
    if !json_mode {
        return Extraction::Unavailable(UnavailableReason::NotRequested);
    }

    let candidate = match fenced_candidate(raw_text) {
        Ok(candidate) => candidate.trim(),
        Err(reason) => return Extraction::Unavailable(reason),
    };

    match serde_json::from_str::<Value>(candidate) {
        Ok(value) => Extraction::Parsed(value),
        Err(_) => Extraction::Unavailable(UnavailableReason::InvalidJson),
    }
}

/// The span a fence pair encloses, the whole text if there is no fence.
pub fn fenced_candidate(raw_text: &str) -> Result<&str, UnavailableReason> {
    let opening = raw_text
        .find(JSON_FENCE)
        .map(|start| start + JSON_FENCE.len())
        .or_else(|| raw_text.find(FENCE).map(|start| start + FENCE.len()));

    match opening {
        Some(body_start) => {
            let body = &raw_text[body_start..];
            body.find(FENCE)
                .map(|end| &body[..end])
                .ok_or(UnavailableReason::UnterminatedFence)
        }
        None => Ok(raw_text),
    }
}
