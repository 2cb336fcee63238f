use serde_json::Value;

pub const JSON_MODE_PROMPT: &str = "You must respond with a single valid JSON object that is RFC 8259 compliant. \
Do not include any explanatory text, comments, or markdown outside the JSON object.";

const JSON_SCHEMA_PROMPT_PREFIX: &str = "You must respond with a single JSON object that strictly conforms to the following JSON schema. \
The response must be RFC 8259 compliant JSON. \
Do not include any explanatory text, comments, or markdown outside the JSON object.\n\nJSON schema:\n";

/// Instruction for a JSON-mode request; embeds the compact, key-sorted form of `schema`.
pub fn json_mode_instruction(schema: Option<&Value>) -> String {
    match schema {
        Some(schema) => format!("{}{}", JSON_SCHEMA_PROMPT_PREFIX, canonical_json(schema)),
        None => JSON_MODE_PROMPT.to_string(),
    }
}

fn canonical_json(value: &Value) -> String {
    // Keys stay sorted only while serde_json's `preserve_order` feature is off.
    value.to_string()
}
