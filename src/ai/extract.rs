//! Summary extraction from Bedrock response bodies.
//!
//! Different model families answer in different shapes, so each known shape
//! gets a small pure strategy. Callers pass an ordered list and take the first
//! strategy that yields non-blank text.

use serde_json::Value;

/// A named extraction strategy.
pub type Extractor = (&'static str, fn(&Value) -> Option<String>);

/// Tried on the free-form prompt response, in priority order.
pub const PRIMARY_EXTRACTORS: &[Extractor] = &[
    ("generation", generation),
    ("choices", any_choice),
    ("completion", completion),
    ("content", content),
    ("text", text),
    ("output", output),
];

/// Tried on the alternate chat-format retry.
pub const RETRY_EXTRACTORS: &[Extractor] = &[
    ("content", content),
    ("choices[0].message.content", first_choice_message),
    ("choices[0].text", first_choice_text),
];

/// Tried on the direct chat-format response.
pub const DIRECT_EXTRACTORS: &[Extractor] = &[
    ("content", spaced_content),
    ("choices[0].message.content", spaced_first_choice_message),
];

/// Runs `extractors` in order and returns the first hit with the strategy name.
#[must_use]
pub fn extract_first(extractors: &[Extractor], body: &Value) -> Option<(&'static str, String)> {
    extractors
        .iter()
        .find_map(|(name, extract)| extract(body).map(|text| (*name, text)))
}

/// Normalizes a text-bearing value, concatenating list parts as-is.
#[must_use]
pub fn text_of(value: &Value) -> Option<String> {
    joined_text(value, "")
}

/// Normalizes a text-bearing value.
///
/// Plain strings pass through, lists of strings are joined with `separator`,
/// and lists of content blocks contribute their `text` fields the same way.
/// Blank results are `None`.
#[must_use]
pub fn joined_text(value: &Value, separator: &str) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(separator),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join(separator),
        _ => return None,
    };

    if text.trim().is_empty() { None } else { Some(text) }
}

fn field(body: &Value, name: &str) -> Option<String> {
    body.get(name).and_then(text_of)
}

fn generation(body: &Value) -> Option<String> {
    field(body, "generation")
}

fn completion(body: &Value) -> Option<String> {
    field(body, "completion")
}

fn content(body: &Value) -> Option<String> {
    field(body, "content")
}

fn text(body: &Value) -> Option<String> {
    field(body, "text")
}

fn output(body: &Value) -> Option<String> {
    field(body, "output")
}

fn choice_text(choice: &Value) -> Option<String> {
    field(choice, "text")
}

fn choice_message(choice: &Value) -> Option<String> {
    choice.get("message").and_then(|m| field(m, "content"))
}

fn any_choice(body: &Value) -> Option<String> {
    body.get("choices")?
        .as_array()?
        .iter()
        .find_map(|choice| choice_text(choice).or_else(|| choice_message(choice)))
}

fn first_choice_message(body: &Value) -> Option<String> {
    choice_message(body.get("choices")?.get(0)?)
}

fn first_choice_text(body: &Value) -> Option<String> {
    choice_text(body.get("choices")?.get(0)?)
}

// Direct replies are Anthropic content blocks; separate parts are space-joined.
fn spaced_content(body: &Value) -> Option<String> {
    body.get("content").and_then(|c| joined_text(c, " "))
}

fn spaced_first_choice_message(body: &Value) -> Option<String> {
    let message = body.get("choices")?.get(0)?.get("message")?;
    message.get("content").and_then(|c| joined_text(c, " "))
}
