//! Tag filter normalization.
//!
//! The search form takes tags as logfmt text (`http.status_code=200 error=true`).
//! The trace UI expects them as a JSON object whose values are all strings.

use serde_json::{Map, Value};

/// Parse a logfmt line into an ordered map.
///
/// Values are inferred the way logfmt readers do: `true`/`false` become
/// booleans, a bare `key` is `true`, and an unquoted empty value is null.
/// Double quotes group spaces into a value and a backslash escapes the next
/// character. A repeated key keeps its first position and its last value.
pub fn parse_logfmt(line: &str) -> Map<String, Value> {
    let mut object = Map::new();
    let mut key = String::new();
    let mut value = String::new();
    let mut in_key = false;
    let mut in_value = false;
    let mut in_quote = false;
    let mut quoted = false;

    let mut chars = line.chars();
    loop {
        let next = chars.next();

        let at_boundary = match next {
            None => true,
            Some(' ') => !in_quote,
            Some(_) => false,
        };

        if at_boundary {
            if in_key && !key.is_empty() {
                object.insert(key.clone(), Value::Bool(true));
            } else if in_value {
                let parsed = match value.as_str() {
                    "true" => Value::Bool(true),
                    "false" => Value::Bool(false),
                    "" if !quoted => Value::Null,
                    _ => Value::String(value.clone()),
                };
                object.insert(key.clone(), parsed);
                value.clear();
            }

            in_key = false;
            in_value = false;
            in_quote = false;
            quoted = false;
        }

        let Some(c) = next else {
            break;
        };

        match c {
            ' ' if !in_quote => {}
            '=' if !in_quote => {
                in_key = false;
                in_value = true;
            }
            '\\' => {
                if let Some(escaped) = chars.next() {
                    if in_key {
                        key.push(escaped);
                    } else {
                        value.push(escaped);
                    }
                }
            }
            '"' => {
                quoted = true;
                in_quote = !in_quote;
            }
            _ if !in_value && !in_key => {
                in_key = true;
                key.clear();
                key.push(c);
            }
            _ if in_key => key.push(c),
            _ => value.push(c),
        }
    }

    object
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

/// Convert a logfmt tag filter to the compact JSON the trace UI accepts.
///
/// Returns `None` for blank input. Every value is coerced to a string, since
/// the trace query API rejects typed tag values.
pub fn conv_tags_logfmt(tags: &str) -> Option<String> {
    if tags.trim().is_empty() {
        return None;
    }

    let data: Map<String, Value> = parse_logfmt(tags)
        .into_iter()
        .map(|(key, value)| (key, Value::String(value_to_text(value))))
        .collect();

    Some(Value::Object(data).to_string())
}
