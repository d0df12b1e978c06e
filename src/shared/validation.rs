use serde::{de, Deserialize, Deserializer};
use validator::ValidationErrors;

use crate::shared::types::FieldErrors;

/// Flatten `validator` output into field -> messages
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("El campo {} no es válido ({}).", field, e.code),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Trim input text and treat blank strings as absent.
///
/// Submitted text is trimmed before validation, and an empty result counts
/// as "not provided", so `"   "` fails a `required` rule and is stored as NULL
/// in nullable columns.
pub fn clean_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse an HTML form boolean. A missing checkbox is `false`.
///
/// Returns `None` when the value is not a recognised boolean.
pub fn parse_form_bool(value: Option<&str>) -> Option<bool> {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") => Some(false),
        Some("1" | "true" | "on" | "yes") => Some(true),
        Some("0" | "false" | "off" | "no") => Some(false),
        Some(_) => None,
    }
}

/// Deserialize an optional JSON boolean that may also arrive as `0`/`1`,
/// `"0"`/`"1"` or `"true"`/`"false"`. `null` and `""` mean "not provided".
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(b)),
        Some(Value::Number(n)) if n.as_i64() == Some(1) => Ok(Some(true)),
        Some(Value::Number(n)) if n.as_i64() == Some(0) => Ok(Some(false)),
        Some(Value::String(s)) => match s.trim() {
            "" => Ok(None),
            "1" | "true" => Ok(Some(true)),
            "0" | "false" => Ok(Some(false)),
            _ => Err(de::Error::custom(BOOLEAN_MESSAGE)),
        },
        Some(_) => Err(de::Error::custom(BOOLEAN_MESSAGE)),
    }
}

/// Deserialize a field where a missing key and an explicit `null` differ.
///
/// Pair with `#[serde(default)]`: absent stays `None`, `null` becomes
/// `Some(None)` and a value becomes `Some(Some(v))`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

const BOOLEAN_MESSAGE: &str = "el valor debe ser verdadero o falso";
