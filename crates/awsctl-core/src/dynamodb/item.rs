//! JSON <-> DynamoDB attribute value conversion
//!
//! Items cross the CLI boundary as plain JSON objects; these helpers convert
//! them to and from the SDK's `AttributeValue` model. Numbers map to the `N`
//! type and keep their decimal representation, so nothing is silently
//! widened or truncated on the way in.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::Value;

use crate::error::{ActionError, ActionResult};

/// Convert a JSON object into a DynamoDB item map.
///
/// The value must be a non-empty object; anything else is caller error.
pub fn to_item(value: &Value) -> ActionResult<HashMap<String, AttributeValue>> {
    match value {
        Value::Object(map) if !map.is_empty() => map
            .iter()
            .map(|(k, v)| Ok((k.clone(), to_attribute_value(v)?)))
            .collect(),
        Value::Object(_) => Err(ActionError::validation(
            "item must contain at least one attribute",
        )),
        _ => Err(ActionError::validation("item must be a JSON object")),
    }
}

/// Convert one JSON value into an attribute value
pub fn to_attribute_value(value: &Value) -> ActionResult<AttributeValue> {
    Ok(match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => AttributeValue::L(
            items
                .iter()
                .map(to_attribute_value)
                .collect::<ActionResult<Vec<_>>>()?,
        ),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| Ok((k.clone(), to_attribute_value(v)?)))
                .collect::<ActionResult<HashMap<_, _>>>()?,
        ),
    })
}

/// Convert a DynamoDB item map back into a JSON object
pub fn from_item(item: &HashMap<String, AttributeValue>) -> Value {
    Value::Object(
        item.iter()
            .map(|(k, v)| (k.clone(), from_attribute_value(v)))
            .collect(),
    )
}

/// Convert one attribute value back into JSON.
///
/// Number strings that do not parse as JSON numbers are kept as strings
/// rather than dropped.
pub fn from_attribute_value(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => number_or_string(n),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(items) => Value::Array(items.iter().map(from_attribute_value).collect()),
        AttributeValue::M(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), from_attribute_value(v)))
                .collect(),
        ),
        AttributeValue::Ss(items) => {
            Value::Array(items.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::Ns(items) => Value::Array(items.iter().map(|n| number_or_string(n)).collect()),
        other => Value::String(format!("{other:?}")),
    }
}

fn number_or_string(n: &str) -> Value {
    serde_json::from_str::<serde_json::Number>(n)
        .map(Value::Number)
        .unwrap_or_else(|_| Value::String(n.to_string()))
}
