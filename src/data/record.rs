// record.rs - Book record validation and id ordering

use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;

/// Fields every book record must carry
pub const REQUIRED_FIELDS: [&str; 3] = ["id", "title", "chapters"];

/// One validated book record. Wraps the raw JSON object so that any extra
/// fields survive the merge unmodified.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct BookRecord {
    value: Value,
}

impl BookRecord {
    /// Validate a parsed JSON value as a book record.
    ///
    /// The value must be an object containing `id`, `title` and `chapters`.
    /// The error message names every missing field.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let obj = value
            .as_object()
            .ok_or_else(|| "not a JSON object".to_string())?;

        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !obj.contains_key(**field))
            .copied()
            .collect();

        if !missing.is_empty() {
            return Err(format!(
                "missing required field(s): {}",
                missing
                    .iter()
                    .map(|f| format!("'{}'", f))
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }

        Ok(Self { value })
    }

    /// The record's ordering key. Present by construction.
    pub fn id(&self) -> &Value {
        &self.value["id"]
    }

    /// Borrow the underlying JSON object
    pub fn as_value(&self) -> &Value {
        &self.value
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Total order over JSON id values.
///
/// Numeric ids (the common case) compare numerically. Ids of different types
/// order by type rank (null < bool < number < string < array < object), so a
/// mixed catalog still sorts deterministically instead of depending on file
/// listing order.
pub fn compare_ids(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Null, Value::Null) => Ordering::Equal,
        _ => {
            let rank = type_rank(a).cmp(&type_rank(b));
            if rank != Ordering::Equal {
                rank
            } else {
                // Arrays and objects: compare their compact serialization
                a.to_string().cmp(&b.to_string())
            }
        }
    }
}
