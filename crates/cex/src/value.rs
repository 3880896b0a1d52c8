//! Reconstructed counterexample values.
//!
//! [`Value`] is the output type of the reconstructor: a closed tagged union
//! over primitives, null, strings, arrays, and object graphs. Each value
//! renders both as a human-readable display string and as a structured
//! `serde_json::Value` for machine consumption.

use std::collections::BTreeMap;

use serde_json::Value as JsonValue;

/// Family of a primitive literal. JBMC's integer-like primitives (`int`,
/// `long`, `short`, `byte`, `char`, `boolean`) share one family; `float`
/// and `double` share the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Integral,
    Floating,
}

/// A fully reconstructed, typed value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The `null` literal. Distinct from "value absent": a null field is
    /// recorded in its parent object, an absent one is not.
    Null,
    /// Primitive literal text, kept verbatim, tagged with its family.
    Primitive { kind: PrimitiveKind, text: String },
    /// Resolved character sequence plus the declared length.
    Str { text: String, length: usize },
    /// Ordered elements after pointer chasing, index patching, and
    /// truncation to the last-written length.
    Array {
        elem_type: String,
        length: usize,
        elements: Vec<Value>,
    },
    /// Field map plus the resolved runtime class tag (distinct from the
    /// declared static type, which lives on the input record).
    Object {
        class: Option<String>,
        fields: BTreeMap<String, Value>,
    },
}

impl Value {
    /// Human-readable rendering, e.g. `[1, 9]` or `Point { x: 1, y: 2 }`.
    pub fn display(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Primitive { text, .. } => text.clone(),
            Value::Str { text, .. } => format!("\"{text}\""),
            Value::Array { elements, .. } => {
                let parts: Vec<String> = elements.iter().map(Value::display).collect();
                format!("[{}]", parts.join(", "))
            }
            Value::Object { class, fields } => {
                let parts: Vec<String> = fields
                    .iter()
                    .map(|(name, value)| format!("{name}: {}", value.display()))
                    .collect();
                match class {
                    Some(class) => format!("{class} {{ {} }}", parts.join(", ")),
                    None => format!("{{ {} }}", parts.join(", ")),
                }
            }
        }
    }

    /// Structured JSON rendering.
    ///
    /// Integral literals that parse as `i64` and floating literals that
    /// parse as `f64` become JSON numbers; everything else keeps its raw
    /// text. The class tag of an object is emitted as a `__class` field.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Null => JsonValue::Null,
            Value::Primitive { kind, text } => match kind {
                PrimitiveKind::Integral => text
                    .parse::<i64>()
                    .map(|n| JsonValue::Number(serde_json::Number::from(n)))
                    .unwrap_or_else(|_| JsonValue::String(text.clone())),
                PrimitiveKind::Floating => text
                    .parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(JsonValue::Number)
                    .unwrap_or_else(|| JsonValue::String(text.clone())),
            },
            Value::Str { text, .. } => JsonValue::String(text.clone()),
            Value::Array { elements, .. } => {
                JsonValue::Array(elements.iter().map(Value::to_json).collect())
            }
            Value::Object { class, fields } => {
                let mut map = serde_json::Map::new();
                if let Some(class) = class {
                    map.insert("__class".to_string(), JsonValue::String(class.clone()));
                }
                for (name, value) in fields {
                    map.insert(name.clone(), value.to_json());
                }
                JsonValue::Object(map)
            }
        }
    }
}
