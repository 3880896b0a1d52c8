//! The recursive value reconstructor.
//!
//! Entry point is [`Resolver::resolve`]: given a record's value text and
//! declared type, produce the fully typed [`Value`] tree, resolving pointer
//! indirection, array truncation and index patching, and nested field
//! assembly. All indirection tokens are normalized through one
//! [`canonical_ref`] step before any type-specific handling, so the unwrap
//! logic cannot diverge between the string, array, and object paths.

use std::collections::BTreeMap;

use crate::classify::{TypeClass, classify, element_type_name, primitive_kind_for};
use crate::error::CexError;
use crate::store::RecordStore;
use crate::value::{PrimitiveKind, Value};

/// Prefix of synthetic heap-slot names in JBMC traces.
pub const HEAP_SLOT_PREFIX: &str = "dynamic_object";

/// Field suffix carrying a heap object's runtime class tag.
const CLASS_ID_SUFFIX: &str = ".@class_identifier";
/// Field suffix of the intrinsic monitor count; bookkeeping, dropped.
const MONITOR_SUFFIX: &str = ".cproverMonitorCount";

/// Whether a value token is an indirection: an address-of token or a bare
/// heap-slot name.
fn is_reference(token: &str) -> bool {
    token.starts_with('&') || token.starts_with(HEAP_SLOT_PREFIX)
}

/// Normalize an indirection token to its canonical heap-slot name.
///
/// Strips the leading `&`, unwraps `((void *)...)` / `(void *)` pointer
/// casts, and drops any `[...]` element suffix. Non-indirection tokens pass
/// through unchanged.
pub fn canonical_ref(token: &str) -> String {
    let mut t = token.trim();
    t = t.strip_prefix('&').unwrap_or(t);
    loop {
        if let Some(rest) = t.strip_prefix("((void *)") {
            t = rest.strip_suffix(')').unwrap_or(rest);
        } else if let Some(rest) = t.strip_prefix("(void *)") {
            t = rest;
        } else {
            break;
        }
    }
    let t = t.split('[').next().unwrap_or(t);
    t.trim_end_matches(')').trim().to_string()
}

/// Reconstructs values against one execution's record store.
///
/// Tracks the canonical names on the current resolution path so that a
/// pathological trace with a reference cycle fails with
/// [`CexError::MalformedTrace`] instead of recursing forever.
pub struct Resolver<'a> {
    store: RecordStore<'a>,
    visiting: Vec<String>,
}

impl<'a> Resolver<'a> {
    pub fn new(store: RecordStore<'a>) -> Self {
        Self {
            store,
            visiting: Vec::new(),
        }
    }

    /// Reconstruct the value of one symbolic location from its recorded
    /// value text and declared type.
    pub fn resolve(&mut self, value_text: &str, declared_type: &str) -> Result<Value, CexError> {
        // The null literal short-circuits before type dispatch.
        if value_text.trim() == "null" {
            return Ok(Value::Null);
        }
        match classify(declared_type)? {
            TypeClass::Primitive(kind) => Ok(Value::Primitive {
                kind,
                text: value_text.trim().to_string(),
            }),
            TypeClass::Str => self.resolve_string(value_text),
            TypeClass::Array { .. } => self.resolve_array(value_text, declared_type),
            TypeClass::Object { .. } => self.resolve_object(value_text),
        }
    }

    /// Resolve a string: `.length` and `.data` last-writes on the heap
    /// object, with the `.data` payload chased to its character-array
    /// literal and truncated to the declared length.
    fn resolve_string(&mut self, token: &str) -> Result<Value, CexError> {
        let name = canonical_ref(token);
        let length = self.length_of(&name)?;
        let data = self.data_of(&name)?;
        let literal = if is_reference(&data) {
            self.chase_payload(&canonical_ref(&data))?.1
        } else {
            data
        };
        let parts = split_elements(&literal, '\'')?;
        let text: String = parts.concat().chars().take(length).collect();
        Ok(Value::Str { text, length })
    }

    /// Resolve an array: chase `.data` to a payload-bearing heap slot,
    /// parse the initial brace literal, apply index patches in document
    /// order, truncate to the last-written `.length`, then resolve element
    /// references.
    fn resolve_array(&mut self, token: &str, wrapper_type: &str) -> Result<Value, CexError> {
        let name = canonical_ref(token);
        let length = self.length_of(&name)?;
        let data = self.data_of(&name)?;

        let (payload_name, literal, payload_type) = if is_reference(&data) {
            let (payload, literal, ty) = self.chase_payload(&canonical_ref(&data))?;
            (Some(payload), literal, Some(ty))
        } else {
            // Inline literal with no payload slot: nothing to patch against.
            (None, data, None)
        };

        let mut tokens = split_elements(&literal, '"')?;
        if let Some(payload) = &payload_name {
            let prefix = format!("{payload}[");
            for rec in self.store.records_for_root(payload) {
                let Some(rest) = rec.path.strip_prefix(prefix.as_str()) else {
                    continue;
                };
                let index = parse_numeric(rest.split(']').next().unwrap_or(rest), "array index")?;
                if index >= tokens.len() {
                    return Err(CexError::MalformedTrace(format!(
                        "index patch `{}` outside initial literal of {} elements",
                        rec.path,
                        tokens.len()
                    )));
                }
                tokens[index] = rec.value.clone();
            }
        }
        tokens.truncate(length);

        let elem_type = payload_type
            .as_deref()
            .map(element_type_name)
            .unwrap_or_else(|| element_type_name(wrapper_type));
        let kind = primitive_kind_for(&elem_type);

        let mut elements = Vec::with_capacity(tokens.len());
        for t in tokens {
            if t == "null" {
                elements.push(Value::Null);
            } else if is_reference(&t) {
                elements.push(self.resolve_object(&t)?);
            } else {
                elements.push(Value::Primitive { kind, text: t });
            }
        }
        Ok(Value::Array {
            elem_type,
            length,
            elements,
        })
    }

    /// Resolve an object: enumerate every record rooted at the canonical
    /// heap name, strip the root segment, and assemble the field map.
    fn resolve_object(&mut self, token: &str) -> Result<Value, CexError> {
        let name = canonical_ref(token);
        if self.visiting.iter().any(|n| n == &name) {
            return Err(CexError::MalformedTrace(format!(
                "reference cycle through `{name}`"
            )));
        }
        self.visiting.push(name.clone());
        let result = self.object_fields(&name);
        self.visiting.pop();
        result
    }

    fn object_fields(&mut self, name: &str) -> Result<Value, CexError> {
        let mut class = None;
        let mut fields = BTreeMap::new();
        let records: Vec<_> = self.store.records_for_root(name).collect();
        for rec in records {
            let Some(rest) = rec.path.strip_prefix(name) else {
                continue;
            };
            // The aggregate initializer row for the whole object carries no
            // field information.
            if rest.is_empty() {
                continue;
            }
            if rec.path.ends_with(CLASS_ID_SUFFIX) {
                class = Some(class_tag(&rec.value));
                continue;
            }
            if rec.path.ends_with(MONITOR_SUFFIX) {
                continue;
            }
            let rel = rest.trim_start_matches('.');
            if rel.is_empty() {
                continue;
            }
            let segments: Vec<&str> = rel.split('.').collect();
            let value = if rec.value == "null" {
                Value::Null
            } else if is_reference(&rec.value) {
                self.resolve_reference(&rec.value, &rec.declared_type)?
            } else {
                Value::Primitive {
                    kind: literal_kind(&rec.declared_type),
                    text: rec.value.clone(),
                }
            };
            nested_set(&mut fields, &segments, value);
        }
        Ok(Value::Object { class, fields })
    }

    /// Dispatch a nested reference on its own declared type.
    fn resolve_reference(&mut self, token: &str, declared: &str) -> Result<Value, CexError> {
        match classify(declared)? {
            TypeClass::Array { .. } => self.resolve_array(token, declared),
            TypeClass::Str => self.resolve_string(token),
            TypeClass::Object { .. } | TypeClass::Primitive(_) => self.resolve_object(token),
        }
    }

    /// Follow a dereference chain from a canonical heap name to the slot
    /// that carries the brace-literal payload.
    ///
    /// Returns `(payload_name, literal, declared_type)`. Each hop takes the
    /// last write at the current name; a chain that revisits a name or never
    /// reaches a literal is malformed.
    fn chase_payload(&self, start: &str) -> Result<(String, String, String), CexError> {
        let mut seen: Vec<String> = Vec::new();
        let mut name = start.to_string();
        loop {
            if seen.iter().any(|n| n == &name) {
                return Err(CexError::MalformedTrace(format!(
                    "reference cycle through `{name}`"
                )));
            }
            seen.push(name.clone());

            let rec = self.store.last_write(&name).ok_or_else(|| {
                CexError::MalformedTrace(format!("no payload record for `{name}`"))
            })?;
            if rec.value.starts_with('{') {
                return Ok((name, rec.value.clone(), rec.declared_type.clone()));
            }
            if is_reference(&rec.value) {
                name = canonical_ref(&rec.value);
                continue;
            }
            return Err(CexError::MalformedTrace(format!(
                "dereference chain at `{name}` ends in non-literal `{}`",
                rec.value
            )));
        }
    }

    /// Last-written `.length` for a heap object, parsed as a count.
    fn length_of(&self, name: &str) -> Result<usize, CexError> {
        let rec = self
            .store
            .last_write(&format!("{name}.length"))
            .ok_or_else(|| CexError::MalformedTrace(format!("missing `.length` for `{name}`")))?;
        parse_numeric(&rec.value, "length")
    }

    /// Last-written `.data` value text for a heap object.
    fn data_of(&self, name: &str) -> Result<String, CexError> {
        let rec = self
            .store
            .last_write(&format!("{name}.data"))
            .ok_or_else(|| CexError::MalformedTrace(format!("missing `.data` for `{name}`")))?;
        Ok(rec.value.clone())
    }
}

/// Runtime class tag from a class-identifier record value: quotes and
/// `::`-namespace prefix stripped (`"java::MyApp::Point"` -> `Point`).
fn class_tag(value: &str) -> String {
    let stripped = value.trim().trim_matches('"');
    stripped.rsplit("::").next().unwrap_or(stripped).to_string()
}

/// Primitive family of a literal field's declared type; unrecognized
/// descriptors keep the raw text under the integer family.
fn literal_kind(declared: &str) -> PrimitiveKind {
    match classify(declared) {
        Ok(TypeClass::Primitive(kind)) => kind,
        _ => PrimitiveKind::Integral,
    }
}

/// Split a brace-delimited, comma-separated literal into raw element
/// tokens, honoring segments quoted with `quote` (the quote characters are
/// removed from the tokens).
fn split_elements(literal: &str, quote: char) -> Result<Vec<String>, CexError> {
    let inner = literal
        .trim()
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(|| {
            CexError::MalformedTrace(format!("expected a brace literal, got `{literal}`"))
        })?
        .trim();
    if inner.is_empty() {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    for c in inner.chars() {
        if c == quote {
            in_quote = !in_quote;
        } else if c == ',' && !in_quote {
            out.push(std::mem::take(&mut current).trim().to_string());
        } else {
            current.push(c);
        }
    }
    if in_quote {
        return Err(CexError::MalformedTrace(format!(
            "unterminated quote in literal `{literal}`"
        )));
    }
    out.push(current.trim().to_string());
    Ok(out)
}

/// Leading digits of a numeric literal, with any suffix (`1L`) ignored.
fn parse_numeric(text: &str, what: &str) -> Result<usize, CexError> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return Err(CexError::MalformedTrace(format!(
            "cannot parse {what} from `{text}`"
        )));
    }
    digits
        .parse::<usize>()
        .map_err(|_| CexError::MalformedTrace(format!("{what} `{text}` out of range")))
}

/// Set a value at a nested field path, creating intermediate object maps on
/// demand. A non-object intermediate is replaced; later writes win.
fn nested_set(fields: &mut BTreeMap<String, Value>, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [last] => {
            fields.insert((*last).to_string(), value);
        }
        [head, rest @ ..] => {
            let entry = fields.entry((*head).to_string()).or_insert_with(|| Value::Object {
                class: None,
                fields: BTreeMap::new(),
            });
            if !matches!(entry, Value::Object { .. }) {
                *entry = Value::Object {
                    class: None,
                    fields: BTreeMap::new(),
                };
            }
            if let Value::Object { fields, .. } = entry {
                nested_set(fields, rest, value);
            }
        }
    }
}
