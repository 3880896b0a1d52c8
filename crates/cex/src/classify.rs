//! Type-descriptor classification.
//!
//! JBMC reports each assignment's type as free-form descriptor text. This
//! module maps that text onto a closed [`TypeClass`] so the reconstructor
//! can dispatch exhaustively instead of re-matching strings in every
//! handler. Precedence: primitive keywords, then the built-in string
//! struct, then the synthetic array wrapper, then any other struct.

use crate::error::CexError;
use crate::value::PrimitiveKind;

/// Integer-family primitive keywords.
const INTEGRAL_TYPES: [&str; 6] = ["int", "long", "short", "byte", "char", "boolean"];
/// Floating-family primitive keywords.
const FLOATING_TYPES: [&str; 2] = ["float", "double"];
/// Descriptor prefix of the built-in string representation.
const STRING_TYPE_PREFIX: &str = "struct java.lang.String";
/// Descriptor prefix of the synthetic array wrapper struct.
const ARRAY_TYPE_PREFIX: &str = "struct java::array";
/// Marker embedding the element type inside an array wrapper name.
const ARRAY_ELEM_MARKER: &str = "java::array[";

/// Classification of a type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeClass {
    Primitive(PrimitiveKind),
    Str,
    Array { elem: String },
    Object { class: String },
}

/// Classify a JBMC type descriptor.
///
/// Any descriptor that matches none of the known shapes is an
/// [`CexError::UnsupportedType`], fatal for that one argument's
/// reconstruction but not for the run.
pub fn classify(declared: &str) -> Result<TypeClass, CexError> {
    let t = declared.trim();
    if INTEGRAL_TYPES.contains(&t) {
        return Ok(TypeClass::Primitive(PrimitiveKind::Integral));
    }
    if FLOATING_TYPES.contains(&t) {
        return Ok(TypeClass::Primitive(PrimitiveKind::Floating));
    }
    if t.starts_with(STRING_TYPE_PREFIX) {
        return Ok(TypeClass::Str);
    }
    if t.starts_with(ARRAY_TYPE_PREFIX) {
        return Ok(TypeClass::Array {
            elem: element_type_name(t),
        });
    }
    if t.starts_with("struct") {
        return Ok(TypeClass::Object {
            class: class_name(t)?,
        });
    }
    Err(CexError::UnsupportedType(t.to_string()))
}

/// Java-facing type label for reporting: `int`, `String`, `int[]`, or the
/// class name.
pub fn display_name(declared: &str, class: &TypeClass) -> String {
    match class {
        TypeClass::Primitive(_) => declared.trim().to_string(),
        TypeClass::Str => "String".to_string(),
        TypeClass::Array { elem } => format!("{elem}[]"),
        TypeClass::Object { class } => class.clone(),
    }
}

/// Element type name of an array payload or wrapper descriptor.
///
/// Wrapper descriptors embed the element in the marker
/// (`struct java::array[int] {...}` -> `int`); object-element wrappers fall
/// back to the class-name segment; non-struct payload descriptors
/// (`int [3]`) take their first whitespace token.
pub fn element_type_name(declared: &str) -> String {
    let t = declared.trim();
    if let Some(rest) = t.strip_prefix("struct") {
        let token = rest.split_whitespace().next().unwrap_or("");
        if let Some(elem) = token.strip_prefix(ARRAY_ELEM_MARKER) {
            return elem.split(']').next().unwrap_or(elem).to_string();
        }
        return token.to_string();
    }
    t.split_whitespace().next().unwrap_or(t).to_string()
}

/// Primitive family for an element type name; non-primitive names default
/// to the integer family (their elements carry verbatim literal text).
pub fn primitive_kind_for(elem: &str) -> PrimitiveKind {
    if FLOATING_TYPES.contains(&elem) {
        PrimitiveKind::Floating
    } else {
        PrimitiveKind::Integral
    }
}

/// Class name of a struct descriptor: its second whitespace-separated
/// token, with any pointer marker stripped.
fn class_name(declared: &str) -> Result<String, CexError> {
    declared
        .split_whitespace()
        .nth(1)
        .map(|t| t.trim_end_matches('*').to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| CexError::UnsupportedType(declared.to_string()))
}
