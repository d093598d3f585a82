//! Property values as they appear in a deployment model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a scalar property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    Boolean,
    Integer,
    String,
    Enum,
}

impl ScalarKind {
    pub fn type_name(self) -> &'static str {
        match self {
            ScalarKind::Boolean => "Boolean",
            ScalarKind::Integer => "Integer",
            ScalarKind::String => "String",
            ScalarKind::Enum => "Enum",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Whether a value is a single scalar or an array of scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Single,
    Array,
}

/// Reference to a literal of some enumeration, by name.
///
/// The owning enumeration is not tracked; two literals with the same name
/// are the same literal as far as property resolution is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumLiteral {
    pub name: String,
}

impl EnumLiteral {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for EnumLiteral {
    fn from(name: &str) -> Self { EnumLiteral::new(name) }
}

/// A single scalar value.
///
/// Booleans keep their textual token from the model (`"true"`, `"false"`, or
/// whatever the loader produced); only the exact token `"true"` reads as true.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Scalar {
    Boolean(String),
    Integer(i64),
    String(String),
    Enum(EnumLiteral),
}

const TRUE_TOKEN: &str = "true";

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Boolean(_) => ScalarKind::Boolean,
            Scalar::Integer(_) => ScalarKind::Integer,
            Scalar::String(_) => ScalarKind::String,
            Scalar::Enum(_) => ScalarKind::Enum,
        }
    }

    /// Boolean reading of the token. `None` for non-boolean scalars.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Boolean(token) => Some(token == TRUE_TOKEN),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the referenced enum literal.
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            Scalar::Enum(lit) => Some(&lit.name),
            _ => None,
        }
    }
}

/// A property value: one scalar, or an ordered array of scalars.
///
/// Arrays are expected to be homogeneous. A mixed array can still be built
/// (loaders are outside this crate), but every typed read treats it as a
/// mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", content = "data")]
pub enum PropertyValue {
    Single(Scalar),
    Array(Vec<Scalar>),
}

impl PropertyValue {
    pub fn boolean(token: impl Into<String>) -> Self {
        PropertyValue::Single(Scalar::Boolean(token.into()))
    }

    pub fn integer(v: i64) -> Self {
        PropertyValue::Single(Scalar::Integer(v))
    }

    pub fn string(v: impl Into<String>) -> Self {
        PropertyValue::Single(Scalar::String(v.into()))
    }

    pub fn enumerator(name: impl Into<String>) -> Self {
        PropertyValue::Single(Scalar::Enum(EnumLiteral::new(name)))
    }

    pub fn array(items: impl IntoIterator<Item = impl Into<Scalar>>) -> Self {
        PropertyValue::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn shape(&self) -> Shape {
        match self {
            PropertyValue::Single(_) => Shape::Single,
            PropertyValue::Array(_) => Shape::Array,
        }
    }

    pub fn as_single(&self) -> Option<&Scalar> {
        match self {
            PropertyValue::Single(s) => Some(s),
            PropertyValue::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Scalar]> {
        match self {
            PropertyValue::Array(items) => Some(items),
            PropertyValue::Single(_) => None,
        }
    }

    /// Kind of the value. For arrays, the kind shared by all elements;
    /// `None` for empty or mixed arrays.
    pub fn kind(&self) -> Option<ScalarKind> {
        match self {
            PropertyValue::Single(s) => Some(s.kind()),
            PropertyValue::Array(items) => {
                let first = items.first()?.kind();
                items.iter().all(|s| s.kind() == first).then_some(first)
            }
        }
    }

    /// True unless this is an array mixing scalar kinds.
    pub fn is_homogeneous(&self) -> bool {
        match self {
            PropertyValue::Single(_) => true,
            PropertyValue::Array(items) => items.is_empty() || self.kind().is_some(),
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for Scalar {
    fn from(v: bool) -> Self { Scalar::Boolean(v.to_string()) }
}
impl From<i32> for Scalar { fn from(v: i32) -> Self { Scalar::Integer(v as i64) } }
impl From<i64> for Scalar { fn from(v: i64) -> Self { Scalar::Integer(v) } }
impl From<String> for Scalar { fn from(v: String) -> Self { Scalar::String(v) } }
impl From<&str> for Scalar { fn from(v: &str) -> Self { Scalar::String(v.to_owned()) } }
impl From<EnumLiteral> for Scalar { fn from(v: EnumLiteral) -> Self { Scalar::Enum(v) } }

impl From<Scalar> for PropertyValue { fn from(v: Scalar) -> Self { PropertyValue::Single(v) } }
impl From<bool> for PropertyValue { fn from(v: bool) -> Self { PropertyValue::Single(v.into()) } }
impl From<i32> for PropertyValue { fn from(v: i32) -> Self { PropertyValue::Single(v.into()) } }
impl From<i64> for PropertyValue { fn from(v: i64) -> Self { PropertyValue::Single(v.into()) } }
impl From<String> for PropertyValue { fn from(v: String) -> Self { PropertyValue::Single(v.into()) } }
impl From<&str> for PropertyValue { fn from(v: &str) -> Self { PropertyValue::Single(v.into()) } }
impl From<EnumLiteral> for PropertyValue { fn from(v: EnumLiteral) -> Self { PropertyValue::Single(v.into()) } }
impl<T: Into<Scalar>> From<Vec<T>> for PropertyValue {
    fn from(v: Vec<T>) -> Self { PropertyValue::array(v) }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Boolean(token) => write!(f, "{token}"),
            Scalar::Integer(i) => write!(f, "{i}"),
            Scalar::String(s) => write!(f, "\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
            Scalar::Enum(lit) => write!(f, "{}", lit.name),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Single(s) => write!(f, "{s}"),
            PropertyValue::Array(items) => {
                write!(f, "{{")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 { write!(f, ",")?; }
                    write!(f, " {v}")?;
                }
                if items.is_empty() { write!(f, "}}") } else { write!(f, " }}") }
            }
        }
    }
}
