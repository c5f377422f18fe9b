//! The typed value model
//!
//! [`Value`] is a closed sum over everything that can appear in a payload.
//! [`Vector`] enforces kind homogeneity at construction, before any
//! encoding is attempted. [`Payload`] preserves insertion order, which is
//! semantically significant: it fixes wire order and the positional
//! pairing used by scheme-guided encode/decode.

use std::fmt;

use indexmap::IndexMap;
use uuid::Uuid;

use crate::{Key, ProtocolError, Result, TypeTag};

/// Ordered mapping from tag key to tag value
///
/// Used both as the top-level event payload and as the body of every
/// nested [`Value::Container`].
pub type Payload = IndexMap<Key, Value>;

/// A single tag value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Unsigned 8-bit integer
    Byte(u8),
    /// Signed 16-bit integer
    Short(i16),
    /// Signed 32-bit integer
    Integer(i32),
    /// Signed 64-bit integer
    Long(i64),
    /// Boolean flag
    Flag(bool),
    /// IEEE 754 single precision
    Float(f32),
    /// IEEE 754 double precision
    Double(f64),
    /// Byte string; empty and absent are not distinguished on the wire
    String(Vec<u8>),
    /// 128-bit globally unique identifier
    Guid(Uuid),
    /// Explicit null, no body on the wire
    Null,
    /// Kind-homogeneous sequence
    Vector(Vector),
    /// Nested sub-payload
    Container(Payload),
}

impl Value {
    /// Create a string value from anything byte-like
    #[inline]
    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        Self::String(bytes.into())
    }

    /// The wire type tag of this value
    #[inline]
    pub const fn tag(&self) -> TypeTag {
        match self {
            Self::Byte(_) => TypeTag::Byte,
            Self::Short(_) => TypeTag::Short,
            Self::Integer(_) => TypeTag::Integer,
            Self::Long(_) => TypeTag::Long,
            Self::Flag(_) => TypeTag::Flag,
            Self::Float(_) => TypeTag::Float,
            Self::Double(_) => TypeTag::Double,
            Self::String(_) => TypeTag::String,
            Self::Guid(_) => TypeTag::Guid,
            Self::Null => TypeTag::Null,
            Self::Vector(_) => TypeTag::Vector,
            Self::Container(_) => TypeTag::Container,
        }
    }

    /// The string name of this value's kind
    #[inline]
    pub const fn kind_str(&self) -> &'static str {
        self.tag().as_str()
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Self::Vector(v)
    }
}

impl From<Payload> for Value {
    fn from(p: Payload) -> Self {
        Self::Container(p)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(v) => write!(f, "{v}"),
            Self::Short(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Flag(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::String(bytes) => write!(f, "{:?}", String::from_utf8_lossy(bytes)),
            Self::Guid(id) => write!(f, "{id}"),
            Self::Null => write!(f, "null"),
            Self::Vector(v) => v.fmt(f),
            Self::Container(payload) => {
                write!(f, "{{")?;
                for (i, (key, value)) in payload.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// A kind-homogeneous sequence of values
///
/// The element kind is declared up front; construction fails if any
/// element disagrees. Elements of kind [`TypeTag::Vector`] or
/// [`TypeTag::Container`] may still differ in their own element kinds or
/// field sets - homogeneity constrains the kind, not the full shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    kind: TypeTag,
    elements: Vec<Value>,
}

impl Vector {
    /// Create a vector, checking every element against the declared kind
    ///
    /// # Errors
    ///
    /// Fails with [`ProtocolError::InvalidValue`] on the first element
    /// whose kind differs from `kind`.
    pub fn new(kind: TypeTag, elements: Vec<Value>) -> Result<Self> {
        if let Some(bad) = elements.iter().find(|e| e.tag() != kind) {
            return Err(ProtocolError::invalid_value(format!(
                "vector of {kind} holds a {} element",
                bad.kind_str()
            )));
        }
        Ok(Self { kind, elements })
    }

    /// Create an empty vector of the given element kind
    #[inline]
    pub const fn empty(kind: TypeTag) -> Self {
        Self {
            kind,
            elements: Vec::new(),
        }
    }

    /// The declared element kind
    #[inline]
    pub const fn kind(&self) -> TypeTag {
        self.kind
    }

    /// The elements in order
    #[inline]
    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the vector has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
