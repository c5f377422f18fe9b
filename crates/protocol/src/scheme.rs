//! Structural type descriptors
//!
//! A [`Scheme`] mirrors the shape of a payload without carrying data. It
//! serves two purposes: verifying that a value tree matches an expected
//! shape, and letting the codec reuse each key's precomputed wire bytes
//! instead of re-validating names on every call.
//!
//! # Positional correspondence
//!
//! Verification and key matching pair scheme entries with payload entries
//! by depth-first traversal position, never by key-name lookup. The
//! flattened pre-order key sequence of a scheme must equal, key for key,
//! the iteration order of the payloads it describes. Author schemes in
//! payload order; a reordered payload fails, it is not re-matched.

use std::fmt;

use indexmap::IndexMap;

use crate::{Key, Payload, ProtocolError, Result, TypeTag, Value};

// =============================================================================
// Leaf descriptors
// =============================================================================

/// Leaf descriptor kinds
///
/// One per scalar/String/Guid/Null type, one per vector of those, plus
/// dummy sentinels for empty containers and empty vectors whose element
/// type cannot be known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Descriptor {
    Byte,
    Short,
    Integer,
    Long,
    Flag,
    Float,
    Double,
    String,
    Guid,
    Null,
    /// Empty container; matches any container value
    ContainerDummy,
    /// Empty vector; matches any vector value
    VectorDummy,
    VectorByte,
    VectorShort,
    VectorInteger,
    VectorLong,
    VectorFlag,
    VectorFloat,
    VectorDouble,
    VectorString,
    VectorGuid,
    VectorNull,
}

impl Descriptor {
    /// The vector descriptor for a scalar element kind, if one exists
    pub(crate) const fn vector_of(kind: TypeTag) -> Option<Self> {
        match kind {
            TypeTag::Byte => Some(Self::VectorByte),
            TypeTag::Short => Some(Self::VectorShort),
            TypeTag::Integer => Some(Self::VectorInteger),
            TypeTag::Long => Some(Self::VectorLong),
            TypeTag::Flag => Some(Self::VectorFlag),
            TypeTag::Float => Some(Self::VectorFloat),
            TypeTag::Double => Some(Self::VectorDouble),
            TypeTag::String => Some(Self::VectorString),
            TypeTag::Guid => Some(Self::VectorGuid),
            TypeTag::Null => Some(Self::VectorNull),
            TypeTag::Vector | TypeTag::Container => None,
        }
    }

    /// Check that a value is of the exact kind this descriptor names
    ///
    /// For vector descriptors the value must be a vector *and* declare the
    /// matching element kind, even when empty.
    ///
    /// # Errors
    ///
    /// Fails with [`ProtocolError::TypeMismatch`] on any disagreement.
    pub fn verify(self, value: &Value) -> Result<()> {
        let matches = match self {
            Self::Byte => matches!(value, Value::Byte(_)),
            Self::Short => matches!(value, Value::Short(_)),
            Self::Integer => matches!(value, Value::Integer(_)),
            Self::Long => matches!(value, Value::Long(_)),
            Self::Flag => matches!(value, Value::Flag(_)),
            Self::Float => matches!(value, Value::Float(_)),
            Self::Double => matches!(value, Value::Double(_)),
            Self::String => matches!(value, Value::String(_)),
            Self::Guid => matches!(value, Value::Guid(_)),
            Self::Null => matches!(value, Value::Null),
            Self::ContainerDummy => matches!(value, Value::Container(_)),
            Self::VectorDummy => matches!(value, Value::Vector(_)),
            Self::VectorByte => vector_kind(value) == Some(TypeTag::Byte),
            Self::VectorShort => vector_kind(value) == Some(TypeTag::Short),
            Self::VectorInteger => vector_kind(value) == Some(TypeTag::Integer),
            Self::VectorLong => vector_kind(value) == Some(TypeTag::Long),
            Self::VectorFlag => vector_kind(value) == Some(TypeTag::Flag),
            Self::VectorFloat => vector_kind(value) == Some(TypeTag::Float),
            Self::VectorDouble => vector_kind(value) == Some(TypeTag::Double),
            Self::VectorString => vector_kind(value) == Some(TypeTag::String),
            Self::VectorGuid => vector_kind(value) == Some(TypeTag::Guid),
            Self::VectorNull => vector_kind(value) == Some(TypeTag::Null),
        };

        if matches {
            Ok(())
        } else {
            Err(ProtocolError::type_mismatch(
                self.as_str(),
                value.kind_str(),
            ))
        }
    }

    /// Get the string name of this descriptor
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Flag => "flag",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Guid => "guid",
            Self::Null => "null",
            Self::ContainerDummy => "empty container",
            Self::VectorDummy => "empty vector",
            Self::VectorByte => "vector of byte",
            Self::VectorShort => "vector of short",
            Self::VectorInteger => "vector of integer",
            Self::VectorLong => "vector of long",
            Self::VectorFlag => "vector of flag",
            Self::VectorFloat => "vector of float",
            Self::VectorDouble => "vector of double",
            Self::VectorString => "vector of string",
            Self::VectorGuid => "vector of guid",
            Self::VectorNull => "vector of null",
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn vector_kind(value: &Value) -> Option<TypeTag> {
    match value {
        Value::Vector(v) => Some(v.kind()),
        _ => None,
    }
}

// =============================================================================
// Scheme tree
// =============================================================================

/// A recursive structural descriptor tree
///
/// - `Leaf` describes one scalar/string/guid/null/vector value
/// - `Object` mirrors a container, field by field, in payload order
/// - `List` mirrors a vector of containers or vectors, preserving each
///   element's own (possibly distinct) sub-scheme by position
///
/// A scheme is built once, by hand or via [`crate::infer_scheme`], and
/// reused read-only across encode/decode calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Scheme {
    Leaf(Descriptor),
    Object(IndexMap<Key, Scheme>),
    List(Vec<Scheme>),
}

impl Scheme {
    /// Build an object node from ordered fields
    pub fn object(fields: impl IntoIterator<Item = (Key, Scheme)>) -> Self {
        Self::Object(fields.into_iter().collect())
    }

    /// Build a list node from per-element sub-schemes
    pub fn list(elements: impl IntoIterator<Item = Scheme>) -> Self {
        Self::List(elements.into_iter().collect())
    }

    /// Collect every key in depth-first pre-order
    ///
    /// This is the exact order in which a matching payload's keys are
    /// visited during encode and decode.
    pub fn flattened_keys(&self) -> Vec<&Key> {
        let mut keys = Vec::new();
        collect_keys(self, &mut keys);
        keys
    }
}

impl From<Descriptor> for Scheme {
    fn from(descriptor: Descriptor) -> Self {
        Self::Leaf(descriptor)
    }
}

fn collect_keys<'a>(scheme: &'a Scheme, keys: &mut Vec<&'a Key>) {
    match scheme {
        Scheme::Leaf(_) => {}
        Scheme::Object(fields) => {
            for (key, sub) in fields {
                keys.push(key);
                collect_keys(sub, keys);
            }
        }
        Scheme::List(elements) => {
            for sub in elements {
                collect_keys(sub, keys);
            }
        }
    }
}

// =============================================================================
// Positional key cursor
// =============================================================================

/// Cursor over a scheme's flattened key sequence
///
/// The codec pulls one expected key per tag, in traversal order.
pub(crate) struct KeySeq<'a> {
    keys: Vec<&'a Key>,
    pos: usize,
}

impl<'a> KeySeq<'a> {
    /// Flatten a scheme's keys; the root must be an object
    pub(crate) fn new(scheme: &'a Scheme) -> Result<Self> {
        root_fields(scheme)?;
        Ok(Self {
            keys: scheme.flattened_keys(),
            pos: 0,
        })
    }

    /// The next expected key
    ///
    /// # Errors
    ///
    /// Fails with [`ProtocolError::SchemeShapeMismatch`] when the payload
    /// carries more tags than the scheme describes.
    pub(crate) fn next(&mut self) -> Result<&'a Key> {
        let key = self
            .keys
            .get(self.pos)
            .ok_or_else(|| ProtocolError::shape_mismatch(self.keys.len(), self.pos + 1))?;
        self.pos += 1;
        Ok(key)
    }
}

/// Get the root object fields, or fail if the scheme root is not an object
pub(crate) fn root_fields(scheme: &Scheme) -> Result<&IndexMap<Key, Scheme>> {
    match scheme {
        Scheme::Object(fields) => Ok(fields),
        Scheme::Leaf(d) => Err(ProtocolError::type_mismatch("object scheme", d.as_str())),
        Scheme::List(_) => Err(ProtocolError::type_mismatch("object scheme", "list scheme")),
    }
}

// =============================================================================
// Structural verification
// =============================================================================

/// Verify that a payload matches a scheme, entry by entry, by position
///
/// Applied before encode and after decode whenever a scheme is supplied.
/// Key *names* are not consulted here; see the module docs on positional
/// correspondence.
///
/// # Errors
///
/// - [`ProtocolError::SchemeShapeMismatch`] when a container or vector
///   length disagrees with the scheme at any level
/// - [`ProtocolError::TypeMismatch`] when a leaf value's kind disagrees
///   with its descriptor, or a value is not the container/vector its
///   scheme node requires
pub fn verify(payload: &Payload, scheme: &Scheme) -> Result<()> {
    verify_object(payload, root_fields(scheme)?)
}

fn verify_object(payload: &Payload, fields: &IndexMap<Key, Scheme>) -> Result<()> {
    if payload.len() != fields.len() {
        return Err(ProtocolError::shape_mismatch(fields.len(), payload.len()));
    }

    for (value, sub) in payload.values().zip(fields.values()) {
        verify_node(value, sub)?;
    }
    Ok(())
}

fn verify_list(values: &[Value], elements: &[Scheme]) -> Result<()> {
    if values.len() != elements.len() {
        return Err(ProtocolError::shape_mismatch(elements.len(), values.len()));
    }

    for (value, sub) in values.iter().zip(elements) {
        verify_node(value, sub)?;
    }
    Ok(())
}

fn verify_node(value: &Value, scheme: &Scheme) -> Result<()> {
    match scheme {
        Scheme::Leaf(descriptor) => descriptor.verify(value),
        Scheme::Object(fields) => match value {
            Value::Container(payload) => verify_object(payload, fields),
            other => Err(ProtocolError::type_mismatch(
                "container",
                other.kind_str(),
            )),
        },
        Scheme::List(elements) => match value {
            Value::Vector(vector) => verify_list(vector.elements(), elements),
            other => Err(ProtocolError::type_mismatch("vector", other.kind_str())),
        },
    }
}
