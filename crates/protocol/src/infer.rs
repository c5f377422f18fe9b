//! Scheme inference
//!
//! Derives a [`Scheme`] from one concrete payload by structural
//! induction, and collects the set of descriptor kinds used along the way
//! (downstream code generation wants the set to emit imports).
//!
//! Empty containers and empty vectors of structured elements carry no
//! element sample, so they map to the [`Descriptor::ContainerDummy`] and
//! [`Descriptor::VectorDummy`] sentinels. A vector of containers or
//! vectors becomes a [`Scheme::List`] with one sub-scheme per element,
//! preserving per-position shape even though the value model only
//! requires homogeneity of kind.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::{
    Descriptor, Payload, ProtocolError, Result, Scheme, TypeTag, Value, MAX_NESTING_DEPTH,
};

/// The set of descriptor kinds referenced by an inferred scheme
pub type DescriptorSet = BTreeSet<Descriptor>;

/// Infer a scheme from a sample payload
///
/// Returns the descriptor kinds used plus the scheme itself. The scheme's
/// key order is the payload's iteration order, so it describes exactly
/// the payloads that iterate the same way.
///
/// # Errors
///
/// Fails with [`ProtocolError::InvalidValue`] when nesting exceeds
/// [`MAX_NESTING_DEPTH`].
pub fn infer_scheme(payload: &Payload) -> Result<(DescriptorSet, Scheme)> {
    let mut kinds = DescriptorSet::new();
    let scheme = infer_object(payload, &mut kinds, 0)?;
    Ok((kinds, scheme))
}

fn infer_object(payload: &Payload, kinds: &mut DescriptorSet, depth: usize) -> Result<Scheme> {
    let mut fields = IndexMap::with_capacity(payload.len());
    for (key, value) in payload {
        fields.insert(key.clone(), infer_value(value, kinds, depth)?);
    }
    Ok(Scheme::Object(fields))
}

fn infer_value(value: &Value, kinds: &mut DescriptorSet, depth: usize) -> Result<Scheme> {
    let descriptor = match value {
        Value::Byte(_) => Descriptor::Byte,
        Value::Short(_) => Descriptor::Short,
        Value::Integer(_) => Descriptor::Integer,
        Value::Long(_) => Descriptor::Long,
        Value::Flag(_) => Descriptor::Flag,
        Value::Float(_) => Descriptor::Float,
        Value::Double(_) => Descriptor::Double,
        Value::String(_) => Descriptor::String,
        Value::Guid(_) => Descriptor::Guid,
        Value::Null => Descriptor::Null,

        Value::Container(payload) => {
            if payload.is_empty() {
                Descriptor::ContainerDummy
            } else {
                check_depth(depth)?;
                return infer_object(payload, kinds, depth + 1);
            }
        }

        Value::Vector(vector) => match vector.kind() {
            TypeTag::Vector | TypeTag::Container => {
                if vector.is_empty() {
                    Descriptor::VectorDummy
                } else {
                    check_depth(depth)?;
                    let mut elements = Vec::with_capacity(vector.len());
                    for element in vector {
                        elements.push(infer_value(element, kinds, depth + 1)?);
                    }
                    return Ok(Scheme::List(elements));
                }
            }
            kind => Descriptor::vector_of(kind).ok_or_else(|| {
                ProtocolError::invalid_value(format!("no vector descriptor for {kind}"))
            })?,
        },
    };

    kinds.insert(descriptor);
    Ok(Scheme::Leaf(descriptor))
}

fn check_depth(depth: usize) -> Result<()> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ProtocolError::invalid_value(format!(
            "nesting deeper than {MAX_NESTING_DEPTH} levels"
        )));
    }
    Ok(())
}
