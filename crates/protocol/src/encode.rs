//! Wire-format encoding
//!
//! Builds the byte image of an [`Event`]: the 27-byte header followed by
//! each tag's key encoding and value encoding. A value encodes as its
//! one-byte type tag plus a type-specific body; vector elements encode as
//! body only, since the element tag is declared once for the whole
//! vector. The bodies of nested vectors and containers are themselves
//! recursive, so structured elements keep their full layout.
//!
//! Supplying a scheme never changes the produced bytes: it verifies the
//! payload first, then substitutes precomputed key bytes checked
//! positionally against the actual keys.

use crate::scheme::{verify, KeySeq};
use crate::{
    Event, Key, Payload, ProtocolError, Result, Scheme, Value, Vector, HEADER_LEN,
    MAX_NESTING_DEPTH, MAX_TAG_COUNT,
};

/// Encode an event without a scheme
///
/// # Errors
///
/// Fails with [`ProtocolError::InvalidValue`] if a container exceeds the
/// i16 tag-count range, a vector exceeds the u32 element-count range, or
/// nesting exceeds [`MAX_NESTING_DEPTH`].
pub fn encode(event: &Event) -> Result<Vec<u8>> {
    let mut encoder = Encoder::new(None);
    encoder.event(event)?;
    Ok(encoder.buf)
}

/// Encode an event, verifying it against a scheme first
///
/// Produces bytes identical to [`encode`]; the scheme only adds
/// verification and positional key matching.
///
/// # Errors
///
/// In addition to everything [`encode`] reports: verification failures
/// ([`ProtocolError::TypeMismatch`], [`ProtocolError::SchemeShapeMismatch`])
/// and [`ProtocolError::SchemeMismatch`] when a payload key disagrees with
/// the scheme's key at that position.
pub fn encode_with_scheme(event: &Event, scheme: &Scheme) -> Result<Vec<u8>> {
    verify(event.payload(), scheme)?;
    let mut encoder = Encoder::new(Some(KeySeq::new(scheme)?));
    encoder.event(event)?;
    Ok(encoder.buf)
}

// =============================================================================
// Encoder
// =============================================================================

struct Encoder<'a> {
    buf: Vec<u8>,
    keys: Option<KeySeq<'a>>,
}

impl<'a> Encoder<'a> {
    fn new(keys: Option<KeySeq<'a>>) -> Self {
        Self {
            buf: Vec::with_capacity(HEADER_LEN + 64),
            keys,
        }
    }

    fn event(&mut self, event: &Event) -> Result<()> {
        self.buf.push(event.version());
        write_i64(&mut self.buf, event.timestamp());
        self.buf.extend_from_slice(event.source_id().as_bytes());

        write_i16(&mut self.buf, tag_count(event.payload())?);
        for (key, value) in event.payload() {
            self.key(key)?;
            self.value(value, 0)?;
        }
        Ok(())
    }

    /// Emit a key: either its own cached bytes, or the scheme's
    /// precomputed bytes after asserting the names agree
    fn key(&mut self, key: &Key) -> Result<()> {
        let encoded = match &mut self.keys {
            Some(seq) => {
                let expected = seq.next()?;
                if expected != key {
                    return Err(ProtocolError::scheme_mismatch(
                        expected.as_str(),
                        key.as_str(),
                    ));
                }
                expected.encoded()
            }
            None => key.encoded(),
        };
        self.buf.extend_from_slice(encoded);
        Ok(())
    }

    /// Emit type tag plus body
    fn value(&mut self, value: &Value, depth: usize) -> Result<()> {
        self.buf.push(value.tag().as_u8());
        self.body(value, depth)
    }

    /// Emit the type-specific body only
    fn body(&mut self, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Byte(v) => self.buf.push(*v),
            Value::Short(v) => write_i16(&mut self.buf, *v),
            Value::Integer(v) => self.buf.extend_from_slice(&v.to_be_bytes()),
            Value::Long(v) => write_i64(&mut self.buf, *v),
            Value::Flag(v) => self.buf.push(*v as u8),
            Value::Float(v) => self.buf.extend_from_slice(&v.to_be_bytes()),
            Value::Double(v) => self.buf.extend_from_slice(&v.to_be_bytes()),
            Value::String(bytes) => {
                if bytes.len() > u32::MAX as usize {
                    return Err(ProtocolError::invalid_value(format!(
                        "string of {} bytes exceeds u32 length prefix",
                        bytes.len()
                    )));
                }
                write_u32(&mut self.buf, bytes.len() as u32);
                self.buf.extend_from_slice(bytes);
            }
            Value::Guid(id) => self.buf.extend_from_slice(id.as_bytes()),
            Value::Null => {}
            Value::Vector(vector) => self.vector(vector, depth)?,
            Value::Container(payload) => self.container(payload, depth)?,
        }
        Ok(())
    }

    /// Vector body: element tag, element count, then element bodies
    fn vector(&mut self, vector: &Vector, depth: usize) -> Result<()> {
        check_depth(depth)?;
        if vector.len() > u32::MAX as usize {
            return Err(ProtocolError::invalid_value(format!(
                "vector of {} elements exceeds u32 count prefix",
                vector.len()
            )));
        }

        self.buf.push(vector.kind().as_u8());
        write_u32(&mut self.buf, vector.len() as u32);
        for element in vector {
            self.body(element, depth + 1)?;
        }
        Ok(())
    }

    /// Container body: tag count, then key/value pairs
    fn container(&mut self, payload: &Payload, depth: usize) -> Result<()> {
        check_depth(depth)?;

        write_i16(&mut self.buf, tag_count(payload)?);
        for (key, value) in payload {
            self.key(key)?;
            self.value(value, depth + 1)?;
        }
        Ok(())
    }
}

fn tag_count(payload: &Payload) -> Result<i16> {
    if payload.len() > MAX_TAG_COUNT {
        return Err(ProtocolError::invalid_value(format!(
            "{} tags exceeds the i16 tag count range",
            payload.len()
        )));
    }
    Ok(payload.len() as i16)
}

fn check_depth(depth: usize) -> Result<()> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ProtocolError::invalid_value(format!(
            "nesting deeper than {MAX_NESTING_DEPTH} levels"
        )));
    }
    Ok(())
}

// =============================================================================
// Write helpers
// =============================================================================

/// Write an i16 in big-endian format
#[inline]
fn write_i16(buf: &mut Vec<u8>, value: i16) {
    buf.extend_from_slice(&value.to_be_bytes());
}

/// Write a u32 in big-endian format
#[inline]
fn write_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_be_bytes());
}

/// Write an i64 in big-endian format
#[inline]
fn write_i64(buf: &mut Vec<u8>, value: i64) {
    buf.extend_from_slice(&value.to_be_bytes());
}
