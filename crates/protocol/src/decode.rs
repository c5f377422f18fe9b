//! Wire-format decoding
//!
//! Mirrors [`crate::encode`] exactly, type tag by type tag. Every read is
//! bounds-checked; truncated buffers, unknown type tags, and negative tag
//! counts fail with [`ProtocolError::MalformedData`]. Bytes past the last
//! declared tag are ignored.
//!
//! With a scheme supplied, key bytes are matched positionally against the
//! scheme's precomputed encodings instead of being re-validated, and the
//! finished value tree is verified against the scheme before it is
//! returned.

use uuid::Uuid;

use crate::scheme::{verify, KeySeq};
use crate::{
    Event, Key, Payload, ProtocolError, Result, Scheme, TypeTag, Value, Vector, HEADER_LEN,
    MAX_NESTING_DEPTH,
};

/// Decode an event without a scheme
///
/// # Errors
///
/// Fails with [`ProtocolError::MalformedData`] on structurally impossible
/// bytes, [`ProtocolError::InvalidKey`] on a key that violates the charset
/// rules, and [`ProtocolError::InvalidHeader`] on an out-of-range version
/// or timestamp.
pub fn decode(buf: &[u8]) -> Result<Event> {
    Decoder::new(buf, None).event()
}

/// Decode an event, matching keys against a scheme and verifying the result
///
/// Decodes the same value tree as [`decode`]; the scheme only substitutes
/// positional key matching and adds verification of the finished tree.
///
/// # Errors
///
/// In addition to everything [`decode`] reports:
/// [`ProtocolError::SchemeMismatch`] when key bytes disagree with the
/// scheme's expected key at that position, and verification failures
/// ([`ProtocolError::TypeMismatch`], [`ProtocolError::SchemeShapeMismatch`]).
pub fn decode_with_scheme(buf: &[u8], scheme: &Scheme) -> Result<Event> {
    let event = Decoder::new(buf, Some(KeySeq::new(scheme)?)).event()?;
    verify(event.payload(), scheme)?;
    Ok(event)
}

// =============================================================================
// Decoder
// =============================================================================

struct Decoder<'a, 's> {
    buf: &'a [u8],
    pos: usize,
    keys: Option<KeySeq<'s>>,
}

impl<'a, 's> Decoder<'a, 's> {
    fn new(buf: &'a [u8], keys: Option<KeySeq<'s>>) -> Self {
        Self { buf, pos: 0, keys }
    }

    fn event(&mut self) -> Result<Event> {
        if self.buf.len() < HEADER_LEN {
            return Err(ProtocolError::too_short(HEADER_LEN, self.buf.len()));
        }

        let version = self.read_u8()?;
        let timestamp = self.read_i64()?;
        let source_id = self.read_guid()?;
        let payload = self.container_body()?;

        Event::new(version, timestamp, source_id, payload)
    }

    /// Read one key: validated from the wire, or matched byte-for-byte
    /// against the scheme's expected key at this position
    fn key(&mut self) -> Result<Key> {
        match &mut self.keys {
            Some(seq) => {
                let expected = seq.next()?;
                let actual = take(self.buf, &mut self.pos, expected.encoded().len())?;
                if actual != expected.encoded() {
                    return Err(ProtocolError::scheme_mismatch(
                        expected.as_str(),
                        String::from_utf8_lossy(actual),
                    ));
                }
                Ok(expected.clone())
            }
            None => {
                let len = self.read_u8()? as usize;
                let bytes = take(self.buf, &mut self.pos, len)?;
                let name = std::str::from_utf8(bytes)
                    .map_err(|_| ProtocolError::invalid_key("key is not valid ASCII"))?;
                Key::new(name)
            }
        }
    }

    /// Read type tag plus body
    fn value(&mut self, depth: usize) -> Result<Value> {
        let raw = self.read_u8()?;
        let tag = TypeTag::from_u8(raw)
            .ok_or_else(|| ProtocolError::malformed(format!("unknown type tag 0x{raw:02X}")))?;
        self.body(tag, depth)
    }

    /// Read the type-specific body for a known tag
    fn body(&mut self, tag: TypeTag, depth: usize) -> Result<Value> {
        Ok(match tag {
            TypeTag::Byte => Value::Byte(self.read_u8()?),
            TypeTag::Short => Value::Short(self.read_i16()?),
            TypeTag::Integer => {
                Value::Integer(i32::from_be_bytes(self.read_array::<4>()?))
            }
            TypeTag::Long => Value::Long(self.read_i64()?),
            TypeTag::Flag => Value::Flag(self.read_u8()? != 0),
            TypeTag::Float => Value::Float(f32::from_be_bytes(self.read_array::<4>()?)),
            TypeTag::Double => Value::Double(f64::from_be_bytes(self.read_array::<8>()?)),
            TypeTag::String => {
                let len = self.read_u32()? as usize;
                let bytes = take(self.buf, &mut self.pos, len)?;
                Value::String(bytes.to_vec())
            }
            TypeTag::Guid => Value::Guid(self.read_guid()?),
            TypeTag::Null => Value::Null,
            TypeTag::Vector => Value::Vector(self.vector(depth)?),
            TypeTag::Container => Value::Container(self.container(depth)?),
        })
    }

    /// Vector body: element tag, element count, element bodies
    fn vector(&mut self, depth: usize) -> Result<Vector> {
        check_depth(depth)?;

        let raw = self.read_u8()?;
        let kind = TypeTag::from_u8(raw).ok_or_else(|| {
            ProtocolError::malformed(format!("unknown vector element tag 0x{raw:02X}"))
        })?;
        let count = self.read_u32()? as usize;

        // Reject impossible counts before allocating
        if let Some(width) = kind.fixed_len() {
            let need = count.saturating_mul(width);
            if self.pos + need > self.buf.len() {
                return Err(ProtocolError::too_short(self.pos + need, self.buf.len()));
            }
        }

        let mut elements = Vec::with_capacity(count.min(self.buf.len() - self.pos + 1));
        for _ in 0..count {
            elements.push(self.body(kind, depth + 1)?);
        }
        Vector::new(kind, elements)
    }

    /// Container body behind a depth check
    fn container(&mut self, depth: usize) -> Result<Payload> {
        check_depth(depth)?;
        self.container_body_at(depth + 1)
    }

    /// Top-level payload: same wire shape as a container body, depth zero
    fn container_body(&mut self) -> Result<Payload> {
        self.container_body_at(0)
    }

    fn container_body_at(&mut self, depth: usize) -> Result<Payload> {
        let tag_count = self.read_i16()?;
        if tag_count < 0 {
            return Err(ProtocolError::malformed(format!(
                "negative tag count {tag_count}"
            )));
        }

        let mut payload = Payload::with_capacity(tag_count as usize);
        for _ in 0..tag_count {
            let key = self.key()?;
            let value = self.value(depth)?;
            payload.insert(key, value);
        }
        Ok(payload)
    }

    // -------------------------------------------------------------------------
    // Read helpers
    // -------------------------------------------------------------------------

    #[inline]
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = take(self.buf, &mut self.pos, N)?;
        let mut array = [0u8; N];
        array.copy_from_slice(bytes);
        Ok(array)
    }

    #[inline]
    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    #[inline]
    fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_be_bytes(self.read_array::<2>()?))
    }

    #[inline]
    fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.read_array::<4>()?))
    }

    #[inline]
    fn read_i64(&mut self) -> Result<i64> {
        Ok(i64::from_be_bytes(self.read_array::<8>()?))
    }

    #[inline]
    fn read_guid(&mut self) -> Result<Uuid> {
        Ok(Uuid::from_bytes(self.read_array::<16>()?))
    }
}

/// Take `len` bytes from the buffer, advancing the cursor
#[inline]
fn take<'a>(buf: &'a [u8], pos: &mut usize, len: usize) -> Result<&'a [u8]> {
    let end = pos
        .checked_add(len)
        .ok_or_else(|| ProtocolError::malformed("length overflows the buffer cursor"))?;
    if end > buf.len() {
        return Err(ProtocolError::too_short(end, buf.len()));
    }
    let bytes = &buf[*pos..end];
    *pos = end;
    Ok(bytes)
}

fn check_depth(depth: usize) -> Result<()> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ProtocolError::malformed(format!(
            "nesting deeper than {MAX_NESTING_DEPTH} levels"
        )));
    }
    Ok(())
}
