//! Herald Protocol - binary codec for self-describing event records
//!
//! An event is a fixed header (protocol version, 100ns-tick timestamp,
//! 128-bit source id) followed by an ordered set of named, typed tags.
//! Tag values are scalars, strings, GUIDs, nulls, homogeneous vectors, or
//! arbitrarily nested sub-containers.
//!
//! The crate provides:
//! - [`Value`] / [`Vector`] / [`Payload`] - the typed value model
//! - [`Event`] - header plus payload, validated at construction
//! - [`encode`] / [`decode`] - the byte-exact wire codec
//! - [`Scheme`] / [`Descriptor`] - structural type descriptors that verify
//!   a value tree and let the codec reuse precomputed key bytes
//! - [`infer_scheme`] - derive a [`Scheme`] from one sample payload
//!
//! # Wire Format
//!
//! ```text
//! version:u8 | timestamp:i64 BE | source_id:16 bytes | tag_count:i16 BE
//! then per tag: key_len:u8 | key ASCII | type_tag:u8 | body
//! ```
//!
//! All multi-byte integers are big-endian. See [`decode`] for the
//! per-type body layouts.
//!
//! # Scheme key matching is positional
//!
//! When a [`Scheme`] is supplied, keys are paired with scheme entries by
//! depth-first traversal position, never by name lookup. A payload whose
//! insertion order differs from the scheme's authored order fails with
//! [`ProtocolError::SchemeMismatch`]. This is what allows key bytes to be
//! precomputed once and reused; author schemes in payload order.

mod decode;
mod encode;
mod error;
mod event;
mod infer;
mod key;
mod scheme;
mod tag;
mod value;

pub use decode::{decode, decode_with_scheme};
pub use encode::{encode, encode_with_scheme};
pub use error::ProtocolError;
pub use event::Event;
pub use infer::{infer_scheme, DescriptorSet};
pub use key::Key;
pub use scheme::{verify, Descriptor, Scheme};
pub use tag::TypeTag;
pub use value::{Payload, Value, Vector};

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Fixed header length in bytes: version + timestamp + source id + tag count
pub const HEADER_LEN: usize = 1 + 8 + 16 + 2;

/// Highest protocol version this crate understands (valid versions are 1..=MAX_VERSION)
pub const MAX_VERSION: u8 = 1;

/// Maximum tag key length in bytes
pub const MAX_KEY_LEN: usize = 255;

/// Maximum container/vector nesting depth accepted by encode, decode, and
/// inference. Deeper trees fail fast instead of overflowing the call stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Maximum tags per container (tag counts travel as i16 on the wire)
pub const MAX_TAG_COUNT: usize = i16::MAX as usize;

#[cfg(test)]
mod wire_samples;
