//! Event records
//!
//! The top-level unit of the protocol: a validated header plus an ordered
//! payload. Events are transient - callers build one before encoding, and
//! the decoder allocates a fresh one per call.

use std::fmt;

use uuid::Uuid;

use crate::{Payload, ProtocolError, Result, MAX_VERSION};

/// A decoded or to-be-encoded event
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    version: u8,
    timestamp: i64,
    source_id: Uuid,
    payload: Payload,
}

impl Event {
    /// Create an event, validating the header fields
    ///
    /// `timestamp` counts 100ns ticks since epoch and must be
    /// non-negative; `version` must be in `1..=MAX_VERSION`.
    ///
    /// # Errors
    ///
    /// Fails with [`ProtocolError::InvalidHeader`] on out-of-range
    /// version or timestamp.
    pub fn new(version: u8, timestamp: i64, source_id: Uuid, payload: Payload) -> Result<Self> {
        check_version(version)?;
        check_timestamp(timestamp)?;
        Ok(Self {
            version,
            timestamp,
            source_id,
            payload,
        })
    }

    /// Protocol version
    #[inline]
    pub const fn version(&self) -> u8 {
        self.version
    }

    /// Timestamp in 100ns ticks since epoch
    #[inline]
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Source identifier
    #[inline]
    pub const fn source_id(&self) -> Uuid {
        self.source_id
    }

    /// The ordered payload
    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Consume the event, returning the payload
    pub fn into_payload(self) -> Payload {
        self.payload
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "event v{} ts={} source={} tags={{",
            self.version, self.timestamp, self.source_id
        )?;
        for (i, (key, value)) in self.payload.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// Validate a protocol version
pub(crate) fn check_version(version: u8) -> Result<()> {
    if version == 0 || version > MAX_VERSION {
        return Err(ProtocolError::invalid_header(format!(
            "version {version} not in 1..={MAX_VERSION}"
        )));
    }
    Ok(())
}

/// Validate a timestamp
pub(crate) fn check_timestamp(timestamp: i64) -> Result<()> {
    if timestamp < 0 {
        return Err(ProtocolError::invalid_header(format!(
            "timestamp {timestamp} is negative"
        )));
    }
    Ok(())
}
