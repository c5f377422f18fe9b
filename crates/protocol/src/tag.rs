//! Wire type tags
//!
//! Every encoded value starts with a one-byte type tag. Vector elements
//! omit the tag since the element type is declared once for the whole
//! vector.

/// Wire type tag for a tag value
///
/// NOTE: These values are used on the wire and must match independent
/// encoders/decoders of the same protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeTag {
    /// Nested sub-payload (ordered key/value tags, no header fields)
    Container = 0x01,
    /// Unsigned 8-bit integer
    Byte = 0x02,
    /// Signed 16-bit integer
    Short = 0x03,
    /// Signed 32-bit integer
    Integer = 0x04,
    /// Signed 64-bit integer
    Long = 0x05,
    /// Boolean as a single 0/1 byte
    Flag = 0x06,
    /// IEEE 754 single precision
    Float = 0x07,
    /// IEEE 754 double precision
    Double = 0x08,
    /// Length-prefixed byte string
    String = 0x09,
    /// 16 raw bytes
    Guid = 0x0A,
    /// No body
    Null = 0x0B,
    /// Homogeneous sequence: element tag, count, elements
    Vector = 0x80,
}

impl TypeTag {
    /// Parse a type tag from its wire byte
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(Self::Container),
            0x02 => Some(Self::Byte),
            0x03 => Some(Self::Short),
            0x04 => Some(Self::Integer),
            0x05 => Some(Self::Long),
            0x06 => Some(Self::Flag),
            0x07 => Some(Self::Float),
            0x08 => Some(Self::Double),
            0x09 => Some(Self::String),
            0x0A => Some(Self::Guid),
            0x0B => Some(Self::Null),
            0x80 => Some(Self::Vector),
            _ => None,
        }
    }

    /// Convert to the wire byte
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Fixed body width in bytes, or `None` for variable-length kinds
    /// (String, Vector, Container)
    #[inline]
    pub const fn fixed_len(self) -> Option<usize> {
        match self {
            Self::Byte | Self::Flag => Some(1),
            Self::Short => Some(2),
            Self::Integer | Self::Float => Some(4),
            Self::Long | Self::Double => Some(8),
            Self::Guid => Some(16),
            Self::Null => Some(0),
            Self::Container | Self::String | Self::Vector => None,
        }
    }

    /// Get the string name of this tag
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Container => "container",
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
            Self::Vector => "vector",
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
