//! OSC argument type tags.
//!
//! [`TypeTag`] is `#[repr(u8)]` with the wire code as the discriminant, so
//! converting a tag back to its byte is a plain cast. Classification goes the
//! other way through [`TypeTag::from_byte`], which is the single point that
//! decides whether a byte is a supported tag.

use std::fmt;

/// Supported OSC argument type tags.
///
/// The four OSC 1.0 core types (`i`, `f`, `s`, `b`), the common OSC 1.1
/// extensions, and the `[` / `]` array delimiters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TypeTag {
    /// 32-bit big-endian two's complement integer.
    Int32 = b'i',
    /// 32-bit big-endian IEEE-754 float.
    Float32 = b'f',
    /// NUL-terminated string, padded to 4 bytes.
    String = b's',
    /// Big-endian `i32` size followed by that many bytes.
    Blob = b'b',
    /// 64-bit big-endian two's complement integer.
    Int64 = b'h',
    /// 64-bit big-endian IEEE-754 double.
    Float64 = b'd',
    /// 64-bit NTP timestamp (32.32 fixed point).
    TimeTag = b't',
    /// ASCII character sent as 32 bits.
    AsciiChar = b'c',
    /// 32-bit RGBA color.
    Color32 = b'r',
    /// 4-byte MIDI message: port id, status, data1, data2.
    Midi = b'm',
    /// Alternate string type, same encoding as `String`.
    Symbol = b'S',
    /// Boolean true. No payload.
    True = b'T',
    /// Boolean false. No payload.
    False = b'F',
    /// Nil. No payload.
    Nil = b'N',
    /// Infinitum / impulse. No payload.
    Infinitum = b'I',
    /// Start of an array. No payload.
    ArrayStart = b'[',
    /// End of an array. No payload.
    ArrayEnd = b']',
}

/// Size assertion: tags stay one byte so tag sequences pack densely.
const _: () = assert!(std::mem::size_of::<TypeTag>() == 1);

/// How a tag's argument is laid out on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    /// Fixed number of bytes.
    Fixed(u32),
    /// NUL-terminated, padded to a 4-byte boundary.
    Str,
    /// Big-endian `i32` length prefix followed by raw bytes.
    Blob,
    /// No payload bytes at all.
    Empty,
}

impl TypeTag {
    /// Classify a wire byte. Returns `None` for unsupported codes,
    /// including the NUL that ends the tag string.
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<TypeTag> {
        let tag = match byte {
            b'i' => TypeTag::Int32,
            b'f' => TypeTag::Float32,
            b's' => TypeTag::String,
            b'b' => TypeTag::Blob,
            b'h' => TypeTag::Int64,
            b'd' => TypeTag::Float64,
            b't' => TypeTag::TimeTag,
            b'c' => TypeTag::AsciiChar,
            b'r' => TypeTag::Color32,
            b'm' => TypeTag::Midi,
            b'S' => TypeTag::Symbol,
            b'T' => TypeTag::True,
            b'F' => TypeTag::False,
            b'N' => TypeTag::Nil,
            b'I' => TypeTag::Infinitum,
            b'[' => TypeTag::ArrayStart,
            b']' => TypeTag::ArrayEnd,
            _ => return None,
        };
        Some(tag)
    }

    /// The wire code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Payload layout of this tag.
    pub const fn payload(self) -> Payload {
        match self {
            TypeTag::Int32
            | TypeTag::Float32
            | TypeTag::AsciiChar
            | TypeTag::Color32
            | TypeTag::Midi => Payload::Fixed(4),
            TypeTag::Int64 | TypeTag::Float64 | TypeTag::TimeTag => Payload::Fixed(8),
            TypeTag::String | TypeTag::Symbol => Payload::Str,
            TypeTag::Blob => Payload::Blob,
            TypeTag::True
            | TypeTag::False
            | TypeTag::Nil
            | TypeTag::Infinitum
            | TypeTag::ArrayStart
            | TypeTag::ArrayEnd => Payload::Empty,
        }
    }

    /// Human-readable name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::Int32 => "int32",
            TypeTag::Float32 => "float32",
            TypeTag::String => "string",
            TypeTag::Blob => "blob",
            TypeTag::Int64 => "int64",
            TypeTag::Float64 => "float64",
            TypeTag::TimeTag => "timetag",
            TypeTag::AsciiChar => "char",
            TypeTag::Color32 => "color",
            TypeTag::Midi => "midi",
            TypeTag::Symbol => "symbol",
            TypeTag::True => "true",
            TypeTag::False => "false",
            TypeTag::Nil => "nil",
            TypeTag::Infinitum => "infinitum",
            TypeTag::ArrayStart => "array start",
            TypeTag::ArrayEnd => "array end",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (`{}`)", self.name(), char::from(self.code()))
    }
}
