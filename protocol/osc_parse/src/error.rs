//! Parse and access error types.

use osc_wire::TypeTag;

/// A message could not be parsed.
///
/// Every variant carries the byte offset (or argument index) where the
/// problem was found so transports can log something actionable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The message is larger than the parser's buffer.
    #[error("message of {len} bytes exceeds the {max} byte limit")]
    MessageTooLarge { len: usize, max: usize },

    /// The address does not start with `/`.
    #[error("address at offset {offset} does not start with `/`")]
    MalformedAddress { offset: u32 },

    /// The address runs to the end of the message without a terminator.
    #[error("address at offset {offset} is not terminated")]
    UnterminatedAddress { offset: u32 },

    /// No `,` type-tag string follows the padded address.
    #[error("expected type tag string at offset {offset}")]
    MissingTypeTags { offset: u32 },

    /// The type-tag string has no NUL terminator.
    #[error("type tag string at offset {offset} is not terminated")]
    UnterminatedTypeTags { offset: u32 },

    /// A string argument has no NUL terminator.
    #[error("string argument {index} at offset {offset} is not terminated")]
    UnterminatedString { index: usize, offset: u32 },

    /// A blob declares a negative size.
    #[error("blob argument {index} declares negative size {size}")]
    InvalidBlobSize { index: usize, size: i32 },

    /// A blob is larger than the configured maximum.
    #[error("blob argument {index} of {size} bytes exceeds the {max} byte limit")]
    BlobTooLarge { index: usize, size: u32, max: u32 },

    /// An argument's payload runs past the end of the message.
    #[error(
        "{tag} argument {index} at offset {offset} needs {needed} bytes, \
         only {available} available"
    )]
    TruncatedArgument {
        index: usize,
        tag: TypeTag,
        offset: u32,
        needed: u32,
        available: u32,
    },
}

/// A typed accessor could not produce a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// The index is not below the element count.
    #[error("element index {index} out of range ({count} elements)")]
    IndexOutOfRange { index: usize, count: usize },

    /// The element exists but has a different tag.
    #[error("element {index} is {found}, not {expected}")]
    TypeMismatch {
        index: usize,
        expected: TypeTag,
        found: TypeTag,
    },
}
