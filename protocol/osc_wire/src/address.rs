//! OSC address scanning and validation.
//!
//! An address is the first section of every message: ASCII starting with
//! `/`, NUL-terminated and padded to a 4-byte boundary. The scanner only
//! locates it; [`address_is_valid`] and [`address_pattern_is_valid`] check
//! the character rules for method addresses and incoming patterns.

use crate::byte_view::{align4, ByteView};
use crate::{ADDRESS_PREFIX, TAG_PREFIX};

/// Length of the address starting at `offset`, excluding its terminator.
///
/// Scans forward until a NUL or a `,` is found. Returns `None` when the byte
/// at `offset` is not `/`, or when the view ends before a terminator.
///
/// The address section on the wire is [`address_section_len`] of this value.
#[allow(
    clippy::cast_possible_truncation,
    reason = "scan length is bounded by the view length which fits in u32"
)]
pub fn find_address_length(view: &ByteView<'_>, offset: u32) -> Option<u32> {
    if view.byte(offset)? != ADDRESS_PREFIX {
        return None;
    }
    let rest = &view.as_bytes()[offset as usize..];
    memchr::memchr2(0, TAG_PREFIX, rest).map(|len| len as u32)
}

/// Padded size of an address section holding an address of `len` bytes.
///
/// Includes at least one NUL terminator, rounded up to a multiple of 4.
#[inline]
pub const fn address_section_len(len: u32) -> u32 {
    align4(len + 1)
}

/// Returns `true` if `address` is a valid OSC method address.
///
/// Must start with `/` and contain none of ` #*,?[]{}`.
pub fn address_is_valid(address: &[u8]) -> bool {
    address.first() == Some(&ADDRESS_PREFIX)
        && !address.iter().any(|b| {
            matches!(
                b,
                b' ' | b'#' | b'*' | b',' | b'?' | b'[' | b']' | b'{' | b'}'
            )
        })
}

/// Returns `true` if `pattern` is a valid OSC address pattern.
///
/// Patterns may use the wildcard characters; only ` `, `#` and `,` are
/// forbidden.
pub fn address_pattern_is_valid(pattern: &[u8]) -> bool {
    pattern.first() == Some(&ADDRESS_PREFIX)
        && !pattern.iter().any(|b| matches!(b, b' ' | b'#' | b','))
}
