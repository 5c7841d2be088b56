//! Type-tag string scanning.
//!
//! The tag string starts with `,` and holds one code per argument, NUL
//! terminated and padded to 4 bytes. [`scan_tags`] classifies the codes in
//! order and stops at the first byte that is not a supported [`TypeTag`].
//! Stopping early is not an error: the caller sees fewer arguments than the
//! wire carried, and [`TagScan::stop`] records why.

use crate::byte_view::ByteView;
use crate::tag::TypeTag;
use crate::TAG_PREFIX;

/// Why tag scanning stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TagStop {
    /// Reached the NUL that ends the tag string. Nothing was dropped.
    End,
    /// Hit a byte that is not a supported tag code.
    Unsupported {
        /// The offending byte.
        byte: u8,
        /// Its offset in the buffer.
        offset: u32,
    },
    /// The element limit was reached with tag codes still remaining.
    Capacity {
        /// Offset of the first tag that did not fit.
        offset: u32,
    },
}

/// Result of scanning one tag string.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TagScan {
    /// Number of tags written to the output.
    pub count: usize,
    /// Length of the whole tag string including `,`, excluding its NUL.
    ///
    /// Measured to the terminator even when scanning stopped early, so the
    /// payload section always starts at `start + align4(tag_string_len + 1)`.
    pub tag_string_len: u32,
    /// Why scanning stopped.
    pub stop: TagStop,
}

impl TagScan {
    /// Returns `true` if tag codes were left unread.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.stop != TagStop::End
    }
}

/// Tag string could not be located.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TagScanError {
    /// The byte at the start offset is not `,`.
    MissingPrefix,
    /// No NUL terminator before the end of the view.
    Unterminated,
}

/// Scan the tag string at `start` (pointing at its `,`).
///
/// Appends at most `max_elements` tags to `out`; the caller clears `out`
/// between messages.
pub fn scan_tags(
    view: &ByteView<'_>,
    start: u32,
    max_elements: usize,
    out: &mut impl Extend<TypeTag>,
) -> Result<TagScan, TagScanError> {
    if view.byte(start) != Some(TAG_PREFIX) {
        return Err(TagScanError::MissingPrefix);
    }
    let end = view.find_nul(start).ok_or(TagScanError::Unterminated)?;
    let bytes = view.as_bytes();

    let mut pos = start + 1;
    let mut count = 0;
    let stop = loop {
        if pos == end {
            break TagStop::End;
        }
        let byte = bytes[pos as usize];
        let Some(tag) = TypeTag::from_byte(byte) else {
            break TagStop::Unsupported { byte, offset: pos };
        };
        if count == max_elements {
            break TagStop::Capacity { offset: pos };
        }
        out.extend(std::iter::once(tag));
        count += 1;
        pos += 1;
    };

    Ok(TagScan {
        count,
        tag_string_len: end - start,
        stop,
    })
}

/// Index of the `]` matching the `[` at `start`.
///
/// Nested arrays are skipped over. Returns `None` if `tags[start]` is not
/// [`TypeTag::ArrayStart`] or the array is never closed.
pub fn matching_array_end(tags: &[TypeTag], start: usize) -> Option<usize> {
    if tags.get(start) != Some(&TypeTag::ArrayStart) {
        return None;
    }
    let mut depth = 0usize;
    for (i, tag) in tags.iter().enumerate().skip(start) {
        match tag {
            TypeTag::ArrayStart => depth += 1,
            TypeTag::ArrayEnd => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
