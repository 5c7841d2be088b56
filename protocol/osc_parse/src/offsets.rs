//! Argument offset table construction.
//!
//! Walks the tag sequence once, recording where each argument's encoding
//! starts and checking that its payload fits inside the message. Strings and
//! blobs have data-dependent widths, so `offsets[i + 1]` can only be known
//! after reading argument `i`.
//!
//! After [`build_offsets`] succeeds, `offsets[i] + width(tags[i])` is within
//! the buffer for every `i`. The unchecked accessors rely on this.

use osc_wire::{ByteView, Payload, TypeTag};
use smallvec::SmallVec;

use crate::config::{BlobPadding, ParserConfig, DEFAULT_MAX_ELEMENTS};
use crate::error::ParseError;

/// Reusable tag sequence storage. Inline up to the default element limit.
pub(crate) type TagBuf = SmallVec<[TypeTag; DEFAULT_MAX_ELEMENTS]>;

/// Reusable offset table storage, parallel to [`TagBuf`].
pub(crate) type OffsetBuf = SmallVec<[u32; DEFAULT_MAX_ELEMENTS]>;

/// Fill `out` with one offset per tag, starting at `payload_start`.
///
/// Returns the offset just past the last payload.
pub(crate) fn build_offsets(
    view: &ByteView<'_>,
    tags: &[TypeTag],
    payload_start: u32,
    config: &ParserConfig,
    out: &mut OffsetBuf,
) -> Result<u32, ParseError> {
    out.clear();
    let mut pos = payload_start;

    for (index, &tag) in tags.iter().enumerate() {
        out.push(pos);
        pos = match tag.payload() {
            Payload::Empty => pos,
            Payload::Fixed(width) => advance(view, index, tag, pos, u64::from(width))?,
            Payload::Str => {
                let nul = view
                    .find_nul(pos)
                    .ok_or(ParseError::UnterminatedString { index, offset: pos })?;
                let padded = u64::from(nul - pos + 1).next_multiple_of(4);
                advance(view, index, tag, pos, padded)?
            }
            Payload::Blob => {
                let Some(raw) = view.read_be_i32(pos) else {
                    return Err(truncated(view, index, tag, pos, 4));
                };
                let size = u32::try_from(raw)
                    .map_err(|_| ParseError::InvalidBlobSize { index, size: raw })?;
                if size > config.max_blob_size {
                    return Err(ParseError::BlobTooLarge {
                        index,
                        size,
                        max: config.max_blob_size,
                    });
                }
                let data = match config.blob_padding {
                    BlobPadding::Aligned => u64::from(size).next_multiple_of(4),
                    BlobPadding::Unaligned => u64::from(size),
                };
                advance(view, index, tag, pos, 4 + data)?
            }
        };
    }

    Ok(pos)
}

/// Check that `needed` bytes fit at `pos` and return the offset after them.
#[allow(
    clippy::cast_possible_truncation,
    reason = "end is bounded by the view length which fits in u32"
)]
fn advance(
    view: &ByteView<'_>,
    index: usize,
    tag: TypeTag,
    pos: u32,
    needed: u64,
) -> Result<u32, ParseError> {
    let end = u64::from(pos) + needed;
    if end > u64::from(view.len()) {
        return Err(truncated(view, index, tag, pos, needed));
    }
    Ok(end as u32)
}

fn truncated(view: &ByteView<'_>, index: usize, tag: TypeTag, pos: u32, needed: u64) -> ParseError {
    ParseError::TruncatedArgument {
        index,
        tag,
        offset: pos,
        needed: u32::try_from(needed).unwrap_or(u32::MAX),
        available: view.len().saturating_sub(pos),
    }
}
