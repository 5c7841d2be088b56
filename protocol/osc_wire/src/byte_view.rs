//! Read-only view over an OSC message buffer.
//!
//! [`ByteView`] wraps a borrowed byte slice whose length fits in `u32`, the
//! width every OSC offset is stored in. Reads come in two flavours:
//!
//! - Checked (`byte`, `read_be_u32`, ...) return `None` when the requested
//!   range leaves the view. This is the default path for untrusted input.
//! - Unchecked (`*_unchecked`) are `unsafe fn`s that skip the range test.
//!   They exist for callers that already validated the layout (the offset
//!   table in `osc_parse` does) and want the raw load.
//!
//! All multi-byte reads decode big-endian explicitly, regardless of host
//! byte order.

/// Round `n` up to the next multiple of 4.
///
/// Every OSC section (address, tag string, string and blob payloads) is
/// padded to a 4-byte boundary.
#[inline]
pub const fn align4(n: u32) -> u32 {
    (n + 3) & !3
}

/// Decode a big-endian `i32` from `bytes[offset..offset + 4]`.
///
/// Returns `None` when fewer than four bytes are available.
#[inline]
#[allow(
    clippy::cast_possible_wrap,
    reason = "two's complement reinterpretation is the wire encoding"
)]
pub fn read_be_i32(bytes: &[u8], offset: usize) -> Option<i32> {
    let b = bytes.get(offset..offset.checked_add(4)?)?;
    let value = (u32::from(b[0]) << 24)
        | (u32::from(b[1]) << 16)
        | (u32::from(b[2]) << 8)
        | u32::from(b[3]);
    Some(value as i32)
}

/// A `(start, len)` span into the message buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WireSpan {
    /// Byte offset from the start of the buffer.
    pub start: u32,
    /// Length in bytes.
    pub len: u32,
}

impl WireSpan {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        WireSpan { start, len }
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(self) -> u32 {
        self.start + self.len
    }
}

/// Stable read-only view over a contiguous OSC byte region.
///
/// # Invariant
///
/// `buf.len() <= u32::MAX`. Enforced by [`ByteView::new`].
#[derive(Copy, Clone, Debug)]
pub struct ByteView<'a> {
    buf: &'a [u8],
}

/// Size assertion: a view is a single fat pointer.
const _: () = assert!(std::mem::size_of::<ByteView<'static>>() <= 16);

impl<'a> ByteView<'a> {
    /// Wrap `buf`. Returns `None` if it is longer than `u32::MAX` bytes.
    pub fn new(buf: &'a [u8]) -> Option<Self> {
        u32::try_from(buf.len()).ok().map(|_| ByteView { buf })
    }

    /// Length of the view in bytes.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "length is bounded by u32::MAX at construction"
    )]
    pub fn len(&self) -> u32 {
        self.buf.len() as u32
    }

    /// Returns `true` if the view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.buf
    }

    /// Returns `true` if `len` bytes starting at `pos` lie inside the view.
    #[inline]
    pub fn contains(&self, pos: u32, len: u32) -> bool {
        pos.checked_add(len).is_some_and(|end| end <= self.len())
    }

    /// Byte at `pos`.
    #[inline]
    pub fn byte(&self, pos: u32) -> Option<u8> {
        self.buf.get(pos as usize).copied()
    }

    /// Bytes in `span`.
    #[inline]
    pub fn slice(&self, span: WireSpan) -> Option<&'a [u8]> {
        if self.contains(span.start, span.len) {
            Some(&self.buf[span.start as usize..span.end() as usize])
        } else {
            None
        }
    }

    /// Position of the first NUL byte at or after `from`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "match index is bounded by the view length which fits in u32"
    )]
    pub fn find_nul(&self, from: u32) -> Option<u32> {
        let rest = self.buf.get(from as usize..)?;
        memchr::memchr(0, rest).map(|i| from + i as u32)
    }

    /// Big-endian `u32` at `pos`.
    #[inline]
    pub fn read_be_u32(&self, pos: u32) -> Option<u32> {
        let start = pos as usize;
        let b = self.buf.get(start..start.checked_add(4)?)?;
        Some(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Big-endian `i32` at `pos`.
    #[inline]
    pub fn read_be_i32(&self, pos: u32) -> Option<i32> {
        read_be_i32(self.buf, pos as usize)
    }

    /// Big-endian `u64` at `pos`.
    #[inline]
    pub fn read_be_u64(&self, pos: u32) -> Option<u64> {
        let start = pos as usize;
        let b = self.buf.get(start..start.checked_add(8)?)?;
        Some(u64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
    }

    /// Big-endian `u32` at `pos`, without a range check.
    ///
    /// # Safety
    ///
    /// `pos + 4 <= self.len()` must hold.
    #[inline]
    #[allow(unsafe_code, reason = "unaligned load on a caller-validated range")]
    pub unsafe fn read_be_u32_unchecked(&self, pos: u32) -> u32 {
        debug_assert!(self.contains(pos, 4), "u32 read at {pos} leaves view");
        // SAFETY: the caller guarantees `pos..pos + 4` is inside `buf`.
        // `read_unaligned` because OSC only guarantees 4-byte alignment
        // relative to the message start, not to the allocation.
        let raw = unsafe {
            self.buf
                .as_ptr()
                .add(pos as usize)
                .cast::<[u8; 4]>()
                .read_unaligned()
        };
        u32::from_be_bytes(raw)
    }

    /// Big-endian `u64` at `pos`, without a range check.
    ///
    /// # Safety
    ///
    /// `pos + 8 <= self.len()` must hold.
    #[inline]
    #[allow(unsafe_code, reason = "unaligned load on a caller-validated range")]
    pub unsafe fn read_be_u64_unchecked(&self, pos: u32) -> u64 {
        debug_assert!(self.contains(pos, 8), "u64 read at {pos} leaves view");
        // SAFETY: the caller guarantees `pos..pos + 8` is inside `buf`.
        let raw = unsafe {
            self.buf
                .as_ptr()
                .add(pos as usize)
                .cast::<[u8; 8]>()
                .read_unaligned()
        };
        u64::from_be_bytes(raw)
    }
}
