//! Caller-owned destinations for blob copies.
//!
//! [`MessageValues::read_blob`](crate::MessageValues::read_blob) copies blob
//! data out of the shared parse buffer into storage the caller keeps between
//! messages. The sink is borrowed only for the duration of the copy.
//!
//! # Growth policy
//!
//! With `S` the blob size and `C` the sink length before the copy:
//!
//! - `C <= S`: the sink grows to exactly `S + headroom`. A sink of exactly
//!   `S` bytes still grows, leaving at least one spare byte.
//! - `C > S`: the sink is left alone, unless the copy offset pushes the
//!   write past its end, in which case it grows to `offset + S + headroom`.

/// Growable byte storage that blob reads copy into.
///
/// "Length" here is the number of addressable bytes, not the allocation
/// capacity: a sink behaves like a fixed-size array that is replaced by a
/// larger one when it is too small.
pub trait ResizableSink {
    /// Number of writable bytes.
    fn sink_len(&self) -> usize;

    /// Resize to exactly `len` writable bytes, keeping the existing prefix.
    fn grow_to(&mut self, len: usize);

    /// The writable bytes.
    fn sink_bytes_mut(&mut self) -> &mut [u8];
}

impl ResizableSink for Vec<u8> {
    #[inline]
    fn sink_len(&self) -> usize {
        self.len()
    }

    fn grow_to(&mut self, len: usize) {
        self.resize(len, 0);
    }

    #[inline]
    fn sink_bytes_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}

impl ResizableSink for Box<[u8]> {
    #[inline]
    fn sink_len(&self) -> usize {
        self.len()
    }

    fn grow_to(&mut self, len: usize) {
        let mut bytes = std::mem::take(self).into_vec();
        bytes.resize(len, 0);
        *self = bytes.into_boxed_slice();
    }

    #[inline]
    fn sink_bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

/// Copy `data` into `sink` at `sink_offset`, growing the sink per the policy
/// above. Returns the number of bytes copied.
pub(crate) fn copy_into_sink<S: ResizableSink + ?Sized>(
    sink: &mut S,
    data: &[u8],
    sink_offset: usize,
    headroom: usize,
) -> usize {
    let size = data.len();
    let Some(end) = sink_offset.checked_add(size) else {
        tracing::debug!(sink_offset, size, "blob copy offset overflows");
        return 0;
    };

    if sink.sink_len() <= size {
        sink.grow_to(size.saturating_add(headroom));
    }
    if sink.sink_len() < end {
        sink.grow_to(end.saturating_add(headroom));
    }

    sink.sink_bytes_mut()[sink_offset..end].copy_from_slice(data);
    size
}
