//! Typed access to a parsed message.
//!
//! [`MessageValues`] borrows the message bytes together with the parser's tag
//! sequence and offset table. Nothing is decoded up front: each accessor
//! looks up the element's offset and reads its payload in place.
//!
//! Accessors come in three flavors:
//!
//! - `try_*` / [`MessageValues::try_read`] return an [`AccessError`] on a bad
//!   index or tag mismatch.
//! - the plain `read_*` family returns the type's default value instead.
//! - [`MessageValues::read_unchecked`] skips both checks for trusted input.

use std::fmt;

use osc_wire::{matching_array_end, ByteView, TagStop, TypeTag, WireSpan};

use crate::error::AccessError;
use crate::sink::{copy_into_sink, ResizableSink};

// === Scalar decoding ===

/// 64-bit NTP timestamp: seconds since 1900 in the upper half, binary
/// fraction of a second in the lower half.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeTag(pub u64);

impl TimeTag {
    /// The special "immediately" value.
    pub const IMMEDIATE: TimeTag = TimeTag(1);

    /// Whole seconds since 1900-01-01.
    #[inline]
    #[allow(clippy::cast_possible_truncation, reason = "upper half of a u64")]
    pub const fn seconds(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Fractional part in units of 2^-32 seconds.
    #[inline]
    #[allow(clippy::cast_possible_truncation, reason = "lower half of a u64")]
    pub const fn fraction(self) -> u32 {
        self.0 as u32
    }

    #[inline]
    pub const fn is_immediate(self) -> bool {
        self.0 == Self::IMMEDIATE.0
    }
}

/// 32-bit RGBA color, one byte per channel in wire order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color32 {
    #[inline]
    const fn from_word(word: u32) -> Self {
        let [r, g, b, a] = word.to_be_bytes();
        Color32 { r, g, b, a }
    }
}

/// 4-byte MIDI message.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MidiMessage {
    pub port: u8,
    pub status: u8,
    pub data1: u8,
    pub data2: u8,
}

impl MidiMessage {
    #[inline]
    const fn from_word(word: u32) -> Self {
        let [port, status, data1, data2] = word.to_be_bytes();
        MidiMessage {
            port,
            status,
            data1,
            data2,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width argument type that decodes from a single tag.
///
/// Sealed: [`MessageValues::read_unchecked`] trusts that an implementation
/// reads no more than its tag's payload width.
pub trait WireScalar: sealed::Sealed + Copy + Default {
    /// The tag an element must carry to decode as `Self`.
    const TAG: TypeTag;

    /// Decode from `view` at `offset`, or `None` if the payload leaves the view.
    fn decode(view: &ByteView<'_>, offset: u32) -> Option<Self>;

    /// Decode without a range check.
    ///
    /// # Safety
    ///
    /// The payload width of [`Self::TAG`] must fit at `offset` in `view`.
    #[allow(unsafe_code, reason = "unchecked decode for validated offsets")]
    unsafe fn decode_unchecked(view: &ByteView<'_>, offset: u32) -> Self;
}

macro_rules! wire_scalars {
    ($($ty:ty => $tag:ident, $read:ident, $read_unchecked:ident, |$raw:ident| $conv:expr;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            #[allow(
                clippy::cast_possible_wrap,
                clippy::cast_possible_truncation,
                reason = "reinterpreting big-endian words"
            )]
            impl WireScalar for $ty {
                const TAG: TypeTag = TypeTag::$tag;

                #[inline]
                fn decode(view: &ByteView<'_>, offset: u32) -> Option<Self> {
                    view.$read(offset).map(|$raw| $conv)
                }

                #[inline]
                #[allow(unsafe_code, reason = "unchecked decode for validated offsets")]
                unsafe fn decode_unchecked(view: &ByteView<'_>, offset: u32) -> Self {
                    // SAFETY: forwarded from the caller.
                    let $raw = unsafe { view.$read_unchecked(offset) };
                    $conv
                }
            }
        )*
    };
}

wire_scalars! {
    i32 => Int32, read_be_u32, read_be_u32_unchecked, |raw| raw as i32;
    f32 => Float32, read_be_u32, read_be_u32_unchecked, |raw| f32::from_bits(raw);
    i64 => Int64, read_be_u64, read_be_u64_unchecked, |raw| raw as i64;
    f64 => Float64, read_be_u64, read_be_u64_unchecked, |raw| f64::from_bits(raw);
    TimeTag => TimeTag, read_be_u64, read_be_u64_unchecked, |raw| TimeTag(raw);
    char => AsciiChar, read_be_u32, read_be_u32_unchecked, |raw| char::from(raw as u8);
    Color32 => Color32, read_be_u32, read_be_u32_unchecked, |raw| Color32::from_word(raw);
    MidiMessage => Midi, read_be_u32, read_be_u32_unchecked, |raw| MidiMessage::from_word(raw);
}

// === Materialized values ===

/// One argument decoded into an owned-or-borrowed value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value<'a> {
    Int32(i32),
    Float32(f32),
    String(&'a [u8]),
    Blob(&'a [u8]),
    Int64(i64),
    Float64(f64),
    TimeTag(TimeTag),
    AsciiChar(char),
    Color32(Color32),
    Midi(MidiMessage),
    Symbol(&'a [u8]),
    Bool(bool),
    Nil,
    Infinitum,
    ArrayStart,
    ArrayEnd,
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int32(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::String(s) | Value::Symbol(s) => {
                write!(f, "{:?}", String::from_utf8_lossy(s))
            }
            Value::Blob(b) => write!(f, "<blob {} bytes>", b.len()),
            Value::TimeTag(t) => write!(f, "{}.{:08x}", t.seconds(), t.fraction()),
            Value::AsciiChar(c) => write!(f, "{c:?}"),
            Value::Color32(c) => write!(f, "#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a),
            Value::Midi(m) => write!(
                f,
                "midi[{:02x} {:02x} {:02x} {:02x}]",
                m.port, m.status, m.data1, m.data2
            ),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Nil => f.write_str("nil"),
            Value::Infinitum => f.write_str("inf"),
            Value::ArrayStart => f.write_str("["),
            Value::ArrayEnd => f.write_str("]"),
        }
    }
}

// === Message view ===

/// Zero-copy view of one parsed message.
///
/// Borrows the parser; parse the next message once you are done with it.
#[derive(Clone, Debug)]
pub struct MessageValues<'a> {
    view: ByteView<'a>,
    address: WireSpan,
    tag_string: WireSpan,
    tags: &'a [TypeTag],
    offsets: &'a [u32],
    stop: TagStop,
    blob_headroom: usize,
}

impl<'a> MessageValues<'a> {
    /// Assemble a view. `offsets` must come from a successful
    /// `build_offsets` over `tags` and `view`.
    pub(crate) fn new(
        view: ByteView<'a>,
        address: WireSpan,
        tag_string: WireSpan,
        tags: &'a [TypeTag],
        offsets: &'a [u32],
        stop: TagStop,
        blob_headroom: usize,
    ) -> Self {
        debug_assert_eq!(tags.len(), offsets.len());
        MessageValues {
            view,
            address,
            tag_string,
            tags,
            offsets,
            stop,
            blob_headroom,
        }
    }

    // === Message-level ===

    /// The full message bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.view.as_bytes()
    }

    /// Address bytes, without terminator or padding.
    #[inline]
    pub fn address_bytes(&self) -> &'a [u8] {
        self.view.slice(self.address).unwrap_or_default()
    }

    /// The address as text, if it is valid UTF-8.
    pub fn address(&self) -> Option<&'a str> {
        std::str::from_utf8(self.address_bytes()).ok()
    }

    #[inline]
    pub fn address_span(&self) -> WireSpan {
        self.address
    }

    /// Raw tag string including the leading `,`, exactly as received. Covers
    /// tags past a truncation point too.
    #[inline]
    pub fn tag_string(&self) -> &'a [u8] {
        self.view.slice(self.tag_string).unwrap_or_default()
    }

    /// Number of readable elements.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[inline]
    pub fn tags(&self) -> &'a [TypeTag] {
        self.tags
    }

    #[inline]
    pub fn tag(&self, index: usize) -> Option<TypeTag> {
        self.tags.get(index).copied()
    }

    /// Byte offset of each element's encoding within the message.
    #[inline]
    pub fn offsets(&self) -> &'a [u32] {
        self.offsets
    }

    #[inline]
    pub fn offset(&self, index: usize) -> Option<u32> {
        self.offsets.get(index).copied()
    }

    /// Why tag scanning stopped, if it stopped before the end of the tag
    /// string. Elements before the stop point are still readable.
    #[inline]
    pub fn truncation(&self) -> Option<TagStop> {
        match self.stop {
            TagStop::End => None,
            stop => Some(stop),
        }
    }

    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncation().is_some()
    }

    // === Element lookup ===

    fn element(&self, index: usize) -> Result<(TypeTag, u32), AccessError> {
        match (self.tags.get(index), self.offsets.get(index)) {
            (Some(&tag), Some(&offset)) => Ok((tag, offset)),
            _ => {
                #[cfg(feature = "safety-checks")]
                tracing::error!(
                    index,
                    count = self.tags.len(),
                    "message element index out of range"
                );
                Err(AccessError::IndexOutOfRange {
                    index,
                    count: self.tags.len(),
                })
            }
        }
    }

    fn expect_tag(&self, index: usize, expected: TypeTag) -> Result<u32, AccessError> {
        let (found, offset) = self.element(index)?;
        if found == expected {
            Ok(offset)
        } else {
            Err(AccessError::TypeMismatch {
                index,
                expected,
                found,
            })
        }
    }

    // === Scalars ===

    /// Decode element `index` as `T`.
    pub fn try_read<T: WireScalar>(&self, index: usize) -> Result<T, AccessError> {
        let offset = self.expect_tag(index, T::TAG)?;
        Ok(T::decode(&self.view, offset).unwrap_or_default())
    }

    /// Decode element `index` as `T`, or `T::default()` on a bad index or tag.
    #[inline]
    pub fn read<T: WireScalar>(&self, index: usize) -> T {
        self.try_read(index).unwrap_or_default()
    }

    /// Decode element `index` as `T` with no index or tag check.
    ///
    /// # Safety
    ///
    /// `index < self.element_count()` and `self.tag(index) == Some(T::TAG)`
    /// must hold.
    #[inline]
    #[allow(unsafe_code, reason = "fast path for trusted input")]
    pub unsafe fn read_unchecked<T: WireScalar>(&self, index: usize) -> T {
        debug_assert!(index < self.tags.len(), "element {index} out of range");
        debug_assert_eq!(self.tags.get(index), Some(&T::TAG));
        // SAFETY: the caller guarantees `index` is in range, and offsets has
        // the same length as tags. The tag matches `T`, and parsing checked
        // that the tag's payload width fits at this offset.
        unsafe {
            let offset = *self.offsets.get_unchecked(index);
            T::decode_unchecked(&self.view, offset)
        }
    }

    #[inline]
    pub fn read_int32(&self, index: usize) -> i32 {
        self.read(index)
    }

    #[inline]
    pub fn read_float32(&self, index: usize) -> f32 {
        self.read(index)
    }

    #[inline]
    pub fn read_int64(&self, index: usize) -> i64 {
        self.read(index)
    }

    #[inline]
    pub fn read_float64(&self, index: usize) -> f64 {
        self.read(index)
    }

    #[inline]
    pub fn read_timetag(&self, index: usize) -> TimeTag {
        self.read(index)
    }

    /// Low byte of a `c` argument. `'\0'` if absent.
    #[inline]
    pub fn read_ascii_char(&self, index: usize) -> char {
        self.read(index)
    }

    #[inline]
    pub fn read_color32(&self, index: usize) -> Color32 {
        self.read(index)
    }

    #[inline]
    pub fn read_midi(&self, index: usize) -> MidiMessage {
        self.read(index)
    }

    // === Payload-free tags ===

    /// `T` reads as `true`, `F` as `false`, anything else as an error.
    pub fn try_read_bool(&self, index: usize) -> Result<bool, AccessError> {
        match self.element(index)? {
            (TypeTag::True, _) => Ok(true),
            (TypeTag::False, _) => Ok(false),
            (found, _) => Err(AccessError::TypeMismatch {
                index,
                expected: TypeTag::True,
                found,
            }),
        }
    }

    #[inline]
    pub fn read_bool(&self, index: usize) -> bool {
        self.try_read_bool(index).unwrap_or_default()
    }

    #[inline]
    pub fn is_nil(&self, index: usize) -> bool {
        self.tag(index) == Some(TypeTag::Nil)
    }

    #[inline]
    pub fn is_infinitum(&self, index: usize) -> bool {
        self.tag(index) == Some(TypeTag::Infinitum)
    }

    // === Strings ===

    /// Span of a `s` or `S` argument's bytes, excluding the terminator.
    pub fn try_read_string_span(&self, index: usize) -> Result<WireSpan, AccessError> {
        let (found, offset) = self.element(index)?;
        if !matches!(found, TypeTag::String | TypeTag::Symbol) {
            return Err(AccessError::TypeMismatch {
                index,
                expected: TypeTag::String,
                found,
            });
        }
        // Parsing found a terminator for every string element.
        let nul = self.view.find_nul(offset).unwrap_or(offset);
        Ok(WireSpan::new(offset, nul - offset))
    }

    #[inline]
    pub fn read_string_span(&self, index: usize) -> Option<WireSpan> {
        self.try_read_string_span(index).ok()
    }

    /// String bytes, borrowed from the message. Empty on a bad index or tag.
    pub fn read_string_bytes(&self, index: usize) -> &'a [u8] {
        self.read_string_span(index)
            .and_then(|span| self.view.slice(span))
            .unwrap_or_default()
    }

    /// String as text. Empty if absent or not valid UTF-8.
    pub fn read_string(&self, index: usize) -> &'a str {
        std::str::from_utf8(self.read_string_bytes(index)).unwrap_or_default()
    }

    // === Blobs ===

    /// Blob data, borrowed from the message.
    pub fn try_blob_bytes(&self, index: usize) -> Result<&'a [u8], AccessError> {
        let offset = self.expect_tag(index, TypeTag::Blob)?;
        let size = self
            .view
            .read_be_i32(offset)
            .and_then(|raw| u32::try_from(raw).ok())
            .unwrap_or(0);
        Ok(self
            .view
            .slice(WireSpan::new(offset + 4, size))
            .unwrap_or_default())
    }

    /// Blob data, borrowed from the message. Empty on a bad index or tag.
    #[inline]
    pub fn blob_bytes(&self, index: usize) -> &'a [u8] {
        self.try_blob_bytes(index).unwrap_or_default()
    }

    /// Copy blob `index` into `sink` starting at `sink_offset` and return the
    /// blob size.
    ///
    /// The sink is resized first if needed; see [`ResizableSink`] for the
    /// growth policy. On a bad index or tag nothing is copied, the sink is
    /// untouched, and 0 is returned.
    pub fn read_blob<S: ResizableSink + ?Sized>(
        &self,
        index: usize,
        sink: &mut S,
        sink_offset: usize,
    ) -> usize {
        match self.try_blob_bytes(index) {
            Ok(data) => copy_into_sink(sink, data, sink_offset, self.blob_headroom),
            Err(_) => 0,
        }
    }

    // === Arrays ===

    /// Number of elements between the `[` at `index` and its matching `]`,
    /// counting nested delimiters and their contents.
    pub fn array_len(&self, index: usize) -> Option<usize> {
        if self.tag(index) != Some(TypeTag::ArrayStart) {
            return None;
        }
        matching_array_end(self.tags, index).map(|end| end - index - 1)
    }

    // === Materialization ===

    /// Decode element `index` into a [`Value`].
    pub fn value(&self, index: usize) -> Option<Value<'a>> {
        let tag = self.tag(index)?;
        Some(match tag {
            TypeTag::Int32 => Value::Int32(self.read(index)),
            TypeTag::Float32 => Value::Float32(self.read(index)),
            TypeTag::String => Value::String(self.read_string_bytes(index)),
            TypeTag::Blob => Value::Blob(self.blob_bytes(index)),
            TypeTag::Int64 => Value::Int64(self.read(index)),
            TypeTag::Float64 => Value::Float64(self.read(index)),
            TypeTag::TimeTag => Value::TimeTag(self.read(index)),
            TypeTag::AsciiChar => Value::AsciiChar(self.read(index)),
            TypeTag::Color32 => Value::Color32(self.read(index)),
            TypeTag::Midi => Value::Midi(self.read(index)),
            TypeTag::Symbol => Value::Symbol(self.read_string_bytes(index)),
            TypeTag::True => Value::Bool(true),
            TypeTag::False => Value::Bool(false),
            TypeTag::Nil => Value::Nil,
            TypeTag::Infinitum => Value::Infinitum,
            TypeTag::ArrayStart => Value::ArrayStart,
            TypeTag::ArrayEnd => Value::ArrayEnd,
        })
    }

    /// All elements in order.
    pub fn values(&self) -> impl Iterator<Item = Value<'a>> + '_ {
        (0..self.tags.len()).filter_map(|index| self.value(index))
    }
}
