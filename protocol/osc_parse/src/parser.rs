//! The owned parse context.
//!
//! [`OscParser`] keeps a receive buffer, a tag sequence and an offset table
//! alive across messages. Each parse clears and refills the tables; the
//! returned [`MessageValues`] borrows them until the next parse.

use osc_wire::{
    address_section_len, align4, find_address_length, scan_tags, ByteView, TagScanError, WireSpan,
    ADDRESS_PREFIX,
};

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::offsets::{build_offsets, OffsetBuf, TagBuf};
use crate::values::MessageValues;

/// Largest message accepted. OSC stream framing sizes packets with an
/// `int32`, and keeping lengths below `i32::MAX` keeps offset arithmetic in
/// `u32`.
pub const MAX_MESSAGE_LEN: usize = 0x7FFF_FFFF;

/// Reusable OSC message parser.
///
/// Bytes reach the parser in one of three ways:
///
/// - write into [`buffer_mut`](Self::buffer_mut) and call
///   [`parse`](Self::parse) with the received length,
/// - copy a slice in with [`load`](Self::load),
/// - or parse a caller-owned slice in place with
///   [`parse_slice`](Self::parse_slice).
pub struct OscParser {
    config: ParserConfig,
    buffer: Vec<u8>,
    tags: TagBuf,
    offsets: OffsetBuf,
}

impl OscParser {
    /// Parser with [`ParserConfig::default`].
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        OscParser {
            buffer: vec![0; config.buffer_size],
            tags: TagBuf::new(),
            offsets: OffsetBuf::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The receive buffer. Its length is `config().buffer_size`.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// The receive buffer, for a transport to write a message into.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Parse the first `len` bytes of the receive buffer.
    pub fn parse(&mut self, len: usize) -> Result<MessageValues<'_>, ParseError> {
        let Some(bytes) = self.buffer.get(..len) else {
            return Err(ParseError::MessageTooLarge {
                len,
                max: self.buffer.len(),
            });
        };
        parse_message(&self.config, bytes, &mut self.tags, &mut self.offsets)
    }

    /// Copy `bytes` into the receive buffer and parse them.
    pub fn load(&mut self, bytes: &[u8]) -> Result<MessageValues<'_>, ParseError> {
        let len = bytes.len();
        let Some(dest) = self.buffer.get_mut(..len) else {
            return Err(ParseError::MessageTooLarge {
                len,
                max: self.buffer.len(),
            });
        };
        dest.copy_from_slice(bytes);
        self.parse(len)
    }

    /// Parse `bytes` in place. The view borrows both `bytes` and the parser.
    pub fn parse_slice<'a>(
        &'a mut self,
        bytes: &'a [u8],
    ) -> Result<MessageValues<'a>, ParseError> {
        parse_message(&self.config, bytes, &mut self.tags, &mut self.offsets)
    }
}

impl Default for OscParser {
    fn default() -> Self {
        Self::new()
    }
}

#[tracing::instrument(level = "trace", skip_all, fields(len = bytes.len()))]
fn parse_message<'a>(
    config: &ParserConfig,
    bytes: &'a [u8],
    tags: &'a mut TagBuf,
    offsets: &'a mut OffsetBuf,
) -> Result<MessageValues<'a>, ParseError> {
    let view = match ByteView::new(bytes) {
        Some(view) if bytes.len() <= MAX_MESSAGE_LEN => view,
        _ => {
            return Err(ParseError::MessageTooLarge {
                len: bytes.len(),
                max: MAX_MESSAGE_LEN,
            })
        }
    };

    let Some(address_len) = find_address_length(&view, 0) else {
        return Err(if view.byte(0) == Some(ADDRESS_PREFIX) {
            ParseError::UnterminatedAddress { offset: 0 }
        } else {
            ParseError::MalformedAddress { offset: 0 }
        });
    };
    let address = WireSpan::new(0, address_len);
    let tag_start = address_section_len(address_len);

    tags.clear();
    let scan = scan_tags(&view, tag_start, config.max_elements, tags).map_err(|err| match err {
        TagScanError::MissingPrefix => ParseError::MissingTypeTags { offset: tag_start },
        TagScanError::Unterminated => ParseError::UnterminatedTypeTags { offset: tag_start },
    })?;

    if tracing::enabled!(tracing::Level::DEBUG) {
        tracing::debug!(
            address = %String::from_utf8_lossy(view.slice(address).unwrap_or_default()),
            tags = scan.count,
            "decoded message header"
        );
    }
    if scan.is_truncated() {
        tracing::debug!(stop = ?scan.stop, kept = scan.count, "tag scan stopped early");
    }

    let payload_start = tag_start + align4(scan.tag_string_len + 1);
    build_offsets(&view, &tags[..], payload_start, config, offsets)?;

    let tags: &'a TagBuf = tags;
    let offsets: &'a OffsetBuf = offsets;
    Ok(MessageValues::new(
        view,
        address,
        WireSpan::new(tag_start, scan.tag_string_len),
        tags,
        offsets,
        scan.stop,
        config.blob_headroom,
    ))
}
