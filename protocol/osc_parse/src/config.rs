//! Parser limits and wire-format modes.

/// Default maximum number of arguments per message.
pub const DEFAULT_MAX_ELEMENTS: usize = 32;

/// Default maximum blob payload size (256 KiB).
pub const DEFAULT_MAX_BLOB_SIZE: u32 = 256 * 1024;

/// Default scratch buffer size: 64 KiB of headers and scalars plus one
/// maximum-size blob.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024 + DEFAULT_MAX_BLOB_SIZE as usize;

/// Default extra bytes allocated when a blob sink has to grow.
pub const DEFAULT_BLOB_HEADROOM: usize = 256;

/// How the running offset advances past a blob payload.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BlobPadding {
    /// Pad the blob data to a 4-byte boundary, as OSC 1.0 requires.
    #[default]
    Aligned,
    /// Advance by exactly `4 + size` bytes. Matches senders that do not pad
    /// blob payloads.
    Unaligned,
}

/// Limits and modes for an [`OscParser`](crate::OscParser).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Tag sequence capacity. Further tags are dropped and the message is
    /// marked truncated.
    pub max_elements: usize,
    /// Largest blob accepted, in bytes.
    pub max_blob_size: u32,
    /// Size of the scratch buffer; also the largest message accepted.
    pub buffer_size: usize,
    /// Extra bytes added when [`MessageValues::read_blob`] grows a sink.
    ///
    /// [`MessageValues::read_blob`]: crate::MessageValues::read_blob
    pub blob_headroom: usize,
    /// Blob padding mode.
    pub blob_padding: BlobPadding,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_elements: DEFAULT_MAX_ELEMENTS,
            max_blob_size: DEFAULT_MAX_BLOB_SIZE,
            buffer_size: DEFAULT_BUFFER_SIZE,
            blob_headroom: DEFAULT_BLOB_HEADROOM,
            blob_padding: BlobPadding::Aligned,
        }
    }
}

impl ParserConfig {
    /// Set the maximum number of arguments per message.
    #[must_use]
    pub fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = max_elements;
        self
    }

    /// Set the maximum blob size.
    #[must_use]
    pub fn with_max_blob_size(mut self, max_blob_size: u32) -> Self {
        self.max_blob_size = max_blob_size;
        self
    }

    /// Set the scratch buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Set the blob sink growth headroom.
    #[must_use]
    pub fn with_blob_headroom(mut self, blob_headroom: usize) -> Self {
        self.blob_headroom = blob_headroom;
        self
    }

    /// Set the blob padding mode.
    #[must_use]
    pub fn with_blob_padding(mut self, blob_padding: BlobPadding) -> Self {
        self.blob_padding = blob_padding;
        self
    }
}
