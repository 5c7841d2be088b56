//! Message encoder for unit tests.

/// Append `bytes` plus a NUL, then pad to a multiple of 4.
fn push_padded(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(bytes);
    out.push(0);
    while out.len() % 4 != 0 {
        out.push(0);
    }
}

/// Builds OSC messages byte by byte.
pub(crate) struct MessageBuilder {
    address: Vec<u8>,
    tags: Vec<u8>,
    args: Vec<u8>,
}

impl MessageBuilder {
    pub(crate) fn new(address: &str) -> Self {
        MessageBuilder {
            address: address.as_bytes().to_vec(),
            tags: Vec::new(),
            args: Vec::new(),
        }
    }

    /// Push a raw tag code with no payload.
    pub(crate) fn tag(mut self, code: u8) -> Self {
        self.tags.push(code);
        self
    }

    pub(crate) fn int32(mut self, value: i32) -> Self {
        self.tags.push(b'i');
        self.args.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub(crate) fn float32(mut self, value: f32) -> Self {
        self.tags.push(b'f');
        self.args.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub(crate) fn int64(mut self, value: i64) -> Self {
        self.tags.push(b'h');
        self.args.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub(crate) fn float64(mut self, value: f64) -> Self {
        self.tags.push(b'd');
        self.args.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub(crate) fn timetag(mut self, value: u64) -> Self {
        self.tags.push(b't');
        self.args.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub(crate) fn ascii_char(mut self, value: u8) -> Self {
        self.tags.push(b'c');
        self.args.extend_from_slice(&[0, 0, 0, value]);
        self
    }

    pub(crate) fn color(mut self, rgba: [u8; 4]) -> Self {
        self.tags.push(b'r');
        self.args.extend_from_slice(&rgba);
        self
    }

    pub(crate) fn midi(mut self, bytes: [u8; 4]) -> Self {
        self.tags.push(b'm');
        self.args.extend_from_slice(&bytes);
        self
    }

    pub(crate) fn string(mut self, value: &str) -> Self {
        self.tags.push(b's');
        push_padded(&mut self.args, value.as_bytes());
        self
    }

    pub(crate) fn symbol(mut self, value: &str) -> Self {
        self.tags.push(b'S');
        push_padded(&mut self.args, value.as_bytes());
        self
    }

    pub(crate) fn blob(mut self, data: &[u8]) -> Self {
        self = self.unpadded_blob(data);
        while self.args.len() % 4 != 0 {
            self.args.push(0);
        }
        self
    }

    /// Blob without trailing padding, as some senders emit.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        reason = "test blobs are small"
    )]
    pub(crate) fn unpadded_blob(mut self, data: &[u8]) -> Self {
        self.tags.push(b'b');
        self.args
            .extend_from_slice(&(data.len() as i32).to_be_bytes());
        self.args.extend_from_slice(data);
        self
    }

    /// Raw payload bytes with no tag.
    pub(crate) fn raw(mut self, bytes: &[u8]) -> Self {
        self.args.extend_from_slice(bytes);
        self
    }

    pub(crate) fn build(self) -> Vec<u8> {
        let mut out = Vec::new();
        push_padded(&mut out, &self.address);
        let mut tags = vec![b','];
        tags.extend_from_slice(&self.tags);
        push_padded(&mut out, &tags);
        out.extend_from_slice(&self.args);
        out
    }
}
