//! Shared test utilities: a minimal OSC message encoder.

/// One argument to encode.
pub enum Arg<'a> {
    Int32(i32),
    Float32(f32),
    Str(&'a str),
    Blob(&'a [u8]),
    /// A tag code with no payload (`T`, `N`, `[`, or an unsupported byte).
    Tag(u8),
}

fn push_padded(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(bytes);
    out.push(0);
    while out.len() % 4 != 0 {
        out.push(0);
    }
}

/// Encode an OSC 1.0 message with padded strings and blobs.
pub fn message(address: &str, args: &[Arg<'_>]) -> Vec<u8> {
    let mut tags = vec![b','];
    let mut payload = Vec::new();
    for arg in args {
        match arg {
            Arg::Int32(v) => {
                tags.push(b'i');
                payload.extend_from_slice(&v.to_be_bytes());
            }
            Arg::Float32(v) => {
                tags.push(b'f');
                payload.extend_from_slice(&v.to_be_bytes());
            }
            Arg::Str(s) => {
                tags.push(b's');
                push_padded(&mut payload, s.as_bytes());
            }
            Arg::Blob(data) => {
                tags.push(b'b');
                let size = i32::try_from(data.len()).unwrap();
                payload.extend_from_slice(&size.to_be_bytes());
                payload.extend_from_slice(data);
                while payload.len() % 4 != 0 {
                    payload.push(0);
                }
            }
            Arg::Tag(code) => tags.push(*code),
        }
    }

    let mut out = Vec::new();
    push_padded(&mut out, address.as_bytes());
    push_padded(&mut out, &tags);
    out.extend_from_slice(&payload);
    out
}
