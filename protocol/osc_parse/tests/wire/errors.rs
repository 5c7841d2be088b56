//! Malformed messages.

use osc_parse::{AccessError, OscParser, ParseError, ParserConfig, TypeTag};
use pretty_assertions::assert_eq;

use crate::common::{message, Arg};

fn parse_error(bytes: &[u8]) -> ParseError {
    let mut parser = OscParser::new();
    let result = parser.parse_slice(bytes).map(|msg| msg.element_count());
    result.unwrap_err()
}

// === Structure ===

#[test]
fn missing_leading_slash() {
    let mut bytes = message("/x", &[Arg::Int32(1)]);
    bytes[0] = b'x';
    assert_eq!(
        parse_error(&bytes),
        ParseError::MalformedAddress { offset: 0 }
    );
}

#[test]
fn truncated_int() {
    let mut bytes = message("/x", &[Arg::Int32(1)]);
    bytes.pop();
    let err = parse_error(&bytes);
    assert_eq!(
        err,
        ParseError::TruncatedArgument {
            index: 0,
            tag: TypeTag::Int32,
            offset: 8,
            needed: 4,
            available: 3,
        }
    );
    assert_eq!(
        err.to_string(),
        "int32 (`i`) argument 0 at offset 8 needs 4 bytes, only 3 available"
    );
}

#[test]
fn string_without_terminator() {
    let mut bytes = message("/x", &[]);
    bytes[5] = b's';
    bytes.extend_from_slice(b"abcd");
    assert_eq!(
        parse_error(&bytes),
        ParseError::UnterminatedString {
            index: 0,
            offset: 8
        }
    );
}

#[test]
fn blob_over_limit() {
    let bytes = message("/x", &[Arg::Blob(&[0; 64])]);
    let mut parser = OscParser::with_config(ParserConfig::default().with_max_blob_size(32));
    let result = parser.parse_slice(&bytes).map(|msg| msg.element_count());
    assert_eq!(
        result,
        Err(ParseError::BlobTooLarge {
            index: 0,
            size: 64,
            max: 32
        })
    );
}

// === Accessors ===

#[test]
fn wrong_type_and_index() {
    let bytes = message("/x", &[Arg::Str("s")]);
    let mut parser = OscParser::new();
    let msg = parser.parse_slice(&bytes).unwrap();

    assert_eq!(msg.read_int32(0), 0);
    assert_eq!(
        msg.try_read::<i32>(0).unwrap_err().to_string(),
        "element 0 is string (`s`), not int32 (`i`)"
    );
    assert_eq!(
        msg.try_read::<f32>(3),
        Err(AccessError::IndexOutOfRange { index: 3, count: 1 })
    );
}
