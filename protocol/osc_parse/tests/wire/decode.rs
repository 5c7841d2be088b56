//! Well-formed messages.

use osc_parse::{OscParser, ParserConfig, TagStop, TypeTag, Value};
use pretty_assertions::assert_eq;

use crate::common::{message, Arg};

// === Core types ===

#[test]
fn foo_bar_int_and_float() {
    let bytes = message("/foo/bar", &[Arg::Int32(42), Arg::Float32(1.5)]);
    let mut parser = OscParser::new();
    let msg = parser.parse_slice(&bytes).unwrap();

    assert_eq!(msg.address(), Some("/foo/bar"));
    assert_eq!(msg.tags(), &[TypeTag::Int32, TypeTag::Float32]);
    assert_eq!(msg.read_int32(0), 42);
    assert_eq!(msg.read_float32(1), 1.5);
}

#[test]
fn received_into_parser_buffer() {
    let bytes = message("/foo/bar", &[Arg::Int32(42), Arg::Float32(1.5)]);
    let mut parser = OscParser::new();
    let len = bytes.len();
    parser.buffer_mut()[..len].copy_from_slice(&bytes);

    let msg = parser.parse(len).unwrap();
    assert_eq!(msg.read_int32(0), 42);
    assert_eq!(msg.read_float32(1), 1.5);
}

#[test]
fn strings_blobs_and_flags() {
    let bytes = message(
        "/synth/1/patch",
        &[
            Arg::Str("warm pad"),
            Arg::Blob(&[0xF0, 0x7E, 0x00, 0x09, 0x01, 0xF7]),
            Arg::Tag(b'T'),
            Arg::Tag(b'N'),
            Arg::Int32(-3),
        ],
    );
    let mut parser = OscParser::new();
    let msg = parser.parse_slice(&bytes).unwrap();

    assert_eq!(msg.read_string(0), "warm pad");
    assert_eq!(msg.blob_bytes(1), &[0xF0, 0x7E, 0x00, 0x09, 0x01, 0xF7]);
    assert!(msg.read_bool(2));
    assert!(msg.is_nil(3));
    assert_eq!(msg.read_int32(4), -3);
}

#[test]
fn values_iterate_every_element() {
    let bytes = message("/v", &[Arg::Int32(1), Arg::Str("two"), Arg::Tag(b'F')]);
    let mut parser = OscParser::new();
    let msg = parser.parse_slice(&bytes).unwrap();

    let rendered: Vec<String> = msg.values().map(|v| v.to_string()).collect();
    assert_eq!(rendered, vec!["1", "\"two\"", "false"]);
    assert_eq!(msg.value(1), Some(Value::String(b"two")));
}

// === Blob sinks ===

#[test]
fn sink_reused_across_messages() {
    let mut parser = OscParser::new();
    let mut sink = Vec::new();

    let first = message("/blob", &[Arg::Blob(&[1; 40])]);
    assert_eq!(
        parser
            .parse_slice(&first)
            .unwrap()
            .read_blob(0, &mut sink, 0),
        40
    );
    assert_eq!(sink.len(), 40 + 256);

    // Smaller blob: the sink is big enough and keeps its length.
    let second = message("/blob", &[Arg::Blob(&[2; 8])]);
    assert_eq!(
        parser
            .parse_slice(&second)
            .unwrap()
            .read_blob(0, &mut sink, 0),
        8
    );
    assert_eq!(sink.len(), 40 + 256);
    assert_eq!(&sink[..8], &[2; 8]);
    assert_eq!(&sink[8..40], &[1; 32]);
}

// === Parser reuse ===

#[test]
fn stream_of_messages() {
    let mut parser = OscParser::new();
    for i in 0..50 {
        let args: Vec<Arg<'_>> = (0..i % 7).map(Arg::Int32).collect();
        let bytes = message("/stream", &args);
        let msg = parser.load(&bytes).unwrap();
        assert_eq!(msg.element_count(), args.len());
        for (index, _) in args.iter().enumerate() {
            assert_eq!(msg.read_int32(index), i32::try_from(index).unwrap());
        }
    }
}

// === Truncation ===

#[test]
fn unsupported_tag_is_reported() {
    let bytes = message("/t", &[Arg::Int32(5), Arg::Tag(b'?'), Arg::Int32(6)]);
    let mut parser = OscParser::new();
    let msg = parser.parse_slice(&bytes).unwrap();

    assert_eq!(msg.element_count(), 1);
    assert_eq!(msg.read_int32(0), 5);
    assert!(matches!(
        msg.truncation(),
        Some(TagStop::Unsupported { byte: b'?', .. })
    ));
}

#[test]
fn element_limit_is_reported() {
    let args: Vec<Arg<'_>> = (0..10).map(Arg::Int32).collect();
    let bytes = message("/many", &args);
    let mut parser = OscParser::with_config(ParserConfig::default().with_max_elements(4));
    let msg = parser.parse_slice(&bytes).unwrap();

    assert_eq!(msg.element_count(), 4);
    assert!(matches!(msg.truncation(), Some(TagStop::Capacity { .. })));
    assert_eq!(msg.read_int32(3), 3);
}
