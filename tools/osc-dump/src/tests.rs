use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn dump_err(input: &Input) -> DumpError {
    let mut parser = OscParser::new();
    match dump_input(&mut parser, input) {
        Ok(text) => panic!("expected an error, got {text:?}"),
        Err(err) => err,
    }
}

fn dump_bytes(bytes: &[u8]) -> String {
    let mut parser = OscParser::new();
    dump_input(&mut parser, &Input::Hex(to_hex(bytes)))
        .unwrap_or_else(|e| panic!("dump failed: {e}"))
}

// === Hex input ===

#[test]
fn hex_with_whitespace() {
    assert_eq!(decode_hex("2f61 0000\n2C"), Ok(vec![0x2f, 0x61, 0, 0, 0x2c]));
}

#[test]
fn hex_errors() {
    assert_eq!(decode_hex("abc"), Err(HexError::OddLength));
    assert_eq!(decode_hex("zz"), Err(HexError::InvalidDigit('z')));
    assert_eq!(decode_hex(""), Ok(Vec::new()));
}

// === Arguments ===

#[test]
fn files_and_hex_inputs_in_order() {
    let options = parse_args(&args(&["a.osc", "--hex", "2f00", "--hex=2f01", "b.osc"]))
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        options.inputs,
        vec![
            Input::File(PathBuf::from("a.osc")),
            Input::Hex("2f00".to_string()),
            Input::Hex("2f01".to_string()),
            Input::File(PathBuf::from("b.osc")),
        ]
    );
}

#[test]
fn flags_configure_parser() {
    let options = parse_args(&args(&["--unaligned-blobs", "--max-elements=4", "x.osc"]))
        .unwrap_or_else(|e| panic!("{e}"));
    let config = parser_config(&options);
    assert_eq!(config.blob_padding, BlobPadding::Unaligned);
    assert_eq!(config.max_elements, 4);
}

#[test]
fn default_flags_keep_default_config() {
    let options = parse_args(&args(&["x.osc"])).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(parser_config(&options), ParserConfig::default());
}

#[test]
fn argument_errors() {
    assert_eq!(parse_args(&[]), Err(ArgsError::NoInput));
    assert_eq!(
        parse_args(&args(&["--hex"])),
        Err(ArgsError::MissingHexValue)
    );
    assert_eq!(
        parse_args(&args(&["--max-elements=0", "x"])),
        Err(ArgsError::InvalidMaxElements("0".to_string()))
    );
    assert_eq!(
        parse_args(&args(&["--max-elements=lots", "x"])),
        Err(ArgsError::InvalidMaxElements("lots".to_string()))
    );
    assert_eq!(
        parse_args(&args(&["--verbose", "x"])),
        Err(ArgsError::UnknownOption("--verbose".to_string()))
    );
}

// === Rendering ===

#[test]
fn renders_doc_example() {
    let mut parser = OscParser::new();
    let text = dump_input(
        &mut parser,
        &Input::Hex("2f666f6f 00000000 2c690000 0000002a".to_string()),
    )
    .unwrap_or_else(|e| panic!("dump failed: {e}"));
    assert_eq!(text, "/foo ,i\n  [0] int32 (`i`) 42\n");
}

#[test]
fn renders_arrays_indented() {
    let mut bytes = b"/a\0\0,[i]\0\0\0\0".to_vec();
    bytes.extend_from_slice(&7i32.to_be_bytes());
    assert_eq!(
        dump_bytes(&bytes),
        "/a ,[i]\n  [0] array start (`[`) [\n    [1] int32 (`i`) 7\n  [2] array end (`]`) ]\n"
    );
}

#[test]
fn renders_truncation() {
    let mut bytes = b"/a\0\0,ix\0".to_vec();
    bytes.extend_from_slice(&1i32.to_be_bytes());
    assert_eq!(
        dump_bytes(&bytes),
        "/a ,ix\n  [0] int32 (`i`) 1\n  stopped: unsupported tag 0x78 at offset 6\n"
    );
}

#[test]
fn warns_on_invalid_pattern() {
    let text = dump_bytes(b"/a b\0\0\0\0,\0\0\0");
    assert_eq!(text, "/a b ,\n  warning: not a valid OSC address pattern\n");
}

// === Failures ===

#[test]
fn parse_failure_names_input() {
    let err = dump_err(&Input::Hex("2f610000".to_string()));
    assert_eq!(err.to_string(), "<hex>: expected type tag string at offset 4");
}

#[test]
fn missing_file() {
    let err = dump_err(&Input::File(PathBuf::from("/nonexistent/osc-dump/input.osc")));
    assert!(matches!(err, DumpError::Io { .. }));
}

#[test]
fn bad_hex_input() {
    let err = dump_err(&Input::Hex("2f6".to_string()));
    assert!(matches!(err, DumpError::Hex(HexError::OddLength)));
}
