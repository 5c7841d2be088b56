//! Hex text to bytes.

/// Hex input could not be decoded.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("odd number of hex digits")]
    OddLength,

    #[error("invalid hex digit `{0}`")]
    InvalidDigit(char),
}

/// Decode hex digits into bytes. Whitespace between digits is ignored, so
/// `"2f61 0000"` and `"2f610000"` decode the same.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, HexError> {
    let mut out = Vec::with_capacity(text.len() / 2);
    let mut high: Option<u8> = None;

    for c in text.chars().filter(|c| !c.is_whitespace()) {
        let Some(digit) = c.to_digit(16) else {
            return Err(HexError::InvalidDigit(c));
        };
        #[allow(clippy::cast_possible_truncation, reason = "hex digit is below 16")]
        let digit = digit as u8;
        match high.take() {
            Some(h) => out.push((h << 4) | digit),
            None => high = Some(digit),
        }
    }

    if high.is_some() {
        return Err(HexError::OddLength);
    }
    Ok(out)
}
