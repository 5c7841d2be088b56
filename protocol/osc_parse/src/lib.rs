//! Zero-copy OSC message parsing.
//!
//! [`OscParser`] is an owned parser context: it holds a reusable scratch
//! buffer, tag sequence and offset table, so parsing message after message
//! does not allocate. A parse yields a [`MessageValues`] view that borrows the
//! context and the message bytes; typed accessors decode single arguments on
//! demand straight from the buffer.
//!
//! ```text
//! let mut parser = OscParser::new();
//! let msg = parser.parse_slice(&packet)?;
//! let gain = msg.read_float32(0);
//! ```
//!
//! # Failure model
//!
//! Structural problems (bad address, missing tag string, arguments running
//! past the end of the message) fail the parse with a [`ParseError`]. Once a
//! parse succeeds, every recorded payload lies inside the buffer, and the
//! accessors never fail loudly: a wrong type or index yields the type's
//! default value. [`MessageValues::try_read`] exposes the reason as an
//! [`AccessError`] for callers that care.
//!
//! Tag codes this crate does not understand end tag scanning early instead of
//! failing the parse; see [`MessageValues::truncation`].

mod config;
mod error;
mod offsets;
mod parser;
mod sink;
mod values;

#[cfg(test)]
mod test_helpers;

pub use config::{
    BlobPadding, ParserConfig, DEFAULT_BLOB_HEADROOM, DEFAULT_BUFFER_SIZE, DEFAULT_MAX_BLOB_SIZE,
    DEFAULT_MAX_ELEMENTS,
};
pub use error::{AccessError, ParseError};
pub use parser::{OscParser, MAX_MESSAGE_LEN};
pub use sink::ResizableSink;
pub use values::{Color32, MessageValues, MidiMessage, TimeTag, Value, WireScalar};

pub use osc_wire::{TagStop, TypeTag, WireSpan};
