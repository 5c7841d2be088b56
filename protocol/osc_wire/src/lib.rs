//! Low-level scanning of Open Sound Control message bytes.
//!
//! This crate knows the OSC wire layout and nothing else: where the address
//! ends, which type tags follow it, and how to read big-endian fields out of
//! a borrowed byte region. It never allocates and never copies argument data.
//!
//! ```text
//! /foo/bar\0\0\0\0 ,if\0 [i32 BE] [f32 BE]
//! ^                ^     ^
//! address          tags  payloads (each padded to 4 bytes)
//! ```
//!
//! The parser context that owns scratch storage and exposes typed accessors
//! lives in `osc_parse`. Anything that only needs to peek at an address
//! (routers, filters) can depend on this crate alone.

pub mod address;
mod byte_view;
mod tag;
pub mod tag_scanner;

pub use address::{
    address_is_valid, address_pattern_is_valid, address_section_len, find_address_length,
};
pub use byte_view::{align4, read_be_i32, ByteView, WireSpan};
pub use tag::{Payload, TypeTag};
pub use tag_scanner::{matching_array_end, scan_tags, TagScan, TagScanError, TagStop};

/// Byte that opens every OSC address.
pub const ADDRESS_PREFIX: u8 = b'/';

/// Byte that opens every OSC type-tag string.
pub const TAG_PREFIX: u8 = b',';
