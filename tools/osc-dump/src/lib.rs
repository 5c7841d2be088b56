//! Decode OSC messages and print them one argument per line.
//!
//! ```text
//! $ osc-dump --hex "2f666f6f 00000000 2c690000 0000002a"
//! /foo ,i
//!   [0] int32 (`i`) 42
//! ```

use std::fmt;
use std::path::PathBuf;
use std::sync::Once;

use osc_parse::{
    BlobPadding, MessageValues, OscParser, ParseError, ParserConfig, TagStop, TypeTag,
};
use osc_wire::address_pattern_is_valid;

mod args;
mod hex;

pub use args::{parse_args, ArgsError, Options};
pub use hex::{decode_hex, HexError};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=osc_parse=trace`.
/// With `OSC_LOG_TREE` also set, spans are printed as an indented tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("OSC_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Where a message comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Raw message bytes in a file.
    File(PathBuf),
    /// Hex digits given on the command line.
    Hex(String),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::File(path) => write!(f, "{}", path.display()),
            Input::Hex(_) => f.write_str("<hex>"),
        }
    }
}

/// A single input could not be dumped.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid hex input: {0}")]
    Hex(#[from] HexError),

    #[error("{input}: {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseError,
    },
}

/// Build the parser configuration from command-line options.
pub fn parser_config(options: &Options) -> ParserConfig {
    let padding = if options.unaligned_blobs {
        BlobPadding::Unaligned
    } else {
        BlobPadding::Aligned
    };
    let mut config = ParserConfig::default().with_blob_padding(padding);
    if let Some(max) = options.max_elements {
        config = config.with_max_elements(max);
    }
    config
}

/// Read, parse and render one input.
pub fn dump_input(parser: &mut OscParser, input: &Input) -> Result<String, DumpError> {
    let bytes = match input {
        Input::File(path) => std::fs::read(path).map_err(|source| DumpError::Io {
            path: path.display().to_string(),
            source,
        })?,
        Input::Hex(text) => decode_hex(text)?,
    };
    tracing::debug!(%input, len = bytes.len(), "dumping message");

    let msg = parser.load(&bytes).map_err(|source| DumpError::Parse {
        input: input.to_string(),
        source,
    })?;
    Ok(Rendered(&msg).to_string())
}

/// Display adapter printing a message header and one line per element.
///
/// Array contents are indented one level per nesting depth.
pub struct Rendered<'m, 'a>(pub &'m MessageValues<'a>);

impl fmt::Display for Rendered<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = self.0;
        writeln!(
            f,
            "{} {}",
            String::from_utf8_lossy(msg.address_bytes()),
            String::from_utf8_lossy(msg.tag_string())
        )?;
        if !address_pattern_is_valid(msg.address_bytes()) {
            writeln!(f, "  warning: not a valid OSC address pattern")?;
        }

        let mut depth = 1usize;
        for (index, (&tag, value)) in msg.tags().iter().zip(msg.values()).enumerate() {
            if tag == TypeTag::ArrayEnd {
                depth = depth.saturating_sub(1).max(1);
            }
            writeln!(f, "{:width$}[{index}] {tag} {value}", "", width = depth * 2)?;
            if tag == TypeTag::ArrayStart {
                depth += 1;
            }
        }

        match msg.truncation() {
            Some(TagStop::Unsupported { byte, offset }) => writeln!(
                f,
                "  stopped: unsupported tag 0x{byte:02x} at offset {offset}"
            ),
            Some(TagStop::Capacity { offset }) => writeln!(
                f,
                "  stopped: element limit reached, tag at offset {offset} not read"
            ),
            Some(TagStop::End) | None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests;
