//! Command-line flags.

use std::path::PathBuf;

use crate::Input;

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub inputs: Vec<Input>,
    /// `--unaligned-blobs`: blob payloads carry no trailing padding.
    pub unaligned_blobs: bool,
    /// `--max-elements=N`: override the tag sequence capacity.
    pub max_elements: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("`--hex` needs a value")]
    MissingHexValue,

    #[error("invalid `--max-elements` value `{0}`")]
    InvalidMaxElements(String),

    #[error("no input given")]
    NoInput,
}

/// Parse arguments, excluding the program name.
///
/// Files and `--hex <digits>` values may be mixed and repeated; each becomes
/// one input, dumped in order.
pub fn parse_args(args: &[String]) -> Result<Options, ArgsError> {
    let mut options = Options::default();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];
        if arg == "--hex" {
            let value = args.get(i + 1).ok_or(ArgsError::MissingHexValue)?;
            options.inputs.push(Input::Hex(value.clone()));
            i += 2;
            continue;
        }

        if let Some(value) = arg.strip_prefix("--hex=") {
            options.inputs.push(Input::Hex(value.to_string()));
        } else if arg == "--unaligned-blobs" {
            options.unaligned_blobs = true;
        } else if let Some(value) = arg.strip_prefix("--max-elements=") {
            let max = value
                .parse::<usize>()
                .ok()
                .filter(|&max| max > 0)
                .ok_or_else(|| ArgsError::InvalidMaxElements(value.to_string()))?;
            options.max_elements = Some(max);
        } else if arg.starts_with('-') {
            return Err(ArgsError::UnknownOption(arg.clone()));
        } else {
            options.inputs.push(Input::File(PathBuf::from(arg)));
        }
        i += 1;
    }

    if options.inputs.is_empty() {
        return Err(ArgsError::NoInput);
    }
    Ok(options)
}
