//! OSC message dumper CLI.

use std::process::ExitCode;

use osc_dump::{dump_input, init_tracing, parse_args, parser_config};
use osc_parse::OscParser;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let mut parser = OscParser::with_config(parser_config(&options));
    let mut failed = false;
    for input in &options.inputs {
        match dump_input(&mut parser, input) {
            Ok(text) => print!("{text}"),
            Err(err) => {
                eprintln!("error: {err}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_usage() {
    eprintln!("Usage: osc-dump [options] <file>...");
    eprintln!("       osc-dump [options] --hex <digits>");
    eprintln!();
    eprintln!("Each file holds one raw OSC message.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --hex <digits>       Decode a message given as hex (whitespace ignored)");
    eprintln!("  --unaligned-blobs    Blob payloads are not padded to 4 bytes");
    eprintln!("  --max-elements=<n>   Read at most n arguments per message");
    eprintln!();
    eprintln!("Logging: RUST_LOG=osc_parse=trace, OSC_LOG_TREE=1 for a span tree.");
}
