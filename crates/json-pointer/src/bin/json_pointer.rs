//! `json-pointer` — look up a JSON Pointer (RFC 6901) in a document.
//!
//! Usage:
//!   json-pointer [--strict] '<pointer>'
//!
//! The document is read from stdin. `--strict` only accepts RFC 6901 array
//! indices (no sign, no leading zeros). Set `RUST_LOG=debug` to trace
//! evaluation.

use json_pointer::cli::{lookup_pointer, parse_args, CliError};
use std::io::{self, Read, Write};

fn run() -> Result<String, CliError> {
    let args = parse_args(std::env::args().skip(1))?;

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;

    lookup_pointer(buf.trim(), &args.pointer, args.options)
}

fn main() {
    env_logger::init();

    match run() {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
