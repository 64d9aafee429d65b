//! Sidecar binary
//!
//! `sidecar <string>` prints the base64 encoding of `<string>`.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    ExitCode::from(sidecar::run_to_status(std::env::args_os(), &mut out))
}
