//! Sidecar
//!
//! Encodes its first command-line argument as standard, padded base64 and
//! prints the result followed by a newline. The encoder service spawns one
//! of these per request and captures its stdout.

use std::ffi::OsString;
use std::io::{self, Write};

use base64::{engine::general_purpose, Engine as _};

/// Printed to stdout when no argument is supplied.
pub const USAGE: &str = "Usage: ./sidecar <string>";

/// Exit status for a successful encode.
pub const EXIT_OK: u8 = 0;

/// Exit status when the caller forgot the argument.
pub const EXIT_USAGE: u8 = 1;

/// Exit status when the result could not be written to stdout.
pub const EXIT_IO_ERROR: u8 = 2;

/// Base64-encode the given bytes with the standard alphabet and padding.
pub fn encode(input: impl AsRef<[u8]>) -> String {
    general_purpose::STANDARD.encode(input)
}

/// Run the sidecar against an argument list (program name first) and write
/// the result to `out`. Returns the process exit status.
///
/// Only the first positional argument is used; anything after it is ignored.
pub fn run<I, W>(args: I, out: &mut W) -> io::Result<u8>
where
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    let Some(input) = args.into_iter().nth(1) else {
        writeln!(out, "{}", USAGE)?;
        return Ok(EXIT_USAGE);
    };

    writeln!(out, "{}", encode(arg_bytes(&input)))?;
    Ok(EXIT_OK)
}

/// Like [`run`], but flushes `out` and folds write failures into
/// [`EXIT_IO_ERROR`] so the caller always gets an exit status.
pub fn run_to_status<I, W>(args: I, out: &mut W) -> u8
where
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    match run(args, out).and_then(|status| out.flush().map(|_| status)) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("sidecar: failed to write output: {}", e);
            EXIT_IO_ERROR
        }
    }
}

#[cfg(unix)]
fn arg_bytes(arg: &OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    arg.as_bytes().to_vec()
}

#[cfg(not(unix))]
fn arg_bytes(arg: &OsString) -> Vec<u8> {
    arg.to_string_lossy().into_owned().into_bytes()
}
