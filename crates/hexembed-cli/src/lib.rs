use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use hexembed_core::Embedder;
use thiserror::Error;
use tracing::info;

pub mod logging;

pub use logging::init_logging;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("usage: {program} <input_file> <output_file> (got {} arguments: {args:?})", args.len())]
    Usage { program: String, args: Vec<String> },
}

/// Run the embedder for a full `argv`, program name included.
///
/// Writes the progress line to stdout.
pub fn run(args: &[OsString]) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out)
}

/// Same as [`run`], writing the progress line to `out`
pub fn run_with_output<W: Write>(args: &[OsString], out: &mut W) -> anyhow::Result<()> {
    let (input, output) = parse_args(args)?;

    writeln!(out, "Embedding {} into {}", input.display(), output.display())
        .context("failed to write progress line")?;
    out.flush().context("failed to write progress line")?;

    let report = Embedder::new()
        .transform(input, output)
        .with_context(|| format!("embedding {} into {}", input.display(), output.display()))?;

    info!("Wrote {} ({} bytes) to {}", report.ident, report.bytes, output.display());
    Ok(())
}

fn parse_args(args: &[OsString]) -> Result<(&Path, &Path), CliError> {
    match args {
        [_, input, output] => Ok((Path::new(input), Path::new(output))),
        _ => {
            let program = args
                .first()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
            let args = args
                .iter()
                .skip(1)
                .map(|a| a.to_string_lossy().into_owned())
                .collect();
            Err(CliError::Usage { program, args })
        }
    }
}
