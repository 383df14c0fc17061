use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Write command lines to `output`, one per line.
///
/// Inputs have already been read, so an output that does not exist yet
/// cannot be one of them. An existing output is compared by canonical path.
pub fn write_commands(output: &Path, inputs: &[&Path], commands: &[String]) -> Result<()> {
    if output.exists() {
        let target = output
            .canonicalize()
            .with_context(|| format!("failed to resolve command file {}", output.display()))?;
        let clash = inputs
            .iter()
            .find(|input| input.canonicalize().is_ok_and(|path| path == target));
        if let Some(input) = clash {
            bail!(
                "command file {} is the input {}; choose another --output",
                output.display(),
                input.display()
            );
        }
    }

    let mut body = commands.join("\n");
    if !body.is_empty() {
        body.push('\n');
    }
    fs::write(output, body)
        .with_context(|| format!("failed to write command file {}", output.display()))
}
