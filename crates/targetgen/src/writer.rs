//! Writing and formatting the generated module.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::config::FormatterConfig;
use crate::error::GenerateError;

/// Write the module to `path`, replacing any previous contents.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), GenerateError> {
    std::fs::write(path, contents).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Run the configured formatter in place on `path`.
pub fn run_formatter(config: &FormatterConfig, path: &Path) -> Result<(), GenerateError> {
    let command = config.command_line();
    debug!("Running `{} {}`", command, path.display());

    let output = Command::new(&config.program)
        .args(&config.args)
        .arg(path)
        .output()
        .map_err(|e| GenerateError::Format {
            command: command.clone(),
            detail: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = if stderr.trim().is_empty() {
            output.status.to_string()
        } else {
            format!("{}: {}", output.status, stderr.trim())
        };
        return Err(GenerateError::Format { command, detail });
    }

    Ok(())
}
