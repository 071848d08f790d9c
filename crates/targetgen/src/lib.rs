//! Generator for the Chrome DevTools target type module.
//!
//! Chromedriver's `devtools_http_client.cc` decides what kind of target a
//! DevTools endpoint reports by comparing `type_as_string` against a set of
//! string literals. This crate mirrors those literals into a Rust module:
//!
//! ```text
//! fetch (base64) -> extract literals -> sort + name -> render -> write + rustfmt
//! ```
//!
//! Every stage is a plain function that takes the previous stage's output.
//! [`generate`] runs the whole pipeline. [`render_source`] runs only the
//! offline part, from decoded source text to an unformatted module.

mod error;
pub mod codegen;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod naming;
pub mod writer;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

pub use codegen::render_artifact;
pub use config::{FetchConfig, FormatterConfig, GeneratorConfig};
pub use error::GenerateError;
pub use extract::extract_target_types;
pub use naming::{Identifier, NamingError, to_identifiers};

/// Outcome of a successful [`generate`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of constants emitted.
    pub count: usize,
    /// Path of the written module.
    pub path: PathBuf,
}

/// Render the target type module from already-decoded upstream source text.
pub fn render_source(text: &str) -> Result<String, GenerateError> {
    render_with_count(text).map(|(source, _)| source)
}

fn render_with_count(text: &str) -> Result<(String, usize), GenerateError> {
    let raw = extract_target_types(text);
    if raw.is_empty() {
        warn!("no target types found in upstream source; emitting an empty module");
    }

    let identifiers = to_identifiers(raw)?;
    let source = render_artifact(&identifiers)?;
    Ok((source, identifiers.len()))
}

/// Fetch upstream, regenerate the module, write it to `out` and format it.
pub async fn generate(config: &GeneratorConfig, out: &Path) -> Result<Summary, GenerateError> {
    let client = fetch::build_client(&config.fetch)?;

    info!("Fetching {}", config.source_url);
    let bytes = fetch::fetch_source(&client, &config.source_url).await?;
    info!("Fetched {} bytes of source", bytes.len());

    let text = extract::decode_text(&bytes);
    let (source, count) = render_with_count(&text)?;
    info!("Rendered {} target types", count);

    writer::write_artifact(out, &source)?;
    writer::run_formatter(&config.formatter, out)?;

    Ok(Summary {
        count,
        path: out.to_path_buf(),
    })
}

#[cfg(test)]
mod tests;
