//! Run configuration.
//!
//! Values are built once at startup and passed down by reference; nothing
//! here changes during a run.

use std::time::Duration;

/// Chromium source location of chromedriver's DevTools HTTP client.
///
/// `?format=TEXT` makes gitiles serve the raw file wrapped in base64.
pub const DEFAULT_SOURCE_URL: &str = "https://chromium.googlesource.com/chromium/src/+/main/chrome/test/chromedriver/chrome/devtools_http_client.cc?format=TEXT";

/// Default output file name.
pub const DEFAULT_OUT: &str = "target_type.rs";

/// Settings for the whole pipeline.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Upstream file URL.
    pub source_url: String,
    pub fetch: FetchConfig,
    pub formatter: FormatterConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            fetch: FetchConfig::default(),
            formatter: FormatterConfig::default(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Upper bound on the whole request, body included.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            user_agent: concat!("targetgen/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// External formatter invoked on the written module.
///
/// The output path is appended after `args`.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl FormatterConfig {
    /// Human-readable command line, used in logs and errors.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            program: "rustfmt".to_string(),
            args: vec!["--edition".to_string(), "2024".to_string()],
        }
    }
}
