//! Conversion of raw target type literals into exported constant names.

use heck::ToUpperCamelCase;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while naming target types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    #[error("target type {raw:?} does not produce a valid identifier (got {name:?})")]
    InvalidIdentifier { raw: String, name: String },
}

/// A target type literal paired with its generated constant name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// Literal as it appears upstream (e.g. `background_page`).
    pub raw: String,
    /// UpperCamelCase constant name (e.g. `BackgroundPage`).
    pub name: String,
}

impl Identifier {
    /// Name a single literal.
    ///
    /// Leading characters that cannot start an identifier are dropped
    /// (`2d_canvas` becomes `DCanvas`). Only a name that is still unusable
    /// afterwards is an error.
    pub fn from_raw(raw: impl Into<String>) -> Result<Self, NamingError> {
        let raw = raw.into();
        let name = raw
            .trim_start_matches(|c: char| !c.is_ascii_alphabetic())
            .to_upper_camel_case();
        if !is_valid_const_name(&name) {
            return Err(NamingError::InvalidIdentifier { raw, name });
        }
        Ok(Self { raw, name })
    }
}

/// Sort literals ascending and name each one.
///
/// Every literal yields one identifier, repeats included. Repeats and
/// distinct literals sharing a name are passed through with a warning.
pub fn to_identifiers(mut raw: Vec<String>) -> Result<Vec<Identifier>, NamingError> {
    raw.sort();

    let mut identifiers: Vec<Identifier> = Vec::with_capacity(raw.len());
    for value in raw {
        let ident = Identifier::from_raw(value)?;
        if let Some(existing) = identifiers.iter().find(|i| i.name == ident.name) {
            warn!(
                "target types {:?} and {:?} both map to `{}`",
                existing.raw, ident.raw, ident.name
            );
        }
        identifiers.push(ident);
    }

    Ok(identifiers)
}

/// Names are emitted as associated constants, so they must be plain ASCII
/// identifiers starting with a letter. `Self` is the only UpperCamelCase
/// keyword.
fn is_valid_const_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric()) && name != "Self"
}
