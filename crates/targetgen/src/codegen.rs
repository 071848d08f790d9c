//! Code generation for the target type module.
//!
//! The module is a fixed template with two generated blocks: the associated
//! constants and the match arms that map a decoded string back onto them.
//! Output is indented the way rustfmt would leave it, but correctness only
//! depends on it parsing; the writer formats it afterwards.

use std::fmt::Write as FmtWrite;

use crate::naming::Identifier;

const DECLARATIONS: &str = "__DECLARATIONS__\n";
const DISPATCH: &str = "__DISPATCH__\n";

/// Module template. Each placeholder occupies a whole line and is replaced
/// by zero or more complete lines.
pub const TEMPLATE: &str = r#"// Code generated by targetgen. DO NOT EDIT.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The types of targets available in Chrome.
///
/// Values not known at generation time are kept verbatim, so newer
/// browsers still round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetType(Cow<'static, str>);

#[allow(non_upper_case_globals)]
impl TargetType {
__DECLARATIONS__
}

impl TargetType {
    /// The wire representation of this target type.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TargetType {
    fn from(value: String) -> Self {
        match value.as_str() {
__DISPATCH__
            _ => TargetType(Cow::Owned(value)),
        }
    }
}

impl From<&str> for TargetType {
    fn from(value: &str) -> Self {
        TargetType::from(value.to_string())
    }
}

impl Serialize for TargetType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TargetType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(TargetType::from)
    }
}
"#;

/// Render the full module for the given (sorted) identifiers.
pub fn render_artifact(identifiers: &[Identifier]) -> Result<String, std::fmt::Error> {
    let declarations = render_declarations(identifiers)?;
    let dispatch = render_dispatch(identifiers)?;

    Ok(TEMPLATE
        .replacen(DECLARATIONS, &declarations, 1)
        .replacen(DISPATCH, &dispatch, 1))
}

/// One associated constant per identifier.
pub fn render_declarations(identifiers: &[Identifier]) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    for ident in identifiers {
        writeln!(
            &mut output,
            "    pub const {}: TargetType = TargetType(Cow::Borrowed({}));",
            ident.name,
            string_literal(&ident.raw)
        )?;
    }

    Ok(output)
}

/// One decode match arm per identifier.
pub fn render_dispatch(identifiers: &[Identifier]) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    for ident in identifiers {
        writeln!(
            &mut output,
            "            {} => TargetType::{},",
            string_literal(&ident.raw),
            ident.name
        )?;
    }

    Ok(output)
}

/// Quote a value as a Rust string literal.
fn string_literal(value: &str) -> String {
    // `Debug` for `str` escapes quotes, backslashes and control characters
    // using escapes Rust source accepts.
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::to_identifiers;

    fn idents(values: &[&str]) -> Vec<Identifier> {
        to_identifiers(values.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_template_has_each_placeholder_once() {
        assert_eq!(TEMPLATE.matches(DECLARATIONS).count(), 1);
        assert_eq!(TEMPLATE.matches(DISPATCH).count(), 1);
    }

    #[test]
    fn test_render_declarations() {
        let code = render_declarations(&idents(&["page", "background_page"])).unwrap();
        assert_eq!(
            code,
            "    pub const BackgroundPage: TargetType = TargetType(Cow::Borrowed(\"background_page\"));\n\
             \x20   pub const Page: TargetType = TargetType(Cow::Borrowed(\"page\"));\n"
        );
    }

    #[test]
    fn test_render_dispatch() {
        let code = render_dispatch(&idents(&["page", "iframe"])).unwrap();
        assert_eq!(
            code,
            "            \"iframe\" => TargetType::Iframe,\n            \"page\" => TargetType::Page,\n"
        );
    }

    #[test]
    fn test_render_artifact() {
        let code = render_artifact(&idents(&["page", "iframe"])).unwrap();

        assert!(code.starts_with("// Code generated by targetgen. DO NOT EDIT.\n"));
        assert!(code.contains("pub struct TargetType(Cow<'static, str>);"));
        assert!(!code.contains("__DECLARATIONS__"), "Declarations should be substituted");
        assert!(!code.contains("__DISPATCH__"), "Dispatch should be substituted");

        // Constants come before the string conversion, sorted.
        let iframe = code.find("pub const Iframe").expect("Iframe constant");
        let page = code.find("pub const Page").expect("Page constant");
        let as_str = code.find("pub fn as_str").expect("as_str method");
        assert!(iframe < page && page < as_str);

        assert!(code.contains("\"page\" => TargetType::Page,"));
        assert!(code.contains("_ => TargetType(Cow::Owned(value)),"));
        assert!(code.contains("impl Serialize for TargetType"));
        assert!(code.contains("impl<'de> Deserialize<'de> for TargetType"));
    }

    #[test]
    fn test_render_empty_artifact() {
        let code = render_artifact(&[]).unwrap();
        assert!(code.contains("#[allow(non_upper_case_globals)]\nimpl TargetType {\n}\n"));
        assert!(code.contains(
            "match value.as_str() {\n            _ => TargetType(Cow::Owned(value)),"
        ));
        assert!(!code.contains("__"));
    }

    #[test]
    fn test_string_literal_escaping() {
        assert_eq!(string_literal("page"), "\"page\"");
        assert_eq!(string_literal(r"a\b"), r#""a\\b""#);
    }
}
