//! Tests for the offline pipeline (extract, name, render).

use crate::{GenerateError, NamingError, render_source};

#[test]
fn test_page_and_iframe_scenario() {
    let text = r#"
        std::string type_as_string;
        if (type_as_string == "page")
          type = WebViewInfo::kPage;
        else if (type_as_string == "iframe")
          type = WebViewInfo::kIFrame;
    "#;
    let code = render_source(text).unwrap();

    let iframe = code
        .find("pub const Iframe: TargetType = TargetType(Cow::Borrowed(\"iframe\"));")
        .expect("Iframe constant");
    let page = code
        .find("pub const Page: TargetType = TargetType(Cow::Borrowed(\"page\"));")
        .expect("Page constant");
    assert!(iframe < page, "Constants should be sorted");

    let iframe_arm = code.find("\"iframe\" => TargetType::Iframe,").expect("iframe arm");
    let page_arm = code.find("\"page\" => TargetType::Page,").expect("page arm");
    assert!(iframe_arm < page_arm, "Dispatch arms should be sorted");
}

#[test]
fn test_empty_source_renders_complete_module() {
    let code = render_source("no target types here").unwrap();
    assert!(!code.contains("pub const"));
    assert!(code.contains("impl From<String> for TargetType"));
    assert!(code.contains("impl<'de> Deserialize<'de> for TargetType"));
}

#[test]
fn test_duplicates_render_per_match() {
    let text = r#"type_as_string == "page" type_as_string == "iframe" type_as_string == "page""#;
    let code = render_source(text).unwrap();
    assert_eq!(code.matches("pub const Page:").count(), 2);
    assert_eq!(code.matches("\"page\" => TargetType::Page,").count(), 2);
    assert_eq!(code.matches("pub const Iframe:").count(), 1);
}

#[test]
fn test_naming_failure_propagates() {
    let text = r#"type_as_string == "self""#;
    let err = render_source(text).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Naming(NamingError::InvalidIdentifier { .. })
    ));
}

#[test]
fn test_checked_in_module_is_current() {
    let checked_in = include_str!("../../target-type/src/target_type.rs");
    let known = crate::to_identifiers(
        [
            "app",
            "background_page",
            "browser",
            "external",
            "iframe",
            "other",
            "page",
            "service_worker",
            "shared_worker",
            "webview",
            "worker",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    )
    .unwrap();

    assert_eq!(crate::render_artifact(&known).unwrap(), checked_in);
}
