// Code generated by targetgen. DO NOT EDIT.

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
    pub const App: TargetType = TargetType(Cow::Borrowed("app"));
    pub const BackgroundPage: TargetType = TargetType(Cow::Borrowed("background_page"));
    pub const Browser: TargetType = TargetType(Cow::Borrowed("browser"));
    pub const External: TargetType = TargetType(Cow::Borrowed("external"));
    pub const Iframe: TargetType = TargetType(Cow::Borrowed("iframe"));
    pub const Other: TargetType = TargetType(Cow::Borrowed("other"));
    pub const Page: TargetType = TargetType(Cow::Borrowed("page"));
    pub const ServiceWorker: TargetType = TargetType(Cow::Borrowed("service_worker"));
    pub const SharedWorker: TargetType = TargetType(Cow::Borrowed("shared_worker"));
    pub const Webview: TargetType = TargetType(Cow::Borrowed("webview"));
    pub const Worker: TargetType = TargetType(Cow::Borrowed("worker"));
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
            "app" => TargetType::App,
            "background_page" => TargetType::BackgroundPage,
            "browser" => TargetType::Browser,
            "external" => TargetType::External,
            "iframe" => TargetType::Iframe,
            "other" => TargetType::Other,
            "page" => TargetType::Page,
            "service_worker" => TargetType::ServiceWorker,
            "shared_worker" => TargetType::SharedWorker,
            "webview" => TargetType::Webview,
            "worker" => TargetType::Worker,
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
