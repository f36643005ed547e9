use crate::types::axe::DecoratedResults;
use serde::Deserialize;

/// Page metadata captured once per scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentData {
    #[serde(default)]
    pub target_page_url: String,
    #[serde(default)]
    pub target_page_title: String,
    #[serde(default)]
    pub timestamp: String,
}

impl EnvironmentData {
    pub fn new(
        target_page_url: impl Into<String>,
        target_page_title: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            target_page_url: target_page_url.into(),
            target_page_title: target_page_title.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Decorated results embed url and timestamp but carry no page title.
    pub fn from_decorated(results: &DecoratedResults) -> Self {
        Self {
            target_page_url: results.url.clone(),
            target_page_title: String::new(),
            timestamp: results.timestamp.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverterOptions {
    pub scan_name: Option<String>,
    pub scan_id: Option<String>,
    pub test_case_id: Option<String>,
}
