//! Result conversion pipeline.
//!
//! Both input shapes are first normalized (`input`), then handed to a schema
//! adapter (`v2` for SARIF 2.0.0, `v21` for SARIF 2.1.2). Behavior that differs
//! between the four shape/schema combinations lives in `policy`.

pub mod input;
pub mod policy;
pub mod v2;
pub mod v21;

use crate::error::Result;
use crate::sarif::{SarifLog, SarifVersion};
use crate::types::axe::{DecoratedResults, RawRuleResult};
use crate::types::environment::{ConverterOptions, EnvironmentData};
use std::collections::BTreeMap;

pub use policy::{InputShape, Variant, VariantPolicy};

pub const ACCESSIBILITY_TAG: &str = "Accessibility";
pub const RULE_ID_FINGERPRINT: &str = "ruleId";
pub const LOGICAL_NAME_FINGERPRINT: &str = "fullyQualifiedLogicalName";

type PropertyBag = BTreeMap<String, serde_json::Value>;

/// Shared by every result of a run.
pub(crate) fn result_properties(options: &ConverterOptions) -> PropertyBag {
    let mut properties = PropertyBag::new();
    if let Some(scan_name) = &options.scan_name {
        properties.insert("scanName".to_string(), scan_name.clone().into());
    }
    properties.insert(
        "tags".to_string(),
        serde_json::Value::from(vec![ACCESSIBILITY_TAG]),
    );
    properties
}

pub(crate) fn run_properties(options: &ConverterOptions) -> Option<PropertyBag> {
    options.test_case_id.as_ref().map(|test_case_id| {
        PropertyBag::from([("testCaseId".to_string(), test_case_id.clone().into())])
    })
}

pub(crate) fn fingerprints(rule_id: &str, selector: Option<&str>) -> BTreeMap<String, String> {
    let mut fingerprints =
        BTreeMap::from([(RULE_ID_FINGERPRINT.to_string(), rule_id.to_string())]);
    if let Some(selector) = selector {
        fingerprints.insert(LOGICAL_NAME_FINGERPRINT.to_string(), selector.to_string());
    }
    fingerprints
}

/// One scan's results in either input shape.
#[derive(Debug, Clone, Copy)]
pub enum ScanInput<'a> {
    Decorated(&'a DecoratedResults),
    Raw {
        results: &'a [RawRuleResult],
        environment: &'a EnvironmentData,
    },
}

impl ScanInput<'_> {
    pub fn shape(&self) -> InputShape {
        match self {
            Self::Decorated(_) => InputShape::Decorated,
            Self::Raw { .. } => InputShape::Raw,
        }
    }
}

/// Converts with the default providers for `version`.
pub fn convert(
    input: ScanInput<'_>,
    version: SarifVersion,
    options: &ConverterOptions,
) -> Result<SarifLog> {
    match version {
        SarifVersion::V2_0_0 => v2::Sarif20Converter::default()
            .convert(input, options)
            .map(SarifLog::from),
        SarifVersion::V2_1_2 => v21::Sarif21Converter::default()
            .convert(input, options)
            .map(SarifLog::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_properties_merge_scan_name_with_fixed_tags() {
        let options = ConverterOptions {
            scan_name: Some("nightly-1".to_string()),
            ..ConverterOptions::default()
        };
        let properties = result_properties(&options);
        assert_eq!(properties["scanName"], "nightly-1");
        assert_eq!(properties["tags"], serde_json::json!(["Accessibility"]));

        let bare = result_properties(&ConverterOptions::default());
        assert!(!bare.contains_key("scanName"));
    }

    #[test]
    fn run_properties_only_exist_with_test_case_id() {
        assert!(run_properties(&ConverterOptions::default()).is_none());
        let options = ConverterOptions {
            test_case_id: Some("case-7".to_string()),
            ..ConverterOptions::default()
        };
        let properties = run_properties(&options).expect("properties should be set");
        assert_eq!(properties["testCaseId"], "case-7");
    }

    #[test]
    fn fingerprints_pair_rule_and_selector() {
        let node = fingerprints("document-title", Some("html"));
        assert_eq!(node.len(), 2);
        assert_eq!(node["fullyQualifiedLogicalName"], "html");
        let rule_level = fingerprints("audio-caption", None);
        assert_eq!(rule_level.len(), 1);
        assert_eq!(rule_level["ruleId"], "audio-caption");
    }
}
