use super::input::{self, Finding, NodeFinding, NormalizedScan, Outcome};
use super::policy::{InputShape, Variant, VariantPolicy};
use super::{fingerprints, result_properties, run_properties, ScanInput};
use crate::error::Result;
use crate::message::format_message;
use crate::providers::{artifact, invocation, tool};
use crate::rules::{convert_rules, RuleSet};
use crate::sarif::v2::{self as sarif, SarifResult};
use crate::sarif::SarifVersion;
use crate::types::axe::{DecoratedResults, RawRuleResult};
use crate::types::environment::{ConverterOptions, EnvironmentData};
use std::collections::BTreeMap;
use tracing::debug;

/// Each provider is called once per conversion and its value used as-is.
#[derive(Clone, Copy)]
pub struct Providers {
    pub axe_tool: fn() -> sarif::Tool,
    pub converter: fn() -> sarif::Conversion,
    pub invocations: fn(&EnvironmentData) -> Vec<sarif::Invocation>,
    pub files: fn(&EnvironmentData) -> BTreeMap<String, sarif::FileData>,
}

impl Default for Providers {
    fn default() -> Self {
        Self {
            axe_tool: tool::axe_tool_v2,
            converter: tool::converter_v2,
            invocations: invocation::invocations_v2,
            files: artifact::files_v2,
        }
    }
}

#[derive(Clone, Copy, Default)]
pub struct Sarif20Converter {
    providers: Providers,
}

impl Sarif20Converter {
    pub fn with_providers(providers: Providers) -> Self {
        Self { providers }
    }

    pub fn convert(&self, input: ScanInput<'_>, options: &ConverterOptions) -> Result<sarif::Log> {
        match input {
            ScanInput::Decorated(results) => self.convert_decorated(results, options),
            ScanInput::Raw {
                results,
                environment,
            } => self.convert_raw(results, options, environment),
        }
    }

    pub fn convert_decorated(
        &self,
        results: &DecoratedResults,
        options: &ConverterOptions,
    ) -> Result<sarif::Log> {
        let policy = Variant::new(SarifVersion::V2_0_0, InputShape::Decorated).policy();
        let scan = input::normalize_decorated(results, &policy)?;
        let environment = EnvironmentData::from_decorated(results);
        Ok(self.wrap(self.convert_run(&scan, &policy, options, &environment)))
    }

    pub fn convert_raw(
        &self,
        results: &[RawRuleResult],
        options: &ConverterOptions,
        environment: &EnvironmentData,
    ) -> Result<sarif::Log> {
        let policy = Variant::new(SarifVersion::V2_0_0, InputShape::Raw).policy();
        let scan = input::normalize_raw(results, &policy)?;
        Ok(self.wrap(self.convert_run(&scan, &policy, options, environment)))
    }

    fn wrap(&self, run: sarif::Run) -> sarif::Log {
        sarif::Log {
            version: sarif::SARIF_VERSION.to_string(),
            runs: vec![run],
        }
    }

    fn convert_run(
        &self,
        scan: &NormalizedScan,
        policy: &VariantPolicy,
        options: &ConverterOptions,
        environment: &EnvironmentData,
    ) -> sarif::Run {
        let rule_set = convert_rules(&scan.rules, policy.description_style);
        let properties = result_properties(options);
        let results = scan
            .findings
            .iter()
            .map(|finding| convert_finding(finding, policy, environment, &properties))
            .collect::<Vec<_>>();

        debug!(
            rules = rule_set.len(),
            results = results.len(),
            "built SARIF 2.0.0 run"
        );

        sarif::Run {
            tool: (self.providers.axe_tool)(),
            conversion: (self.providers.converter)(),
            invocations: (self.providers.invocations)(environment),
            files: (self.providers.files)(environment),
            results,
            resources: resources(&rule_set),
            logical_id: options.scan_id.clone(),
            properties: run_properties(options),
        }
    }
}

fn resources(rule_set: &RuleSet) -> sarif::Resources {
    let rules = rule_set
        .rules
        .iter()
        .map(|rule| {
            (
                rule.id.clone(),
                sarif::Rule {
                    id: rule.id.clone(),
                    name: sarif::Message::plain(rule.name.clone()),
                    full_description: sarif::Message::plain(rule.full_description.clone()),
                    help_uri: rule.help_uri.clone(),
                },
            )
        })
        .collect();
    sarif::Resources { rules }
}

fn level(outcome: Outcome) -> sarif::Level {
    match outcome {
        Outcome::Fail => sarif::Level::Error,
        Outcome::Pass => sarif::Level::Pass,
        Outcome::Open => sarif::Level::Open,
        Outcome::NotApplicable => sarif::Level::NotApplicable,
    }
}

fn convert_finding(
    finding: &Finding,
    policy: &VariantPolicy,
    environment: &EnvironmentData,
    properties: &BTreeMap<String, serde_json::Value>,
) -> SarifResult {
    match finding {
        Finding::Node(node) => convert_node(node, policy, environment, properties),
        Finding::RuleLevel { rule_id } => SarifResult {
            rule_id: rule_id.clone(),
            level: sarif::Level::NotApplicable,
            message: None,
            locations: None,
            properties: Some(properties.clone()),
            partial_fingerprints: fingerprints(rule_id, None),
        },
    }
}

fn convert_node(
    node: &NodeFinding,
    policy: &VariantPolicy,
    environment: &EnvironmentData,
    properties: &BTreeMap<String, serde_json::Value>,
) -> SarifResult {
    let message = format_message(&node.checks, node.outcome.message_kind());
    let physical_location = policy
        .emit_artifact_location
        .then(|| sarif::PhysicalLocation {
            file_location: sarif::FileLocation {
                uri: environment.target_page_url.clone(),
            },
        });
    let annotations = node
        .snippet
        .iter()
        .map(|snippet| sarif::Annotation {
            snippet: sarif::Snippet {
                text: snippet.clone(),
            },
        })
        .collect();

    SarifResult {
        rule_id: node.rule_id.clone(),
        level: level(node.outcome),
        message: Some(sarif::Message {
            text: message.text,
            rich_text: Some(message.rich_text),
        }),
        locations: Some(vec![sarif::Location {
            physical_location,
            fully_qualified_logical_name: policy
                .emit_logical_location
                .then(|| node.selector.clone()),
            annotations,
        }]),
        properties: Some(properties.clone()),
        partial_fingerprints: fingerprints(&node.rule_id, Some(&node.selector)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConverterError;
    use crate::types::axe::{
        CheckBuckets, CheckResult, DecoratedNodeResult, DecoratedRuleResult, RawNodeResult,
        RawNodeTarget, RawOutcome,
    };

    fn document_title_results() -> DecoratedResults {
        DecoratedResults {
            url: "https://example.com/".to_string(),
            timestamp: "2019-03-22T19:12:18.791Z".to_string(),
            violations: vec![DecoratedRuleResult {
                id: "document-title".to_string(),
                tags: vec!["cat.text-alternatives".to_string(), "wcag242".to_string()],
                help: "Documents must have <title> element to aid in navigation".to_string(),
                description: "Ensures each HTML document contains a non-empty <title> element"
                    .to_string(),
                help_url: "https://dequeuniversity.com/rules/axe/3.2/document-title".to_string(),
                nodes: vec![DecoratedNodeResult {
                    target: Some(vec!["html".to_string()]),
                    html: Some("<html>".to_string()),
                    checks: CheckBuckets {
                        any: vec![CheckResult::new(
                            "doc-has-title",
                            "Document does not have a non-empty <title> element",
                        )],
                        ..CheckBuckets::default()
                    },
                }],
            }],
            ..DecoratedResults::default()
        }
    }

    #[test]
    fn decorated_violation_becomes_error_result_with_location() {
        let log = Sarif20Converter::default()
            .convert_decorated(&document_title_results(), &ConverterOptions::default())
            .expect("conversion should succeed");

        assert_eq!(log.version, "2.0.0");
        let run = &log.runs[0];
        assert_eq!(run.results.len(), 1);
        let result = &run.results[0];
        assert_eq!(result.rule_id, "document-title");
        assert_eq!(result.level, sarif::Level::Error);
        assert_eq!(result.partial_fingerprints["fullyQualifiedLogicalName"], "html");
        assert_eq!(result.partial_fingerprints["ruleId"], "document-title");

        let location = &result.locations.as_ref().expect("locations present")[0];
        assert_eq!(location.fully_qualified_logical_name.as_deref(), Some("html"));
        assert_eq!(location.annotations[0].snippet.text, "<html>");
        assert_eq!(
            location
                .physical_location
                .as_ref()
                .map(|physical| physical.file_location.uri.as_str()),
            Some("https://example.com/")
        );

        let message = result.message.as_ref().expect("message present");
        assert_eq!(
            message.text,
            "Fix any of the following: Document does not have a non-empty <title> element."
        );
        assert_eq!(
            message.rich_text.as_deref(),
            Some("Fix any of the following:\n- Document does not have a non-empty &lt;title> element.")
        );
    }

    #[test]
    fn decorated_rules_keep_description_verbatim() {
        let log = Sarif20Converter::default()
            .convert_decorated(&document_title_results(), &ConverterOptions::default())
            .expect("conversion should succeed");
        let rule = &log.runs[0].resources.rules["document-title"];
        assert_eq!(
            rule.full_description.text,
            "Ensures each HTML document contains a non-empty <title> element"
        );
        assert_eq!(
            rule.name.text,
            "Documents must have <title> element to aid in navigation"
        );
    }

    #[test]
    fn options_land_in_result_and_run_fields() {
        let options = ConverterOptions {
            scan_name: Some("nightly-1".to_string()),
            scan_id: Some("scan-42".to_string()),
            test_case_id: Some("case-7".to_string()),
        };
        let log = Sarif20Converter::default()
            .convert_decorated(&document_title_results(), &options)
            .expect("conversion should succeed");
        let run = &log.runs[0];

        assert_eq!(run.logical_id.as_deref(), Some("scan-42"));
        let run_properties = run.properties.as_ref().expect("run properties present");
        assert_eq!(run_properties["testCaseId"], "case-7");
        for result in &run.results {
            let properties = result.properties.as_ref().expect("result properties present");
            assert_eq!(properties["scanName"], "nightly-1");
            assert_eq!(properties["tags"], serde_json::json!(["Accessibility"]));
        }
    }

    #[test]
    fn providers_are_substitutable() {
        fn fixed_invocations(_: &EnvironmentData) -> Vec<sarif::Invocation> {
            vec![sarif::Invocation {
                start_time: "start".to_string(),
                end_time: "end".to_string(),
            }]
        }
        let converter = Sarif20Converter::with_providers(Providers {
            invocations: fixed_invocations,
            ..Providers::default()
        });
        let log = converter
            .convert_decorated(&document_title_results(), &ConverterOptions::default())
            .expect("conversion should succeed");
        assert_eq!(log.runs[0].invocations[0].start_time, "start");
        assert_eq!(log.runs[0].invocations[0].end_time, "end");
    }

    #[test]
    fn raw_inapplicable_rule_has_no_locations() {
        let results = vec![RawRuleResult {
            id: "audio-caption".to_string(),
            violations: Some(Vec::new()),
            passes: Some(Vec::new()),
            incomplete: Some(Vec::new()),
            inapplicable: Some(Vec::new()),
            ..RawRuleResult::default()
        }];
        let env = EnvironmentData::new("https://example.com/", "Example", "2019-03-22T19:12:18Z");
        let log = Sarif20Converter::default()
            .convert_raw(&results, &ConverterOptions::default(), &env)
            .expect("conversion should succeed");

        let run = &log.runs[0];
        assert_eq!(run.results.len(), 1);
        let result = &run.results[0];
        assert_eq!(result.level, sarif::Level::NotApplicable);
        assert!(result.locations.is_none());
        assert!(result.message.is_none());
        assert_eq!(result.partial_fingerprints.len(), 1);

        let json = serde_json::to_value(result).expect("result should serialize");
        assert!(json.get("locations").is_none());
        assert_eq!(json["level"], "notApplicable");
    }

    #[test]
    fn raw_node_without_selector_is_rejected() {
        let results = vec![RawRuleResult {
            id: "image-alt".to_string(),
            violations: Some(vec![RawNodeResult {
                result: Some(RawOutcome::Failed),
                node: Some(RawNodeTarget {
                    selector: None,
                    source: Some("<img>".to_string()),
                }),
                ..RawNodeResult::default()
            }]),
            ..RawRuleResult::default()
        }];
        let err = Sarif20Converter::default()
            .convert_raw(&results, &ConverterOptions::default(), &EnvironmentData::default())
            .expect_err("missing selector should abort conversion");
        assert!(matches!(err, ConverterError::MissingSelector { .. }));
    }

    #[test]
    fn repeated_conversions_are_identical() {
        let converter = Sarif20Converter::default();
        let options = ConverterOptions::default();
        let first = serde_json::to_string(
            &converter
                .convert_decorated(&document_title_results(), &options)
                .expect("first conversion"),
        )
        .expect("first should serialize");
        let second = serde_json::to_string(
            &converter
                .convert_decorated(&document_title_results(), &options)
                .expect("second conversion"),
        )
        .expect("second should serialize");
        assert_eq!(first, second);
    }

    #[test]
    fn repeated_raw_conversions_are_identical() {
        let results = vec![
            RawRuleResult {
                id: "image-alt".to_string(),
                tags: vec!["wcag111".to_string()],
                violations: Some(vec![RawNodeResult {
                    result: Some(RawOutcome::Failed),
                    node: Some(RawNodeTarget {
                        selector: Some(vec!["img".to_string()]),
                        source: Some("<img>".to_string()),
                    }),
                    ..RawNodeResult::default()
                }]),
                ..RawRuleResult::default()
            },
            RawRuleResult {
                id: "audio-caption".to_string(),
                ..RawRuleResult::default()
            },
        ];
        let env = EnvironmentData::new("https://example.com/", "Example", "2019-03-22T19:12:18Z");
        let converter = Sarif20Converter::default();
        let options = ConverterOptions::default();
        let render = |log: sarif::Log| serde_json::to_string(&log).expect("log should serialize");

        let first = render(
            converter
                .convert_raw(&results, &options, &env)
                .expect("first conversion"),
        );
        converter
            .convert_raw(&results[1..], &options, &env)
            .expect("unrelated conversion");
        let second = render(
            converter
                .convert_raw(&results, &options, &env)
                .expect("second conversion"),
        );
        assert_eq!(first, second);
    }
}
