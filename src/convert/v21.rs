use super::input::{self, Finding, NodeFinding, NormalizedScan, Outcome};
use super::policy::{InputShape, Variant, VariantPolicy};
use super::{fingerprints, result_properties, run_properties, ScanInput};
use crate::error::{ConverterError, Result};
use crate::message::format_message;
use crate::providers::{artifact, invocation, tool};
use crate::rules::{convert_rules, RuleDescriptor, RuleSet};
use crate::sarif::v21::{self as sarif, SarifResult};
use crate::sarif::SarifVersion;
use crate::taxonomy;
use crate::types::axe::{DecoratedResults, RawRuleResult};
use crate::types::environment::{ConverterOptions, EnvironmentData};
use tracing::debug;

const SUPERSET_RELATIONSHIP: &str = "superset";
const ELEMENT_LOCATION_KIND: &str = "element";
/// The scanned page is always the run's only artifact.
const PAGE_ARTIFACT_INDEX: usize = 0;

#[derive(Clone, Copy)]
pub struct Providers {
    pub axe_tool: fn() -> sarif::Tool,
    pub converter: fn() -> sarif::Conversion,
    pub invocations: fn(&EnvironmentData) -> Vec<sarif::Invocation>,
    pub artifacts: fn(&EnvironmentData) -> Vec<sarif::Artifact>,
    pub taxonomy: fn() -> sarif::ToolComponent,
}

impl Default for Providers {
    fn default() -> Self {
        Self {
            axe_tool: tool::axe_tool_v21,
            converter: tool::converter_v21,
            invocations: invocation::invocations_v21,
            artifacts: artifact::artifacts_v21,
            taxonomy: taxonomy::wcag_taxonomy,
        }
    }
}

#[derive(Clone, Copy, Default)]
pub struct Sarif21Converter {
    providers: Providers,
}

impl Sarif21Converter {
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
        let policy = Variant::new(SarifVersion::V2_1_2, InputShape::Decorated).policy();
        let scan = input::normalize_decorated(results, &policy)?;
        let environment = EnvironmentData::from_decorated(results);
        let run = self.convert_run(&scan, &policy, options, &environment)?;
        Ok(wrap(run))
    }

    pub fn convert_raw(
        &self,
        results: &[RawRuleResult],
        options: &ConverterOptions,
        environment: &EnvironmentData,
    ) -> Result<sarif::Log> {
        let policy = Variant::new(SarifVersion::V2_1_2, InputShape::Raw).policy();
        let scan = input::normalize_raw(results, &policy)?;
        let run = self.convert_run(&scan, &policy, options, environment)?;
        Ok(wrap(run))
    }

    fn convert_run(
        &self,
        scan: &NormalizedScan,
        policy: &VariantPolicy,
        options: &ConverterOptions,
        environment: &EnvironmentData,
    ) -> Result<sarif::Run> {
        let rule_set = convert_rules(&scan.rules, policy.description_style);
        let builder = ResultBuilder {
            rule_set: &rule_set,
            policy,
            environment,
            properties: result_properties(options),
        };
        let results = scan
            .findings
            .iter()
            .map(|finding| builder.build(finding))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            rules = rule_set.len(),
            results = results.len(),
            "built SARIF 2.1.2 run"
        );

        let mut tool = (self.providers.axe_tool)();
        tool.driver.rules = Some(rule_set.rules.iter().map(reporting_descriptor).collect());

        Ok(sarif::Run {
            tool,
            conversion: (self.providers.converter)(),
            invocations: (self.providers.invocations)(environment),
            artifacts: (self.providers.artifacts)(environment),
            results,
            taxonomies: vec![(self.providers.taxonomy)()],
            properties: run_properties(options),
        })
    }
}

fn wrap(run: sarif::Run) -> sarif::Log {
    sarif::Log {
        version: sarif::SARIF_VERSION.to_string(),
        runs: vec![run],
    }
}

fn reporting_descriptor(rule: &RuleDescriptor) -> sarif::ReportingDescriptor {
    let relationships = rule
        .relationships
        .iter()
        .map(|link| sarif::Relationship {
            target: sarif::ReportingDescriptorReference {
                id: link.tag.clone(),
                index: link.index,
                tool_component: taxonomy::wcag_taxonomy_reference(),
            },
            kinds: vec![SUPERSET_RELATIONSHIP.to_string()],
        })
        .collect();

    sarif::ReportingDescriptor {
        id: rule.id.clone(),
        name: Some(rule.name.clone()),
        full_description: Some(sarif::MultiformatMessageString::plain(
            rule.full_description.clone(),
        )),
        help_uri: Some(rule.help_uri.clone()),
        relationships,
        ..sarif::ReportingDescriptor::default()
    }
}

fn kind(outcome: Outcome) -> sarif::Kind {
    match outcome {
        Outcome::Fail => sarif::Kind::Fail,
        Outcome::Pass => sarif::Kind::Pass,
        Outcome::Open => sarif::Kind::Open,
        Outcome::NotApplicable => sarif::Kind::NotApplicable,
    }
}

fn level(outcome: Outcome) -> sarif::Level {
    match outcome {
        Outcome::Fail => sarif::Level::Error,
        Outcome::Pass | Outcome::Open | Outcome::NotApplicable => sarif::Level::None,
    }
}

struct ResultBuilder<'a> {
    rule_set: &'a RuleSet,
    policy: &'a VariantPolicy,
    environment: &'a EnvironmentData,
    properties: sarif::PropertyBag,
}

impl ResultBuilder<'_> {
    fn build(&self, finding: &Finding) -> Result<SarifResult> {
        let rule_id = finding.rule_id();
        let rule_index = self
            .rule_set
            .index_of(rule_id)
            .ok_or_else(|| ConverterError::UnindexedRule(rule_id.to_string()))?;

        Ok(match finding {
            Finding::Node(node) => self.node_result(node, rule_index),
            Finding::RuleLevel { rule_id } => SarifResult {
                rule_id: rule_id.clone(),
                rule_index,
                kind: sarif::Kind::NotApplicable,
                level: self.level(Outcome::NotApplicable),
                message: None,
                locations: None,
                properties: Some(self.properties.clone()),
                partial_fingerprints: fingerprints(rule_id, None),
            },
        })
    }

    fn level(&self, outcome: Outcome) -> Option<sarif::Level> {
        self.policy.emit_result_level.then(|| level(outcome))
    }

    fn node_result(&self, node: &NodeFinding, rule_index: usize) -> SarifResult {
        let message = format_message(&node.checks, node.outcome.message_kind());
        let artifact_location = self
            .policy
            .emit_artifact_location
            .then(|| sarif::ArtifactLocation {
                uri: self.environment.target_page_url.clone(),
                index: Some(PAGE_ARTIFACT_INDEX),
            });
        let region = node.snippet.as_ref().map(|snippet| sarif::Region {
            snippet: sarif::ArtifactContent {
                text: snippet.clone(),
            },
        });
        let physical_location = (artifact_location.is_some() || region.is_some()).then(|| {
            sarif::PhysicalLocation {
                artifact_location,
                region,
            }
        });

        let logical_locations = if self.policy.emit_logical_location {
            vec![sarif::LogicalLocation {
                fully_qualified_name: node.selector.clone(),
                kind: ELEMENT_LOCATION_KIND.to_string(),
            }]
        } else {
            Vec::new()
        };
        let location = (physical_location.is_some() || !logical_locations.is_empty()).then(|| {
            sarif::Location {
                physical_location,
                logical_locations,
            }
        });

        SarifResult {
            rule_id: node.rule_id.clone(),
            rule_index,
            kind: kind(node.outcome),
            level: self.level(node.outcome),
            message: Some(sarif::Message {
                text: message.text,
                markdown: Some(message.rich_text),
            }),
            locations: location.map(|location| vec![location]),
            properties: Some(self.properties.clone()),
            partial_fingerprints: fingerprints(&node.rule_id, Some(&node.selector)),
        }
    }
}
