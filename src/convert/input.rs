use crate::convert::policy::{MissingOutcome, MissingSelector, VariantPolicy};
use crate::error::{ConverterError, Result};
use crate::message::MessageKind;
use crate::rules::RuleRecord;
use crate::types::axe::{
    CheckBuckets, DecoratedResults, DecoratedRuleResult, RawNodeResult, RawOutcome, RawRuleResult,
};
use crate::util::is_empty_array;

const SELECTOR_SEPARATOR: &str = ";";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Fail,
    Pass,
    Open,
    NotApplicable,
}

impl Outcome {
    pub fn message_kind(self) -> MessageKind {
        match self {
            Self::Fail => MessageKind::Fail,
            Self::Pass | Self::Open | Self::NotApplicable => MessageKind::Other,
        }
    }
}

impl From<RawOutcome> for Outcome {
    fn from(outcome: RawOutcome) -> Self {
        match outcome {
            RawOutcome::Failed => Self::Fail,
            RawOutcome::Passed => Self::Pass,
            RawOutcome::CantTell => Self::Open,
            RawOutcome::Inapplicable => Self::NotApplicable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeFinding {
    pub rule_id: String,
    pub outcome: Outcome,
    /// Target fragments joined with `;`.
    pub selector: String,
    pub snippet: Option<String>,
    pub checks: CheckBuckets,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    Node(NodeFinding),
    /// A rule that matched no node in any bucket.
    RuleLevel { rule_id: String },
}

impl Finding {
    pub fn rule_id(&self) -> &str {
        match self {
            Self::Node(node) => &node.rule_id,
            Self::RuleLevel { rule_id } => rule_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedScan {
    /// In encounter order; may repeat ids.
    pub rules: Vec<RuleRecord>,
    pub findings: Vec<Finding>,
}

pub fn normalize_decorated(
    results: &DecoratedResults,
    policy: &VariantPolicy,
) -> Result<NormalizedScan> {
    let mut scan = NormalizedScan::default();
    let buckets = [
        (&results.violations, Outcome::Fail),
        (&results.passes, Outcome::Pass),
        (&results.incomplete, Outcome::Open),
        (&results.inapplicable, Outcome::NotApplicable),
    ];

    for (rules, outcome) in buckets {
        for rule in rules {
            scan.rules.push(decorated_rule_record(rule));
            if outcome == Outcome::NotApplicable && rule.nodes.is_empty() {
                scan.findings.push(Finding::RuleLevel {
                    rule_id: rule.id.clone(),
                });
                continue;
            }
            for node in &rule.nodes {
                let selector = join_selector(node.target.as_deref(), &rule.id, policy)?;
                scan.findings.push(Finding::Node(NodeFinding {
                    rule_id: rule.id.clone(),
                    outcome,
                    selector,
                    snippet: node.html.clone(),
                    checks: node.checks.clone(),
                }));
            }
        }
    }

    Ok(scan)
}

pub fn normalize_raw(results: &[RawRuleResult], policy: &VariantPolicy) -> Result<NormalizedScan> {
    let mut scan = NormalizedScan::default();

    for rule in results {
        scan.rules.push(raw_rule_record(rule));
        let buckets = [
            (rule.violations.as_deref(), Outcome::Fail),
            (rule.passes.as_deref(), Outcome::Pass),
            (rule.incomplete.as_deref(), Outcome::Open),
            (rule.inapplicable.as_deref(), Outcome::NotApplicable),
        ];

        if buckets.iter().all(|(nodes, _)| is_empty_array(*nodes)) {
            scan.findings.push(Finding::RuleLevel {
                rule_id: rule.id.clone(),
            });
            continue;
        }

        for (nodes, bucket_outcome) in buckets {
            for node in nodes.unwrap_or_default() {
                scan.findings.push(Finding::Node(raw_node_finding(
                    node,
                    &rule.id,
                    bucket_outcome,
                    policy,
                )?));
            }
        }
    }

    Ok(scan)
}

fn raw_node_finding(
    node: &RawNodeResult,
    rule_id: &str,
    bucket_outcome: Outcome,
    policy: &VariantPolicy,
) -> Result<NodeFinding> {
    let outcome = match (node.result, policy.missing_outcome) {
        (Some(result), _) => Outcome::from(result),
        (None, MissingOutcome::FromBucket) => bucket_outcome,
        (None, MissingOutcome::Reject) => {
            return Err(ConverterError::MissingOutcome {
                rule_id: rule_id.to_string(),
            })
        }
    };

    Ok(NodeFinding {
        rule_id: rule_id.to_string(),
        outcome,
        selector: join_selector(node.selector(), rule_id, policy)?,
        snippet: node.source().map(str::to_string),
        checks: node.checks.clone(),
    })
}

fn join_selector(
    target: Option<&[String]>,
    rule_id: &str,
    policy: &VariantPolicy,
) -> Result<String> {
    match (target, policy.missing_selector) {
        (Some(fragments), _) if !fragments.is_empty() => Ok(fragments.join(SELECTOR_SEPARATOR)),
        (_, MissingSelector::Placeholder(placeholder)) => Ok(placeholder.to_string()),
        (_, MissingSelector::Reject) => Err(ConverterError::MissingSelector {
            rule_id: rule_id.to_string(),
        }),
    }
}

fn decorated_rule_record(rule: &DecoratedRuleResult) -> RuleRecord {
    RuleRecord {
        id: rule.id.clone(),
        tags: rule.tags.clone(),
        help: rule.help.clone(),
        description: rule.description.clone(),
        help_url: rule.help_url.clone(),
    }
}

fn raw_rule_record(rule: &RawRuleResult) -> RuleRecord {
    RuleRecord {
        id: rule.id.clone(),
        tags: rule.tags.clone(),
        help: rule.help.clone(),
        description: rule.description.clone(),
        help_url: rule.help_url.clone(),
    }
}
