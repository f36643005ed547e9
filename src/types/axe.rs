use serde::Deserialize;

/// One sub-check outcome attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckResult {
    pub id: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl CheckResult {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckBuckets {
    #[serde(default)]
    pub all: Vec<CheckResult>,
    #[serde(default)]
    pub any: Vec<CheckResult>,
    #[serde(default)]
    pub none: Vec<CheckResult>,
}

// ---- decorated (v2 reporter) shape ----

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedResults {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub violations: Vec<DecoratedRuleResult>,
    #[serde(default)]
    pub passes: Vec<DecoratedRuleResult>,
    #[serde(default)]
    pub incomplete: Vec<DecoratedRuleResult>,
    #[serde(default)]
    pub inapplicable: Vec<DecoratedRuleResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedRuleResult {
    pub id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub help_url: String,
    #[serde(default)]
    pub nodes: Vec<DecoratedNodeResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DecoratedNodeResult {
    #[serde(default)]
    pub target: Option<Vec<String>>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(flatten)]
    pub checks: CheckBuckets,
}

/// A decorated input file holds either one results object or a list of them.
#[derive(Debug, Clone)]
pub enum DecoratedInput {
    Many(Vec<DecoratedResults>),
    One(DecoratedResults),
}

impl DecoratedInput {
    /// Picks the shape from the first token so parse errors keep their position.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        if json.trim_start().starts_with('[') {
            serde_json::from_str(json).map(Self::Many)
        } else {
            serde_json::from_str(json).map(Self::One)
        }
    }

    pub fn into_vec(self) -> Vec<DecoratedResults> {
        match self {
            Self::Many(results) => results,
            Self::One(results) => vec![results],
        }
    }
}

// ---- raw reporter shape ----

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRuleResult {
    pub id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub help_url: String,
    #[serde(default)]
    pub violations: Option<Vec<RawNodeResult>>,
    #[serde(default)]
    pub passes: Option<Vec<RawNodeResult>>,
    #[serde(default)]
    pub incomplete: Option<Vec<RawNodeResult>>,
    #[serde(default)]
    pub inapplicable: Option<Vec<RawNodeResult>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RawOutcome {
    Passed,
    Failed,
    Inapplicable,
    #[serde(alias = "incomplete")]
    CantTell,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNodeTarget {
    #[serde(default)]
    pub selector: Option<Vec<String>>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNodeResult {
    #[serde(default)]
    pub result: Option<RawOutcome>,
    #[serde(default)]
    pub node: Option<RawNodeTarget>,
    #[serde(default)]
    pub selector: Option<Vec<String>>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(flatten)]
    pub checks: CheckBuckets,
}

impl RawNodeResult {
    /// Prefers the nested `node` record axe-core emits, then the flat keys.
    pub fn selector(&self) -> Option<&[String]> {
        self.node
            .as_ref()
            .and_then(|node| node.selector.as_deref())
            .or(self.selector.as_deref())
    }

    pub fn source(&self) -> Option<&str> {
        self.node
            .as_ref()
            .and_then(|node| node.source.as_deref())
            .or(self.source.as_deref())
    }
}
