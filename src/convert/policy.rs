//! Per-variant behavior differences, kept as named flags.

use crate::error::{ConverterError, Result};
use crate::rules::DescriptionStyle;
use crate::sarif::SarifVersion;
use std::fmt;
use std::str::FromStr;

pub const SELECTOR_PLACEHOLDER: &str = "(selector unavailable)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputShape {
    #[default]
    Decorated,
    Raw,
}

impl InputShape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decorated => "decorated",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for InputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputShape {
    type Err = ConverterError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "decorated" => Ok(Self::Decorated),
            "raw" => Ok(Self::Raw),
            other => Err(ConverterError::ConfigParse(format!(
                "unsupported input shape: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSelector {
    Reject,
    Placeholder(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingOutcome {
    Reject,
    /// Use the outcome implied by the bucket the node was found in.
    FromBucket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantPolicy {
    pub missing_selector: MissingSelector,
    pub missing_outcome: MissingOutcome,
    pub description_style: DescriptionStyle,
    /// 2.1.2 only; 2.0.0 results always carry a level.
    pub emit_result_level: bool,
    pub emit_artifact_location: bool,
    /// The selector still lands in `partialFingerprints` when this is off.
    pub emit_logical_location: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub schema: SarifVersion,
    pub shape: InputShape,
}

impl Variant {
    pub const fn new(schema: SarifVersion, shape: InputShape) -> Self {
        Self { schema, shape }
    }

    pub const fn policy(self) -> VariantPolicy {
        match (self.schema, self.shape) {
            (SarifVersion::V2_0_0, InputShape::Decorated) => VariantPolicy {
                missing_selector: MissingSelector::Placeholder(SELECTOR_PLACEHOLDER),
                missing_outcome: MissingOutcome::FromBucket,
                description_style: DescriptionStyle::Verbatim,
                emit_result_level: true,
                emit_artifact_location: true,
                emit_logical_location: true,
            },
            (SarifVersion::V2_0_0, InputShape::Raw) => VariantPolicy {
                missing_selector: MissingSelector::Reject,
                missing_outcome: MissingOutcome::Reject,
                description_style: DescriptionStyle::Verbatim,
                emit_result_level: true,
                emit_artifact_location: true,
                emit_logical_location: true,
            },
            (SarifVersion::V2_1_2, InputShape::Decorated) => VariantPolicy {
                missing_selector: MissingSelector::Placeholder(SELECTOR_PLACEHOLDER),
                missing_outcome: MissingOutcome::FromBucket,
                description_style: DescriptionStyle::TrailingPeriod,
                emit_result_level: true,
                emit_artifact_location: true,
                emit_logical_location: true,
            },
            // Level, artifact location and logical location are left out pending
            // product confirmation.
            (SarifVersion::V2_1_2, InputShape::Raw) => VariantPolicy {
                missing_selector: MissingSelector::Reject,
                missing_outcome: MissingOutcome::FromBucket,
                description_style: DescriptionStyle::TrailingPeriod,
                emit_result_level: false,
                emit_artifact_location: false,
                emit_logical_location: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_20_rejects_malformed_nodes() {
        let policy = Variant::new(SarifVersion::V2_0_0, InputShape::Raw).policy();
        assert_eq!(policy.missing_selector, MissingSelector::Reject);
        assert_eq!(policy.missing_outcome, MissingOutcome::Reject);
        assert_eq!(policy.description_style, DescriptionStyle::Verbatim);
    }

    #[test]
    fn decorated_variants_fall_back_to_placeholder_selector() {
        for schema in [SarifVersion::V2_0_0, SarifVersion::V2_1_2] {
            let policy = Variant::new(schema, InputShape::Decorated).policy();
            assert_eq!(
                policy.missing_selector,
                MissingSelector::Placeholder(SELECTOR_PLACEHOLDER)
            );
        }
    }

    #[test]
    fn raw_21_omits_level_and_locations() {
        let policy = Variant::new(SarifVersion::V2_1_2, InputShape::Raw).policy();
        assert!(!policy.emit_result_level);
        assert!(!policy.emit_artifact_location);
        assert!(!policy.emit_logical_location);
        assert_eq!(policy.missing_outcome, MissingOutcome::FromBucket);
        assert_eq!(policy.description_style, DescriptionStyle::TrailingPeriod);
    }

    #[test]
    fn only_raw_21_drops_logical_location() {
        for (schema, shape) in [
            (SarifVersion::V2_0_0, InputShape::Decorated),
            (SarifVersion::V2_0_0, InputShape::Raw),
            (SarifVersion::V2_1_2, InputShape::Decorated),
        ] {
            assert!(Variant::new(schema, shape).policy().emit_logical_location);
        }
    }

    #[test]
    fn input_shape_round_trips_through_str() {
        for shape in [InputShape::Decorated, InputShape::Raw] {
            assert_eq!(
                shape.as_str().parse::<InputShape>().expect("shape should parse"),
                shape
            );
        }
        assert!("csv".parse::<InputShape>().is_err());
    }
}
