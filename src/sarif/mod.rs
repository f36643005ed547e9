pub mod v2;
pub mod v21;

use crate::error::{ConverterError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SarifVersion {
    V2_0_0,
    #[default]
    V2_1_2,
}

impl SarifVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V2_0_0 => v2::SARIF_VERSION,
            Self::V2_1_2 => v21::SARIF_VERSION,
        }
    }
}

impl fmt::Display for SarifVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SarifVersion {
    type Err = ConverterError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            v2::SARIF_VERSION => Ok(Self::V2_0_0),
            v21::SARIF_VERSION => Ok(Self::V2_1_2),
            other => Err(ConverterError::ConfigParse(format!(
                "unsupported SARIF version: {other}"
            ))),
        }
    }
}

/// A complete log in either supported schema version.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SarifLog {
    V2(v2::Log),
    V21(v21::Log),
}

impl SarifLog {
    pub fn empty(version: SarifVersion) -> Self {
        match version {
            SarifVersion::V2_0_0 => Self::V2(v2::Log {
                version: v2::SARIF_VERSION.to_string(),
                runs: Vec::new(),
            }),
            SarifVersion::V2_1_2 => Self::V21(v21::Log {
                version: v21::SARIF_VERSION.to_string(),
                runs: Vec::new(),
            }),
        }
    }

    pub fn version(&self) -> &str {
        match self {
            Self::V2(log) => &log.version,
            Self::V21(log) => &log.version,
        }
    }

    pub fn run_count(&self) -> usize {
        match self {
            Self::V2(log) => log.runs.len(),
            Self::V21(log) => log.runs.len(),
        }
    }

    /// Appends `other`'s runs; top-level fields of `self` are kept.
    pub fn append(&mut self, other: SarifLog) -> Result<()> {
        match (self, other) {
            (Self::V2(base), Self::V2(other)) => base.runs.extend(other.runs),
            (Self::V21(base), Self::V21(other)) => base.runs.extend(other.runs),
            (base, other) => {
                return Err(ConverterError::VersionMismatch {
                    expected: base.version().to_string(),
                    found: other.version().to_string(),
                })
            }
        }
        Ok(())
    }
}

impl From<v2::Log> for SarifLog {
    fn from(log: v2::Log) -> Self {
        Self::V2(log)
    }
}

impl From<v21::Log> for SarifLog {
    fn from(log: v21::Log) -> Self {
        Self::V21(log)
    }
}

/// Concatenates the runs of every log into the first one.
pub fn combine(logs: Vec<SarifLog>) -> Result<Option<SarifLog>> {
    let mut logs = logs.into_iter();
    let Some(mut combined) = logs.next() else {
        return Ok(None);
    };
    for log in logs {
        combined.append(log)?;
    }
    Ok(Some(combined))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_v21(version: &str) -> SarifLog {
        SarifLog::V21(v21::Log {
            version: version.to_string(),
            runs: Vec::new(),
        })
    }

    #[test]
    fn empty_log_has_version_and_no_runs() {
        let log = SarifLog::empty(SarifVersion::V2_0_0);
        assert_eq!(log.version(), "2.0.0");
        assert_eq!(log.run_count(), 0);
        let json = serde_json::to_string(&log).expect("log should serialize");
        assert_eq!(json, r#"{"version":"2.0.0","runs":[]}"#);
    }

    #[test]
    fn sarif_version_parses_supported_strings() {
        assert_eq!(
            "2.0.0".parse::<SarifVersion>().expect("2.0.0 should parse"),
            SarifVersion::V2_0_0
        );
        assert_eq!(
            "2.1.2".parse::<SarifVersion>().expect("2.1.2 should parse"),
            SarifVersion::V2_1_2
        );
        assert!("1.0.0".parse::<SarifVersion>().is_err());
    }

    #[test]
    fn combine_keeps_first_version_and_handles_empty_input() {
        assert!(combine(Vec::new()).expect("empty combine").is_none());

        let combined = combine(vec![empty_v21("2.1.2"), empty_v21("other")])
            .expect("same-schema logs should combine")
            .expect("combined log should exist");
        assert_eq!(combined.version(), "2.1.2");
    }

    #[test]
    fn combine_rejects_mixed_schema_versions() {
        let v2_log = SarifLog::V2(v2::Log {
            version: v2::SARIF_VERSION.to_string(),
            runs: Vec::new(),
        });
        let err = combine(vec![v2_log, empty_v21("2.1.2")]).expect_err("mixed logs should fail");
        assert!(matches!(err, ConverterError::VersionMismatch { .. }));
    }
}
