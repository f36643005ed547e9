use crate::error::ConverterError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConverterConfig {
    pub output: Option<OutputConfig>,
    pub scan: Option<ScanConfig>,
    pub page: Option<PageConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub sarif_version: Option<String>,
    #[serde(default)]
    pub pretty: bool,
    pub input_shape: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanConfig {
    pub name: Option<String>,
    pub id: Option<String>,
    pub test_case_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageConfig {
    pub url: Option<String>,
    pub title: Option<String>,
}

const SUPPORTED_SARIF_VERSIONS: [&str; 2] = ["2.0.0", "2.1.2"];
const SUPPORTED_INPUT_SHAPES: [&str; 2] = ["decorated", "raw"];

impl ConverterConfig {
    pub fn sarif_version(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.sarif_version.as_deref())
    }

    pub fn input_shape(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.input_shape.as_deref())
    }

    pub fn pretty(&self) -> bool {
        self.output.as_ref().is_some_and(|output| output.pretty)
    }

    pub fn validate(&self) -> Result<(), ConverterError> {
        if let Some(version) = self.sarif_version() {
            if !SUPPORTED_SARIF_VERSIONS.contains(&version) {
                return Err(ConverterError::ConfigParse(format!(
                    "unsupported output.sarif_version: {version} (expected one of {})",
                    SUPPORTED_SARIF_VERSIONS.join(", ")
                )));
            }
        }

        if let Some(shape) = self.input_shape() {
            if !SUPPORTED_INPUT_SHAPES.contains(&shape) {
                return Err(ConverterError::ConfigParse(format!(
                    "unsupported output.input_shape: {shape} (expected one of {})",
                    SUPPORTED_INPUT_SHAPES.join(", ")
                )));
            }
        }

        if let Some(scan) = &self.scan {
            for (key, value) in [
                ("name", &scan.name),
                ("id", &scan.id),
                ("test_case_id", &scan.test_case_id),
            ] {
                if value.as_deref().is_some_and(|text| text.trim().is_empty()) {
                    return Err(ConverterError::ConfigParse(format!(
                        "scan.{key} must not be blank when set"
                    )));
                }
            }
        }

        Ok(())
    }
}
