use crate::sarif::{v2, v21};
use crate::taxonomy;
use std::collections::BTreeMap;

pub const AXE_NAME: &str = "axe-core";
pub const AXE_SHORT_NAME: &str = "axe";
pub const AXE_VERSION: &str = "3.2.2";
pub const AXE_DESCRIPTION: &str =
    "An open source accessibility rules library for automated testing.";
pub const AXE_INFORMATION_URI: &str = "https://www.deque.com/axe/axe-for-web/";
pub const AXE_DOWNLOAD_URI: &str = "https://www.npmjs.com/package/axe-core/v/3.2.2";

pub const CONVERTER_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONVERTER_VERSION: &str = env!("CARGO_PKG_VERSION");

const QUALITY_DOMAIN_KEY: &str = "microsoft/qualityDomain";
const QUALITY_DOMAIN: &str = "Accessibility";

fn quality_domain_properties() -> BTreeMap<String, serde_json::Value> {
    BTreeMap::from([(
        QUALITY_DOMAIN_KEY.to_string(),
        serde_json::Value::from(QUALITY_DOMAIN),
    )])
}

fn converter_full_name() -> String {
    format!("{CONVERTER_NAME} v{CONVERTER_VERSION}")
}

pub fn axe_tool_v2() -> v2::Tool {
    v2::Tool {
        name: AXE_SHORT_NAME.to_string(),
        full_name: AXE_NAME.to_string(),
        short_description: Some(v2::Message::plain(AXE_DESCRIPTION)),
        version: AXE_VERSION.to_string(),
        semantic_version: AXE_VERSION.to_string(),
        download_uri: Some(AXE_DOWNLOAD_URI.to_string()),
        properties: Some(quality_domain_properties()),
    }
}

pub fn converter_v2() -> v2::Conversion {
    v2::Conversion {
        tool: v2::Tool {
            name: CONVERTER_NAME.to_string(),
            full_name: converter_full_name(),
            short_description: None,
            version: CONVERTER_VERSION.to_string(),
            semantic_version: CONVERTER_VERSION.to_string(),
            download_uri: None,
            properties: None,
        },
    }
}

/// The driver carries no rules; the converter attaches them per run.
pub fn axe_tool_v21() -> v21::Tool {
    v21::Tool {
        driver: v21::ToolComponent {
            name: AXE_NAME.to_string(),
            full_name: Some(format!("axe for Web v{AXE_VERSION}")),
            short_description: Some(v21::MultiformatMessageString::plain(AXE_DESCRIPTION)),
            version: Some(AXE_VERSION.to_string()),
            semantic_version: Some(AXE_VERSION.to_string()),
            information_uri: Some(AXE_INFORMATION_URI.to_string()),
            download_uri: Some(AXE_DOWNLOAD_URI.to_string()),
            properties: Some(quality_domain_properties()),
            supported_taxonomies: Some(vec![taxonomy::wcag_taxonomy_reference()]),
            ..v21::ToolComponent::default()
        },
    }
}

pub fn converter_v21() -> v21::Conversion {
    v21::Conversion {
        tool: v21::Tool {
            driver: v21::ToolComponent {
                name: CONVERTER_NAME.to_string(),
                full_name: Some(converter_full_name()),
                version: Some(CONVERTER_VERSION.to_string()),
                semantic_version: Some(CONVERTER_VERSION.to_string()),
                ..v21::ToolComponent::default()
            },
        },
    }
}
