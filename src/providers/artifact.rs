use crate::sarif::{v2, v21};
use crate::types::environment::EnvironmentData;
use crate::util::is_not_empty;
use std::collections::BTreeMap;

const HTML_MIME_TYPE: &str = "text/html";
const TARGET_TAG: &str = "target";
const SOURCE_LANGUAGE: &str = "html";
const ANALYSIS_TARGET_ROLE: &str = "analysisTarget";

fn page_title(environment: &EnvironmentData) -> Option<String> {
    is_not_empty(Some(environment.target_page_title.as_str()))
        .then(|| environment.target_page_title.clone())
}

pub fn files_v2(environment: &EnvironmentData) -> BTreeMap<String, v2::FileData> {
    BTreeMap::from([(
        environment.target_page_url.clone(),
        v2::FileData {
            mime_type: HTML_MIME_TYPE.to_string(),
            properties: v2::FileProperties {
                tags: vec![TARGET_TAG.to_string()],
                title: page_title(environment),
            },
        },
    )])
}

/// The scanned page is always artifact 0; results point back at it by index.
pub fn artifacts_v21(environment: &EnvironmentData) -> Vec<v21::Artifact> {
    vec![v21::Artifact {
        location: v21::ArtifactLocation {
            uri: environment.target_page_url.clone(),
            index: Some(0),
        },
        source_language: SOURCE_LANGUAGE.to_string(),
        roles: vec![ANALYSIS_TARGET_ROLE.to_string()],
        description: page_title(environment).map(|text| v21::Message {
            text,
            markdown: None,
        }),
    }]
}
