use crate::providers::wcag::{self, WcagLinkData, WCAG_LINK_DATA};
use crate::sarif::v21;
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const WCAG_TAXONOMY_NAME: &str = "WCAG";
pub const WCAG_TAXONOMY_GUID: &str = "ca34e0e1-5faf-4f55-a989-cdae42a98f18";
/// Position of the WCAG component in `run.taxonomies`.
pub const WCAG_TAXONOMY_INDEX: usize = 0;

#[derive(Debug, Clone)]
pub struct WcagIndex {
    tags: Vec<&'static str>,
    positions: BTreeMap<&'static str, usize>,
}

impl WcagIndex {
    pub fn build(table: &[WcagLinkData]) -> Self {
        let mut tags = table.iter().map(|entry| entry.tag).collect::<Vec<_>>();
        tags.sort_unstable();
        tags.dedup();
        let positions = tags
            .iter()
            .enumerate()
            .map(|(index, tag)| (*tag, index))
            .collect();
        Self { tags, positions }
    }

    /// Sorted tag list; a tag's position here is its taxonomy index.
    pub fn tags(&self) -> &[&'static str] {
        &self.tags
    }

    pub fn index_of(&self, tag: &str) -> Option<usize> {
        self.positions.get(tag).copied()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

pub fn wcag_index() -> &'static WcagIndex {
    static INDEX: OnceLock<WcagIndex> = OnceLock::new();
    INDEX.get_or_init(|| WcagIndex::build(WCAG_LINK_DATA))
}

pub fn wcag_taxonomy_reference() -> v21::ToolComponentReference {
    v21::ToolComponentReference {
        name: WCAG_TAXONOMY_NAME.to_string(),
        index: WCAG_TAXONOMY_INDEX,
        guid: WCAG_TAXONOMY_GUID.to_string(),
    }
}

pub fn wcag_taxonomy() -> v21::ToolComponent {
    let taxa = wcag_index()
        .tags()
        .iter()
        .filter_map(|tag| wcag::lookup(tag))
        .map(|entry| v21::ReportingDescriptor {
            id: entry.tag.to_string(),
            name: Some(entry.text.to_string()),
            short_description: entry.title.map(v21::MultiformatMessageString::plain),
            help_uri: entry.url.map(str::to_string),
            ..v21::ReportingDescriptor::default()
        })
        .collect();

    v21::ToolComponent {
        name: WCAG_TAXONOMY_NAME.to_string(),
        full_name: Some("Web Content Accessibility Guidelines (WCAG) 2.1".to_string()),
        organization: Some("W3C".to_string()),
        language: Some("en".to_string()),
        version: Some("2.1".to_string()),
        release_date_utc: Some("2018-06-05".to_string()),
        information_uri: Some("https://www.w3.org/TR/WCAG21/".to_string()),
        download_uri: Some("https://www.w3.org/WAI/WCAG21/wcag-2.1.zip".to_string()),
        guid: Some(WCAG_TAXONOMY_GUID.to_string()),
        is_comprehensive: Some(true),
        taxa: Some(taxa),
        ..v21::ToolComponent::default()
    }
}
