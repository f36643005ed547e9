use crate::taxonomy::{self, WcagIndex};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Rule-level fields shared by both input shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleRecord {
    pub id: String,
    pub tags: Vec<String>,
    pub help: String,
    pub description: String,
    pub help_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionStyle {
    /// `description` copied as-is.
    Verbatim,
    /// `description` terminated with a period.
    TrailingPeriod,
}

impl DescriptionStyle {
    fn apply(self, description: &str) -> String {
        match self {
            Self::Verbatim => description.to_string(),
            Self::TrailingPeriod if description.ends_with('.') => description.to_string(),
            Self::TrailingPeriod => format!("{description}."),
        }
    }
}

/// A `superset` edge from a rule to one WCAG taxon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyLink {
    pub tag: String,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDescriptor {
    pub id: String,
    pub name: String,
    pub full_description: String,
    pub help_uri: String,
    pub relationships: Vec<TaxonomyLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub rules: Vec<RuleDescriptor>,
    pub indices: BTreeMap<String, usize>,
}

impl RuleSet {
    pub fn index_of(&self, rule_id: &str) -> Option<usize> {
        self.indices.get(rule_id).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

pub fn convert_rules(records: &[RuleRecord], style: DescriptionStyle) -> RuleSet {
    convert_rules_with_index(records, style, taxonomy::wcag_index())
}

/// First occurrence of an id wins; later duplicates are dropped.
pub fn convert_rules_with_index(
    records: &[RuleRecord],
    style: DescriptionStyle,
    wcag: &WcagIndex,
) -> RuleSet {
    let mut seen = HashSet::new();
    let mut rules = records
        .iter()
        .filter(|record| seen.insert(record.id.as_str()))
        .map(|record| RuleDescriptor {
            id: record.id.clone(),
            name: record.help.clone(),
            full_description: style.apply(&record.description),
            help_uri: record.help_url.clone(),
            relationships: taxonomy_links(&record.tags, wcag),
        })
        .collect::<Vec<_>>();
    rules.sort_by(|a, b| a.id.cmp(&b.id));

    let indices = rules
        .iter()
        .enumerate()
        .map(|(index, rule)| (rule.id.clone(), index))
        .collect();

    debug!(
        input = records.len(),
        unique = rules.len(),
        "collected rule descriptors"
    );
    RuleSet { rules, indices }
}

fn taxonomy_links(tags: &[String], wcag: &WcagIndex) -> Vec<TaxonomyLink> {
    let mut seen = HashSet::new();
    tags.iter()
        .filter(|tag| seen.insert(tag.as_str()))
        .filter_map(|tag| {
            wcag.index_of(tag).map(|index| TaxonomyLink {
                tag: tag.clone(),
                index,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, help: &str, tags: &[&str]) -> RuleRecord {
        RuleRecord {
            id: id.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            help: help.to_string(),
            description: format!("Ensures {id} is fine"),
            help_url: format!("https://dequeuniversity.com/rules/axe/3.2/{id}"),
        }
    }

    #[test]
    fn rules_are_sorted_and_indexed_without_gaps() {
        let records = vec![
            record("region", "Region", &[]),
            record("aria-allowed-attr", "ARIA", &[]),
            record("document-title", "Title", &[]),
        ];
        let set = convert_rules(&records, DescriptionStyle::Verbatim);

        let ids = set.rules.iter().map(|rule| rule.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["aria-allowed-attr", "document-title", "region"]);
        assert_eq!(set.index_of("aria-allowed-attr"), Some(0));
        assert_eq!(set.index_of("document-title"), Some(1));
        assert_eq!(set.index_of("region"), Some(2));
        assert_eq!(set.indices.len(), 3);
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let records = vec![
            record("image-alt", "First", &[]),
            record("image-alt", "Second", &[]),
        ];
        let set = convert_rules(&records, DescriptionStyle::Verbatim);
        assert_eq!(set.len(), 1);
        assert_eq!(set.rules[0].name, "First");
    }

    #[test]
    fn description_style_controls_trailing_period() {
        let records = vec![record("html-has-lang", "Lang", &[])];

        let verbatim = convert_rules(&records, DescriptionStyle::Verbatim);
        assert_eq!(verbatim.rules[0].full_description, "Ensures html-has-lang is fine");

        let period = convert_rules(&records, DescriptionStyle::TrailingPeriod);
        assert_eq!(period.rules[0].full_description, "Ensures html-has-lang is fine.");

        let already = vec![RuleRecord {
            description: "Done.".to_string(),
            ..record("x", "X", &[])
        }];
        let set = convert_rules(&already, DescriptionStyle::TrailingPeriod);
        assert_eq!(set.rules[0].full_description, "Done.");
    }

    #[test]
    fn relationships_only_reference_known_wcag_tags() {
        let records = vec![record(
            "image-alt",
            "Images must have alternate text",
            &["cat.text-alternatives", "wcag2a", "wcag111", "section508", "wcag111"],
        )];
        let set = convert_rules(&records, DescriptionStyle::Verbatim);
        let links = &set.rules[0].relationships;
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].tag, "wcag111");
        assert_eq!(
            Some(links[0].index),
            taxonomy::wcag_index().index_of("wcag111")
        );
    }

    #[test]
    fn separate_calls_do_not_share_index_state() {
        let first = convert_rules(
            &[record("b", "B", &[]), record("c", "C", &[])],
            DescriptionStyle::Verbatim,
        );
        let second = convert_rules(&[record("a", "A", &[])], DescriptionStyle::Verbatim);
        assert_eq!(first.index_of("b"), Some(0));
        assert_eq!(second.index_of("a"), Some(0));
        assert_eq!(second.index_of("b"), None);
    }
}
