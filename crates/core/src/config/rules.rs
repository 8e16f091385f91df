use std::collections::BTreeMap;

use serde::Serialize;
use tracing::trace;

use crate::patterns::{GlobPattern, Template};

/// One glob and the projections it declares
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionRule {
    pub pattern: GlobPattern,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    pub templates: BTreeMap<String, Template>,
}

impl ProjectionRule {
    pub fn new(pattern: GlobPattern) -> Self {
        Self {
            pattern,
            type_name: None,
            templates: BTreeMap::new(),
        }
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_template(mut self, key: impl Into<String>, template: Template) -> Self {
        self.templates.insert(key.into(), template);
        self
    }

    pub fn template(&self, key: &str) -> Option<&Template> {
        self.templates.get(key)
    }

    /// Case-insensitive comparison against the rule's `type`
    pub fn has_type(&self, type_name: &str) -> bool {
        self.type_name
            .as_deref()
            .is_some_and(|own| own.to_lowercase() == type_name.to_lowercase())
    }
}

/// A rule whose glob matched, plus what its wildcard captured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    pub rule: &'a ProjectionRule,
    pub capture: String,
}

/// Ordered projection rules; declaration order decides which rule wins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectionConfig {
    rules: Vec<ProjectionRule>,
}

impl ProjectionConfig {
    pub fn new(rules: Vec<ProjectionRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ProjectionRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule, in declaration order, that defines `key` and whose glob
    /// matches `relative`. Rules lacking `key` are skipped.
    pub fn find_match(&self, relative: &str, key: &str) -> Option<RuleMatch<'_>> {
        self.rules
            .iter()
            .filter(|rule| rule.template(key).is_some())
            .find_map(|rule| Self::capture(rule, relative))
    }

    /// First rule whose glob matches `relative`, whatever it defines
    pub fn matching(&self, relative: &str) -> Option<RuleMatch<'_>> {
        self.rules
            .iter()
            .find_map(|rule| Self::capture(rule, relative))
    }

    /// First rule whose `type` equals `type_name`, ignoring case
    pub fn rule_for_type(&self, type_name: &str) -> Option<&ProjectionRule> {
        self.rules.iter().find(|rule| rule.has_type(type_name))
    }

    fn capture<'a>(rule: &'a ProjectionRule, relative: &str) -> Option<RuleMatch<'a>> {
        let capture = rule.pattern.capture(relative)?;
        trace!("{} matched {} capturing {:?}", rule.pattern, relative, capture);
        Some(RuleMatch { rule, capture })
    }
}
