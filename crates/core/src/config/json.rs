//! Parsing `.projectionist.json` into typed rules
//!
//! The file is validated as a whole when it is loaded, so a bad entry is
//! reported up front instead of surfacing during matching.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{Map, Value};

use super::{ProjectionConfig, ProjectionRule, TYPE_KEY};
use crate::error::{Error, Result};
use crate::patterns::{GlobPattern, Template};

/// Parse configuration text. `source` is only used in error messages.
pub(crate) fn parse_config(contents: &str, source: &Path) -> Result<ProjectionConfig> {
    let malformed = |reason: String| Error::ConfigurationMalformed {
        path: source.to_path_buf(),
        reason,
    };

    // Object order is preserved (serde_json `preserve_order`)
    let root: Map<String, Value> =
        serde_json::from_str(contents).map_err(|e| malformed(e.to_string()))?;

    let mut rules = Vec::with_capacity(root.len());
    for (glob, value) in root {
        let pattern =
            GlobPattern::parse(&glob).map_err(|e| malformed(format!("\"{glob}\": {e}")))?;

        let entries: BTreeMap<String, String> = serde_json::from_value(value)
            .map_err(|e| malformed(format!("\"{glob}\": {e}")))?;

        let mut rule = ProjectionRule::new(pattern);
        for (key, raw) in entries {
            if key == TYPE_KEY {
                rule.type_name = Some(raw);
                continue;
            }
            let template = Template::parse(&raw).ok_or_else(|| Error::TemplateMalformed {
                pattern: glob.clone(),
                key: key.clone(),
                found: Template::count_placeholders(&raw),
                template: raw.clone(),
            })?;
            rule.templates.insert(key, template);
        }
        rules.push(rule);
    }

    Ok(ProjectionConfig::new(rules))
}
