//! Projection resolver
//!
//! Composes config loading, rule matching, template substitution and the
//! existence check. Each entry point re-reads the configuration.

use std::path::Path;

use tracing::debug;

use crate::{
    config::{ConfigLoader, ProjectionConfig, ALTERNATE_KEY},
    error::Result,
    interfaces::PathProbe,
    services::FsPathProbe,
    types::{Projection, Resolution, ResolvedPath},
    utils::resolve_against,
};

pub struct ProjectionResolver<P = FsPathProbe> {
    probe: P,
}

impl ProjectionResolver<FsPathProbe> {
    pub fn new() -> Self {
        Self {
            probe: FsPathProbe::new(),
        }
    }
}

impl Default for ProjectionResolver<FsPathProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PathProbe> ProjectionResolver<P> {
    pub fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Alternate of the file at `relative` in the workspace at `root`
    pub fn resolve_alternate(&self, root: &Path, relative: &str) -> Result<Resolution> {
        self.resolve_projection(root, relative, ALTERNATE_KEY)
    }

    /// Projection named `key` of the file at `relative`
    pub fn resolve_projection(&self, root: &Path, relative: &str, key: &str) -> Result<Resolution> {
        let config = ConfigLoader::load(root)?;
        Ok(self.project(&config, root, relative, key))
    }

    /// With a `name`, build the path of that name from the rule typed
    /// `type_name`. Without one, treat `type_name` as a projection key of the
    /// current file.
    pub fn resolve_by_type_and_name(
        &self,
        root: &Path,
        relative: &str,
        type_name: &str,
        name: Option<&str>,
    ) -> Result<Resolution> {
        let config = ConfigLoader::load(root)?;
        Ok(match name {
            Some(name) => self.construct(&config, root, type_name, name),
            None => self.project(&config, root, relative, type_name),
        })
    }

    /// Every projection declared by the first rule matching `relative`
    pub fn projections_for(&self, root: &Path, relative: &str) -> Result<Vec<Projection>> {
        let config = ConfigLoader::load(root)?;
        let Some(found) = config.matching(relative) else {
            debug!("No rule matches {}", relative);
            return Ok(Vec::new());
        };

        Ok(found
            .rule
            .templates
            .iter()
            .map(|(name, template)| Projection {
                name: name.clone(),
                target: self.check(root, &template.substitute(&found.capture)),
            })
            .collect())
    }

    /// Resolve `key` for `relative` against an already loaded config
    pub fn project(
        &self,
        config: &ProjectionConfig,
        root: &Path,
        relative: &str,
        key: &str,
    ) -> Resolution {
        let Some(found) = config.find_match(relative, key) else {
            debug!("No rule defines {:?} for {}", key, relative);
            return Resolution::NoMatch;
        };
        let Some(template) = found.rule.template(key) else {
            return Resolution::NoMatch;
        };

        let target = template.substitute(&found.capture);
        debug!(
            "{} -> {} via {} ({})",
            relative, target, found.rule.pattern, key
        );
        Resolution::Resolved(self.check(root, &target))
    }

    /// Build a path for `name` from the rule typed `type_name`; the rule's
    /// glob acts as the template
    pub fn construct(
        &self,
        config: &ProjectionConfig,
        root: &Path,
        type_name: &str,
        name: &str,
    ) -> Resolution {
        let Some(rule) = config.rule_for_type(type_name) else {
            debug!("No rule has type {:?}", type_name);
            return Resolution::NoMatch;
        };

        let target = rule.pattern.instantiate(name);
        debug!("{} {} -> {} via {}", type_name, name, target, rule.pattern);
        Resolution::Resolved(self.check(root, &target))
    }

    fn check(&self, root: &Path, relative: &str) -> ResolvedPath {
        let absolute_path = resolve_against(root, relative);
        let exists = self.probe.exists(&absolute_path);
        ResolvedPath::new(absolute_path, exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{GlobPattern, Template};
    use crate::ProjectionRule;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Probe answering from a fixed list and recording every call
    #[derive(Default)]
    struct FakeProbe {
        existing: Vec<PathBuf>,
        calls: Mutex<Vec<PathBuf>>,
    }

    impl PathProbe for FakeProbe {
        fn exists(&self, path: &Path) -> bool {
            self.calls.lock().unwrap().push(path.to_path_buf());
            self.existing.iter().any(|p| p == path)
        }
    }

    fn ts_config() -> ProjectionConfig {
        ProjectionConfig::new(vec![
            ProjectionRule::new(GlobPattern::parse("src/*.ts").unwrap())
                .with_template("alternate", Template::parse("test/{}.test.ts").unwrap())
                .with_template("story", Template::parse("stories/{}.stories.ts").unwrap()),
            ProjectionRule::new(GlobPattern::parse("app/models/*.rb").unwrap()).with_type("model"),
        ])
    }

    #[test]
    fn test_project_alternate_new_file() {
        let resolver = ProjectionResolver::with_probe(FakeProbe::default());
        let resolution = resolver.project(&ts_config(), Path::new("/proj"), "src/foo.ts", "alternate");

        let target = resolution.resolved().unwrap();
        assert_eq!(target.absolute_path, PathBuf::from("/proj/test/foo.test.ts"));
        assert!(!target.exists);
    }

    #[test]
    fn test_project_existing_file() {
        let probe = FakeProbe {
            existing: vec![PathBuf::from("/proj/stories/foo.stories.ts")],
            ..Default::default()
        };
        let resolver = ProjectionResolver::with_probe(probe);
        let resolution = resolver.project(&ts_config(), Path::new("/proj"), "src/foo.ts", "story");

        assert_eq!(
            resolution,
            Resolution::Resolved(ResolvedPath::new("/proj/stories/foo.stories.ts".into(), true))
        );
    }

    #[test]
    fn test_no_match_skips_probe() {
        let resolver = ProjectionResolver::with_probe(FakeProbe::default());
        let resolution = resolver.project(&ts_config(), Path::new("/proj"), "lib/foo.ts", "alternate");

        assert_eq!(resolution, Resolution::NoMatch);
        assert!(resolver.probe().calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_construct_from_type_and_name() {
        let resolver = ProjectionResolver::with_probe(FakeProbe::default());
        let resolution = resolver.construct(&ts_config(), Path::new("/proj"), "MODEL", "user");

        let target = resolution.resolved().unwrap();
        assert_eq!(target.absolute_path, PathBuf::from("/proj/app/models/user.rb"));

        let missing = resolver.construct(&ts_config(), Path::new("/proj"), "view", "user");
        assert_eq!(missing, Resolution::NoMatch);
    }
}
