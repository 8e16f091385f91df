use serde::{Serialize, Serializer};
use std::fmt;

/// Preferred placeholder token
pub const BRACES_PLACEHOLDER: &str = "{}";
/// Placeholder used when a template has no `{}`
pub const STAR_PLACEHOLDER: &str = "*";

/// A path template holding exactly one placeholder.
///
/// The placeholder is `{}` when the template contains one, otherwise `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    token: &'static str,
}

impl Template {
    /// Parse a template, returning `None` unless it holds exactly one placeholder.
    /// Use [`Template::count_placeholders`] to report what was found.
    pub fn parse(raw: &str) -> Option<Self> {
        let token = placeholder_token(raw);
        if raw.matches(token).count() != 1 {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            token,
        })
    }

    pub fn count_placeholders(raw: &str) -> usize {
        raw.matches(placeholder_token(raw)).count()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn placeholder(&self) -> &'static str {
        self.token
    }

    /// Replace the first placeholder occurrence with `value`
    pub fn substitute(&self, value: &str) -> String {
        self.raw.replacen(self.token, value, 1)
    }
}

fn placeholder_token(raw: &str) -> &'static str {
    if raw.contains(BRACES_PLACEHOLDER) {
        BRACES_PLACEHOLDER
    } else {
        STAR_PLACEHOLDER
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braces_placeholder() {
        let template = Template::parse("test/{}.test.ts").unwrap();
        assert_eq!(template.placeholder(), "{}");
        assert_eq!(template.substitute("foo"), "test/foo.test.ts");
    }

    #[test]
    fn test_star_placeholder() {
        let template = Template::parse("spec/*_spec.rb").unwrap();
        assert_eq!(template.placeholder(), "*");
        assert_eq!(template.substitute("user"), "spec/user_spec.rb");
    }

    #[test]
    fn test_braces_win_over_star() {
        // `*` is literal once `{}` is present
        let template = Template::parse("docs/*/{}.md").unwrap();
        assert_eq!(template.substitute("intro"), "docs/*/intro.md");
    }

    #[test]
    fn test_substituted_value_is_verbatim() {
        let template = Template::parse("test/{}.ts").unwrap();
        assert_eq!(template.substitute("a{}b"), "test/a{}b.ts");
    }

    #[test]
    fn test_rejects_zero_or_many_placeholders() {
        assert!(Template::parse("README.md").is_none());
        assert_eq!(Template::count_placeholders("README.md"), 0);

        assert!(Template::parse("test/{}/{}.ts").is_none());
        assert_eq!(Template::count_placeholders("test/{}/{}.ts"), 2);

        assert!(Template::parse("test/**/*.ts").is_none());
        assert_eq!(Template::count_placeholders("test/**/*.ts"), 3);
    }
}
