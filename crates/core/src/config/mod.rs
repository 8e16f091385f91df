//! Projection configuration
//!
//! Rules live in `.projectionist.json` at the workspace root. Each key is a
//! glob, each value maps projection names to path templates:
//!
//! ```json
//! {
//!   "src/*.ts": { "alternate": "test/{}.test.ts", "type": "source" },
//!   "test/*.test.ts": { "alternate": "src/{}.ts", "type": "test" }
//! }
//! ```

mod json;
pub mod loader;
pub mod rules;

pub use loader::ConfigLoader;
pub use rules::{ProjectionConfig, ProjectionRule, RuleMatch};

/// File name of the per-workspace configuration
pub const CONFIG_FILE_NAME: &str = ".projectionist.json";

/// Projection name of "the other half" of a file
pub const ALTERNATE_KEY: &str = "alternate";

/// Rule key holding the rule's type label rather than a template
pub const TYPE_KEY: &str = "type";
