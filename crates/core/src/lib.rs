//! projectionist - jump between a file and its projected counterparts
//!
//! This crate provides functionality to:
//! - Load glob-to-template projection rules from `.projectionist.json`
//! - Match a workspace-relative path against the rules and capture the wildcard
//! - Resolve alternate and typed projections to absolute paths
//! - Drive host editor commands through the [`EditorHost`] trait
pub mod config;
pub mod error;
pub mod interfaces;
pub mod navigator;
pub mod patterns;
pub mod resolver;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

pub use config::{ConfigLoader, ProjectionConfig, ProjectionRule};
pub use interfaces::{EditorHost, PathProbe};
pub use navigator::Navigator;
pub use resolver::ProjectionResolver;
pub use services::FsPathProbe;
