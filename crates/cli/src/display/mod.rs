pub mod formatter;

pub use formatter::{
    format_action, format_projections, format_resolution, format_rules, HostAction, OutputFormat,
};
