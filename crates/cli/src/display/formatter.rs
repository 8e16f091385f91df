use clap::ValueEnum;
use projectionist_core::{
    OpenMode, Projection, ProjectionConfig, Resolution, ResolvedPath, ViewColumn,
};
use serde::Serialize;
use std::path::Path;

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document per line, for editor plugins
    Json,
    /// Human readable text
    Plain,
}

/// Something the editor on the other end of stdout should do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum HostAction<'a> {
    Open { path: &'a Path, column: ViewColumn },
    Untitled { path: &'a Path, column: ViewColumn },
}

#[derive(Serialize)]
struct ResolutionReport<'a> {
    matched: bool,
    #[serde(flatten)]
    target: Option<&'a ResolvedPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<OpenMode>,
}

fn mode_label(mode: OpenMode) -> &'static str {
    match mode {
        OpenMode::Existing => "existing",
        OpenMode::New => "new",
    }
}

fn column_label(column: ViewColumn) -> &'static str {
    match column {
        ViewColumn::Active => "active",
        ViewColumn::Beside => "beside",
    }
}

pub fn format_action(action: &HostAction<'_>, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(action),
        OutputFormat::Plain => Ok(match action {
            HostAction::Open { path, column } => {
                format!("open {} {}", column_label(*column), path.display())
            }
            HostAction::Untitled { path, column } => {
                format!("untitled {} {}", column_label(*column), path.display())
            }
        }),
    }
}

pub fn format_resolution(resolution: &Resolution, format: OutputFormat) -> serde_json::Result<String> {
    let target = resolution.resolved();
    match format {
        OutputFormat::Json => serde_json::to_string(&ResolutionReport {
            matched: target.is_some(),
            target,
            mode: target.map(ResolvedPath::open_mode),
        }),
        OutputFormat::Plain => Ok(match target {
            Some(target) => format!(
                "{} {}",
                mode_label(target.open_mode()),
                target.absolute_path.display()
            ),
            None => "no match".to_string(),
        }),
    }
}

pub fn format_projections(projections: &[Projection], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(projections),
        OutputFormat::Plain => Ok(projections
            .iter()
            .map(|p| {
                format!(
                    "{:<12} {:<8} {}",
                    p.name,
                    mode_label(p.target.open_mode()),
                    p.target.absolute_path.display()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn format_rules(config: &ProjectionConfig, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(config),
        OutputFormat::Plain => {
            let mut lines = Vec::new();
            for rule in config.rules() {
                lines.push(rule.pattern.to_string());
                if let Some(type_name) = &rule.type_name {
                    lines.push(format!("  type: {type_name}"));
                }
                for (key, template) in &rule.templates {
                    lines.push(format!("  {key} -> {template}"));
                }
            }
            Ok(lines.join("\n"))
        }
    }
}
