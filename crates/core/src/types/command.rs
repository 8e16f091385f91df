use serde::Serialize;
use std::path::PathBuf;

use super::OpenMode;

/// Editor pane to show a document in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewColumn {
    Active,
    Beside,
}

/// Commands registered with the host editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    JumpToAlternate,
    OpenAlternate,
    OpenAlternateSplit,
    NavigateToTypeAndName,
}

impl HostCommand {
    pub const ALL: [HostCommand; 4] = [
        HostCommand::JumpToAlternate,
        HostCommand::OpenAlternate,
        HostCommand::OpenAlternateSplit,
        HostCommand::NavigateToTypeAndName,
    ];

    /// Id the host registers the command under
    pub fn id(&self) -> &'static str {
        match self {
            HostCommand::JumpToAlternate => "projectionist.jumpToAlternate",
            HostCommand::OpenAlternate => "projectionist.openAlternate",
            HostCommand::OpenAlternateSplit => "projectionist.openAlternateSplit",
            HostCommand::NavigateToTypeAndName => "projectionist.navigateToTypeAndName",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.id() == id)
    }

    pub fn column(&self) -> ViewColumn {
        match self {
            HostCommand::OpenAlternateSplit => ViewColumn::Beside,
            _ => ViewColumn::Active,
        }
    }
}

/// What a command ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Opened {
        path: PathBuf,
        mode: OpenMode,
        column: ViewColumn,
    },
    /// Nothing observable happened (no document, no rule, prompt dismissed)
    Nothing,
    /// A diagnostic was shown to the user
    Reported(String),
}
