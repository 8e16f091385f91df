use anyhow::Result;
use clap::{Parser, Subcommand};
use projectionist_core::HostCommand;
use std::path::PathBuf;

use crate::commands::{check_command, host_command, list_command, resolve_command};
use crate::display::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "projectionist")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Projectionist {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root (defaults to the nearest directory with .projectionist.json)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Jump to the alternate file in the active column
    #[command(visible_alias = "j")]
    Jump {
        /// Path of the document being edited
        filepath: PathBuf,
    },
    /// Open the alternate file in the active column
    Open {
        /// Path of the document being edited
        filepath: PathBuf,
    },
    /// Open the alternate file beside the current one
    Split {
        /// Path of the document being edited
        filepath: PathBuf,
    },
    /// Navigate to a projection by type and optional name
    #[command(visible_alias = "n")]
    Navigate {
        /// Path of the document being edited
        filepath: PathBuf,

        /// Answer to the prompt, e.g. "model user" (read from stdin when omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print where a projection of a file resolves to
    #[command(visible_alias = "r")]
    Resolve {
        /// Path of the file to project
        filepath: PathBuf,

        /// Projection key, or rule type when --name is given
        #[arg(short = 't', long = "type", default_value = "alternate")]
        type_name: String,

        /// Build the path for this name from the rule typed --type
        #[arg(short, long)]
        name: Option<String>,
    },
    /// List every projection of a file
    #[command(visible_alias = "l")]
    List {
        /// Path of the file to project
        filepath: PathBuf,
    },
    /// Validate .projectionist.json and print its rules
    Check,
}

impl Projectionist {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        let root = self.root.as_deref();
        let format = self.format;

        match self.command {
            Commands::Jump { filepath } => {
                host_command(HostCommand::JumpToAlternate, &filepath, root, None, format)
            }
            Commands::Open { filepath } => {
                host_command(HostCommand::OpenAlternate, &filepath, root, None, format)
            }
            Commands::Split { filepath } => {
                host_command(HostCommand::OpenAlternateSplit, &filepath, root, None, format)
            }
            Commands::Navigate { filepath, input } => host_command(
                HostCommand::NavigateToTypeAndName,
                &filepath,
                root,
                input,
                format,
            ),
            Commands::Resolve {
                filepath,
                type_name,
                name,
            } => resolve_command(&filepath, root, &type_name, name.as_deref(), format),
            Commands::List { filepath } => list_command(&filepath, root, format),
            Commands::Check => check_command(root, format),
        }
    }
}
