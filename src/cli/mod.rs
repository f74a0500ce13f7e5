//! CLI argument parsing for codeprompt.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::CONFIG_ENV_VAR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// codeprompt: build model prompts for editor code actions.
///
/// Renders the explain / fix / improve templates (or your overrides from
/// `.codeprompt.yaml`) with file path, selection, user input and
/// diagnostics substituted in, and prints the result to stdout.
#[derive(Parser, Debug)]
#[command(name = "codeprompt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file holding custom prompts (default: ./.codeprompt.yaml).
    #[arg(long, global = true, env = CONFIG_ENV_VAR, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level for stderr diagnostics (trace, debug, info, warn, error).
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for codeprompt.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the prompt for a code action.
    ///
    /// KIND is one of explain, fix, improve. Placeholders without a value
    /// are left in the output, except `${userInput}` which is cleared.
    Create(CreateArgs),

    /// Render a template file with parameters from a JSON object.
    Render(RenderArgs),

    /// Print the enhance instruction followed by the prompt to enhance.
    Enhance(EnhanceArgs),

    /// Print the effective template for a kind.
    ///
    /// KEY is one of explain, fix, improve, enhance.
    Show(ShowArgs),

    /// List code actions with their display labels.
    Labels,
}

/// Arguments for the `create` command.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Code action kind (explain, fix, improve).
    pub kind: String,

    /// Path of the file the selection comes from.
    #[arg(long)]
    pub file_path: Option<String>,

    /// Extra instructions from the user.
    #[arg(long)]
    pub user_input: Option<String>,

    /// Selected code, inline.
    #[arg(long, conflicts_with = "selection_file")]
    pub selected_text: Option<String>,

    /// Read the selected code from a file.
    #[arg(long, value_name = "PATH")]
    pub selection_file: Option<PathBuf>,

    /// JSON file with an array of diagnostics ({message, source?, code?}).
    #[arg(long, value_name = "PATH")]
    pub diagnostics: Option<PathBuf>,

    /// Additional placeholder values, applied after the ones above.
    #[arg(long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Template file containing `${name}` placeholders.
    #[arg(long, value_name = "PATH")]
    pub template_file: PathBuf,

    /// JSON object mapping placeholder names to values.
    #[arg(long, value_name = "PATH")]
    pub params: Option<PathBuf>,
}

/// Arguments for the `enhance` command.
#[derive(Parser, Debug)]
pub struct EnhanceArgs {
    /// The prompt text to enhance.
    pub text: String,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Template key (explain, fix, improve, enhance).
    pub key: String,

    /// Show the built-in template even when an override is configured.
    #[arg(long)]
    pub default: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
