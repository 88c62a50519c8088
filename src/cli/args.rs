//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    completions::CompletionsArgs, generate::GenerateArgs, init::InitArgs, list::ListArgs,
    preview::PreviewArgs,
};

#[derive(Parser)]
#[command(name = "quotegen")]
#[command(author, version, about = "Generate printable quotation PDFs from spreadsheet exports")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold quotegen.yaml and a sample settings file
    Init(InitArgs),

    /// Generate the quotation PDF for one quote number
    Generate(GenerateArgs),

    /// Render the quotation HTML without the PDF step
    Preview(PreviewArgs),

    /// List the quotes found in the sheet export
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The command's natural output (document, table)
    #[default]
    Auto,
    /// JSON (render model for generate, summaries for list)
    Json,
}
