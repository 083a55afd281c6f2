//! Command-line interface wiring for paracetamol-risk.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::{config::Settings, risk::IngestionType};

pub mod curve;
pub mod evaluate;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Paracetamol overdose risk assessment", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Sub-command name, safe to log; arguments may carry patient data.
    pub fn command_name(&self) -> &'static str {
        match self.command {
            Commands::Serve(_) => "serve",
            Commands::Evaluate(_) => "evaluate",
            Commands::Curve(_) => "curve",
        }
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::Evaluate(args) => evaluate::run(args, settings),
            Commands::Curve(args) => curve::run(args, settings),
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the JSON API and the callable endpoint.
    Serve(serve::Args),
    /// Evaluate a single level and print the verdict as JSON.
    Evaluate(evaluate::Args),
    /// Print the treatment line for the configured unit.
    Curve(curve::Args),
}

/// Ingestion pattern accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum IngestionArg {
    Acute,
    Chronic,
}

impl From<IngestionArg> for IngestionType {
    fn from(value: IngestionArg) -> Self {
        match value {
            IngestionArg::Acute => IngestionType::Acute,
            IngestionArg::Chronic => IngestionType::Chronic,
        }
    }
}
