//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod generate;
pub mod list;

/// Risk steward proposal generator
#[derive(Parser)]
#[command(name = "stewgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root the proposal folder is written under (defaults to current directory)
    #[arg(long, global = true, env = "STEWGEN_PROJECT")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a proposal interactively or replay a saved config
    Generate(generate::GenerateArgs),

    /// List supported pools
    Pools,

    /// List available features
    Features,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let project_dir = match self.project {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to resolve current directory")?,
        };

        match self.command {
            Commands::Generate(args) => generate::execute(args, &project_dir).await,
            Commands::Pools => list::pools(),
            Commands::Features => list::features(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stewgen_core::Pool;

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "stewgen",
            "generate",
            "-f",
            "-p",
            "AaveV3Ethereum",
            "AaveV3Base",
            "-t",
            "weETH cap reduce",
            "-a",
            "BGD Labs",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert!(args.force);
                assert_eq!(args.pools, vec![Pool::AaveV3Ethereum, Pool::AaveV3Base]);
                assert_eq!(args.title.as_deref(), Some("weETH cap reduce"));
                assert_eq!(args.author.as_deref(), Some("BGD Labs"));
                assert!(args.discussion.is_none());
                assert!(args.config_file.is_none());
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_rejects_unknown_pool() {
        assert!(Cli::try_parse_from(["stewgen", "generate", "-p", "AaveV2Ethereum"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["stewgen", "pools", "-v", "--project", "/tmp/x"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/x")));
    }
}
