//! Proposal generation command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use stewgen_codegen::{
    diagnostic_dump, generate_proposal_files, load_config_file, replay, write_files, FeatureRegistry,
    PoolConfigurator, Proposal,
};
use stewgen_core::options::{today, validate_title};
use stewgen_core::prompt::string_prompt;
use stewgen_core::{AddressBook, GenResult, Options, Pool, Prompter, RpcBlockNumbers};

use crate::output;
use crate::progress::SpinnerBlockNumbers;
use crate::prompt::TermPrompter;

const TITLE_PROMPT: &str = "Short title of your steward update that will be used as contract name (please refrain from including author or date)";

#[derive(Args)]
pub struct GenerateArgs {
    /// Force creation (might overwrite existing files)
    #[arg(short, long)]
    pub force: bool,

    /// Pools this proposal targets
    #[arg(short, long, num_args = 1.., value_parser = parse_pool)]
    pub pools: Vec<Pool>,

    /// Proposal title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Author
    #[arg(short, long)]
    pub author: Option<String>,

    /// Forum discussion link
    #[arg(short, long)]
    pub discussion: Option<String>,

    /// Path to a saved config.json to replay
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
}

fn parse_pool(value: &str) -> Result<Pool, String> {
    value.parse::<Pool>().map_err(|e| e.to_string())
}

pub async fn execute(args: GenerateArgs, project_dir: &Path) -> Result<()> {
    let registry = FeatureRegistry::v3();
    let book = AddressBook;
    let blocks = SpinnerBlockNumbers::new(RpcBlockNumbers::new());
    let configurator = PoolConfigurator::new(&registry, &book, &blocks);
    let mut prompter = TermPrompter::new();

    let proposal = match &args.config_file {
        Some(path) => {
            let path = if path.is_absolute() {
                path.clone()
            } else {
                project_dir.join(path)
            };
            let file = load_config_file(&path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?;
            info!(path = %path.display(), "Replaying saved proposal");
            replay(&configurator, &mut prompter, file, args.force).await?
        }
        None => {
            let options = collect_options(&args, &mut prompter)?;
            let pool_configs = configurator.collect_pools(&mut prompter, &options).await?;
            Proposal::new(options, pool_configs)
        }
    };

    let written = generate_proposal_files(&proposal)
        .and_then(|files| write_files(project_dir, &proposal.options, &files, &mut prompter));
    let report = match written {
        Ok(report) => report,
        Err(e) => {
            match diagnostic_dump(&proposal.options, &proposal.pool_configs) {
                Ok(dump) => eprintln!("{}", dump),
                Err(dump_err) => warn!(error = %dump_err, "Failed to dump collected state"),
            }
            return Err(e).context("Failed to generate proposal");
        }
    };

    output::print_write_report(&report, project_dir);
    if !report.aborted {
        println!("\n{} Proposal generated", "✓".green().bold());
    }
    Ok(())
}

/// Fill proposal metadata from flags, asking for whatever is missing.
fn collect_options(args: &GenerateArgs, prompter: &mut dyn Prompter) -> GenResult<Options> {
    let pools = if args.pools.is_empty() {
        let names: Vec<String> = Pool::ALL.iter().map(|p| p.to_string()).collect();
        prompter
            .multi_select("Chains this proposal targets", &names, true)?
            .into_iter()
            .filter_map(|ix| Pool::ALL.get(ix).copied())
            .collect()
    } else {
        args.pools.clone()
    };

    let title = match &args.title {
        Some(title) => title.clone(),
        None => {
            let validate = |v: &str| validate_title(v).map_err(|e| e.to_string());
            prompter.input(TITLE_PROMPT, &validate)?
        }
    };

    let author = match &args.author {
        Some(author) => author.clone(),
        None => {
            let validate = |v: &str| {
                if v.trim().is_empty() {
                    Err("Your author can't be empty".to_string())
                } else {
                    Ok(())
                }
            };
            prompter.input("Author of your proposal", &validate)?.trim().to_string()
        }
    };

    let discussion = match &args.discussion {
        Some(discussion) => discussion.clone(),
        None => string_prompt(prompter, "Link to forum discussion", false)?,
    };

    let mut options = Options::new(pools, &title, &author, &discussion, &today())?;
    options.force = args.force;
    Ok(options)
}
