//! Terminal output formatting.

use colored::Colorize;
use std::path::Path;
use stewgen_codegen::features::FeatureEntry;
use stewgen_codegen::{WriteOutcome, WriteReport};
use stewgen_core::Pool;

fn display_path(path: &Path, project_dir: &Path) -> String {
    path.strip_prefix(project_dir)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Print what happened to every generated file.
pub fn print_write_report(report: &WriteReport, project_dir: &Path) {
    let folder = display_path(&report.folder, project_dir);
    if report.aborted {
        println!("{} Left existing proposal at {} untouched", "!".yellow().bold(), folder.cyan());
        return;
    }

    println!("{} Proposal folder: {}", "→".blue().bold(), folder.cyan());
    for file in &report.files {
        let status = match file.outcome {
            WriteOutcome::Created => "created".green(),
            WriteOutcome::Overwritten => "overwritten".yellow(),
            WriteOutcome::Unchanged => "unchanged".dimmed(),
            WriteOutcome::Skipped => "skipped".red(),
        };
        println!("  {:<12} {}", status, display_path(&file.path, project_dir));
    }
}

/// Print pools as a table.
pub fn print_pools_table(pools: &[Pool]) {
    println!("{:<24} {:<12} {:<10} {:<10}", "Pool", "Chain", "Alias", "Chain ID");
    println!("{}", "─".repeat(60));

    for pool in pools {
        let chain = pool.chain();
        let chain_id = match chain.chain_id() {
            Some(id) => id.to_string().normal(),
            None => "-".dimmed(),
        };
        println!(
            "{:<24} {:<12} {:<10} {:<10}",
            pool.as_str().cyan(),
            chain.as_str(),
            chain.alias(),
            chain_id
        );
    }
}

/// Print registry entries.
pub fn print_features_table(entries: &[FeatureEntry]) {
    println!("{:<30} {}", "Key", "Description");
    println!("{}", "─".repeat(90));

    for entry in entries {
        println!("{:<30} {}", entry.feature.as_str().cyan(), entry.description);
    }
}
