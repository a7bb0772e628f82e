//! Generated file set and writing it to disk.
//!
//! All payloads are rendered before anything touches the filesystem, so a
//! rendering failure never leaves a half-written proposal behind.

use std::fs;
use std::path::{Path, PathBuf};

use stewgen_core::{ConfigFile, GenError, GenResult, Options, Pool, PoolConfigs, Prompter};
use tracing::{debug, info};

use crate::aggregator::Proposal;
use crate::proposal::ProposalRenderer;

/// Folder holding every proposal, relative to the project root.
pub const UPDATES_DIR: &str = "src/contracts/updates";

/// Name of the saved config document inside a proposal folder.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Rendered payload contract for one pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPayload {
    pub pool: Pool,
    pub contract_name: String,
    pub payload: String,
}

/// Everything one run writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub json_config: String,
    pub payloads: Vec<GeneratedPayload>,
}

/// Render the config document and one payload per targeted pool.
pub fn generate_files(options: &Options, pool_configs: &PoolConfigs) -> GenResult<GeneratedFiles> {
    render_files(ConfigFile::new(options, pool_configs), options, pool_configs)
}

/// Like [`generate_files`], with the proposal's retained pools kept in the
/// config document.
pub fn generate_proposal_files(proposal: &Proposal) -> GenResult<GeneratedFiles> {
    let config = ConfigFile::new(&proposal.options, &proposal.pool_configs).retaining(&proposal.retained);
    render_files(config, &proposal.options, &proposal.pool_configs)
}

fn render_files(config: ConfigFile, options: &Options, pool_configs: &PoolConfigs) -> GenResult<GeneratedFiles> {
    let json_config = config.to_json_pretty()?;

    let renderer = ProposalRenderer::new()?;
    let mut payloads = Vec::with_capacity(options.pools.len());
    for pool in &options.pools {
        let config = pool_configs
            .get(pool)
            .ok_or_else(|| GenError::invalid_config(format!("{} has no configuration", pool)))?;
        payloads.push(GeneratedPayload {
            pool: *pool,
            contract_name: options.contract_name(*pool),
            payload: renderer.render(options, *pool, config)?,
        });
    }

    Ok(GeneratedFiles {
        json_config,
        payloads,
    })
}

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Overwritten,
    /// Content on disk was already identical.
    Unchanged,
    /// The user declined to overwrite.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub folder: PathBuf,
    /// The user chose not to continue into an existing proposal folder.
    pub aborted: bool,
    pub files: Vec<WrittenFile>,
}

/// Proposal folder under `project_dir`.
pub fn proposal_folder(project_dir: &Path, options: &Options) -> PathBuf {
    project_dir.join(UPDATES_DIR).join(options.folder_name())
}

/// Write `files` into the proposal folder.
///
/// An existing folder needs one confirmation unless `force` is set.
/// Identical files are left alone; differing files need confirmation
/// unless `force` is set.
pub fn write_files(
    project_dir: &Path,
    options: &Options,
    files: &GeneratedFiles,
    prompter: &mut dyn Prompter,
) -> GenResult<WriteReport> {
    let folder = proposal_folder(project_dir, options);

    if folder.exists() {
        if !options.force
            && !prompter.confirm("A proposal already exists at that location, do you want to continue?", false)?
        {
            info!(folder = %folder.display(), "Keeping existing proposal");
            return Ok(WriteReport {
                folder,
                aborted: true,
                files: Vec::new(),
            });
        }
    } else {
        fs::create_dir_all(&folder)?;
    }

    let mut written = Vec::with_capacity(files.payloads.len() + 1);
    let config_path = folder.join(CONFIG_FILE_NAME);
    let outcome = write_file(&config_path, &files.json_config, options.force, prompter)?;
    written.push(WrittenFile {
        path: config_path,
        outcome,
    });

    for payload in &files.payloads {
        let path = folder.join(format!("{}.sol", payload.contract_name));
        let outcome = write_file(&path, &payload.payload, options.force, prompter)?;
        written.push(WrittenFile { path, outcome });
    }

    Ok(WriteReport {
        folder,
        aborted: false,
        files: written,
    })
}

fn write_file(path: &Path, content: &str, force: bool, prompter: &mut dyn Prompter) -> GenResult<WriteOutcome> {
    if !path.exists() {
        fs::write(path, content)?;
        debug!(path = %path.display(), "Created");
        return Ok(WriteOutcome::Created);
    }

    if fs::read_to_string(path).ok().as_deref() == Some(content) {
        debug!(path = %path.display(), "Unchanged");
        return Ok(WriteOutcome::Unchanged);
    }

    if !force {
        let message = format!("A file already exists at {} do you want to overwrite", path.display());
        if !prompter.confirm(&message, false)? {
            return Ok(WriteOutcome::Skipped);
        }
    }
    fs::write(path, content)?;
    debug!(path = %path.display(), "Overwritten");
    Ok(WriteOutcome::Overwritten)
}

/// Pretty JSON snapshot of the collected state, artifacts included, for
/// recovering by hand after a failure.
pub fn diagnostic_dump(options: &Options, pool_configs: &PoolConfigs) -> GenResult<String> {
    let dump = serde_json::json!({
        "options": options,
        "force": options.force,
        "poolConfigs": pool_configs,
    });
    Ok(serde_json::to_string_pretty(&dump)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{build_feature, BuildContext};
    use stewgen_core::test_support::ScriptedPrompter;
    use stewgen_core::{
        AddressBook, CapsUpdate, Feature, FeatureRecords, PoolCache, PoolConfig,
        StablePriceCapUpdate,
    };

    fn proposal() -> (Options, PoolConfigs) {
        let options = Options::new(vec![Pool::AaveV3Ethereum], "test", "test", "test", "20231023").unwrap();
        let cache = PoolCache { block_number: 42 };
        let mut config = PoolConfig::new(cache);
        let ctx = BuildContext {
            options: &options,
            pool: Pool::AaveV3Ethereum,
            cache: &cache,
            assets: &AddressBook,
        };
        for records in [
            FeatureRecords::Caps(vec![CapsUpdate {
                asset: "WETH".to_string(),
                supply_cap: "10000".to_string(),
                borrow_cap: "5000".to_string(),
            }]),
            FeatureRecords::StablePriceCaps(vec![StablePriceCapUpdate {
                asset: "USDT".to_string(),
                price_cap: "108000000".to_string(),
            }]),
        ] {
            config.artifacts.push(build_feature(records.feature(), &ctx, &records).unwrap());
            config.configs.insert(records);
        }
        let mut pool_configs = PoolConfigs::new();
        pool_configs.insert(Pool::AaveV3Ethereum, config);
        (options, pool_configs)
    }

    #[test]
    fn test_generate_files_is_deterministic() {
        let (options, pool_configs) = proposal();
        let first = generate_files(&options, &pool_configs).unwrap();
        let second = generate_files(&options, &pool_configs).unwrap();
        assert_eq!(first, second);

        assert_eq!(first.payloads.len(), 1);
        assert_eq!(first.payloads[0].contract_name, "AaveV3Ethereum_Test_20231023");
        let payload = &first.payloads[0].payload;
        assert!(payload.contains("import {AaveV3EthereumAssets} from 'aave-address-book/AaveV3Ethereum.sol';"));
        assert!(payload.contains("import {IRiskSteward} from '../../../interfaces/IRiskSteward.sol';"));
        assert!(!payload.contains("import {EngineFlags}"));
        assert!(payload.find("function capsUpdates()").unwrap() < payload.find("function stablePriceCapsUpdates()").unwrap());

        assert!(first.json_config.ends_with("}\n"));
        assert!(!first.json_config.contains("artifacts"));
        assert!(!first.json_config.contains("force"));
    }

    #[test]
    fn test_generate_files_requires_every_pool() {
        let (mut options, pool_configs) = proposal();
        options.pools.push(Pool::AaveV3Base);
        let err = generate_files(&options, &pool_configs).unwrap_err();
        assert!(matches!(err, GenError::InvalidConfig(_)));
    }

    #[test]
    fn test_write_then_rewrite_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let (options, pool_configs) = proposal();
        let files = generate_files(&options, &pool_configs).unwrap();

        let mut prompter = ScriptedPrompter::new();
        let report = write_files(dir.path(), &options, &files, &mut prompter).unwrap();
        assert!(!report.aborted);
        assert!(report.files.iter().all(|f| f.outcome == WriteOutcome::Created));
        let folder = dir.path().join("src/contracts/updates/20231023_AaveV3Ethereum_Test");
        assert_eq!(report.folder, folder);
        let sol = folder.join("AaveV3Ethereum_Test_20231023.sol");
        assert_eq!(fs::read_to_string(&sol).unwrap(), files.payloads[0].payload);
        let modified = fs::metadata(&sol).unwrap().modified().unwrap();

        // Existing folder: one confirmation, then every file is unchanged.
        let mut prompter = ScriptedPrompter::new().confirm(true);
        let report = write_files(dir.path(), &options, &files, &mut prompter).unwrap();
        assert!(report.files.iter().all(|f| f.outcome == WriteOutcome::Unchanged));
        assert_eq!(prompter.messages().len(), 1);
        assert_eq!(fs::metadata(&sol).unwrap().modified().unwrap(), modified);
    }

    #[test]
    fn test_declining_folder_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (options, pool_configs) = proposal();
        let files = generate_files(&options, &pool_configs).unwrap();
        let folder = proposal_folder(dir.path(), &options);
        fs::create_dir_all(&folder).unwrap();

        let mut prompter = ScriptedPrompter::new().confirm(false);
        let report = write_files(dir.path(), &options, &files, &mut prompter).unwrap();
        assert!(report.aborted);
        assert!(!folder.join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_changed_file_needs_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let (options, pool_configs) = proposal();
        let files = generate_files(&options, &pool_configs).unwrap();
        let folder = proposal_folder(dir.path(), &options);
        fs::create_dir_all(&folder).unwrap();
        let sol = folder.join("AaveV3Ethereum_Test_20231023.sol");
        fs::write(&sol, "// edited by hand\n").unwrap();

        let mut prompter = ScriptedPrompter::new().confirm(true).confirm(false);
        let report = write_files(dir.path(), &options, &files, &mut prompter).unwrap();
        assert_eq!(report.files[0].outcome, WriteOutcome::Created);
        assert_eq!(report.files[1].outcome, WriteOutcome::Skipped);
        assert_eq!(fs::read_to_string(&sol).unwrap(), "// edited by hand\n");

        let mut forced = options.clone();
        forced.force = true;
        let mut prompter = ScriptedPrompter::new();
        let report = write_files(dir.path(), &forced, &files, &mut prompter).unwrap();
        assert_eq!(report.files[0].outcome, WriteOutcome::Unchanged);
        assert_eq!(report.files[1].outcome, WriteOutcome::Overwritten);
        assert_eq!(fs::read_to_string(&sol).unwrap(), files.payloads[0].payload);
    }

    #[test]
    fn test_diagnostic_dump_includes_artifacts() {
        let (options, pool_configs) = proposal();
        let dump = diagnostic_dump(&options, &pool_configs).unwrap();
        let value: serde_json::Value = serde_json::from_str(&dump).unwrap();
        assert_eq!(value["options"]["shortName"], "Test");
        let artifacts = &value["poolConfigs"]["AaveV3Ethereum"]["artifacts"];
        assert_eq!(artifacts.as_array().map(Vec::len), Some(2));
        assert_eq!(
            value["poolConfigs"]["AaveV3Ethereum"]["configs"][Feature::CapsUpdate.as_str()][0]["asset"],
            "WETH"
        );
    }
}
