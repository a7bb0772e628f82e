//! Regenerating a proposal from a saved config document.
//!
//! Saved pools are rebuilt with the build phase only, against their frozen
//! cache. Pools listed in the options but never configured fall back to
//! the interactive flow.

use std::collections::BTreeMap;
use std::path::Path;

use stewgen_core::{
    AssetRegistry, ConfigFile, GenError, GenResult, Options, Pool, PoolConfig, PoolConfigs,
    PoolOptions, Prompter,
};
use tracing::{info, warn};

use crate::aggregator::{PoolConfigurator, Proposal};
use crate::features::{build_feature, BuildContext, FeatureRegistry};

/// Read and validate a saved config document.
pub fn load_config_file(path: &Path) -> GenResult<ConfigFile> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        GenError::invalid_config(format!("cannot read {}: {}", path.display(), e))
    })?;
    ConfigFile::from_json(&json)
}

/// Rebuild the artifacts of a saved pool without asking anything.
///
/// A feature missing from `registry` aborts the pool instead of being dropped.
pub fn rebuild_pool(
    registry: &FeatureRegistry,
    assets: &dyn AssetRegistry,
    options: &Options,
    pool: Pool,
    saved: &PoolOptions,
) -> GenResult<PoolConfig> {
    let mut config = PoolConfig::new(saved.cache);
    let ctx = BuildContext {
        options,
        pool,
        cache: &saved.cache,
        assets,
    };
    for (feature, records) in saved.configs.iter() {
        registry.get(*feature)?;
        config.artifacts.push(build_feature(*feature, &ctx, records)?);
    }
    config.configs = saved.configs.clone();
    Ok(config)
}

/// Replay `file`.
///
/// The saved root options win over anything given on the command line,
/// except `force`, which is a property of the current run. Saved pools
/// the options no longer target are carried in `Proposal::retained`.
pub async fn replay(
    configurator: &PoolConfigurator<'_>,
    prompter: &mut dyn Prompter,
    file: ConfigFile,
    force: bool,
) -> GenResult<Proposal> {
    let mut options = file.root_options;
    options.force = force;

    let mut retained = BTreeMap::new();
    for (pool, saved) in &file.pool_options {
        if !options.pools.contains(pool) {
            warn!(pool = %pool, "Saved pool is not targeted by the proposal, keeping it without a payload");
            retained.insert(*pool, saved.clone());
        }
    }

    let mut pool_configs = PoolConfigs::new();
    for pool in &options.pools {
        let config = match file.pool_options.get(pool) {
            Some(saved) => {
                info!(pool = %pool, block_number = saved.cache.block_number, "Rebuilding saved pool");
                rebuild_pool(configurator.registry, configurator.assets, &options, *pool, saved)?
            }
            None => {
                info!(pool = %pool, "Pool has no saved configuration, asking interactively");
                configurator.configure_pool(prompter, &options, *pool).await?
            }
        };
        pool_configs.insert(*pool, config);
    }

    Ok(Proposal {
        options,
        pool_configs,
        retained,
    })
}
