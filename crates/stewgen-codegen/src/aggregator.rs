//! Per-pool orchestration of the collect and build phases.

use std::collections::BTreeMap;

use stewgen_core::{
    generate_pool_cache, AssetRegistry, BlockNumberSource, GenError, GenResult, Options, Pool,
    PoolConfig, PoolConfigs, PoolOptions, Prompter,
};
use tracing::{debug, info};

use crate::features::{build_feature, collect_feature, BuildContext, CollectContext, FeatureRegistry};

/// Everything needed to render a proposal. Produced by collection or
/// replay and handed unchanged to rendering.
#[derive(Debug, Clone)]
pub struct Proposal {
    pub options: Options,
    pub pool_configs: PoolConfigs,
    /// Saved pools outside `options.pools`. Persisted again, never rendered.
    pub retained: BTreeMap<Pool, PoolOptions>,
}

impl Proposal {
    pub fn new(options: Options, pool_configs: PoolConfigs) -> Self {
        Self {
            options,
            pool_configs,
            retained: BTreeMap::new(),
        }
    }
}

/// Drives feature selection, collection and building for pools.
pub struct PoolConfigurator<'a> {
    pub registry: &'a FeatureRegistry,
    pub assets: &'a dyn AssetRegistry,
    pub blocks: &'a dyn BlockNumberSource,
}

impl<'a> PoolConfigurator<'a> {
    pub fn new(
        registry: &'a FeatureRegistry,
        assets: &'a dyn AssetRegistry,
        blocks: &'a dyn BlockNumberSource,
    ) -> Self {
        Self {
            registry,
            assets,
            blocks,
        }
    }

    /// Configure one pool interactively.
    ///
    /// The block number is pinned before any question is asked and shared
    /// by every feature of the pool. Selected features run in registry
    /// order, each collected and then built right away.
    pub async fn configure_pool(
        &self,
        prompter: &mut dyn Prompter,
        options: &Options,
        pool: Pool,
    ) -> GenResult<PoolConfig> {
        let cache = generate_pool_cache(self.blocks, pool).await?;
        let mut config = PoolConfig::new(cache);

        let entries = self.registry.entries();
        let labels: Vec<String> = entries.iter().map(|e| e.description.to_string()).collect();
        let picked = prompter.multi_select(&format!("What do you want to do on {}?", pool), &labels, false)?;

        for ix in picked {
            let entry = entries
                .get(ix)
                .ok_or_else(|| GenError::prompt(format!("selection {} out of range", ix)))?;
            debug!(pool = %pool, feature = %entry.feature, "Configuring feature");

            let mut collect_ctx = CollectContext {
                prompter: &mut *prompter,
                assets: self.assets,
                pool,
                cache: &cache,
            };
            let records = collect_feature(entry.feature, &mut collect_ctx)?;

            let build_ctx = BuildContext {
                options,
                pool,
                cache: &cache,
                assets: self.assets,
            };
            let artifact = build_feature(entry.feature, &build_ctx, &records)?;

            config.configs.insert(records);
            config.artifacts.push(artifact);
        }

        info!(pool = %pool, features = config.configs.len(), "Pool configured");
        Ok(config)
    }

    /// Configure every pool of `options`, one after the other.
    pub async fn collect_pools(&self, prompter: &mut dyn Prompter, options: &Options) -> GenResult<PoolConfigs> {
        let mut pool_configs = PoolConfigs::new();
        for pool in &options.pools {
            let config = self.configure_pool(prompter, options, *pool).await?;
            pool_configs.insert(*pool, config);
        }
        Ok(pool_configs)
    }
}
