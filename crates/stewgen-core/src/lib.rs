//! # Stewgen Core
//!
//! Shared data shapes and external-collaborator seams for the risk steward
//! proposal generator.
//!
//! Holds the closed pool catalogue, proposal [`Options`], the persisted
//! config document ([`ConfigFile`]), per-feature update records, the asset
//! registry lookups, the prompt contract and the deterministic block-number
//! cache.

pub mod address_book;
pub mod cache;
pub mod config;
pub mod error;
pub mod options;
pub mod pool;
pub mod prompt;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use address_book::{AddressBook, AssetRegistry, EModeInfo};
pub use cache::{generate_pool_cache, BlockNumberSource, RpcBlockNumbers};
pub use config::{
    CapsUpdate, CodeArtifact, CollateralUpdate, ConfigFile, EModeCategoryId, EModeCategoryUpdate,
    Feature, FeatureConfigs, FeatureRecords, LstPriceCapUpdate, PoolCache, PoolConfig, PoolConfigs,
    PoolOptions, RateStrategyParams, RateStrategyUpdate, StablePriceCapUpdate,
};
pub use error::{GenError, GenResult};
pub use options::Options;
pub use pool::{Chain, Pool};
pub use prompt::Prompter;
