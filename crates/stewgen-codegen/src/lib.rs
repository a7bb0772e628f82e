//! # Stewgen Codegen
//!
//! Turns collected or saved feature records into risk steward payload
//! contracts.
//!
//! Feature modules collect and build update records, the aggregator runs
//! them per pool, replay rebuilds saved proposals, and the renderer and
//! writer produce the proposal folder.

pub mod aggregator;
pub mod features;
pub mod files;
pub mod proposal;
pub mod replay;
pub mod solidity;

pub use aggregator::{PoolConfigurator, Proposal};
pub use features::{
    build_feature, collect_feature, BuildContext, CollectContext, FeatureEntry, FeatureModule,
    FeatureRegistry,
};
pub use files::{
    diagnostic_dump, generate_files, generate_proposal_files, proposal_folder, write_files,
    GeneratedFiles, GeneratedPayload, WriteOutcome, WriteReport, WrittenFile,
};
pub use proposal::{render_proposal, resolve_imports, ProposalRenderer};
pub use replay::{load_config_file, rebuild_pool, replay};
