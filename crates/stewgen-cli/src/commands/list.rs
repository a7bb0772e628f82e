//! Listing commands.

use anyhow::Result;
use stewgen_codegen::FeatureRegistry;
use stewgen_core::Pool;

use crate::output;

pub fn pools() -> Result<()> {
    output::print_pools_table(&Pool::ALL);
    Ok(())
}

pub fn features() -> Result<()> {
    let registry = FeatureRegistry::v3();
    output::print_features_table(registry.entries());
    Ok(())
}
