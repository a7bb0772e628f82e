//! Feature modules and the registry that lists them.
//!
//! Every feature follows the same two-phase contract: `collect` asks the
//! user for a list of update records, `build` renders those records into a
//! single Solidity function. `build` is pure, so replaying saved records
//! reproduces the exact same code.
//!
//! The set of features is closed. Dispatch goes through [`Feature`] with a
//! plain `match`, and each module stays independently testable.

pub mod caps;
pub mod collaterals;
pub mod emode;
pub mod lst_price_caps;
pub mod rates;
pub mod stable_price_caps;

use stewgen_core::{
    AssetRegistry, CodeArtifact, Feature, FeatureRecords, GenError, GenResult, Options, Pool,
    PoolCache, Prompter,
};

pub use caps::CapsUpdates;
pub use collaterals::CollateralsUpdates;
pub use emode::EModeUpdates;
pub use lst_price_caps::LstPriceCapsUpdates;
pub use rates::RateUpdatesV3;
pub use stable_price_caps::StablePriceCapsUpdates;

/// What a feature may use while asking questions.
pub struct CollectContext<'a> {
    pub prompter: &'a mut dyn Prompter,
    pub assets: &'a dyn AssetRegistry,
    pub pool: Pool,
    pub cache: &'a PoolCache,
}

/// What a feature may use while rendering.
pub struct BuildContext<'a> {
    pub options: &'a Options,
    pub pool: Pool,
    pub cache: &'a PoolCache,
    pub assets: &'a dyn AssetRegistry,
}

/// Two-phase contract shared by all features.
pub trait FeatureModule {
    /// One atomic change as stored in the config document.
    type Record;

    const FEATURE: Feature;

    /// Label shown when picking features.
    const DESCRIPTION: &'static str;

    /// Ask for the records. Never called during replay.
    fn collect(ctx: &mut CollectContext<'_>) -> GenResult<Vec<Self::Record>>;

    /// Render the records into one function.
    fn build(ctx: &BuildContext<'_>, records: &[Self::Record]) -> CodeArtifact;
}

/// Human-readable label of a feature.
pub fn description(feature: Feature) -> &'static str {
    match feature {
        Feature::RateUpdateV3 => RateUpdatesV3::DESCRIPTION,
        Feature::CapsUpdate => CapsUpdates::DESCRIPTION,
        Feature::CollateralsUpdate => CollateralsUpdates::DESCRIPTION,
        Feature::LstPriceCapUpdate => LstPriceCapsUpdates::DESCRIPTION,
        Feature::StablecoinPriceCapUpdate => StablePriceCapsUpdates::DESCRIPTION,
        Feature::EModesUpdate => EModeUpdates::DESCRIPTION,
    }
}

/// Run the collect phase of `feature`.
pub fn collect_feature(feature: Feature, ctx: &mut CollectContext<'_>) -> GenResult<FeatureRecords> {
    let records = match feature {
        Feature::RateUpdateV3 => FeatureRecords::Rates(RateUpdatesV3::collect(ctx)?),
        Feature::CapsUpdate => FeatureRecords::Caps(CapsUpdates::collect(ctx)?),
        Feature::CollateralsUpdate => FeatureRecords::Collaterals(CollateralsUpdates::collect(ctx)?),
        Feature::LstPriceCapUpdate => FeatureRecords::LstPriceCaps(LstPriceCapsUpdates::collect(ctx)?),
        Feature::StablecoinPriceCapUpdate => {
            FeatureRecords::StablePriceCaps(StablePriceCapsUpdates::collect(ctx)?)
        }
        Feature::EModesUpdate => FeatureRecords::EModes(EModeUpdates::collect(ctx)?),
    };
    Ok(records)
}

/// Run the build phase of `feature` over `records`.
pub fn build_feature(
    feature: Feature,
    ctx: &BuildContext<'_>,
    records: &FeatureRecords,
) -> GenResult<CodeArtifact> {
    if records.feature() != feature {
        return Err(GenError::MismatchedRecords {
            expected: feature.to_string(),
            found: records.feature().to_string(),
        });
    }
    let artifact = match records {
        FeatureRecords::Rates(r) => RateUpdatesV3::build(ctx, r),
        FeatureRecords::Caps(r) => CapsUpdates::build(ctx, r),
        FeatureRecords::Collaterals(r) => CollateralsUpdates::build(ctx, r),
        FeatureRecords::LstPriceCaps(r) => LstPriceCapsUpdates::build(ctx, r),
        FeatureRecords::StablePriceCaps(r) => StablePriceCapsUpdates::build(ctx, r),
        FeatureRecords::EModes(r) => EModeUpdates::build(ctx, r),
    };
    Ok(artifact)
}

/// A registry listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureEntry {
    pub feature: Feature,
    pub description: &'static str,
}

/// Ordered list of the features offered for a pool.
#[derive(Debug, Clone)]
pub struct FeatureRegistry {
    entries: Vec<FeatureEntry>,
}

impl FeatureRegistry {
    /// Every V3 feature, in the order they are offered and rendered.
    pub fn v3() -> Self {
        Self::with_features(&Feature::ALL)
    }

    /// A registry restricted to `features`, kept in the given order.
    pub fn with_features(features: &[Feature]) -> Self {
        let mut entries: Vec<FeatureEntry> = Vec::with_capacity(features.len());
        for feature in features {
            if entries.iter().all(|e| e.feature != *feature) {
                entries.push(FeatureEntry {
                    feature: *feature,
                    description: description(*feature),
                });
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[FeatureEntry] {
        &self.entries
    }

    /// Look up a feature; saved configs naming an unregistered feature are fatal.
    pub fn get(&self, feature: Feature) -> GenResult<&FeatureEntry> {
        self.entries
            .iter()
            .find(|e| e.feature == feature)
            .ok_or_else(|| GenError::UnknownFeature(feature.to_string()))
    }
}

impl Default for FeatureRegistry {
    fn default() -> Self {
        Self::v3()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use stewgen_core::{AddressBook, Options, Pool, PoolCache};

    pub const CACHE: PoolCache = PoolCache { block_number: 42 };

    pub fn options() -> Options {
        Options::new(vec![Pool::AaveV3Ethereum], "test", "test", "test", "20231023")
            .expect("valid options")
    }

    pub static BOOK: AddressBook = AddressBook;

    pub fn function(artifact: &stewgen_core::CodeArtifact) -> &str {
        assert_eq!(artifact.functions.len(), 1);
        &artifact.functions[0]
    }
}
