//! Price cap updates for stablecoin oracles.

use stewgen_core::prompt::{assets_select, number_prompt};
use stewgen_core::{CodeArtifact, Feature, GenResult, StablePriceCapUpdate};
use tracing::{debug, info};

use super::{BuildContext, CollectContext, FeatureModule};
use crate::solidity::{array_function, struct_literal};

pub struct StablePriceCapsUpdates;

impl FeatureModule for StablePriceCapsUpdates {
    type Record = StablePriceCapUpdate;

    const FEATURE: Feature = Feature::StablecoinPriceCapUpdate;
    const DESCRIPTION: &'static str = "StablecoinPriceCapUpdates (priceCap)";

    fn collect(ctx: &mut CollectContext<'_>) -> GenResult<Vec<StablePriceCapUpdate>> {
        info!(pool = %ctx.pool, "Fetching information for stable price cap updates");

        let assets = assets_select(
            ctx.prompter,
            ctx.assets,
            ctx.pool,
            "Select the asset whose oracle you want to amend",
        )?;
        let mut records = Vec::with_capacity(assets.len());
        for asset in assets {
            debug!(asset = %asset, "Collecting price cap");
            let price_cap = number_prompt(ctx.prompter, "Price Cap", true, true)?;
            records.push(StablePriceCapUpdate { asset, price_cap });
        }
        Ok(records)
    }

    fn build(ctx: &BuildContext<'_>, records: &[StablePriceCapUpdate]) -> CodeArtifact {
        let items: Vec<String> = records
            .iter()
            .map(|r| {
                struct_literal(
                    "IRiskSteward.PriceCapStableUpdate",
                    &[
                        ("oracle", ctx.assets.oracle(ctx.pool, &r.asset)),
                        ("priceCap", r.price_cap.clone()),
                    ],
                    4,
                )
            })
            .collect();

        CodeArtifact::function(array_function(
            "stablePriceCapsUpdates",
            "IRiskSteward.PriceCapStableUpdate",
            "priceCapUpdates",
            &items,
        ))
    }
}
