//! Price cap snapshot updates for liquid staking token oracles.

use stewgen_core::prompt::{assets_select, number_prompt, percent_prompt};
use stewgen_core::{CodeArtifact, Feature, GenResult, LstPriceCapUpdate};
use tracing::{debug, info};

use super::{BuildContext, CollectContext, FeatureModule};
use crate::solidity::{array_function, percent_to_sol, struct_literal};

pub struct LstPriceCapsUpdates;

impl FeatureModule for LstPriceCapsUpdates {
    type Record = LstPriceCapUpdate;

    const FEATURE: Feature = Feature::LstPriceCapUpdate;
    const DESCRIPTION: &'static str =
        "LstPriceCapUpdates (snapshotTimestamp,snapshotRatio,maxYearlyRatioGrowthPercent)";

    fn collect(ctx: &mut CollectContext<'_>) -> GenResult<Vec<LstPriceCapUpdate>> {
        info!(pool = %ctx.pool, "Fetching information for LST price cap updates");

        let assets = assets_select(
            ctx.prompter,
            ctx.assets,
            ctx.pool,
            "Select the asset whose oracle you want to amend",
        )?;
        let mut records = Vec::with_capacity(assets.len());
        for asset in assets {
            debug!(asset = %asset, "Collecting price cap snapshot");
            records.push(LstPriceCapUpdate {
                snapshot_timestamp: number_prompt(ctx.prompter, "Snapshot Timestamp", true, true)?,
                snapshot_ratio: number_prompt(ctx.prompter, "Snapshot Ratio", true, true)?,
                max_yearly_ratio_growth_percent: percent_prompt(
                    ctx.prompter,
                    "Max Yearly Ratio Growth Percent",
                    true,
                )?,
                asset,
            });
        }
        Ok(records)
    }

    fn build(ctx: &BuildContext<'_>, records: &[LstPriceCapUpdate]) -> CodeArtifact {
        let items: Vec<String> = records
            .iter()
            .map(|r| {
                let params = struct_literal(
                    "IPriceCapAdapter.PriceCapUpdateParams",
                    &[
                        ("snapshotTimestamp", r.snapshot_timestamp.clone()),
                        ("snapshotRatio", r.snapshot_ratio.clone()),
                        ("maxYearlyRatioGrowthPercent", percent_to_sol(&r.max_yearly_ratio_growth_percent)),
                    ],
                    6,
                );
                struct_literal(
                    "IRiskSteward.PriceCapLstUpdate",
                    &[
                        ("oracle", ctx.assets.oracle(ctx.pool, &r.asset)),
                        ("priceCapUpdateParams", params),
                    ],
                    4,
                )
            })
            .collect();

        CodeArtifact::function(array_function(
            "lstPriceCapsUpdates",
            "IRiskSteward.PriceCapLstUpdate",
            "priceCapUpdates",
            &items,
        ))
    }
}
