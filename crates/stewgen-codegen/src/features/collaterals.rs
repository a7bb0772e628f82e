//! Collateral risk parameter updates.

use stewgen_core::prompt::{assets_select, number_prompt, percent_prompt};
use stewgen_core::{CodeArtifact, CollateralUpdate, Feature, GenResult};
use tracing::{debug, info};

use super::{BuildContext, CollectContext, FeatureModule};
use crate::solidity::{array_function, number_or_keep_current, percent_or_keep_current, struct_literal};

pub struct CollateralsUpdates;

impl FeatureModule for CollateralsUpdates {
    type Record = CollateralUpdate;

    const FEATURE: Feature = Feature::CollateralsUpdate;
    const DESCRIPTION: &'static str = "CollateralsUpdates (ltv,liqThreshold,liqBonus,debtCeiling,liqProtocolFee)";

    fn collect(ctx: &mut CollectContext<'_>) -> GenResult<Vec<CollateralUpdate>> {
        info!(pool = %ctx.pool, "Fetching information for collateral updates");

        let assets = assets_select(
            ctx.prompter,
            ctx.assets,
            ctx.pool,
            "Select the assets whose collateral parameters you want to amend",
        )?;
        let mut records = Vec::with_capacity(assets.len());
        for asset in assets {
            debug!(asset = %asset, "Collecting collateral parameters");
            records.push(CollateralUpdate {
                ltv: percent_prompt(ctx.prompter, "Ltv", false)?,
                liq_threshold: percent_prompt(ctx.prompter, "Liquidation threshold", false)?,
                liq_bonus: percent_prompt(ctx.prompter, "Liquidation bonus", false)?,
                debt_ceiling: number_prompt(ctx.prompter, "Debt ceiling", false, false)?,
                liq_protocol_fee: percent_prompt(ctx.prompter, "Liquidation protocol fee", false)?,
                asset,
            });
        }
        Ok(records)
    }

    fn build(ctx: &BuildContext<'_>, records: &[CollateralUpdate]) -> CodeArtifact {
        let items: Vec<String> = records
            .iter()
            .map(|r| {
                struct_literal(
                    "IAaveV3ConfigEngine.CollateralUpdate",
                    &[
                        ("asset", ctx.assets.underlying(ctx.pool, &r.asset)),
                        ("ltv", percent_or_keep_current(&r.ltv)),
                        ("liqThreshold", percent_or_keep_current(&r.liq_threshold)),
                        ("liqBonus", percent_or_keep_current(&r.liq_bonus)),
                        ("debtCeiling", number_or_keep_current(&r.debt_ceiling)),
                        ("liqProtocolFee", percent_or_keep_current(&r.liq_protocol_fee)),
                    ],
                    4,
                )
            })
            .collect();

        CodeArtifact::function(array_function(
            "collateralsUpdates",
            "IAaveV3ConfigEngine.CollateralUpdate",
            "collateralUpdate",
            &items,
        ))
    }
}
