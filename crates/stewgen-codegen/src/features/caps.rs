//! Supply and borrow cap updates.

use stewgen_core::prompt::{assets_select, number_prompt};
use stewgen_core::{CapsUpdate, CodeArtifact, Feature, GenResult};
use tracing::{debug, info};

use super::{BuildContext, CollectContext, FeatureModule};
use crate::solidity::{array_function, number_or_keep_current, struct_literal};

pub struct CapsUpdates;

impl FeatureModule for CapsUpdates {
    type Record = CapsUpdate;

    const FEATURE: Feature = Feature::CapsUpdate;
    const DESCRIPTION: &'static str = "CapsUpdates (supplyCap, borrowCap)";

    fn collect(ctx: &mut CollectContext<'_>) -> GenResult<Vec<CapsUpdate>> {
        info!(pool = %ctx.pool, "Fetching information for caps updates");

        let assets = assets_select(
            ctx.prompter,
            ctx.assets,
            ctx.pool,
            "Select the assets whose caps you want to amend",
        )?;
        let mut records = Vec::with_capacity(assets.len());
        for asset in assets {
            debug!(asset = %asset, "Collecting caps");
            let supply_cap = number_prompt(ctx.prompter, &format!("New supply cap for {}", asset), false, false)?;
            let borrow_cap = number_prompt(ctx.prompter, &format!("New borrow cap for {}", asset), false, false)?;
            records.push(CapsUpdate {
                asset,
                supply_cap,
                borrow_cap,
            });
        }
        Ok(records)
    }

    fn build(ctx: &BuildContext<'_>, records: &[CapsUpdate]) -> CodeArtifact {
        let items: Vec<String> = records
            .iter()
            .map(|r| {
                struct_literal(
                    "IAaveV3ConfigEngine.CapsUpdate",
                    &[
                        ("asset", ctx.assets.underlying(ctx.pool, &r.asset)),
                        ("supplyCap", number_or_keep_current(&r.supply_cap)),
                        ("borrowCap", number_or_keep_current(&r.borrow_cap)),
                    ],
                    4,
                )
            })
            .collect();

        CodeArtifact::function(array_function(
            "capsUpdates",
            "IAaveV3ConfigEngine.CapsUpdate",
            "capsUpdate",
            &items,
        ))
    }
}
