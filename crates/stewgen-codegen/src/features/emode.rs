//! eMode category updates.

use stewgen_core::prompt::{emodes_select, percent_prompt, string_prompt};
use stewgen_core::{CodeArtifact, EModeCategoryUpdate, Feature, GenResult};
use tracing::{debug, info};

use super::{BuildContext, CollectContext, FeatureModule};
use crate::solidity::{array_function, percent_or_keep_current, string_or_keep_current, struct_literal};

pub struct EModeUpdates;

impl FeatureModule for EModeUpdates {
    type Record = EModeCategoryUpdate;

    const FEATURE: Feature = Feature::EModesUpdate;
    const DESCRIPTION: &'static str = "eModeCategoriesUpdates (altering eMode category params)";

    /// Picking no category is allowed and yields an empty list.
    fn collect(ctx: &mut CollectContext<'_>) -> GenResult<Vec<EModeCategoryUpdate>> {
        info!(pool = %ctx.pool, "Fetching information for eMode category updates");

        let categories = emodes_select(
            ctx.prompter,
            ctx.assets,
            ctx.pool,
            "Select the eModes you want to amend",
        )?;
        let mut records = Vec::with_capacity(categories.len());
        for e_mode_category in categories {
            debug!(category = %e_mode_category, "Collecting eMode parameters");
            records.push(EModeCategoryUpdate {
                ltv: percent_prompt(ctx.prompter, "ltv", false)?,
                liq_threshold: percent_prompt(ctx.prompter, "liqThreshold", false)?,
                liq_bonus: percent_prompt(ctx.prompter, "liqBonus", false)?,
                label: string_prompt(ctx.prompter, "label", false)?,
                e_mode_category,
            });
        }
        Ok(records)
    }

    fn build(_ctx: &BuildContext<'_>, records: &[EModeCategoryUpdate]) -> CodeArtifact {
        let items: Vec<String> = records
            .iter()
            .map(|r| {
                struct_literal(
                    "IAaveV3ConfigEngine.EModeCategoryUpdate",
                    &[
                        ("eModeCategory", r.e_mode_category.to_string()),
                        ("ltv", percent_or_keep_current(&r.ltv)),
                        ("liqThreshold", percent_or_keep_current(&r.liq_threshold)),
                        ("liqBonus", percent_or_keep_current(&r.liq_bonus)),
                        ("label", string_or_keep_current(&r.label)),
                    ],
                    4,
                )
            })
            .collect();

        CodeArtifact::function(array_function(
            "eModeCategoriesUpdates",
            "IAaveV3ConfigEngine.EModeCategoryUpdate",
            "eModeUpdates",
            &items,
        ))
    }
}
