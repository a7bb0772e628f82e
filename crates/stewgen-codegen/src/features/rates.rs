//! Interest rate strategy updates.

use stewgen_core::prompt::{assets_select, percent_prompt};
use stewgen_core::{CodeArtifact, Feature, GenResult, RateStrategyParams, RateStrategyUpdate};
use tracing::{debug, info};

use super::{BuildContext, CollectContext, FeatureModule};
use crate::solidity::{array_function, percent_or_keep_current, struct_literal};

pub struct RateUpdatesV3;

fn collect_params(ctx: &mut CollectContext<'_>) -> GenResult<RateStrategyParams> {
    Ok(RateStrategyParams {
        optimal_utilization_rate: percent_prompt(ctx.prompter, "optimalUtilizationRate", false)?,
        base_variable_borrow_rate: percent_prompt(ctx.prompter, "baseVariableBorrowRate", false)?,
        variable_rate_slope1: percent_prompt(ctx.prompter, "variableRateSlope1", false)?,
        variable_rate_slope2: percent_prompt(ctx.prompter, "variableRateSlope2", false)?,
    })
}

impl FeatureModule for RateUpdatesV3 {
    type Record = RateStrategyUpdate;

    const FEATURE: Feature = Feature::RateUpdateV3;
    const DESCRIPTION: &'static str =
        "RateStrategiesUpdates (optimalUtilizationRate, baseVariableBorrowRate, variableRateSlope1, variableRateSlope2)";

    fn collect(ctx: &mut CollectContext<'_>) -> GenResult<Vec<RateStrategyUpdate>> {
        info!(pool = %ctx.pool, "Fetching information for rate strategy updates");

        let assets = assets_select(
            ctx.prompter,
            ctx.assets,
            ctx.pool,
            "Select the assets whose rate strategy you want to amend",
        )?;
        let mut records = Vec::with_capacity(assets.len());
        for asset in assets {
            debug!(asset = %asset, "Collecting rate strategy");
            let params = collect_params(ctx)?;
            records.push(RateStrategyUpdate { asset, params });
        }
        Ok(records)
    }

    fn build(ctx: &BuildContext<'_>, records: &[RateStrategyUpdate]) -> CodeArtifact {
        let items: Vec<String> = records
            .iter()
            .map(|r| {
                let params = struct_literal(
                    "IAaveV3ConfigEngine.InterestRateInputData",
                    &[
                        ("optimalUsageRatio", percent_or_keep_current(&r.params.optimal_utilization_rate)),
                        ("baseVariableBorrowRate", percent_or_keep_current(&r.params.base_variable_borrow_rate)),
                        ("variableRateSlope1", percent_or_keep_current(&r.params.variable_rate_slope1)),
                        ("variableRateSlope2", percent_or_keep_current(&r.params.variable_rate_slope2)),
                    ],
                    6,
                );
                struct_literal(
                    "IAaveV3ConfigEngine.RateStrategyUpdate",
                    &[("asset", ctx.assets.underlying(ctx.pool, &r.asset)), ("params", params)],
                    4,
                )
            })
            .collect();

        CodeArtifact::function(array_function(
            "rateStrategiesUpdates",
            "IAaveV3ConfigEngine.RateStrategyUpdate",
            "rateStrategies",
            &items,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures;
    use stewgen_core::Pool;

    fn update(asset: &str, base: &str, slope1: &str) -> RateStrategyUpdate {
        RateStrategyUpdate {
            asset: asset.to_string(),
            params: RateStrategyParams {
                base_variable_borrow_rate: base.to_string(),
                variable_rate_slope1: slope1.to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_build_nested_params() {
        let options = fixtures::options();
        let ctx = BuildContext {
            options: &options,
            pool: Pool::AaveV3Ethereum,
            cache: &fixtures::CACHE,
            assets: &fixtures::BOOK,
        };
        let artifact = RateUpdatesV3::build(&ctx, &[update("WETH", "6", ""), update("DAI", "4", "10")]);
        let code = fixtures::function(&artifact);
        assert!(code.contains("new IAaveV3ConfigEngine.RateStrategyUpdate[](2);"));
        assert!(code.contains(
            "    rateStrategies[0] = IAaveV3ConfigEngine.RateStrategyUpdate({
      asset: AaveV3EthereumAssets.WETH_UNDERLYING,
      params: IAaveV3ConfigEngine.InterestRateInputData({
        optimalUsageRatio: EngineFlags.KEEP_CURRENT,
        baseVariableBorrowRate: 6_00,
        variableRateSlope1: EngineFlags.KEEP_CURRENT,
        variableRateSlope2: EngineFlags.KEEP_CURRENT
      })
    });"
        ));
        assert!(code.contains("variableRateSlope1: 10_00,"));
        assert!(code.contains("rateStrategies[1] = "));
    }
}
