//! Config types shared by collection, building, rendering and replay.
//!
//! Update records keep every numeric value as the string the user typed.
//! An empty string means "keep the current on-chain value"; rendering turns
//! it into the engine's keep-current flag.

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{GenError, GenResult};
use crate::options::Options;
use crate::pool::Pool;
use crate::prompt::{check_number, check_percent};

/// Stable identifier of a feature module.
///
/// Saved config documents use the serialized names as map keys, so they
/// must never change. Declaration order is registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "RATE_UPDATE_V3")]
    RateUpdateV3,
    #[serde(rename = "CAPS_UPDATE")]
    CapsUpdate,
    #[serde(rename = "COLLATERALS_UPDATE")]
    CollateralsUpdate,
    #[serde(rename = "LST_PRICE_CAP_UPDATE")]
    LstPriceCapUpdate,
    #[serde(rename = "STABLECOIN_PRICE_CAP_UPDATE", alias = "STABLE_PRICE_CAP_UPDATE")]
    StablecoinPriceCapUpdate,
    #[serde(rename = "EMODES_UPDATE")]
    EModesUpdate,
}

impl Feature {
    /// Every feature, in registry order.
    pub const ALL: [Feature; 6] = [
        Feature::RateUpdateV3,
        Feature::CapsUpdate,
        Feature::CollateralsUpdate,
        Feature::LstPriceCapUpdate,
        Feature::StablecoinPriceCapUpdate,
        Feature::EModesUpdate,
    ];

    /// Key used in saved config documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RateUpdateV3 => "RATE_UPDATE_V3",
            Self::CapsUpdate => "CAPS_UPDATE",
            Self::CollateralsUpdate => "COLLATERALS_UPDATE",
            Self::LstPriceCapUpdate => "LST_PRICE_CAP_UPDATE",
            Self::StablecoinPriceCapUpdate => "STABLECOIN_PRICE_CAP_UPDATE",
            Self::EModesUpdate => "EMODES_UPDATE",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supply and borrow cap change for one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CapsUpdate {
    pub asset: String,
    #[serde(default)]
    pub supply_cap: String,
    #[serde(default)]
    pub borrow_cap: String,
}

/// Collateral risk parameter change for one asset. Percent fields are in
/// human percent units (`85` or `85.5`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CollateralUpdate {
    pub asset: String,
    #[serde(default)]
    pub ltv: String,
    #[serde(default)]
    pub liq_threshold: String,
    #[serde(default)]
    pub liq_bonus: String,
    #[serde(default)]
    pub debt_ceiling: String,
    #[serde(default)]
    pub liq_protocol_fee: String,
}

/// Interest rate curve inputs, all in percent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RateStrategyParams {
    #[serde(default)]
    pub optimal_utilization_rate: String,
    #[serde(default)]
    pub base_variable_borrow_rate: String,
    #[serde(default)]
    pub variable_rate_slope1: String,
    #[serde(default)]
    pub variable_rate_slope2: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RateStrategyUpdate {
    pub asset: String,
    pub params: RateStrategyParams,
}

/// Identifier of an eMode category: a raw numeric id or an address-book
/// constant such as `AaveV3EthereumEModes.ETH_CORRELATED`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EModeCategoryId {
    Id(u64),
    Constant(String),
}

impl fmt::Display for EModeCategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Constant(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EModeCategoryUpdate {
    pub e_mode_category: EModeCategoryId,
    #[serde(default)]
    pub ltv: String,
    #[serde(default)]
    pub liq_threshold: String,
    #[serde(default)]
    pub liq_bonus: String,
    #[serde(default)]
    pub label: String,
}

/// Price cap snapshot for a liquid staking token oracle. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LstPriceCapUpdate {
    pub asset: String,
    pub snapshot_timestamp: String,
    pub snapshot_ratio: String,
    pub max_yearly_ratio_growth_percent: String,
}

/// Price cap for a stablecoin oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StablePriceCapUpdate {
    pub asset: String,
    pub price_cap: String,
}

/// The ordered update records collected for one feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FeatureRecords {
    Rates(Vec<RateStrategyUpdate>),
    Caps(Vec<CapsUpdate>),
    Collaterals(Vec<CollateralUpdate>),
    LstPriceCaps(Vec<LstPriceCapUpdate>),
    StablePriceCaps(Vec<StablePriceCapUpdate>),
    EModes(Vec<EModeCategoryUpdate>),
}

impl FeatureRecords {
    /// The feature these records belong to.
    pub fn feature(&self) -> Feature {
        match self {
            Self::Rates(_) => Feature::RateUpdateV3,
            Self::Caps(_) => Feature::CapsUpdate,
            Self::Collaterals(_) => Feature::CollateralsUpdate,
            Self::LstPriceCaps(_) => Feature::LstPriceCapUpdate,
            Self::StablePriceCaps(_) => Feature::StablecoinPriceCapUpdate,
            Self::EModes(_) => Feature::EModesUpdate,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Rates(r) => r.len(),
            Self::Caps(r) => r.len(),
            Self::Collaterals(r) => r.len(),
            Self::LstPriceCaps(r) => r.len(),
            Self::StablePriceCaps(r) => r.len(),
            Self::EModes(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode the records stored under `feature` in a saved config.
    pub fn from_value(feature: Feature, value: serde_json::Value) -> GenResult<Self> {
        let wrap = |e: serde_json::Error| {
            GenError::invalid_config(format!("malformed {} records: {}", feature, e))
        };
        let records = match feature {
            Feature::RateUpdateV3 => Self::Rates(serde_json::from_value(value).map_err(wrap)?),
            Feature::CapsUpdate => Self::Caps(serde_json::from_value(value).map_err(wrap)?),
            Feature::CollateralsUpdate => {
                Self::Collaterals(serde_json::from_value(value).map_err(wrap)?)
            }
            Feature::LstPriceCapUpdate => {
                Self::LstPriceCaps(serde_json::from_value(value).map_err(wrap)?)
            }
            Feature::StablecoinPriceCapUpdate => {
                Self::StablePriceCaps(serde_json::from_value(value).map_err(wrap)?)
            }
            Feature::EModesUpdate => Self::EModes(serde_json::from_value(value).map_err(wrap)?),
        };
        records.validate()?;
        Ok(records)
    }

    /// Check every field against the same rules the prompts enforce.
    pub fn validate(&self) -> GenResult<()> {
        let feature = self.feature();
        let fail = |ix: usize, field: &str, msg: String| {
            GenError::invalid_config(format!("{}[{}].{}: {}", feature, ix, field, msg))
        };

        match self {
            Self::Rates(records) => {
                for (ix, r) in records.iter().enumerate() {
                    check_asset(&r.asset).map_err(|m| fail(ix, "asset", m))?;
                    let p = &r.params;
                    for (field, value) in [
                        ("optimalUtilizationRate", &p.optimal_utilization_rate),
                        ("baseVariableBorrowRate", &p.base_variable_borrow_rate),
                        ("variableRateSlope1", &p.variable_rate_slope1),
                        ("variableRateSlope2", &p.variable_rate_slope2),
                    ] {
                        check_percent(value, false).map_err(|m| fail(ix, field, m))?;
                    }
                }
            }
            Self::Caps(records) => {
                for (ix, r) in records.iter().enumerate() {
                    check_asset(&r.asset).map_err(|m| fail(ix, "asset", m))?;
                    check_number(&r.supply_cap, false).map_err(|m| fail(ix, "supplyCap", m))?;
                    check_number(&r.borrow_cap, false).map_err(|m| fail(ix, "borrowCap", m))?;
                }
            }
            Self::Collaterals(records) => {
                for (ix, r) in records.iter().enumerate() {
                    check_asset(&r.asset).map_err(|m| fail(ix, "asset", m))?;
                    for (field, value) in [
                        ("ltv", &r.ltv),
                        ("liqThreshold", &r.liq_threshold),
                        ("liqBonus", &r.liq_bonus),
                        ("liqProtocolFee", &r.liq_protocol_fee),
                    ] {
                        check_percent(value, false).map_err(|m| fail(ix, field, m))?;
                    }
                    check_number(&r.debt_ceiling, false).map_err(|m| fail(ix, "debtCeiling", m))?;
                }
            }
            Self::LstPriceCaps(records) => {
                for (ix, r) in records.iter().enumerate() {
                    check_asset(&r.asset).map_err(|m| fail(ix, "asset", m))?;
                    check_number(&r.snapshot_timestamp, true)
                        .map_err(|m| fail(ix, "snapshotTimestamp", m))?;
                    check_number(&r.snapshot_ratio, true).map_err(|m| fail(ix, "snapshotRatio", m))?;
                    check_percent(&r.max_yearly_ratio_growth_percent, true)
                        .map_err(|m| fail(ix, "maxYearlyRatioGrowthPercent", m))?;
                }
            }
            Self::StablePriceCaps(records) => {
                for (ix, r) in records.iter().enumerate() {
                    check_asset(&r.asset).map_err(|m| fail(ix, "asset", m))?;
                    check_number(&r.price_cap, true).map_err(|m| fail(ix, "priceCap", m))?;
                }
            }
            Self::EModes(records) => {
                for (ix, r) in records.iter().enumerate() {
                    if let EModeCategoryId::Constant(name) = &r.e_mode_category {
                        if name.is_empty()
                            || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
                        {
                            return Err(fail(ix, "eModeCategory", format!("invalid category '{}'", name)));
                        }
                    }
                    for (field, value) in [
                        ("ltv", &r.ltv),
                        ("liqThreshold", &r.liq_threshold),
                        ("liqBonus", &r.liq_bonus),
                    ] {
                        check_percent(value, false).map_err(|m| fail(ix, field, m))?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn check_asset(asset: &str) -> Result<(), String> {
    if asset.is_empty() || !asset.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("invalid asset symbol '{}'", asset));
    }
    Ok(())
}

/// Per-pool mapping from feature key to its records.
///
/// Iteration follows registry order, which is also the order interactive
/// selection produces, so replay rebuilds artifacts in the original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureConfigs(BTreeMap<Feature, FeatureRecords>);

impl FeatureConfigs {
    /// Store records under their feature key, replacing any earlier entry.
    pub fn insert(&mut self, records: FeatureRecords) -> Option<FeatureRecords> {
        self.0.insert(records.feature(), records)
    }

    pub fn get(&self, feature: Feature) -> Option<&FeatureRecords> {
        self.0.get(&feature)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Feature, &FeatureRecords)> {
        self.0.iter()
    }

    pub fn features(&self) -> impl Iterator<Item = Feature> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for FeatureConfigs {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Decodes each entry against its feature schema. Two keys naming the same
/// feature (a key and its legacy alias) are rejected.
impl<'de> Deserialize<'de> for FeatureConfigs {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConfigsVisitor;

        impl<'de> Visitor<'de> for ConfigsVisitor {
            type Value = FeatureConfigs;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from feature key to update records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<FeatureConfigs, A::Error> {
                let mut configs = BTreeMap::new();
                while let Some((feature, value)) = map.next_entry::<Feature, serde_json::Value>()? {
                    if configs.contains_key(&feature) {
                        return Err(de::Error::custom(format!("duplicate feature key {}", feature)));
                    }
                    let records = FeatureRecords::from_value(feature, value).map_err(de::Error::custom)?;
                    configs.insert(feature, records);
                }
                Ok(FeatureConfigs(configs))
            }
        }

        deserializer.deserialize_map(ConfigsVisitor)
    }
}

/// External state frozen when a pool is first configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PoolCache {
    pub block_number: u64,
}

/// A generated code fragment from one feature invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeArtifact {
    /// Complete function definitions, spliced into the contract body in order.
    pub functions: Vec<String>,
}

impl CodeArtifact {
    pub fn function(code: String) -> Self {
        Self { functions: vec![code] }
    }
}

/// Everything known about one pool during a run.
///
/// `artifacts` is always derived from `configs` and `cache`; it is never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolConfig {
    pub configs: FeatureConfigs,
    pub artifacts: Vec<CodeArtifact>,
    pub cache: PoolCache,
}

impl PoolConfig {
    pub fn new(cache: PoolCache) -> Self {
        Self {
            configs: FeatureConfigs::default(),
            artifacts: Vec::new(),
            cache,
        }
    }

    /// The persistable part of this pool's state.
    pub fn to_options(&self) -> PoolOptions {
        PoolOptions {
            configs: self.configs.clone(),
            cache: self.cache,
        }
    }
}

/// All pools configured in one run.
pub type PoolConfigs = BTreeMap<Pool, PoolConfig>;

/// Persisted per-pool state: records and cache, never artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolOptions {
    pub configs: FeatureConfigs,
    pub cache: PoolCache,
}

/// The document saved next to generated contracts, enabling replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    pub root_options: Options,
    #[serde(default)]
    pub pool_options: BTreeMap<Pool, PoolOptions>,
}

impl ConfigFile {
    /// Snapshot the persistable state of a run.
    pub fn new(options: &Options, pool_configs: &PoolConfigs) -> Self {
        Self {
            root_options: options.clone(),
            pool_options: pool_configs
                .iter()
                .map(|(pool, cfg)| (*pool, cfg.to_options()))
                .collect(),
        }
    }

    /// Carry saved pools the current run does not target, so rewriting the
    /// document never loses their records or cache.
    pub fn retaining(mut self, retained: &BTreeMap<Pool, PoolOptions>) -> Self {
        for (pool, saved) in retained {
            self.pool_options.entry(*pool).or_insert_with(|| saved.clone());
        }
        self
    }

    /// Parse and validate a saved document.
    pub fn from_json(json: &str) -> GenResult<Self> {
        let file: Self = serde_json::from_str(json)
            .map_err(|e| GenError::invalid_config(e.to_string()))?;
        file.root_options.validate()?;
        Ok(file)
    }

    /// Pretty JSON with a trailing newline.
    pub fn to_json_pretty(&self) -> GenResult<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAVED: &str = r#"{
        "rootOptions": {
            "pools": ["AaveV3Ethereum"],
            "title": "weETH cap reduce",
            "shortName": "WeETHCapReduce",
            "date": "20250114",
            "author": "BGD Labs",
            "discussion": ""
        },
        "poolOptions": {
            "AaveV3Ethereum": {
                "configs": {"CAPS_UPDATE": [{"asset": "weETH", "supplyCap": "", "borrowCap": "100000"}]},
                "cache": {"blockNumber": 21622225}
            }
        }
    }"#;

    #[test]
    fn test_parse_saved_config() {
        let file = ConfigFile::from_json(SAVED).unwrap();
        assert_eq!(file.root_options.short_name, "WeETHCapReduce");
        let pool = &file.pool_options[&Pool::AaveV3Ethereum];
        assert_eq!(pool.cache.block_number, 21622225);
        assert_eq!(
            pool.configs.get(Feature::CapsUpdate),
            Some(&FeatureRecords::Caps(vec![CapsUpdate {
                asset: "weETH".to_string(),
                supply_cap: String::new(),
                borrow_cap: "100000".to_string(),
            }]))
        );
    }

    #[test]
    fn test_legacy_stable_key_alias() {
        let json = SAVED.replace(
            r#""CAPS_UPDATE": [{"asset": "weETH", "supplyCap": "", "borrowCap": "100000"}]"#,
            r#""STABLE_PRICE_CAP_UPDATE": [{"asset": "WETH", "priceCap": "30"}]"#,
        );
        let file = ConfigFile::from_json(&json).unwrap();
        let configs = &file.pool_options[&Pool::AaveV3Ethereum].configs;
        assert_eq!(
            configs.features().collect::<Vec<_>>(),
            vec![Feature::StablecoinPriceCapUpdate]
        );
    }

    #[test]
    fn test_rejects_key_and_legacy_alias_together() {
        let json = SAVED.replace(
            r#""CAPS_UPDATE": [{"asset": "weETH", "supplyCap": "", "borrowCap": "100000"}]"#,
            r#""STABLECOIN_PRICE_CAP_UPDATE": [{"asset": "USDT", "priceCap": "108000000"}],
                "STABLE_PRICE_CAP_UPDATE": [{"asset": "WETH", "priceCap": "30"}]"#,
        );
        let err = ConfigFile::from_json(&json).unwrap_err();
        assert!(matches!(err, GenError::InvalidConfig(_)));
        assert!(err.to_string().contains("duplicate feature key STABLECOIN_PRICE_CAP_UPDATE"));
    }

    #[test]
    fn test_retaining_keeps_untargeted_pools() {
        let file = ConfigFile::from_json(SAVED).unwrap();
        let mut options = file.root_options.clone();
        options.pools = vec![Pool::AaveV3Polygon];
        let mut pool_configs = PoolConfigs::new();
        pool_configs.insert(Pool::AaveV3Polygon, PoolConfig::new(PoolCache { block_number: 1 }));

        let rewritten = ConfigFile::new(&options, &pool_configs).retaining(&file.pool_options);
        assert_eq!(
            rewritten.pool_options.keys().copied().collect::<Vec<_>>(),
            vec![Pool::AaveV3Ethereum, Pool::AaveV3Polygon]
        );
        assert_eq!(
            rewritten.pool_options[&Pool::AaveV3Ethereum],
            file.pool_options[&Pool::AaveV3Ethereum]
        );
        assert_eq!(rewritten.pool_options[&Pool::AaveV3Polygon].cache.block_number, 1);
    }

    #[test]
    fn test_rejects_unknown_feature_key() {
        let json = SAVED.replace("CAPS_UPDATE", "BORROW_UPDATE");
        let err = ConfigFile::from_json(&json).unwrap_err();
        assert!(matches!(err, GenError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_unknown_record_field() {
        let json = SAVED.replace("\"borrowCap\"", "\"borrowKap\"");
        assert!(ConfigFile::from_json(&json).is_err());
    }

    #[test]
    fn test_rejects_malformed_number() {
        let json = SAVED.replace("\"100000\"", "\"lots\"");
        let err = ConfigFile::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("borrowCap"));
    }

    #[test]
    fn test_rejects_missing_required_field() {
        let json = SAVED.replace(
            r#""CAPS_UPDATE": [{"asset": "weETH", "supplyCap": "", "borrowCap": "100000"}]"#,
            r#""STABLECOIN_PRICE_CAP_UPDATE": [{"asset": "WETH", "priceCap": ""}]"#,
        );
        assert!(ConfigFile::from_json(&json).is_err());
    }

    #[test]
    fn test_rejects_unknown_pool() {
        let json = SAVED.replace("\"AaveV3Ethereum\": {", "\"AaveV2Ethereum\": {");
        assert!(ConfigFile::from_json(&json).is_err());
    }

    #[test]
    fn test_configs_iterate_in_registry_order() {
        let mut configs = FeatureConfigs::default();
        configs.insert(FeatureRecords::EModes(vec![]));
        configs.insert(FeatureRecords::Caps(vec![]));
        configs.insert(FeatureRecords::Rates(vec![]));
        assert_eq!(
            configs.features().collect::<Vec<_>>(),
            vec![Feature::RateUpdateV3, Feature::CapsUpdate, Feature::EModesUpdate]
        );
    }

    #[test]
    fn test_insert_overwrites_same_feature() {
        let mut configs = FeatureConfigs::default();
        configs.insert(FeatureRecords::Caps(vec![]));
        let previous = configs.insert(FeatureRecords::Caps(vec![CapsUpdate {
            asset: "WETH".to_string(),
            supply_cap: "1".to_string(),
            borrow_cap: String::new(),
        }]));
        assert_eq!(previous, Some(FeatureRecords::Caps(vec![])));
        assert_eq!(configs.len(), 1);
        assert_eq!(configs.get(Feature::CapsUpdate).map(FeatureRecords::len), Some(1));
    }

    #[test]
    fn test_config_file_excludes_artifacts() {
        let file = ConfigFile::from_json(SAVED).unwrap();
        let mut pool_configs = PoolConfigs::new();
        let mut pool = PoolConfig::new(PoolCache { block_number: 21622225 });
        pool.configs = file.pool_options[&Pool::AaveV3Ethereum].configs.clone();
        pool.artifacts.push(CodeArtifact::function("function x() {}".to_string()));
        pool_configs.insert(Pool::AaveV3Ethereum, pool);

        let json = ConfigFile::new(&file.root_options, &pool_configs)
            .to_json_pretty()
            .unwrap();
        assert!(!json.contains("artifacts"));
        assert_eq!(ConfigFile::from_json(&json).unwrap(), file);
    }

    #[test]
    fn test_emode_category_forms() {
        let json = r#"[{"eModeCategory": 1, "label": ""}, {"eModeCategory": "AaveV3EthereumEModes.ETH_CORRELATED"}]"#;
        let records =
            FeatureRecords::from_value(Feature::EModesUpdate, serde_json::from_str(json).unwrap()).unwrap();
        match records {
            FeatureRecords::EModes(updates) => {
                assert_eq!(updates[0].e_mode_category.to_string(), "1");
                assert_eq!(
                    updates[1].e_mode_category.to_string(),
                    "AaveV3EthereumEModes.ETH_CORRELATED"
                );
                assert_eq!(updates[1].ltv, "");
            }
            other => panic!("unexpected records: {:?}", other),
        }
    }
}
