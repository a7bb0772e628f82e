//! Read-only asset registry lookups.
//!
//! Generated contracts never embed raw addresses. Assets and oracles are
//! referenced through the address-book Solidity libraries
//! (`AaveV3EthereumAssets.WETH_ORACLE`), so the registry only needs to know
//! which symbols and eMode categories a pool lists.

use crate::pool::Pool;

/// An eMode category listed for a pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EModeInfo {
    pub id: u8,
    pub label: String,
}

impl EModeInfo {
    pub fn new(id: u8, label: &str) -> Self {
        Self { id, label: label.to_string() }
    }

    /// Constant name used by the `<Pool>EModes` library (`ETH correlated` → `ETH_CORRELATED`).
    pub fn constant_name(&self) -> String {
        let mut name = String::new();
        let mut in_separator = false;
        for c in self.label.chars() {
            if c.is_ascii_alphanumeric() {
                name.push(c.to_ascii_uppercase());
                in_separator = false;
            } else if !in_separator {
                name.push('_');
                in_separator = true;
            }
        }
        name
    }
}

/// Lookups against the per-pool asset registry.
pub trait AssetRegistry: Send + Sync {
    /// Asset symbols listed on `pool`, in display order.
    fn assets(&self, pool: Pool) -> Vec<String>;

    /// eMode categories configured on `pool`.
    fn emodes(&self, pool: Pool) -> Vec<EModeInfo>;

    /// Solidity expression for the underlying token of `asset`.
    fn underlying(&self, pool: Pool, asset: &str) -> String {
        format!("{}Assets.{}_UNDERLYING", pool, asset)
    }

    /// Solidity expression for the price oracle of `asset`.
    fn oracle(&self, pool: Pool, asset: &str) -> String {
        format!("{}Assets.{}_ORACLE", pool, asset)
    }
}

/// Built-in snapshot of the address book listings.
#[derive(Debug, Clone, Default)]
pub struct AddressBook;

impl AddressBook {
    fn symbols(pool: Pool) -> &'static [&'static str] {
        match pool {
            Pool::AaveV3Ethereum => &[
                "WETH", "wstETH", "WBTC", "USDC", "DAI", "LINK", "AAVE", "cbETH", "USDT", "rETH",
                "LUSD", "CRV", "MKR", "SNX", "BAL", "UNI", "LDO", "ENS", "FRAX", "GHO",
                "RPL", "sDAI", "STG", "KNC", "FXS", "crvUSD", "PYUSD", "weETH", "osETH", "USDe",
                "ETHx", "sUSDe", "tBTC", "cbBTC", "USDS", "rsETH", "LBTC", "eBTC", "RLUSD",
            ],
            Pool::AaveV3EthereumLido => &["WETH", "wstETH", "USDS", "USDC", "ezETH", "sUSDe", "GHO", "rsETH"],
            Pool::AaveV3EthereumEtherFi => &["weETH", "USDC", "PYUSD", "FRAX"],
            Pool::AaveV3Polygon => &[
                "DAI", "LINK", "USDC", "WBTC", "WETH", "USDT", "AAVE", "WPOL", "CRV", "SUSHI",
                "GHST", "BAL", "DPI", "EURS", "jEUR", "EURA", "miMATIC", "stMATIC", "MaticX",
                "wstETH", "USDCn",
            ],
            Pool::AaveV3Avalanche => &[
                "DAIe", "LINKe", "USDC", "WBTCe", "WETHe", "USDt", "AAVEe", "WAVAX", "sAVAX",
                "FRAX", "MAI", "BTCb", "GHO", "AUSD",
            ],
            Pool::AaveV3Optimism => &[
                "DAI", "LINK", "USDC", "WBTC", "WETH", "USDT", "AAVE", "sUSD", "OP", "wstETH",
                "LUSD", "MAI", "rETH", "USDCn",
            ],
            Pool::AaveV3Arbitrum => &[
                "DAI", "LINK", "USDC", "WBTC", "WETH", "USDT", "AAVE", "EURS", "wstETH", "MAI",
                "rETH", "LUSD", "USDCn", "FRAX", "ARB", "weETH", "GHO", "ezETH", "rsETH", "tBTC",
            ],
            Pool::AaveV3Metis => &["mDAI", "METIS", "mUSDC", "mUSDT", "WETH"],
            Pool::AaveV3Base => &[
                "WETH", "cbETH", "USDbC", "wstETH", "USDC", "weETH", "cbBTC", "ezETH", "GHO",
                "wrsETH", "LBTC", "EURC", "AAVE", "tBTC",
            ],
            Pool::AaveV3Gnosis => &["WETH", "wstETH", "GNO", "USDC", "WXDAI", "EURe", "sDAI", "USDCe", "GHO"],
            Pool::AaveV3Scroll => &["WETH", "USDC", "wstETH", "weETH", "SCR"],
            Pool::AaveV3BNB => &["Cake", "WBNB", "BTCB", "ETH", "USDC", "USDT", "FDUSD", "wstETH"],
            Pool::AaveV3ZkSync => &["USDC", "USDT", "WETH", "wstETH", "ZK", "sUSDe", "wrsETH"],
            Pool::AaveV3Linea => &["WETH", "USDC", "USDT", "WBTC", "wstETH", "ezETH", "weETH", "wrsETH"],
            Pool::AaveV3Sonic => &["WETH", "USDC", "wS", "stS"],
            Pool::AaveV3Celo => &["USDC", "USDT", "cEUR", "CELO", "cUSD", "WETH"],
        }
    }

    fn categories(pool: Pool) -> Vec<EModeInfo> {
        match pool {
            Pool::AaveV3Ethereum => vec![
                EModeInfo::new(1, "ETH correlated"),
                EModeInfo::new(2, "sUSDe Stablecoins"),
                EModeInfo::new(3, "rsETH LST main"),
                EModeInfo::new(4, "LBTC WBTC"),
            ],
            Pool::AaveV3EthereumLido => vec![
                EModeInfo::new(1, "LRT Stablecoins main"),
                EModeInfo::new(2, "LRT wstETH main"),
            ],
            Pool::AaveV3EthereumEtherFi => vec![EModeInfo::new(1, "weETH Stablecoins")],
            Pool::AaveV3Polygon
            | Pool::AaveV3Avalanche
            | Pool::AaveV3Optimism
            | Pool::AaveV3Arbitrum => vec![
                EModeInfo::new(1, "Stablecoins"),
                EModeInfo::new(2, "ETH correlated"),
            ],
            Pool::AaveV3Metis | Pool::AaveV3Celo => vec![],
            Pool::AaveV3Base
            | Pool::AaveV3Gnosis
            | Pool::AaveV3Scroll
            | Pool::AaveV3ZkSync
            | Pool::AaveV3Linea => vec![EModeInfo::new(1, "ETH correlated")],
            Pool::AaveV3BNB => vec![EModeInfo::new(1, "Stablecoins")],
            Pool::AaveV3Sonic => vec![EModeInfo::new(1, "S correlated")],
        }
    }
}

impl AssetRegistry for AddressBook {
    fn assets(&self, pool: Pool) -> Vec<String> {
        Self::symbols(pool).iter().map(|s| s.to_string()).collect()
    }

    fn emodes(&self, pool: Pool) -> Vec<EModeInfo> {
        Self::categories(pool)
    }
}
