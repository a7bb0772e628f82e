//! Pool and chain catalogue.
//!
//! The set of pools is closed: saved configs and CLI flags are validated
//! against it, so adding a pool is a code change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GenError, GenResult};

/// A deployment of the lending protocol on one chain.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pool {
    AaveV3Ethereum,
    AaveV3EthereumLido,
    AaveV3EthereumEtherFi,
    AaveV3Polygon,
    AaveV3Avalanche,
    AaveV3Optimism,
    AaveV3Arbitrum,
    AaveV3Metis,
    AaveV3Base,
    AaveV3Gnosis,
    AaveV3Scroll,
    AaveV3BNB,
    AaveV3ZkSync,
    AaveV3Linea,
    AaveV3Sonic,
    AaveV3Celo,
}

impl Pool {
    /// Every supported pool, in catalogue order.
    pub const ALL: [Pool; 16] = [
        Pool::AaveV3Ethereum,
        Pool::AaveV3EthereumLido,
        Pool::AaveV3EthereumEtherFi,
        Pool::AaveV3Polygon,
        Pool::AaveV3Avalanche,
        Pool::AaveV3Optimism,
        Pool::AaveV3Arbitrum,
        Pool::AaveV3Metis,
        Pool::AaveV3Base,
        Pool::AaveV3Gnosis,
        Pool::AaveV3Scroll,
        Pool::AaveV3BNB,
        Pool::AaveV3ZkSync,
        Pool::AaveV3Linea,
        Pool::AaveV3Sonic,
        Pool::AaveV3Celo,
    ];

    /// The address-book identifier of the pool.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AaveV3Ethereum => "AaveV3Ethereum",
            Self::AaveV3EthereumLido => "AaveV3EthereumLido",
            Self::AaveV3EthereumEtherFi => "AaveV3EthereumEtherFi",
            Self::AaveV3Polygon => "AaveV3Polygon",
            Self::AaveV3Avalanche => "AaveV3Avalanche",
            Self::AaveV3Optimism => "AaveV3Optimism",
            Self::AaveV3Arbitrum => "AaveV3Arbitrum",
            Self::AaveV3Metis => "AaveV3Metis",
            Self::AaveV3Base => "AaveV3Base",
            Self::AaveV3Gnosis => "AaveV3Gnosis",
            Self::AaveV3Scroll => "AaveV3Scroll",
            Self::AaveV3BNB => "AaveV3BNB",
            Self::AaveV3ZkSync => "AaveV3ZkSync",
            Self::AaveV3Linea => "AaveV3Linea",
            Self::AaveV3Sonic => "AaveV3Sonic",
            Self::AaveV3Celo => "AaveV3Celo",
        }
    }

    /// The chain the pool is deployed on.
    pub fn chain(&self) -> Chain {
        match self {
            Self::AaveV3Ethereum | Self::AaveV3EthereumLido | Self::AaveV3EthereumEtherFi => {
                Chain::Ethereum
            }
            Self::AaveV3Polygon => Chain::Polygon,
            Self::AaveV3Avalanche => Chain::Avalanche,
            Self::AaveV3Optimism => Chain::Optimism,
            Self::AaveV3Arbitrum => Chain::Arbitrum,
            Self::AaveV3Metis => Chain::Metis,
            Self::AaveV3Base => Chain::Base,
            Self::AaveV3Gnosis => Chain::Gnosis,
            Self::AaveV3Scroll => Chain::Scroll,
            Self::AaveV3BNB => Chain::BNB,
            Self::AaveV3ZkSync => Chain::ZkSync,
            Self::AaveV3Linea => Chain::Linea,
            Self::AaveV3Sonic => Chain::Sonic,
            Self::AaveV3Celo => Chain::Celo,
        }
    }

    /// Pool name without the protocol version prefix (`AaveV3EthereumLido` → `EthereumLido`).
    pub fn suffix(&self) -> &'static str {
        self.as_str().trim_start_matches("AaveV3")
    }

    /// Network name of the RiskStewards base script the payload inherits from.
    ///
    /// Base is published as `BaseChain` to avoid clashing with the word itself.
    pub fn steward_network(&self) -> &'static str {
        match self.chain() {
            Chain::Base => "BaseChain",
            chain => chain.as_str(),
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pool {
    type Err = GenError;

    fn from_str(s: &str) -> GenResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|pool| pool.as_str() == s)
            .ok_or_else(|| GenError::UnknownPool(s.to_string()))
    }
}

/// A chain the protocol may be deployed on.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    Ethereum,
    Optimism,
    Arbitrum,
    Polygon,
    Avalanche,
    Fantom,
    Harmony,
    Metis,
    Base,
    BNB,
    Gnosis,
    Scroll,
    ZkSync,
    Linea,
    Sonic,
    Celo,
    Soneium,
    Plasma,
}

impl Chain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::Optimism => "Optimism",
            Self::Arbitrum => "Arbitrum",
            Self::Polygon => "Polygon",
            Self::Avalanche => "Avalanche",
            Self::Fantom => "Fantom",
            Self::Harmony => "Harmony",
            Self::Metis => "Metis",
            Self::Base => "Base",
            Self::BNB => "BNB",
            Self::Gnosis => "Gnosis",
            Self::Scroll => "Scroll",
            Self::ZkSync => "ZkSync",
            Self::Linea => "Linea",
            Self::Sonic => "Sonic",
            Self::Celo => "Celo",
            Self::Soneium => "Soneium",
            Self::Plasma => "Plasma",
        }
    }

    /// Network alias used by the deploy scripts and RPC environment.
    pub fn alias(&self) -> String {
        match self {
            Self::Ethereum => "mainnet".to_string(),
            chain => chain.as_str().to_lowercase(),
        }
    }

    /// EVM chain id. Retired chains have none.
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            Self::Ethereum => Some(1),
            Self::Optimism => Some(10),
            Self::Arbitrum => Some(42161),
            Self::Polygon => Some(137),
            Self::Avalanche => Some(43114),
            Self::Fantom | Self::Harmony => None,
            Self::Metis => Some(1088),
            Self::Base => Some(8453),
            Self::BNB => Some(56),
            Self::Gnosis => Some(100),
            Self::Scroll => Some(534352),
            Self::ZkSync => Some(324),
            Self::Linea => Some(59144),
            Self::Sonic => Some(146),
            Self::Celo => Some(42220),
            Self::Soneium => Some(1868),
            Self::Plasma => Some(9745),
        }
    }

    /// Chain id, or a configuration error for chains without one.
    pub fn require_chain_id(&self) -> GenResult<u64> {
        self.chain_id()
            .ok_or_else(|| GenError::UnmappedChain(self.as_str().to_string()))
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
