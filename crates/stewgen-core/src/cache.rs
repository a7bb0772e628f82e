//! Deterministic per-pool cache.
//!
//! The block number is fetched once, when a pool is first configured, and
//! stored in the config document. Replays reuse the stored value and never
//! touch the network.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::config::PoolCache;
use crate::error::{GenError, GenResult};
use crate::pool::{Chain, Pool};

/// Source of the latest block number for a chain.
#[async_trait]
pub trait BlockNumberSource: Send + Sync {
    async fn block_number(&self, chain: Chain) -> GenResult<u64>;
}

/// Fetch and freeze the cache for `pool`.
pub async fn generate_pool_cache(source: &dyn BlockNumberSource, pool: Pool) -> GenResult<PoolCache> {
    let chain = pool.chain();
    chain.require_chain_id()?;
    let block_number = source.block_number(chain).await?;
    info!(pool = %pool, block_number, "Pinned block number");
    Ok(PoolCache { block_number })
}

/// JSON-RPC backed block number source.
///
/// Endpoints come from `RPC_<ALIAS>` environment variables
/// (`RPC_MAINNET`, `RPC_POLYGON`, ...) unless set explicitly.
#[derive(Clone, Default)]
pub struct RpcBlockNumbers {
    client: reqwest::Client,
    endpoints: HashMap<String, String>,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<String>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

impl RpcBlockNumbers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `url` for `chain` instead of the environment.
    pub fn with_endpoint(mut self, chain: Chain, url: &str) -> Self {
        self.endpoints.insert(chain.alias(), url.to_string());
        self
    }

    /// Name of the environment variable consulted for `chain`.
    pub fn env_var(chain: Chain) -> String {
        format!("RPC_{}", chain.alias().to_uppercase())
    }

    fn endpoint(&self, chain: Chain) -> GenResult<String> {
        if let Some(url) = self.endpoints.get(&chain.alias()) {
            return Ok(url.clone());
        }
        let var = Self::env_var(chain);
        std::env::var(&var)
            .map_err(|_| GenError::Config(format!("no RPC endpoint for {}: set {}", chain, var)))
    }
}

#[async_trait]
impl BlockNumberSource for RpcBlockNumbers {
    async fn block_number(&self, chain: Chain) -> GenResult<u64> {
        let url = self.endpoint(chain)?;
        debug!(chain = %chain, "Requesting eth_blockNumber");

        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "eth_blockNumber",
            "params": []
        });
        let response: RpcResponse = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GenError::Rpc(format!("{}: {}", chain, e)))?
            .error_for_status()
            .map_err(|e| GenError::Rpc(format!("{}: {}", chain, e)))?
            .json()
            .await
            .map_err(|e| GenError::Rpc(format!("{}: {}", chain, e)))?;

        if let Some(err) = response.error {
            return Err(GenError::Rpc(format!("{}: {} ({})", chain, err.message, err.code)));
        }
        let hex = response
            .result
            .ok_or_else(|| GenError::Rpc(format!("{}: empty response", chain)))?;
        parse_quantity(&hex)
    }
}

/// Parse a JSON-RPC hex quantity (`0x14a1f51`).
pub fn parse_quantity(hex: &str) -> GenResult<u64> {
    let digits = hex
        .strip_prefix("0x")
        .ok_or_else(|| GenError::Rpc(format!("not a hex quantity: {}", hex)))?;
    u64::from_str_radix(digits, 16).map_err(|e| GenError::Rpc(format!("bad quantity {}: {}", hex, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedBlockNumbers;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0x14a1f51").unwrap(), 21634897);
        assert_eq!(parse_quantity("0x0").unwrap(), 0);
        assert!(parse_quantity("14a1f51").is_err());
        assert!(parse_quantity("0xzz").is_err());
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(RpcBlockNumbers::env_var(Chain::Ethereum), "RPC_MAINNET");
        assert_eq!(RpcBlockNumbers::env_var(Chain::ZkSync), "RPC_ZKSYNC");
    }

    #[test]
    fn test_explicit_endpoint_wins() {
        let rpc = RpcBlockNumbers::new().with_endpoint(Chain::Polygon, "http://localhost:8545");
        assert_eq!(rpc.endpoint(Chain::Polygon).unwrap(), "http://localhost:8545");
    }

    #[tokio::test]
    async fn test_generate_pool_cache_queries_pool_chain() {
        let source = FixedBlockNumbers::new(42);
        let cache = generate_pool_cache(&source, Pool::AaveV3EthereumLido).await.unwrap();
        assert_eq!(cache, PoolCache { block_number: 42 });
        assert_eq!(source.calls(), vec![Chain::Ethereum]);
    }
}
