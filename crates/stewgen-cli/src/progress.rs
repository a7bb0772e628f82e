//! Spinner shown while block numbers are fetched.

use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use stewgen_core::{BlockNumberSource, Chain, GenResult};

/// Wraps a block number source with a terminal spinner.
pub struct SpinnerBlockNumbers<S> {
    inner: S,
}

impl<S: BlockNumberSource> SpinnerBlockNumbers<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: BlockNumberSource> BlockNumberSource for SpinnerBlockNumbers<S> {
    async fn block_number(&self, chain: Chain) -> GenResult<u64> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Fetching latest block on {}", chain));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.inner.block_number(chain).await;
        spinner.finish_and_clear();
        result
    }
}
