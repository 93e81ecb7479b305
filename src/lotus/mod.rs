// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
use async_trait::async_trait;

use crate::error::LotusError;
use crate::lotus::message::DealOnChainStatus;

pub mod client;
pub mod message;

/// The chain height, used as the logical clock of the network.
pub type ChainEpoch = i64;

/// Returned by [`LotusClient::get_current_epoch`] when the height could not be obtained.
pub const UNKNOWN_EPOCH: ChainEpoch = -1;

/// The Lotus node and miner operations used by a storage provider.
///
/// Each operation comes in two flavours. The typed methods return a [`LotusError`] on failure.
/// The `get_*`/`import_*` methods collapse failures into the sentinel values existing callers
/// check for: an empty string, [`UNKNOWN_EPOCH`], or the error message of an import.
#[async_trait]
pub trait LotusClient: Send + Sync {
    /// Resolves a numeric deal state code to its label, e.g. `StorageDealActive`.
    /// See: https://lotus.filecoin.io/reference/lotus/client/#clientgetdealstatus
    async fn client_get_deal_status(&self, state: i64) -> Result<String, LotusError>;

    /// Fetches the on-chain state of a deal and resolves its status label.
    /// See: https://lotus.filecoin.io/reference/lotus/client/#clientgetdealinfo
    async fn client_get_deal_info(&self, deal_cid: &str) -> Result<DealOnChainStatus, LotusError>;

    /// Returns the height of the current chain head.
    async fn chain_head_height(&self) -> Result<ChainEpoch, LotusError>;

    /// Asks the miner to import `file_path` as the data of the deal.
    async fn market_import_deal_data(
        &self,
        deal_cid: &str,
        file_path: &str,
    ) -> Result<(), LotusError>;

    /// Like [`LotusClient::client_get_deal_status`], returning an empty string on failure.
    async fn get_deal_status_label(&self, state: i64) -> String {
        self.client_get_deal_status(state).await.unwrap_or_default()
    }

    /// Like [`LotusClient::client_get_deal_info`], returning `("", "")` on failure.
    async fn get_deal_on_chain_status(&self, deal_cid: &str) -> (String, String) {
        match self.client_get_deal_info(deal_cid).await {
            Ok(DealOnChainStatus { status, message }) => (status, message),
            Err(_) => (String::new(), String::new()),
        }
    }

    async fn get_current_epoch(&self) -> ChainEpoch {
        self.chain_head_height().await.unwrap_or(UNKNOWN_EPOCH)
    }

    /// Imports deal data and returns an empty string on success. Otherwise returns `no return`
    /// when the miner did not answer, or `Error code:<code> message:<message>`.
    ///
    /// A body that is not JSON carries no `error` object, so it counts as success here.
    async fn import_deal_data(&self, deal_cid: &str, file_path: &str) -> String {
        match self.market_import_deal_data(deal_cid, file_path).await {
            Ok(()) => String::new(),
            Err(LotusError::InvalidJson(e)) => {
                log::error!("import of deal {deal_cid} returned a non json response: {e}");
                String::new()
            }
            Err(e) => e.to_string(),
        }
    }
}
