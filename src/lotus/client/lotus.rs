// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
use async_trait::async_trait;

use crate::error::LotusError;
use crate::jsonrpc::JsonRpcTransport;
use crate::lotus::client::LotusJsonRPCClient;
use crate::lotus::message::DealOnChainStatus;
use crate::lotus::{ChainEpoch, LotusClient};

#[async_trait]
impl<T: JsonRpcTransport> LotusClient for LotusJsonRPCClient<T> {
    async fn client_get_deal_status(&self, state: i64) -> Result<String, LotusError> {
        let r = self.client_get_deal_status_inner(state).await;
        if let Err(e) = &r {
            log::error!("failed to get deal status from {}: {e}", self.api_url());
        }
        r
    }

    async fn client_get_deal_info(&self, deal_cid: &str) -> Result<DealOnChainStatus, LotusError> {
        let (state, message) = match self.client_get_deal_info_inner(deal_cid).await {
            Ok(r) => r,
            Err(e) => {
                log::error!("failed to get deal info from {}: {e}", self.api_url());
                return Err(e);
            }
        };

        // an unresolved label leaves the status empty but still reports the message
        let status = self.get_deal_status_label(state).await;

        log::info!("deal {deal_cid} status: {status}");
        log::info!("deal {deal_cid} message: {message}");
        Ok(DealOnChainStatus { status, message })
    }

    async fn chain_head_height(&self) -> Result<ChainEpoch, LotusError> {
        let r = self.chain_head_height_inner().await;
        if let Err(e) = &r {
            log::error!("failed to get chain head height from {}: {e}", self.api_url());
        }
        r
    }

    async fn market_import_deal_data(
        &self,
        deal_cid: &str,
        file_path: &str,
    ) -> Result<(), LotusError> {
        let r = self.market_import_deal_data_inner(deal_cid, file_path).await;
        if let Err(e) = &r {
            log::error!(
                "failed to import data of deal {deal_cid} to {}: {e}",
                self.miner_api_url()
            );
        }
        r
    }
}
