// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
mod lotus;

use std::path::Path;

use serde_json::Value;

use crate::config::{Config, LotusConfig};
use crate::error::LotusError;
use crate::jsonrpc::response::{self, ERROR_FIELD, RESULT_FIELD};
use crate::jsonrpc::{JsonRpcParam, JsonRpcRequest, JsonRpcTransport, ReqwestTransport};
use crate::lotus::message::CIDMap;
use crate::lotus::ChainEpoch;

// RPC methods
pub mod methods {
    pub const CLIENT_GET_DEAL_STATUS: &str = "Filecoin.ClientGetDealStatus";
    pub const CLIENT_GET_DEAL_INFO: &str = "Filecoin.ClientGetDealInfo";
    pub const CHAIN_HEAD: &str = "Filecoin.ChainHead";
    pub const MARKET_IMPORT_DEAL_DATA: &str = "Filecoin.MarketImportDealData";
}

/// The struct implementation of [`crate::lotus::LotusClient`] over JSON-RPC. Chain and deal
/// queries go to the node API without authentication, deal data imports go to the miner API
/// with the miner's bearer token.
///
/// # Examples
/// ```no_run
/// use swan_lotus_client::config::LotusConfig;
/// use swan_lotus_client::lotus::client::LotusJsonRPCClient;
/// use swan_lotus_client::lotus::LotusClient;
///
/// #[tokio::main]
/// async fn main() {
///     let config = LotusConfig {
///         api_url: "<DEFINE YOUR URL HERE>".to_string(),
///         ..Default::default()
///     };
///     let n = LotusJsonRPCClient::new(&config);
///     println!("epoch: {}", n.get_current_epoch().await);
/// }
/// ```
pub struct LotusJsonRPCClient<T: JsonRpcTransport> {
    api_url: String,
    miner_api_url: String,
    miner_access_token: String,
    transport: T,
}

impl<T: JsonRpcTransport> LotusJsonRPCClient<T> {
    /// Creates a client that sends its requests through `transport`. The config values are not
    /// validated.
    pub fn with_transport(config: &LotusConfig, transport: T) -> Self {
        Self {
            api_url: config.api_url.clone(),
            miner_api_url: config.miner_api_url.clone(),
            miner_access_token: config.miner_access_token.clone(),
            transport,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn miner_api_url(&self) -> &str {
        &self.miner_api_url
    }

    async fn node_request(
        &self,
        method: &'static str,
        params: Vec<JsonRpcParam>,
    ) -> Result<String, LotusError> {
        self.send(&self.api_url, None, method, params).await
    }

    async fn miner_request(
        &self,
        method: &'static str,
        params: Vec<JsonRpcParam>,
    ) -> Result<String, LotusError> {
        self.send(
            &self.miner_api_url,
            Some(self.miner_access_token.as_str()),
            method,
            params,
        )
        .await
    }

    // Sends one request. A failed HTTP call and an empty body both count as no response.
    async fn send(
        &self,
        url: &str,
        bearer_token: Option<&str>,
        method: &'static str,
        params: Vec<JsonRpcParam>,
    ) -> Result<String, LotusError> {
        let request = JsonRpcRequest::new(method, params);

        let body = match self.transport.post(url, bearer_token, &request).await {
            Ok(body) => body,
            Err(e) => {
                log::error!("cannot send {method} request to {url} due to {e}");
                return Err(LotusError::NoResponse);
            }
        };
        if body.trim().is_empty() {
            return Err(LotusError::NoResponse);
        }

        log::debug!("received {method} response: {body}");
        Ok(body)
    }

    async fn client_get_deal_status_inner(&self, state: i64) -> Result<String, LotusError> {
        let body = self
            .node_request(
                methods::CLIENT_GET_DEAL_STATUS,
                vec![JsonRpcParam::Scalar(state)],
            )
            .await?;
        let label = response::get_field_str(&body, RESULT_FIELD)?;
        if label.is_empty() {
            return Err(LotusError::MissingField(RESULT_FIELD));
        }
        Ok(label)
    }

    /// Returns the raw `State` code and `Message` of the deal.
    async fn client_get_deal_info_inner(
        &self,
        deal_cid: &str,
    ) -> Result<(i64, String), LotusError> {
        let body = self
            .node_request(
                methods::CLIENT_GET_DEAL_INFO,
                vec![JsonRpcParam::DealRef(CIDMap::from(deal_cid))],
            )
            .await?;

        let result = response::get_field_map(&body, RESULT_FIELD)?;
        let state = response::map_i64(&result, "State")?;
        let message = response::map_str(&result, "Message")?;
        Ok((state, message))
    }

    async fn chain_head_height_inner(&self) -> Result<ChainEpoch, LotusError> {
        let body = self.node_request(methods::CHAIN_HEAD, vec![]).await?;

        let result = response::get_field_map(&body, RESULT_FIELD)?;
        response::map_i64(&result, "Height")
    }

    async fn market_import_deal_data_inner(
        &self,
        deal_cid: &str,
        file_path: &str,
    ) -> Result<(), LotusError> {
        let params = vec![
            JsonRpcParam::DealRef(CIDMap::from(deal_cid)),
            JsonRpcParam::Text(file_path.to_string()),
        ];
        let body = self
            .miner_request(methods::MARKET_IMPORT_DEAL_DATA, params)
            .await?;
        log::info!("received market import deal data response: {body}");

        match response::get_field(&body, ERROR_FIELD)? {
            None => Ok(()),
            Some(error) => Err(rpc_error(error)),
        }
    }
}

impl LotusJsonRPCClient<ReqwestTransport> {
    /// A constructor that returns a `LotusJsonRPCClient` sending requests over HTTP to the
    /// endpoints in `config`.
    pub fn new(config: &LotusConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::default())
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.lotus)
    }

    /// Reads the TOML config at `path` and builds the client from its `[lotus]` section.
    pub fn from_config_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = Config::from_file(path)?;
        Ok(Self::from_config(&config))
    }
}

// Converts the top-level `error` object of a response. Parts that are missing or mistyped are
// filled in so the failure still surfaces: code `0` and the raw JSON as the message. A code that
// is present but not an integer is appended to the message as received.
fn rpc_error(error: Value) -> LotusError {
    let raw = error.to_string();
    let map = response::map_from_value(error, ERROR_FIELD).unwrap_or_default();

    let mut message = response::map_str(&map, "message").unwrap_or(raw);
    let code = match response::map_i64(&map, "code") {
        Ok(code) => code,
        Err(LotusError::InvalidField { .. }) => {
            if let Some(raw_code) = map.get("code") {
                message = format!("{message} (code {raw_code})");
            }
            0
        }
        Err(_) => 0,
    };
    LotusError::Rpc { code, message }
}
