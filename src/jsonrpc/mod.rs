// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! A minimal JSON-RPC layer: the request envelope, the positional parameters and the HTTP
//! transport that carries them.

pub mod response;


use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::error::LotusError;
use crate::lotus::message::CIDMap;

/// The JSON-RPC protocol version sent with every request.
pub const JSON_RPC_VERSION: &str = "2.0";

/// The id shared by all requests. Responses are never correlated by id since each HTTP call
/// carries exactly one request.
pub const JSON_RPC_ID: u64 = 7878;

/// A single positional parameter of a JSON-RPC request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonRpcParam {
    Scalar(i64),
    Text(String),
    /// A deal identifier, serialized as `{"/": "<cid>"}`.
    DealRef(CIDMap),
}

impl From<i64> for JsonRpcParam {
    fn from(v: i64) -> Self {
        JsonRpcParam::Scalar(v)
    }
}

impl From<&str> for JsonRpcParam {
    fn from(v: &str) -> Self {
        JsonRpcParam::Text(v.to_string())
    }
}

impl From<CIDMap> for JsonRpcParam {
    fn from(v: CIDMap) -> Self {
        JsonRpcParam::DealRef(v)
    }
}

/// The JSON-RPC request envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: Vec<JsonRpcParam>,
    pub id: u64,
}

impl JsonRpcRequest {
    pub fn new(method: &'static str, params: Vec<JsonRpcParam>) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION,
            method,
            params,
            id: JSON_RPC_ID,
        }
    }
}

/// The HTTP capability used to deliver a request. Implementations return the raw response body.
///
/// When `bearer_token` is set the request carries an `Authorization: Bearer` header.
#[async_trait]
pub trait JsonRpcTransport: Send + Sync {
    async fn post(
        &self,
        url: &str,
        bearer_token: Option<&str>,
        request: &JsonRpcRequest,
    ) -> Result<String, LotusError>;
}

/// The [`reqwest`] based [`JsonRpcTransport`].
#[derive(Default, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl JsonRpcTransport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        bearer_token: Option<&str>,
        request: &JsonRpcRequest,
    ) -> Result<String, LotusError> {
        // `json` also sets the `application/json` content type
        let mut builder = self.http_client.post(url).json(request);

        if let Some(token) = bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        log::trace!("{} responded with status {}", url, response.status());

        let response_body = response.text().await?;
        Ok(response_body)
    }
}
