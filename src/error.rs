// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
use thiserror::Error;

/// The error enum returned by the Lotus JSON-RPC operations.
#[derive(Debug, Error)]
pub enum LotusError {
    /// The endpoint returned nothing, either because the HTTP call failed or the body was empty.
    #[error("no return")]
    NoResponse,
    /// The HTTP request could not be completed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid json response: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("missing field `{0}` in response")]
    MissingField(&'static str),
    #[error("field `{field}` is not {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
    /// The node answered with a top-level `error` object.
    #[error("Error code:{code} message:{message}")]
    Rpc { code: i64, message: String },
}
