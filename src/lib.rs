// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! A JSON-RPC client for the Lotus node and miner APIs used by a storage provider: deal status
//! lookups, on-chain deal state, the current chain epoch and deal data imports.

pub mod config;
pub mod error;
pub mod jsonrpc;
pub mod lotus;

pub use error::LotusError;
pub use lotus::client::LotusJsonRPCClient;
pub use lotus::LotusClient;
