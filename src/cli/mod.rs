// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
use async_trait::async_trait;
use clap::Args;
use std::fmt::Debug;
use swan_lotus_client::config::DEFAULT_CONFIG_PATH;
use swan_lotus_client::LotusJsonRPCClient;
use swan_lotus_client::jsonrpc::ReqwestTransport;

mod commands;

pub use commands::cli;

/// The trait that represents the abstraction of a command line handler. To implement a new command
/// line operation, implement this trait and register it in `commands::Commands`.
///
/// Note that this trait does not support a stateful implementation as we assume CLI commands are all
/// constructed from scratch. Initialize the states in the `handle` method.
#[async_trait]
pub trait CommandLineHandler {
    /// Abstraction for command line operations arguments.
    ///
    /// NOTE that this parameter is used to generate the command line arguments.
    /// Currently we are directly integrating with `clap` crate.
    type Arguments: Debug + Args;

    /// Handles the request with the provided arguments.
    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()>;
}

/// The global arguments that will be shared by all cli commands.
#[derive(Debug, Args, Clone)]
pub struct GlobalArguments {
    #[arg(
        long,
        help = "The config path for the lotus client",
        env = "LOTUS_CLIENT_CONFIG",
        default_value = DEFAULT_CONFIG_PATH
    )]
    config_path: String,
}

impl GlobalArguments {
    pub fn lotus_client(&self) -> anyhow::Result<LotusJsonRPCClient<ReqwestTransport>> {
        LotusJsonRPCClient::from_config_file(&self.config_path)
    }
}
