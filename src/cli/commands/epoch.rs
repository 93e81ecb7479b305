// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
use async_trait::async_trait;
use clap::Args;
use swan_lotus_client::LotusClient;

use crate::cli::{CommandLineHandler, GlobalArguments};

pub(crate) struct Epoch;

#[async_trait]
impl CommandLineHandler for Epoch {
    type Arguments = EpochArgs;

    async fn handle(global: &GlobalArguments, _arguments: &Self::Arguments) -> anyhow::Result<()> {
        let client = global.lotus_client()?;
        let epoch = client.chain_head_height().await?;
        println!("{epoch}");
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Prints the current chain epoch")]
pub(crate) struct EpochArgs {}
