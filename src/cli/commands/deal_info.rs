// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Prints the on-chain status of a deal.

use async_trait::async_trait;
use clap::Args;
use swan_lotus_client::LotusClient;

use crate::cli::{CommandLineHandler, GlobalArguments};

pub(crate) struct DealInfo;

#[async_trait]
impl CommandLineHandler for DealInfo {
    type Arguments = DealInfoArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get deal info with args: {:?}", arguments);

        let client = global.lotus_client()?;
        let info = client.client_get_deal_info(&arguments.deal_cid).await?;
        println!("status: {}", info.status);
        println!("message: {}", info.message);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Prints the on-chain status and message of a deal")]
pub(crate) struct DealInfoArgs {
    #[arg(help = "The CID of the deal")]
    pub(crate) deal_cid: String,
}
