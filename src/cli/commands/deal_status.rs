// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Resolves a numeric deal state code to its label.

use async_trait::async_trait;
use clap::Args;
use swan_lotus_client::LotusClient;

use crate::cli::{CommandLineHandler, GlobalArguments};

pub(crate) struct DealStatus;

#[async_trait]
impl CommandLineHandler for DealStatus {
    type Arguments = DealStatusArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("get deal status with args: {:?}", arguments);

        let client = global.lotus_client()?;
        let status = client.client_get_deal_status(arguments.state).await?;
        println!("{status}");
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Prints the label of a deal state code")]
pub(crate) struct DealStatusArgs {
    #[arg(help = "The numeric deal state code")]
    pub(crate) state: i64,
}
