// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Imports deal data into the miner.

use async_trait::async_trait;
use clap::Args;
use swan_lotus_client::LotusClient;

use crate::cli::{CommandLineHandler, GlobalArguments};

pub(crate) struct ImportDealData;

#[async_trait]
impl CommandLineHandler for ImportDealData {
    type Arguments = ImportDealDataArgs;

    async fn handle(global: &GlobalArguments, arguments: &Self::Arguments) -> anyhow::Result<()> {
        log::debug!("import deal data with args: {:?}", arguments);

        let client = global.lotus_client()?;
        client
            .market_import_deal_data(&arguments.deal_cid, &arguments.file_path)
            .await?;
        println!("imported {} for deal {}", arguments.file_path, arguments.deal_cid);
        Ok(())
    }
}

#[derive(Debug, Args)]
#[command(about = "Imports a local file as the data of a deal on the miner")]
pub(crate) struct ImportDealDataArgs {
    #[arg(help = "The CID of the deal")]
    pub(crate) deal_cid: String,
    #[arg(help = "The path of the deal data on the miner's filesystem")]
    pub(crate) file_path: String,
}
