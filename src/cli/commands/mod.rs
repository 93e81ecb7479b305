// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! The module that contains all the CLI commands, one per Lotus operation.

mod deal_info;
mod deal_status;
mod epoch;
mod import;

use clap::{Parser, Subcommand};

use crate::cli::{CommandLineHandler, GlobalArguments};

use self::deal_info::{DealInfo, DealInfoArgs};
use self::deal_status::{DealStatus, DealStatusArgs};
use self::epoch::{Epoch, EpochArgs};
use self::import::{ImportDealData, ImportDealDataArgs};

/// The collection of all subcommands to be called, see clap's documentation for usage. Internal
/// to the current mode. Register a new command accordingly.
#[derive(Debug, Subcommand)]
enum Commands {
    DealStatus(DealStatusArgs),
    DealInfo(DealInfoArgs),
    Epoch(EpochArgs),
    Import(ImportDealDataArgs),
}

/// The overall command line struct to be used by `clap`.
#[derive(Debug, Parser)]
#[command(
    name = "lotus-client",
    about = "Queries and drives a Lotus node and its miner",
    version = "v0.1.0"
)]
#[command(propagate_version = true)]
struct LotusClientCommands {
    #[command(flatten)]
    global_params: GlobalArguments,

    #[command(subcommand)]
    command: Commands,
}

/// The `cli` method exposed to handle all the cli commands, ideally from main.
pub async fn cli() {
    // parse the arguments
    let args = LotusClientCommands::parse();

    let global = &args.global_params;
    let r = match &args.command {
        Commands::DealStatus(args) => DealStatus::handle(global, args).await,
        Commands::DealInfo(args) => DealInfo::handle(global, args).await,
        Commands::Epoch(args) => Epoch::handle(global, args).await,
        Commands::Import(args) => ImportDealData::handle(global, args).await,
    };

    if let Err(e) = r {
        log::error!(
            "process command: {:?} failed due to error: {:?}",
            args.command,
            e
        )
    }
}
