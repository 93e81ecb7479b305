// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
mod cli;

#[tokio::main]
async fn main() {
    env_logger::init();
    cli::cli().await;
}
