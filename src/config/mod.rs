// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Provides a simple way of reading configuration files.
//!
//! Reads a TOML config file and deserializes it in a type-safe way into a [`Config`] struct.
//! The endpoints and token are kept as plain strings; a malformed URL surfaces only when a
//! request is sent to it.


use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// The default location of the config file.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// The top-level struct representing the config. Calls to [`Config::from_file`] deserialize into
/// this struct.
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub lotus: LotusConfig,
}

/// The `[lotus]` section: where the node and miner APIs live.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LotusConfig {
    /// The node API, used for chain and deal queries.
    #[serde(default)]
    pub api_url: String,
    /// The miner API, used for importing deal data.
    #[serde(default)]
    pub miner_api_url: String,
    /// Sent as a bearer token with every request to the miner API.
    #[serde(default)]
    pub miner_access_token: String,
}

impl Config {
    /// Reads a TOML configuration in the `s` string and returns a [`Config`] struct.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config = toml::from_str(s)?;
        Ok(config)
    }

    /// Reads a TOML configuration file specified in the `path` and returns a [`Config`] struct.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = Config::from_toml_str(contents.as_str())?;
        Ok(config)
    }
}
