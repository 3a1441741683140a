pub mod constants;
pub mod data_source;
pub mod error;
pub mod marketplace;
pub mod math;
pub mod types;

pub use data_source::QueryRunner;
pub use error::{MarketError, MarketResult};
pub use marketplace::MarketplaceClient;

use anyhow::Result;
use constants::{MAINNET_CHAIN_ID, MAX_GAS_LIMIT};
use serde::Deserialize;

fn default_chain_id() -> String {
    MAINNET_CHAIN_ID.to_string()
}

fn default_max_gas_limit() -> u64 {
    MAX_GAS_LIMIT
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_chain_id")]
    pub chain_id: String,
    pub marketplace_address: String,
    #[serde(default = "default_max_gas_limit")]
    pub max_gas_limit: u64,
}

impl Config {
    pub fn new(chain_id: &str, marketplace_address: &str) -> Config {
        Config {
            chain_id: chain_id.to_string(),
            marketplace_address: marketplace_address.to_string(),
            max_gas_limit: MAX_GAS_LIMIT,
        }
    }

    /// Reads `CHAIN_ID`, `MARKETPLACE_ADDRESS` and `MAX_GAS_LIMIT`, loading a
    /// `.env` file first when one exists.
    pub fn from_env() -> Result<Config> {
        dotenv::dotenv().ok();
        Ok(envy::from_env::<Config>()?)
    }
}
