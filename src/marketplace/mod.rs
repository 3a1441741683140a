pub mod auction;
pub mod custom_offer;
pub mod global_offer;
pub mod listing;
pub mod market;
pub mod requests;

mod buy;
mod interactions;
mod queries;

use crate::{
    constants::MAX_GAS_LIMIT,
    data_source::QueryRunner,
    error::MarketResult,
    marketplace::market::Marketplace,
    types::{ContractCall, Sender, Transaction, TransactionBuilder},
    Config,
};
use ethers::types::U256;
use log::debug;
use serde::{Serialize, Serializer};

/// A monetary value read from the chain: the raw smallest-unit integer and
/// its display-precision counterpart.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Amount {
    #[serde(serialize_with = "decimal_string")]
    pub raw: U256,
    pub display: f64,
}

fn decimal_string<S: Serializer>(raw: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(raw)
}

/// Client for the marketplace contract. Reads go through `Q`, writes come
/// back as unsigned [`Transaction`]s.
pub struct MarketplaceClient<Q> {
    contract: String,
    chain_id: String,
    max_gas_limit: u64,
    runner: Q,
}

impl<Q: QueryRunner> MarketplaceClient<Q> {
    pub fn new(config: &Config, runner: Q) -> MarketplaceClient<Q> {
        MarketplaceClient {
            contract: config.marketplace_address.clone(),
            chain_id: config.chain_id.clone(),
            max_gas_limit: config.max_gas_limit.min(MAX_GAS_LIMIT),
            runner,
        }
    }

    fn call(&self, function: &str) -> ContractCall {
        ContractCall::new(&self.contract, function)
    }

    /// Contract serving `market`. Every marketplace maps to its own contract.
    fn market_call(&self, market: Marketplace, function: &str) -> MarketResult<ContractCall> {
        match market {
            Marketplace::Xoxno => Ok(self.call(function)),
        }
    }

    fn seal(&self, builder: TransactionBuilder) -> Transaction {
        let tx = builder.build(&self.chain_id);
        debug!(
            "built {} from {} | gas: {} | value: {} | transfers: {}",
            tx.call.function,
            tx.sender,
            tx.gas_limit,
            tx.value,
            tx.token_transfers.len()
        );
        tx
    }

    fn transaction(&self, call: ContractCall, sender: &Sender) -> TransactionBuilder {
        TransactionBuilder::new(call, sender)
    }
}
