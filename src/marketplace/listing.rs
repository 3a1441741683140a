use crate::{
    constants::DEFAULT_DECIMALS,
    error::MarketResult,
    math::to_smallest_unit,
    types::{Field, NftTransfer, TokenTransfer, TypedValue},
};
use ethers::types::U256;
use serde::{Deserialize, Serialize};

fn default_decimals() -> u32 {
    DEFAULT_DECIMALS
}

fn one() -> u64 {
    1
}

/// A new listing. Prices are in display precision of `accepted_payment_token`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewListing {
    pub min_bid: f64,
    /// buyout price of a bid listing; fixed-price listings reuse `min_bid`
    #[serde(default)]
    pub max_bid: Option<f64>,
    #[serde(default)]
    pub deadline: u64,
    pub accepted_payment_token: String,
    #[serde(default = "default_decimals")]
    pub decimals: u32,
    #[serde(default)]
    pub bid: bool,
    #[serde(default)]
    pub sft_max_one_per_payment: bool,
    #[serde(default)]
    pub start_time: Option<u64>,
    pub collection: String,
    pub nonce: u64,
    #[serde(default = "one")]
    pub nft_amount: u64,
}

impl NewListing {
    fn max_bid(&self) -> MarketResult<U256> {
        match (self.max_bid, self.bid) {
            (Some(max_bid), _) => to_smallest_unit(max_bid, self.decimals),
            (None, false) => to_smallest_unit(self.min_bid, self.decimals),
            (None, true) => Ok(U256::zero()),
        }
    }

    /// The `BulkListing` record, fields in the order the endpoint declares.
    pub fn to_record(&self) -> MarketResult<TypedValue> {
        Ok(TypedValue::record(
            "BulkListing",
            vec![
                Field::new(
                    "min_bid",
                    TypedValue::big_uint(to_smallest_unit(self.min_bid, self.decimals)?),
                ),
                Field::new("max_bid", TypedValue::big_uint(self.max_bid()?)),
                Field::new("deadline", TypedValue::U64(self.deadline)),
                Field::new(
                    "accepted_payment_token",
                    TypedValue::token(&self.accepted_payment_token),
                ),
                Field::new("bid", TypedValue::Bool(self.bid)),
                Field::new(
                    "opt_sft_max_one_per_payment",
                    TypedValue::Bool(self.sft_max_one_per_payment),
                ),
                Field::new(
                    "opt_start_time",
                    TypedValue::optional(self.start_time.map(TypedValue::U64)),
                ),
                Field::new("collection", TypedValue::token(&self.collection)),
                Field::new("nonce", TypedValue::U64(self.nonce)),
                Field::new("nft_amount", TypedValue::big_uint(U256::from(self.nft_amount))),
            ],
        ))
    }

    /// The token handed over to the contract with the listing.
    pub fn nft(&self) -> TokenTransfer {
        TokenTransfer::from(&NftTransfer::new(
            &self.collection,
            self.nonce,
            self.nft_amount,
        ))
    }
}

/// New terms for an existing listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeListing {
    pub payment_token: String,
    #[serde(default = "default_decimals")]
    pub decimals: u32,
    pub new_price: f64,
    pub auction_id: u64,
    #[serde(default)]
    pub deadline: u64,
}

impl ChangeListing {
    /// The `BulkChangeListing` record:
    /// `payment_token_type, new_price, auction_id, deadline`.
    pub fn to_record(&self) -> MarketResult<TypedValue> {
        Ok(TypedValue::record(
            "BulkChangeListing",
            vec![
                Field::new("payment_token_type", TypedValue::token(&self.payment_token)),
                Field::new(
                    "new_price",
                    TypedValue::big_uint(to_smallest_unit(self.new_price, self.decimals)?),
                ),
                Field::new("auction_id", TypedValue::U64(self.auction_id)),
                Field::new("deadline", TypedValue::U64(self.deadline)),
            ],
        ))
    }
}
