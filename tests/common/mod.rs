#![allow(dead_code)]

use anyhow::{bail, Result};
use async_trait::async_trait;
use ethers::types::U256;
use std::sync::{Arc, Mutex};
use xoxno_market_client::{
    types::{ContractCall, Field, Sender, TypedValue},
    Config, MarketplaceClient, QueryRunner,
};

pub const MARKETPLACE: &str = "erd1qqqqqqqqqqqqqpgqmarket000000000000000000000000000000000000";
pub const SENDER: &str = "erd1sender00000000000000000000000000000000000000000000000000";
pub const OWNER: &str = "erd1owner000000000000000000000000000000000000000000000000000";
pub const CHAIN_ID: &str = "D";

struct Response {
    function: String,
    args: Option<Vec<TypedValue>>,
    value: Option<TypedValue>,
}

/// Query runner answering from canned responses and recording every call.
#[derive(Clone, Default)]
pub struct MockQueryRunner {
    responses: Arc<Mutex<Vec<Response>>>,
    failing: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<ContractCall>>>,
}

impl MockQueryRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every call to `function` with `value`.
    pub fn respond(&self, function: &str, value: TypedValue) {
        self.push(function, None, Some(value));
    }

    pub fn respond_with_args(&self, function: &str, args: Vec<TypedValue>, value: TypedValue) {
        self.push(function, Some(args), Some(value));
    }

    pub fn fail_on(&self, function: &str) {
        self.failing.lock().unwrap().push(function.to_string());
    }

    fn push(&self, function: &str, args: Option<Vec<TypedValue>>, value: Option<TypedValue>) {
        self.responses.lock().unwrap().push(Response {
            function: function.to_string(),
            args,
            value,
        });
    }

    pub fn calls(&self) -> Vec<ContractCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, function: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.function == function)
            .count()
    }
}

#[async_trait]
impl QueryRunner for MockQueryRunner {
    async fn run_query(&self, call: &ContractCall) -> Result<Option<TypedValue>> {
        self.calls.lock().unwrap().push(call.clone());

        if self.failing.lock().unwrap().contains(&call.function) {
            bail!("gateway unavailable for {}", call.function);
        }

        let responses = self.responses.lock().unwrap();
        let value = responses
            .iter()
            .find(|r| {
                r.function == call.function
                    && r.args.as_ref().map_or(true, |args| *args == call.args)
            })
            .and_then(|r| r.value.clone());

        Ok(value)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn client(runner: MockQueryRunner) -> MarketplaceClient<MockQueryRunner> {
    init_logger();
    MarketplaceClient::new(&Config::new(CHAIN_ID, MARKETPLACE), runner)
}

pub fn sender() -> Sender {
    Sender::new(SENDER)
}

/// `whole * 10^18`
pub fn egld(whole: u64) -> U256 {
    U256::from(whole) * U256::exp10(18)
}

pub fn auction_enum(name: &str, discriminant: u8) -> TypedValue {
    TypedValue::Enum {
        name: name.to_string(),
        discriminant,
    }
}

pub struct AuctionFixture {
    pub auction_type: (&'static str, u8),
    pub payment_token: &'static str,
    pub payment_nonce: u64,
    pub min_bid: U256,
    pub max_bid: Option<U256>,
    pub quantity: u64,
}

impl Default for AuctionFixture {
    fn default() -> Self {
        AuctionFixture {
            auction_type: ("NftBid", 4),
            payment_token: "EGLD",
            payment_nonce: 0,
            min_bid: egld(1),
            max_bid: Some(egld(5)),
            quantity: 1,
        }
    }
}

impl AuctionFixture {
    /// `getFullAuctionData` answer, wrapped in an Option as the view returns it.
    pub fn record(&self) -> TypedValue {
        let (name, discriminant) = self.auction_type;
        TypedValue::optional(Some(TypedValue::record(
            "Auction",
            vec![
                Field::new("auctioned_token_type", TypedValue::token("EAPES-8f3c1f")),
                Field::new("auctioned_token_nonce", TypedValue::U64(10)),
                Field::new("nr_auctioned_tokens", TypedValue::BigUint(self.quantity.into())),
                Field::new("auction_type", auction_enum(name, discriminant)),
                Field::new("payment_token_type", TypedValue::token(self.payment_token)),
                Field::new("payment_token_nonce", TypedValue::U64(self.payment_nonce)),
                Field::new("min_bid", TypedValue::BigUint(self.min_bid)),
                Field::new(
                    "max_bid",
                    TypedValue::optional(self.max_bid.map(TypedValue::BigUint)),
                ),
                Field::new("start_time", TypedValue::U64(1_700_000_000)),
                Field::new("deadline", TypedValue::U64(1_800_000_000)),
                Field::new("original_owner", TypedValue::address(OWNER)),
                Field::new("current_bid", TypedValue::BigUint(U256::zero())),
                Field::new("current_winner", TypedValue::address(SENDER)),
                Field::new("marketplace_cut_percentage", TypedValue::BigUint(200u64.into())),
                Field::new("creator_royalties_percentage", TypedValue::BigUint(500u64.into())),
            ],
        )))
    }
}

pub fn global_offer_record(
    offer_id: u64,
    price: U256,
    new_version: bool,
    attributes: Option<&str>,
) -> TypedValue {
    TypedValue::optional(Some(TypedValue::record(
        "GlobalOffer",
        vec![
            Field::new("offer_id", TypedValue::U64(offer_id)),
            Field::new("collection", TypedValue::token("EAPES-8f3c1f")),
            Field::new("quantity", TypedValue::BigUint(1u64.into())),
            Field::new("payment_token", TypedValue::token("EGLD")),
            Field::new("payment_nonce", TypedValue::U64(0)),
            Field::new("price", TypedValue::BigUint(price)),
            Field::new("timestamp", TypedValue::U64(1_700_000_000)),
            Field::new("owner", TypedValue::address(OWNER)),
            Field::new(
                "attributes",
                TypedValue::optional(attributes.map(|a| TypedValue::Bytes(a.as_bytes().to_vec()))),
            ),
            Field::new("new_version", TypedValue::Bool(new_version)),
        ],
    )))
}
