use super::{global_offer::Attribute, market::Marketplace};
use crate::{
    constants::{DEFAULT_DECIMALS, NATIVE_TOKEN},
    types::{Field, NftTransfer, Payment, TypedValue},
};
use ethers::types::U256;
use serde::{Deserialize, Serialize};

fn default_decimals() -> u32 {
    DEFAULT_DECIMALS
}

fn native_token() -> String {
    NATIVE_TOKEN.to_string()
}

/// A bid on a single auction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidRequest {
    pub auction_id: u64,
    pub collection: String,
    pub nonce: u64,
    #[serde(default = "native_token")]
    pub token: String,
    #[serde(default = "default_decimals")]
    pub decimals: u32,
    pub payment_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkBuyItem {
    pub auction_id: u64,
    pub collection: String,
    pub nonce: u64,
    pub quantity: u64,
}

impl BulkBuyItem {
    pub fn to_record(&self) -> TypedValue {
        TypedValue::record(
            "BulkBuy",
            vec![
                Field::new("auction_id", TypedValue::U64(self.auction_id)),
                Field::new("collection", TypedValue::token(&self.collection)),
                Field::new("nonce", TypedValue::U64(self.nonce)),
                Field::new("quantity", TypedValue::big_uint(U256::from(self.quantity))),
            ],
        )
    }
}

/// Several purchases paid with one payment of `payment_amount` in total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkBuyRequest {
    pub items: Vec<BulkBuyItem>,
    #[serde(default = "native_token")]
    pub token: String,
    #[serde(default = "default_decimals")]
    pub decimals: u32,
    pub payment_amount: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Purchase {
    Buy { quantity: u64 },
    Bid,
}

impl Purchase {
    pub fn quantity(&self) -> u64 {
        match self {
            Purchase::Buy { quantity } => *quantity,
            Purchase::Bid => 1,
        }
    }
}

/// Buy or bid on an auction by id. Anything left out is read from the live
/// auction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyAuctionRequest {
    pub auction_id: u64,
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default)]
    pub nonce: Option<u64>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub payment_amount: Option<f64>,
    pub purchase: Purchase,
    #[serde(default)]
    pub with_check: bool,
    #[serde(default)]
    pub market: Marketplace,
}

impl BuyAuctionRequest {
    pub fn new(auction_id: u64, purchase: Purchase) -> BuyAuctionRequest {
        BuyAuctionRequest {
            auction_id,
            collection: None,
            nonce: None,
            token: None,
            payment_amount: None,
            purchase,
            with_check: false,
            market: Marketplace::default(),
        }
    }

    /// whether the caller left anything the live auction has to fill in
    pub fn needs_live_auction(&self) -> bool {
        self.with_check
            || self.payment_amount.is_none()
            || self.token.is_none()
            || self.collection.is_none()
            || self.nonce.is_none()
    }
}

/// An offer for one specific token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendOffer {
    pub payment: Payment,
    pub nft: NftTransfer,
    #[serde(default)]
    pub deadline: u64,
}

/// A standing offer for any token of a collection matching `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendGlobalOffer {
    /// price of one token
    pub price: Payment,
    pub collection: String,
    #[serde(default = "one")]
    pub quantity: u64,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// funds locked with the offer
    #[serde(default)]
    pub deposit: Option<Payment>,
}

fn one() -> u64 {
    1
}

/// Accepting a global offer either with a token from the wallet or with one
/// already listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum AcceptGlobalOffer {
    FromWallet { offer_id: u64, nft: NftTransfer },
    FromListing { offer_id: u64, auction_id: u64 },
}

impl AcceptGlobalOffer {
    pub fn offer_id(&self) -> u64 {
        match self {
            AcceptGlobalOffer::FromWallet { offer_id, .. } => *offer_id,
            AcceptGlobalOffer::FromListing { offer_id, .. } => *offer_id,
        }
    }
}
