use crate::{
    constants::{ONE_DAY, PERCENTAGE_BASE},
    error::{MarketError, MarketResult},
    marketplace::Amount,
    math::to_amount,
    types::TypedValue,
};
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize)]
pub enum AuctionType {
    None,
    Nft,
    SftAll,
    SftOnePerPayment,
    NftBid,
}

impl FromStr for AuctionType {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(Self::None),
            "Nft" => Ok(Self::Nft),
            "SftAll" => Ok(Self::SftAll),
            "SftOnePerPayment" => Ok(Self::SftOnePerPayment),
            "NftBid" => Ok(Self::NftBid),
            _ => Err(MarketError::Decode(format!("unknown auction type `{s}`"))),
        }
    }
}

impl Display for AuctionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AuctionType::None => write!(f, "None"),
            AuctionType::Nft => write!(f, "Nft"),
            AuctionType::SftAll => write!(f, "SftAll"),
            AuctionType::SftOnePerPayment => write!(f, "SftOnePerPayment"),
            AuctionType::NftBid => write!(f, "NftBid"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Auction {
    pub auction_id: u64,
    pub collection: String,
    pub nonce: u64,
    pub quantity: u64,
    pub auction_type: AuctionType,
    pub payment_token: String,
    pub payment_nonce: u64,
    pub min_bid: Amount,
    pub max_bid: Option<Amount>,
    pub start_time: u64, // unix timestamp in seconds
    pub deadline: u64,   // 0 when the listing never expires
    pub original_owner: String,
    pub current_bid: Amount,
    pub current_winner: String,
    pub marketplace_cut_percentage: u64, // basis points
    pub creator_royalties_percentage: u64,
}

impl Display for Auction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // EXAMPLE
        // #42 | EAPES-8f3c1f-0a | Nft | 12.5000 EGLD
        write!(
            f,
            "#{} | {}-{:02x} | {} | {:.4} {}",
            self.auction_id,
            self.collection,
            self.nonce,
            self.auction_type,
            self.min_bid.display,
            self.payment_token
        )
    }
}

impl Auction {
    /// Builds an auction from a `getFullAuctionData` record. Monetary fields
    /// are rescaled with `decimals`.
    pub fn decode(auction_id: u64, value: &TypedValue, decimals: u32) -> MarketResult<Auction> {
        let max_bid = match value.optional_field("max_bid")? {
            Some(max_bid) => Some(to_amount(max_bid.as_big_uint()?, decimals)?),
            None => None,
        };

        Ok(Auction {
            auction_id,
            collection: value.field("auctioned_token_type")?.as_string()?,
            nonce: value.field("auctioned_token_nonce")?.as_u64()?,
            quantity: value.field("nr_auctioned_tokens")?.as_u64()?,
            auction_type: value.field("auction_type")?.as_enum_name()?.parse()?,
            payment_token: value.field("payment_token_type")?.as_string()?,
            payment_nonce: value.field("payment_token_nonce")?.as_u64()?,
            min_bid: to_amount(value.field("min_bid")?.as_big_uint()?, decimals)?,
            max_bid,
            start_time: value.field("start_time")?.as_u64()?,
            deadline: value.field("deadline")?.as_u64()?,
            original_owner: value.field("original_owner")?.as_string()?,
            current_bid: to_amount(value.field("current_bid")?.as_big_uint()?, decimals)?,
            current_winner: value.field("current_winner")?.as_string()?,
            marketplace_cut_percentage: value.field("marketplace_cut_percentage")?.as_u64()?,
            creator_royalties_percentage: value.field("creator_royalties_percentage")?.as_u64()?,
        })
    }

    pub fn has_deadline(&self) -> bool {
        self.deadline != 0
    }

    pub fn deadline_at(&self) -> Option<DateTime<Utc>> {
        if !self.has_deadline() {
            return None;
        }
        Utc.timestamp_opt(self.deadline as i64, 0).single()
    }

    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.has_deadline() && now.timestamp() >= self.deadline as i64
    }

    // ends within the 24 hours following `now`
    pub fn is_ending_soon(&self, now: DateTime<Utc>) -> bool {
        let now = now.timestamp().max(0) as u64;
        self.has_deadline() && now < self.deadline && self.deadline - now <= ONE_DAY
    }

    pub fn is_owned_by(&self, address: &str) -> bool {
        self.original_owner == address
    }

    pub fn is_winning(&self, address: &str) -> bool {
        self.current_winner == address
    }

    /// share of a sale kept by the marketplace and the creator, in `0.0..=1.0`
    pub fn fees_ratio(&self) -> f64 {
        (self.marketplace_cut_percentage + self.creator_royalties_percentage) as f64
            / PERCENTAGE_BASE as f64
    }
}
