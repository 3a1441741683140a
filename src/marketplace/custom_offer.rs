use crate::{error::MarketResult, marketplace::Amount, math::to_amount, types::TypedValue};
use serde::Serialize;

/// An offer on one specific token, as stored by `getCustomOffer`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomOffer {
    pub offer_id: u64,
    pub collection: String,
    pub nonce: u64,
    pub quantity: u64,
    pub payment_token: String,
    pub payment_nonce: u64,
    pub price: Amount,
    pub deadline: u64,
    pub timestamp: u64,
    pub owner: String,
    pub marketplace_cut_percentage: u64,
}

impl CustomOffer {
    pub fn decode(offer_id: u64, value: &TypedValue, decimals: u32) -> MarketResult<CustomOffer> {
        Ok(CustomOffer {
            offer_id,
            collection: value.field("token_type")?.as_string()?,
            nonce: value.field("token_nonce")?.as_u64()?,
            quantity: value.field("quantity")?.as_u64()?,
            payment_token: value.field("payment_token_type")?.as_string()?,
            payment_nonce: value.field("payment_token_nonce")?.as_u64()?,
            price: to_amount(value.field("price")?.as_big_uint()?, decimals)?,
            deadline: value.field("deadline")?.as_u64()?,
            timestamp: value.field("timestamp")?.as_u64()?,
            owner: value.field("offer_owner")?.as_string()?,
            marketplace_cut_percentage: value.field("marketplace_cut_percentage")?.as_u64()?,
        })
    }

    pub fn is_expired(&self, now: u64) -> bool {
        self.deadline != 0 && now >= self.deadline
    }
}
