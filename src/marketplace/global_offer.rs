use crate::{
    constants::{ATTRIBUTE_KEY_VALUE_SEPARATOR, ATTRIBUTE_SEPARATOR},
    error::{MarketError, MarketResult},
    marketplace::Amount,
    math::to_amount,
    types::TypedValue,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// One `trait_type:value` constraint of a global offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

impl Attribute {
    pub fn new(trait_type: &str, value: &str) -> Attribute {
        Attribute {
            trait_type: trait_type.to_string(),
            value: value.to_string(),
        }
    }
}

/// Decodes a base64 `key:value;key:value` blob. Empty segments are skipped.
pub fn decode_attributes(blob: &[u8]) -> MarketResult<Vec<Attribute>> {
    let decoded = STANDARD
        .decode(blob)
        .map_err(|e| MarketError::Decode(format!("attributes are not base64: {e}")))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|e| MarketError::Decode(format!("attributes are not utf8: {e}")))?;

    decoded
        .split(ATTRIBUTE_SEPARATOR)
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| match segment.split_once(ATTRIBUTE_KEY_VALUE_SEPARATOR) {
            Some((trait_type, value)) => Ok(Attribute::new(trait_type.trim(), value.trim())),
            None => Err(MarketError::Decode(format!(
                "attribute `{segment}` has no value"
            ))),
        })
        .collect()
}

pub fn encode_attributes(attributes: &[Attribute]) -> Vec<u8> {
    let joined = attributes
        .iter()
        .map(|a| format!("{}{ATTRIBUTE_KEY_VALUE_SEPARATOR}{}", a.trait_type, a.value))
        .collect::<Vec<_>>()
        .join(&ATTRIBUTE_SEPARATOR.to_string());

    STANDARD.encode(joined).into_bytes()
}

/// Where the funds backing a global offer live.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Funding {
    /// new-version offers lock the price in the contract at creation
    Escrowed,
    /// legacy offers draw on the owner's deposit
    Deposit(Amount),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalOffer {
    pub offer_id: u64,
    pub owner: String,
    pub collection: String,
    pub quantity: u64,
    pub payment_token: String,
    pub payment_nonce: u64,
    pub price: Amount,
    pub timestamp: u64,
    pub attributes: Vec<Attribute>,
    pub new_version: bool,
    pub is_active: bool,
}

/// The fields needed to look up a legacy offer's deposit before decoding it.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferFundingSource {
    pub owner: String,
    pub payment_token: String,
    pub payment_nonce: u64,
    pub new_version: bool,
}

impl OfferFundingSource {
    pub fn read(value: &TypedValue) -> MarketResult<OfferFundingSource> {
        Ok(OfferFundingSource {
            owner: value.field("owner")?.as_string()?,
            payment_token: value.field("payment_token")?.as_string()?,
            payment_nonce: value.field("payment_nonce")?.as_u64()?,
            new_version: new_version(value)?,
        })
    }
}

fn new_version(value: &TypedValue) -> MarketResult<bool> {
    Ok(value
        .optional_field("new_version")?
        .map_or(false, TypedValue::as_bool))
}

impl GlobalOffer {
    pub fn decode(
        value: &TypedValue,
        funding: Funding,
        decimals: u32,
    ) -> MarketResult<GlobalOffer> {
        let price = to_amount(value.field("price")?.as_big_uint()?, decimals)?;
        let new_version = new_version(value)?;

        let attributes = match value.optional_field("attributes")? {
            Some(blob) => decode_attributes(blob.as_bytes()?)?,
            None => Vec::new(),
        };

        let is_active = match (new_version, funding) {
            (true, _) | (false, Funding::Escrowed) => true,
            // at display precision
            (false, Funding::Deposit(balance)) => balance.display >= price.display,
        };

        Ok(GlobalOffer {
            offer_id: value.field("offer_id")?.as_u64()?,
            owner: value.field("owner")?.as_string()?,
            collection: value.field("collection")?.as_string()?,
            quantity: value.field("quantity")?.as_u64()?,
            payment_token: value.field("payment_token")?.as_string()?,
            payment_nonce: value.field("payment_nonce")?.as_u64()?,
            price,
            timestamp: value.field("timestamp")?.as_u64()?,
            attributes,
            new_version,
            is_active,
        })
    }

    pub fn matches(&self, attributes: &[Attribute]) -> bool {
        self.attributes.iter().all(|wanted| attributes.contains(wanted))
    }
}
