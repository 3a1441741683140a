use crate::{
    constants::{DEFAULT_DECIMALS, NATIVE_TOKEN},
    error::MarketResult,
    math::to_smallest_unit,
};
use ethers::types::U256;
use serde::{Deserialize, Serialize};

fn default_decimals() -> u32 {
    DEFAULT_DECIMALS
}

/// An amount of a payment token, in display precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub token: String,
    #[serde(default)]
    pub nonce: u64,
    #[serde(default = "default_decimals")]
    pub decimals: u32,
    pub amount: f64,
}

impl Payment {
    pub fn new(token: &str, amount: f64) -> Payment {
        Payment {
            token: token.to_string(),
            nonce: 0,
            decimals: DEFAULT_DECIMALS,
            amount,
        }
    }

    pub fn native(amount: f64) -> Payment {
        Payment::new(NATIVE_TOKEN, amount)
    }

    pub fn with_decimals(mut self, decimals: u32) -> Payment {
        self.decimals = decimals;
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Payment {
        self.nonce = nonce;
        self
    }

    pub fn is_native(&self) -> bool {
        is_native_token(&self.token)
    }

    pub fn to_smallest_unit(&self) -> MarketResult<U256> {
        to_smallest_unit(self.amount, self.decimals)
    }

    /// Token transfer carrying this payment, `None` for the native currency
    /// which travels as the transaction value instead.
    pub fn to_token_transfer(&self) -> MarketResult<Option<TokenTransfer>> {
        if self.is_native() {
            return Ok(None);
        }

        Ok(Some(TokenTransfer {
            token: self.token.clone(),
            nonce: self.nonce,
            amount: self.to_smallest_unit()?,
        }))
    }
}

pub fn is_native_token(token: &str) -> bool {
    token == NATIVE_TOKEN
}

/// A fungible, semi-fungible or non-fungible token moved along with a call.
/// The amount is always in smallest units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTransfer {
    pub token: String,
    pub nonce: u64,
    pub amount: U256,
}

impl TokenTransfer {
    pub fn fungible(token: &str, amount: U256) -> TokenTransfer {
        TokenTransfer {
            token: token.to_string(),
            nonce: 0,
            amount,
        }
    }
}

/// An NFT or SFT quantity handed to the contract as part of a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftTransfer {
    pub collection: String,
    pub nonce: u64,
    #[serde(default = "one")]
    pub quantity: u64,
}

fn one() -> u64 {
    1
}

impl NftTransfer {
    pub fn new(collection: &str, nonce: u64, quantity: u64) -> NftTransfer {
        NftTransfer {
            collection: collection.to_string(),
            nonce,
            quantity,
        }
    }
}

impl From<&NftTransfer> for TokenTransfer {
    fn from(nft: &NftTransfer) -> TokenTransfer {
        TokenTransfer {
            token: nft.collection.clone(),
            nonce: nft.nonce,
            amount: U256::from(nft.quantity),
        }
    }
}
