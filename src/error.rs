use crate::marketplace::auction::AuctionType;
use ethers::utils::ConversionError;

/// Errors surfaced by the marketplace client.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    #[error("operation not supported: {0}")]
    UnsupportedOperation(String),

    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("auction {0} not found")]
    AuctionNotFound(u64),

    #[error("global offer {0} not found")]
    GlobalOfferNotFound(u64),

    #[error("auction {auction_id} has type {auction_type} which cannot be bought by id")]
    InvalidAuctionType {
        auction_id: u64,
        auction_type: AuctionType,
    },

    #[error("could not decode query result: {0}")]
    Decode(String),

    #[error("unit conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error("amount overflow while computing {0}")]
    Overflow(&'static str),

    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

pub type MarketResult<T> = Result<T, MarketError>;
