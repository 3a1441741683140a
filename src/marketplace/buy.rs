use super::{
    auction::{Auction, AuctionType},
    requests::{BuyAuctionRequest, Purchase},
    Amount, MarketplaceClient,
};
use crate::{
    constants::{BID_GAS, BUY_GAS, DEFAULT_DECIMALS},
    data_source::QueryRunner,
    error::{MarketError, MarketResult},
    math::{scale_by_quantity, to_smallest_unit},
    types::{is_native_token, Sender, TokenTransfer, Transaction, TypedValue},
};
use log::debug;

/// Price the purchase pays per token: the buyout for a bid, the asking
/// price otherwise.
fn purchase_price(auction: &Auction, purchase: Purchase) -> Amount {
    match purchase {
        Purchase::Bid => auction.max_bid.unwrap_or(auction.min_bid),
        Purchase::Buy { .. } => auction.min_bid,
    }
}

impl<Q: QueryRunner> MarketplaceClient<Q> {
    async fn fetch_auction(&self, auction_id: u64) -> MarketResult<Auction> {
        self.auction(auction_id)
            .await?
            .ok_or(MarketError::AuctionNotFound(auction_id))
    }

    /// Auction a purchase is resolved against. Plain `Nft` and
    /// `SftOnePerPayment` listings are refused here.
    async fn live_auction(&self, auction_id: u64) -> MarketResult<Auction> {
        let auction = self.fetch_auction(auction_id).await?;

        // TODO: confirm with the contract owners whether this check should
        // refuse the bid-style kinds instead; it is kept as deployed
        if matches!(
            auction.auction_type,
            AuctionType::Nft | AuctionType::SftOnePerPayment
        ) {
            return Err(MarketError::InvalidAuctionType {
                auction_id,
                auction_type: auction.auction_type,
            });
        }

        Ok(auction)
    }

    /// Buys from, or bids on, an auction by id. Whatever the request leaves
    /// out is read from the live auction, and a fungible payment always
    /// carries the auction's exact smallest-unit price.
    pub async fn buy_auction_by_id(
        &self,
        req: &BuyAuctionRequest,
        sender: &Sender,
    ) -> MarketResult<Transaction> {
        let (function, gas) = match req.purchase {
            Purchase::Bid => ("bid", BID_GAS),
            Purchase::Buy { .. } => ("buy", BUY_GAS),
        };
        let call = self.market_call(req.market, function)?;

        let live = if req.needs_live_auction() {
            Some(self.live_auction(req.auction_id).await?)
        } else {
            None
        };

        let token = resolve(&req.token, &live, |a| a.payment_token.clone(), "token")?;
        let collection = resolve(&req.collection, &live, |a| a.collection.clone(), "collection")?;
        let nonce = resolve(&req.nonce, &live, |a| a.nonce, "nonce")?;
        let quantity = req.purchase.quantity();

        let call = call.args([
            TypedValue::U64(req.auction_id),
            TypedValue::token(&collection),
            TypedValue::U64(nonce),
        ]);
        let call = match req.purchase {
            Purchase::Buy { quantity } => call.arg(TypedValue::big_uint(quantity.into())),
            Purchase::Bid => call,
        };

        let builder = self.transaction(call, sender);
        let builder = if is_native_token(&token) {
            let unit_price = match &live {
                Some(auction) => purchase_price(auction, req.purchase).raw,
                None => {
                    let amount = req
                        .payment_amount
                        .ok_or(MarketError::MissingArgument("payment_amount"))?;
                    to_smallest_unit(amount, DEFAULT_DECIMALS)?
                }
            };
            builder.value(scale_by_quantity(unit_price, quantity)?)
        } else {
            let auction = match live {
                Some(auction) => auction,
                None => {
                    // exact price only, the listing kind is not checked here
                    debug!(
                        "fetching auction {} for the exact {} price",
                        req.auction_id, token
                    );
                    self.fetch_auction(req.auction_id).await?
                }
            };
            let unit_price = purchase_price(&auction, req.purchase).raw;

            builder.token_transfer(TokenTransfer {
                token,
                nonce: auction.payment_nonce,
                amount: scale_by_quantity(unit_price, quantity)?,
            })
        };

        Ok(self.seal(builder.gas_limit(gas)))
    }
}

/// The caller's value, else the live auction's.
fn resolve<T: Clone>(
    given: &Option<T>,
    live: &Option<Auction>,
    from_auction: impl FnOnce(&Auction) -> T,
    name: &'static str,
) -> MarketResult<T> {
    match (given, live) {
        (Some(value), _) => Ok(value.clone()),
        (None, Some(auction)) => Ok(from_auction(auction)),
        (None, None) => Err(MarketError::MissingArgument(name)),
    }
}
