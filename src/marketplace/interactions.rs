use super::{
    global_offer::encode_attributes,
    listing::{ChangeListing, NewListing},
    market::Marketplace,
    requests::{AcceptGlobalOffer, BidRequest, BulkBuyRequest, SendGlobalOffer, SendOffer},
    MarketplaceClient,
};
use crate::{
    constants::*,
    data_source::QueryRunner,
    error::{MarketError, MarketResult},
    math::bulk_gas_limit,
    types::{
        NftTransfer, Payment, Sender, TokenTransfer, Transaction, TransactionBuilder, TypedValue,
    },
};

/// Attaches `payment` as the transaction value when it is the native currency,
/// as a token transfer otherwise.
fn attach_payment(
    builder: TransactionBuilder,
    payment: &Payment,
) -> MarketResult<TransactionBuilder> {
    match payment.to_token_transfer()? {
        Some(transfer) => Ok(builder.token_transfer(transfer)),
        None => Ok(builder.value(payment.to_smallest_unit()?)),
    }
}

impl<Q: QueryRunner> MarketplaceClient<Q> {
    fn bulk_gas(&self, base: u64, per_item: u64, count: usize) -> u64 {
        bulk_gas_limit(base, per_item, count, self.max_gas_limit)
    }

    /// Withdraws listings, returning the tokens to their owner.
    pub fn withdraw_auctions(
        &self,
        auction_ids: &[u64],
        sender: &Sender,
        market: Marketplace,
    ) -> MarketResult<Transaction> {
        let call = self
            .market_call(market, "withdraw")?
            .args(auction_ids.iter().copied().map(TypedValue::U64));

        let gas = self.bulk_gas(WITHDRAW_GAS, WITHDRAW_PER_ITEM_GAS, auction_ids.len());
        Ok(self.seal(self.transaction(call, sender).gas_limit(gas)))
    }

    pub fn end_auction(&self, auction_id: u64, sender: &Sender) -> Transaction {
        let call = self.call("endAuction").arg(TypedValue::U64(auction_id));
        self.seal(self.transaction(call, sender).gas_limit(END_AUCTION_GAS))
    }

    pub fn bid(&self, req: &BidRequest, sender: &Sender) -> MarketResult<Transaction> {
        let amount = req
            .payment_amount
            .ok_or(MarketError::MissingArgument("payment_amount"))?;
        let payment = Payment::new(&req.token, amount).with_decimals(req.decimals);

        let call = self.call("bid").args([
            TypedValue::U64(req.auction_id),
            TypedValue::token(&req.collection),
            TypedValue::U64(req.nonce),
        ]);

        let builder = attach_payment(self.transaction(call, sender), &payment)?;
        Ok(self.seal(builder.gas_limit(BID_GAS)))
    }

    pub fn bulk_buy(&self, req: &BulkBuyRequest, sender: &Sender) -> MarketResult<Transaction> {
        let amount = req
            .payment_amount
            .ok_or(MarketError::MissingArgument("payment_amount"))?;
        let payment = Payment::new(&req.token, amount).with_decimals(req.decimals);

        let call = self
            .call("bulkBuy")
            .args(req.items.iter().map(|item| item.to_record()));

        let builder = attach_payment(self.transaction(call, sender), &payment)?;
        let gas = self.bulk_gas(BULK_BUY_BASE_GAS, BULK_BUY_PER_ITEM_GAS, req.items.len());
        Ok(self.seal(builder.gas_limit(gas)))
    }

    /// Lists tokens; each listed token travels with the call.
    pub fn list_nfts(
        &self,
        listings: &[NewListing],
        sender: &Sender,
    ) -> MarketResult<Transaction> {
        let records = listings
            .iter()
            .map(NewListing::to_record)
            .collect::<MarketResult<Vec<_>>>()?;
        let call = self.call("listing").args(records);

        let builder = self
            .transaction(call, sender)
            .token_transfers(listings.iter().map(NewListing::nft))
            .gas_limit(self.bulk_gas(LISTING_BASE_GAS, LISTING_PER_ITEM_GAS, listings.len()));

        Ok(self.seal(builder))
    }

    pub fn change_listings(
        &self,
        listings: &[ChangeListing],
        sender: &Sender,
    ) -> MarketResult<Transaction> {
        let records = listings
            .iter()
            .map(ChangeListing::to_record)
            .collect::<MarketResult<Vec<_>>>()?;
        let call = self.call("changeListing").args(records);

        let gas = self.bulk_gas(LISTING_BASE_GAS, LISTING_PER_ITEM_GAS, listings.len());
        Ok(self.seal(self.transaction(call, sender).gas_limit(gas)))
    }

    pub fn send_custom_offer(
        &self,
        offer: &SendOffer,
        sender: &Sender,
    ) -> MarketResult<Transaction> {
        let call = self.call("sendOffer").args([
            TypedValue::token(&offer.payment.token),
            TypedValue::U64(offer.payment.nonce),
            TypedValue::big_uint(offer.payment.to_smallest_unit()?),
            TypedValue::token(&offer.nft.collection),
            TypedValue::U64(offer.nft.nonce),
            TypedValue::big_uint(offer.nft.quantity.into()),
            TypedValue::U64(offer.deadline),
        ]);

        let builder = attach_payment(self.transaction(call, sender), &offer.payment)?;
        Ok(self.seal(builder.gas_limit(SEND_OFFER_GAS)))
    }

    /// Accepts an offer on a token the sender holds; the token goes with the call.
    pub fn accept_custom_offer(
        &self,
        offer_id: u64,
        nft: &NftTransfer,
        sender: &Sender,
    ) -> Transaction {
        let call = self.call("acceptOffer").arg(TypedValue::U64(offer_id));
        let builder = self
            .transaction(call, sender)
            .token_transfer(TokenTransfer::from(nft))
            .gas_limit(ACCEPT_OFFER_GAS);
        self.seal(builder)
    }

    pub fn decline_custom_offer(
        &self,
        offer_id: u64,
        nft: &NftTransfer,
        sender: &Sender,
    ) -> Transaction {
        let call = self.call("declineOffer").arg(TypedValue::U64(offer_id));
        let builder = self
            .transaction(call, sender)
            .token_transfer(TokenTransfer::from(nft))
            .gas_limit(DECLINE_OFFER_GAS);
        self.seal(builder)
    }

    pub fn withdraw_custom_offer(&self, offer_id: u64, sender: &Sender) -> Transaction {
        let call = self.call("withdrawOffer").arg(TypedValue::U64(offer_id));
        self.seal(self.transaction(call, sender).gas_limit(WITHDRAW_CUSTOM_OFFER_GAS))
    }

    pub fn send_global_offer(
        &self,
        offer: &SendGlobalOffer,
        sender: &Sender,
    ) -> MarketResult<Transaction> {
        let attributes = if offer.attributes.is_empty() {
            None
        } else {
            Some(TypedValue::Bytes(encode_attributes(&offer.attributes)))
        };

        let call = self.call("sendGlobalOffer").args([
            TypedValue::token(&offer.price.token),
            TypedValue::U64(offer.price.nonce),
            TypedValue::big_uint(offer.price.to_smallest_unit()?),
            TypedValue::token(&offer.collection),
            TypedValue::big_uint(offer.quantity.into()),
            TypedValue::optional(attributes),
        ]);

        let mut builder = self.transaction(call, sender);
        if let Some(deposit) = &offer.deposit {
            builder = attach_payment(builder, deposit)?;
        }

        Ok(self.seal(builder.gas_limit(SEND_GLOBAL_OFFER_GAS)))
    }

    pub fn accept_global_offer(&self, req: &AcceptGlobalOffer, sender: &Sender) -> Transaction {
        let offer_id = TypedValue::U64(req.offer_id());

        let builder = match req {
            AcceptGlobalOffer::FromWallet { nft, .. } => {
                let call = self
                    .call("acceptGlobalOffer")
                    .args([offer_id, TypedValue::optional(None)]);
                self.transaction(call, sender).token_transfer(TokenTransfer::from(nft))
            }
            AcceptGlobalOffer::FromListing { auction_id, .. } => {
                let call = self.call("acceptGlobalOffer").args([
                    offer_id,
                    TypedValue::optional(Some(TypedValue::U64(*auction_id))),
                ]);
                self.transaction(call, sender)
            }
        };

        self.seal(builder.gas_limit(ACCEPT_GLOBAL_OFFER_GAS))
    }

    pub fn withdraw_global_offer(&self, offer_id: u64, sender: &Sender) -> Transaction {
        let call = self
            .call("withdrawGlobalOffer")
            .arg(TypedValue::U64(offer_id));
        self.seal(self.transaction(call, sender).gas_limit(WITHDRAW_GLOBAL_OFFER_GAS))
    }

    /// Tops up the sender's pool balance, which backs legacy global offers.
    pub fn deposit(&self, payment: &Payment, sender: &Sender) -> MarketResult<Transaction> {
        let call = self.call("deposit");
        let builder = attach_payment(self.transaction(call, sender), payment)?;
        Ok(self.seal(builder.gas_limit(DEPOSIT_GAS)))
    }

    pub fn withdraw_deposit(
        &self,
        payment: &Payment,
        sender: &Sender,
    ) -> MarketResult<Transaction> {
        let call = self.call("withdrawDeposit").args([
            TypedValue::token(&payment.token),
            TypedValue::U64(payment.nonce),
            TypedValue::big_uint(payment.to_smallest_unit()?),
        ]);

        Ok(self.seal(self.transaction(call, sender).gas_limit(WITHDRAW_DEPOSIT_GAS)))
    }
}
