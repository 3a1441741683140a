use super::{
    auction::Auction,
    custom_offer::CustomOffer,
    global_offer::{Funding, GlobalOffer, OfferFundingSource},
    Amount, MarketplaceClient,
};
use crate::{
    constants::DEFAULT_DECIMALS,
    data_source::{query_and_decode, QueryRunner},
    error::{MarketError, MarketResult},
    math::to_amount,
    types::{ContractCall, TypedValue},
};
use log::{debug, info};

fn decode_ids(value: &TypedValue) -> MarketResult<Vec<u64>> {
    value.as_list()?.iter().map(TypedValue::as_u64).collect()
}

fn decode_strings(value: &TypedValue) -> MarketResult<Vec<String>> {
    value.as_list()?.iter().map(TypedValue::as_string).collect()
}

impl<Q: QueryRunner> MarketplaceClient<Q> {
    async fn count(&self, call: ContractCall) -> MarketResult<u64> {
        let count = query_and_decode(&self.runner, call, TypedValue::as_u64).await?;
        Ok(count.unwrap_or(0))
    }

    async fn ids(&self, call: ContractCall) -> MarketResult<Vec<u64>> {
        let ids = query_and_decode(&self.runner, call, decode_ids).await?;
        Ok(ids.unwrap_or_default())
    }

    /// Auction record priced in a token with 18 decimals. `None` if the
    /// auction does not exist.
    pub async fn auction(&self, auction_id: u64) -> MarketResult<Option<Auction>> {
        self.auction_with_decimals(auction_id, DEFAULT_DECIMALS).await
    }

    pub async fn auction_with_decimals(
        &self,
        auction_id: u64,
        decimals: u32,
    ) -> MarketResult<Option<Auction>> {
        let call = self
            .call("getFullAuctionData")
            .arg(TypedValue::U64(auction_id));

        query_and_decode(&self.runner, call, |value| {
            // the view wraps the record in an Option
            match value.as_option() {
                Some(record) => Auction::decode(auction_id, record, decimals).map(Some),
                None => Ok(None),
            }
        })
        .await
        .map(Option::flatten)
    }

    /// Balance `owner` keeps in the marketplace pool for `token`, in display
    /// precision. Zero when nothing was deposited.
    pub async fn user_deposit(
        &self,
        owner: &str,
        token: &str,
        nonce: u64,
        decimals: u32,
    ) -> MarketResult<f64> {
        let deposit = self.deposit_amount(owner, token, nonce, decimals).await?;
        Ok(deposit.display)
    }

    async fn deposit_amount(
        &self,
        owner: &str,
        token: &str,
        nonce: u64,
        decimals: u32,
    ) -> MarketResult<Amount> {
        let call = self.call("userDeposit").args([
            TypedValue::address(owner),
            TypedValue::token(token),
            TypedValue::U64(nonce),
        ]);

        let raw = query_and_decode(&self.runner, call, TypedValue::as_big_uint).await?;
        to_amount(raw.unwrap_or_default(), decimals)
    }

    /// Global offer with its activity resolved. Legacy offers are active only
    /// while the owner's deposit covers the price; new-version offers are
    /// escrowed and always active.
    pub async fn global_offer(&self, offer_id: u64) -> MarketResult<Option<GlobalOffer>> {
        let call = self.call("getGlobalOffer").arg(TypedValue::U64(offer_id));
        debug!("querying global offer {offer_id}");

        let value = match self.runner.run_query(&call).await? {
            Some(value) => value,
            None => return Ok(None),
        };
        let record = match value.as_option() {
            Some(record) => record,
            None => return Ok(None),
        };

        let source = OfferFundingSource::read(record)?;
        let funding = if source.new_version {
            Funding::Escrowed
        } else {
            let balance = self
                .deposit_amount(
                    &source.owner,
                    &source.payment_token,
                    source.payment_nonce,
                    DEFAULT_DECIMALS,
                )
                .await?;
            Funding::Deposit(balance)
        };

        let offer = GlobalOffer::decode(record, funding, DEFAULT_DECIMALS)?;
        if !offer.is_active {
            info!(
                "global offer {} is not covered by the deposit of {}",
                offer.offer_id, offer.owner
            );
        }

        Ok(Some(offer))
    }

    /// Like [`Self::global_offer`], for callers that cannot go on without
    /// the offer.
    pub async fn require_global_offer(&self, offer_id: u64) -> MarketResult<GlobalOffer> {
        self.global_offer(offer_id)
            .await?
            .ok_or(MarketError::GlobalOfferNotFound(offer_id))
    }

    pub async fn custom_offer(&self, offer_id: u64) -> MarketResult<Option<CustomOffer>> {
        let call = self.call("getCustomOffer").arg(TypedValue::U64(offer_id));

        query_and_decode(&self.runner, call, |value| match value.as_option() {
            Some(record) => CustomOffer::decode(offer_id, record, DEFAULT_DECIMALS).map(Some),
            None => Ok(None),
        })
        .await
        .map(Option::flatten)
    }

    pub async fn listings_count(&self) -> MarketResult<u64> {
        self.count(self.call("getListingsCount")).await
    }

    pub async fn custom_offers_count(&self) -> MarketResult<u64> {
        self.count(self.call("getCustomOffersCount")).await
    }

    pub async fn global_offers_count(&self) -> MarketResult<u64> {
        self.count(self.call("getGlobalOffersCount")).await
    }

    pub async fn collections_count(&self) -> MarketResult<u64> {
        self.count(self.call("getCollectionsCount")).await
    }

    /// in basis points, `10_000` being 100%
    pub async fn marketplace_cut_percentage(&self) -> MarketResult<u64> {
        self.count(self.call("getMarketplaceCutPercentage")).await
    }

    pub async fn accepted_payment_tokens(&self) -> MarketResult<Vec<String>> {
        let call = self.call("getAcceptedTokens");
        let tokens = query_and_decode(&self.runner, call, decode_strings).await?;
        Ok(tokens.unwrap_or_default())
    }

    pub async fn collections_listed(&self) -> MarketResult<Vec<String>> {
        let call = self.call("getCollectionsListed");
        let collections = query_and_decode(&self.runner, call, decode_strings).await?;
        Ok(collections.unwrap_or_default())
    }

    pub async fn is_collection_listed(&self, collection: &str) -> MarketResult<bool> {
        let call = self
            .call("isCollectionListed")
            .arg(TypedValue::token(collection));

        let listed = query_and_decode(&self.runner, call, |value| Ok(value.as_bool())).await?;
        Ok(listed.unwrap_or(false))
    }

    pub async fn auction_ids_for_collection(&self, collection: &str) -> MarketResult<Vec<u64>> {
        let call = self
            .call("getAuctionsForTicker")
            .arg(TypedValue::token(collection));
        self.ids(call).await
    }

    pub async fn global_offer_ids(&self) -> MarketResult<Vec<u64>> {
        self.ids(self.call("getGlobalOffers")).await
    }

    pub async fn collection_global_offer_ids(&self, collection: &str) -> MarketResult<Vec<u64>> {
        let call = self
            .call("getCollectionGlobalOffers")
            .arg(TypedValue::token(collection));
        self.ids(call).await
    }

    /// whether `owner` already has an offer on the token paid in `payment_token`
    pub async fn check_offer_sent(
        &self,
        owner: &str,
        collection: &str,
        nonce: u64,
        payment_token: &str,
    ) -> MarketResult<bool> {
        let call = self.call("checkOfferSent").args([
            TypedValue::address(owner),
            TypedValue::token(collection),
            TypedValue::U64(nonce),
            TypedValue::token(payment_token),
        ]);

        let sent = query_and_decode(&self.runner, call, |value| Ok(value.as_bool())).await?;
        Ok(sent.unwrap_or(false))
    }
}
