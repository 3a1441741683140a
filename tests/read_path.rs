mod common;

use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{TimeZone, Utc};
use common::*;
use ethers::types::U256;
use xoxno_market_client::{
    marketplace::{auction::AuctionType, global_offer::Attribute},
    types::TypedValue,
    MarketError,
};

#[tokio::test]
async fn decodes_full_auction_record() -> Result<()> {
    let runner = MockQueryRunner::new();
    let fixture = AuctionFixture {
        min_bid: U256::from_dec_str("1250000000000000000")?,
        ..Default::default()
    };
    runner.respond("getFullAuctionData", fixture.record());

    let auction = client(runner.clone())
        .auction(42)
        .await?
        .expect("auction should exist");

    assert_eq!(auction.auction_id, 42);
    assert_eq!(auction.collection, "EAPES-8f3c1f");
    assert_eq!(auction.nonce, 10);
    assert_eq!(auction.auction_type, AuctionType::NftBid);
    assert_eq!(auction.auction_type.to_string(), "NftBid");
    assert_eq!(auction.min_bid.display, 1.25);
    assert_eq!(auction.min_bid.raw, fixture.min_bid);
    assert_eq!(auction.max_bid.map(|m| m.display), Some(5.0));
    assert_eq!(auction.original_owner, OWNER);
    assert!(auction.is_owned_by(OWNER));
    assert!(auction.is_winning(SENDER));
    assert_eq!(auction.marketplace_cut_percentage, 200);
    assert!((auction.fees_ratio() - 0.07).abs() < f64::EPSILON);

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].contract, MARKETPLACE);
    assert_eq!(calls[0].args, vec![TypedValue::U64(42)]);

    Ok(())
}

#[tokio::test]
async fn auction_deadline_is_judged_against_the_given_time() -> Result<()> {
    let runner = MockQueryRunner::new();
    runner.respond("getFullAuctionData", AuctionFixture::default().record());

    let auction = client(runner).auction(42).await?.unwrap();
    let deadline = Utc.timestamp_opt(1_800_000_000, 0).unwrap();

    assert!(auction.has_deadline());
    assert_eq!(auction.deadline_at(), Some(deadline));

    let two_days_before = Utc.timestamp_opt(1_800_000_000 - 2 * 86_400, 0).unwrap();
    assert!(!auction.has_ended(two_days_before));
    assert!(!auction.is_ending_soon(two_days_before));

    let hour_before = Utc.timestamp_opt(1_800_000_000 - 3_600, 0).unwrap();
    assert!(!auction.has_ended(hour_before));
    assert!(auction.is_ending_soon(hour_before));

    assert!(auction.has_ended(deadline));
    assert!(!auction.is_ending_soon(deadline));

    Ok(())
}

#[tokio::test]
async fn auction_amounts_follow_supplied_decimals() -> Result<()> {
    let runner = MockQueryRunner::new();
    runner.respond(
        "getFullAuctionData",
        AuctionFixture {
            payment_token: "USDC-c76f1f",
            min_bid: U256::from(2_500_000u64),
            max_bid: None,
            ..Default::default()
        }
        .record(),
    );

    let auction = client(runner).auction_with_decimals(1, 6).await?.unwrap();

    assert_eq!(auction.min_bid.display, 2.5);
    assert_eq!(auction.min_bid.raw, U256::from(2_500_000u64));
    assert!(auction.max_bid.is_none());

    Ok(())
}

#[tokio::test]
async fn missing_auction_is_none() -> Result<()> {
    let runner = MockQueryRunner::new();
    let market = client(runner.clone());

    assert!(market.auction(404).await?.is_none());

    // the view answering an empty Option is the same thing
    runner.respond("getFullAuctionData", TypedValue::optional(None));
    assert!(market.auction(404).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn counts_default_to_zero() -> Result<()> {
    let runner = MockQueryRunner::new();
    runner.respond("getGlobalOffersCount", TypedValue::U64(12));
    let market = client(runner);

    assert_eq!(market.listings_count().await?, 0);
    assert_eq!(market.custom_offers_count().await?, 0);
    assert_eq!(market.collections_count().await?, 0);
    assert_eq!(market.global_offers_count().await?, 12);

    Ok(())
}

#[tokio::test]
async fn user_deposit_is_rescaled_and_defaults_to_zero() -> Result<()> {
    let runner = MockQueryRunner::new();
    runner.respond_with_args(
        "userDeposit",
        vec![
            TypedValue::address(OWNER),
            TypedValue::token("EGLD"),
            TypedValue::U64(0),
        ],
        TypedValue::BigUint(U256::from_dec_str("3500000000000000000")?),
    );
    let market = client(runner);

    assert_eq!(market.user_deposit(OWNER, "EGLD", 0, 18).await?, 3.5);
    assert_eq!(market.user_deposit(SENDER, "EGLD", 0, 18).await?, 0.0);

    Ok(())
}

#[tokio::test]
async fn legacy_global_offer_is_active_when_deposit_covers_price() -> Result<()> {
    let runner = MockQueryRunner::new();
    runner.respond("getGlobalOffer", global_offer_record(7, egld(2), false, None));
    runner.respond("userDeposit", TypedValue::BigUint(egld(2)));

    let offer = client(runner.clone()).global_offer(7).await?.unwrap();

    assert_eq!(offer.offer_id, 7);
    assert_eq!(offer.price.display, 2.0);
    assert!(!offer.new_version);
    assert!(offer.is_active);
    assert_eq!(runner.calls_to("userDeposit"), 1);

    Ok(())
}

#[tokio::test]
async fn legacy_global_offer_is_inactive_when_deposit_is_short() -> Result<()> {
    let runner = MockQueryRunner::new();
    runner.respond("getGlobalOffer", global_offer_record(7, egld(2), false, None));
    runner.respond(
        "userDeposit",
        TypedValue::BigUint(U256::from_dec_str("1500000000000000000")?),
    );

    let offer = client(runner).global_offer(7).await?.unwrap();

    assert!(!offer.is_active);

    Ok(())
}

#[tokio::test]
async fn legacy_global_offer_activity_uses_display_precision() -> Result<()> {
    let runner = MockQueryRunner::new();
    runner.respond("getGlobalOffer", global_offer_record(7, egld(2), false, None));
    // one wei short, indistinguishable from the price once rescaled
    runner.respond(
        "userDeposit",
        TypedValue::BigUint(U256::from_dec_str("1999999999999999999")?),
    );
    let market = client(runner);

    assert_eq!(market.user_deposit(OWNER, "EGLD", 0, 18).await?, 2.0);
    assert!(market.global_offer(7).await?.unwrap().is_active);

    Ok(())
}

#[tokio::test]
async fn new_version_global_offer_is_always_active() -> Result<()> {
    let runner = MockQueryRunner::new();
    runner.respond("getGlobalOffer", global_offer_record(8, egld(50), true, None));

    let offer = client(runner.clone()).global_offer(8).await?.unwrap();

    assert!(offer.new_version);
    assert!(offer.is_active);
    assert_eq!(runner.calls_to("userDeposit"), 0);

    Ok(())
}

#[tokio::test]
async fn global_offer_attributes_are_decoded() -> Result<()> {
    let blob = STANDARD.encode("Background:Red;Hat:Crown");
    let runner = MockQueryRunner::new();
    runner.respond(
        "getGlobalOffer",
        global_offer_record(9, egld(1), true, Some(&blob)),
    );

    let offer = client(runner).global_offer(9).await?.unwrap();

    assert_eq!(
        offer.attributes,
        vec![
            Attribute::new("Background", "Red"),
            Attribute::new("Hat", "Crown")
        ]
    );
    assert!(offer.matches(&[
        Attribute::new("Hat", "Crown"),
        Attribute::new("Background", "Red"),
        Attribute::new("Eyes", "Laser"),
    ]));
    assert!(!offer.matches(&[Attribute::new("Hat", "Crown")]));

    Ok(())
}

#[tokio::test]
async fn missing_global_offer_is_none() -> Result<()> {
    let runner = MockQueryRunner::new();

    assert!(client(runner.clone()).global_offer(1).await?.is_none());
    assert_eq!(runner.calls_to("userDeposit"), 0);

    Ok(())
}

#[tokio::test]
async fn required_global_offer_must_exist() -> Result<()> {
    let runner = MockQueryRunner::new();
    runner.respond_with_args(
        "getGlobalOffer",
        vec![TypedValue::U64(8)],
        global_offer_record(8, egld(1), true, None),
    );
    let market = client(runner);

    assert_eq!(market.require_global_offer(8).await?.offer_id, 8);

    let err = market.require_global_offer(9).await.unwrap_err();
    assert!(matches!(err, MarketError::GlobalOfferNotFound(9)));

    Ok(())
}

#[tokio::test]
async fn lists_decode_and_default_to_empty() -> Result<()> {
    let runner = MockQueryRunner::new();
    runner.respond(
        "getAcceptedTokens",
        TypedValue::List(vec![
            TypedValue::token("EGLD"),
            TypedValue::token("USDC-c76f1f"),
        ]),
    );
    runner.respond(
        "getAuctionsForTicker",
        TypedValue::List(vec![TypedValue::U64(3), TypedValue::U64(9)]),
    );
    runner.respond("isCollectionListed", TypedValue::U8(1));
    let market = client(runner);

    assert_eq!(
        market.accepted_payment_tokens().await?,
        vec!["EGLD".to_string(), "USDC-c76f1f".to_string()]
    );
    assert_eq!(
        market.auction_ids_for_collection("EAPES-8f3c1f").await?,
        vec![3, 9]
    );
    assert!(market.is_collection_listed("EAPES-8f3c1f").await?);
    assert!(market.collections_listed().await?.is_empty());
    assert!(market.global_offer_ids().await?.is_empty());
    assert!(!market.check_offer_sent(OWNER, "EAPES-8f3c1f", 10, "EGLD").await?);

    Ok(())
}

#[tokio::test]
async fn custom_offer_is_decoded() -> Result<()> {
    use xoxno_market_client::types::Field;

    let runner = MockQueryRunner::new();
    runner.respond(
        "getCustomOffer",
        TypedValue::record(
            "Offer",
            vec![
                Field::new("token_type", TypedValue::token("EAPES-8f3c1f")),
                Field::new("token_nonce", TypedValue::U64(10)),
                Field::new("quantity", TypedValue::BigUint(1u64.into())),
                Field::new("payment_token_type", TypedValue::token("EGLD")),
                Field::new("payment_token_nonce", TypedValue::U64(0)),
                Field::new("price", TypedValue::BigUint(egld(3))),
                Field::new("deadline", TypedValue::U64(1_800_000_000)),
                Field::new("timestamp", TypedValue::U64(1_700_000_000)),
                Field::new("offer_owner", TypedValue::address(OWNER)),
                Field::new("marketplace_cut_percentage", TypedValue::U64(200)),
            ],
        ),
    );

    let offer = client(runner).custom_offer(5).await?.unwrap();

    assert_eq!(offer.offer_id, 5);
    assert_eq!(offer.price.display, 3.0);
    assert_eq!(offer.owner, OWNER);
    assert!(!offer.is_expired(1_799_999_999));
    assert!(offer.is_expired(1_800_000_000));

    Ok(())
}

#[tokio::test]
async fn upstream_failures_are_propagated() -> Result<()> {
    let runner = MockQueryRunner::new();
    runner.fail_on("getFullAuctionData");

    let err = client(runner).auction(1).await.unwrap_err();

    assert!(matches!(err, MarketError::Upstream(_)));
    assert!(err.to_string().contains("gateway unavailable"));

    Ok(())
}

#[tokio::test]
async fn unexpected_shapes_are_decode_errors() -> Result<()> {
    let runner = MockQueryRunner::new();
    runner.respond("getListingsCount", TypedValue::token("EGLD"));

    let err = client(runner).listings_count().await.unwrap_err();

    assert!(matches!(err, MarketError::Decode(_)));

    Ok(())
}
