/// absolute ceiling a single transaction may request
pub const MAX_GAS_LIMIT: u64 = 600_000_000;

// single operations
pub const WITHDRAW_GAS: u64 = 15_000_000;
pub const END_AUCTION_GAS: u64 = 15_000_000;
pub const WITHDRAW_GLOBAL_OFFER_GAS: u64 = 15_000_000;
pub const WITHDRAW_CUSTOM_OFFER_GAS: u64 = 15_000_000;
pub const DEPOSIT_GAS: u64 = 15_000_000;
pub const WITHDRAW_DEPOSIT_GAS: u64 = 15_000_000;
pub const DECLINE_OFFER_GAS: u64 = 20_000_000;
pub const BUY_GAS: u64 = 30_000_000;
pub const BID_GAS: u64 = 30_000_000;
pub const ACCEPT_OFFER_GAS: u64 = 30_000_000;
pub const ACCEPT_GLOBAL_OFFER_GAS: u64 = 30_000_000;
pub const SEND_OFFER_GAS: u64 = 30_000_000;
pub const SEND_GLOBAL_OFFER_GAS: u64 = 30_000_000;

// bulk operations: `base + per_item * count`
pub const WITHDRAW_PER_ITEM_GAS: u64 = 5_000_000;
pub const BULK_BUY_BASE_GAS: u64 = 20_000_000;
pub const BULK_BUY_PER_ITEM_GAS: u64 = 5_000_000;
pub const LISTING_BASE_GAS: u64 = 8_000_000;
pub const LISTING_PER_ITEM_GAS: u64 = 2_000_000;
