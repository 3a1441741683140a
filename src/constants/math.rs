/// decimals assumed when a token's precision is not given
pub const DEFAULT_DECIMALS: u32 = 18;
/// percentages on the contract are expressed in basis points
pub const PERCENTAGE_BASE: u64 = 10_000;
/// seconds in one day
pub const ONE_DAY: u64 = 86_400;
