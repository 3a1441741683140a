/// symbol of the chain's native currency
pub const NATIVE_TOKEN: &str = "EGLD";

/// identifier of the only marketplace this client talks to
pub const XOXNO_MARKETPLACE: &str = "xoxno";

/// mainnet chain id
pub const MAINNET_CHAIN_ID: &str = "1";

/// separator between `key:value` pairs in an attribute filter
pub const ATTRIBUTE_SEPARATOR: char = ';';
pub const ATTRIBUTE_KEY_VALUE_SEPARATOR: char = ':';
