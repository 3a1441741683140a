use crate::{constants::XOXNO_MARKETPLACE, error::MarketError};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Marketplaces this client can target. Any other identifier is rejected
/// when parsed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Marketplace {
    #[default]
    Xoxno,
}

impl Marketplace {
    pub fn id(&self) -> &'static str {
        match self {
            Marketplace::Xoxno => XOXNO_MARKETPLACE,
        }
    }
}

impl FromStr for Marketplace {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            XOXNO_MARKETPLACE => Ok(Marketplace::Xoxno),
            _ => Err(MarketError::UnsupportedOperation(format!(
                "marketplace `{s}` is not supported"
            ))),
        }
    }
}

impl TryFrom<String> for Marketplace {
    type Error = MarketError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Marketplace> for String {
    fn from(value: Marketplace) -> String {
        value.id().to_string()
    }
}

impl Display for Marketplace {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
