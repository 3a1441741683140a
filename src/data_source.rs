use crate::{
    error::MarketResult,
    types::{ContractCall, TypedValue},
};
use anyhow::Result;
use async_trait::async_trait;
use log::debug;

/// Executes read-only contract calls against a remote gateway.
///
/// Implementations return the first typed return value of the view, or
/// `None` when the view returned nothing. An empty result is a legitimate
/// "not found", not an error.
#[async_trait]
pub trait QueryRunner: Send + Sync {
    async fn run_query(&self, call: &ContractCall) -> Result<Option<TypedValue>>;
}

#[async_trait]
impl<Q: QueryRunner + ?Sized> QueryRunner for std::sync::Arc<Q> {
    async fn run_query(&self, call: &ContractCall) -> Result<Option<TypedValue>> {
        (**self).run_query(call).await
    }
}

/// Runs `call` and hands the value, if any, to `decode`.
pub async fn query_and_decode<Q, T, F>(
    runner: &Q,
    call: ContractCall,
    decode: F,
) -> MarketResult<Option<T>>
where
    Q: QueryRunner + ?Sized,
    F: FnOnce(&TypedValue) -> MarketResult<T>,
{
    debug!("querying {} on {}", call.function, call.contract);

    match runner.run_query(&call).await? {
        Some(value) => Ok(Some(decode(&value)?)),
        None => {
            debug!("{} returned no value", call.function);
            Ok(None)
        }
    }
}
