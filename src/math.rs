use crate::{
    error::{MarketError, MarketResult},
    marketplace::Amount,
};
use ethers::{
    types::U256,
    utils::{format_units, parse_units},
};

/**
 * @dev Scales a display-precision amount into the token's smallest unit
 * @param amount Human readable amount, e.g. `1.5`
 * @param decimals Token precision
 * @return `amount * 10^decimals` as an integer
 **/
pub fn to_smallest_unit(amount: f64, decimals: u32) -> MarketResult<U256> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(MarketError::Decode(format!(
            "amount {amount} cannot be sent on chain"
        )));
    }

    Ok(parse_units(amount, decimals)?.into())
}

/**
 * @dev Rescales a smallest-unit integer back into display precision
 * @param raw Amount in the token's base denomination
 * @param decimals Token precision
 * @return `raw / 10^decimals`
 **/
pub fn to_display(raw: U256, decimals: u32) -> MarketResult<f64> {
    let formatted = format_units(raw, decimals)?;

    formatted
        .parse::<f64>()
        .map_err(|e| MarketError::Decode(format!("{formatted} is not a decimal: {e}")))
}

pub fn to_amount(raw: U256, decimals: u32) -> MarketResult<Amount> {
    Ok(Amount {
        raw,
        display: to_display(raw, decimals)?,
    })
}

/// `amount * quantity`, failing instead of wrapping
pub fn scale_by_quantity(amount: U256, quantity: u64) -> MarketResult<U256> {
    amount
        .checked_mul(U256::from(quantity))
        .ok_or(MarketError::Overflow("amount * quantity"))
}

// linear model for bulk calls, never above `ceiling`
pub fn bulk_gas_limit(base: u64, per_item: u64, count: usize, ceiling: u64) -> u64 {
    let per_items = per_item.saturating_mul(count as u64);
    base.saturating_add(per_items).min(ceiling)
}
