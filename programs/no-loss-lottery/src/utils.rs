use crate::{constants::BPS_DENOMINATOR, error::ErrorCode};
use anchor_lang::prelude::*;

/// Reward paid to whoever triggers a maintenance transition:
/// `amount * incentive_bps / 10_000`, rounded down.
pub fn incentive(amount: u64, incentive_bps: u16) -> Result<u64> {
    let reward = (amount as u128)
        .checked_mul(incentive_bps as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(ErrorCode::MathOverflow)?;

    u64::try_from(reward).map_err(|_| ErrorCode::MathOverflow.into())
}

/// Splits `amount` into `(incentive, remainder)`.
pub fn split_incentive(amount: u64, incentive_bps: u16) -> Result<(u64, u64)> {
    let reward = incentive(amount, incentive_bps)?;
    let remainder = amount
        .checked_sub(reward)
        .ok_or(ErrorCode::MathOverflow)?;
    Ok((reward, remainder))
}
