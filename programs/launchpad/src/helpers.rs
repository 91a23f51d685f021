// Launchpad Helper Functions
//
// Reusable math and CPI helpers shared across instructions.

use anchor_lang::prelude::*;
use anchor_spl::token::{Burn, Transfer, burn, transfer};

use crate::errors::*;

// MATH HELPERS

// Split an amount into (kept, remainder) by whole percent.
// The remainder absorbs rounding, so kept + remainder == amount exactly.
pub fn split_by_percent(amount: u64, percent: u8) -> Result<(u64, u64)> {
    require!(percent <= 100, LaunchpadError::InvalidParameter);

    let kept = (amount as u128)
        .checked_mul(percent as u128)
        .ok_or(LaunchpadError::Overflow)?
        .checked_div(100)
        .ok_or(LaunchpadError::DivisionByZero)? as u64;

    let remainder = amount
        .checked_sub(kept)
        .ok_or(LaunchpadError::Underflow)?;

    Ok((kept, remainder))
}

// Basis-point share of an amount, floor-rounded.
pub fn bps_share(amount: u64, bps: u16) -> Result<u64> {
    let share = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(LaunchpadError::Overflow)?
        .checked_div(10_000)
        .ok_or(LaunchpadError::DivisionByZero)?;

    Ok(share as u64)
}

// Absolute price change in whole percent of the previous price.
// Used by the circuit breaker; previous == 0 is treated as no movement
// so the very first observed price cannot trip the breaker.
pub fn price_change_percent(previous: u64, current: u64) -> Result<u64> {
    if previous == 0 {
        return Ok(0);
    }

    let delta = previous.abs_diff(current);
    let pct = (delta as u128)
        .checked_mul(100)
        .ok_or(LaunchpadError::Overflow)?
        .checked_div(previous as u128)
        .ok_or(LaunchpadError::DivisionByZero)?;

    Ok(pct as u64)
}

// CPI HELPERS

// Token transfer with the sender as signing authority.
pub fn transfer_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

// Token transfer out of a program vault (PDA signer).
pub fn transfer_from_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Burn tokens held by a program vault (PDA signer).
pub fn burn_from_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    burn(
        CpiContext::new_with_signer(
            token_program.clone(),
            Burn {
                mint: mint.clone(),
                from: from.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}
