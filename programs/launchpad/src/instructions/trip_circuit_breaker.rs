// Trip Circuit Breaker Instruction
//
// Authority-initiated halt of all trade-class operations, independent of
// the automatic thresholds.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct TripCircuitBreaker<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CIRCUIT_BREAKER],
        bump = circuit_breaker.bump,
    )]
    pub circuit_breaker: Account<'info, CircuitBreaker>,
}

impl<'info> TripCircuitBreaker<'info> {
    pub fn trip_circuit_breaker(&mut self) -> Result<()> {
        let clock = Clock::get()?;
        self.circuit_breaker
            .trigger_manual(&self.authority.key(), clock.unix_timestamp)?;

        msg!(
            "Circuit breaker tripped manually, count {}",
            self.circuit_breaker.trigger_count
        );

        Ok(())
    }
}
