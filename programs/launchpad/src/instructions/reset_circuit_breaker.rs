// Reset Circuit Breaker Instruction
//
// Clears a latched breaker before its cooldown lapses on its own.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct ResetCircuitBreaker<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CIRCUIT_BREAKER],
        bump = circuit_breaker.bump,
    )]
    pub circuit_breaker: Account<'info, CircuitBreaker>,
}

impl<'info> ResetCircuitBreaker<'info> {
    pub fn reset_circuit_breaker(&mut self) -> Result<()> {
        let clock = Clock::get()?;
        self.circuit_breaker
            .reset_manual(&self.authority.key(), clock.unix_timestamp)?;

        msg!("Circuit breaker reset");

        Ok(())
    }
}
