// Participate LBM Instruction
//
// Admits one contribution into an active pool. Order of gates: emergency
// pause, circuit breaker, per-wallet trade protection, then pool policy.
// Lamports move only after every check has passed.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct ParticipateLbm<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        mut,
        seeds = [CIRCUIT_BREAKER],
        bump = circuit_breaker.bump,
    )]
    pub circuit_breaker: Account<'info, CircuitBreaker>,

    #[account(
        seeds = [TRADE_LIMITS],
        bump = trade_limits.bump,
    )]
    pub trade_limits: Account<'info, TradeLimits>,

    #[account(
        init_if_needed,
        payer = participant,
        space = ANCHOR_DISCRIMINATOR + TradeGuard::INIT_SPACE,
        seeds = [TRADE_GUARD, participant.key().as_ref()],
        bump
    )]
    pub trade_guard: Box<Account<'info, TradeGuard>>,

    #[account(
        mut,
        seeds = [LBM_POOL, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, LbmPool>>,

    #[account(
        mut,
        seeds = [LBM_VAULT, pool.key().as_ref()],
        bump = pool.vault_bump,
    )]
    pub pool_vault: SystemAccount<'info>,

    #[account(
        init_if_needed,
        payer = participant,
        space = ANCHOR_DISCRIMINATOR + LbmPosition::INIT_SPACE,
        seeds = [LBM_POSITION, pool.key().as_ref(), participant.key().as_ref()],
        bump
    )]
    pub position: Box<Account<'info, LbmPosition>>,

    pub system_program: Program<'info, System>,
}

impl<'info> ParticipateLbm<'info> {
    pub fn participate_lbm(&mut self, amount: u64, bumps: &ParticipateLbmBumps) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        self.emergency.assert_operational(now)?;

        // Fresh position accounts start zeroed; fill in the identity fields
        if self.position.wallet == Pubkey::default() {
            self.position.pool = self.pool.key();
            self.position.wallet = self.participant.key();
            self.position.first_participation_at = now;
            self.position.bump = bumps.position;
        }
        if self.trade_guard.wallet == Pubkey::default() {
            self.trade_guard.wallet = self.participant.key();
            self.trade_guard.bump = bumps.trade_guard;
        }

        // Quote the post-participation price for the breaker check
        let projected = self
            .pool
            .current_liquidity
            .checked_add(amount)
            .ok_or(LaunchpadError::Overflow)?;
        let new_price =
            discovered_price(self.pool.initial_price, projected, self.pool.target_liquidity)?;
        self.circuit_breaker.evaluate(new_price, amount, now)?;

        let flagged = if self.pool.anti_bot_enabled {
            self.trade_guard.check(&self.trade_limits, amount, now)?
        } else {
            false
        };

        self.pool
            .record_participation(self.position.amount, amount, now)?;

        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.participant.to_account_info(),
                    to: self.pool_vault.to_account_info(),
                },
            ),
            amount,
        )?;

        // Recorded only after the transfer succeeded
        self.position.amount = self
            .position
            .amount
            .checked_add(amount)
            .ok_or(LaunchpadError::Overflow)?;
        if self.pool.anti_bot_enabled {
            self.trade_guard.record(amount, flagged, now)?;
        }

        if flagged {
            msg!(
                "Suspicious participation flagged: {} amount {}",
                self.participant.key(),
                amount
            );
        }

        msg!(
            "Participation accepted: {} lamports, pool at {}/{}",
            amount,
            self.pool.current_liquidity,
            self.pool.target_liquidity
        );

        Ok(())
    }
}
