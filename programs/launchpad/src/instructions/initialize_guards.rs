// Initialize Guards Instruction
//
// Creates the global circuit breaker and the platform trade limits.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct InitializeGuards<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [CONFIG],
        bump = config.bump,
    )]
    pub config: Account<'info, PlatformConfig>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + CircuitBreaker::INIT_SPACE,
        seeds = [CIRCUIT_BREAKER],
        bump
    )]
    pub circuit_breaker: Account<'info, CircuitBreaker>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + TradeLimits::INIT_SPACE,
        seeds = [TRADE_LIMITS],
        bump
    )]
    pub trade_limits: Account<'info, TradeLimits>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeGuards<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_guards(
        &mut self,
        max_price_change_percent: u64,
        max_volume_per_period: u64,
        cooldown_seconds: i64,
        min_trade_interval: i64,
        max_trade_amount: u64,
        max_daily_volume: u64,
        suspicious_threshold: u64,
        bumps: &InitializeGuardsBumps,
    ) -> Result<()> {
        self.config.assert_admin(&self.admin.key())?;

        CircuitBreaker::validate_params(
            max_price_change_percent,
            max_volume_per_period,
            cooldown_seconds,
        )?;
        TradeLimits::validate_params(
            min_trade_interval,
            max_trade_amount,
            max_daily_volume,
            suspicious_threshold,
        )?;

        self.circuit_breaker.set_inner(CircuitBreaker {
            authority: self.config.admin,
            max_price_change_percent,
            max_volume_per_period,
            cooldown_seconds,
            last_price: 0,
            volume_in_period: 0,
            period_start: 0,
            triggered: false,
            last_trigger_time: 0,
            trigger_count: 0,
            bump: bumps.circuit_breaker,
        });

        self.trade_limits.set_inner(TradeLimits {
            authority: self.config.admin,
            min_trade_interval,
            max_trade_amount,
            max_daily_volume,
            suspicious_threshold,
            bump: bumps.trade_limits,
        });

        msg!("Guards initialized");

        Ok(())
    }
}
