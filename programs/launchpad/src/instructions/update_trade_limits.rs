// Update Trade Limits Instruction
//
// Authority replaces the platform-wide anti-bot limits.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct UpdateTradeLimits<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        mut,
        seeds = [TRADE_LIMITS],
        bump = trade_limits.bump,
        has_one = authority,
    )]
    pub trade_limits: Account<'info, TradeLimits>,
}

impl<'info> UpdateTradeLimits<'info> {
    pub fn update_trade_limits(
        &mut self,
        min_trade_interval: i64,
        max_trade_amount: u64,
        max_daily_volume: u64,
        suspicious_threshold: u64,
    ) -> Result<()> {
        let clock = Clock::get()?;
        self.emergency.assert_operational(clock.unix_timestamp)?;

        TradeLimits::validate_params(
            min_trade_interval,
            max_trade_amount,
            max_daily_volume,
            suspicious_threshold,
        )?;

        self.trade_limits.min_trade_interval = min_trade_interval;
        self.trade_limits.max_trade_amount = max_trade_amount;
        self.trade_limits.max_daily_volume = max_daily_volume;
        self.trade_limits.suspicious_threshold = suspicious_threshold;

        msg!("Trade limits updated");

        Ok(())
    }
}
