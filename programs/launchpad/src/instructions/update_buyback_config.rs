// Update Buyback Config Instruction
//
// Authority-gated partial update; unset fields keep their current value
// and the merged config is revalidated as a whole.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct UpdateBuybackConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        mut,
        seeds = [BUYBACK_CONFIG],
        bump = buyback_config.bump,
        has_one = authority,
    )]
    pub buyback_config: Account<'info, BuybackConfig>,
}

impl<'info> UpdateBuybackConfig<'info> {
    pub fn update_buyback_config(&mut self, update: BuybackConfigUpdate) -> Result<()> {
        let clock = Clock::get()?;
        self.emergency.assert_operational(clock.unix_timestamp)?;

        self.buyback_config.apply_update(&update)?;

        msg!(
            "Buyback config updated: enabled={}, split {}/{}",
            self.buyback_config.enabled,
            self.buyback_config.burn_percent,
            self.buyback_config.lp_percent
        );

        Ok(())
    }
}
