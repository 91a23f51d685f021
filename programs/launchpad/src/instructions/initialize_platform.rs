// Initialize Platform Instruction
//
// Creates the platform config and the emergency controls. Run once at
// deployment by the admin.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct InitializePlatform<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + PlatformConfig::INIT_SPACE,
        seeds = [CONFIG],
        bump
    )]
    pub config: Account<'info, PlatformConfig>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + EmergencyControls::INIT_SPACE,
        seeds = [EMERGENCY],
        bump
    )]
    pub emergency: Account<'info, EmergencyControls>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializePlatform<'info> {
    pub fn initialize_platform(
        &mut self,
        treasury_authority: Pubkey,
        emergency_authority: Pubkey,
        creation_fee: u64,
        bumps: &InitializePlatformBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;

        self.config.set_inner(PlatformConfig {
            admin: self.admin.key(),
            treasury_authority,
            emergency_authority,
            creation_fee,
            created_at: clock.unix_timestamp,
            bump: bumps.config,
        });

        self.emergency.set_inner(EmergencyControls {
            authority: emergency_authority,
            paused: false,
            reason: String::new(),
            pause_initiated_by: Pubkey::default(),
            pause_time: 0,
            auto_resume_time: 0,
            pause_count: 0,
            bump: bumps.emergency,
        });

        msg!("Platform initialized, admin: {}", self.admin.key());

        Ok(())
    }
}
