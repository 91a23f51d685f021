// Set Creator Ban Instruction
//
// Admin bans or reinstates a creator. Banned creators are rejected by
// every creator-gated entry point.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct SetCreatorBan<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        seeds = [CONFIG],
        bump = config.bump,
    )]
    pub config: Account<'info, PlatformConfig>,

    #[account(
        mut,
        seeds = [CREATOR, creator.owner.as_ref()],
        bump = creator.bump,
    )]
    pub creator: Account<'info, CreatorProfile>,
}

impl<'info> SetCreatorBan<'info> {
    pub fn set_creator_ban(&mut self, banned: bool, reason: String) -> Result<()> {
        let clock = Clock::get()?;
        self.emergency.assert_operational(clock.unix_timestamp)?;
        self.config.assert_admin(&self.admin.key())?;

        if banned {
            self.creator.ban(reason)?;
            msg!("Creator banned: {}", self.creator.owner);
        } else {
            self.creator.unban();
            msg!("Creator reinstated: {}", self.creator.owner);
        }

        Ok(())
    }
}
