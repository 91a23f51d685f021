// Resume Operations Instruction
//
// The only mutating entry point that works while paused.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct ResumeFromPause<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,
}

impl<'info> ResumeFromPause<'info> {
    pub fn resume_from_pause(&mut self) -> Result<()> {
        self.emergency.resume(&self.authority.key())?;

        msg!("Operations resumed");

        Ok(())
    }
}
