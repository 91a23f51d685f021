// Emergency Pause Instruction
//
// Halts every state-mutating entry point. Records who paused, when, and
// why; an optional auto_resume_time schedules automatic resumption.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct EmergencyPause<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,
}

impl<'info> EmergencyPause<'info> {
    pub fn emergency_pause(&mut self, reason: String, auto_resume_time: i64) -> Result<()> {
        let clock = Clock::get()?;
        self.emergency.pause(
            &self.authority.key(),
            reason,
            auto_resume_time,
            clock.unix_timestamp,
        )?;

        msg!(
            "Emergency pause engaged by {}, auto-resume at {}",
            self.authority.key(),
            auto_resume_time
        );

        Ok(())
    }
}
