// Register Creator Instruction
//
// Opens a creator profile and locks the registration stake in it.
// The profile PDA holds the staked lamports on top of its rent.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct RegisterCreator<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + CreatorProfile::INIT_SPACE,
        seeds = [CREATOR, owner.key().as_ref()],
        bump
    )]
    pub creator: Account<'info, CreatorProfile>,

    pub system_program: Program<'info, System>,
}

impl<'info> RegisterCreator<'info> {
    pub fn register_creator(&mut self, stake_amount: u64, bumps: &RegisterCreatorBumps) -> Result<()> {
        let clock = Clock::get()?;
        self.emergency.assert_operational(clock.unix_timestamp)?;

        require!(
            stake_amount >= MIN_CREATOR_STAKE,
            LaunchpadError::InsufficientStake
        );

        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.owner.to_account_info(),
                    to: self.creator.to_account_info(),
                },
            ),
            stake_amount,
        )?;

        self.creator.set_inner(CreatorProfile {
            owner: self.owner.key(),
            stake_amount,
            reputation_score: 0,
            total_tokens_created: 0,
            window_start: clock.unix_timestamp,
            creations_in_window: 0,
            is_banned: false,
            ban_reason: String::new(),
            registered_at: clock.unix_timestamp,
            bump: bumps.creator,
        });

        msg!("Creator registered: {}", self.owner.key());

        Ok(())
    }
}
