// Initialize Voting Instruction
//
// Creates the voting safeguards with their initial weights.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct InitializeVoting<'info> {
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
        space = ANCHOR_DISCRIMINATOR + VotingSafeguards::INIT_SPACE,
        seeds = [VOTING_SAFEGUARDS],
        bump
    )]
    pub safeguards: Account<'info, VotingSafeguards>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeVoting<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_voting(
        &mut self,
        weights: [u8; 4],
        duration_multipliers: [u16; DURATION_TIERS],
        whale_threshold: u64,
        whale_discount_percent: u8,
        max_power_per_wallet: u64,
        min_stake_to_vote: u64,
        bumps: &InitializeVotingBumps,
    ) -> Result<()> {
        self.config.assert_admin(&self.admin.key())?;

        self.safeguards.set_inner(VotingSafeguards {
            authority: self.config.admin,
            stake_weight: weights[0],
            duration_weight: weights[1],
            community_weight: weights[2],
            holding_weight: weights[3],
            duration_multipliers,
            whale_threshold,
            whale_discount_percent,
            max_power_per_wallet,
            min_stake_to_vote,
            bump: bumps.safeguards,
        });
        self.safeguards.validate()?;

        msg!("Voting safeguards initialized");

        Ok(())
    }
}
