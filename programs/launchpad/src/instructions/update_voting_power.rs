// Update Voting Power Instruction
//
// Creates or refreshes a voter profile. Power is recomputed eagerly from
// the new raw factors, never cached across factor changes.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct UpdateVotingPower<'info> {
    #[account(mut)]
    pub wallet: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        seeds = [VOTING_SAFEGUARDS],
        bump = safeguards.bump,
    )]
    pub safeguards: Account<'info, VotingSafeguards>,

    #[account(
        init_if_needed,
        payer = wallet,
        space = ANCHOR_DISCRIMINATOR + VoterProfile::INIT_SPACE,
        seeds = [VOTER, wallet.key().as_ref()],
        bump
    )]
    pub voter: Account<'info, VoterProfile>,

    pub system_program: Program<'info, System>,
}

impl<'info> UpdateVotingPower<'info> {
    pub fn update_voting_power(
        &mut self,
        staked_amount: u64,
        staking_months: u32,
        community_contribution: u64,
        token_holding: u64,
        bumps: &UpdateVotingPowerBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        self.emergency.assert_operational(now)?;

        if self.voter.wallet == Pubkey::default() {
            self.voter.wallet = self.wallet.key();
            self.voter.bump = bumps.voter;
        }

        self.voter.update_factors(
            &self.safeguards,
            staked_amount,
            staking_months,
            community_contribution,
            token_holding,
            now,
        )?;

        msg!(
            "Voting power updated: {} power {}, whale: {}",
            self.wallet.key(),
            self.voter.voting_power,
            self.voter.is_whale
        );

        Ok(())
    }
}
