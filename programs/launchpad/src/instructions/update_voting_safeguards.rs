// Update Voting Safeguards Instruction
//
// Authority replaces the voting parameters; the whole set is validated
// before anything takes effect.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct UpdateVotingSafeguards<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        mut,
        seeds = [VOTING_SAFEGUARDS],
        bump = safeguards.bump,
        has_one = authority,
    )]
    pub safeguards: Account<'info, VotingSafeguards>,
}

impl<'info> UpdateVotingSafeguards<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn update_voting_safeguards(
        &mut self,
        weights: [u8; 4],
        duration_multipliers: [u16; DURATION_TIERS],
        whale_threshold: u64,
        whale_discount_percent: u8,
        max_power_per_wallet: u64,
        min_stake_to_vote: u64,
    ) -> Result<()> {
        let clock = Clock::get()?;
        self.emergency.assert_operational(clock.unix_timestamp)?;

        let candidate = VotingSafeguards {
            authority: self.safeguards.authority,
            stake_weight: weights[0],
            duration_weight: weights[1],
            community_weight: weights[2],
            holding_weight: weights[3],
            duration_multipliers,
            whale_threshold,
            whale_discount_percent,
            max_power_per_wallet,
            min_stake_to_vote,
            bump: self.safeguards.bump,
        };
        candidate.validate()?;
        self.safeguards.set_inner(candidate);

        msg!("Voting safeguards updated");

        Ok(())
    }
}
