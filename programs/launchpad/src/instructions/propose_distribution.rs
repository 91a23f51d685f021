// Propose Distribution Instruction
//
// A signer-set member opens a treasury release proposal. Proposal ids come
// from a monotonic counter on the multisig.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct ProposeDistribution<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        mut,
        seeds = [MULTI_SIG],
        bump = multisig.bump,
    )]
    pub multisig: Account<'info, MultiSigGovernance>,

    #[account(
        seeds = [TREASURY],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        init,
        payer = proposer,
        space = ANCHOR_DISCRIMINATOR + DistributionProposal::INIT_SPACE,
        seeds = [DISTRIBUTION, multisig.key().as_ref(), &multisig.proposal_count.to_le_bytes()],
        bump
    )]
    pub proposal: Account<'info, DistributionProposal>,

    pub system_program: Program<'info, System>,
}

impl<'info> ProposeDistribution<'info> {
    pub fn propose_distribution(
        &mut self,
        recipient: Pubkey,
        amount: u64,
        bumps: &ProposeDistributionBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        self.emergency.assert_operational(now)?;

        require!(
            self.multisig.is_signer(&self.proposer.key()),
            LaunchpadError::NotASigner
        );
        require!(amount > 0, LaunchpadError::InvalidParameter);
        require!(
            amount <= self.treasury.reserve_balance,
            LaunchpadError::InsufficientReserve
        );

        let id = self.multisig.next_proposal_id()?;

        self.proposal.set_inner(DistributionProposal {
            multisig: self.multisig.key(),
            id,
            proposer: self.proposer.key(),
            recipient,
            amount,
            approvals: 0,
            executed: false,
            created_at: now,
            bump: bumps.proposal,
        });

        // Proposing counts as the first approval
        self.proposal.approve(&self.multisig, &self.proposer.key())?;

        msg!(
            "Distribution proposal {}: {} lamports to {}, 1 approval",
            id,
            amount,
            recipient
        );

        Ok(())
    }
}
