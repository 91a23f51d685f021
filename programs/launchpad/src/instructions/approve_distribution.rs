// Approve Distribution Instruction
//
// One approval per signer, tracked as a bit per signer-set slot.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct ApproveDistribution<'info> {
    pub signer: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        seeds = [MULTI_SIG],
        bump = multisig.bump,
    )]
    pub multisig: Account<'info, MultiSigGovernance>,

    #[account(
        mut,
        seeds = [DISTRIBUTION, multisig.key().as_ref(), &proposal.id.to_le_bytes()],
        bump = proposal.bump,
    )]
    pub proposal: Account<'info, DistributionProposal>,
}

impl<'info> ApproveDistribution<'info> {
    pub fn approve_distribution(&mut self) -> Result<()> {
        let clock = Clock::get()?;
        self.emergency.assert_operational(clock.unix_timestamp)?;

        self.proposal.approve(&self.multisig, &self.signer.key())?;

        msg!(
            "Proposal {} approved by {}: {}/{}",
            self.proposal.id,
            self.signer.key(),
            self.proposal.approval_count(),
            self.multisig.required_signatures
        );

        Ok(())
    }
}
