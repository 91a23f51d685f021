// Execute Distribution Instruction
//
// Pays out an approved proposal from the treasury reserve. Amounts above
// the distribution threshold need the multisig quorum; smaller ones only
// need the treasury authority. Transfer and accounting land atomically.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct ExecuteDistribution<'info> {
    pub executor: Signer<'info>,

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
        seeds = [TREASURY],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        mut,
        seeds = [RESERVE_VAULT, treasury.key().as_ref()],
        bump = treasury.vault_bump,
    )]
    pub reserve_vault: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [DISTRIBUTION, multisig.key().as_ref(), &proposal.id.to_le_bytes()],
        bump = proposal.bump,
    )]
    pub proposal: Account<'info, DistributionProposal>,

    /// CHECK: Must match the recipient recorded on the proposal
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ExecuteDistribution<'info> {
    pub fn execute_distribution(&mut self) -> Result<()> {
        let clock = Clock::get()?;
        self.emergency.assert_operational(clock.unix_timestamp)?;

        require_keys_eq!(
            self.proposal.recipient,
            self.recipient.key(),
            LaunchpadError::InvalidParameter
        );

        if self.multisig.needs_quorum(self.proposal.amount) {
            self.proposal.mark_executed(&self.multisig)?;
        } else {
            // Below the threshold the treasury authority alone releases
            self.treasury.assert_authority(&self.executor.key())?;
            require!(
                !self.proposal.executed,
                LaunchpadError::DistributionAlreadyExecuted
            );
            self.proposal.executed = true;
        }

        self.treasury.debit_distribution(self.proposal.amount)?;

        let treasury_key = self.treasury.key();
        let vault_seeds = &[
            RESERVE_VAULT,
            treasury_key.as_ref(),
            &[self.treasury.vault_bump],
        ];
        let signer_seeds = &[&vault_seeds[..]];

        transfer(
            CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.reserve_vault.to_account_info(),
                    to: self.recipient.to_account_info(),
                },
                signer_seeds,
            ),
            self.proposal.amount,
        )?;

        msg!(
            "Distribution {} executed: {} lamports to {}",
            self.proposal.id,
            self.proposal.amount,
            self.recipient.key()
        );

        Ok(())
    }
}
