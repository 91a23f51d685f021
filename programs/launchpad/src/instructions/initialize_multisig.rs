// Initialize Multisig Instruction
//
// Creates the threshold release authority over treasury distributions.

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct InitializeMultisig<'info> {
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
        space = ANCHOR_DISCRIMINATOR + MultiSigGovernance::INIT_SPACE,
        seeds = [MULTI_SIG],
        bump
    )]
    pub multisig: Account<'info, MultiSigGovernance>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeMultisig<'info> {
    pub fn initialize_multisig(
        &mut self,
        signers: Vec<Pubkey>,
        required_signatures: u8,
        distribution_threshold: u64,
        bumps: &InitializeMultisigBumps,
    ) -> Result<()> {
        self.config.assert_admin(&self.admin.key())?;

        self.multisig.set_inner(MultiSigGovernance {
            signers: [Pubkey::default(); MAX_SIGNERS],
            signer_count: 0,
            required_signatures: 0,
            distribution_threshold,
            proposal_count: 0,
            bump: bumps.multisig,
        });
        self.multisig.set_signers(&signers, required_signatures)?;

        msg!(
            "Multisig initialized: {} of {} signers",
            required_signatures,
            signers.len()
        );

        Ok(())
    }
}
