// Claim LBM Refund Instruction
//
// Pull-based refund for one wallet after an under-subscribed auction.
// Each position pays out exactly once.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct ClaimLbmRefund<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        seeds = [LBM_POOL, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, LbmPool>,

    #[account(
        mut,
        seeds = [LBM_VAULT, pool.key().as_ref()],
        bump = pool.vault_bump,
    )]
    pub pool_vault: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [LBM_POSITION, pool.key().as_ref(), participant.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, LbmPosition>,

    pub system_program: Program<'info, System>,
}

impl<'info> ClaimLbmRefund<'info> {
    pub fn claim_lbm_refund(&mut self) -> Result<()> {
        let clock = Clock::get()?;
        self.emergency.assert_operational(clock.unix_timestamp)?;

        let amount = self.position.take_refund(&self.pool)?;

        let pool_key = self.pool.key();
        let vault_seeds = &[LBM_VAULT, pool_key.as_ref(), &[self.pool.vault_bump]];
        let signer_seeds = &[&vault_seeds[..]];

        transfer(
            CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.pool_vault.to_account_info(),
                    to: self.participant.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        msg!("Refund paid: {} lamports to {}", amount, self.participant.key());

        Ok(())
    }
}
