// Collect Fees Instruction
//
// Permissionless deposit of protocol fees into the treasury reserve.
// Fund movement and counter update land in the same transaction.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct CollectFees<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

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

    pub system_program: Program<'info, System>,
}

impl<'info> CollectFees<'info> {
    pub fn collect_fees(&mut self, amount: u64) -> Result<()> {
        let clock = Clock::get()?;
        self.emergency.assert_operational(clock.unix_timestamp)?;

        require!(amount > 0, LaunchpadError::InvalidParameter);

        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.payer.to_account_info(),
                    to: self.reserve_vault.to_account_info(),
                },
            ),
            amount,
        )?;
        self.treasury.credit_fees(amount)?;

        msg!("Fees collected: {} lamports", amount);

        Ok(())
    }
}
