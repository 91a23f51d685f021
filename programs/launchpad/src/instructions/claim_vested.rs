// Claim Vested Instruction
//
// Owner pulls the linearly-accrued portion of the locked allocation out of
// the vesting vault. Fails before the cliff and once the schedule has been
// resolved by a distribution choice.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct ClaimVested<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        mut,
        seeds = [VESTING, mint.key().as_ref(), owner.key().as_ref()],
        bump = vesting.bump,
    )]
    pub vesting: Box<Account<'info, VestingSchedule>>,

    #[account(
        mut,
        seeds = [VESTING_VAULT, vesting.key().as_ref()],
        bump = vesting.vault_bump,
    )]
    pub vesting_vault: Box<Account<'info, TokenAccount>>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = owner,
    )]
    pub owner_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> ClaimVested<'info> {
    pub fn claim_vested(&mut self) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        self.emergency.assert_operational(now)?;

        let claimable = self.vesting.claim(&self.owner.key(), now)?;

        let mint_key = self.mint.key();
        let owner_key = self.vesting.owner;
        let vesting_seeds: &[&[u8]] = &[
            VESTING,
            mint_key.as_ref(),
            owner_key.as_ref(),
            &[self.vesting.bump],
        ];

        transfer_from_vault(
            claimable,
            &self.token_program.to_account_info(),
            &self.vesting_vault.to_account_info(),
            &self.owner_token_account.to_account_info(),
            &self.vesting.to_account_info(),
            vesting_seeds,
        )?;

        msg!(
            "Claimed {} vested tokens, {} released of {}",
            claimable,
            self.vesting.released_amount,
            self.vesting.total_amount
        );

        Ok(())
    }
}
