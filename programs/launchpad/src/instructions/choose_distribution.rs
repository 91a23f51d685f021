// Choose Distribution Instruction
//
// The creator's one-shot disposal of the unclaimed allocation balance:
// Withdraw keeps all of it, Burn and Distribute release half and burn or
// redistribute the rest.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct ChooseDistribution<'info> {
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

    #[account(mut)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = owner,
    )]
    pub owner_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        seeds = [TREASURY],
        bump = treasury.bump,
    )]
    pub treasury: Box<Account<'info, Treasury>>,

    // Redistribution target for the Distribute half
    #[account(
        mut,
        token::mint = mint,
        token::authority = treasury,
    )]
    pub community_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> ChooseDistribution<'info> {
    pub fn choose_distribution(&mut self, choice: DistributionChoice) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        self.emergency.assert_operational(now)?;

        let payout = self.vesting.choose(&self.owner.key(), choice, now)?;
        self.settle(&payout)?;

        msg!(
            "Distribution choice {:?}: {} to owner, {} burned, {} to community",
            choice,
            payout.to_owner,
            payout.to_burn,
            payout.to_community
        );

        Ok(())
    }

    // Move the three payout legs out of the vesting vault
    pub(crate) fn settle(&self, payout: &ChoicePayout) -> Result<()> {
        let mint_key = self.mint.key();
        let owner_key = self.vesting.owner;
        let vesting_seeds: &[&[u8]] = &[
            VESTING,
            mint_key.as_ref(),
            owner_key.as_ref(),
            &[self.vesting.bump],
        ];

        if payout.to_owner > 0 {
            transfer_from_vault(
                payout.to_owner,
                &self.token_program.to_account_info(),
                &self.vesting_vault.to_account_info(),
                &self.owner_token_account.to_account_info(),
                &self.vesting.to_account_info(),
                vesting_seeds,
            )?;
        }

        if payout.to_burn > 0 {
            burn_from_vault(
                payout.to_burn,
                &self.token_program.to_account_info(),
                &self.mint.to_account_info(),
                &self.vesting_vault.to_account_info(),
                &self.vesting.to_account_info(),
                vesting_seeds,
            )?;
        }

        if payout.to_community > 0 {
            transfer_from_vault(
                payout.to_community,
                &self.token_program.to_account_info(),
                &self.vesting_vault.to_account_info(),
                &self.community_vault.to_account_info(),
                &self.vesting.to_account_info(),
                vesting_seeds,
            )?;
        }

        Ok(())
    }
}
