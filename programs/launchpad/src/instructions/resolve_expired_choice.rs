// Resolve Expired Choice Instruction
//
// Permissionless fallback once the choice window has lapsed with no
// submission: the Distribute default is applied so funds never sit in limbo.
// The owner's half goes to their token account, the rest to the community
// vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct ResolveExpiredChoice<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        mut,
        seeds = [VESTING, mint.key().as_ref(), vesting.owner.as_ref()],
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
        mut,
        token::mint = mint,
        token::authority = vesting.owner,
    )]
    pub owner_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        seeds = [TREASURY],
        bump = treasury.bump,
    )]
    pub treasury: Box<Account<'info, Treasury>>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = treasury,
    )]
    pub community_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> ResolveExpiredChoice<'info> {
    pub fn resolve_expired_choice(&mut self) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        self.emergency.assert_operational(now)?;

        let payout = self.vesting.resolve_expired(now)?;

        let mint_key = self.mint.key();
        let owner_key = self.vesting.owner;
        let vesting_seeds: &[&[u8]] = &[
            VESTING,
            mint_key.as_ref(),
            owner_key.as_ref(),
            &[self.vesting.bump],
        ];

        transfer_from_vault(
            payout.to_owner,
            &self.token_program.to_account_info(),
            &self.vesting_vault.to_account_info(),
            &self.owner_token_account.to_account_info(),
            &self.vesting.to_account_info(),
            vesting_seeds,
        )?;

        transfer_from_vault(
            payout.to_community,
            &self.token_program.to_account_info(),
            &self.vesting_vault.to_account_info(),
            &self.community_vault.to_account_info(),
            &self.vesting.to_account_info(),
            vesting_seeds,
        )?;

        msg!(
            "Expired choice auto-distributed: {} to owner, {} to community",
            payout.to_owner,
            payout.to_community
        );

        Ok(())
    }
}
