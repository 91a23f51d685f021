// Claim LBM Tokens Instruction
//
// Pays out a participant's pro-rata share of the sale tokens after a funded
// auction, once the price-discovery phase has elapsed. One claim per wallet.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, helpers::transfer_from_vault, state::*};

#[derive(Accounts)]
pub struct ClaimLbmTokens<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        seeds = [LBM_POOL, mint.key().as_ref()],
        bump = pool.bump,
        has_one = mint,
    )]
    pub pool: Box<Account<'info, LbmPool>>,

    #[account(
        mut,
        seeds = [LBM_TOKEN_VAULT, pool.key().as_ref()],
        bump = pool.token_vault_bump,
    )]
    pub pool_token_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [LBM_POSITION, pool.key().as_ref(), participant.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Box<Account<'info, LbmPosition>>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = participant,
        associated_token::mint = mint,
        associated_token::authority = participant,
    )]
    pub participant_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> ClaimLbmTokens<'info> {
    pub fn claim_lbm_tokens(&mut self) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        self.emergency.assert_operational(now)?;

        let share = self.position.take_token_allocation(&self.pool, now)?;

        let mint_key = self.pool.mint;
        let pool_seeds: &[&[u8]] = &[LBM_POOL, mint_key.as_ref(), &[self.pool.bump]];

        transfer_from_vault(
            share,
            &self.token_program.to_account_info(),
            &self.pool_token_vault.to_account_info(),
            &self.participant_token_account.to_account_info(),
            &self.pool.to_account_info(),
            pool_seeds,
        )?;

        msg!(
            "LBM tokens claimed: {} to {}",
            share,
            self.participant.key()
        );

        Ok(())
    }
}
