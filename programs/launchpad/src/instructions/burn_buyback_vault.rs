// Burn Buyback Vault Instruction
//
// Direct authority-triggered burn of tokens sitting in the buyback vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, helpers::burn_from_vault, state::*};

#[derive(Accounts)]
pub struct BurnBuybackVault<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        mut,
        seeds = [BUYBACK_CONFIG],
        bump = buyback_config.bump,
        has_one = authority,
    )]
    pub buyback_config: Account<'info, BuybackConfig>,

    #[account(
        mut,
        seeds = [TREASURY],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        mut,
        address = treasury.platform_mint @ LaunchpadError::InvalidParameter,
    )]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        address = treasury.buyback_vault @ LaunchpadError::InvalidParameter,
    )]
    pub buyback_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> BurnBuybackVault<'info> {
    pub fn burn_buyback_vault(&mut self, amount: u64) -> Result<()> {
        let clock = Clock::get()?;
        self.emergency.assert_operational(clock.unix_timestamp)?;

        require!(
            amount > 0 && self.buyback_vault.amount >= amount,
            LaunchpadError::NoTokensToProcess
        );

        let treasury_seeds: &[&[u8]] = &[TREASURY, &[self.treasury.bump]];

        burn_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.mint.to_account_info(),
            &self.buyback_vault.to_account_info(),
            &self.treasury.to_account_info(),
            treasury_seeds,
        )?;

        self.buyback_config.total_tokens_burned = self
            .buyback_config
            .total_tokens_burned
            .checked_add(amount as u128)
            .ok_or(LaunchpadError::Overflow)?;
        self.treasury.note_burn(amount)?;

        msg!("Burned {} from buyback vault", amount);

        Ok(())
    }
}
