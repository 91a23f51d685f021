// Initialize Treasury Instruction
//
// Creates the treasury, its lamport reserve vault, the platform-token buyback
// and LP vaults, and the buyback policy.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [CONFIG],
        bump = config.bump,
    )]
    pub config: Account<'info, PlatformConfig>,

    // The token the buyback engine purchases
    pub platform_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + Treasury::INIT_SPACE,
        seeds = [TREASURY],
        bump
    )]
    pub treasury: Box<Account<'info, Treasury>>,

    // Lamport vault holding the spendable reserve
    #[account(
        seeds = [RESERVE_VAULT, treasury.key().as_ref()],
        bump
    )]
    pub reserve_vault: SystemAccount<'info>,

    #[account(
        init,
        payer = admin,
        seeds = [BUYBACK_VAULT, treasury.key().as_ref()],
        bump,
        token::mint = platform_mint,
        token::authority = treasury,
    )]
    pub buyback_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = admin,
        seeds = [LP_VAULT, treasury.key().as_ref()],
        bump,
        token::mint = platform_mint,
        token::authority = treasury,
    )]
    pub lp_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + BuybackConfig::INIT_SPACE,
        seeds = [BUYBACK_CONFIG],
        bump
    )]
    pub buyback_config: Box<Account<'info, BuybackConfig>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeTreasury<'info> {
    pub fn initialize_treasury(
        &mut self,
        burn_percent: u8,
        lp_percent: u8,
        min_amount: u64,
        max_amount: u64,
        interval_seconds: i64,
        bumps: &InitializeTreasuryBumps,
    ) -> Result<()> {
        self.config.assert_admin(&self.admin.key())?;

        BuybackConfig::validate_percentages(burn_percent, lp_percent)?;
        BuybackConfig::validate_band(min_amount, max_amount)?;
        require!(interval_seconds >= 0, LaunchpadError::InvalidParameter);

        let clock = Clock::get()?;

        self.treasury.set_inner(Treasury {
            authority: self.config.treasury_authority,
            platform_mint: self.platform_mint.key(),
            buyback_vault: self.buyback_vault.key(),
            lp_vault: self.lp_vault.key(),
            reserve_balance: 0,
            total_fees_collected: 0,
            total_raised: 0,
            total_distributed: 0,
            total_usdc_spent: 0,
            total_tokens_bought: 0,
            total_tokens_burned: 0,
            total_tokens_to_lp: 0,
            created_at: clock.unix_timestamp,
            bump: bumps.treasury,
            vault_bump: bumps.reserve_vault,
        });

        self.buyback_config.set_inner(BuybackConfig {
            authority: self.config.treasury_authority,
            enabled: true,
            burn_percent,
            lp_percent,
            min_amount,
            max_amount,
            interval_seconds,
            last_buyback_time: 0,
            total_buybacks: 0,
            total_usdc_spent: 0,
            total_tokens_bought: 0,
            total_tokens_burned: 0,
            total_tokens_to_lp: 0,
            bump: bumps.buyback_config,
        });

        msg!(
            "Treasury initialized, buyback split {}/{}",
            burn_percent,
            lp_percent
        );

        Ok(())
    }
}
