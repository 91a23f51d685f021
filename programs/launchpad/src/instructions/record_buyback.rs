// Record Buyback Instruction
//
// Finalizes the outcome of a swap executed by the off-chain collaborator:
// verifies the bought tokens actually landed in the buyback vault, then
// burns the burn share and moves the rest to the LP vault. The external
// swap signature is logged for off-chain reconciliation.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct RecordBuyback<'info> {
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

    // Receives the swap output; the treasury PDA is its authority
    #[account(
        mut,
        address = treasury.buyback_vault @ LaunchpadError::InvalidParameter,
    )]
    pub buyback_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        address = treasury.lp_vault @ LaunchpadError::InvalidParameter,
    )]
    pub lp_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> RecordBuyback<'info> {
    pub fn record_buyback(
        &mut self,
        swap_signature: String,
        usdc_spent: u64,
        tokens_bought: u64,
    ) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        self.emergency.assert_operational(now)?;

        // A forged finalization cannot claim more than the vault holds
        require!(
            self.buyback_vault.amount >= tokens_bought,
            LaunchpadError::BuybackNotVerified
        );

        let (burn_amount, lp_amount) =
            self.buyback_config
                .finalize(&self.authority.key(), usdc_spent, tokens_bought, now)?;
        self.treasury
            .note_buyback(usdc_spent, tokens_bought, burn_amount, lp_amount)?;

        let treasury_seeds: &[&[u8]] = &[TREASURY, &[self.treasury.bump]];

        burn_from_vault(
            burn_amount,
            &self.token_program.to_account_info(),
            &self.mint.to_account_info(),
            &self.buyback_vault.to_account_info(),
            &self.treasury.to_account_info(),
            treasury_seeds,
        )?;

        transfer_from_vault(
            lp_amount,
            &self.token_program.to_account_info(),
            &self.buyback_vault.to_account_info(),
            &self.lp_vault.to_account_info(),
            &self.treasury.to_account_info(),
            treasury_seeds,
        )?;

        msg!(
            "Buyback {} finalized: spent {} USDC, burned {}, to LP {}",
            swap_signature,
            usdc_spent,
            burn_amount,
            lp_amount
        );

        Ok(())
    }
}
