// Create LBM Pool Instruction
//
// Opens a price-discovery auction for an issued asset. Contributions are
// lamports held in a pool-owned vault until finalization; the tokens on
// sale are escrowed up front in a pool-owned token vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, helpers::transfer_tokens, state::*};

#[derive(Accounts)]
pub struct CreateLbmPool<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        seeds = [CREATOR, creator.key().as_ref()],
        bump = creator_profile.bump,
    )]
    pub creator_profile: Account<'info, CreatorProfile>,

    #[account(
        seeds = [TOKEN_ASSET, mint.key().as_ref()],
        bump = token_asset.bump,
        has_one = creator,
        has_one = mint,
    )]
    pub token_asset: Account<'info, TokenAsset>,

    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + LbmPool::INIT_SPACE,
        seeds = [LBM_POOL, mint.key().as_ref()],
        bump
    )]
    pub pool: Box<Account<'info, LbmPool>>,

    // Lamport vault for raised contributions
    #[account(
        seeds = [LBM_VAULT, pool.key().as_ref()],
        bump
    )]
    pub pool_vault: SystemAccount<'info>,

    // Escrow for the tokens on sale
    #[account(
        init,
        payer = creator,
        seeds = [LBM_TOKEN_VAULT, pool.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = pool,
    )]
    pub pool_token_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = creator,
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateLbmPool<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn create_lbm_pool(
        &mut self,
        target_liquidity: u64,
        duration: i64,
        price_discovery_window: i64,
        min_per_wallet: u64,
        max_per_wallet: u64,
        max_total: u64,
        min_total: u64,
        initial_price: u64,
        tokens_for_sale: u64,
        anti_bot_enabled: bool,
        bumps: &CreateLbmPoolBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        self.emergency.assert_operational(now)?;
        self.creator_profile.assert_eligible(&self.creator.key())?;

        LbmPool::validate_params(
            target_liquidity,
            duration,
            price_discovery_window,
            min_per_wallet,
            max_per_wallet,
            max_total,
            min_total,
            initial_price,
            tokens_for_sale,
        )?;
        require!(
            self.creator_token_account.amount >= tokens_for_sale,
            LaunchpadError::NoTokensToProcess
        );

        let end_time = now
            .checked_add(duration)
            .ok_or(LaunchpadError::Overflow)?;
        let price_discovery_end = end_time
            .checked_add(price_discovery_window)
            .ok_or(LaunchpadError::Overflow)?;

        self.pool.set_inner(LbmPool {
            creator: self.creator.key(),
            mint: self.mint.key(),
            target_liquidity,
            current_liquidity: 0,
            min_total_liquidity: min_total,
            tokens_for_sale,
            lp_tokens_seeded: 0,
            start_time: now,
            end_time,
            price_discovery_end,
            min_per_wallet,
            max_per_wallet,
            max_total,
            initial_price,
            current_price: initial_price,
            final_price: 0,
            total_participants: 0,
            anti_bot_enabled,
            active: true,
            price_discovery_complete: false,
            refunds_enabled: false,
            created_at: now,
            bump: bumps.pool,
            vault_bump: bumps.pool_vault,
            token_vault_bump: bumps.pool_token_vault,
        });

        transfer_tokens(
            tokens_for_sale,
            &self.token_program.to_account_info(),
            &self.creator_token_account.to_account_info(),
            &self.pool_token_vault.to_account_info(),
            &self.creator.to_account_info(),
        )?;

        msg!(
            "LBM pool opened for {}: target {}, {} tokens on sale, ends {}",
            self.mint.key(),
            target_liquidity,
            tokens_for_sale,
            end_time
        );

        Ok(())
    }
}
