// Finalize LBM Instruction
//
// Closes the auction exactly once. A funded raise sweeps the vault into the
// treasury reserve and seeds a treasury-held liquidity position at the
// final price; an under-subscribed one leaves the vault in place and opens
// per-wallet refund claims.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, helpers::transfer_from_vault, state::*};

#[derive(Accounts)]
pub struct FinalizeLbm<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        mut,
        seeds = [LBM_POOL, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, LbmPool>>,

    #[account(
        mut,
        seeds = [LBM_VAULT, pool.key().as_ref()],
        bump = pool.vault_bump,
    )]
    pub pool_vault: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [LBM_TOKEN_VAULT, pool.key().as_ref()],
        bump = pool.token_vault_bump,
    )]
    pub pool_token_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [TREASURY],
        bump = treasury.bump,
    )]
    pub treasury: Box<Account<'info, Treasury>>,

    #[account(
        mut,
        seeds = [RESERVE_VAULT, treasury.key().as_ref()],
        bump = treasury.vault_bump,
    )]
    pub reserve_vault: SystemAccount<'info>,

    // Treasury-held token side of the seeded liquidity position
    #[account(
        mut,
        token::mint = pool.mint,
        token::authority = treasury,
    )]
    pub treasury_lp_account: Box<Account<'info, TokenAccount>>,

    // Escrow return target on the refund path
    #[account(
        mut,
        token::mint = pool.mint,
        token::authority = creator,
    )]
    pub creator_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> FinalizeLbm<'info> {
    pub fn finalize_lbm(&mut self) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        self.emergency.assert_operational(now)?;

        let funded = self.pool.finalize(&self.creator.key(), now)?;

        if funded {
            let raised = self.pool.current_liquidity;

            let pool_key = self.pool.key();
            let vault_seeds = &[LBM_VAULT, pool_key.as_ref(), &[self.pool.vault_bump]];
            let signer_seeds = &[&vault_seeds[..]];

            transfer(
                CpiContext::new_with_signer(
                    self.system_program.to_account_info(),
                    Transfer {
                        from: self.pool_vault.to_account_info(),
                        to: self.reserve_vault.to_account_info(),
                    },
                    signer_seeds,
                ),
                raised,
            )?;
            self.treasury.credit_raise(raised)?;

            // Seed the position: the raised lamports in the reserve paired
            // with tokens at the final-price ratio under treasury custody
            let lp_tokens = self.pool.lp_tokens_seeded;
            if lp_tokens > 0 {
                let mint_key = self.pool.mint;
                let pool_seeds: &[&[u8]] =
                    &[LBM_POOL, mint_key.as_ref(), &[self.pool.bump]];

                transfer_from_vault(
                    lp_tokens,
                    &self.token_program.to_account_info(),
                    &self.pool_token_vault.to_account_info(),
                    &self.treasury_lp_account.to_account_info(),
                    &self.pool.to_account_info(),
                    pool_seeds,
                )?;
            }

            msg!(
                "LBM finalized: raised {}, final price {}, {} tokens seeded",
                raised,
                self.pool.final_price,
                lp_tokens
            );
        } else {
            // Refund path: the escrowed sale tokens go back to the creator
            let escrowed = self.pool_token_vault.amount;
            if escrowed > 0 {
                let mint_key = self.pool.mint;
                let pool_seeds: &[&[u8]] =
                    &[LBM_POOL, mint_key.as_ref(), &[self.pool.bump]];

                transfer_from_vault(
                    escrowed,
                    &self.token_program.to_account_info(),
                    &self.pool_token_vault.to_account_info(),
                    &self.creator_token_account.to_account_info(),
                    &self.pool.to_account_info(),
                    pool_seeds,
                )?;
            }

            msg!(
                "LBM under-subscribed: {} of {} minimum, refunds enabled",
                self.pool.current_liquidity,
                self.pool.min_total_liquidity
            );
        }

        Ok(())
    }
}
