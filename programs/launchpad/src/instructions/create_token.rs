// Create Token Instruction
//
// Issues a new asset: charges the creation fee, mints the full supply, locks
// the creator allocation under a vesting schedule, and counts the launch
// against the creator's rolling weekly window.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{mint_to, Mint, MintTo, Token, TokenAccount},
};

use crate::{constants::*, errors::*, helpers::split_by_percent, state::*};

#[derive(Accounts)]
#[instruction(decimals: u8)]
pub struct CreateToken<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [EMERGENCY],
        bump = emergency.bump,
    )]
    pub emergency: Account<'info, EmergencyControls>,

    #[account(
        seeds = [CONFIG],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, PlatformConfig>>,

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

    #[account(
        mut,
        seeds = [CREATOR, owner.key().as_ref()],
        bump = creator.bump,
    )]
    pub creator: Box<Account<'info, CreatorProfile>>,

    #[account(
        init,
        payer = owner,
        mint::decimals = decimals,
        mint::authority = token_asset,
    )]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + TokenAsset::INIT_SPACE,
        seeds = [TOKEN_ASSET, mint.key().as_ref()],
        bump
    )]
    pub token_asset: Box<Account<'info, TokenAsset>>,

    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + VestingSchedule::INIT_SPACE,
        seeds = [VESTING, mint.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub vesting: Box<Account<'info, VestingSchedule>>,

    #[account(
        init,
        payer = owner,
        seeds = [VESTING_VAULT, vesting.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = vesting,
    )]
    pub vesting_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = owner,
    )]
    pub owner_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateToken<'info> {
    pub fn create_token(
        &mut self,
        decimals: u8,
        total_supply: u64,
        creator_percent: u8,
        vesting_seconds: i64,
        cliff_seconds: i64,
        bumps: &CreateTokenBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;
        let now = clock.unix_timestamp;

        self.emergency.assert_operational(now)?;
        self.creator.assert_eligible(&self.owner.key())?;

        TokenAsset::validate_params(decimals, total_supply, creator_percent, vesting_seconds)?;
        require!(
            cliff_seconds > 0 && cliff_seconds <= vesting_seconds,
            LaunchpadError::InvalidParameter
        );
        self.creator.note_creation(now)?;

        // Creation fee goes straight into the spendable reserve
        if self.config.creation_fee > 0 {
            transfer(
                CpiContext::new(
                    self.system_program.to_account_info(),
                    Transfer {
                        from: self.owner.to_account_info(),
                        to: self.reserve_vault.to_account_info(),
                    },
                ),
                self.config.creation_fee,
            )?;
            self.treasury.credit_fees(self.config.creation_fee)?;
        }

        let (creator_allocation, circulating) = split_by_percent(total_supply, creator_percent)?;

        self.token_asset.set_inner(TokenAsset {
            mint: self.mint.key(),
            creator: self.owner.key(),
            decimals,
            total_supply,
            creator_percent,
            creator_allocation,
            vesting_seconds,
            created_at: now,
            bump: bumps.token_asset,
        });

        let cliff_time = now
            .checked_add(cliff_seconds)
            .ok_or(LaunchpadError::Overflow)?;
        let end_time = now
            .checked_add(vesting_seconds)
            .ok_or(LaunchpadError::Overflow)?;

        self.vesting.set_inner(VestingSchedule {
            owner: self.owner.key(),
            mint: self.mint.key(),
            total_amount: creator_allocation,
            released_amount: 0,
            start_time: now,
            cliff_time,
            end_time,
            choice_deadline: cliff_time
                .checked_add(CHOICE_WINDOW)
                .ok_or(LaunchpadError::Overflow)?,
            choice: ChoiceState::Pending,
            revocable: false,
            revoked: false,
            bump: bumps.vesting,
            vault_bump: bumps.vesting_vault,
        });

        // Mint the full supply: locked allocation into the vesting vault,
        // the rest straight to the creator
        let mint_key = self.mint.key();
        let asset_seeds = &[TOKEN_ASSET, mint_key.as_ref(), &[bumps.token_asset]];
        let signer_seeds = &[&asset_seeds[..]];

        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.mint.to_account_info(),
                    to: self.vesting_vault.to_account_info(),
                    authority: self.token_asset.to_account_info(),
                },
                signer_seeds,
            ),
            creator_allocation,
        )?;

        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.mint.to_account_info(),
                    to: self.owner_token_account.to_account_info(),
                    authority: self.token_asset.to_account_info(),
                },
                signer_seeds,
            ),
            circulating,
        )?;

        msg!(
            "Token created: {} supply {}, {}% vested until {}",
            self.mint.key(),
            total_supply,
            creator_percent,
            end_time
        );

        Ok(())
    }
}
