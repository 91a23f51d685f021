// Launchpad Program
//
// Treasury and market-protection engine for a token-launch platform:
// creator registration and token issuance with vested allocations, LBM
// price-discovery auctions, a fee-funded buyback engine, per-wallet trade
// protection, a global circuit breaker, whale-dampened voting power, a
// multisig gate on large treasury releases, and a global emergency pause.

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod helpers;
pub mod instructions;
pub mod state;

use instructions::*;
use state::{BuybackConfigUpdate, DistributionChoice};

declare_id!("G3sSHT8vacADYgoRgRBj9idi4g1iF4SzSAtBErDdcrGH");

#[program]
pub mod launchpad {
    use super::*;

    // One-time setup

    pub fn initialize_platform(
        ctx: Context<InitializePlatform>,
        treasury_authority: Pubkey,
        emergency_authority: Pubkey,
        creation_fee: u64,
    ) -> Result<()> {
        ctx.accounts.initialize_platform(
            treasury_authority,
            emergency_authority,
            creation_fee,
            &ctx.bumps,
        )
    }

    pub fn initialize_treasury(
        ctx: Context<InitializeTreasury>,
        burn_percent: u8,
        lp_percent: u8,
        min_amount: u64,
        max_amount: u64,
        interval_seconds: i64,
    ) -> Result<()> {
        ctx.accounts.initialize_treasury(
            burn_percent,
            lp_percent,
            min_amount,
            max_amount,
            interval_seconds,
            &ctx.bumps,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn initialize_guards(
        ctx: Context<InitializeGuards>,
        max_price_change_percent: u64,
        max_volume_per_period: u64,
        cooldown_seconds: i64,
        min_trade_interval: i64,
        max_trade_amount: u64,
        max_daily_volume: u64,
        suspicious_threshold: u64,
    ) -> Result<()> {
        ctx.accounts.initialize_guards(
            max_price_change_percent,
            max_volume_per_period,
            cooldown_seconds,
            min_trade_interval,
            max_trade_amount,
            max_daily_volume,
            suspicious_threshold,
            &ctx.bumps,
        )
    }

    pub fn initialize_voting(
        ctx: Context<InitializeVoting>,
        weights: [u8; 4],
        duration_multipliers: [u16; 4],
        whale_threshold: u64,
        whale_discount_percent: u8,
        max_power_per_wallet: u64,
        min_stake_to_vote: u64,
    ) -> Result<()> {
        ctx.accounts.initialize_voting(
            weights,
            duration_multipliers,
            whale_threshold,
            whale_discount_percent,
            max_power_per_wallet,
            min_stake_to_vote,
            &ctx.bumps,
        )
    }

    pub fn initialize_multisig(
        ctx: Context<InitializeMultisig>,
        signers: Vec<Pubkey>,
        required_signatures: u8,
        distribution_threshold: u64,
    ) -> Result<()> {
        ctx.accounts.initialize_multisig(
            signers,
            required_signatures,
            distribution_threshold,
            &ctx.bumps,
        )
    }

    // Creators and token issuance

    pub fn register_creator(ctx: Context<RegisterCreator>, stake_amount: u64) -> Result<()> {
        ctx.accounts.register_creator(stake_amount, &ctx.bumps)
    }

    pub fn set_creator_ban(
        ctx: Context<SetCreatorBan>,
        banned: bool,
        reason: String,
    ) -> Result<()> {
        ctx.accounts.set_creator_ban(banned, reason)
    }

    pub fn create_token(
        ctx: Context<CreateToken>,
        decimals: u8,
        total_supply: u64,
        creator_percent: u8,
        vesting_seconds: i64,
        cliff_seconds: i64,
    ) -> Result<()> {
        ctx.accounts.create_token(
            decimals,
            total_supply,
            creator_percent,
            vesting_seconds,
            cliff_seconds,
            &ctx.bumps,
        )
    }

    // Liquidity bootstrapping

    #[allow(clippy::too_many_arguments)]
    pub fn create_lbm_pool(
        ctx: Context<CreateLbmPool>,
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
    ) -> Result<()> {
        ctx.accounts.create_lbm_pool(
            target_liquidity,
            duration,
            price_discovery_window,
            min_per_wallet,
            max_per_wallet,
            max_total,
            min_total,
            initial_price,
            tokens_for_sale,
            anti_bot_enabled,
            &ctx.bumps,
        )
    }

    pub fn participate_lbm(ctx: Context<ParticipateLbm>, amount: u64) -> Result<()> {
        ctx.accounts.participate_lbm(amount, &ctx.bumps)
    }

    pub fn finalize_lbm(ctx: Context<FinalizeLbm>) -> Result<()> {
        ctx.accounts.finalize_lbm()
    }

    pub fn claim_lbm_refund(ctx: Context<ClaimLbmRefund>) -> Result<()> {
        ctx.accounts.claim_lbm_refund()
    }

    pub fn claim_lbm_tokens(ctx: Context<ClaimLbmTokens>) -> Result<()> {
        ctx.accounts.claim_lbm_tokens()
    }

    // Treasury and buybacks

    pub fn collect_fees(ctx: Context<CollectFees>, amount: u64) -> Result<()> {
        ctx.accounts.collect_fees(amount)
    }

    pub fn record_buyback(
        ctx: Context<RecordBuyback>,
        swap_signature: String,
        usdc_spent: u64,
        tokens_bought: u64,
    ) -> Result<()> {
        ctx.accounts
            .record_buyback(swap_signature, usdc_spent, tokens_bought)
    }

    pub fn update_buyback_config(
        ctx: Context<UpdateBuybackConfig>,
        update: BuybackConfigUpdate,
    ) -> Result<()> {
        ctx.accounts.update_buyback_config(update)
    }

    pub fn burn_buyback_vault(ctx: Context<BurnBuybackVault>, amount: u64) -> Result<()> {
        ctx.accounts.burn_buyback_vault(amount)
    }

    // Treasury distributions

    pub fn propose_distribution(
        ctx: Context<ProposeDistribution>,
        recipient: Pubkey,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts.propose_distribution(recipient, amount, &ctx.bumps)
    }

    pub fn approve_distribution(ctx: Context<ApproveDistribution>) -> Result<()> {
        ctx.accounts.approve_distribution()
    }

    pub fn execute_distribution(ctx: Context<ExecuteDistribution>) -> Result<()> {
        ctx.accounts.execute_distribution()
    }

    // Voting power

    pub fn update_voting_power(
        ctx: Context<UpdateVotingPower>,
        staked_amount: u64,
        staking_months: u32,
        community_contribution: u64,
        token_holding: u64,
    ) -> Result<()> {
        ctx.accounts.update_voting_power(
            staked_amount,
            staking_months,
            community_contribution,
            token_holding,
            &ctx.bumps,
        )
    }

    pub fn update_voting_safeguards(
        ctx: Context<UpdateVotingSafeguards>,
        weights: [u8; 4],
        duration_multipliers: [u16; 4],
        whale_threshold: u64,
        whale_discount_percent: u8,
        max_power_per_wallet: u64,
        min_stake_to_vote: u64,
    ) -> Result<()> {
        ctx.accounts.update_voting_safeguards(
            weights,
            duration_multipliers,
            whale_threshold,
            whale_discount_percent,
            max_power_per_wallet,
            min_stake_to_vote,
        )
    }

    // Market protection admin

    pub fn trip_circuit_breaker(ctx: Context<TripCircuitBreaker>) -> Result<()> {
        ctx.accounts.trip_circuit_breaker()
    }

    pub fn reset_circuit_breaker(ctx: Context<ResetCircuitBreaker>) -> Result<()> {
        ctx.accounts.reset_circuit_breaker()
    }

    pub fn update_trade_limits(
        ctx: Context<UpdateTradeLimits>,
        min_trade_interval: i64,
        max_trade_amount: u64,
        max_daily_volume: u64,
        suspicious_threshold: u64,
    ) -> Result<()> {
        ctx.accounts.update_trade_limits(
            min_trade_interval,
            max_trade_amount,
            max_daily_volume,
            suspicious_threshold,
        )
    }

    // Vesting claims and disposal

    pub fn claim_vested(ctx: Context<ClaimVested>) -> Result<()> {
        ctx.accounts.claim_vested()
    }

    pub fn choose_distribution(
        ctx: Context<ChooseDistribution>,
        choice: DistributionChoice,
    ) -> Result<()> {
        ctx.accounts.choose_distribution(choice)
    }

    pub fn resolve_expired_choice(ctx: Context<ResolveExpiredChoice>) -> Result<()> {
        ctx.accounts.resolve_expired_choice()
    }

    // Emergency controls

    pub fn emergency_pause(
        ctx: Context<EmergencyPause>,
        reason: String,
        auto_resume_time: i64,
    ) -> Result<()> {
        ctx.accounts.emergency_pause(reason, auto_resume_time)
    }

    pub fn resume_from_pause(ctx: Context<ResumeFromPause>) -> Result<()> {
        ctx.accounts.resume_from_pause()
    }
}
