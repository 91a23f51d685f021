use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

// Liquidity bootstrapping pool
//
// Price-discovery auction for one asset: contributions accumulate while
// the pool is active, the price tracks the liquidity ratio, and finalize
// either sweeps the raised funds into the treasury (seeding a liquidity
// position at the final price) or opens pro-rata refunds when the aggregate
// minimum was not reached. Participant token allocations unlock once the
// discovery phase after the bootstrap window has elapsed.
#[account]
#[derive(InitSpace)]
pub struct LbmPool {
    pub creator: Pubkey,

    pub mint: Pubkey,

    // Liquidity the auction aims to raise (lamports)
    pub target_liquidity: u64,

    // Sum of all recorded participations; never decreases while active
    pub current_liquidity: u64,

    // Aggregate floor: finalizing below this refunds everyone
    pub min_total_liquidity: u64,

    // Tokens the creator escrowed for sale, and the slice of them seeded
    // into the treasury liquidity position at finalize
    pub tokens_for_sale: u64,
    pub lp_tokens_seeded: u64,

    // Participation window [start_time, end_time), then a discovery phase
    // until price_discovery_end before token allocations unlock
    pub start_time: i64,
    pub end_time: i64,
    pub price_discovery_end: i64,

    // Per-wallet bounds and pool-wide cap
    pub min_per_wallet: u64,
    pub max_per_wallet: u64,
    pub max_total: u64,

    // Prices in lamports per token unit
    pub initial_price: u64,
    pub current_price: u64,
    pub final_price: u64,

    pub total_participants: u32,

    pub anti_bot_enabled: bool,

    pub active: bool,
    pub price_discovery_complete: bool,
    pub refunds_enabled: bool,

    pub created_at: i64,

    pub bump: u8,
    pub vault_bump: u8,
    pub token_vault_bump: u8,
}

// Per-wallet contribution record, one PDA per (pool, wallet)
#[account]
#[derive(InitSpace)]
pub struct LbmPosition {
    pub pool: Pubkey,

    pub wallet: Pubkey,

    // Cumulative contribution across all participations
    pub amount: u64,

    pub first_participation_at: i64,

    pub refunded: bool,
    pub tokens_claimed: bool,

    pub bump: u8,
}

// Deterministic discovery curve, linear in the liquidity ratio:
//
//   price = initial + initial * current / target
//
// Pure and side-effect free so any client can reproduce the quote.
pub fn discovered_price(initial_price: u64, current_liquidity: u64, target_liquidity: u64) -> Result<u64> {
    require!(target_liquidity > 0, LaunchpadError::DivisionByZero);

    let premium = (initial_price as u128)
        .checked_mul(current_liquidity as u128)
        .ok_or(LaunchpadError::Overflow)?
        .checked_div(target_liquidity as u128)
        .ok_or(LaunchpadError::DivisionByZero)?;

    let price = (initial_price as u128)
        .checked_add(premium)
        .ok_or(LaunchpadError::Overflow)?;

    u64::try_from(price).map_err(|_| LaunchpadError::Overflow.into())
}

impl LbmPool {
    #[allow(clippy::too_many_arguments)]
    pub fn validate_params(
        target_liquidity: u64,
        duration: i64,
        price_discovery_window: i64,
        min_per_wallet: u64,
        max_per_wallet: u64,
        max_total: u64,
        min_total: u64,
        initial_price: u64,
        tokens_for_sale: u64,
    ) -> Result<()> {
        require!(
            target_liquidity >= MIN_TARGET_LIQUIDITY,
            LaunchpadError::InsufficientLiquidity
        );
        require!(
            duration > 0 && duration <= MAX_BOOTSTRAP_DURATION,
            LaunchpadError::InvalidParameter
        );
        require!(
            price_discovery_window > 0 && price_discovery_window <= MAX_BOOTSTRAP_DURATION,
            LaunchpadError::InvalidParameter
        );
        require!(tokens_for_sale > 0, LaunchpadError::InvalidParameter);
        require!(
            max_per_wallet >= min_per_wallet && max_per_wallet > 0,
            LaunchpadError::InvalidParameter
        );
        require!(max_total >= target_liquidity, LaunchpadError::InvalidParameter);
        require!(min_total <= target_liquidity, LaunchpadError::InvalidParameter);
        require!(initial_price > 0, LaunchpadError::InvalidParameter);
        Ok(())
    }

    // Pool admits participations only while active and inside [start, end)
    pub fn assert_open(&self, now: i64) -> Result<()> {
        require!(self.active, LaunchpadError::PoolInactive);
        require!(
            now >= self.start_time && now < self.end_time,
            LaunchpadError::PoolInactive
        );
        Ok(())
    }

    // Admit a contribution and reprice the pool.
    // `position_amount` is the wallet's contribution so far; every check
    // runs before the first field is written.
    pub fn record_participation(&mut self, position_amount: u64, amount: u64, now: i64) -> Result<()> {
        self.assert_open(now)?;

        require!(
            amount >= self.min_per_wallet,
            LaunchpadError::InsufficientParticipationAmount
        );

        let wallet_total = position_amount
            .checked_add(amount)
            .ok_or(LaunchpadError::Overflow)?;
        require!(
            wallet_total <= self.max_per_wallet,
            LaunchpadError::ParticipationLimitExceeded
        );

        let pool_total = self
            .current_liquidity
            .checked_add(amount)
            .ok_or(LaunchpadError::Overflow)?;
        require!(
            pool_total <= self.max_total,
            LaunchpadError::ParticipationLimitExceeded
        );

        self.current_liquidity = pool_total;
        self.current_price =
            discovered_price(self.initial_price, self.current_liquidity, self.target_liquidity)?;

        // First-time wallets only
        if position_amount == 0 {
            self.total_participants = self
                .total_participants
                .checked_add(1)
                .ok_or(LaunchpadError::Overflow)?;
        }

        Ok(())
    }

    pub fn can_finalize(&self, now: i64) -> bool {
        now >= self.end_time || self.current_liquidity >= self.target_liquidity
    }

    // One-shot, irreversible. Returns true when the raise met the aggregate
    // floor (discovery complete, funds sweep to treasury, liquidity position
    // seeded at the final price), false when the pool is under-subscribed
    // and every contribution must be refunded.
    pub fn finalize(&mut self, caller: &Pubkey, now: i64) -> Result<bool> {
        require_keys_eq!(*caller, self.creator, LaunchpadError::Unauthorized);
        require!(self.active, LaunchpadError::PoolAlreadyFinalized);
        require!(self.can_finalize(now), LaunchpadError::PoolStillActive);

        self.active = false;

        if self.current_liquidity >= self.min_total_liquidity {
            self.final_price = if self.current_liquidity > 0 {
                self.current_price
            } else {
                self.initial_price
            };
            self.price_discovery_complete = true;

            // Token side of the seeded position: raised / final_price keeps
            // the final price as the lamport/token ratio, capped by escrow
            let seed = (self.current_liquidity as u128)
                .checked_div(self.final_price as u128)
                .ok_or(LaunchpadError::DivisionByZero)?;
            self.lp_tokens_seeded = u64::try_from(seed)
                .unwrap_or(u64::MAX)
                .min(self.tokens_for_sale);

            Ok(true)
        } else {
            self.refunds_enabled = true;
            Ok(false)
        }
    }

    // Escrowed tokens left for participants after the position was seeded
    pub fn claimable_sale_tokens(&self) -> u64 {
        self.tokens_for_sale.saturating_sub(self.lp_tokens_seeded)
    }
}

impl LbmPosition {
    // Take the wallet's refund exactly once; the pool keeps nothing back
    pub fn take_refund(&mut self, pool: &LbmPool) -> Result<u64> {
        require!(pool.refunds_enabled, LaunchpadError::RefundsNotEnabled);
        require!(!self.refunded, LaunchpadError::RefundAlreadyClaimed);
        require!(self.amount > 0, LaunchpadError::RefundAlreadyClaimed);

        self.refunded = true;
        Ok(self.amount)
    }

    // Pro-rata share of the sale tokens, claimable once after the discovery
    // phase has elapsed
    pub fn take_token_allocation(&mut self, pool: &LbmPool, now: i64) -> Result<u64> {
        require!(
            pool.price_discovery_complete,
            LaunchpadError::PriceDiscoveryNotComplete
        );
        require!(
            now >= pool.price_discovery_end,
            LaunchpadError::PriceDiscoveryNotComplete
        );
        require!(!self.tokens_claimed, LaunchpadError::TokensAlreadyClaimed);
        require!(self.amount > 0, LaunchpadError::TokensAlreadyClaimed);
        require!(pool.current_liquidity > 0, LaunchpadError::DivisionByZero);

        let share = (self.amount as u128)
            .checked_mul(pool.claimable_sale_tokens() as u128)
            .ok_or(LaunchpadError::Overflow)?
            .checked_div(pool.current_liquidity as u128)
            .ok_or(LaunchpadError::DivisionByZero)?;

        self.tokens_claimed = true;
        u64::try_from(share).map_err(|_| LaunchpadError::Overflow.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(now: i64) -> LbmPool {
        LbmPool {
            creator: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            target_liquidity: 10_000_000_000,
            current_liquidity: 0,
            min_total_liquidity: 5_000_000_000,
            tokens_for_sale: 100_000_000,
            lp_tokens_seeded: 0,
            start_time: now,
            end_time: now + 3_600,
            price_discovery_end: now + 7_200,
            min_per_wallet: 100_000_000,
            max_per_wallet: 2_000_000_000,
            max_total: 20_000_000_000,
            initial_price: 1_000,
            current_price: 1_000,
            final_price: 0,
            total_participants: 0,
            anti_bot_enabled: true,
            active: true,
            price_discovery_complete: false,
            refunds_enabled: false,
            created_at: now,
            bump: 255,
            vault_bump: 255,
            token_vault_bump: 255,
        }
    }

    fn position(amount: u64) -> LbmPosition {
        LbmPosition {
            pool: Pubkey::new_unique(),
            wallet: Pubkey::new_unique(),
            amount,
            first_participation_at: 10,
            refunded: false,
            tokens_claimed: false,
            bump: 255,
        }
    }

    #[test]
    fn curve_is_monotonic_and_bounded() {
        let mut last = 0;
        for liquidity in (0..=10_000_000_000u64).step_by(1_000_000_000) {
            let price = discovered_price(1_000, liquidity, 10_000_000_000).unwrap();
            assert!(price >= last);
            last = price;
        }
        // Full subscription exactly doubles the initial price
        assert_eq!(last, 2_000);
    }

    #[test]
    fn liquidity_tracks_sum_of_participations() {
        let mut p = pool(0);
        p.record_participation(0, 500_000_000, 10).unwrap();
        p.record_participation(500_000_000, 500_000_000, 20).unwrap();
        p.record_participation(0, 250_000_000, 30).unwrap();
        assert_eq!(p.current_liquidity, 1_250_000_000);
        // Two distinct wallets
        assert_eq!(p.total_participants, 2);
    }

    #[test]
    fn per_wallet_cap_is_exact() {
        let mut p = pool(0);
        // Exactly max_per_wallet succeeds
        p.record_participation(0, 2_000_000_000, 10).unwrap();
        // One unit over fails and leaves the pool untouched
        let before = p.current_liquidity;
        let err = p.record_participation(2_000_000_000, 100_000_000, 20);
        assert!(err.is_err());
        assert_eq!(p.current_liquidity, before);

        let mut q = pool(0);
        assert!(q.record_participation(0, 2_000_000_001, 10).is_err());
        assert_eq!(q.current_liquidity, 0);
        assert_eq!(q.total_participants, 0);
    }

    #[test]
    fn rejects_below_minimum_and_outside_window() {
        let mut p = pool(0);
        assert!(p.record_participation(0, 99_999_999, 10).is_err());
        assert!(p.record_participation(0, 100_000_000, 3_600).is_err());
        assert!(p.record_participation(0, 100_000_000, -1).is_err());
    }

    #[test]
    fn finalize_is_one_shot() {
        let mut p = pool(0);
        let creator = p.creator;
        p.record_participation(0, 2_000_000_000, 10).unwrap();

        // Too early: neither end time nor target reached
        assert!(p.finalize(&creator, 100).is_err());

        // Under the aggregate floor at end time: refund path
        let funded = p.finalize(&creator, 3_600).unwrap();
        assert!(!funded);
        assert!(p.refunds_enabled);
        assert!(!p.price_discovery_complete);

        // Second call always fails, state unchanged
        assert!(p.finalize(&creator, 3_700).is_err());
        assert!(p.refunds_enabled);
    }

    #[test]
    fn finalize_freezes_final_price_when_funded() {
        let mut p = pool(0);
        let creator = p.creator;
        p.max_per_wallet = p.target_liquidity;
        p.record_participation(0, 10_000_000_000, 10).unwrap();

        // Target reached: finalize allowed before end_time
        let funded = p.finalize(&creator, 20).unwrap();
        assert!(funded);
        assert!(p.price_discovery_complete);
        assert_eq!(p.final_price, p.current_price);
        assert!(!p.active);
    }

    #[test]
    fn only_creator_finalizes() {
        let mut p = pool(0);
        let outsider = Pubkey::new_unique();
        assert!(p.finalize(&outsider, 3_600).is_err());
        assert!(p.active);
    }

    #[test]
    fn refund_pays_once_and_exactly() {
        let mut p = pool(0);
        let creator = p.creator;
        p.record_participation(0, 1_000_000_000, 10).unwrap();
        p.finalize(&creator, 3_600).unwrap();

        let mut position = position(1_000_000_000);

        assert_eq!(position.take_refund(&p).unwrap(), 1_000_000_000);
        assert!(position.take_refund(&p).is_err());
    }

    #[test]
    fn finalize_seeds_position_at_final_price() {
        let mut p = pool(0);
        let creator = p.creator;
        p.max_per_wallet = p.target_liquidity;
        p.record_participation(0, 10_000_000_000, 10).unwrap();

        p.finalize(&creator, 20).unwrap();

        // Fully subscribed: final price 2_000, token side = raised / price
        assert_eq!(p.final_price, 2_000);
        assert_eq!(p.lp_tokens_seeded, 5_000_000);
        assert_eq!(p.claimable_sale_tokens(), 95_000_000);
    }

    #[test]
    fn seeded_tokens_capped_by_escrow() {
        let mut p = pool(0);
        let creator = p.creator;
        p.tokens_for_sale = 1_000_000;
        p.max_per_wallet = p.target_liquidity;
        p.record_participation(0, 10_000_000_000, 10).unwrap();

        p.finalize(&creator, 20).unwrap();

        assert_eq!(p.lp_tokens_seeded, 1_000_000);
        assert_eq!(p.claimable_sale_tokens(), 0);
    }

    #[test]
    fn token_allocation_is_pro_rata_and_one_shot() {
        let mut p = pool(0);
        let creator = p.creator;
        p.record_participation(0, 2_000_000_000, 10).unwrap();
        p.record_participation(0, 2_000_000_000, 20).unwrap();
        p.record_participation(0, 1_000_000_000, 30).unwrap();
        p.finalize(&creator, 3_600).unwrap();
        let claimable = p.claimable_sale_tokens();

        let mut a = position(2_000_000_000);
        let mut b = position(2_000_000_000);
        let mut c = position(1_000_000_000);

        // Locked until the discovery phase has elapsed
        assert!(a.take_token_allocation(&p, 7_199).is_err());
        assert!(!a.tokens_claimed);

        let got_a = a.take_token_allocation(&p, 7_200).unwrap();
        let got_b = b.take_token_allocation(&p, 7_200).unwrap();
        let got_c = c.take_token_allocation(&p, 7_200).unwrap();

        // 2:2:1 split of the claimable tokens, dust stays in the vault
        assert_eq!(got_a, got_b);
        assert_eq!(got_a, 2 * got_c);
        assert!(got_a + got_b + got_c <= claimable);

        assert!(a.take_token_allocation(&p, 7_300).is_err());
    }

    #[test]
    fn token_allocation_rejected_without_discovery() {
        let mut p = pool(0);
        let creator = p.creator;
        p.record_participation(0, 1_000_000_000, 10).unwrap();
        // Under-subscribed: refunds, never token claims
        p.finalize(&creator, 3_600).unwrap();

        let mut pos = position(1_000_000_000);
        assert!(pos.take_token_allocation(&p, 10_000).is_err());
    }
}
