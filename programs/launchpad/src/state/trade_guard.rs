use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

// Platform-wide trade limits, authority-configured
#[account]
#[derive(InitSpace)]
pub struct TradeLimits {
    pub authority: Pubkey,

    pub min_trade_interval: i64,
    pub max_trade_amount: u64,
    pub max_daily_volume: u64,

    // Trades above this are flagged, never rejected
    pub suspicious_threshold: u64,

    pub bump: u8,
}

// One hour of recorded volume
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, InitSpace)]
pub struct VolumeBucket {
    pub start: i64,
    pub volume: u64,
}

// Per-wallet anti-bot state
//
// The daily volume is a sliding 24h window built from hourly buckets.
// A bucket whose start is older than 24h no longer counts; writing into
// a stale bucket resets it first.
#[account]
#[derive(InitSpace)]
pub struct TradeGuard {
    pub wallet: Pubkey,

    pub last_trade_time: i64,

    pub buckets: [VolumeBucket; VOLUME_BUCKETS],

    pub flagged_count: u32,

    pub bump: u8,
}

impl TradeLimits {
    pub fn validate_params(
        min_trade_interval: i64,
        max_trade_amount: u64,
        max_daily_volume: u64,
        suspicious_threshold: u64,
    ) -> Result<()> {
        require!(min_trade_interval >= 0, LaunchpadError::InvalidParameter);
        require!(max_trade_amount > 0, LaunchpadError::InvalidParameter);
        require!(
            max_daily_volume >= max_trade_amount,
            LaunchpadError::InvalidParameter
        );
        require!(suspicious_threshold > 0, LaunchpadError::InvalidParameter);
        Ok(())
    }

    pub fn assert_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, LaunchpadError::Unauthorized);
        Ok(())
    }
}

impl TradeGuard {
    fn bucket_index(now: i64) -> usize {
        ((now / VOLUME_BUCKET_SECONDS).rem_euclid(VOLUME_BUCKETS as i64)) as usize
    }

    fn bucket_start(now: i64) -> i64 {
        (now / VOLUME_BUCKET_SECONDS) * VOLUME_BUCKET_SECONDS
    }

    // Volume over the trailing 24 hours
    pub fn rolling_volume(&self, now: i64) -> u64 {
        let horizon = now - (VOLUME_BUCKETS as i64) * VOLUME_BUCKET_SECONDS;
        self.buckets
            .iter()
            .filter(|b| b.start > horizon && b.start <= now)
            .fold(0u64, |acc, b| acc.saturating_add(b.volume))
    }

    // Policy check only; nothing is written. Returns true when the trade
    // should be flagged as suspicious.
    pub fn check(&self, limits: &TradeLimits, amount: u64, now: i64) -> Result<bool> {
        require!(
            self.last_trade_time == 0
                || now.saturating_sub(self.last_trade_time) >= limits.min_trade_interval,
            LaunchpadError::TradeTooFrequent
        );
        require!(
            amount <= limits.max_trade_amount,
            LaunchpadError::TradeTooLarge
        );

        let projected = self
            .rolling_volume(now)
            .checked_add(amount)
            .ok_or(LaunchpadError::Overflow)?;
        require!(
            projected <= limits.max_daily_volume,
            LaunchpadError::DailyVolumeExceeded
        );

        Ok(amount > limits.suspicious_threshold)
    }

    // Record only after the trade itself succeeded
    pub fn record(&mut self, amount: u64, flagged: bool, now: i64) -> Result<()> {
        self.last_trade_time = now;

        let idx = Self::bucket_index(now);
        let start = Self::bucket_start(now);
        let bucket = &mut self.buckets[idx];

        if bucket.start != start {
            bucket.start = start;
            bucket.volume = 0;
        }
        bucket.volume = bucket
            .volume
            .checked_add(amount)
            .ok_or(LaunchpadError::Overflow)?;

        if flagged {
            self.flagged_count = self.flagged_count.saturating_add(1);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> TradeLimits {
        TradeLimits {
            authority: Pubkey::new_unique(),
            min_trade_interval: 60,
            max_trade_amount: 1_000_000,
            max_daily_volume: 5_000_000,
            suspicious_threshold: 500_000,
            bump: 255,
        }
    }

    fn guard() -> TradeGuard {
        TradeGuard {
            wallet: Pubkey::new_unique(),
            last_trade_time: 0,
            buckets: [VolumeBucket::default(); VOLUME_BUCKETS],
            flagged_count: 0,
            bump: 255,
        }
    }

    #[test]
    fn interval_is_enforced_between_trades() {
        let l = limits();
        let mut g = guard();

        let flagged = g.check(&l, 100, 1_000).unwrap();
        g.record(100, flagged, 1_000).unwrap();

        // 30s later: too frequent
        assert!(g.check(&l, 100, 1_030).is_err());
        // Exactly at the interval: admitted
        assert!(g.check(&l, 100, 1_060).is_ok());
        // 61s later: admitted
        assert!(g.check(&l, 100, 1_061).is_ok());
    }

    #[test]
    fn oversized_trade_rejected() {
        let l = limits();
        let g = guard();
        assert!(g.check(&l, 1_000_001, 1_000).is_err());
        assert!(g.check(&l, 1_000_000, 1_000).is_ok());
    }

    #[test]
    fn suspicious_flag_does_not_reject() {
        let l = limits();
        let mut g = guard();
        let flagged = g.check(&l, 500_001, 1_000).unwrap();
        assert!(flagged);
        g.record(500_001, flagged, 1_000).unwrap();
        assert_eq!(g.flagged_count, 1);
    }

    #[test]
    fn daily_volume_slides_off_after_24h() {
        let l = limits();
        let mut g = guard();

        // Five max-size trades an hour apart exhaust the daily cap
        for hour in 0..5 {
            let now = hour * 3_600;
            let flagged = g.check(&l, 1_000_000, now).unwrap();
            g.record(1_000_000, flagged, now).unwrap();
        }
        assert_eq!(g.rolling_volume(4 * 3_600), 5_000_000);
        assert!(g.check(&l, 1, 5 * 3_600).is_err());

        // 24h after the first trade its bucket ages out
        let later = 24 * 3_600 + 1;
        assert_eq!(g.rolling_volume(later), 4_000_000);
        assert!(g.check(&l, 1_000_000, later).is_ok());
    }

    #[test]
    fn stale_bucket_is_reset_on_reuse() {
        let l = limits();
        let mut g = guard();

        g.record(1_000_000, false, 0).unwrap();
        // Same ring slot two days later must not accumulate on top
        let two_days = 48 * 3_600;
        let flagged = g.check(&l, 1_000_000, two_days).unwrap();
        g.record(1_000_000, flagged, two_days).unwrap();
        assert_eq!(g.rolling_volume(two_days), 1_000_000);
    }

    #[test]
    fn check_never_mutates() {
        let l = limits();
        let g = guard();
        let _ = g.check(&l, 100, 1_000).unwrap();
        assert_eq!(g.last_trade_time, 0);
        assert_eq!(g.rolling_volume(1_000), 0);
    }
}
