use anchor_lang::prelude::*;

use crate::errors::*;
use crate::helpers::price_change_percent;

// Global anomaly halt
//
// Watches every priced trade. A price jump beyond the configured percent or
// period volume beyond the cap trips the breaker; while tripped, every
// trade-class operation is rejected until the cooldown lapses or the
// authority resets it by hand.
#[account]
#[derive(InitSpace)]
pub struct CircuitBreaker {
    pub authority: Pubkey,

    pub max_price_change_percent: u64,
    pub max_volume_per_period: u64,
    pub cooldown_seconds: i64,

    pub last_price: u64,

    // Volume accumulated in the current period
    pub volume_in_period: u64,
    pub period_start: i64,

    pub triggered: bool,
    pub last_trigger_time: i64,
    pub trigger_count: u32,

    pub bump: u8,
}

impl CircuitBreaker {
    pub fn validate_params(
        max_price_change_percent: u64,
        max_volume_per_period: u64,
        cooldown_seconds: i64,
    ) -> Result<()> {
        require!(max_price_change_percent > 0, LaunchpadError::InvalidParameter);
        require!(max_volume_per_period > 0, LaunchpadError::InvalidParameter);
        require!(cooldown_seconds > 0, LaunchpadError::InvalidParameter);
        Ok(())
    }

    pub fn assert_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, LaunchpadError::Unauthorized);
        Ok(())
    }

    // Cooldown auto-reset happens on the next evaluation, not on a timer
    fn maybe_auto_reset(&mut self, now: i64) {
        if self.triggered && now.saturating_sub(self.last_trigger_time) >= self.cooldown_seconds {
            self.triggered = false;
            self.volume_in_period = 0;
            self.period_start = now;
        }
    }

    fn trip(&mut self, now: i64) {
        self.triggered = true;
        self.last_trigger_time = now;
        self.trigger_count = self.trigger_count.saturating_add(1);
    }

    // Admit or reject one priced trade. Rejection with a trip latches the
    // breaker; rejection while latched changes nothing.
    pub fn evaluate(&mut self, new_price: u64, trade_volume: u64, now: i64) -> Result<()> {
        self.maybe_auto_reset(now);
        require!(!self.triggered, LaunchpadError::CircuitBreakerTriggered);

        // Volume window rolls with the cooldown period
        if now.saturating_sub(self.period_start) >= self.cooldown_seconds {
            self.volume_in_period = 0;
            self.period_start = now;
        }

        let change = price_change_percent(self.last_price, new_price)?;
        if change > self.max_price_change_percent {
            self.trip(now);
            return err!(LaunchpadError::CircuitBreakerTriggered);
        }

        let new_volume = self
            .volume_in_period
            .checked_add(trade_volume)
            .ok_or(LaunchpadError::Overflow)?;
        if new_volume > self.max_volume_per_period {
            self.trip(now);
            return err!(LaunchpadError::CircuitBreakerTriggered);
        }

        self.last_price = new_price;
        self.volume_in_period = new_volume;
        Ok(())
    }

    // Authority-initiated halt, independent of the automatic thresholds
    pub fn trigger_manual(&mut self, caller: &Pubkey, now: i64) -> Result<()> {
        self.assert_authority(caller)?;
        require!(!self.triggered, LaunchpadError::CircuitBreakerTriggered);
        self.trip(now);
        Ok(())
    }

    pub fn reset_manual(&mut self, caller: &Pubkey, now: i64) -> Result<()> {
        self.assert_authority(caller)?;
        require!(self.triggered, LaunchpadError::InvalidParameter);
        self.triggered = false;
        self.volume_in_period = 0;
        self.period_start = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breaker() -> CircuitBreaker {
        CircuitBreaker {
            authority: Pubkey::new_unique(),
            max_price_change_percent: 50,
            max_volume_per_period: 10_000,
            cooldown_seconds: 300,
            last_price: 0,
            volume_in_period: 0,
            period_start: 0,
            triggered: false,
            last_trigger_time: 0,
            trigger_count: 0,
            bump: 255,
        }
    }

    #[test]
    fn first_price_is_admitted_unconditionally() {
        let mut b = breaker();
        b.evaluate(1_000_000, 100, 10).unwrap();
        assert_eq!(b.last_price, 1_000_000);
        assert!(!b.triggered);
    }

    #[test]
    fn hundred_percent_move_trips_and_latches() {
        let mut b = breaker();
        b.evaluate(1_000_000, 100, 10).unwrap();

        // 1.0 -> 2.0 is a 100% change against a 50% limit
        assert!(b.evaluate(2_000_000, 100, 20).is_err());
        assert!(b.triggered);
        assert_eq!(b.trigger_count, 1);
        // The triggering trade is not recorded
        assert_eq!(b.last_price, 1_000_000);

        // Latched: even a flat price is rejected inside the cooldown
        assert!(b.evaluate(1_000_000, 1, 100).is_err());
        assert_eq!(b.trigger_count, 1);
    }

    #[test]
    fn exactly_at_limit_passes() {
        let mut b = breaker();
        b.evaluate(1_000_000, 100, 10).unwrap();
        // 50% change against a 50% limit is not over the limit
        b.evaluate(1_500_000, 100, 20).unwrap();
        assert!(!b.triggered);
    }

    #[test]
    fn cooldown_auto_resets_on_next_evaluation() {
        let mut b = breaker();
        b.evaluate(1_000_000, 100, 10).unwrap();
        assert!(b.evaluate(2_000_000, 100, 20).is_err());

        // One second before cooldown elapses: still latched
        assert!(b.evaluate(1_000_000, 1, 319).is_err());

        // At cooldown: auto-reset, trade admitted
        b.evaluate(1_100_000, 1, 320).unwrap();
        assert!(!b.triggered);
        assert_eq!(b.last_price, 1_100_000);
    }

    #[test]
    fn volume_cap_trips() {
        let mut b = breaker();
        b.evaluate(1_000_000, 9_000, 10).unwrap();
        b.evaluate(1_000_000, 1_000, 20).unwrap();
        assert_eq!(b.volume_in_period, 10_000);

        assert!(b.evaluate(1_000_000, 1, 30).is_err());
        assert!(b.triggered);
    }

    #[test]
    fn volume_window_rolls_over() {
        let mut b = breaker();
        b.evaluate(1_000_000, 10_000, 10).unwrap();
        // A fresh period clears the accumulator
        b.evaluate(1_000_000, 10_000, 310).unwrap();
        assert_eq!(b.volume_in_period, 10_000);
    }

    #[test]
    fn manual_trigger_and_reset() {
        let mut b = breaker();
        let authority = b.authority;
        let outsider = Pubkey::new_unique();

        assert!(b.trigger_manual(&outsider, 10).is_err());
        b.trigger_manual(&authority, 10).unwrap();
        assert!(b.triggered);
        assert!(b.evaluate(1_000_000, 1, 20).is_err());

        assert!(b.reset_manual(&outsider, 30).is_err());
        b.reset_manual(&authority, 30).unwrap();
        assert!(!b.triggered);
        b.evaluate(1_000_000, 1, 40).unwrap();
    }
}
