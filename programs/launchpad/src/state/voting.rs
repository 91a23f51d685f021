use anchor_lang::prelude::*;

use crate::errors::*;

// Fixed-point base for duration-tier contributions
pub const DURATION_BASE_POWER: u64 = 1_000_000;

// Staking-duration tiers in months: <3, 3-5, 6-11, 12+
pub const DURATION_TIERS: usize = 4;

// Platform voting parameters
//
// The four factor weights are whole percents summing to exactly 100.
// Duration multipliers are whole-number scalars per tier.
#[account]
#[derive(InitSpace)]
pub struct VotingSafeguards {
    pub authority: Pubkey,

    pub stake_weight: u8,
    pub duration_weight: u8,
    pub community_weight: u8,
    pub holding_weight: u8,

    pub duration_multipliers: [u16; DURATION_TIERS],

    // Stake at or above this marks the wallet a whale
    pub whale_threshold: u64,

    // Percent knocked off a whale's computed power
    pub whale_discount_percent: u8,

    pub max_power_per_wallet: u64,

    pub min_stake_to_vote: u64,

    pub bump: u8,
}

// Raw voting factors for one wallet, with the derived power cached.
// The cache is recomputed eagerly on every factor update, never lazily.
#[account]
#[derive(InitSpace)]
pub struct VoterProfile {
    pub wallet: Pubkey,

    pub staked_amount: u64,
    pub staking_months: u32,
    pub community_contribution: u64,
    pub token_holding: u64,

    pub voting_power: u64,
    pub is_whale: bool,

    pub last_updated: i64,

    pub bump: u8,
}

impl VotingSafeguards {
    pub fn validate(&self) -> Result<()> {
        let sum = self.stake_weight as u16
            + self.duration_weight as u16
            + self.community_weight as u16
            + self.holding_weight as u16;
        require!(sum == 100, LaunchpadError::InvalidVotingPowerWeights);

        // Longer tiers never multiply lower than shorter ones
        for pair in self.duration_multipliers.windows(2) {
            require!(pair[0] <= pair[1], LaunchpadError::InvalidDurationMultipliers);
        }
        require!(
            self.duration_multipliers[0] > 0,
            LaunchpadError::InvalidDurationMultipliers
        );

        require!(self.whale_discount_percent <= 100, LaunchpadError::InvalidParameter);
        require!(self.max_power_per_wallet > 0, LaunchpadError::InvalidParameter);
        Ok(())
    }

    pub fn assert_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, LaunchpadError::Unauthorized);
        Ok(())
    }

    pub fn duration_tier(months: u32) -> usize {
        match months {
            0..=2 => 0,
            3..=5 => 1,
            6..=11 => 2,
            _ => 3,
        }
    }
}

impl VoterProfile {
    // Deterministic power from raw factors under the current weights:
    //
    //   power = stake*W_s + tier_multiplier*BASE*W_d
    //         + contribution*W_c + holding*W_h   (all over 100)
    //
    // then whale discount and hard cap. Integer math only, same inputs
    // always give the same output.
    pub fn compute_power(&self, safeguards: &VotingSafeguards) -> Result<(u64, bool)> {
        let tier = VotingSafeguards::duration_tier(self.staking_months);
        let duration_factor = (safeguards.duration_multipliers[tier] as u128)
            .checked_mul(DURATION_BASE_POWER as u128)
            .ok_or(LaunchpadError::Overflow)?;

        let weighted = (self.staked_amount as u128)
            .checked_mul(safeguards.stake_weight as u128)
            .ok_or(LaunchpadError::Overflow)?
            .checked_add(
                duration_factor
                    .checked_mul(safeguards.duration_weight as u128)
                    .ok_or(LaunchpadError::Overflow)?,
            )
            .ok_or(LaunchpadError::Overflow)?
            .checked_add(
                (self.community_contribution as u128)
                    .checked_mul(safeguards.community_weight as u128)
                    .ok_or(LaunchpadError::Overflow)?,
            )
            .ok_or(LaunchpadError::Overflow)?
            .checked_add(
                (self.token_holding as u128)
                    .checked_mul(safeguards.holding_weight as u128)
                    .ok_or(LaunchpadError::Overflow)?,
            )
            .ok_or(LaunchpadError::Overflow)?;

        let mut power = weighted
            .checked_div(100)
            .ok_or(LaunchpadError::DivisionByZero)?;

        let is_whale = self.staked_amount >= safeguards.whale_threshold;
        if is_whale {
            let keep = 100u128 - safeguards.whale_discount_percent as u128;
            power = power
                .checked_mul(keep)
                .ok_or(LaunchpadError::Overflow)?
                .checked_div(100)
                .ok_or(LaunchpadError::DivisionByZero)?;
            power = power.min(safeguards.max_power_per_wallet as u128);
        }

        let power = u64::try_from(power).map_err(|_| LaunchpadError::Overflow)?;
        Ok((power, is_whale))
    }

    // Apply new factors and recompute the cached power in one step
    pub fn update_factors(
        &mut self,
        safeguards: &VotingSafeguards,
        staked_amount: u64,
        staking_months: u32,
        community_contribution: u64,
        token_holding: u64,
        now: i64,
    ) -> Result<()> {
        self.staked_amount = staked_amount;
        self.staking_months = staking_months;
        self.community_contribution = community_contribution;
        self.token_holding = token_holding;

        // A stake under the voting minimum still refreshes the cache,
        // it just resolves to zero power. Rejecting here would leave a
        // wallet that unstaked holding its old, higher cached power.
        if staked_amount < safeguards.min_stake_to_vote {
            self.voting_power = 0;
            self.is_whale = false;
        } else {
            let (power, is_whale) = self.compute_power(safeguards)?;
            self.voting_power = power;
            self.is_whale = is_whale;
        }
        self.last_updated = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn safeguards() -> VotingSafeguards {
        VotingSafeguards {
            authority: Pubkey::new_unique(),
            stake_weight: 40,
            duration_weight: 20,
            community_weight: 20,
            holding_weight: 20,
            duration_multipliers: [1, 2, 4, 8],
            whale_threshold: 1_000_000_000,
            whale_discount_percent: 50,
            max_power_per_wallet: 500_000_000,
            min_stake_to_vote: 1_000_000,
            bump: 255,
        }
    }

    fn voter(staked: u64, months: u32) -> VoterProfile {
        VoterProfile {
            wallet: Pubkey::new_unique(),
            staked_amount: staked,
            staking_months: months,
            community_contribution: 10_000_000,
            token_holding: 50_000_000,
            voting_power: 0,
            is_whale: false,
            last_updated: 0,
            bump: 255,
        }
    }

    #[test]
    fn weights_must_sum_to_100() {
        let mut s = safeguards();
        s.validate().unwrap();
        s.stake_weight = 41;
        assert!(s.validate().is_err());
    }

    #[test]
    fn multipliers_must_be_non_decreasing() {
        let mut s = safeguards();
        s.duration_multipliers = [2, 1, 4, 8];
        assert!(s.validate().is_err());
        s.duration_multipliers = [0, 1, 4, 8];
        assert!(s.validate().is_err());
    }

    #[test]
    fn duration_tiers_map_months() {
        assert_eq!(VotingSafeguards::duration_tier(0), 0);
        assert_eq!(VotingSafeguards::duration_tier(2), 0);
        assert_eq!(VotingSafeguards::duration_tier(3), 1);
        assert_eq!(VotingSafeguards::duration_tier(5), 1);
        assert_eq!(VotingSafeguards::duration_tier(6), 2);
        assert_eq!(VotingSafeguards::duration_tier(11), 2);
        assert_eq!(VotingSafeguards::duration_tier(12), 3);
        assert_eq!(VotingSafeguards::duration_tier(240), 3);
    }

    #[test]
    fn power_is_deterministic() {
        let s = safeguards();
        let v = voter(100_000_000, 7);
        let first = v.compute_power(&s).unwrap();
        let second = v.compute_power(&s).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn longer_staking_never_lowers_power() {
        let s = safeguards();
        let mut last = 0;
        for months in [0, 3, 6, 12] {
            let (power, _) = voter(100_000_000, months).compute_power(&s).unwrap();
            assert!(power >= last);
            last = power;
        }
    }

    #[test]
    fn whale_is_discounted_and_capped() {
        let s = safeguards();

        // Just under the threshold: no whale treatment
        let (power_small, whale_small) = voter(999_999_999, 6).compute_power(&s).unwrap();
        assert!(!whale_small);

        // At the threshold: the 50% discount applies
        let (power_whale, whale) = voter(1_000_000_000, 6).compute_power(&s).unwrap();
        assert!(whale);
        assert!(power_whale < power_small);

        // Far above it the hard cap binds even after the discount
        let (power_big, big_whale) = voter(10_000_000_000, 6).compute_power(&s).unwrap();
        assert!(big_whale);
        assert_eq!(power_big, s.max_power_per_wallet);
    }

    #[test]
    fn update_recomputes_eagerly() {
        let s = safeguards();
        let mut v = voter(100_000_000, 0);
        v.update_factors(&s, 100_000_000, 0, 0, 0, 50).unwrap();
        let before = v.voting_power;

        v.update_factors(&s, 200_000_000, 12, 0, 0, 60).unwrap();
        assert!(v.voting_power > before);
        assert_eq!(v.last_updated, 60);
    }

    #[test]
    fn unstaking_below_minimum_zeroes_cached_power() {
        let s = safeguards();
        let mut v = voter(0, 0);
        v.update_factors(&s, 2_000_000_000, 12, 10_000_000, 50_000_000, 50)
            .unwrap();
        assert!(v.voting_power > 0);
        assert!(v.is_whale);

        // Dropping under min_stake_to_vote must revise the cache down
        v.update_factors(&s, 999_999, 12, 10_000_000, 50_000_000, 60)
            .unwrap();
        assert_eq!(v.voting_power, 0);
        assert!(!v.is_whale);
        assert_eq!(v.staked_amount, 999_999);
        assert_eq!(v.last_updated, 60);
    }
}
