use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, helpers::split_by_percent};

// Platform treasury
//
// Single sink for protocol fees and finalized LBM raises, and the owner of
// the buyback and LP token vaults for the platform token. Counters are
// cumulative u128s that only ever grow; the spendable reserve lives in a
// lamport vault owned by the treasury PDA.
#[account]
#[derive(InitSpace)]
pub struct Treasury {
    pub authority: Pubkey,

    // The token the buyback engine purchases
    pub platform_mint: Pubkey,

    // Token vaults by reference; both are PDAs owned by this treasury
    pub buyback_vault: Pubkey,
    pub lp_vault: Pubkey,

    // Spendable lamports currently in the reserve vault
    pub reserve_balance: u64,

    // Lifetime counters, monotonically increasing
    pub total_fees_collected: u128,
    pub total_raised: u128,
    pub total_distributed: u128,
    pub total_usdc_spent: u128,
    pub total_tokens_bought: u128,
    pub total_tokens_burned: u128,
    pub total_tokens_to_lp: u128,

    pub created_at: i64,

    pub bump: u8,
    pub vault_bump: u8,
}

impl Treasury {
    pub fn assert_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, LaunchpadError::Unauthorized);
        Ok(())
    }

    pub fn credit_fees(&mut self, amount: u64) -> Result<()> {
        self.reserve_balance = self
            .reserve_balance
            .checked_add(amount)
            .ok_or(LaunchpadError::Overflow)?;
        self.total_fees_collected = self
            .total_fees_collected
            .checked_add(amount as u128)
            .ok_or(LaunchpadError::Overflow)?;
        Ok(())
    }

    pub fn credit_raise(&mut self, amount: u64) -> Result<()> {
        self.reserve_balance = self
            .reserve_balance
            .checked_add(amount)
            .ok_or(LaunchpadError::Overflow)?;
        self.total_raised = self
            .total_raised
            .checked_add(amount as u128)
            .ok_or(LaunchpadError::Overflow)?;
        Ok(())
    }

    // Reserve debit for a multisig-approved distribution
    pub fn debit_distribution(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.reserve_balance,
            LaunchpadError::InsufficientReserve
        );
        self.reserve_balance = self
            .reserve_balance
            .checked_sub(amount)
            .ok_or(LaunchpadError::Underflow)?;
        self.total_distributed = self
            .total_distributed
            .checked_add(amount as u128)
            .ok_or(LaunchpadError::Overflow)?;
        Ok(())
    }

    // Mirror one finalized buyback into the treasury's lifetime totals
    pub fn note_buyback(
        &mut self,
        usdc_spent: u64,
        tokens_bought: u64,
        burned: u64,
        to_lp: u64,
    ) -> Result<()> {
        self.total_usdc_spent = self
            .total_usdc_spent
            .checked_add(usdc_spent as u128)
            .ok_or(LaunchpadError::Overflow)?;
        self.total_tokens_bought = self
            .total_tokens_bought
            .checked_add(tokens_bought as u128)
            .ok_or(LaunchpadError::Overflow)?;
        self.total_tokens_burned = self
            .total_tokens_burned
            .checked_add(burned as u128)
            .ok_or(LaunchpadError::Overflow)?;
        self.total_tokens_to_lp = self
            .total_tokens_to_lp
            .checked_add(to_lp as u128)
            .ok_or(LaunchpadError::Overflow)?;
        Ok(())
    }

    pub fn note_burn(&mut self, amount: u64) -> Result<()> {
        self.total_tokens_burned = self
            .total_tokens_burned
            .checked_add(amount as u128)
            .ok_or(LaunchpadError::Overflow)?;
        Ok(())
    }
}

// Buyback engine configuration and lifetime stats
//
// Swaps execute through an off-chain collaborator; on chain we gate who may
// finalize, how often, within what size band, and how the bought tokens split
// between burn and LP.
#[account]
#[derive(InitSpace)]
pub struct BuybackConfig {
    pub authority: Pubkey,

    pub enabled: bool,

    // Must sum to exactly 100
    pub burn_percent: u8,
    pub lp_percent: u8,

    // Spend band per buyback (USDC base units)
    pub min_amount: u64,
    pub max_amount: u64,

    // Minimum seconds between finalized buybacks
    pub interval_seconds: i64,
    pub last_buyback_time: i64,

    // Lifetime counters
    pub total_buybacks: u64,
    pub total_usdc_spent: u128,
    pub total_tokens_bought: u128,
    pub total_tokens_burned: u128,
    pub total_tokens_to_lp: u128,

    pub bump: u8,
}

// Partial update for buyback parameters; None leaves a field untouched.
// The merged result is revalidated as a whole before anything is written.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, InitSpace)]
pub struct BuybackConfigUpdate {
    pub enabled: Option<bool>,
    pub burn_percent: Option<u8>,
    pub lp_percent: Option<u8>,
    pub min_amount: Option<u64>,
    pub max_amount: Option<u64>,
    pub interval_seconds: Option<i64>,
}

impl BuybackConfig {
    pub fn validate_percentages(burn_percent: u8, lp_percent: u8) -> Result<()> {
        require!(
            burn_percent as u16 + lp_percent as u16 == 100,
            LaunchpadError::InvalidBuybackPercentages
        );
        Ok(())
    }

    pub fn validate_band(min_amount: u64, max_amount: u64) -> Result<()> {
        require!(
            min_amount >= MIN_BUYBACK_AMOUNT,
            LaunchpadError::BuybackAmountTooSmall
        );
        require!(
            max_amount <= MAX_BUYBACK_AMOUNT && max_amount >= min_amount,
            LaunchpadError::BuybackAmountTooLarge
        );
        Ok(())
    }

    // Every precondition checks before any state changes
    pub fn assert_ready(&self, caller: &Pubkey, usdc_spent: u64, now: i64) -> Result<()> {
        require!(self.enabled, LaunchpadError::BuybackDisabled);
        require_keys_eq!(*caller, self.authority, LaunchpadError::UnauthorizedBuyback);
        require!(
            usdc_spent >= self.min_amount,
            LaunchpadError::BuybackAmountTooSmall
        );
        require!(
            usdc_spent <= self.max_amount,
            LaunchpadError::BuybackAmountTooLarge
        );
        require!(
            now.saturating_sub(self.last_buyback_time) >= self.interval_seconds,
            LaunchpadError::BuybackTooFrequent
        );
        Ok(())
    }

    // Record a completed swap and return the (burn, lp) token split.
    // The split is exact: burn + lp == tokens_bought.
    pub fn finalize(
        &mut self,
        caller: &Pubkey,
        usdc_spent: u64,
        tokens_bought: u64,
        now: i64,
    ) -> Result<(u64, u64)> {
        self.assert_ready(caller, usdc_spent, now)?;
        require!(tokens_bought > 0, LaunchpadError::NoTokensToProcess);

        let (burn_amount, lp_amount) = split_by_percent(tokens_bought, self.burn_percent)?;

        self.last_buyback_time = now;
        self.total_buybacks = self
            .total_buybacks
            .checked_add(1)
            .ok_or(LaunchpadError::Overflow)?;
        self.total_usdc_spent = self
            .total_usdc_spent
            .checked_add(usdc_spent as u128)
            .ok_or(LaunchpadError::Overflow)?;
        self.total_tokens_bought = self
            .total_tokens_bought
            .checked_add(tokens_bought as u128)
            .ok_or(LaunchpadError::Overflow)?;
        self.total_tokens_burned = self
            .total_tokens_burned
            .checked_add(burn_amount as u128)
            .ok_or(LaunchpadError::Overflow)?;
        self.total_tokens_to_lp = self
            .total_tokens_to_lp
            .checked_add(lp_amount as u128)
            .ok_or(LaunchpadError::Overflow)?;

        Ok((burn_amount, lp_amount))
    }

    // Merge a partial update, then revalidate the whole config
    pub fn apply_update(&mut self, update: &BuybackConfigUpdate) -> Result<()> {
        if let Some(enabled) = update.enabled {
            self.enabled = enabled;
        }
        if let Some(burn_percent) = update.burn_percent {
            self.burn_percent = burn_percent;
        }
        if let Some(lp_percent) = update.lp_percent {
            self.lp_percent = lp_percent;
        }
        if let Some(min_amount) = update.min_amount {
            self.min_amount = min_amount;
        }
        if let Some(max_amount) = update.max_amount {
            self.max_amount = max_amount;
        }
        if let Some(interval_seconds) = update.interval_seconds {
            require!(interval_seconds >= 0, LaunchpadError::InvalidParameter);
            self.interval_seconds = interval_seconds;
        }

        Self::validate_percentages(self.burn_percent, self.lp_percent)?;
        Self::validate_band(self.min_amount, self.max_amount)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BuybackConfig {
        BuybackConfig {
            authority: Pubkey::new_unique(),
            enabled: true,
            burn_percent: 60,
            lp_percent: 40,
            min_amount: 10_000_000,
            max_amount: 100_000_000_000,
            interval_seconds: 3_600,
            last_buyback_time: 0,
            total_buybacks: 0,
            total_usdc_spent: 0,
            total_tokens_bought: 0,
            total_tokens_burned: 0,
            total_tokens_to_lp: 0,
            bump: 255,
        }
    }

    fn treasury() -> Treasury {
        Treasury {
            authority: Pubkey::new_unique(),
            platform_mint: Pubkey::new_unique(),
            buyback_vault: Pubkey::new_unique(),
            lp_vault: Pubkey::new_unique(),
            reserve_balance: 0,
            total_fees_collected: 0,
            total_raised: 0,
            total_distributed: 0,
            total_usdc_spent: 0,
            total_tokens_bought: 0,
            total_tokens_burned: 0,
            total_tokens_to_lp: 0,
            created_at: 0,
            bump: 255,
            vault_bump: 255,
        }
    }

    #[test]
    fn percentages_must_sum_to_100() {
        assert!(BuybackConfig::validate_percentages(60, 40).is_ok());
        assert!(BuybackConfig::validate_percentages(100, 0).is_ok());
        assert!(BuybackConfig::validate_percentages(60, 39).is_err());
        assert!(BuybackConfig::validate_percentages(60, 41).is_err());
    }

    #[test]
    fn finalize_splits_exactly() {
        let mut c = config();
        let authority = c.authority;
        let (burn, lp) = c
            .finalize(&authority, 50_000_000, 1_000_000_001, 10_000)
            .unwrap();
        assert_eq!(burn + lp, 1_000_000_001);
        assert_eq!(burn, 600_000_000);
        assert_eq!(c.total_buybacks, 1);
        assert_eq!(c.total_usdc_spent, 50_000_000);
        assert_eq!(c.total_tokens_burned, burn as u128);
        assert_eq!(c.total_tokens_to_lp, lp as u128);
        assert_eq!(c.last_buyback_time, 10_000);
    }

    #[test]
    fn finalize_enforces_interval_and_band() {
        let mut c = config();
        let authority = c.authority;
        c.finalize(&authority, 50_000_000, 1_000, 10_000).unwrap();

        // One second short of the interval
        assert!(c.finalize(&authority, 50_000_000, 1_000, 13_599).is_err());
        assert!(c.finalize(&authority, 50_000_000, 1_000, 13_600).is_ok());

        // Outside the spend band
        assert!(c.finalize(&authority, 9_999_999, 1_000, 20_000).is_err());
        assert!(c
            .finalize(&authority, 100_000_000_001, 1_000, 20_000)
            .is_err());
    }

    #[test]
    fn finalize_rejects_disabled_and_wrong_caller() {
        let mut c = config();
        let authority = c.authority;
        let outsider = Pubkey::new_unique();
        assert!(c.finalize(&outsider, 50_000_000, 1_000, 10_000).is_err());

        c.enabled = false;
        assert!(c.finalize(&authority, 50_000_000, 1_000, 10_000).is_err());
        assert_eq!(c.total_buybacks, 0);
    }

    #[test]
    fn partial_update_revalidates_whole_config() {
        let mut c = config();

        // Changing only burn_percent breaks the sum and fails
        let bad = BuybackConfigUpdate {
            enabled: None,
            burn_percent: Some(70),
            lp_percent: None,
            min_amount: None,
            max_amount: None,
            interval_seconds: None,
        };
        assert!(c.apply_update(&bad).is_err());

        let good = BuybackConfigUpdate {
            enabled: Some(false),
            burn_percent: Some(70),
            lp_percent: Some(30),
            min_amount: None,
            max_amount: None,
            interval_seconds: Some(7_200),
        };
        c.apply_update(&good).unwrap();
        assert!(!c.enabled);
        assert_eq!(c.burn_percent, 70);
        assert_eq!(c.interval_seconds, 7_200);
    }

    #[test]
    fn treasury_reserve_accounting() {
        let mut t = treasury();

        t.credit_fees(100).unwrap();
        t.credit_raise(1_000).unwrap();
        t.debit_distribution(500).unwrap();

        assert_eq!(t.reserve_balance, 600);
        assert_eq!(t.total_fees_collected, 100);
        assert_eq!(t.total_raised, 1_000);
        assert_eq!(t.total_distributed, 500);

        // Over-debit leaves everything untouched
        assert!(t.debit_distribution(601).is_err());
        assert_eq!(t.reserve_balance, 600);
    }

    #[test]
    fn treasury_buyback_totals_accumulate() {
        let mut t = treasury();
        t.note_buyback(50_000_000, 1_000, 600, 400).unwrap();
        t.note_buyback(50_000_000, 1_000, 600, 400).unwrap();
        t.note_burn(100).unwrap();

        assert_eq!(t.total_usdc_spent, 100_000_000);
        assert_eq!(t.total_tokens_bought, 2_000);
        assert_eq!(t.total_tokens_burned, 1_300);
        assert_eq!(t.total_tokens_to_lp, 800);
    }
}
