use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

// Issued fungible asset
// Written once at issuance and immutable afterwards
#[account]
#[derive(InitSpace)]
pub struct TokenAsset {
    pub mint: Pubkey,

    pub creator: Pubkey,

    pub decimals: u8,

    pub total_supply: u64,

    // Percent of total supply locked for the creator, [1, 20]
    pub creator_percent: u8,

    // Amount locked under the creator's vesting schedule
    pub creator_allocation: u64,

    pub vesting_seconds: i64,

    pub created_at: i64,

    pub bump: u8,
}

impl TokenAsset {
    // Validate issuance parameters before any account is written
    pub fn validate_params(
        decimals: u8,
        total_supply: u64,
        creator_percent: u8,
        vesting_seconds: i64,
    ) -> Result<()> {
        require!(decimals <= MAX_TOKEN_DECIMALS, LaunchpadError::InvalidDecimals);
        require!(total_supply > 0, LaunchpadError::InvalidTokenSupply);
        require!(
            (MIN_CREATOR_PERCENT..=MAX_CREATOR_PERCENT).contains(&creator_percent),
            LaunchpadError::InvalidCreatorPercent
        );
        require!(
            (MIN_VESTING_SECONDS..=MAX_VESTING_SECONDS).contains(&vesting_seconds),
            LaunchpadError::InvalidVestingPeriod
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_params() {
        assert!(TokenAsset::validate_params(10, 1, 5, MIN_VESTING_SECONDS).is_err());
        assert!(TokenAsset::validate_params(9, 0, 5, MIN_VESTING_SECONDS).is_err());
        assert!(TokenAsset::validate_params(9, 1, 0, MIN_VESTING_SECONDS).is_err());
        assert!(TokenAsset::validate_params(9, 1, 21, MIN_VESTING_SECONDS).is_err());
        assert!(TokenAsset::validate_params(9, 1, 5, MIN_VESTING_SECONDS - 1).is_err());
        assert!(TokenAsset::validate_params(9, 1, 5, MAX_VESTING_SECONDS + 1).is_err());
    }

    #[test]
    fn accepts_boundary_params() {
        assert!(TokenAsset::validate_params(9, 1, 1, MIN_VESTING_SECONDS).is_ok());
        assert!(TokenAsset::validate_params(0, u64::MAX, 20, MAX_VESTING_SECONDS).is_ok());
    }
}
