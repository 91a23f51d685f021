use anchor_lang::prelude::*;

use crate::errors::*;

// Platform-wide configuration
// Created once at deployment, mutated only by the admin
#[account]
#[derive(InitSpace)]
pub struct PlatformConfig {
    // Program admin - can ban creators and update safeguard parameters
    pub admin: Pubkey,

    // Treasury authority - signs buyback finalizations and distributions
    pub treasury_authority: Pubkey,

    // Emergency authority - can pause and resume the whole program
    pub emergency_authority: Pubkey,

    // Flat lamport fee charged on each token creation, paid into the reserve
    pub creation_fee: u64,

    pub created_at: i64,

    pub bump: u8,
}

impl PlatformConfig {
    pub fn assert_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, LaunchpadError::Unauthorized);
        Ok(())
    }
}
