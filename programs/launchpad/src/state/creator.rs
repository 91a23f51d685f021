use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

// Registered token issuer
// Created on registration, never deleted; banned creators are rejected
// by every entry point that takes a creator action.
#[account]
#[derive(InitSpace)]
pub struct CreatorProfile {
    pub owner: Pubkey,

    // Lamports staked at registration, must meet MIN_CREATOR_STAKE
    pub stake_amount: u64,

    pub reputation_score: i32,

    pub total_tokens_created: u32,

    // Rolling creation window: at most MAX_CREATIONS_PER_WINDOW
    // token launches per CREATION_WINDOW seconds
    pub window_start: i64,
    pub creations_in_window: u8,

    pub is_banned: bool,

    #[max_len(MAX_REASON_LEN)]
    pub ban_reason: String,

    pub registered_at: i64,

    pub bump: u8,
}

impl CreatorProfile {
    pub fn assert_eligible(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, LaunchpadError::Unauthorized);
        require!(!self.is_banned, LaunchpadError::CreatorBanned);
        Ok(())
    }

    // Record a token creation against the rolling weekly window.
    // The window restarts once CREATION_WINDOW has fully elapsed.
    pub fn note_creation(&mut self, now: i64) -> Result<()> {
        if now.saturating_sub(self.window_start) >= CREATION_WINDOW {
            self.window_start = now;
            self.creations_in_window = 0;
        }

        require!(
            self.creations_in_window < MAX_CREATIONS_PER_WINDOW,
            LaunchpadError::WeeklyLimitExceeded
        );

        self.creations_in_window += 1;
        self.total_tokens_created = self
            .total_tokens_created
            .checked_add(1)
            .ok_or(LaunchpadError::Overflow)?;

        Ok(())
    }

    pub fn ban(&mut self, reason: String) -> Result<()> {
        require!(reason.len() <= MAX_REASON_LEN, LaunchpadError::ReasonTooLong);
        self.is_banned = true;
        self.ban_reason = reason;
        Ok(())
    }

    pub fn unban(&mut self) {
        self.is_banned = false;
        self.ban_reason = String::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(now: i64) -> CreatorProfile {
        CreatorProfile {
            owner: Pubkey::new_unique(),
            stake_amount: MIN_CREATOR_STAKE,
            reputation_score: 0,
            total_tokens_created: 0,
            window_start: now,
            creations_in_window: 0,
            is_banned: false,
            ban_reason: String::new(),
            registered_at: now,
            bump: 255,
        }
    }

    #[test]
    fn weekly_window_caps_at_two() {
        let mut p = profile(1_000);
        assert!(p.note_creation(1_000).is_ok());
        assert!(p.note_creation(2_000).is_ok());
        assert!(p.note_creation(3_000).is_err());
    }

    #[test]
    fn window_rolls_after_seven_days() {
        let mut p = profile(1_000);
        p.note_creation(1_000).unwrap();
        p.note_creation(1_001).unwrap();

        let later = 1_000 + CREATION_WINDOW;
        assert!(p.note_creation(later).is_ok());
        assert_eq!(p.creations_in_window, 1);
        assert_eq!(p.total_tokens_created, 3);
    }

    #[test]
    fn banned_creator_is_rejected() {
        let mut p = profile(0);
        let owner = p.owner;
        p.ban("wash trading".to_string()).unwrap();
        assert!(p.assert_eligible(&owner).is_err());
        p.unban();
        assert!(p.assert_eligible(&owner).is_ok());
    }
}
