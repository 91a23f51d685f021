use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, helpers::split_by_percent};

// How the creator disposes of the allocation once fully vested
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum DistributionChoice {
    // 100% released to the owner
    Withdraw,
    // 50% released, 50% burned
    Burn,
    // 50% released, 50% sent to the community pool
    Distribute,
}

// One-shot terminal state: a single variant answers "already resolved"
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum ChoiceState {
    Pending,
    Resolved(DistributionChoice),
}

// Effect of a resolved choice on the remaining unreleased balance
#[derive(Debug, PartialEq, Eq)]
pub struct ChoicePayout {
    pub to_owner: u64,
    pub to_burn: u64,
    pub to_community: u64,
}

// Creator allocation lock
//
// Tokens accrue linearly between start and end, claimable only after the
// cliff. From the cliff the owner has a bounded window to pick a terminal
// distribution choice for whatever has not been claimed; missing the
// deadline auto-resolves to Distribute.
#[account]
#[derive(InitSpace)]
pub struct VestingSchedule {
    pub owner: Pubkey,

    pub mint: Pubkey,

    pub total_amount: u64,

    pub released_amount: u64,

    pub start_time: i64,

    // Claims before this fail
    pub cliff_time: i64,

    // Full-accrual time
    pub end_time: i64,

    // cliff_time + CHOICE_WINDOW
    pub choice_deadline: i64,

    pub choice: ChoiceState,

    pub revocable: bool,
    pub revoked: bool,

    pub bump: u8,
    pub vault_bump: u8,
}

impl VestingSchedule {
    pub fn remaining(&self) -> u64 {
        self.total_amount.saturating_sub(self.released_amount)
    }

    // Linear accrual between start and end, gated by the cliff
    pub fn vested(&self, now: i64) -> u64 {
        if now < self.cliff_time {
            return 0;
        }
        if now >= self.end_time {
            return self.total_amount;
        }
        let elapsed = now.saturating_sub(self.start_time) as u128;
        let span = self.end_time.saturating_sub(self.start_time) as u128;
        if span == 0 {
            return self.total_amount;
        }
        // elapsed < span here, so the product divided by span fits in u64
        ((self.total_amount as u128 * elapsed) / span) as u64
    }

    // Owner pulls whatever has vested since the last claim
    pub fn claim(&mut self, caller: &Pubkey, now: i64) -> Result<u64> {
        require_keys_eq!(*caller, self.owner, LaunchpadError::Unauthorized);
        require!(!self.revoked, LaunchpadError::VestingRevoked);
        require!(now >= self.cliff_time, LaunchpadError::NotVested);

        let claimable = self.vested(now).saturating_sub(self.released_amount);
        require!(claimable > 0, LaunchpadError::NothingToClaim);

        self.released_amount = self
            .released_amount
            .checked_add(claimable)
            .ok_or(LaunchpadError::Overflow)?;
        Ok(claimable)
    }

    fn assert_choosable(&self, now: i64) -> Result<()> {
        require!(!self.revoked, LaunchpadError::VestingRevoked);
        require!(
            matches!(self.choice, ChoiceState::Pending),
            LaunchpadError::ChoiceAlreadyMade
        );
        require!(now >= self.cliff_time, LaunchpadError::NotVested);
        require!(self.remaining() > 0, LaunchpadError::NothingToClaim);
        Ok(())
    }

    // Owner submits the one allowed choice inside the window
    pub fn choose(&mut self, caller: &Pubkey, choice: DistributionChoice, now: i64) -> Result<ChoicePayout> {
        require_keys_eq!(*caller, self.owner, LaunchpadError::Unauthorized);
        self.assert_choosable(now)?;
        require!(
            now < self.choice_deadline,
            LaunchpadError::ChoiceDeadlinePassed
        );

        self.resolve(choice)
    }

    // Anyone may apply the Distribute default once the window lapsed
    pub fn resolve_expired(&mut self, now: i64) -> Result<ChoicePayout> {
        self.assert_choosable(now)?;
        require!(
            now >= self.choice_deadline,
            LaunchpadError::ChoiceDeadlineNotReached
        );

        self.resolve(DistributionChoice::Distribute)
    }

    fn resolve(&mut self, choice: DistributionChoice) -> Result<ChoicePayout> {
        let remaining = self.remaining();

        let payout = match choice {
            DistributionChoice::Withdraw => ChoicePayout {
                to_owner: remaining,
                to_burn: 0,
                to_community: 0,
            },
            DistributionChoice::Burn => {
                let (to_owner, to_burn) = split_by_percent(remaining, 50)?;
                ChoicePayout {
                    to_owner,
                    to_burn,
                    to_community: 0,
                }
            }
            DistributionChoice::Distribute => {
                let (to_owner, to_community) = split_by_percent(remaining, 50)?;
                ChoicePayout {
                    to_owner,
                    to_burn: 0,
                    to_community,
                }
            }
        };

        self.choice = ChoiceState::Resolved(choice);
        self.released_amount = self.total_amount;
        Ok(payout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIFF: i64 = 1_000_000;
    const END: i64 = 2_000_000;

    fn schedule() -> VestingSchedule {
        VestingSchedule {
            owner: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            total_amount: 1_000_000_001,
            released_amount: 0,
            start_time: 0,
            cliff_time: CLIFF,
            end_time: END,
            choice_deadline: CLIFF + CHOICE_WINDOW,
            choice: ChoiceState::Pending,
            revocable: false,
            revoked: false,
            bump: 255,
            vault_bump: 255,
        }
    }

    #[test]
    fn accrual_is_linear_and_cliff_gated() {
        let v = schedule();
        assert_eq!(v.vested(CLIFF - 1), 0);
        // Halfway through the schedule at the cliff
        assert_eq!(v.vested(CLIFF), 500_000_000);
        assert_eq!(v.vested(1_500_000), 750_000_000);
        assert_eq!(v.vested(END), 1_000_000_001);
        assert_eq!(v.vested(END + 1), 1_000_000_001);
    }

    #[test]
    fn claim_pays_the_newly_vested_delta() {
        let mut v = schedule();
        let owner = v.owner;

        assert!(v.claim(&owner, CLIFF - 1).is_err());

        assert_eq!(v.claim(&owner, CLIFF).unwrap(), 500_000_000);
        assert_eq!(v.released_amount, 500_000_000);

        // Nothing new accrued yet
        assert!(v.claim(&owner, CLIFF).is_err());

        assert_eq!(v.claim(&owner, END).unwrap(), 500_000_001);
        assert_eq!(v.remaining(), 0);
        assert!(v.claim(&owner, END + 1).is_err());
    }

    #[test]
    fn choice_covers_only_the_unclaimed_balance() {
        let mut v = schedule();
        let owner = v.owner;

        v.claim(&owner, CLIFF).unwrap();
        let payout = v.choose(&owner, DistributionChoice::Burn, CLIFF + 1).unwrap();
        assert_eq!(payout.to_owner + payout.to_burn, 500_000_001);

        // Resolution retires the schedule entirely
        assert_eq!(v.released_amount, v.total_amount);
        assert!(v.claim(&owner, END).is_err());
    }

    #[test]
    fn only_owner_claims() {
        let mut v = schedule();
        let outsider = Pubkey::new_unique();
        assert!(v.claim(&outsider, END).is_err());
    }

    #[test]
    fn choice_rejected_before_cliff() {
        let mut v = schedule();
        let owner = v.owner;
        assert!(v.choose(&owner, DistributionChoice::Withdraw, CLIFF - 1).is_err());
        assert!(matches!(v.choice, ChoiceState::Pending));
    }

    #[test]
    fn withdraw_releases_everything() {
        let mut v = schedule();
        let owner = v.owner;
        let payout = v.choose(&owner, DistributionChoice::Withdraw, CLIFF).unwrap();
        assert_eq!(payout.to_owner, 1_000_000_001);
        assert_eq!(payout.to_burn, 0);
        assert_eq!(payout.to_community, 0);
        assert_eq!(v.remaining(), 0);
    }

    #[test]
    fn burn_splits_fifty_fifty_exactly() {
        let mut v = schedule();
        let owner = v.owner;
        let payout = v.choose(&owner, DistributionChoice::Burn, CLIFF).unwrap();
        assert_eq!(payout.to_owner + payout.to_burn, 1_000_000_001);
        assert_eq!(payout.to_owner, 500_000_000);
        assert_eq!(payout.to_burn, 500_000_001);
        assert_eq!(payout.to_community, 0);
    }

    #[test]
    fn choice_is_terminal() {
        let mut v = schedule();
        let owner = v.owner;
        v.choose(&owner, DistributionChoice::Distribute, CLIFF).unwrap();
        assert!(v.choose(&owner, DistributionChoice::Withdraw, CLIFF + 1).is_err());
        assert!(v.resolve_expired(CLIFF + CHOICE_WINDOW).is_err());
        assert_eq!(v.choice, ChoiceState::Resolved(DistributionChoice::Distribute));
    }

    #[test]
    fn missed_deadline_auto_distributes() {
        let mut v = schedule();
        let owner = v.owner;

        // Too early for the fallback
        assert!(v.resolve_expired(CLIFF + CHOICE_WINDOW - 1).is_err());

        let payout = v.resolve_expired(CLIFF + CHOICE_WINDOW).unwrap();
        assert_eq!(payout.to_owner + payout.to_community, 1_000_000_001);
        assert_eq!(payout.to_burn, 0);
        assert_eq!(v.choice, ChoiceState::Resolved(DistributionChoice::Distribute));

        // Manual choice after auto-resolution fails
        assert!(v.choose(&owner, DistributionChoice::Withdraw, CLIFF + CHOICE_WINDOW + 1).is_err());
    }

    #[test]
    fn manual_choice_rejected_after_deadline() {
        let mut v = schedule();
        let owner = v.owner;
        assert!(v.choose(&owner, DistributionChoice::Withdraw, CLIFF + CHOICE_WINDOW).is_err());
        // The fallback still works
        assert!(v.resolve_expired(CLIFF + CHOICE_WINDOW).is_ok());
    }

    #[test]
    fn only_owner_chooses() {
        let mut v = schedule();
        let outsider = Pubkey::new_unique();
        assert!(v.choose(&outsider, DistributionChoice::Withdraw, CLIFF).is_err());
    }
}
