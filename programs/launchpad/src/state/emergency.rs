use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

// Global pause switch
//
// Checked first by every state-mutating instruction. A pause records who,
// when, and why; an optional auto_resume_time lets the halt lapse on its
// own without the authority coming back.
#[account]
#[derive(InitSpace)]
pub struct EmergencyControls {
    pub authority: Pubkey,

    pub paused: bool,

    #[max_len(MAX_REASON_LEN)]
    pub reason: String,

    pub pause_initiated_by: Pubkey,
    pub pause_time: i64,

    // 0 means no scheduled resumption
    pub auto_resume_time: i64,

    pub pause_count: u32,

    pub bump: u8,
}

impl EmergencyControls {
    pub fn assert_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, LaunchpadError::Unauthorized);
        Ok(())
    }

    // Operational when not paused, or when a scheduled resume has lapsed.
    // Read-only: the paused flag is cleared by resume(), not here.
    pub fn is_operational(&self, now: i64) -> bool {
        if !self.paused {
            return true;
        }
        self.auto_resume_time > 0 && now >= self.auto_resume_time
    }

    // First gate of every mutating instruction
    pub fn assert_operational(&self, now: i64) -> Result<()> {
        require!(self.is_operational(now), LaunchpadError::ProgramPaused);
        Ok(())
    }

    pub fn pause(
        &mut self,
        caller: &Pubkey,
        reason: String,
        auto_resume_time: i64,
        now: i64,
    ) -> Result<()> {
        self.assert_authority(caller)?;
        require!(!self.paused, LaunchpadError::ProgramPaused);
        require!(reason.len() <= MAX_REASON_LEN, LaunchpadError::ReasonTooLong);
        require!(
            auto_resume_time == 0 || auto_resume_time > now,
            LaunchpadError::InvalidParameter
        );

        self.paused = true;
        self.reason = reason;
        self.pause_initiated_by = *caller;
        self.pause_time = now;
        self.auto_resume_time = auto_resume_time;
        self.pause_count = self.pause_count.saturating_add(1);
        Ok(())
    }

    pub fn resume(&mut self, caller: &Pubkey) -> Result<()> {
        self.assert_authority(caller)?;
        require!(self.paused, LaunchpadError::NotPaused);

        self.paused = false;
        self.reason = String::new();
        self.auto_resume_time = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls() -> EmergencyControls {
        EmergencyControls {
            authority: Pubkey::new_unique(),
            paused: false,
            reason: String::new(),
            pause_initiated_by: Pubkey::default(),
            pause_time: 0,
            auto_resume_time: 0,
            pause_count: 0,
            bump: 255,
        }
    }

    #[test]
    fn pause_blocks_until_resume() {
        let mut e = controls();
        let authority = e.authority;

        assert!(e.is_operational(100));
        e.pause(&authority, "oracle failure".to_string(), 0, 100).unwrap();
        assert!(!e.is_operational(1_000_000));
        assert_eq!(e.pause_count, 1);
        assert_eq!(e.pause_initiated_by, authority);

        // Double pause rejected
        assert!(e.pause(&authority, "again".to_string(), 0, 200).is_err());

        e.resume(&authority).unwrap();
        assert!(e.is_operational(200));
        assert!(e.reason.is_empty());
    }

    #[test]
    fn scheduled_resume_lapses_by_itself() {
        let mut e = controls();
        let authority = e.authority;

        e.pause(&authority, "maintenance".to_string(), 500, 100).unwrap();
        assert!(!e.is_operational(499));
        assert!(e.is_operational(500));
        assert!(e.assert_operational(499).is_err());
        assert!(e.assert_operational(500).is_ok());
    }

    #[test]
    fn auto_resume_must_be_in_the_future() {
        let mut e = controls();
        let authority = e.authority;
        assert!(e.pause(&authority, "x".to_string(), 100, 100).is_err());
    }

    #[test]
    fn only_authority_pauses_and_resumes() {
        let mut e = controls();
        let authority = e.authority;
        let outsider = Pubkey::new_unique();

        assert!(e.pause(&outsider, "x".to_string(), 0, 100).is_err());
        e.pause(&authority, "x".to_string(), 0, 100).unwrap();
        assert!(e.resume(&outsider).is_err());
    }

    #[test]
    fn resume_when_not_paused_fails() {
        let mut e = controls();
        let authority = e.authority;
        assert!(e.resume(&authority).is_err());
    }

    #[test]
    fn long_reason_rejected() {
        let mut e = controls();
        let authority = e.authority;
        let reason = "x".repeat(MAX_REASON_LEN + 1);
        assert!(e.pause(&authority, reason, 0, 100).is_err());
    }
}
