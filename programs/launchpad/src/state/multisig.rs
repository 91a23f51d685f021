use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

// Threshold release authority over the treasury
//
// Any release above `distribution_threshold` needs `required_signatures`
// distinct approvals from the signer set. Smaller releases only need the
// treasury authority.
#[account]
#[derive(InitSpace)]
pub struct MultiSigGovernance {
    // Fixed-capacity signer set; only the first `signer_count` entries count
    pub signers: [Pubkey; MAX_SIGNERS],
    pub signer_count: u8,

    pub required_signatures: u8,

    // Lamport amount above which a release needs the quorum
    pub distribution_threshold: u64,

    // Monotonic id source for proposals
    pub proposal_count: u64,

    pub bump: u8,
}

// One pending treasury release
#[account]
#[derive(InitSpace)]
pub struct DistributionProposal {
    pub multisig: Pubkey,

    pub id: u64,

    pub proposer: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,

    // Bit i set when signers[i] approved; capacity covers MAX_SIGNERS
    pub approvals: u16,

    pub executed: bool,

    pub created_at: i64,

    pub bump: u8,
}

impl MultiSigGovernance {
    pub fn validate_signer_set(signers: &[Pubkey], required: u8) -> Result<()> {
        require!(
            signers.len() >= MIN_SIGNERS && signers.len() <= MAX_SIGNERS,
            LaunchpadError::InvalidSignerSet
        );
        for (i, a) in signers.iter().enumerate() {
            require_keys_neq!(*a, Pubkey::default(), LaunchpadError::InvalidSignerSet);
            for b in signers.iter().skip(i + 1) {
                require_keys_neq!(*a, *b, LaunchpadError::InvalidSignerSet);
            }
        }
        require!(
            required >= 1 && (required as usize) <= signers.len(),
            LaunchpadError::InvalidSignatureThreshold
        );
        Ok(())
    }

    pub fn set_signers(&mut self, signers: &[Pubkey], required: u8) -> Result<()> {
        Self::validate_signer_set(signers, required)?;
        self.signers = [Pubkey::default(); MAX_SIGNERS];
        self.signers[..signers.len()].copy_from_slice(signers);
        self.signer_count = signers.len() as u8;
        self.required_signatures = required;
        Ok(())
    }

    pub fn signer_index(&self, key: &Pubkey) -> Option<usize> {
        self.signers[..self.signer_count as usize]
            .iter()
            .position(|s| s == key)
    }

    pub fn is_signer(&self, key: &Pubkey) -> bool {
        self.signer_index(key).is_some()
    }

    pub fn needs_quorum(&self, amount: u64) -> bool {
        amount > self.distribution_threshold
    }

    pub fn next_proposal_id(&mut self) -> Result<u64> {
        let id = self.proposal_count;
        self.proposal_count = id.checked_add(1).ok_or(LaunchpadError::Overflow)?;
        Ok(id)
    }
}

impl DistributionProposal {
    pub fn approval_count(&self) -> u8 {
        self.approvals.count_ones() as u8
    }

    // Duplicate approvals from the same signer never count twice
    pub fn approve(&mut self, multisig: &MultiSigGovernance, signer: &Pubkey) -> Result<()> {
        require!(!self.executed, LaunchpadError::DistributionAlreadyExecuted);

        let idx = multisig
            .signer_index(signer)
            .ok_or(LaunchpadError::NotASigner)?;

        let bit = 1u16 << idx;
        require!(self.approvals & bit == 0, LaunchpadError::AlreadyApproved);
        self.approvals |= bit;
        Ok(())
    }

    pub fn mark_executed(&mut self, multisig: &MultiSigGovernance) -> Result<()> {
        require!(!self.executed, LaunchpadError::DistributionAlreadyExecuted);
        require!(
            self.approval_count() >= multisig.required_signatures,
            LaunchpadError::InsufficientApprovals
        );
        self.executed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multisig(count: usize, required: u8) -> MultiSigGovernance {
        let mut m = MultiSigGovernance {
            signers: [Pubkey::default(); MAX_SIGNERS],
            signer_count: 0,
            required_signatures: 0,
            distribution_threshold: 1_000_000_000,
            proposal_count: 0,
            bump: 255,
        };
        let set: Vec<Pubkey> = (0..count).map(|_| Pubkey::new_unique()).collect();
        m.set_signers(&set, required).unwrap();
        m
    }

    fn proposal(amount: u64) -> DistributionProposal {
        DistributionProposal {
            multisig: Pubkey::new_unique(),
            id: 0,
            proposer: Pubkey::new_unique(),
            recipient: Pubkey::new_unique(),
            amount,
            approvals: 0,
            executed: false,
            created_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn signer_set_bounds() {
        let too_few: Vec<Pubkey> = (0..2).map(|_| Pubkey::new_unique()).collect();
        assert!(MultiSigGovernance::validate_signer_set(&too_few, 2).is_err());

        let too_many: Vec<Pubkey> = (0..11).map(|_| Pubkey::new_unique()).collect();
        assert!(MultiSigGovernance::validate_signer_set(&too_many, 5).is_err());

        let ok: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        assert!(MultiSigGovernance::validate_signer_set(&ok, 2).is_ok());
        // Required above the set size
        assert!(MultiSigGovernance::validate_signer_set(&ok, 4).is_err());
        assert!(MultiSigGovernance::validate_signer_set(&ok, 0).is_err());
    }

    #[test]
    fn duplicate_signers_rejected() {
        let dup = Pubkey::new_unique();
        let set = vec![dup, Pubkey::new_unique(), dup];
        assert!(MultiSigGovernance::validate_signer_set(&set, 2).is_err());
    }

    #[test]
    fn duplicate_approvals_count_once() {
        let m = multisig(5, 3);
        let mut p = proposal(2_000_000_000);
        let signer = m.signers[0];

        p.approve(&m, &signer).unwrap();
        assert!(p.approve(&m, &signer).is_err());
        assert_eq!(p.approval_count(), 1);
    }

    #[test]
    fn non_signer_cannot_approve() {
        let m = multisig(5, 3);
        let mut p = proposal(2_000_000_000);
        assert!(p.approve(&m, &Pubkey::new_unique()).is_err());
    }

    #[test]
    fn execution_needs_quorum() {
        let m = multisig(5, 3);
        let mut p = proposal(2_000_000_000);

        p.approve(&m, &m.signers[0]).unwrap();
        p.approve(&m, &m.signers[1]).unwrap();
        assert!(p.mark_executed(&m).is_err());

        p.approve(&m, &m.signers[2]).unwrap();
        p.mark_executed(&m).unwrap();

        // Second execution fails, as does any further approval
        assert!(p.mark_executed(&m).is_err());
        assert!(p.approve(&m, &m.signers[3]).is_err());
    }

    #[test]
    fn threshold_boundary() {
        let m = multisig(3, 2);
        assert!(!m.needs_quorum(1_000_000_000));
        assert!(m.needs_quorum(1_000_000_001));
    }

    #[test]
    fn proposal_ids_are_monotonic() {
        let mut m = multisig(3, 2);
        assert_eq!(m.next_proposal_id().unwrap(), 0);
        assert_eq!(m.next_proposal_id().unwrap(), 1);
        assert_eq!(m.proposal_count, 2);
    }
}
