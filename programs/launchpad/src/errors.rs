use anchor_lang::prelude::*;

#[error_code]
pub enum LaunchpadError {
    // Creator registry errors
    #[msg("Creator is banned")]
    CreatorBanned,

    #[msg("Registration stake is below the minimum")]
    InsufficientStake,

    #[msg("Weekly token creation limit reached")]
    WeeklyLimitExceeded,

    // Token asset errors
    #[msg("Token decimals exceed the maximum of 9")]
    InvalidDecimals,

    #[msg("Creator allocation must be between 1 and 20 percent")]
    InvalidCreatorPercent,

    #[msg("Vesting duration must be between 30 and 365 days")]
    InvalidVestingPeriod,

    #[msg("Total supply must be greater than zero")]
    InvalidTokenSupply,

    // LBM errors
    #[msg("Target liquidity is below the protocol floor")]
    InsufficientLiquidity,

    #[msg("Pool is not active or outside its participation window")]
    PoolInactive,

    #[msg("Participation amount is below the per-wallet minimum")]
    InsufficientParticipationAmount,

    #[msg("Participation would exceed a per-wallet or pool cap")]
    ParticipationLimitExceeded,

    #[msg("Pool has already been finalized")]
    PoolAlreadyFinalized,

    #[msg("Pool cannot be finalized before its end time or target")]
    PoolStillActive,

    #[msg("Refunds are not enabled for this pool")]
    RefundsNotEnabled,

    #[msg("Refund has already been claimed")]
    RefundAlreadyClaimed,

    #[msg("Price discovery has not completed for this pool")]
    PriceDiscoveryNotComplete,

    #[msg("Token allocation has already been claimed")]
    TokensAlreadyClaimed,

    // Trade protection errors
    #[msg("Trade submitted before the minimum interval elapsed")]
    TradeTooFrequent,

    #[msg("Trade exceeds the maximum single-trade amount")]
    TradeTooLarge,

    #[msg("Trade would exceed the rolling daily volume cap")]
    DailyVolumeExceeded,

    // Circuit breaker errors
    #[msg("Circuit breaker is triggered; trading is halted")]
    CircuitBreakerTriggered,

    // Buyback errors
    #[msg("Buyback is disabled")]
    BuybackDisabled,

    #[msg("Buyback executed before the configured frequency elapsed")]
    BuybackTooFrequent,

    #[msg("Caller is not the treasury authority")]
    UnauthorizedBuyback,

    #[msg("Burn and LP percentages must sum to 100")]
    InvalidBuybackPercentages,

    #[msg("Buyback amount is below the protocol floor")]
    BuybackAmountTooSmall,

    #[msg("Buyback amount exceeds the protocol ceiling")]
    BuybackAmountTooLarge,

    #[msg("Buyback vault does not hold the reported tokens")]
    BuybackNotVerified,

    #[msg("No tokens available to process")]
    NoTokensToProcess,

    // Voting errors
    #[msg("Voting power weights must sum to exactly 100")]
    InvalidVotingPowerWeights,

    #[msg("Duration multipliers must be positive and non-decreasing")]
    InvalidDurationMultipliers,

    // Multisig errors
    #[msg("Invalid signer set size")]
    InvalidSignerSet,

    #[msg("Required signatures cannot exceed the signer count")]
    InvalidSignatureThreshold,

    #[msg("Signer is not part of the multisig")]
    NotASigner,

    #[msg("Signer has already approved this distribution")]
    AlreadyApproved,

    #[msg("Distribution has not reached the required approvals")]
    InsufficientApprovals,

    #[msg("Distribution has already been executed")]
    DistributionAlreadyExecuted,

    #[msg("Treasury reserve does not cover the distribution")]
    InsufficientReserve,

    // Emergency errors
    #[msg("Program is paused")]
    ProgramPaused,

    #[msg("Program is not paused")]
    NotPaused,

    #[msg("Pause reason exceeds the maximum length")]
    ReasonTooLong,

    // Vesting errors
    #[msg("Cliff has not been reached")]
    NotVested,

    #[msg("No vested tokens available to claim")]
    NothingToClaim,

    #[msg("Distribution choice has already been made")]
    ChoiceAlreadyMade,

    #[msg("Choice deadline has passed")]
    ChoiceDeadlinePassed,

    #[msg("Choice deadline has not passed yet")]
    ChoiceDeadlineNotReached,

    #[msg("Vesting schedule has been revoked")]
    VestingRevoked,

    // Shared errors
    #[msg("Caller is not authorized for this operation")]
    Unauthorized,

    #[msg("Invalid parameter provided")]
    InvalidParameter,

    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Arithmetic underflow")]
    Underflow,

    #[msg("Division by zero")]
    DivisionByZero,
}
