// Launchpad Program Constants

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["config"]
pub const CONFIG: &[u8] = b"config";

// Seeds for PDA derivation: ["creator", owner]
pub const CREATOR: &[u8] = b"creator";

// Seeds for PDA derivation: ["token_asset", mint]
pub const TOKEN_ASSET: &[u8] = b"token_asset";

// Seeds for PDA derivation: ["vesting", mint, owner]
pub const VESTING: &[u8] = b"vesting";

// Seeds for PDA derivation: ["vesting_vault", vesting]
pub const VESTING_VAULT: &[u8] = b"vesting_vault";

// Seeds for PDA derivation: ["lbm_pool", mint]
pub const LBM_POOL: &[u8] = b"lbm_pool";

// Seeds for PDA derivation: ["lbm_vault", pool]
pub const LBM_VAULT: &[u8] = b"lbm_vault";

// Seeds for PDA derivation: ["lbm_token_vault", pool]
pub const LBM_TOKEN_VAULT: &[u8] = b"lbm_token_vault";

// Seeds for PDA derivation: ["lbm_position", pool, wallet]
pub const LBM_POSITION: &[u8] = b"lbm_position";

// Seeds for PDA derivation: ["treasury"]
pub const TREASURY: &[u8] = b"treasury";

// Seeds for PDA derivation: ["reserve_vault", treasury]
pub const RESERVE_VAULT: &[u8] = b"reserve_vault";

// Seeds for PDA derivation: ["buyback_vault", treasury]
pub const BUYBACK_VAULT: &[u8] = b"buyback_vault";

// Seeds for PDA derivation: ["lp_vault", treasury]
pub const LP_VAULT: &[u8] = b"lp_vault";

// Seeds for PDA derivation: ["buyback_config"]
pub const BUYBACK_CONFIG: &[u8] = b"buyback_config";

// Seeds for PDA derivation: ["circuit_breaker"]
pub const CIRCUIT_BREAKER: &[u8] = b"circuit_breaker";

// Seeds for PDA derivation: ["trade_limits"]
pub const TRADE_LIMITS: &[u8] = b"trade_limits";

// Seeds for PDA derivation: ["trade_guard", wallet]
pub const TRADE_GUARD: &[u8] = b"trade_guard";

// Seeds for PDA derivation: ["voting_safeguards"]
pub const VOTING_SAFEGUARDS: &[u8] = b"voting_safeguards";

// Seeds for PDA derivation: ["voter", wallet]
pub const VOTER: &[u8] = b"voter";

// Seeds for PDA derivation: ["multi_sig"]
pub const MULTI_SIG: &[u8] = b"multi_sig";

// Seeds for PDA derivation: ["distribution", multi_sig, proposal_id]
pub const DISTRIBUTION: &[u8] = b"distribution";

// Seeds for PDA derivation: ["emergency"]
pub const EMERGENCY: &[u8] = b"emergency";

// Creator registration stake floor (0.5 SOL)
pub const MIN_CREATOR_STAKE: u64 = 500_000_000;

// Rolling creation window and its cap
pub const CREATION_WINDOW: i64 = 7 * 24 * 60 * 60;
pub const MAX_CREATIONS_PER_WINDOW: u8 = 2;

// Creator allocation bounds (percent of total supply)
pub const MIN_CREATOR_PERCENT: u8 = 1;
pub const MAX_CREATOR_PERCENT: u8 = 20;

// Vesting duration bounds
pub const MIN_VESTING_SECONDS: i64 = 30 * 24 * 60 * 60;
pub const MAX_VESTING_SECONDS: i64 = 365 * 24 * 60 * 60;

// Window after the cliff in which the creator must pick a distribution choice
pub const CHOICE_WINDOW: i64 = 14 * 24 * 60 * 60;

// Token decimals cap
pub const MAX_TOKEN_DECIMALS: u8 = 9;

// LBM floors
pub const MIN_TARGET_LIQUIDITY: u64 = 1_000_000_000; // 1 SOL
pub const MAX_BOOTSTRAP_DURATION: i64 = 30 * 24 * 60 * 60;

// Buyback bounds (USDC, 6 decimals)
pub const MIN_BUYBACK_AMOUNT: u64 = 1_000_000;
pub const MAX_BUYBACK_AMOUNT: u64 = 1_000_000_000_000;

// Multisig signer-set bounds
pub const MIN_SIGNERS: usize = 3;
pub const MAX_SIGNERS: usize = 10;

// Sliding daily-volume window resolution (hourly buckets over 24 h)
pub const VOLUME_BUCKETS: usize = 24;
pub const VOLUME_BUCKET_SECONDS: i64 = 60 * 60;

// Longest pause reason stored on chain
pub const MAX_REASON_LEN: usize = 128;
