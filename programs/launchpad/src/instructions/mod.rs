// Instructions module
// - initialize_platform / initialize_treasury / initialize_guards /
//   initialize_voting / initialize_multisig (one-time setup)
// - register_creator / set_creator_ban / create_token
// - create_lbm_pool / participate_lbm / finalize_lbm / claim_lbm_refund /
//   claim_lbm_tokens
// - collect_fees / record_buyback / update_buyback_config / burn_buyback_vault
// - propose_distribution / approve_distribution / execute_distribution
// - update_voting_power / update_voting_safeguards
// - trip_circuit_breaker / reset_circuit_breaker / update_trade_limits
// - claim_vested / choose_distribution / resolve_expired_choice
// - emergency_pause / resume_from_pause

pub mod approve_distribution;
pub mod burn_buyback_vault;
pub mod choose_distribution;
pub mod claim_lbm_refund;
pub mod claim_lbm_tokens;
pub mod claim_vested;
pub mod collect_fees;
pub mod create_lbm_pool;
pub mod create_token;
pub mod emergency_pause;
pub mod execute_distribution;
pub mod finalize_lbm;
pub mod initialize_guards;
pub mod initialize_multisig;
pub mod initialize_platform;
pub mod initialize_treasury;
pub mod initialize_voting;
pub mod participate_lbm;
pub mod propose_distribution;
pub mod record_buyback;
pub mod register_creator;
pub mod reset_circuit_breaker;
pub mod resolve_expired_choice;
pub mod resume_from_pause;
pub mod set_creator_ban;
pub mod trip_circuit_breaker;
pub mod update_buyback_config;
pub mod update_trade_limits;
pub mod update_voting_power;
pub mod update_voting_safeguards;

pub use approve_distribution::*;
pub use burn_buyback_vault::*;
pub use choose_distribution::*;
pub use claim_lbm_refund::*;
pub use claim_lbm_tokens::*;
pub use claim_vested::*;
pub use collect_fees::*;
pub use create_lbm_pool::*;
pub use create_token::*;
pub use emergency_pause::*;
pub use execute_distribution::*;
pub use finalize_lbm::*;
pub use initialize_guards::*;
pub use initialize_multisig::*;
pub use initialize_platform::*;
pub use initialize_treasury::*;
pub use initialize_voting::*;
pub use participate_lbm::*;
pub use propose_distribution::*;
pub use record_buyback::*;
pub use register_creator::*;
pub use reset_circuit_breaker::*;
pub use resolve_expired_choice::*;
pub use resume_from_pause::*;
pub use set_creator_ban::*;
pub use trip_circuit_breaker::*;
pub use update_buyback_config::*;
pub use update_trade_limits::*;
pub use update_voting_power::*;
pub use update_voting_safeguards::*;
