pub mod circuit_breaker;
pub mod creator;
pub mod emergency;
pub mod lbm;
pub mod multisig;
pub mod platform;
pub mod token_asset;
pub mod trade_guard;
pub mod treasury;
pub mod vesting;
pub mod voting;

pub use circuit_breaker::*;
pub use creator::*;
pub use emergency::*;
pub use lbm::*;
pub use multisig::*;
pub use platform::*;
pub use token_asset::*;
pub use trade_guard::*;
pub use treasury::*;
pub use vesting::*;
pub use voting::*;
