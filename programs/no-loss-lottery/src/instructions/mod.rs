pub mod admin;
pub mod claim_prize;
pub mod close_round;
pub mod commit_beacon;
pub mod deposit;
pub mod finalize_round;
pub mod harvest_yield;
pub mod views;
pub mod withdraw;

pub use admin::*;
pub use claim_prize::*;
pub use close_round::*;
pub use commit_beacon::*;
pub use deposit::*;
pub use finalize_round::*;
pub use harvest_yield::*;
pub use views::*;
pub use withdraw::*;
