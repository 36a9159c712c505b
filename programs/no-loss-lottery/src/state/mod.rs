pub mod depositor;
pub mod ledger;
pub mod pool;
pub mod round;

pub use depositor::*;
pub use ledger::*;
pub use pool::*;
pub use round::*;
