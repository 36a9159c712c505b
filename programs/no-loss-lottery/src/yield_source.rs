use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;

/// External lending position holding the pooled principal. Its reported
/// balance grows past what was supplied by the yield earned so far.
pub trait YieldSource {
    fn current_supplied_balance(&self) -> Result<u64>;
}

/// The yield reserve is a pool-owned token account credited by the lending
/// integration, so the supplied balance is simply its token amount.
impl YieldSource for TokenAccount {
    fn current_supplied_balance(&self) -> Result<u64> {
        Ok(self.amount)
    }
}
