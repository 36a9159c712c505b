use anchor_lang::prelude::*;

/// Per-user position in a pool. Created on first deposit and kept afterwards
/// so winnings can still be credited once principal is withdrawn.
#[account]
#[derive(InitSpace, Default)]
pub struct Depositor {
    /// Pool this position belongs to
    pub pool: Pubkey,
    /// Wallet that deposited
    pub owner: Pubkey,
    /// Principal still supplied
    pub deposited_principal: u64,
    /// Tickets held in the live ledger
    pub tickets: u64,
    /// Lifetime prizes claimed
    pub total_won: u64,
    /// Bump seed for the depositor PDA
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountPosition {
    pub owner: Pubkey,
    pub deposited_principal: u64,
    pub tickets: u64,
    pub total_won: u64,
}

impl Depositor {
    pub fn new(pool: Pubkey, owner: Pubkey, bump: u8) -> Self {
        Self {
            pool,
            owner,
            bump,
            ..Default::default()
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn position(&self) -> AccountPosition {
        AccountPosition {
            owner: self.owner,
            deposited_principal: self.deposited_principal,
            tickets: self.tickets,
            total_won: self.total_won,
        }
    }
}
