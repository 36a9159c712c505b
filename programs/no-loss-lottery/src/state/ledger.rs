use anchor_lang::prelude::*;

use crate::{constants::MAX_PARTICIPANTS, error::ErrorCode, state::Depositor};

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub struct TicketEntry {
    pub owner: Pubkey,
    pub tickets: u64,
}

/// Live ticket balances for the current round. Only accounts holding at
/// least one ticket are listed, in the order they first deposited.
#[account]
#[derive(InitSpace, Default)]
pub struct TicketLedger {
    /// Pool this ledger belongs to
    pub pool: Pubkey,
    /// Principal currently supplied on behalf of all depositors
    pub total_deposits: u64,
    /// Sum of all participants' tickets
    pub total_tickets: u64,
    /// Ticket holders in first-deposit order
    #[max_len(MAX_PARTICIPANTS)]
    pub participants: Vec<TicketEntry>,
    /// Bump seed for the ledger PDA
    pub bump: u8,
}

/// Converts a deposit or withdrawal amount into whole tickets.
pub fn tickets_for(amount: u64, ticket_unit: u64) -> Result<u64> {
    require!(
        amount > 0 && ticket_unit > 0 && amount % ticket_unit == 0,
        ErrorCode::InvalidTicketAmount
    );
    Ok(amount / ticket_unit)
}

impl TicketLedger {
    pub fn new(pool: Pubkey, bump: u8) -> Self {
        Self {
            pool,
            bump,
            ..Default::default()
        }
    }

    fn position_of(&self, owner: &Pubkey) -> Option<usize> {
        self.participants.iter().position(|e| e.owner == *owner)
    }

    pub fn tickets_of(&self, owner: &Pubkey) -> u64 {
        self.position_of(owner)
            .map(|i| self.participants[i].tickets)
            .unwrap_or(0)
    }

    pub fn participant_count(&self) -> u32 {
        self.participants.len() as u32
    }

    pub fn participants_page(&self, offset: u32, limit: u32) -> Vec<Pubkey> {
        self.participants
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|e| e.owner)
            .collect()
    }

    /// Records `amount` of new principal for `depositor` and returns the
    /// tickets minted for it.
    pub fn deposit(
        &mut self,
        depositor: &mut Depositor,
        amount: u64,
        ticket_unit: u64,
    ) -> Result<u64> {
        let minted = tickets_for(amount, ticket_unit)?;

        let principal = depositor
            .deposited_principal
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let tickets = depositor
            .tickets
            .checked_add(minted)
            .ok_or(ErrorCode::MathOverflow)?;
        let total_deposits = self
            .total_deposits
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let total_tickets = self
            .total_tickets
            .checked_add(minted)
            .ok_or(ErrorCode::MathOverflow)?;

        match self.position_of(&depositor.owner) {
            Some(i) => self.participants[i].tickets = tickets,
            None => {
                require!(
                    self.participants.len() < MAX_PARTICIPANTS,
                    ErrorCode::TooManyParticipants
                );
                self.participants.push(TicketEntry {
                    owner: depositor.owner,
                    tickets,
                });
            }
        }

        depositor.deposited_principal = principal;
        depositor.tickets = tickets;
        self.total_deposits = total_deposits;
        self.total_tickets = total_tickets;

        Ok(minted)
    }

    /// Releases `amount` of principal and burns the matching tickets. A
    /// depositor left with nothing drops out of the participant list.
    pub fn withdraw(
        &mut self,
        depositor: &mut Depositor,
        amount: u64,
        ticket_unit: u64,
    ) -> Result<u64> {
        let burned = tickets_for(amount, ticket_unit)?;
        require!(
            amount <= depositor.deposited_principal,
            ErrorCode::InsufficientDeposit
        );

        let principal = depositor.deposited_principal - amount;
        let tickets = depositor
            .tickets
            .checked_sub(burned)
            .ok_or(ErrorCode::MathOverflow)?;
        let total_deposits = self
            .total_deposits
            .checked_sub(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        let total_tickets = self
            .total_tickets
            .checked_sub(burned)
            .ok_or(ErrorCode::MathOverflow)?;
        let index = self
            .position_of(&depositor.owner)
            .ok_or(ErrorCode::InsufficientDeposit)?;

        if principal == 0 {
            self.participants.remove(index);
        } else {
            self.participants[index].tickets = tickets;
        }

        depositor.deposited_principal = principal;
        depositor.tickets = tickets;
        self.total_deposits = total_deposits;
        self.total_tickets = total_tickets;

        Ok(burned)
    }
}
