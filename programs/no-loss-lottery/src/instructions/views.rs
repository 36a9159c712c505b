use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_PARTICIPANT_PAGE, POOL_SEED, TICKET_LEDGER_SEED},
    state::{AccountPosition, Depositor, Pool, Round, RoundSummary, TicketLedger},
};

// Read-only instructions. Results are returned through return data.

#[derive(Accounts)]
pub struct ViewPool<'info> {
    /// Pool being queried.
    #[account(
        seeds = [POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// The pool's live ticket record.
    #[account(
        seeds = [TICKET_LEDGER_SEED, pool.key().as_ref()],
        bump = ticket_ledger.bump,
    )]
    pub ticket_ledger: Box<Account<'info, TicketLedger>>,
}

#[derive(Accounts)]
pub struct ViewRound<'info> {
    /// Any round of any pool.
    pub round: Box<Account<'info, Round>>,
}

#[derive(Accounts)]
pub struct ViewPosition<'info> {
    /// Position being queried.
    pub depositor: Box<Account<'info, Depositor>>,
}

pub fn process_current_round_id(ctx: Context<ViewPool>) -> Result<u64> {
    Ok(ctx.accounts.pool.current_round_id)
}

pub fn process_participant_count(ctx: Context<ViewPool>) -> Result<u32> {
    Ok(ctx.accounts.ticket_ledger.participant_count())
}

/// Page of current participants in deposit order. `limit` is capped to
/// what fits in return data.
pub fn process_participants(ctx: Context<ViewPool>, offset: u32, limit: u32) -> Result<Vec<Pubkey>> {
    Ok(ctx
        .accounts
        .ticket_ledger
        .participants_page(offset, limit.min(MAX_PARTICIPANT_PAGE)))
}

pub fn process_round_summary(ctx: Context<ViewRound>) -> Result<RoundSummary> {
    Ok(ctx.accounts.round.summary())
}

pub fn process_time_remaining(ctx: Context<ViewRound>) -> Result<i64> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.round.time_remaining(now))
}

pub fn process_account_position(ctx: Context<ViewPosition>) -> Result<AccountPosition> {
    Ok(ctx.accounts.depositor.position())
}
