use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{POOL_SEED, ROUND_SEED, TICKET_LEDGER_SEED},
    events::RoundClosed,
    state::{Pool, Round, TicketLedger},
    vault::transfer_out,
};

/// Accounts required to close the current round.
///
/// The round account is resized to hold exactly the frozen ticket record;
/// the caller pays for the extra rent and is paid the close incentive.
#[derive(Accounts)]
pub struct CloseRound<'info> {
    /// Pays for the resize and receives the close incentive.
    #[account(mut)]
    pub caller: Signer<'info>,

    /// Deposit token mint.
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool state, its prize pool is moved into the round.
    #[account(
        mut,
        seeds = [POOL_SEED, mint.key().as_ref()],
        bump = pool.bump,
        has_one = mint,
        has_one = prize_vault,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Live ticket record, copied into the round.
    #[account(
        seeds = [TICKET_LEDGER_SEED, pool.key().as_ref()],
        bump = ticket_ledger.bump,
    )]
    pub ticket_ledger: Box<Account<'info, TicketLedger>>,

    /// Current round, sized to hold the frozen record.
    #[account(
        mut,
        seeds = [ROUND_SEED, pool.key().as_ref(), pool.current_round_id.to_le_bytes().as_ref()],
        bump = round.bump,
        realloc = Round::space(ticket_ledger.participants.len()),
        realloc::payer = caller,
        realloc::zero = false,
    )]
    pub round: Box<Account<'info, Round>>,

    /// Pays out the close incentive.
    #[account(mut)]
    pub prize_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the close incentive.
    #[account(
        mut,
        token::mint = mint,
    )]
    pub caller_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

/// Freezes the current round's tickets and prize and schedules its draw slot.
///
/// Steps:
/// 1. Check the round is active and its deadline has passed.
/// 2. Snapshot the ledger and freeze the entropy mode.
/// 3. Split the prize pool into the close incentive, the finalize reward
///    and the prize.
/// 4. Pay the close incentive to the caller.
pub fn process_close_round(ctx: Context<CloseRound>) -> Result<()> {
    let clock = Clock::get()?;
    let accounts = &mut *ctx.accounts;

    let outcome = accounts.round.freeze(
        &mut accounts.pool,
        &accounts.ticket_ledger,
        clock.unix_timestamp,
        clock.slot,
    )?;

    transfer_out(
        &accounts.token_program,
        &accounts.mint,
        &accounts.prize_vault,
        &accounts.caller_token_account,
        &accounts.pool,
        outcome.close_incentive,
    )?;

    msg!("Round {} closed", accounts.round.id);
    msg!("Ticket snapshot: {}", accounts.round.ticket_snapshot_total);
    msg!("Draw slot: {}", outcome.draw_slot);
    msg!("Prize: {}", outcome.prize_amount);

    emit!(RoundClosed {
        round_id: accounts.round.id,
        caller: accounts.caller.key(),
        draw_slot: outcome.draw_slot,
        ticket_snapshot_total: accounts.round.ticket_snapshot_total,
        prize_amount: outcome.prize_amount,
        close_incentive: outcome.close_incentive,
        entropy_mode: accounts.round.entropy_mode,
    });

    Ok(())
}
