use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{POOL_SEED, TICKET_LEDGER_SEED},
    events::YieldHarvested,
    state::{Pool, TicketLedger},
    vault::transfer_out,
};

/// Accounts required to move accrued yield into the prize vault. Anyone may
/// call this once the harvest interval has elapsed.
#[derive(Accounts)]
pub struct HarvestYield<'info> {
    /// Anyone; paid the harvest incentive.
    pub caller: Signer<'info>,

    /// Deposit token mint.
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool state, its prize pool grows by the harvested yield.
    #[account(
        mut,
        seeds = [POOL_SEED, mint.key().as_ref()],
        bump = pool.bump,
        has_one = mint,
        has_one = yield_reserve,
        has_one = prize_vault,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Total deposits, the principal the reserve must keep.
    #[account(
        seeds = [TICKET_LEDGER_SEED, pool.key().as_ref()],
        bump = ticket_ledger.bump,
    )]
    pub ticket_ledger: Box<Account<'info, TicketLedger>>,

    /// Supplied balance; everything above principal is yield.
    #[account(mut)]
    pub yield_reserve: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the prize contribution.
    #[account(mut)]
    pub prize_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the harvest incentive.
    #[account(
        mut,
        token::mint = mint,
    )]
    pub caller_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn process_harvest_yield(ctx: Context<HarvestYield>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;

    let reserve: &TokenAccount = &accounts.yield_reserve;
    let outcome = accounts.pool.harvest(&accounts.ticket_ledger, reserve, now)?;

    if outcome.gross_yield == 0 {
        msg!("No yield accrued since last harvest");
        return Ok(());
    }

    transfer_out(
        &accounts.token_program,
        &accounts.mint,
        &accounts.yield_reserve,
        &accounts.prize_vault,
        &accounts.pool,
        outcome.prize_contribution,
    )?;
    transfer_out(
        &accounts.token_program,
        &accounts.mint,
        &accounts.yield_reserve,
        &accounts.caller_token_account,
        &accounts.pool,
        outcome.incentive,
    )?;

    msg!(
        "Harvested {}: incentive {}, prize pool now {}",
        outcome.gross_yield,
        outcome.incentive,
        accounts.pool.prize_pool
    );

    emit!(YieldHarvested {
        caller: accounts.caller.key(),
        gross_yield: outcome.gross_yield,
        incentive: outcome.incentive,
        prize_contribution: outcome.prize_contribution,
        prize_pool: accounts.pool.prize_pool,
    });

    Ok(())
}
