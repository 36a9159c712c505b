use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{DEPOSITOR_SEED, POOL_SEED, TICKET_LEDGER_SEED},
    error::ErrorCode,
    events::Deposited,
    state::{Depositor, Pool, TicketLedger},
    vault::transfer_in,
};

/// Accounts required to deposit principal and receive tickets.
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The depositor, paying for their position account on first deposit.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Deposit token mint.
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool state, holds the ticket unit.
    #[account(
        seeds = [POOL_SEED, mint.key().as_ref()],
        bump = pool.bump,
        has_one = mint,
        has_one = yield_reserve,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Live ticket record the new tickets go into.
    #[account(
        mut,
        seeds = [TICKET_LEDGER_SEED, pool.key().as_ref()],
        bump = ticket_ledger.bump,
    )]
    pub ticket_ledger: Box<Account<'info, TicketLedger>>,

    /// The owner's position, created on first deposit.
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Depositor::INIT_SPACE,
        seeds = [DEPOSITOR_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub depositor: Box<Account<'info, Depositor>>,

    /// Source of the deposit.
    #[account(
        mut,
        token::mint = mint,
        token::authority = owner,
    )]
    pub owner_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the deposit.
    #[account(mut)]
    pub yield_reserve: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

/// Supplies `amount` into the yield reserve and mints one ticket per
/// ticket unit.
///
/// Steps:
/// 1. Check the amount is unit-aligned and covered by the owner's balance.
/// 2. Record principal and tickets in the ledger and the depositor account.
/// 3. Transfer the tokens into the yield reserve.
pub fn process_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let accounts = &mut *ctx.accounts;

    require!(
        accounts.owner_token_account.amount >= amount,
        ErrorCode::InsufficientBalance
    );

    if !accounts.depositor.is_initialized() {
        accounts.depositor.set_inner(Depositor::new(
            accounts.pool.key(),
            accounts.owner.key(),
            ctx.bumps.depositor,
        ));
    }

    let ticket_delta =
        accounts
            .ticket_ledger
            .deposit(&mut accounts.depositor, amount, accounts.pool.ticket_unit)?;

    transfer_in(
        &accounts.token_program,
        &accounts.mint,
        &accounts.owner_token_account,
        &accounts.yield_reserve,
        &accounts.owner,
        amount,
    )?;

    msg!(
        "Deposited {} for {} tickets, total tickets {}",
        amount,
        ticket_delta,
        accounts.ticket_ledger.total_tickets
    );

    emit!(Deposited {
        owner: accounts.owner.key(),
        amount,
        ticket_delta,
        total_tickets: accounts.ticket_ledger.total_tickets,
    });

    Ok(())
}
