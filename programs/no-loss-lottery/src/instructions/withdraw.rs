use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{DEPOSITOR_SEED, POOL_SEED, TICKET_LEDGER_SEED},
    events::Withdrawn,
    state::{Depositor, Pool, TicketLedger},
    vault::transfer_out,
};

/// Accounts required to redeem principal.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Depositor redeeming principal.
    pub owner: Signer<'info>,

    /// Deposit token mint.
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool state, signs for the reserve.
    #[account(
        seeds = [POOL_SEED, mint.key().as_ref()],
        bump = pool.bump,
        has_one = mint,
        has_one = yield_reserve,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Live ticket record the burned tickets come out of.
    #[account(
        mut,
        seeds = [TICKET_LEDGER_SEED, pool.key().as_ref()],
        bump = ticket_ledger.bump,
    )]
    pub ticket_ledger: Box<Account<'info, TicketLedger>>,

    /// The owner's position.
    #[account(
        mut,
        seeds = [DEPOSITOR_SEED, pool.key().as_ref(), owner.key().as_ref()],
        bump = depositor.bump,
        has_one = owner,
    )]
    pub depositor: Box<Account<'info, Depositor>>,

    /// Receives the redeemed principal.
    #[account(
        mut,
        token::mint = mint,
    )]
    pub owner_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Holds principal and accrued yield.
    #[account(mut)]
    pub yield_reserve: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Redeems `amount` of principal, burning the matching tickets. Principal
/// is always redeemable, whatever the current round phase.
pub fn process_withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let accounts = &mut *ctx.accounts;

    let ticket_delta =
        accounts
            .ticket_ledger
            .withdraw(&mut accounts.depositor, amount, accounts.pool.ticket_unit)?;

    transfer_out(
        &accounts.token_program,
        &accounts.mint,
        &accounts.yield_reserve,
        &accounts.owner_token_account,
        &accounts.pool,
        amount,
    )?;

    msg!(
        "Withdrew {} burning {} tickets, {} principal left",
        amount,
        ticket_delta,
        accounts.depositor.deposited_principal
    );

    emit!(Withdrawn {
        owner: accounts.owner.key(),
        amount,
        ticket_delta,
        total_tickets: accounts.ticket_ledger.total_tickets,
    });

    Ok(())
}
