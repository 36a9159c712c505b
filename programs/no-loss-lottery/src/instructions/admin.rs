use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{POOL_SEED, PRIZE_VAULT_SEED, ROUND_SEED, TICKET_LEDGER_SEED, YIELD_RESERVE_SEED},
    error::ErrorCode,
    events::{ConfigUpdated, PoolInitialized, RoundOpened},
    state::{ConfigUpdate, Pool, PoolParams, Round, TicketLedger},
};

/// Accounts required to create a pool for one deposit mint.
/// Sets up the pool config, the ticket ledger, both pool-owned token
/// accounts and the first round.
#[derive(Accounts)]
pub struct InitializePool<'info> {
    /// The account paying for account creation; becomes the pool authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Token users deposit and prizes are paid in.
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = authority,
        space = 8 + Pool::INIT_SPACE,
        seeds = [POOL_SEED, mint.key().as_ref()],
        bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init,
        payer = authority,
        space = 8 + TicketLedger::INIT_SPACE,
        seeds = [TICKET_LEDGER_SEED, pool.key().as_ref()],
        bump
    )]
    pub ticket_ledger: Box<Account<'info, TicketLedger>>,

    /// Holds supplied principal and the yield credited on top of it.
    #[account(
        init,
        payer = authority,
        seeds = [YIELD_RESERVE_SEED, pool.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = pool,
        token::token_program = token_program,
    )]
    pub yield_reserve: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Holds harvested yield until it is paid out as prizes and incentives.
    #[account(
        init,
        payer = authority,
        seeds = [PRIZE_VAULT_SEED, pool.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = pool,
        token::token_program = token_program,
    )]
    pub prize_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init,
        payer = authority,
        space = Round::space(0),
        seeds = [ROUND_SEED, pool.key().as_ref(), 1u64.to_le_bytes().as_ref()],
        bump
    )]
    pub first_round: Box<Account<'info, Round>>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

/// Accounts required to change the pool's configuration.
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
        has_one = authority @ ErrorCode::Unauthorized,
    )]
    pub pool: Box<Account<'info, Pool>>,
}

/// Creates the pool and opens round 1.
///
/// # Arguments
/// * `ctx` - Context containing `InitializePool` accounts
/// * `params` - Ticket unit, incentive and schedule for the pool
pub fn process_initialize_pool(ctx: Context<InitializePool>, params: PoolParams) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool_key = ctx.accounts.pool.key();

    let mut pool = Pool::new(
        ctx.accounts.authority.key(),
        ctx.accounts.mint.key(),
        ctx.accounts.yield_reserve.key(),
        ctx.accounts.prize_vault.key(),
        &params,
        now,
    )?;
    pool.bump = ctx.bumps.pool;
    pool.yield_reserve_bump = ctx.bumps.yield_reserve;
    pool.prize_vault_bump = ctx.bumps.prize_vault;

    let first_round = Round::new_active(
        pool_key,
        pool.current_round_id,
        now,
        pool.lottery_interval,
        ctx.bumps.first_round,
    )?;
    let close_deadline = first_round.close_deadline;

    ctx.accounts.pool.set_inner(pool);
    ctx.accounts
        .ticket_ledger
        .set_inner(TicketLedger::new(pool_key, ctx.bumps.ticket_ledger));
    ctx.accounts.first_round.set_inner(first_round);

    msg!(
        "Pool initialized: ticket unit {}, incentive {} bps",
        params.ticket_unit,
        params.incentive_bps
    );
    msg!("Round 1 closes at {}", close_deadline);

    emit!(PoolInitialized {
        pool: pool_key,
        mint: ctx.accounts.mint.key(),
        authority: ctx.accounts.authority.key(),
        ticket_unit: params.ticket_unit,
    });
    emit!(RoundOpened {
        round_id: 1,
        close_deadline,
    });

    Ok(())
}

/// Applies a partial configuration update. Rounds already closed keep the
/// entropy mode frozen into them.
pub fn process_update_config(ctx: Context<UpdateConfig>, update: ConfigUpdate) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.apply_update(&update)?;

    msg!("Config updated for pool {}", pool.key());

    emit!(ConfigUpdated {
        pool: pool.key(),
        incentive_bps: pool.incentive_bps,
        harvest_interval: pool.harvest_interval,
        lottery_interval: pool.lottery_interval,
        draw_delay_slots: pool.draw_delay_slots,
        entropy_mode: pool.entropy_mode,
    });

    Ok(())
}
