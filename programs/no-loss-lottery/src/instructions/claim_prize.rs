use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{DEPOSITOR_SEED, POOL_SEED, ROUND_SEED},
    error::ErrorCode,
    events::PrizeClaimed,
    state::{Depositor, Pool, Round},
    vault::transfer_out,
};

/// Accounts required for claiming a round's prize.
///
/// Ensures:
/// 1. The round has been finalized with a winner.
/// 2. Only that winner can claim, and only once.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct ClaimPrize<'info> {
    /// Winner recorded on the round.
    pub winner: Signer<'info>,

    /// Deposit token mint.
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool state, signs for the prize vault.
    #[account(
        seeds = [POOL_SEED, mint.key().as_ref()],
        bump = pool.bump,
        has_one = mint,
        has_one = prize_vault,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Finalized round being paid out.
    #[account(
        mut,
        seeds = [ROUND_SEED, pool.key().as_ref(), round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, Round>>,

    /// The winner's position, credited with the prize.
    #[account(
        mut,
        seeds = [DEPOSITOR_SEED, pool.key().as_ref(), winner.key().as_ref()],
        bump = depositor.bump,
    )]
    pub depositor: Box<Account<'info, Depositor>>,

    /// Holds the frozen prize.
    #[account(mut)]
    pub prize_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the prize.
    #[account(
        mut,
        token::mint = mint,
    )]
    pub winner_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Pays the prize of a finalized round to its winner.
///
/// # Arguments
/// * `ctx` - Context containing `ClaimPrize` accounts
/// * `round_id` - Round whose prize is claimed
pub fn process_claim_prize(ctx: Context<ClaimPrize>, round_id: u64) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    require!(accounts.round.id == round_id, ErrorCode::InvalidRoundId);

    let amount = accounts.round.claim(&accounts.winner.key())?;
    accounts.depositor.total_won = accounts
        .depositor
        .total_won
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;

    transfer_out(
        &accounts.token_program,
        &accounts.mint,
        &accounts.prize_vault,
        &accounts.winner_token_account,
        &accounts.pool,
        amount,
    )?;

    msg!("Winner {} claimed {} from round {}", accounts.winner.key(), amount, round_id);

    emit!(PrizeClaimed {
        round_id,
        winner: accounts.winner.key(),
        amount,
    });

    Ok(())
}
