use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{POOL_SEED, ROUND_SEED},
    entropy::{BeaconReading, EntropySource, SlotHashEntropy},
    events::{RoundFinalized, RoundOpened},
    state::{FinalizeOutcome, Pool, Round},
    vault::transfer_out,
};

/// Accounts required to draw the closed round's winner from the slot hash
/// of its draw slot, and to open the next round.
#[derive(Accounts)]
pub struct FinalizeRound<'info> {
    /// Pays rent for the next round and receives the finalize reward.
    #[account(mut)]
    pub caller: Signer<'info>,

    /// Deposit token mint.
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool state, advanced to the next round.
    #[account(
        mut,
        seeds = [POOL_SEED, mint.key().as_ref()],
        bump = pool.bump,
        has_one = mint,
        has_one = prize_vault,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Closed round being drawn.
    #[account(
        mut,
        seeds = [ROUND_SEED, pool.key().as_ref(), pool.current_round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, Round>>,

    /// Round opened once this one is finalized.
    #[account(
        init,
        payer = caller,
        space = Round::space(0),
        seeds = [ROUND_SEED, pool.key().as_ref(), pool.current_round_id.saturating_add(1).to_le_bytes().as_ref()],
        bump
    )]
    pub next_round: Box<Account<'info, Round>>,

    /// Pays out the finalize reward.
    #[account(mut)]
    pub prize_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the finalize reward.
    #[account(
        mut,
        token::mint = mint,
    )]
    pub caller_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: Address is checked against the SlotHashes sysvar id.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

/// Same as [`FinalizeRound`] with the committed Switchboard randomness
/// account in place of the SlotHashes sysvar.
#[derive(Accounts)]
pub struct FinalizeRoundWithBeacon<'info> {
    /// Pays rent for the next round and receives the finalize reward.
    #[account(mut)]
    pub caller: Signer<'info>,

    /// Deposit token mint.
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Pool state, advanced to the next round.
    #[account(
        mut,
        seeds = [POOL_SEED, mint.key().as_ref()],
        bump = pool.bump,
        has_one = mint,
        has_one = prize_vault,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Closed round being drawn.
    #[account(
        mut,
        seeds = [ROUND_SEED, pool.key().as_ref(), pool.current_round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, Round>>,

    /// Round opened once this one is finalized.
    #[account(
        init,
        payer = caller,
        space = Round::space(0),
        seeds = [ROUND_SEED, pool.key().as_ref(), pool.current_round_id.saturating_add(1).to_le_bytes().as_ref()],
        bump
    )]
    pub next_round: Box<Account<'info, Round>>,

    /// Pays out the finalize reward.
    #[account(mut)]
    pub prize_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the finalize reward.
    #[account(
        mut,
        token::mint = mint,
    )]
    pub caller_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Randomness account from Switchboard.
    /// CHECK: Must be the account committed to the round, checked by the round after parsing.
    pub randomness_account_data: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

pub fn process_finalize_round(ctx: Context<FinalizeRound>) -> Result<()> {
    let clock = Clock::get()?;
    let accounts = &mut *ctx.accounts;
    accounts.round.require_slot_hash_entropy()?;

    let outcome = {
        let data = accounts.slot_hashes.try_borrow_data()?;
        let entropy = SlotHashEntropy::new(&data);
        settle(
            &mut accounts.pool,
            &mut accounts.round,
            &mut accounts.next_round,
            ctx.bumps.next_round,
            &entropy,
            &clock,
        )?
    };

    transfer_out(
        &accounts.token_program,
        &accounts.mint,
        &accounts.prize_vault,
        &accounts.caller_token_account,
        &accounts.pool,
        outcome.finalize_reward,
    )?;

    emit_finalized(&accounts.round, accounts.caller.key(), &outcome);
    Ok(())
}

pub fn process_finalize_round_with_beacon(ctx: Context<FinalizeRoundWithBeacon>) -> Result<()> {
    let clock = Clock::get()?;
    let accounts = &mut *ctx.accounts;

    let reading = BeaconReading::parse(accounts.randomness_account_data.try_borrow_data()?)?;
    let entropy = accounts
        .round
        .beacon_entropy(accounts.randomness_account_data.key(), &reading)?;
    msg!("Randomness result: {}", reading.value[0]);

    let outcome = settle(
        &mut accounts.pool,
        &mut accounts.round,
        &mut accounts.next_round,
        ctx.bumps.next_round,
        &entropy,
        &clock,
    )?;

    transfer_out(
        &accounts.token_program,
        &accounts.mint,
        &accounts.prize_vault,
        &accounts.caller_token_account,
        &accounts.pool,
        outcome.finalize_reward,
    )?;

    emit_finalized(&accounts.round, accounts.caller.key(), &outcome);
    Ok(())
}

/// Draws the winner, advances the pool and opens the next round.
fn settle(
    pool: &mut Pool,
    round: &mut Round,
    next_round: &mut Account<'_, Round>,
    next_bump: u8,
    entropy: &impl EntropySource,
    clock: &Clock,
) -> Result<FinalizeOutcome> {
    let pool_key = round.pool;
    let outcome = round.finalize(pool, entropy, clock.slot)?;

    next_round.set_inner(Round::new_active(
        pool_key,
        pool.current_round_id,
        clock.unix_timestamp,
        pool.lottery_interval,
        next_bump,
    )?);

    msg!("Round {} finalized", round.id);
    msg!("Ticket num: {}", round.ticket_snapshot_total);
    match outcome.winner {
        Some(winner) => msg!("Winner: {}", winner),
        None => msg!("No tickets, {} carried over", outcome.carried_over),
    }

    emit!(RoundOpened {
        round_id: next_round.id,
        close_deadline: next_round.close_deadline,
    });

    Ok(outcome)
}

fn emit_finalized(round: &Round, caller: Pubkey, outcome: &FinalizeOutcome) {
    emit!(RoundFinalized {
        round_id: round.id,
        caller,
        winner: outcome.winner,
        prize_amount: round.prize_amount,
        finalize_reward: outcome.finalize_reward,
        seed: outcome.seed,
    });
}
