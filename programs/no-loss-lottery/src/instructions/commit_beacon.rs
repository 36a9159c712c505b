use anchor_lang::prelude::*;

use crate::{
    constants::{POOL_SEED, ROUND_SEED},
    entropy::BeaconReading,
    error::ErrorCode,
    events::BeaconCommitted,
    state::{Pool, Round},
};

/// Accounts required to commit a Switchboard randomness account to the
/// closed round.
///
/// Ensures:
/// 1. The randomness account belongs to the configured beacon program.
/// 2. Its seed was committed in the previous slot, so the value is not
///    yet known to anyone.
/// 3. A replaced commitment was never revealed.
#[derive(Accounts)]
pub struct CommitBeacon<'info> {
    /// Anyone once the SlotHashes window lapsed, the pool authority for
    /// beacon rounds.
    pub caller: Signer<'info>,

    /// Pool whose current round receives the commitment.
    #[account(
        seeds = [POOL_SEED, pool.mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// Closed round awaiting its draw.
    #[account(
        mut,
        seeds = [ROUND_SEED, pool.key().as_ref(), pool.current_round_id.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, Round>>,

    /// Randomness account from Switchboard.
    /// CHECK: Owner is checked here, data is parsed within the handler.
    #[account(owner = pool.beacon_program @ ErrorCode::IncorrectRandomnessAccount)]
    pub randomness_account_data: UncheckedAccount<'info>,

    /// Randomness account currently committed to the round, required when
    /// replacing it.
    /// CHECK: Owner is checked here, key and data are checked by the round.
    #[account(owner = pool.beacon_program @ ErrorCode::IncorrectRandomnessAccount)]
    pub previous_randomness_account_data: Option<UncheckedAccount<'info>>,
}

pub fn process_commit_beacon(ctx: Context<CommitBeacon>) -> Result<()> {
    let clock = Clock::get()?;
    let by_authority = ctx.accounts.caller.key() == ctx.accounts.pool.authority;
    let randomness_key = ctx.accounts.randomness_account_data.key();

    let reading = BeaconReading::parse(ctx.accounts.randomness_account_data.try_borrow_data()?)?;
    let previous = match &ctx.accounts.previous_randomness_account_data {
        Some(account) => Some((account.key(), BeaconReading::parse(account.try_borrow_data()?)?)),
        None => None,
    };

    let round = &mut ctx.accounts.round;
    round.commit_beacon(
        randomness_key,
        &reading,
        previous.as_ref().map(|(key, previous)| (*key, previous)),
        clock.slot,
        by_authority,
    )?;

    msg!("Beacon {} committed for round {}", randomness_key, round.id);

    emit!(BeaconCommitted {
        round_id: round.id,
        randomness_account: randomness_key,
        slot: clock.slot,
    });

    Ok(())
}
