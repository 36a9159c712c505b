use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_DRAW_DELAY_SLOTS, MAX_INCENTIVE_BPS, POOL_SEED},
    error::ErrorCode,
    state::TicketLedger,
    utils::split_incentive,
    yield_source::YieldSource,
};

/// Where a round's draw entropy comes from.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum EntropyMode {
    /// Hash of the slot scheduled at close, read from the SlotHashes sysvar.
    #[default]
    SlotHash,
    /// Switchboard on-demand randomness committed by the pool authority.
    Beacon,
}

#[account]
#[derive(InitSpace)]
pub struct Pool {
    /// Admin allowed to update the configuration and commit beacons
    pub authority: Pubkey,
    /// Deposit token
    pub mint: Pubkey,
    /// Pool-owned token account holding supplied principal plus yield
    pub yield_reserve: Pubkey,
    /// Pool-owned token account holding harvested prize funds
    pub prize_vault: Pubkey,
    /// Program that owns valid randomness accounts
    pub beacon_program: Pubkey,
    /// Base units per ticket
    pub ticket_unit: u64,
    /// Incentive paid to maintenance callers
    pub incentive_bps: u16,
    /// Minimum seconds between harvests
    pub harvest_interval: i64,
    /// Seconds a round stays open for deposits before it can be closed
    pub lottery_interval: i64,
    /// Slots between close and the draw slot
    pub draw_delay_slots: u64,
    /// Entropy mode applied to rounds closed from now on
    pub entropy_mode: EntropyMode,
    /// Harvested funds waiting for the next close
    pub prize_pool: u64,
    /// Unix timestamp of the last harvest
    pub last_harvest_time: i64,
    /// Id of the round currently accepting or awaiting its draw
    pub current_round_id: u64,
    /// Bump seed for the pool PDA
    pub bump: u8,
    /// Bump seed for the yield reserve PDA
    pub yield_reserve_bump: u8,
    /// Bump seed for the prize vault PDA
    pub prize_vault_bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolParams {
    pub ticket_unit: u64,
    pub incentive_bps: u16,
    pub harvest_interval: i64,
    pub lottery_interval: i64,
    pub draw_delay_slots: u64,
    pub entropy_mode: EntropyMode,
    pub beacon_program: Pubkey,
}

impl PoolParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.ticket_unit > 0, ErrorCode::InvalidConfig);
        validate_schedule(
            self.incentive_bps,
            self.harvest_interval,
            self.lottery_interval,
            self.draw_delay_slots,
        )
    }
}

/// Partial configuration change. `None` keeps the current value.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub incentive_bps: Option<u16>,
    pub harvest_interval: Option<i64>,
    pub lottery_interval: Option<i64>,
    pub draw_delay_slots: Option<u64>,
    pub entropy_mode: Option<EntropyMode>,
    pub beacon_program: Option<Pubkey>,
}

fn validate_schedule(
    incentive_bps: u16,
    harvest_interval: i64,
    lottery_interval: i64,
    draw_delay_slots: u64,
) -> Result<()> {
    require!(incentive_bps <= MAX_INCENTIVE_BPS, ErrorCode::InvalidConfig);
    require!(harvest_interval > 0, ErrorCode::InvalidConfig);
    require!(lottery_interval > 0, ErrorCode::InvalidConfig);
    require!(
        draw_delay_slots >= 1 && draw_delay_slots <= MAX_DRAW_DELAY_SLOTS,
        ErrorCode::InvalidConfig
    );
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HarvestOutcome {
    pub gross_yield: u64,
    pub incentive: u64,
    pub prize_contribution: u64,
}

impl Pool {
    pub fn new(
        authority: Pubkey,
        mint: Pubkey,
        yield_reserve: Pubkey,
        prize_vault: Pubkey,
        params: &PoolParams,
        now: i64,
    ) -> Result<Self> {
        params.validate()?;

        Ok(Self {
            authority,
            mint,
            yield_reserve,
            prize_vault,
            beacon_program: params.beacon_program,
            ticket_unit: params.ticket_unit,
            incentive_bps: params.incentive_bps,
            harvest_interval: params.harvest_interval,
            lottery_interval: params.lottery_interval,
            draw_delay_slots: params.draw_delay_slots,
            entropy_mode: params.entropy_mode,
            prize_pool: 0,
            last_harvest_time: now,
            current_round_id: 1,
            bump: 0,
            yield_reserve_bump: 0,
            prize_vault_bump: 0,
        })
    }

    /// Seeds the pool PDA signs with when moving funds out of its token accounts.
    pub fn signer_seeds(&self) -> [&[u8]; 3] {
        [POOL_SEED, self.mint.as_ref(), std::slice::from_ref(&self.bump)]
    }

    /// Applies a partial update after validating the resulting schedule.
    /// The ticket unit is not updatable since existing ticket counts depend on it.
    pub fn apply_update(&mut self, update: &ConfigUpdate) -> Result<()> {
        let incentive_bps = update.incentive_bps.unwrap_or(self.incentive_bps);
        let harvest_interval = update.harvest_interval.unwrap_or(self.harvest_interval);
        let lottery_interval = update.lottery_interval.unwrap_or(self.lottery_interval);
        let draw_delay_slots = update.draw_delay_slots.unwrap_or(self.draw_delay_slots);

        validate_schedule(
            incentive_bps,
            harvest_interval,
            lottery_interval,
            draw_delay_slots,
        )?;

        self.incentive_bps = incentive_bps;
        self.harvest_interval = harvest_interval;
        self.lottery_interval = lottery_interval;
        self.draw_delay_slots = draw_delay_slots;
        if let Some(mode) = update.entropy_mode {
            self.entropy_mode = mode;
        }
        if let Some(program) = update.beacon_program {
            self.beacon_program = program;
        }
        Ok(())
    }

    /// Measures the yield accrued above the ledger's principal, pays the
    /// caller's incentive and credits the rest to the prize pool.
    ///
    /// Nothing is written unless every check passes, so a rejected harvest
    /// leaves the pool exactly as it was.
    pub fn harvest(
        &mut self,
        ledger: &TicketLedger,
        source: &impl YieldSource,
        now: i64,
    ) -> Result<HarvestOutcome> {
        let elapsed = now
            .checked_sub(self.last_harvest_time)
            .ok_or(ErrorCode::MathOverflow)?;
        require!(elapsed >= self.harvest_interval, ErrorCode::HarvestTooSoon);
        require!(!ledger.participants.is_empty(), ErrorCode::NoParticipants);

        let supplied = source.current_supplied_balance()?;
        // A lending loss shows up as a balance below principal; treat it as no yield.
        let gross_yield = supplied.saturating_sub(ledger.total_deposits);
        let (incentive, prize_contribution) = split_incentive(gross_yield, self.incentive_bps)?;

        let prize_pool = self
            .prize_pool
            .checked_add(prize_contribution)
            .ok_or(ErrorCode::MathOverflow)?;

        self.prize_pool = prize_pool;
        self.last_harvest_time = now;

        Ok(HarvestOutcome {
            gross_yield,
            incentive,
            prize_contribution,
        })
    }

    pub fn advance_round(&mut self) -> Result<u64> {
        self.current_round_id = self
            .current_round_id
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(self.current_round_id)
    }
}
