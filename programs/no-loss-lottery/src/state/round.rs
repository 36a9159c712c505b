use anchor_lang::prelude::*;

use crate::{
    constants::{BEACON_TIMEOUT_SLOTS, MAX_PARTICIPANTS, SLOT_HASH_WINDOW},
    entropy::{BeaconEntropy, BeaconReading, EntropySource},
    error::ErrorCode,
    selector::{derive_seed, select_winner},
    state::{EntropyMode, Pool, TicketEntry, TicketLedger},
    utils::incentive,
};

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RoundPhase {
    #[default]
    Active,
    Closed {
        draw_slot: u64,
    },
    Finalized {
        draw_slot: u64,
        winner: Option<Pubkey>,
    },
}

#[account]
#[derive(InitSpace, Default)]
pub struct Round {
    /// Pool this round belongs to
    pub pool: Pubkey,
    /// Sequential id, starting at 1
    pub id: u64,
    /// Unix timestamp the round opened at
    pub start_time: i64,
    /// Earliest unix timestamp the round can be closed at
    pub close_deadline: i64,
    pub phase: RoundPhase,
    /// Frozen from the pool at close
    pub entropy_mode: EntropyMode,
    /// Sum of the frozen entries' tickets
    pub ticket_snapshot_total: u64,
    /// Prize paid to the winner
    pub prize_amount: u64,
    /// Held back at close for whoever finalizes
    pub finalize_reward: u64,
    /// Committed Switchboard randomness account, if any
    pub beacon: Option<Pubkey>,
    /// Seed slot the committed randomness account was bound to
    pub beacon_seed_slot: u64,
    /// Slot the current commitment was made in
    pub beacon_commit_slot: u64,
    /// Seed the winner was drawn with
    pub seed: [u8; 32],
    /// Set once the winner has been paid
    pub prize_claimed: bool,
    /// Bump seed for the round PDA
    pub bump: u8,
    /// Frozen ticket record, empty until close
    #[max_len(MAX_PARTICIPANTS)]
    pub entries: Vec<TicketEntry>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub round_id: u64,
    pub phase: RoundPhase,
    pub close_deadline: i64,
    pub draw_slot: Option<u64>,
    pub ticket_snapshot_total: u64,
    pub participant_count: u32,
    pub prize_amount: u64,
    pub winner: Option<Pubkey>,
    pub prize_claimed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseOutcome {
    pub draw_slot: u64,
    pub close_incentive: u64,
    pub finalize_reward: u64,
    pub prize_amount: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinalizeOutcome {
    pub winner: Option<Pubkey>,
    pub seed: [u8; 32],
    pub finalize_reward: u64,
    /// Prize returned to the pool because nobody held a ticket
    pub carried_over: u64,
}

impl Round {
    /// Account size with room for `participants` frozen entries.
    pub fn space(participants: usize) -> usize {
        let unused = MAX_PARTICIPANTS.saturating_sub(participants);
        8 + Round::INIT_SPACE - unused * TicketEntry::INIT_SPACE
    }

    pub fn new_active(pool: Pubkey, id: u64, now: i64, lottery_interval: i64, bump: u8) -> Result<Self> {
        let close_deadline = now
            .checked_add(lottery_interval)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(Self {
            pool,
            id,
            start_time: now,
            close_deadline,
            bump,
            ..Default::default()
        })
    }

    pub fn draw_slot(&self) -> Option<u64> {
        match self.phase {
            RoundPhase::Active => None,
            RoundPhase::Closed { draw_slot } | RoundPhase::Finalized { draw_slot, .. } => {
                Some(draw_slot)
            }
        }
    }

    pub fn winner(&self) -> Option<Pubkey> {
        match self.phase {
            RoundPhase::Finalized { winner, .. } => winner,
            _ => None,
        }
    }

    pub fn time_remaining(&self, now: i64) -> i64 {
        match self.phase {
            RoundPhase::Active => self.close_deadline.saturating_sub(now).max(0),
            _ => 0,
        }
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            round_id: self.id,
            phase: self.phase,
            close_deadline: self.close_deadline,
            draw_slot: self.draw_slot(),
            ticket_snapshot_total: self.ticket_snapshot_total,
            participant_count: self.entries.len() as u32,
            prize_amount: self.prize_amount,
            winner: self.winner(),
            prize_claimed: self.prize_claimed,
        }
    }

    /// Freezes the ticket record and the prize, and schedules the draw slot.
    pub fn freeze(
        &mut self,
        pool: &mut Pool,
        ledger: &TicketLedger,
        now: i64,
        slot: u64,
    ) -> Result<CloseOutcome> {
        require!(self.phase == RoundPhase::Active, ErrorCode::RoundNotActive);
        require!(now >= self.close_deadline, ErrorCode::RoundNotEnded);

        let draw_slot = slot
            .checked_add(pool.draw_delay_slots)
            .ok_or(ErrorCode::MathOverflow)?;
        let close_incentive = incentive(pool.prize_pool, pool.incentive_bps)?;
        let finalize_reward = incentive(pool.prize_pool, pool.incentive_bps)?;
        let prize_amount = pool
            .prize_pool
            .checked_sub(close_incentive)
            .and_then(|rest| rest.checked_sub(finalize_reward))
            .ok_or(ErrorCode::MathOverflow)?;

        self.entries = ledger.participants.clone();
        self.ticket_snapshot_total = ledger.total_tickets;
        self.entropy_mode = pool.entropy_mode;
        self.prize_amount = prize_amount;
        self.finalize_reward = finalize_reward;
        self.phase = RoundPhase::Closed { draw_slot };
        pool.prize_pool = 0;

        Ok(CloseOutcome {
            draw_slot,
            close_incentive,
            finalize_reward,
            prize_amount,
        })
    }

    /// Records a Switchboard randomness account as this round's entropy.
    ///
    /// Beacon rounds take the authority's commitment at any time after
    /// close. Slot-hash rounds accept one from anyone once the draw slot
    /// has left the SlotHashes window, so an unfinalized round never gets
    /// stuck.
    ///
    /// A commitment that was never revealed can be replaced after
    /// `BEACON_TIMEOUT_SLOTS`. `previous` is the currently committed
    /// account and must be passed for a replacement. Once it has been
    /// revealed, or re-seeded, it can no longer be replaced.
    pub fn commit_beacon(
        &mut self,
        randomness: Pubkey,
        reading: &BeaconReading,
        previous: Option<(Pubkey, &BeaconReading)>,
        slot: u64,
        by_authority: bool,
    ) -> Result<()> {
        let draw_slot = match self.phase {
            RoundPhase::Closed { draw_slot } => draw_slot,
            _ => return err!(ErrorCode::RoundNotClosed),
        };

        let window_elapsed = slot >= draw_slot.saturating_add(SLOT_HASH_WINDOW);
        let allowed = (self.entropy_mode == EntropyMode::Beacon && by_authority) || window_elapsed;
        require!(allowed, ErrorCode::BeaconNotAllowed);

        require!(
            slot.checked_sub(1) == Some(reading.seed_slot) && !reading.is_revealed(),
            ErrorCode::RandomnessAlreadyRevealed
        );

        if let Some(committed) = self.beacon {
            let (previous_key, previous) = previous.ok_or(ErrorCode::IncorrectRandomnessAccount)?;
            require_keys_eq!(previous_key, committed, ErrorCode::IncorrectRandomnessAccount);
            require!(
                slot >= self.beacon_commit_slot.saturating_add(BEACON_TIMEOUT_SLOTS),
                ErrorCode::BeaconAlreadyCommitted
            );
            // A reveal past the recorded seed slot, or a newer seed, means
            // the bound value was published.
            require!(
                previous.seed_slot == self.beacon_seed_slot
                    && previous.reveal_slot <= self.beacon_seed_slot,
                ErrorCode::BeaconAlreadyRevealed
            );
        }

        self.beacon = Some(randomness);
        self.beacon_seed_slot = reading.seed_slot;
        self.beacon_commit_slot = slot;
        Ok(())
    }

    /// Entropy revealed for the committed randomness account.
    ///
    /// The reveal may have landed in any slot after the committed seed
    /// slot. An account that was re-seeded since the commitment is rejected.
    pub fn beacon_entropy(&self, randomness: Pubkey, reading: &BeaconReading) -> Result<BeaconEntropy> {
        require!(
            self.beacon == Some(randomness) && reading.seed_slot == self.beacon_seed_slot,
            ErrorCode::IncorrectRandomnessAccount
        );
        require!(reading.is_revealed(), ErrorCode::RandomnessNotResolved);
        Ok(BeaconEntropy::new(reading.value))
    }

    pub fn require_slot_hash_entropy(&self) -> Result<()> {
        require!(
            self.entropy_mode == EntropyMode::SlotHash,
            ErrorCode::WrongEntropySource
        );
        Ok(())
    }

    /// Draws the winner from `entropy` at the scheduled draw slot.
    ///
    /// A round with no tickets finalizes without a winner and hands its
    /// prize back to the pool for the next round. `pool.current_round_id`
    /// advances either way.
    pub fn finalize(
        &mut self,
        pool: &mut Pool,
        entropy: &impl EntropySource,
        slot: u64,
    ) -> Result<FinalizeOutcome> {
        let draw_slot = match self.phase {
            RoundPhase::Closed { draw_slot } => draw_slot,
            _ => return err!(ErrorCode::RoundNotClosed),
        };
        require!(slot >= draw_slot, ErrorCode::DrawBlockNotReached);

        let raw = entropy.entropy_at(draw_slot)?;
        let seed = derive_seed(&raw, self.id, draw_slot);

        let winner = if self.ticket_snapshot_total == 0 {
            None
        } else {
            Some(select_winner(&self.entries, self.ticket_snapshot_total, &seed)?)
        };

        let carried_over = if winner.is_none() { self.prize_amount } else { 0 };
        let prize_pool = pool
            .prize_pool
            .checked_add(carried_over)
            .ok_or(ErrorCode::MathOverflow)?;

        pool.prize_pool = prize_pool;
        pool.advance_round()?;
        self.seed = seed;
        self.phase = RoundPhase::Finalized { draw_slot, winner };

        Ok(FinalizeOutcome {
            winner,
            seed,
            finalize_reward: self.finalize_reward,
            carried_over,
        })
    }

    /// Marks the prize as paid to `claimant` and returns its amount.
    pub fn claim(&mut self, claimant: &Pubkey) -> Result<u64> {
        let winner = self.winner().ok_or(ErrorCode::NoWinnerSelected)?;
        require_keys_eq!(winner, *claimant, ErrorCode::NotWinner);
        require!(
            !self.prize_claimed && self.prize_amount > 0,
            ErrorCode::NoPrize
        );

        self.prize_claimed = true;
        Ok(self.prize_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entropy::{tests::slot_hashes, BeaconEntropy, SlotHashEntropy},
        state::{
            pool::tests::{test_pool, UNIT},
            Depositor,
        },
    };

    fn ledger_with(tickets: &[u64]) -> (TicketLedger, Vec<Pubkey>) {
        let mut ledger = TicketLedger::default();
        let owners = tickets
            .iter()
            .map(|t| {
                let mut d = Depositor::new(Pubkey::new_unique(), Pubkey::new_unique(), 0);
                ledger.deposit(&mut d, t * UNIT, UNIT).unwrap();
                d.owner
            })
            .collect();
        (ledger, owners)
    }

    fn active_round(pool: &Pool) -> Round {
        Round::new_active(Pubkey::new_unique(), pool.current_round_id, 0, pool.lottery_interval, 254).unwrap()
    }

    #[test]
    fn test_space_grows_per_entry() {
        assert_eq!(Round::space(MAX_PARTICIPANTS), 8 + Round::INIT_SPACE);
        assert_eq!(
            Round::space(3) - Round::space(0),
            3 * TicketEntry::INIT_SPACE
        );
    }

    #[test]
    fn test_close_before_deadline() {
        let mut pool = test_pool();
        let (ledger, _) = ledger_with(&[1]);
        let mut round = active_round(&pool);

        let err = round
            .freeze(&mut pool, &ledger, round.close_deadline - 1, 50)
            .unwrap_err();
        assert_eq!(err, ErrorCode::RoundNotEnded.into());
        assert_eq!(round.phase, RoundPhase::Active);
    }

    #[test]
    fn test_close_freezes_record_and_prize() {
        let mut pool = test_pool();
        pool.prize_pool = 1_000_000;
        let (ledger, owners) = ledger_with(&[7, 3]);
        let mut round = active_round(&pool);

        let outcome = round
            .freeze(&mut pool, &ledger, round.close_deadline, 50)
            .unwrap();

        assert_eq!(outcome.draw_slot, 50 + pool.draw_delay_slots);
        assert_eq!(outcome.close_incentive, 10_000);
        assert_eq!(outcome.finalize_reward, 10_000);
        assert_eq!(outcome.prize_amount, 980_000);
        assert_eq!(pool.prize_pool, 0);
        assert_eq!(round.ticket_snapshot_total, 10);
        assert_eq!(round.entries[0].owner, owners[0]);
        assert_eq!(round.time_remaining(0), 0);

        let err = round
            .freeze(&mut pool, &ledger, round.close_deadline, 60)
            .unwrap_err();
        assert_eq!(err, ErrorCode::RoundNotActive.into());
    }

    #[test]
    fn test_finalize_before_close() {
        let mut pool = test_pool();
        let mut round = active_round(&pool);
        let err = round
            .finalize(&mut pool, &BeaconEntropy::new([0; 32]), 100)
            .unwrap_err();
        assert_eq!(err, ErrorCode::RoundNotClosed.into());
    }

    #[test]
    fn test_finalize_waits_for_draw_slot() {
        let mut pool = test_pool();
        let (ledger, _) = ledger_with(&[1]);
        let mut round = active_round(&pool);
        let outcome = round.freeze(&mut pool, &ledger, round.close_deadline, 50).unwrap();

        let err = round
            .finalize(&mut pool, &BeaconEntropy::new([0; 32]), outcome.draw_slot - 1)
            .unwrap_err();
        assert_eq!(err, ErrorCode::DrawBlockNotReached.into());
        assert_eq!(pool.current_round_id, 1);
    }

    #[test]
    fn test_finalize_with_slot_hash() {
        let mut pool = test_pool();
        pool.prize_pool = 1_000_000;
        let (ledger, owners) = ledger_with(&[7, 3]);
        let mut round = active_round(&pool);
        let closed = round.freeze(&mut pool, &ledger, round.close_deadline, 50).unwrap();
        let draw_slot = closed.draw_slot;

        let data = slot_hashes(&[(draw_slot + 1, 2), (draw_slot, 1), (draw_slot - 1, 0)]);
        let outcome = round
            .finalize(&mut pool, &SlotHashEntropy::new(&data), draw_slot + 1)
            .unwrap();

        let winner = outcome.winner.unwrap();
        assert!(owners.contains(&winner));
        assert_eq!(outcome.seed, derive_seed(&[1; 32], round.id, draw_slot));
        assert_eq!(round.winner(), Some(winner));
        assert_eq!(outcome.finalize_reward, 10_000);
        assert_eq!(pool.current_round_id, 2);
        assert_eq!(pool.prize_pool, 0);
    }

    #[test]
    fn test_empty_round_carries_prize_over() {
        let mut pool = test_pool();
        pool.prize_pool = 1_000_000;
        let mut round = active_round(&pool);
        round
            .freeze(&mut pool, &TicketLedger::default(), round.close_deadline, 50)
            .unwrap();

        let outcome = round
            .finalize(&mut pool, &BeaconEntropy::new([3; 32]), 100)
            .unwrap();

        assert_eq!(outcome.winner, None);
        assert_eq!(outcome.carried_over, 980_000);
        assert_eq!(pool.prize_pool, 980_000);
        assert_eq!(pool.current_round_id, 2);

        let err = round.claim(&Pubkey::new_unique()).unwrap_err();
        assert_eq!(err, ErrorCode::NoWinnerSelected.into());
    }

    #[test]
    fn test_claim_once_by_winner() {
        let mut pool = test_pool();
        pool.prize_pool = 1_000_000;
        let (ledger, _) = ledger_with(&[4]);
        let mut round = active_round(&pool);
        round.freeze(&mut pool, &ledger, round.close_deadline, 50).unwrap();
        let winner = round
            .finalize(&mut pool, &BeaconEntropy::new([8; 32]), 100)
            .unwrap()
            .winner
            .unwrap();

        let err = round.claim(&Pubkey::new_unique()).unwrap_err();
        assert_eq!(err, ErrorCode::NotWinner.into());

        assert_eq!(round.claim(&winner).unwrap(), 980_000);
        let err = round.claim(&winner).unwrap_err();
        assert_eq!(err, ErrorCode::NoPrize.into());
    }

    fn unrevealed(seed_slot: u64) -> BeaconReading {
        BeaconReading {
            seed_slot,
            ..Default::default()
        }
    }

    fn revealed(seed_slot: u64, reveal_slot: u64, value: u8) -> BeaconReading {
        BeaconReading {
            seed_slot,
            reveal_slot,
            value: [value; 32],
        }
    }

    /// Slot-hash round with one ticket, closed at slot 50 and past its
    /// SlotHashes window. Returns the first slot a beacon is accepted in.
    fn lapsed_round(pool: &mut Pool) -> (Round, u64) {
        let (ledger, _) = ledger_with(&[1]);
        let mut round = active_round(pool);
        let draw_slot = round
            .freeze(pool, &ledger, round.close_deadline, 50)
            .unwrap()
            .draw_slot;
        (round, draw_slot + SLOT_HASH_WINDOW)
    }

    #[test]
    fn test_beacon_commit_rules() {
        let mut pool = test_pool();
        let (ledger, _) = ledger_with(&[1]);
        let mut round = active_round(&pool);
        let randomness = Pubkey::new_unique();

        let err = round
            .commit_beacon(randomness, &unrevealed(9), None, 10, true)
            .unwrap_err();
        assert_eq!(err, ErrorCode::RoundNotClosed.into());

        let draw_slot = round
            .freeze(&mut pool, &ledger, round.close_deadline, 50)
            .unwrap()
            .draw_slot;

        // slot-hash round, window still open
        let err = round
            .commit_beacon(randomness, &unrevealed(69), None, 70, true)
            .unwrap_err();
        assert_eq!(err, ErrorCode::BeaconNotAllowed.into());

        let late = draw_slot + SLOT_HASH_WINDOW;
        let err = round
            .commit_beacon(randomness, &unrevealed(late - 5), None, late, false)
            .unwrap_err();
        assert_eq!(err, ErrorCode::RandomnessAlreadyRevealed.into());

        // Seeded last slot but already revealed in this one
        let err = round
            .commit_beacon(randomness, &revealed(late - 1, late, 4), None, late, false)
            .unwrap_err();
        assert_eq!(err, ErrorCode::RandomnessAlreadyRevealed.into());

        round
            .commit_beacon(randomness, &unrevealed(late - 1), None, late, false)
            .unwrap();
        assert_eq!(round.beacon, Some(randomness));
        assert_eq!(round.beacon_seed_slot, late - 1);

        let replacement = Pubkey::new_unique();
        let stalled = unrevealed(late - 1);
        let err = round
            .commit_beacon(replacement, &unrevealed(late), Some((randomness, &stalled)), late + 1, false)
            .unwrap_err();
        assert_eq!(err, ErrorCode::BeaconAlreadyCommitted.into());

        let retry = late + BEACON_TIMEOUT_SLOTS;
        round
            .commit_beacon(replacement, &unrevealed(retry - 1), Some((randomness, &stalled)), retry, false)
            .unwrap();
        assert_eq!(round.beacon, Some(replacement));
        assert_eq!(round.beacon_seed_slot, retry - 1);
    }

    #[test]
    fn test_replacement_needs_committed_account() {
        let mut pool = test_pool();
        let (mut round, late) = lapsed_round(&mut pool);
        let randomness = Pubkey::new_unique();
        round
            .commit_beacon(randomness, &unrevealed(late - 1), None, late, false)
            .unwrap();

        let retry = late + BEACON_TIMEOUT_SLOTS;
        let fresh = unrevealed(retry - 1);
        let err = round
            .commit_beacon(Pubkey::new_unique(), &fresh, None, retry, false)
            .unwrap_err();
        assert_eq!(err, ErrorCode::IncorrectRandomnessAccount.into());

        let other = unrevealed(late - 1);
        let err = round
            .commit_beacon(Pubkey::new_unique(), &fresh, Some((Pubkey::new_unique(), &other)), retry, false)
            .unwrap_err();
        assert_eq!(err, ErrorCode::IncorrectRandomnessAccount.into());
        assert_eq!(round.beacon, Some(randomness));
    }

    #[test]
    fn test_revealed_beacon_cannot_be_replaced() {
        let mut pool = test_pool();
        let (mut round, late) = lapsed_round(&mut pool);
        let committed = Pubkey::new_unique();
        round
            .commit_beacon(committed, &unrevealed(late - 1), None, late, false)
            .unwrap();
        let published = revealed(late - 1, late + 2, 7);
        let entropy = round.beacon_entropy(committed, &published).unwrap();
        let expected = round
            .clone()
            .finalize(&mut pool.clone(), &entropy, late + 3)
            .unwrap()
            .winner;

        // Fresh accounts offered every timeout never displace a revealed value
        let mut replaced = 0;
        let mut slot = late;
        for _ in 0..5 {
            slot += BEACON_TIMEOUT_SLOTS;
            let attempt = round.commit_beacon(
                Pubkey::new_unique(),
                &unrevealed(slot - 1),
                Some((committed, &published)),
                slot,
                false,
            );
            if attempt.is_ok() {
                replaced += 1;
            } else {
                assert_eq!(attempt.unwrap_err(), ErrorCode::BeaconAlreadyRevealed.into());
            }

            let entropy = round.beacon_entropy(committed, &published).unwrap();
            let outcome = round.clone().finalize(&mut pool.clone(), &entropy, slot).unwrap();
            assert_eq!(outcome.winner, expected);
        }
        assert_eq!(replaced, 0);
        assert_eq!(round.beacon, Some(committed));

        // Re-seeding the committed account does not free the round either
        let reseeded = unrevealed(slot + 10);
        let err = round
            .commit_beacon(Pubkey::new_unique(), &unrevealed(slot + 20), Some((committed, &reseeded)), slot + 21, false)
            .unwrap_err();
        assert_eq!(err, ErrorCode::BeaconAlreadyRevealed.into());
    }

    #[test]
    fn test_beacon_entropy_checks_commitment() {
        let mut pool = test_pool();
        let (mut round, late) = lapsed_round(&mut pool);
        let committed = Pubkey::new_unique();

        let err = round
            .beacon_entropy(committed, &revealed(late - 1, late + 1, 3))
            .unwrap_err();
        assert_eq!(err, ErrorCode::IncorrectRandomnessAccount.into());

        round
            .commit_beacon(committed, &unrevealed(late - 1), None, late, false)
            .unwrap();

        let err = round
            .beacon_entropy(Pubkey::new_unique(), &revealed(late - 1, late + 1, 3))
            .unwrap_err();
        assert_eq!(err, ErrorCode::IncorrectRandomnessAccount.into());

        // Re-seeded after the commitment
        let err = round
            .beacon_entropy(committed, &revealed(late + 40, late + 41, 3))
            .unwrap_err();
        assert_eq!(err, ErrorCode::IncorrectRandomnessAccount.into());

        let err = round
            .beacon_entropy(committed, &unrevealed(late - 1))
            .unwrap_err();
        assert_eq!(err, ErrorCode::RandomnessNotResolved.into());

        // Stale value from an earlier use of the same account
        let err = round
            .beacon_entropy(committed, &revealed(late - 1, late - 30, 3))
            .unwrap_err();
        assert_eq!(err, ErrorCode::RandomnessNotResolved.into());
    }

    #[test]
    fn test_beacon_reveal_accepted_in_later_slot() {
        let mut pool = test_pool();
        let (mut round, late) = lapsed_round(&mut pool);
        let committed = Pubkey::new_unique();
        round
            .commit_beacon(committed, &unrevealed(late - 1), None, late, false)
            .unwrap();

        let entropy = round
            .beacon_entropy(committed, &revealed(late - 1, late + 1, 9))
            .unwrap();
        let outcome = round.finalize(&mut pool, &entropy, late + 900).unwrap();

        let draw_slot = round.draw_slot().unwrap();
        assert_eq!(outcome.seed, derive_seed(&[9; 32], round.id, draw_slot));
        assert!(outcome.winner.is_some());
    }

    #[test]
    fn test_entropy_mode_guard() {
        let mut pool = test_pool();
        let round = active_round(&pool);
        round.require_slot_hash_entropy().unwrap();

        pool.entropy_mode = EntropyMode::Beacon;
        let (ledger, _) = ledger_with(&[1]);
        let mut round = active_round(&pool);
        round.freeze(&mut pool, &ledger, round.close_deadline, 50).unwrap();

        let err = round.require_slot_hash_entropy().unwrap_err();
        assert_eq!(err, ErrorCode::WrongEntropySource.into());
    }

    #[test]
    fn test_beacon_round_needs_authority() {
        let mut pool = test_pool();
        pool.entropy_mode = EntropyMode::Beacon;
        let (ledger, _) = ledger_with(&[1]);
        let mut round = active_round(&pool);
        round.freeze(&mut pool, &ledger, round.close_deadline, 50).unwrap();
        assert_eq!(round.entropy_mode, EntropyMode::Beacon);

        let err = round
            .commit_beacon(Pubkey::new_unique(), &unrevealed(60), None, 61, false)
            .unwrap_err();
        assert_eq!(err, ErrorCode::BeaconNotAllowed.into());

        round
            .commit_beacon(Pubkey::new_unique(), &unrevealed(60), None, 61, true)
            .unwrap();
    }

    #[test]
    fn test_summary_reports_phase() {
        let pool = test_pool();
        let round = active_round(&pool);
        let summary = round.summary();
        assert_eq!(summary.round_id, 1);
        assert_eq!(summary.phase, RoundPhase::Active);
        assert_eq!(summary.draw_slot, None);
        assert_eq!(round.time_remaining(100), pool.lottery_interval - 100);
    }
}
