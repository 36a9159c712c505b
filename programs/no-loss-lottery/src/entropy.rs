use std::cell::Ref;

use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::{constants::SLOT_HASH_WINDOW, error::ErrorCode};

/// Source of the raw 32 bytes a round's draw is derived from.
pub trait EntropySource {
    fn entropy_at(&self, slot: u64) -> Result<[u8; 32]>;
}

const SLOT_HASH_ENTRY_LEN: usize = 8 + 32;

/// Reads the SlotHashes sysvar: a u64 entry count followed by
/// `(slot, hash)` pairs, newest slot first.
pub struct SlotHashEntropy<'a> {
    data: &'a [u8],
}

impl<'a> SlotHashEntropy<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn entry(&self, index: usize) -> Result<(u64, [u8; 32])> {
        let start = 8 + index * SLOT_HASH_ENTRY_LEN;
        let raw = self
            .data
            .get(start..start + SLOT_HASH_ENTRY_LEN)
            .ok_or(ErrorCode::InvalidSlotHashes)?;

        let mut slot = [0u8; 8];
        slot.copy_from_slice(&raw[..8]);
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&raw[8..]);
        Ok((u64::from_le_bytes(slot), hash))
    }
}

impl EntropySource for SlotHashEntropy<'_> {
    /// Hash of the first produced slot at or after `slot`. Skipped slots have
    /// no entry, so the next produced one stands in for them.
    fn entropy_at(&self, slot: u64) -> Result<[u8; 32]> {
        let count_bytes = self.data.get(..8).ok_or(ErrorCode::InvalidSlotHashes)?;
        let mut count = [0u8; 8];
        count.copy_from_slice(count_bytes);
        let count = u64::from_le_bytes(count).min(SLOT_HASH_WINDOW) as usize;

        let mut candidate = None;
        let mut covered = false;
        for index in 0..count {
            let (entry_slot, hash) = self.entry(index)?;
            if entry_slot < slot {
                covered = true;
                break;
            }
            candidate = Some(hash);
            if entry_slot == slot {
                covered = true;
                break;
            }
        }

        match (candidate, covered) {
            (Some(hash), true) => Ok(hash),
            // Every recorded slot is older than the draw slot
            (None, true) => err!(ErrorCode::DrawBlockNotReached),
            // The draw slot already fell out of the window
            _ => err!(ErrorCode::BlockhashNotAvailable),
        }
    }
}

/// Revealed Switchboard randomness. The value was committed before it
/// could be known, so it does not depend on the slot asked for.
#[derive(Debug)]
pub struct BeaconEntropy {
    value: [u8; 32],
}

impl BeaconEntropy {
    pub fn new(value: [u8; 32]) -> Self {
        Self { value }
    }
}

impl EntropySource for BeaconEntropy {
    fn entropy_at(&self, _slot: u64) -> Result<[u8; 32]> {
        Ok(self.value)
    }
}

/// State of a Switchboard randomness account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BeaconReading {
    /// Slot whose hash seeded the pending randomness
    pub seed_slot: u64,
    /// Slot of the last reveal
    pub reveal_slot: u64,
    /// Value published by the last reveal
    pub value: [u8; 32],
}

impl BeaconReading {
    pub fn parse(data: Ref<&mut [u8]>) -> Result<Self> {
        require!(
            data.len() >= RandomnessAccountData::size(),
            ErrorCode::IncorrectRandomnessAccount
        );
        let randomness_data = RandomnessAccountData::parse(data)
            .map_err(|_| ErrorCode::IncorrectRandomnessAccount)?;

        Ok(Self {
            seed_slot: randomness_data.seed_slot,
            reveal_slot: randomness_data.reveal_slot,
            value: randomness_data.value,
        })
    }

    /// Whether `value` belongs to the current seed.
    pub fn is_revealed(&self) -> bool {
        self.reveal_slot > self.seed_slot
    }
}
