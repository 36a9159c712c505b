use anchor_lang::prelude::*;
use solana_program::keccak;

use crate::{error::ErrorCode, state::TicketEntry};

/// Binds raw entropy to one round so the same slot hash never decides two draws.
pub fn derive_seed(entropy: &[u8; 32], round_id: u64, draw_slot: u64) -> [u8; 32] {
    keccak::hashv(&[
        entropy.as_ref(),
        &round_id.to_le_bytes(),
        &draw_slot.to_le_bytes(),
    ])
    .to_bytes()
}

/// Ticket index in `[0, total_tickets)` picked by `seed`.
///
/// The low 16 bytes are read as a little-endian u128, which keeps the modulo
/// bias below 2^-64 for any realistic ticket count.
pub fn draw_target(seed: &[u8; 32], total_tickets: u64) -> Result<u64> {
    require!(total_tickets > 0, ErrorCode::NoTickets);

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&seed[..16]);
    let point = u128::from_le_bytes(bytes) % total_tickets as u128;

    Ok(point as u64)
}

/// Owner of ticket number `target` when tickets are laid out in entry order.
pub fn owner_of_ticket(entries: &[TicketEntry], target: u64) -> Option<Pubkey> {
    let mut cumulative: u64 = 0;
    for entry in entries {
        cumulative = cumulative.saturating_add(entry.tickets);
        if target < cumulative {
            return Some(entry.owner);
        }
    }
    None
}

/// Picks the winner of a frozen ticket record, each ticket weighing the same.
pub fn select_winner(entries: &[TicketEntry], total_tickets: u64, seed: &[u8; 32]) -> Result<Pubkey> {
    let target = draw_target(seed, total_tickets)?;
    owner_of_ticket(entries, target).ok_or_else(|| error!(ErrorCode::NoWinnerSelected))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_from(value: u64) -> [u8; 32] {
        let mut seed = [0u8; 32];
        seed[..8].copy_from_slice(&value.to_le_bytes());
        seed
    }

    fn entry(tickets: u64) -> TicketEntry {
        TicketEntry {
            owner: Pubkey::new_unique(),
            tickets,
        }
    }

    #[test]
    fn test_draw_target_reduces_modulo_total() {
        assert_eq!(draw_target(&seed_from(23), 10).unwrap(), 3);
        assert_eq!(draw_target(&seed_from(9), 10).unwrap(), 9);
        assert_eq!(draw_target(&seed_from(0), 1).unwrap(), 0);
    }

    #[test]
    fn test_draw_target_ignores_high_bytes() {
        let mut seed = seed_from(23);
        seed[16..].fill(0xff);
        assert_eq!(draw_target(&seed, 10).unwrap(), 3);
    }

    #[test]
    fn test_empty_record_has_no_winner() {
        let err = select_winner(&[], 0, &seed_from(1)).unwrap_err();
        assert_eq!(err, ErrorCode::NoTickets.into());
    }

    #[test]
    fn test_cumulative_ranges() {
        // A holds tickets 0..7, B holds 7..10
        let a = entry(7);
        let b = entry(3);
        let entries = [a, b];

        assert_eq!(select_winner(&entries, 10, &seed_from(23)).unwrap(), a.owner);
        assert_eq!(select_winner(&entries, 10, &seed_from(6)).unwrap(), a.owner);
        assert_eq!(select_winner(&entries, 10, &seed_from(7)).unwrap(), b.owner);
        assert_eq!(select_winner(&entries, 10, &seed_from(19)).unwrap(), b.owner);
    }

    #[test]
    fn test_total_larger_than_record_is_rejected() {
        let entries = [entry(2)];
        let err = select_winner(&entries, 10, &seed_from(5)).unwrap_err();
        assert_eq!(err, ErrorCode::NoWinnerSelected.into());
    }

    #[test]
    fn test_seed_depends_on_round_and_slot() {
        let entropy = [7u8; 32];
        let base = derive_seed(&entropy, 1, 100);
        assert_eq!(base, derive_seed(&entropy, 1, 100));
        assert_ne!(base, derive_seed(&entropy, 2, 100));
        assert_ne!(base, derive_seed(&entropy, 1, 101));
    }

    #[test]
    fn test_win_frequency_tracks_ticket_share() {
        let a = entry(1);
        let b = entry(3);
        let c = entry(6);
        let entries = [a, b, c];
        let draws = 20_000u64;

        let mut wins = [0u64; 3];
        for i in 0..draws {
            let seed = derive_seed(&[0x5a; 32], i, i * 3);
            let winner = select_winner(&entries, 10, &seed).unwrap();
            let idx = entries.iter().position(|e| e.owner == winner).unwrap();
            wins[idx] += 1;
        }

        for (entry, won) in entries.iter().zip(wins) {
            let expected = draws * entry.tickets / 10;
            let tolerance = draws / 50;
            assert!(
                won.abs_diff(expected) < tolerance,
                "{} wins for {} tickets, expected about {}",
                won,
                entry.tickets,
                expected
            );
        }
    }
}
