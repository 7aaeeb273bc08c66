//! Precomputed attack tables for leaper pieces (knights, kings, pawns).

use once_cell::sync::Lazy;

use crate::board::types::Bitboard;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn leaper_mask(sq: usize, deltas: &[(isize, isize)]) -> Bitboard {
    let r = (sq / 8) as isize;
    let f = (sq % 8) as isize;
    let mut mask = 0u64;
    for &(dr, df) in deltas {
        let nr = r + dr;
        let nf = f + df;
        if (0..8).contains(&nr) && (0..8).contains(&nf) {
            mask |= 1u64 << (nr * 8 + nf);
        }
    }
    Bitboard(mask)
}

pub(super) static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    let mut attacks = [Bitboard::EMPTY; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        *slot = leaper_mask(sq, &KNIGHT_DELTAS);
    }
    attacks
});

pub(super) static KING_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    let mut attacks = [Bitboard::EMPTY; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        *slot = leaper_mask(sq, &KING_DELTAS);
    }
    attacks
});

/// Indexed by color then square; diagonal-forward captures only.
pub(super) static PAWN_ATTACKS: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    let mut attacks = [[Bitboard::EMPTY; 64]; 2];
    for sq in 0..64 {
        attacks[0][sq] = leaper_mask(sq, &[(1, -1), (1, 1)]);
        attacks[1][sq] = leaper_mask(sq, &[(-1, -1), (-1, 1)]);
    }
    attacks
});
