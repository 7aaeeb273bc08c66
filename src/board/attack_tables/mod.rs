//! Attack tables for move generation and check detection.
//!
//! Leaper pieces (knight, king, pawn) use one mask per square. Sliding pieces use
//! magic bitboards: for each square the occupancy along the piece's lines, minus
//! the board edge, is multiplied by a per-square magic number and the top bits of
//! the product index a precomputed attack set.
//!
//! Every table is built on first use and never changes afterwards.

mod magics;
mod tables;

use log::debug;
use once_cell::sync::Lazy;

use super::types::{Bitboard, Color, Square};
use magics::{BISHOP_MAGICS, ROOK_MAGICS};
use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

const ROOK_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The two families of sliding movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slider {
    /// Ranks and files (rook, queen)
    Rook,
    /// Diagonals (bishop, queen)
    Bishop,
}

impl Slider {
    /// Squares attacked from `square` under `occupancy`, up to and including the
    /// first blocker in each direction.
    #[inline]
    #[must_use]
    pub fn attacks(self, occupancy: Bitboard, square: Square) -> Bitboard {
        let table = match self {
            Slider::Rook => &*ROOK_TABLE,
            Slider::Bishop => &*BISHOP_TABLE,
        };
        table.attacks(occupancy, square)
    }

    fn dirs(self) -> &'static [(isize, isize); 4] {
        match self {
            Slider::Rook => &ROOK_DIRS,
            Slider::Bishop => &BISHOP_DIRS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Magic {
    mask: u64,
    magic: u64,
    shift: u32,
    offset: usize,
}

impl Magic {
    #[inline]
    fn index(&self, occupancy: u64) -> usize {
        self.offset + ((occupancy & self.mask).wrapping_mul(self.magic) >> self.shift) as usize
    }
}

/// One slider family's magic entries plus the shared attack array they index into.
struct SlidingTable {
    magics: [Magic; 64],
    attacks: Vec<Bitboard>,
}

impl SlidingTable {
    fn build(slider: Slider, magic_numbers: &[u64; 64]) -> Self {
        let dirs = slider.dirs();
        let mut magics = [Magic::default(); 64];
        let mut attacks = Vec::new();

        for (sq, entry) in magics.iter_mut().enumerate() {
            let mask = relevant_mask(sq, dirs);
            let bits = mask.count_ones();
            *entry = Magic {
                mask,
                magic: magic_numbers[sq],
                shift: 64 - bits,
                offset: attacks.len(),
            };
            attacks.resize(attacks.len() + (1usize << bits), Bitboard::EMPTY);

            // Carry-rippler walk over every subset of the mask, starting from the empty set.
            let mut subset = 0u64;
            loop {
                let idx = entry.index(subset);
                let computed = Bitboard(ray_attacks(sq, subset, dirs));
                debug_assert!(
                    attacks[idx].is_empty() || attacks[idx] == computed,
                    "magic collision on square {sq} for {slider:?}"
                );
                attacks[idx] = computed;
                subset = subset.wrapping_sub(mask) & mask;
                if subset == 0 {
                    break;
                }
            }
        }

        debug!("{slider:?} attack table built with {} entries", attacks.len());
        SlidingTable { magics, attacks }
    }

    #[inline]
    fn attacks(&self, occupancy: Bitboard, square: Square) -> Bitboard {
        self.attacks[self.magics[square.index()].index(occupancy.0)]
    }
}

static ROOK_TABLE: Lazy<SlidingTable> = Lazy::new(|| SlidingTable::build(Slider::Rook, &ROOK_MAGICS));
static BISHOP_TABLE: Lazy<SlidingTable> =
    Lazy::new(|| SlidingTable::build(Slider::Bishop, &BISHOP_MAGICS));

/// Line squares from `sq` whose occupancy can change the attack set: every ray
/// square except the last one before the edge.
fn relevant_mask(sq: usize, dirs: &[(isize, isize); 4]) -> u64 {
    let r = (sq / 8) as isize;
    let f = (sq % 8) as isize;
    let mut mask = 0u64;
    for &(dr, df) in dirs {
        let (mut nr, mut nf) = (r + dr, f + df);
        while (0..8).contains(&(nr + dr)) && (0..8).contains(&(nf + df)) {
            mask |= 1u64 << (nr * 8 + nf);
            nr += dr;
            nf += df;
        }
    }
    mask
}

/// Slow reference attacks: walk each ray until the board edge or the first blocker.
fn ray_attacks(sq: usize, occupancy: u64, dirs: &[(isize, isize); 4]) -> u64 {
    let r = (sq / 8) as isize;
    let f = (sq % 8) as isize;
    let mut attacks = 0u64;
    for &(dr, df) in dirs {
        let (mut nr, mut nf) = (r + dr, f + df);
        while (0..8).contains(&nr) && (0..8).contains(&nf) {
            let bit = 1u64 << (nr * 8 + nf);
            attacks |= bit;
            if occupancy & bit != 0 {
                break;
            }
            nr += dr;
            nf += df;
        }
    }
    attacks
}

#[inline]
pub(crate) fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    ROOK_TABLE.attacks(occupancy, square)
}

#[inline]
pub(crate) fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    BISHOP_TABLE.attacks(occupancy, square)
}

#[inline]
pub(crate) fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square.index()]
}

#[inline]
pub(crate) fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square.index()]
}

/// Squares a `color` pawn on `square` captures on.
#[inline]
pub(crate) fn pawn_attacks(color: Color, square: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][square.index()]
}

/// Build every attack table, and the Zobrist keys, now instead of on first lookup.
pub fn init() {
    Lazy::force(&crate::zobrist::ZOBRIST);
    Lazy::force(&KNIGHT_ATTACKS);
    Lazy::force(&KING_ATTACKS);
    Lazy::force(&PAWN_ATTACKS);
    Lazy::force(&ROOK_TABLE);
    Lazy::force(&BISHOP_TABLE);
}
