use super::strategist::Strategist;
use rbj_cards::Tally;

/// The move a strategy chart prefers, before legality is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Play {
    H,
    S,
    D,
}

use Play::D;
use Play::H;
use Play::S;

/// Soft totals 12..=21 against dealer upcards 2..=11.
#[rustfmt::skip]
const SOFT: [[Play; 10]; 10] = [
    // 2  3  4  5  6  7  8  9  T  A
    [H, H, H, H, H, H, H, H, H, H], // 12
    [H, H, H, H, D, H, H, H, H, H], // 13
    [H, H, H, D, D, H, H, H, H, H], // 14
    [H, H, H, D, D, H, H, H, H, H], // 15
    [H, H, D, D, D, H, H, H, H, H], // 16
    [H, D, D, D, D, H, H, H, H, H], // 17
    [S, D, D, D, D, S, S, H, H, H], // 18
    [S, S, S, S, S, S, S, S, S, S], // 19
    [S, S, S, S, S, S, S, S, S, S], // 20
    [S, S, S, S, S, S, S, S, S, S], // 21
];

/// Hard totals 3..=21 against dealer upcards 2..=11.
#[rustfmt::skip]
const HARD: [[Play; 10]; 19] = [
    // 2  3  4  5  6  7  8  9  T  A
    [H, H, H, H, H, H, H, H, H, H], // 3
    [H, H, H, H, H, H, H, H, H, H], // 4
    [H, H, H, H, H, H, H, H, H, H], // 5
    [H, H, H, H, H, H, H, H, H, H], // 6
    [H, H, H, H, H, H, H, H, H, H], // 7
    [H, H, H, H, H, H, H, H, H, H], // 8
    [H, D, D, D, D, H, H, H, H, H], // 9
    [D, D, D, D, D, D, D, D, H, H], // 10
    [D, D, D, D, D, D, D, D, D, H], // 11
    [H, H, S, S, S, H, H, H, H, H], // 12
    [S, S, S, S, S, H, H, H, H, H], // 13
    [S, S, S, S, S, H, H, H, H, H], // 14
    [S, S, S, S, S, H, H, H, H, H], // 15
    [S, S, S, S, S, H, H, H, S, H], // 16
    [S, S, S, S, S, S, S, S, S, S], // 17
    [S, S, S, S, S, S, S, S, S, S], // 18
    [S, S, S, S, S, S, S, S, S, S], // 19
    [S, S, S, S, S, S, S, S, S, S], // 20
    [S, S, S, S, S, S, S, S, S, S], // 21
];

/// Pair pivots A, 2, 3, ..., 10 against dealer upcards 2..=11.
#[rustfmt::skip]
const PAIRS: [[bool; 10]; 10] = [
    //  2      3      4      5      6      7      8      9      T      A
    [true , true , true , true , true , true , true , true , true , true ], // A,A
    [true , true , true , true , true , true , false, false, false, false], // 2,2
    [true , true , true , true , true , true , false, false, false, false], // 3,3
    [false, false, false, true , true , false, false, false, false, false], // 4,4
    [false, false, false, false, false, false, false, false, false, false], // 5,5
    [true , true , true , true , true , false, false, false, false, false], // 6,6
    [true , true , true , true , true , true , false, false, false, false], // 7,7
    [true , true , true , true , true , true , true , true , true , true ], // 8,8
    [true , true , true , true , true , false, true , true , false, false], // 9,9
    [false, false, false, false, false, false, false, false, false, false], // T,T
];

/// Plays fixed basic strategy from lookup charts, ignoring the count.
#[derive(Debug, Default)]
pub struct Basic;

impl Basic {
    /// The chart's preferred move for the focused hand.
    fn preferred(total: u8, aces: u8, dealer: u8) -> Play {
        let dealer = usize::from(dealer) - 2;
        if aces == 1 {
            SOFT[usize::from(total) - 12][dealer]
        } else {
            HARD[usize::from(total) - 3][dealer]
        }
    }
}

impl Strategist for Basic {
    fn split(&mut self, total: u8, aces: u8, dealer: u8, _: &Tally) -> bool {
        let dealer = usize::from(dealer) - 2;
        if aces == 1 {
            PAIRS[0][dealer]
        } else {
            PAIRS[usize::from(total / 2) - 1][dealer]
        }
    }
    fn double(&mut self, total: u8, aces: u8, dealer: u8, _: &Tally) -> bool {
        Self::preferred(total, aces, dealer) == D
    }
    fn hit(&mut self, total: u8, aces: u8, dealer: u8, _: &Tally) -> bool {
        Self::preferred(total, aces, dealer) != S
    }
}
