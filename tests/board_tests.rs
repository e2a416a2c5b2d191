//! Board generation tests.
//!
//! Every dealt board must hold each symbol exactly twice, whatever the seed,
//! and start with nothing revealed.

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use memorama::core::{
    deal_pairs, Alphabet, Board, GameRng, Position, Symbol, VisibilityMask, CELL_COUNT, PAIR_COUNT,
};

fn counts(symbols: &[Symbol]) -> FxHashMap<Symbol, usize> {
    let mut counts = FxHashMap::default();
    for &s in symbols {
        *counts.entry(s).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_default_board_shape() {
    let board = Board::generate(&Alphabet::default(), &mut GameRng::new(1));

    assert_eq!(board.symbols().len(), CELL_COUNT);
    let counts = counts(board.symbols());
    assert_eq!(counts.len(), PAIR_COUNT);
    assert!(counts.values().all(|&n| n == 2));
}

#[test]
fn test_fresh_mask_is_hidden() {
    let mask = VisibilityMask::all_hidden();
    assert_eq!(mask.revealed_count(), 0);
    assert!(Position::all().all(|p| mask.is_hidden(p)));
}

#[test]
fn test_custom_alphabet_board() {
    let alphabet = Alphabet::new("0123456789abcdefgh").unwrap();
    let board = Board::generate(&alphabet, &mut GameRng::new(77));

    for symbol in alphabet.symbols() {
        let pair = board.pair_of(*symbol).expect("every symbol is dealt");
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn test_different_seeds_usually_differ() {
    let alphabet = Alphabet::default();
    let boards: Vec<Board> = (0..5)
        .map(|seed| Board::generate(&alphabet, &mut GameRng::new(seed)))
        .collect();

    for (i, a) in boards.iter().enumerate() {
        for b in &boards[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

proptest! {
    #[test]
    fn prop_every_symbol_twice(seed in any::<u64>()) {
        let board = Board::generate(&Alphabet::default(), &mut GameRng::new(seed));
        let counts = counts(board.symbols());

        prop_assert_eq!(board.symbols().len(), CELL_COUNT);
        prop_assert_eq!(counts.len(), PAIR_COUNT);
        prop_assert!(counts.values().all(|&n| n == 2));
        prop_assert!(Board::from_symbols(board.symbols()).is_ok());
    }

    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>()) {
        let deck = deal_pairs(&Alphabet::default());
        let mut shuffled = deck.clone();
        GameRng::new(seed).shuffle(&mut shuffled);

        let mut before = deck;
        before.sort();
        shuffled.sort();
        prop_assert_eq!(before, shuffled);
    }

    #[test]
    fn prop_generation_is_reproducible(seed in any::<u64>()) {
        let alphabet = Alphabet::default();
        let a = Board::generate(&alphabet, &mut GameRng::new(seed));
        let b = Board::generate(&alphabet, &mut GameRng::new(seed));
        prop_assert_eq!(a, b);
    }
}
