//! Property-based tests for the deck and the game controller.
//!
//! These drive the controller headless with a recording renderer and
//! random click/time sequences, checking invariants after every step.

use std::collections::HashMap;
use std::time::Duration;

use matching_game::application::{GameConfig, GameController, SelectOutcome};
use matching_game::domain::{format_elapsed, Deck, Symbol, DECK_SIZE, PAIR_COUNT};
use matching_game::rendering::{RecordingRenderer, RenderCommand};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Clone, Debug)]
enum Step {
    Click(usize),
    Wait(u64),
}

prop_compose! {
    fn arbitrary_step()(kind in 0..4u8, index in 0..DECK_SIZE + 2, ms in 0..2500u64) -> Step {
        if kind == 0 { Step::Wait(ms) } else { Step::Click(index) }
    }
}

fn new_controller(seed: u64) -> GameController<RecordingRenderer> {
    GameController::new(GameConfig::new(), seed, RecordingRenderer::new())
}

proptest! {
    #[test]
    fn shuffle_preserves_pairs(seed in any::<u64>()) {
        let deck = Deck::shuffled(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(deck.len(), DECK_SIZE);

        let mut counts: HashMap<Symbol, usize> = HashMap::new();
        for card in deck.cards() {
            *counts.entry(card.symbol).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), PAIR_COUNT);
        prop_assert!(counts.values().all(|&n| n == 2));
        prop_assert!(deck.cards().iter().all(|card| card.is_hidden()));
    }

    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        steps in prop::collection::vec(arbitrary_step(), 0..200),
    ) {
        let mut c = new_controller(seed);
        let mut last_pairs = 0;

        for step in steps {
            match step {
                Step::Click(index) => {
                    let before = c.state().clone();
                    if let SelectOutcome::Ignored(_) = c.select_card(index) {
                        prop_assert_eq!(c.state(), &before);
                    }
                }
                Step::Wait(ms) => c.advance(Duration::from_millis(ms)),
            }

            let state = c.state();
            prop_assert!(state.matched_pair_count >= last_pairs);
            prop_assert!(state.matched_pair_count <= PAIR_COUNT);
            prop_assert_eq!(c.deck().matched_count(), state.matched_pair_count * 2);
            prop_assert!((1..=3).contains(&state.star_rating.stars()));
            if state.is_resolving_mismatch {
                prop_assert!(state.mismatched.is_some());
            }
            if state.is_complete() {
                prop_assert!(!state.timer_running);
                prop_assert_eq!(c.deck().matched_count(), DECK_SIZE);
            }
            last_pairs = state.matched_pair_count;
        }

        let summaries = c
            .renderer()
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, RenderCommand::ShowCompletionSummary(_)))
            .count();
        prop_assert_eq!(summaries, usize::from(c.is_complete()));
    }

    #[test]
    fn timer_counts_whole_ticks(seconds in 0..500u64) {
        let mut c = new_controller(0);
        c.select_card(0);
        c.advance(Duration::from_secs(seconds));
        prop_assert_eq!(c.state().elapsed_seconds, seconds);
        prop_assert_eq!(c.timer_text(), format_elapsed(seconds));
    }

    #[test]
    fn elapsed_text_round_trips_fields(total in 0..400_000u64) {
        let text = format_elapsed(total);
        let fields: Vec<u64> = text.split(':').map(|f| f.parse().unwrap()).collect();
        prop_assert_eq!(fields.len(), 3);
        prop_assert!(fields[1] < 60 && fields[2] < 60);
        prop_assert_eq!(fields[0] * 3600 + fields[1] * 60 + fields[2], total);
    }
}

#[test]
fn perfect_game_scores_three_stars() {
    let mut c = new_controller(99);
    let pairs: Vec<(usize, usize)> = (0..DECK_SIZE)
        .filter_map(|i| c.deck().partner_of(i).filter(|&j| i < j).map(|j| (i, j)))
        .collect();

    for (a, b) in pairs {
        c.select_card(a);
        c.advance(Duration::from_millis(400));
        c.select_card(b);
    }

    assert!(c.is_complete());
    assert_eq!(c.state().move_count, 8);
    assert_eq!(c.state().star_rating.stars(), 3);
    assert_eq!(c.state().elapsed_seconds, 3);
    assert_eq!(
        c.state().summary(),
        "You made 8 moves and earned 3 out of 3 stars in a time of 00:00:03!"
    );
}
