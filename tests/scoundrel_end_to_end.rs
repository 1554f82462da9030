use cards_rs::cards::Color;
use cards_rs::scoundrel::{Outcome, Scoundrel};

/// Always take the first room card until the game ends.
fn play_first_card(seed: u64) -> Scoundrel {
    let mut g = Scoundrel::with_seed(seed);
    g.init();
    for _ in 0..40 {
        if g.is_game_over() {
            break;
        }
        g.select(1).unwrap();
        let accounted = g.room().len()
            + g.draw_pile_len()
            + g.discard_pile().len()
            + usize::from(g.weapon().is_some())
            + usize::from(g.last_monster().is_some());
        assert_eq!(accounted, 40, "seed {seed}: cards went missing");
        assert!(g.room().len() <= 4);
    }
    g
}

#[test]
fn every_seeded_game_terminates_with_a_consistent_score() {
    for seed in 0..64 {
        let g = play_first_card(seed);
        assert!(g.is_game_over(), "seed {seed} did not finish");

        let outcome = g.outcome().unwrap();
        let black_left: i32 = g
            .draw_pile()
            .iter()
            .filter(|(_, c)| c.color() == Color::Black)
            .map(|(_, c)| i32::from(c.value().value()))
            .sum();
        match outcome {
            Outcome::CleanWin(score) => {
                assert_eq!(g.draw_pile_len(), 0);
                assert_eq!(score, g.health());
                assert!(score > 0);
            }
            Outcome::Defeat(score) => {
                assert_eq!(score, g.health() - black_left);
                assert!(g.health() <= 0 || g.draw_pile_len() == 0);
            }
        }
        assert_eq!(g.score(), outcome.score());
    }
}

#[test]
fn seeded_games_replay_identically() {
    let a = play_first_card(2024);
    let b = play_first_card(2024);
    assert_eq!(a.health(), b.health());
    assert_eq!(a.room(), b.room());
    assert_eq!(a.draw_pile(), b.draw_pile());
    assert_eq!(a.outcome(), b.outcome());
}

#[test]
fn reinit_starts_over() {
    let mut g = play_first_card(9);
    g.init();
    assert!(!g.is_game_over());
    assert_eq!(g.health(), 20);
    assert_eq!(g.room().len(), 4);
    assert!(g.discard_pile().is_empty());
    assert_eq!(g.weapon(), None);
}
