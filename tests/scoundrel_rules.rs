use cards_rs::cards::{parse_cards, Card, Color};
use cards_rs::deck::Deck;
use cards_rs::scoundrel::{GameState, Outcome, Scoundrel, SelectionError, MAX_HEALTH};

fn c(s: &str) -> Card {
    s.parse().unwrap()
}

fn game(cards: &str) -> Scoundrel {
    Scoundrel::from_deck(Deck::from_cards(parse_cards(cards).unwrap()))
}

fn cards_in_play(game: &Scoundrel) -> Vec<Card> {
    let mut all: Vec<Card> = game.room().to_vec();
    all.extend(game.draw_pile().iter().map(|(_, c)| c));
    all.extend(game.discard_pile().iter().map(|(_, c)| c));
    all.extend(game.weapon());
    all.extend(game.last_monster());
    all.sort();
    all
}

#[test]
fn fresh_game_uses_forty_cards_without_red_faces() {
    let mut g = Scoundrel::with_seed(11);
    g.init();
    assert_eq!(g.health(), MAX_HEALTH);
    assert_eq!(g.room().len(), 4);
    assert_eq!(g.draw_pile_len(), 36);
    assert_eq!(g.state(), GameState::InProgress);

    let all = cards_in_play(&g);
    assert_eq!(all.len(), 40);
    assert!(all.windows(2).all(|w| w[0] != w[1]));
    assert!(!all.iter().any(|c| c.is_face_card() && c.color() == Color::Red));
}

#[test]
fn new_weapon_discards_last_monster_then_old_weapon() {
    let mut g = game("5d 4c 7d 2h 9s 8s 3s 2s 6c");
    g.select(1).unwrap();
    assert_eq!(g.weapon(), Some(c("5d")));

    g.select(1).unwrap();
    assert_eq!(g.last_monster(), Some(c("4c")));
    assert_eq!(g.health(), 20);

    g.select(1).unwrap();
    assert_eq!(g.weapon(), Some(c("7d")));
    assert_eq!(g.last_monster(), None);
    assert_eq!(g.discard_pile().as_slice(), &[c("4c"), c("5d")]);
    assert_eq!(g.discard_top(), Some(c("5d")));

    // one card left in the room pulled three more from the pile
    assert_eq!(g.room(), &[c("2h"), c("9s"), c("8s"), c("3s")]);
    assert_eq!(g.draw_pile().as_slice(), &[c("2s"), c("6c")]);
}

#[test]
fn weapon_dulls_after_each_kill() {
    let mut g = game("8d 6s 9c 3h 2s 4s 5s 7s");
    g.select(1).unwrap();
    g.select(1).unwrap();
    assert_eq!(g.health(), 20);
    assert_eq!(g.last_monster(), Some(c("6s")));

    // 9 is stronger than the last kill, so it is fought bare-handed
    assert!(!g.can_use_weapon_against(c("9c")));
    g.select(1).unwrap();
    assert_eq!(g.health(), 11);
    assert_eq!(g.discard_top(), Some(c("9c")));
    assert_eq!(g.last_monster(), Some(c("6s")));
    assert_eq!(g.room(), &[c("3h"), c("2s"), c("4s"), c("5s")]);

    g.select(1).unwrap();
    assert_eq!(g.health(), 14);

    g.select(3).unwrap();
    assert_eq!(g.health(), 14);
    assert_eq!(g.last_monster(), Some(c("5s")));
    assert_eq!(g.discard_top(), Some(c("6s")));
}

#[test]
fn potions_never_heal_past_max() {
    let mut g = game("2s 10h 3s 4s 5s 6s");
    g.select(1).unwrap();
    assert_eq!(g.health(), 18);
    g.select(1).unwrap();
    assert_eq!(g.health(), MAX_HEALTH);
    assert_eq!(g.discard_top(), Some(c("10h")));
}

#[test]
fn rejected_selections_change_nothing() {
    let mut g = Scoundrel::with_seed(3);
    g.init();
    let snapshot = |g: &Scoundrel| {
        (
            g.health(),
            g.room().to_vec(),
            g.weapon(),
            g.last_monster(),
            g.draw_pile().clone(),
            g.discard_pile().clone(),
        )
    };
    let before = snapshot(&g);

    assert_eq!(g.select(0), Err(SelectionError::OutOfRange { index: 0, room_len: 4 }));
    assert_eq!(g.select(5), Err(SelectionError::OutOfRange { index: 5, room_len: 4 }));
    assert_eq!(g.resolve_room_selection("abc"), Err(SelectionError::Parse("abc".into())));
    assert_eq!(
        g.resolve_room_selection("-1"),
        Err(SelectionError::OutOfRange { index: -1, room_len: 4 })
    );
    assert_eq!(snapshot(&g), before);
}

#[test]
fn empty_room_slot_is_out_of_range() {
    let mut g = game("2h 3h 4h 5h 6h 7h 8h 9h");
    g.select(4).unwrap();
    assert_eq!(g.room().len(), 3);
    assert_eq!(g.select(4), Err(SelectionError::OutOfRange { index: 4, room_len: 3 }));
}

#[test]
fn surviving_the_deck_scores_remaining_health() {
    let mut g = game("10s 3s 5d 4d 2c");
    g.select(1).unwrap();
    g.select(1).unwrap();
    assert_eq!(g.health(), 7);
    assert!(!g.is_game_over());

    // the refill takes the last card from the pile
    g.select(1).unwrap();
    assert!(g.is_game_over());
    assert_eq!(g.state(), GameState::GameOver);
    assert_eq!(g.score(), 7);
    assert_eq!(g.outcome(), Some(Outcome::CleanWin(7)));
    assert_eq!(g.select(1), Err(SelectionError::GameOver));
}

#[test]
fn dying_subtracts_black_cards_left_in_the_pile() {
    let mut g = game("Ac Kc 2h 3h 5s 8c 9h");
    g.select(1).unwrap();
    assert_eq!(g.health(), 6);
    g.select(1).unwrap();
    assert_eq!(g.health(), -7);
    assert!(g.is_game_over());
    assert_eq!(g.score(), -20);
    assert_eq!(g.outcome(), Some(Outcome::Defeat(-20)));
}

#[test]
fn from_deck_drops_red_face_cards() {
    let g = game("Kh 2s Qd 3s 4s 5s Ah 6s 7s");
    assert_eq!(g.room(), &[c("2s"), c("3s"), c("4s"), c("5s")]);
    assert_eq!(g.draw_pile().as_slice(), &[c("6s"), c("7s")]);
}
