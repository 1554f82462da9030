use cards_rs::scoundrel::Scoundrel;
use cards_rs::tui::app::{AppState, GameKind, InputAction, Scene};
use cards_rs::tui::controller::handle_key;
use crossterm::event::KeyCode;

fn setup_scoundrel_app(seed: u64) -> AppState {
    let mut app = AppState::default();
    app.cfg_seed = Some(seed);
    app.apply_menu();
    app
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert_eq!(app.scene, Scene::Menu);
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    assert!(app.handle_input(InputAction::MenuApply));
    assert_eq!(app.scene, Scene::Scoundrel);
}

#[test]
fn seed_item_counts_up_from_random() {
    let mut app = AppState::default();
    let _ = app.handle_input(InputAction::MenuNext);
    assert!(app.menu_items_display()[1].contains("random"));
    let _ = app.handle_input(InputAction::MenuInc);
    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.cfg_seed, Some(2));
    let _ = app.handle_input(InputAction::MenuDec);
    let _ = app.handle_input(InputAction::MenuDec);
    assert_eq!(app.cfg_seed, None);
}

#[test]
fn configured_seed_deals_a_reproducible_room() {
    let app = setup_scoundrel_app(42);
    let mut expected = Scoundrel::with_seed(42);
    expected.init();
    assert_eq!(app.scoundrel.room(), expected.room());
    assert_eq!(app.seed, Some(42));
}

#[test]
fn menu_toggle_returns_to_running_game() {
    let mut app = setup_scoundrel_app(1);
    let room = app.scoundrel.room().to_vec();
    let _ = app.handle_input(InputAction::ToggleMenu);
    assert_eq!(app.scene, Scene::Menu);
    let _ = app.handle_input(InputAction::MenuCancel);
    assert_eq!(app.scene, Scene::Scoundrel);
    assert_eq!(app.scoundrel.room(), &room[..]);
}

#[test]
fn cancel_before_any_game_stays_in_menu() {
    let mut app = AppState::default();
    let _ = app.handle_input(InputAction::MenuCancel);
    assert_eq!(app.scene, Scene::Menu);
}

#[test]
fn help_toggle() {
    let mut app = setup_scoundrel_app(1);
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(!app.help_open());
}

#[test]
fn bad_room_choice_surfaces_an_error() {
    let mut app = setup_scoundrel_app(3);
    let _ = app.handle_input(InputAction::SelectRoom(1));
    // three cards left, slot 4 is empty
    assert!(!app.handle_input(InputAction::SelectRoom(4)));
    assert!(app.action_error().is_some());
    assert_eq!(app.scoundrel.room().len(), 3);
}

#[test]
fn new_game_redeals() {
    let mut app = setup_scoundrel_app(3);
    let _ = app.handle_input(InputAction::SelectRoom(1));
    assert!(app.handle_input(InputAction::NewGame));
    assert_eq!(app.scoundrel.room().len(), 4);
    assert_eq!(app.scoundrel.draw_pile_len(), 36);
    assert_eq!(app.last_selected, None);
}

#[test]
fn viewer_scene_draw_and_sort() {
    let mut app = AppState::default();
    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.cfg_game, GameKind::CardViewer);
    let _ = app.handle_input(InputAction::MenuApply);
    assert_eq!(app.scene, Scene::Viewer);

    let before = app.viewer.remaining();
    assert!(app.handle_input(InputAction::ViewerDraw));
    assert_eq!(app.viewer.remaining(), before - 1);
    assert!(app.handle_input(InputAction::ViewerSort));
    assert!(app.handle_input(InputAction::ViewerShuffle));
    assert!(!app.handle_input(InputAction::SelectRoom(1)));
}

#[test]
fn keys_drive_the_app() {
    let mut app = AppState::default();
    assert!(!handle_key(&mut app, KeyCode::Enter));
    assert_eq!(app.scene, Scene::Scoundrel);

    assert!(!handle_key(&mut app, KeyCode::Char('2')));
    assert_eq!(app.last_selected, Some(1));
    assert_eq!(app.scoundrel.room().len(), 3);

    assert!(!handle_key(&mut app, KeyCode::Char('?')));
    assert!(app.help_open());
    // help swallows everything but Esc and ?
    assert!(!handle_key(&mut app, KeyCode::Char('q')));
    assert!(!handle_key(&mut app, KeyCode::Esc));
    assert!(!app.help_open());

    assert!(!handle_key(&mut app, KeyCode::Char('m')));
    assert_eq!(app.scene, Scene::Menu);
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}
