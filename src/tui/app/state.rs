use crate::scoundrel::Scoundrel;
use crate::viewer::CardViewer;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Scoundrel,
    Viewer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameKind {
    Scoundrel,
    CardViewer,
}

impl GameKind {
    pub fn label(self) -> &'static str {
        match self {
            GameKind::Scoundrel => "Scoundrel - a roguelike card game",
            GameKind::CardViewer => "Card Viewer - flip through a deck",
        }
    }

    pub fn scene(self) -> Scene {
        match self {
            GameKind::Scoundrel => Scene::Scoundrel,
            GameKind::CardViewer => Scene::Viewer,
        }
    }
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    NewGame,
    /// 1-based room position.
    SelectRoom(usize),
    ViewerDraw,
    ViewerShuffle,
    ViewerSort,
}

#[derive(Debug)]
pub struct AppState {
    pub scene: Scene,
    pub scoundrel: Scoundrel,
    pub viewer: CardViewer,
    /// Room position (0-based) of the last accepted selection, for highlighting.
    pub last_selected: Option<usize>,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_game: GameKind,
    pub cfg_seed: Option<u64>,
    /// Seed in effect for the running game; `None` means a fresh random seed each start.
    pub seed: Option<u64>,
    pub(crate) running_game: Option<GameKind>,
    help_open: bool,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        let mut scoundrel = Scoundrel::new();
        scoundrel.init();
        let mut viewer = CardViewer::new();
        viewer.init();
        Self {
            scene: Scene::Menu,
            scoundrel,
            viewer,
            last_selected: None,
            menu_index: 0,
            cfg_game: GameKind::Scoundrel,
            cfg_seed: None,
            seed: None,
            running_game: None,
            help_open: false,
            action_error: None,
            action_error_at: None,
        }
    }
}

impl AppState {
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn set_action_error(&mut self, msg: String) {
        self.action_error = Some(msg);
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    /// Start `kind` from scratch using the configured seed.
    pub(crate) fn start_game(&mut self, kind: GameKind) {
        match kind {
            GameKind::Scoundrel => {
                self.scoundrel = match self.seed {
                    Some(seed) => Scoundrel::with_seed(seed),
                    None => Scoundrel::new(),
                };
                self.scoundrel.init();
            }
            GameKind::CardViewer => {
                self.viewer = match self.seed {
                    Some(seed) => CardViewer::with_seed(seed),
                    None => CardViewer::new(),
                };
                self.viewer.init();
            }
        }
        self.scene = kind.scene();
        self.running_game = Some(kind);
        self.last_selected = None;
        self.clear_action_error();
    }

    /// Deal again with the current engine; a seeded engine keeps producing the same sequence.
    pub fn new_game(&mut self) {
        match self.scene {
            Scene::Scoundrel => self.scoundrel.init(),
            Scene::Viewer => self.viewer.init(),
            Scene::Menu => return,
        }
        self.last_selected = None;
        self.clear_action_error();
    }

    fn select_room(&mut self, index: usize) -> bool {
        if self.scene != Scene::Scoundrel {
            return false;
        }
        match self.scoundrel.select(index) {
            Ok(()) => {
                self.last_selected = index.checked_sub(1);
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.set_action_error(err.to_string());
                false
            }
        }
    }

    fn viewer_draw(&mut self) -> bool {
        if self.scene != Scene::Viewer {
            return false;
        }
        match self.viewer.draw() {
            Ok(_) => {
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.set_action_error(err.to_string());
                false
            }
        }
    }

    /// Returns `true` when the action changed game state.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Scoundrel {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                    return true;
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::NewGame => {
                if self.scene == Scene::Menu {
                    return false;
                }
                self.new_game();
                true
            }
            InputAction::SelectRoom(idx) => self.select_room(idx),
            InputAction::ViewerDraw => self.viewer_draw(),
            InputAction::ViewerShuffle => {
                if self.scene == Scene::Viewer {
                    self.viewer.shuffle();
                    return true;
                }
                false
            }
            InputAction::ViewerSort => {
                if self.scene == Scene::Viewer {
                    self.viewer.sort();
                    return true;
                }
                false
            }
        }
    }

    /// Periodic housekeeping from the controller loop.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
    }
}
