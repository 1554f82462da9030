use super::{AppState, GameKind, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Game,
    Seed,
}

const MENU_ITEMS: [MenuItem; 2] = [MenuItem::Game, MenuItem::Seed];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Game => format!("Game: {}", app.cfg_game.label()),
            MenuItem::Seed => match app.cfg_seed {
                Some(seed) => format!("Seed: {seed}"),
                None => "Seed: random".to_string(),
            },
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Game => app.cfg_game = next_game(app.cfg_game),
            MenuItem::Seed => {
                app.cfg_seed = Some(app.cfg_seed.map_or(1, |s| s.saturating_add(1)));
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Game => app.cfg_game = next_game(app.cfg_game),
            // stepping below 1 goes back to a random seed
            MenuItem::Seed => {
                app.cfg_seed = app.cfg_seed.and_then(|s| s.checked_sub(1)).filter(|s| *s > 0);
            }
        }
    }
}

fn next_game(kind: GameKind) -> GameKind {
    match kind {
        GameKind::Scoundrel => GameKind::CardViewer,
        GameKind::CardViewer => GameKind::Scoundrel,
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        match self.scene {
            Scene::Menu => self.cancel_menu(),
            _ => self.open_menu(),
        }
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.cfg_seed = self.seed;
        self.scene = Scene::Menu;
    }

    pub fn apply_menu(&mut self) {
        self.seed = self.cfg_seed;
        self.start_game(self.cfg_game);
    }

    /// Return to whatever was running, or stay in the menu if nothing has started yet.
    pub fn cancel_menu(&mut self) {
        if let Some(kind) = self.running_game {
            self.cfg_seed = self.seed;
            self.scene = kind.scene();
        }
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
