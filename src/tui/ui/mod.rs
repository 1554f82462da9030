mod card;
mod layout;
mod menu;
mod scoundrel;
mod viewer;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Scoundrel => scoundrel::draw_scoundrel(f, app),
        Scene::Viewer => viewer::draw_viewer(f, app),
    }
}
