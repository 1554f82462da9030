mod menu;
mod state;

pub use state::{AppState, GameKind, InputAction, Scene};
