// Game capability boundary. Drivers (the line-mode loop, tests, benches) only talk to a game
// through this trait, so they stay generic over Scoundrel, the card viewer, or anything else that
// can set itself up, take a line of input and describe itself as text.

use std::error::Error;

pub trait CardGame {
    type Error: Error;

    /// Reset to a fresh game. Must be called before anything else.
    fn init(&mut self);

    /// Text shown before reading input; empty once the game no longer takes input.
    fn prompt(&self) -> String;

    /// Apply one line of player input. Rejected input leaves the game unchanged.
    fn handle_input(&mut self, input: &str) -> Result<(), Self::Error>;

    /// Full text frame for the current state.
    fn display(&self) -> String;

    fn is_over(&self) -> bool;
}

impl CardGame for crate::scoundrel::Scoundrel {
    type Error = crate::scoundrel::SelectionError;

    fn init(&mut self) {
        self.init();
    }

    fn prompt(&self) -> String {
        crate::render::scoundrel_prompt(self)
    }

    fn handle_input(&mut self, input: &str) -> Result<(), Self::Error> {
        self.resolve_room_selection(input)
    }

    fn display(&self) -> String {
        crate::render::scoundrel_frame(self)
    }

    fn is_over(&self) -> bool {
        self.is_game_over()
    }
}

impl CardGame for crate::viewer::CardViewer {
    type Error = crate::viewer::ViewerError;

    fn init(&mut self) {
        self.init();
    }

    fn prompt(&self) -> String {
        crate::render::viewer_prompt(self)
    }

    fn handle_input(&mut self, input: &str) -> Result<(), Self::Error> {
        self.handle_command(input)
    }

    fn display(&self) -> String {
        crate::render::viewer_frame(self)
    }

    fn is_over(&self) -> bool {
        self.is_done()
    }
}
