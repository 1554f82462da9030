use cards_rs::repl::{self, ReplOptions};
use cards_rs::scoundrel::Scoundrel;
use cards_rs::tui::{app::AppState, controller};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    let interactive = io::stdout().is_terminal() && io::stdin().is_terminal();
    let line_mode = std::env::args().skip(1).any(|a| a == "--line");
    if !interactive || line_mode {
        let mut game = Scoundrel::new();
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let options = ReplOptions { redraw_in_place: interactive };
        return repl::run(&mut game, stdin.lock(), &mut stdout, options);
    }
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::default();

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
