//! Blocking line-mode driver: draw a frame, prompt, read a line, repeat.

use crate::engine::CardGame;
use crate::render::RED;
use crossterm::cursor::MoveUp;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplOptions {
    /// Erase each frame before drawing the next one (only sensible on a real terminal).
    pub redraw_in_place: bool,
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit")
}

/// Run `game` until it is over, the player types `q`, or `input` is exhausted.
///
/// The game is (re)initialised first. A rejected input is reported under the next frame.
pub fn run<G, R, W>(game: &mut G, input: R, output: &mut W, options: ReplOptions) -> io::Result<()>
where
    G: CardGame,
    R: BufRead,
    W: Write,
{
    game.init();
    let mut lines = input.lines();
    let mut notice: Option<String> = None;

    loop {
        let mut frame = game.display();
        if let Some(msg) = notice.take() {
            frame.push_str(&format!("{}\n", msg.with(RED)));
        }
        writeln!(output, "{frame}")?;
        if game.is_over() {
            output.flush()?;
            return Ok(());
        }
        write!(output, "{}", game.prompt())?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };
        let line = line?;
        let line = line.trim();
        if is_quit(line) {
            return Ok(());
        }

        if let Err(err) = game.handle_input(line) {
            notice = Some(err.to_string());
        }

        if options.redraw_in_place {
            // every newline written for the frame, plus writeln's own and the echoed Enter
            for _ in 0..frame.matches('\n').count() + 2 {
                queue!(output, MoveUp(1), Clear(ClearType::CurrentLine))?;
            }
        }
    }
}
