mod command;

pub use command::{Command, ParseError};

use std::io::{self, BufRead, Write};

use crate::application::Session;
use crate::domain::presets;

const HELP: &str = "\
commands (coordinates are 1-based):
  live <row> <col> [name]   set a cell alive, optionally naming it
  dead <row> <col>          set a cell dead
  find <name>               show a named cell's coordinate and state
  place <pattern> <row> <col>  stamp a preset (top-left corner)
  random <count>            seed random live cells
  show                      render the board
  tick                      advance one generation (board shown before and after)
  help                      this text
  quit                      leave";

/// Run the interactive loop until `quit` or end of input.
///
/// Input and output are injected, so the loop carries no global handles and
/// tests can drive it with in-memory buffers. Command and engine errors are
/// printed and the loop keeps going; only I/O failures abort it.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut out: W) -> io::Result<()> {
    let grid = session.grid();
    writeln!(
        out,
        "Game of Life on a {}x{} board. Type `help` for commands.",
        grid.rows(),
        grid.cols()
    )?;
    write!(out, "{}", session.grid())?;
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(&mut out)?;
            continue;
        }
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(cmd) => execute(session, cmd, &mut out)?,
            Err(err) => writeln!(out, "{err}")?,
        }
        prompt(&mut out)?;
    }

    writeln!(out, "bye")
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn execute<W: Write>(session: &mut Session, cmd: Command, out: &mut W) -> io::Result<()> {
    match cmd {
        Command::Live { row, col, name } => {
            match session.set_alive(row - 1, col - 1, name.as_deref()) {
                Ok(()) => writeln!(
                    out,
                    "cell ({row}, {col}) is live, {} edits left this tick",
                    session.edits_remaining()
                )?,
                Err(err) => writeln!(out, "{err}")?,
            }
        }
        Command::Dead { row, col } => match session.set_dead(row - 1, col - 1) {
            Ok(()) => writeln!(
                out,
                "cell ({row}, {col}) is dead, {} edits left this tick",
                session.edits_remaining()
            )?,
            Err(err) => writeln!(out, "{err}")?,
        },
        Command::Find { name } => match session.find(&name) {
            Some(((row, col), state)) => {
                writeln!(out, "{name} is at ({}, {}) and {:?}", row + 1, col + 1, state)?
            }
            None => writeln!(out, "no cell named `{name}`")?,
        },
        Command::Place { pattern, row, col } => match presets::by_name(&pattern) {
            Some(pattern) => match session.place(&pattern, row - 1, col - 1) {
                Ok(()) => writeln!(out, "placed {} at ({row}, {col})", pattern.name)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            None => {
                let names: Vec<_> = presets::all().iter().map(|p| p.name).collect();
                writeln!(out, "unknown pattern `{pattern}`, one of: {}", names.join(", "))?
            }
        },
        Command::Random { count } => {
            session.randomize(count);
            write!(out, "{}", session.grid())?;
        }
        Command::Show => {
            writeln!(out, "generation {}", session.generation())?;
            write!(out, "{}", session.grid())?;
        }
        Command::Tick => {
            writeln!(out, "generation {}", session.generation())?;
            write!(out, "{}", session.grid())?;
            session.tick();
            writeln!(out, "generation {}", session.generation())?;
            write!(out, "{}", session.grid())?;
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => unreachable!("quit is handled by the loop"),
    }
    Ok(())
}
