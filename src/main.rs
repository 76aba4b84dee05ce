//! Interactive Game of Life console session.
//!
//! Board size comes from the command line (`lifeboard [<rows> <cols>]`);
//! everything after startup goes through the command loop on stdin/stdout.

use std::env;
use std::io;

use anyhow::{Context, Result, bail};

use lifeboard::{Session, console};

/// Live cells seeded at startup so the first board is not empty
const STARTUP_SEEDS: usize = 3;

const DEFAULT_ROWS: i32 = 20;
const DEFAULT_COLS: i32 = 20;

fn main() -> Result<()> {
    let (rows, cols) = board_size()?;
    let mut session = Session::new(rows, cols).context("cannot build the board")?;
    session.randomize(STARTUP_SEEDS);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    console::run(&mut session, stdin, stdout)?;
    Ok(())
}

fn board_size() -> Result<(i32, i32)> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok((DEFAULT_ROWS, DEFAULT_COLS)),
        [rows, cols] => {
            let rows = rows.parse().with_context(|| format!("bad row count `{rows}`"))?;
            let cols = cols.parse().with_context(|| format!("bad column count `{cols}`"))?;
            Ok((rows, cols))
        }
        _ => bail!("usage: lifeboard [<rows> <cols>]"),
    }
}
