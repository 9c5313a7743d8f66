use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use trisolitaire::explore::explore;
use trisolitaire::render::render;
use trisolitaire::{Board, Config};

const SIDE_LENGTH: u8 = 5;
/// Start hole of the exploration whose solutions are replayed interactively.
const REPLAY_MISSING_PEG: usize = 0;
const STEP_DELAY: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    let board = Board::new(SIDE_LENGTH).context("unsupported side length")?;

    // One fresh exploration per starting hole; the runs share nothing.
    for missing in 0..board.nr_holes() {
        let start =
            Config::with_missing(&board, missing).context("missing-peg index out of range")?;
        let exploration = explore(&board, start);
        let nr_solutions = exploration.reached_single_peg(&board).len();
        println!("{missing:02}: {nr_solutions} solutions");
    }

    let start = Config::with_missing(&board, REPLAY_MISSING_PEG)
        .context("replay start index out of range")?;
    let exploration = explore(&board, start);

    for target in exploration.reached_single_peg(&board) {
        wait_for_enter("Next solution (Enter to start): ")?;

        let path = exploration
            .path_to(target)
            .context("single-peg end should be reachable in its own exploration")?;

        for config in path {
            // clear the terminal and redraw in place
            print!("\x1b[2J\x1b[H");
            print!("{}", render(&board, config));
            io::stdout().flush()?;
            thread::sleep(STEP_DELAY);
        }
    }

    Ok(())
}

fn wait_for_enter(prompt: &str) -> Result<()> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}
