use colored::Colorize;

use crate::{Board, Config};

/// Render the configuration as an indented triangle, one line per row.
///
/// Every hole shows its zero-padded index, green when it holds a peg and red
/// when empty.
pub fn render(board: &Board, config: Config) -> String {
    let width = (board.nr_holes() - 1).to_string().len();
    let side = board.side_length() as usize;

    let mut out = String::new();
    let mut index = 0;
    for row in 0..side {
        out.push_str(&" ".repeat(width * (side - 1 - row)));
        for _ in 0..=row {
            let cell = format!("{index:0width$}");
            let cell = if config.has_peg(index) {
                cell.green()
            } else {
                cell.red()
            };
            out.push_str(&format!("{cell}{}", " ".repeat(width)));
            index += 1;
        }
        out.push('\n');
    }
    out
}
