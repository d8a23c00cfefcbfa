//! Driver for the fixed-queen placement search.
//!
//! Mirrors the classic demonstration: an 8×8 board with the first queen
//! fixed at the top-left corner. Prints the solved board as a row-major
//! grid of 0/1 cells, or reports that the fixed placement admits no
//! solution.
//!
//! Run with:
//! `cargo run --bin queens`

use backtrack_search::problems::queens::FixedQueens;

fn main() {
    let n = 8;
    let (fixed_row, fixed_col) = (0, 0);

    let problem = match FixedQueens::new(n, fixed_row, fixed_col) {
        Ok(problem) => problem,
        Err(err) => {
            eprintln!("queens: {err}");
            std::process::exit(2);
        }
    };

    match problem.solve() {
        Some(board) => {
            println!("Solution Found:");
            print!("{board}");
        }
        None => {
            println!("No solution exists with first queen fixed at ({fixed_row},{fixed_col})");
        }
    }
}
