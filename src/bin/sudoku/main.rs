#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::io::Read;
use std::path::Path;
use std::{io, process};

use anyhow::{Context as _, Result};
use itertools::Itertools;
use walkdir::WalkDir;

use sudoku::puzzle::{format_grid, Grid};
use sudoku::solve::{SolveResult, SudokuSolver};

use crate::options::{Options, Source};

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    match options.source() {
        Source::File(path) => {
            let grid = Grid::from_file(path)
                .with_context(|| format!("failed to read puzzle from \"{}\"", path.display()))?;
            solve_grid(&grid, &options)?;
        }
        Source::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            let grid: Grid = text.parse().context("failed to parse puzzle")?;
            solve_grid(&grid, &options)?;
        }
        Source::Batch(dir) => {
            let solved = solve_batch(dir, &options)?;
            if !solved {
                process::exit(1);
            }
        }
    }
    Ok(())
}

/// Solves every file directly inside `dir`, in path order. Returns false if
/// any file failed to parse or solve.
fn solve_batch(dir: &Path, options: &Options) -> Result<bool> {
    let files = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by(|a, b| a.file_name().cmp(b.file_name()))
        .into_iter()
        .filter_ok(|entry| entry.file_type().is_file());
    let mut total = 0;
    let mut solved = 0;
    for entry in files {
        let entry = entry.with_context(|| format!("failed to read \"{}\"", dir.display()))?;
        let path = entry.path();
        total += 1;
        println!("Solving \"{}\"", path.display());
        match Grid::from_file(path) {
            Ok(grid) => {
                if solve_grid(&grid, options)? {
                    solved += 1;
                }
            }
            Err(e) => eprintln!("Error reading \"{}\": {}", path.display(), e),
        }
        println!();
    }
    println!("Solved {}/{} puzzles", solved, total);
    Ok(solved == total)
}

/// Prints the puzzle and its outcome; returns true if it was solved
fn solve_grid(grid: &Grid, options: &Options) -> Result<bool> {
    println!("{}\n", grid);
    let mut solver = SudokuSolver::new(grid);
    if let Some(limit) = options.node_budget() {
        solver.node_budget(limit);
    }
    let solved = match solver.solve()? {
        SolveResult::Solved(data) => {
            println!("{}", format_grid(&data.solution));
            true
        }
        SolveResult::Unsatisfiable => {
            println!("No solution.");
            false
        }
        SolveResult::ResourceExhausted => {
            println!("Gave up: node budget exhausted.");
            false
        }
    };
    Ok(solved)
}
