use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::ArgMatches;

#[derive(Clone)]
pub(crate) struct Options {
    source: Source,
    node_budget: Option<u64>,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let source = if let Some(path) = matches.value_of("input") {
            Source::File(path.into())
        } else if let Some(path) = matches.value_of("batch") {
            Source::Batch(path.into())
        } else {
            Source::Stdin
        };
        let node_budget = matches
            .value_of("budget")
            .map(|s| {
                s.parse::<u64>()
                    .map_err(|_| anyhow!("invalid node budget: {}", s))
            })
            .transpose()?;
        Ok(Self {
            source,
            node_budget,
        })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn node_budget(&self) -> Option<u64> {
        self.node_budget
    }
}

#[derive(Clone)]
pub(crate) enum Source {
    /// Read one grid from a file
    File(PathBuf),
    /// Solve every file in a directory
    Batch(PathBuf),
    /// Read one grid from standard input
    Stdin,
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg, ArgGroup};

    App::new("Sudoku")
        .help_message("Solve Sudoku puzzles")
        .group(ArgGroup::with_name("source").args(&["input", "batch"]))
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .help("read a puzzle from a file (default: standard input)")
                .display_order(1),
        )
        .arg(
            Arg::with_name("batch")
                .short("b")
                .long("batch")
                .takes_value(true)
                .value_name("DIR")
                .help("solve every puzzle file in a directory")
                .display_order(1),
        )
        .arg(
            Arg::with_name("budget")
                .long("budget")
                .takes_value(true)
                .value_name("NODES")
                .help("give up after this many search assignments"),
        )
}
