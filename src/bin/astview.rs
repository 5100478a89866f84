//! Command-line interface for astview
//!
//! Parses a source file and prints the resulting syntax tree in a nice,
//! colorful way.
//!
//! Usage:
//!   astview [-l <complexity>] <path>

use std::io::stdout;
use std::process::exit;

use clap::{Arg, Command};
use crossterm::tty::IsTty;

use astview::expr::parse_source;
use astview::render::{render_tree, RenderOptions, Styling};

fn main() {
    let matches = Command::new("astview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse a source file and print the resulting syntax tree in a nice, colorful way")
        .arg(
            Arg::new("line-complexity")
                .long("line-complexity")
                .short('l')
                .value_parser(clap::value_parser!(usize))
                .default_value("7")
                .help(
                    "Maximum complexity of a node formatted on a single line. Each node \
                     name, field name, and field value or list item is counted as one.",
                ),
        )
        .arg(
            Arg::new("path")
                .help("Path to the source file to parse")
                .required(true)
                .index(1),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();
    let max_line_complexity = *matches.get_one::<usize>("line-complexity").unwrap();

    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: {}: {}", path, e);
        exit(2);
    });

    let tree = parse_source(&source).unwrap_or_else(|e| {
        eprintln!("error: {}: {}", path, e);
        exit(2);
    });

    let options = RenderOptions {
        max_line_complexity,
        styling: if stdout().is_tty() {
            Styling::Color
        } else {
            Styling::Plain
        },
    };

    print!("{}", render_tree(&tree, &options));
}
