use std::process;

use clap::Parser;
use colored::Colorize;

use relcheck::app;
use relcheck::cli::Args;

fn main() {
    let args = Args::parse();

    if let Err(err) = app::run(args) {
        eprintln!("{} {}", "x".bright_red(), err);
        process::exit(1);
    }
}
