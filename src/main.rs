//! wikitree - Normalize a wiki parse tree and print it

use std::fs;
use std::process::ExitCode;

use clap::Parser;

use wikitree::{Normalizer, Options, Tree};

#[derive(Parser)]
#[command(name = "wikitree")]
#[command(version, about = "Normalize a wiki parse tree", long_about = None)]
#[command(after_help = "EXAMPLES:
    wikitree tree.json                      Print the normalized outline
    wikitree tree.json --options opts.json  Use custom normalization options
    RUST_LOG=debug wikitree tree.json       Show pass progress")]
struct Cli {
    /// Parse tree as JSON (a nested RawNode)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Options file (JSON); missing fields keep their defaults
    #[arg(short, long, value_name = "FILE")]
    options: Option<String>,

    /// Suppress warnings on stderr
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> wikitree::Result<()> {
    let options = match &cli.options {
        Some(path) => serde_json::from_str::<Options>(&fs::read_to_string(path)?)?,
        None => Options::default(),
    };

    let mut tree = Tree::from_json(&fs::read_to_string(&cli.input)?)?;
    let diagnostics = Normalizer::new(options).run(&mut tree)?;

    if !cli.quiet {
        for warning in diagnostics.warnings() {
            eprintln!("warning: {warning}");
        }
    }
    print!("{}", tree.dump());
    Ok(())
}
