//! CLI entry point for apparatus generation and assembly animation export

use apparatus::io::cli::{ApparatusRunner, Cli};
use clap::Parser;

fn main() -> apparatus::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut runner = ApparatusRunner::new(cli);
    runner.run()
}
