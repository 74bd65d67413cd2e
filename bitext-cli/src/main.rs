//! bitext-align: align an English paragraph onto Chinese sentences

use bitext_cli::commands::AlignArgs;
use bitext_cli::CliResult;
use clap::Parser;

fn main() -> CliResult<()> {
    AlignArgs::parse().execute()
}
