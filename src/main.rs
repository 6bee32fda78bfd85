use clap::Parser;

use merge_bench::cli::{self, Cli};
use merge_bench::logging;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();
    if let Err(err) = cli::run(cli) {
        tracing::error!("{err:#}");
        return Err(err);
    }

    Ok(())
}
