// CLI entry point for the banone riddle generator.
//
// Usage:
//   banone [OPTIONS] [COMMAND]
//     all [--no-stats] [--sequential]   Print every riddle (default)
//     merge <BASE> <EXTRA>              Try a single pair
//     stats                             Dictionary summary
//   Options:
//     -c, --config <FILE>     JSON config file
//     -d, --dict <FILE>       Dictionary JSON (default: embedded German lexicon)
//     -l, --log-level <LVL>   error, warn, info, debug, trace (default: info)

use anyhow::Context;
use clap::Parser;

use banone_riddle::cli::{Cli, resolve_config, run};
use banone_riddle::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = try_main(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli).context("failed to load configuration")?;
    let _logger = init_logging(&config.log_level)?;

    let stdout = std::io::stdout();
    run(cli, &config, &mut stdout.lock())?;
    Ok(())
}
