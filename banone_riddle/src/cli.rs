// Command-line surface of the `banone` binary.
//
// `Cli` is parsed by clap; `resolve_config` layers the flags over an
// optional JSON config file; `run` executes a subcommand against any
// `Write` sink so tests can capture the output.

use std::io::Write;
use std::path::PathBuf;

use banone_lang::{Lexicon, Word, merge_detailed};
use clap::{Parser, Subcommand};

use crate::config::RiddleConfig;
use crate::error::{Result, RiddleError};
use crate::generator::generate_all;
use crate::riddle::generate_riddle;
use crate::stats::DictionaryStats;

#[derive(Debug, Parser)]
#[command(name = "banone")]
#[command(about = "German pun-compound riddle generator")]
#[command(version)]
pub struct Cli {
    /// JSON config file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Dictionary JSON file (overrides the config file)
    #[arg(short, long, global = true)]
    pub dict: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate every riddle the dictionary allows (default)
    All {
        /// Skip the dictionary summary
        #[arg(long)]
        no_stats: bool,

        /// Run the batch on a single thread
        #[arg(long)]
        sequential: bool,
    },

    /// Try to merge EXTRA into BASE
    Merge {
        /// Host word, must be a noun to produce a riddle
        base: String,
        /// Donor word
        extra: String,
    },

    /// Print dictionary statistics
    Stats,
}

impl Default for Command {
    fn default() -> Self {
        Command::All {
            no_stats: false,
            sequential: false,
        }
    }
}

/// Load the config file named by `--config` (or defaults) and apply the
/// command-line overrides.
pub fn resolve_config(cli: &Cli) -> Result<RiddleConfig> {
    let mut config = match &cli.config {
        Some(path) => RiddleConfig::load(path)?,
        None => RiddleConfig::default(),
    };

    if let Some(dict) = &cli.dict {
        config.dictionary = Some(dict.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(Command::All {
        no_stats,
        sequential,
    }) = &cli.command
    {
        config.show_stats &= !no_stats;
        config.parallel &= !sequential;
    }

    Ok(config)
}

/// Execute the parsed command, writing results to `out`.
pub fn run(cli: &Cli, config: &RiddleConfig, out: &mut impl Write) -> Result<()> {
    let lexicon = config.load_lexicon()?;

    match cli.command.clone().unwrap_or_default() {
        Command::All { .. } => run_all(&lexicon, config, out),
        Command::Merge { base, extra } => {
            let base = lookup(&lexicon, &base)?;
            let extra = lookup(&lexicon, &extra)?;
            run_merge(base, extra, out)
        }
        Command::Stats => {
            writeln!(out, "{}", DictionaryStats::collect(&lexicon))?;
            Ok(())
        }
    }
}

fn run_all(lexicon: &Lexicon, config: &RiddleConfig, out: &mut impl Write) -> Result<()> {
    let riddles = generate_all(lexicon, config.parallel);
    for riddle in &riddles {
        writeln!(out, "{riddle}\n")?;
    }
    writeln!(out, "{} riddles were generated.\n", riddles.len())?;

    if config.show_stats {
        writeln!(out, "{}", DictionaryStats::collect(lexicon))?;
    }
    Ok(())
}

fn run_merge(base: &Word, extra: &Word, out: &mut impl Write) -> Result<()> {
    match merge_detailed(base, extra) {
        Ok(compound) => {
            writeln!(out, "{compound}")?;
            if let Some(riddle) = generate_riddle(base, extra) {
                writeln!(out, "\n{riddle}")?;
            }
        }
        Err(rejection) => writeln!(out, "no merge: {rejection}")?,
    }
    Ok(())
}

fn lookup<'a>(lexicon: &'a Lexicon, orth: &str) -> Result<&'a Word> {
    lexicon
        .lookup(orth)
        .ok_or_else(|| RiddleError::UnknownWord(orth.to_string()))
}
