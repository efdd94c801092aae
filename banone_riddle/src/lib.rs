// Joke riddle generator built on the pun compounds of `banone_lang`.
//
// For every pair of dictionary words that merges ("Banane" + "Schwan" ->
// "Schwanane"), builds a riddle from the words' descriptive tags:
//
//   Was ist weiß, krumm und schwimmt auf dem See?
//   Eine Schwanane.
//
// Modules:
// - `riddle.rs`: Question/answer assembly for one (base, extra) pair
// - `generator.rs`: All-pairs batch, sequential or on the rayon pool
// - `stats.rs`: Per-part-of-speech dictionary counts
// - `config.rs`: `RiddleConfig`, JSON-loadable runtime settings
// - `logging.rs`: flexi_logger bootstrap (stderr)
// - `cli.rs`: clap argument types and subcommand execution
// - `error.rs`: `RiddleError`
//
// The `banone` binary (`main.rs`) is a thin wrapper over `cli::run`.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod riddle;
pub mod stats;

pub use config::RiddleConfig;
pub use error::RiddleError;
pub use generator::generate_all;
pub use riddle::{Riddle, generate_answer, generate_question, generate_riddle};
pub use stats::DictionaryStats;
