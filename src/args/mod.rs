mod cli;
mod options;
pub(crate) mod parsers;


pub use cli::RunnerArgs;
pub use options::{ConcurrencyMode, TestOptions};
