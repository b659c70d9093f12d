mod args;
mod entry;
mod error;
mod logger;
mod runner;
mod workload;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
