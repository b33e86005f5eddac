use colored::*;
use std::future::Future;
use std::io::{self, Write};
use std::time::Instant;

use crate::error::SeedError;

const STATUS_COLUMN: usize = 80;

/// Runs one seeding stage, printing a `Seeding <name>.... done (elapsed)` status line.
///
/// The stage's output is handed back so it can feed the next stage.
pub async fn run_seeder<T, F>(name: &str, stage: F) -> Result<T, SeedError>
where
    F: Future<Output = Result<T, SeedError>>,
{
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    match stage.await {
        Ok(output) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(output)
        }
        Err(err) => {
            println!("{}", "failed".red());
            log::error!("Seeding {name} failed: {err}");
            Err(err)
        }
    }
}
