use colored::*;
use common::{Config, logger};
use migration::Migrator;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sea_orm_migration::MigratorTrait;
use seeder::{SeedError, seed_all};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        log::error!("Seeding aborted: {err}");
        eprintln!("{} {err}", "Seeding aborted:".red());
        std::process::exit(1);
    }
}

async fn run() -> Result<(), SeedError> {
    let config = Config::init()?;
    if let Err(err) = logger::init_logger(&config.log_level, &config.log_file) {
        eprintln!("Logging to {} disabled: {err}", config.log_file);
    }

    let seed = config.rng_seed.unwrap_or_else(rand::random);
    log::info!(
        "{}: seeding {} (SEED_RNG={seed})",
        config.project_name,
        config.database_path
    );

    let db = db::connect(&config.database_path).await?;
    Migrator::up(&db, None).await?;

    let mut rng = StdRng::seed_from_u64(seed);
    let report = seed_all(&db, &mut rng).await?;

    println!(
        "{} {} users created, {} subjects, {} chapters, {} quizzes, {} questions created, {} attempts generated",
        "Database seeding completed:".green(),
        report.users_created,
        report.subjects,
        report.chapters,
        report.quizzes,
        report.questions_created,
        report.attempts.created
    );
    Ok(())
}
