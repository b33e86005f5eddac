use colored::*;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Connects to `url` and applies every migration in order, printing one status line each.
///
/// All migrations create their objects with `IF NOT EXISTS`, so re-applying is harmless.
pub async fn run_all_migrations(url: &str) -> Result<(), DbErr> {
    let db = sea_orm::Database::connect(url).await?;

    println!("Running migrations...");
    let schema_manager = SchemaManager::new(&db);

    for migration in <crate::Migrator as MigratorTrait>::migrations() {
        run_migration(&schema_manager, migration).await?;
    }

    Ok(())
}

async fn run_migration(
    schema_manager: &SchemaManager<'_>,
    migration: Box<dyn MigrationTrait>,
) -> Result<(), DbErr> {
    let name_str = format!("Applying {}", migration.name().bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    match migration.up(schema_manager).await {
        Ok(()) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(())
        }
        Err(err) => {
            println!("{}", "failed".red());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Database};

    #[tokio::test]
    async fn migrations_create_every_table_and_rerun_cleanly() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let manager = SchemaManager::new(&db);

        for _ in 0..2 {
            for migration in <crate::Migrator as MigratorTrait>::migrations() {
                migration.up(&manager).await.unwrap();
            }
        }

        for table in [
            "users",
            "subjects",
            "chapters",
            "quizzes",
            "questions",
            "choices",
            "scores",
            "answers",
            "user_answers",
        ] {
            assert!(manager.has_table(table).await.unwrap(), "missing {table}");
        }
        assert!(!manager.has_table("results").await.unwrap());

        // Unique email is owned by the schema.
        let insert = "INSERT INTO users (username, email, first_name, last_name, password_hash, role) \
                      VALUES ('a', 'dup@example.com', 'A', 'B', 'x', 'user')";
        db.execute_unprepared(insert).await.unwrap();
        let dup = "INSERT INTO users (username, email, first_name, last_name, password_hash, role) \
                   VALUES ('b', 'dup@example.com', 'A', 'B', 'x', 'user')";
        assert!(db.execute_unprepared(dup).await.is_err());
    }
}
