use common::Config;
use std::{env, fs, path::Path, process};

#[tokio::main]
async fn main() {
    let config = match Config::init() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {err}");
            process::exit(1);
        }
    };

    let db_path = config.database_path.as_str();
    let url = format!("sqlite://{}?mode=rwc", db_path);
    let args: Vec<String> = env::args().collect();

    let result = match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(db_path);
            Ok(())
        }
        Some("fresh") => {
            remove_db_file(db_path);
            create_db_dir(db_path);
            migration::runner::run_all_migrations(&url).await
        }
        _ => {
            create_db_dir(db_path);
            migration::runner::run_all_migrations(&url).await
        }
    };

    if let Err(err) = result {
        eprintln!("Migration failed: {err}");
        process::exit(1);
    }
}

fn remove_db_file(path: &str) {
    let db_path = Path::new(path);
    if db_path.exists() {
        match fs::remove_file(db_path) {
            Ok(()) => println!("Deleted DB: {}", db_path.display()),
            Err(err) => {
                eprintln!("Failed to delete {}: {err}", db_path.display());
                process::exit(1);
            }
        }
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}

fn create_db_dir(path: &str) {
    if let Some(parent) = Path::new(path).parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            eprintln!("Failed to create DB directory {}: {err}", parent.display());
            process::exit(1);
        }
    }
}
