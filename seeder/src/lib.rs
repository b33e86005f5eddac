//! Idempotent fixture seeding for the QuizMaster database.
//!
//! Stages run in dependency order (users, subjects, chapters, quizzes,
//! questions, attempts), each in its own transaction. Every stage checks what
//! already exists before inserting, so a failed run is recovered by running
//! it again.

pub mod error;
pub mod seed;
pub mod seeds;

use chrono::Utc;
use rand::rngs::StdRng;
use sea_orm::TransactionTrait;

pub use error::SeedError;
use seed::run_seeder;
use seeds::attempt::AttemptStats;

/// What a full seeding run produced or resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users_created: u64,
    pub subjects: usize,
    pub chapters: usize,
    pub quizzes: usize,
    pub questions_created: u64,
    pub attempts: AttemptStats,
}

/// Runs every seeding stage in order against `db`, drawing randomness from `rng`.
pub async fn seed_all<C: TransactionTrait>(db: &C, rng: &mut StdRng) -> Result<SeedReport, SeedError> {
    run_seeder("Admin", seeds::user::ensure_admin(db)).await?;
    let users_created = run_seeder("User", seeds::user::ensure_sample_users(db)).await?;
    let subjects = run_seeder("Subject", seeds::subject::ensure_subjects(db)).await?;
    let chapters = run_seeder("Chapter", seeds::chapter::ensure_chapters(db, &subjects)).await?;
    let quizzes = run_seeder("Quiz", seeds::quiz::ensure_quizzes(db, rng, &chapters)).await?;
    let questions_created =
        run_seeder("Question", seeds::question::ensure_questions(db, rng, &quizzes)).await?;
    let attempts =
        run_seeder("Attempt", seeds::attempt::generate_attempts(db, rng, Utc::now())).await?;

    Ok(SeedReport {
        users_created,
        subjects: subjects.len(),
        chapters: chapters.len(),
        quizzes: quizzes.len(),
        questions_created,
        attempts,
    })
}
