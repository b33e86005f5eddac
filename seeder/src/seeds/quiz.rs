use chrono::{Duration, Utc};
use db::models::{
    chapter,
    quiz::{self, NewQuiz},
};
use rand::Rng;
use rand::rngs::StdRng;
use sea_orm::TransactionTrait;

use crate::error::SeedError;

pub const QUIZZES_PER_CHAPTER: u64 = 5;
pub const DURATION_OPTIONS: [i32; 5] = [15, 20, 30, 45, 60];
pub const PASSING_SCORE: i32 = 70;
const OPEN_FOR_DAYS: i64 = 30;

/// Tops every chapter up to [`QUIZZES_PER_CHAPTER`] quizzes.
///
/// Quiz `i` opened `i` days ago and closes 30 days from now. Returns all quizzes
/// of the given chapters, grouped by chapter.
pub async fn ensure_quizzes<C: TransactionTrait>(
    db: &C,
    rng: &mut StdRng,
    chapters: &[chapter::Model],
) -> Result<Vec<quiz::Model>, SeedError> {
    let txn = db.begin().await?;
    let now = Utc::now();
    let mut quizzes = Vec::new();

    for chapter in chapters {
        let existing = quiz::Model::count_by_chapter(&txn, chapter.id).await?;

        for i in (existing + 1)..=QUIZZES_PER_CHAPTER {
            let duration = DURATION_OPTIONS[rng.gen_range(0..DURATION_OPTIONS.len())];
            quiz::Model::create(
                &txn,
                NewQuiz {
                    chapter_id: chapter.id,
                    title: &format!("Quiz {i} - {}", chapter.name),
                    description: Some(&format!("Test your knowledge of {}", chapter.name)),
                    duration_minutes: duration,
                    passing_score: Some(PASSING_SCORE),
                    start_date: now - Duration::days(i as i64),
                    end_date: now + Duration::days(OPEN_FOR_DAYS),
                    is_active: true,
                },
            )
            .await?;
        }

        quizzes.extend(quiz::Model::find_by_chapter(&txn, chapter.id).await?);
    }

    txn.commit().await?;
    Ok(quizzes)
}
