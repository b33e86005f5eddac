use db::models::{choice, question, quiz};
use rand::Rng;
use rand::rngs::StdRng;
use sea_orm::TransactionTrait;

use crate::error::SeedError;

pub const QUESTIONS_PER_QUIZ: u64 = 5;
pub const CHOICES_PER_QUESTION: usize = 4;
pub const POINT_OPTIONS: [i32; 4] = [1, 2, 3, 5];

/// Tops every quiz up to [`QUESTIONS_PER_QUIZ`] questions, each with
/// [`CHOICES_PER_QUESTION`] choices of which exactly one is correct.
///
/// Returns how many questions were created.
pub async fn ensure_questions<C: TransactionTrait>(
    db: &C,
    rng: &mut StdRng,
    quizzes: &[quiz::Model],
) -> Result<u64, SeedError> {
    let txn = db.begin().await?;
    let mut created = 0;

    for quiz in quizzes {
        let existing = question::Model::count_by_quiz(&txn, quiz.id).await?;

        for i in (existing + 1)..=QUESTIONS_PER_QUIZ {
            let points = POINT_OPTIONS[rng.gen_range(0..POINT_OPTIONS.len())];
            let question = question::Model::create(
                &txn,
                quiz.id,
                &format!("Question {i} about {}?", quiz.title),
                Some(&format!("Explanation for question {i}")),
                points,
            )
            .await?;

            let correct = rng.gen_range(0..CHOICES_PER_QUESTION);
            for j in 0..CHOICES_PER_QUESTION {
                choice::Model::create(
                    &txn,
                    question.id,
                    &format!("Option {} for question {i}", j + 1),
                    j == correct,
                )
                .await?;
            }
            created += 1;
        }
    }

    txn.commit().await?;
    log::info!("Created {created} questions");
    Ok(created)
}
