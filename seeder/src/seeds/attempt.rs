use chrono::{DateTime, Duration, NaiveTime, SubsecRound, Utc};
use db::grade;
use db::models::{answer, choice, question, quiz, score, user, user_answer};
use rand::Rng;
use rand::rngs::StdRng;
use sea_orm::{EntityTrait, QueryOrder, TransactionTrait};
use std::collections::HashMap;

use crate::error::SeedError;

pub const HISTORY_DAYS: i64 = 30;
pub const MIN_ATTEMPTS_PER_DAY: u32 = 3;
pub const MAX_ATTEMPTS_PER_DAY: u32 = 8;
/// Chance that a simulated user picks a correct choice.
pub const CORRECT_ANSWER_PROBABILITY: f64 = 0.7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttemptStats {
    pub created: u64,
    /// Draws dropped because the user already took that quiz that day.
    pub skipped: u64,
}

/// Picks the index of the choice a simulated user selects.
///
/// With [`CORRECT_ANSWER_PROBABILITY`] a correct choice is chosen (any choice if
/// none is marked correct), otherwise any choice. `choices` must not be empty.
pub fn pick_choice(rng: &mut StdRng, choices: &[choice::Model]) -> usize {
    if rng.gen_bool(CORRECT_ANSWER_PROBABILITY) {
        let correct: Vec<usize> = choices
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_correct)
            .map(|(idx, _)| idx)
            .collect();
        if !correct.is_empty() {
            return correct[rng.gen_range(0..correct.len())];
        }
    }
    rng.gen_range(0..choices.len())
}

/// Random second within `day_start`'s day, never later than `now`.
fn completion_time(rng: &mut StdRng, day_start: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    let at = day_start + Duration::seconds(rng.gen_range(0..86_400));
    at.min(now)
}

/// Simulates quiz attempts for each of the [`HISTORY_DAYS`] days up to and including `now`'s day.
///
/// Each day gets between [`MIN_ATTEMPTS_PER_DAY`] and [`MAX_ATTEMPTS_PER_DAY`]
/// draws of a random non-admin user and a random quiz. A draw is skipped when
/// that user already has a score for that quiz on that day.
pub async fn generate_attempts<C: TransactionTrait>(
    db: &C,
    rng: &mut StdRng,
    now: DateTime<Utc>,
) -> Result<AttemptStats, SeedError> {
    let txn = db.begin().await?;
    let now = now.trunc_subsecs(0);
    let mut stats = AttemptStats::default();

    let users = user::Model::find_non_admins(&txn).await?;
    let quizzes = quiz::Entity::find()
        .order_by_asc(quiz::Column::Id)
        .all(&txn)
        .await?;

    if users.is_empty() || quizzes.is_empty() {
        log::warn!(
            "Skipping attempt generation: {} users, {} quizzes",
            users.len(),
            quizzes.len()
        );
        txn.commit().await?;
        return Ok(stats);
    }

    // Questions with their choices, loaded once per quiz.
    let mut content: HashMap<i64, Vec<(question::Model, Vec<choice::Model>)>> = HashMap::new();

    for days_ago in (0..HISTORY_DAYS).rev() {
        let day = (now - Duration::days(days_ago)).date_naive();
        let day_start = day.and_time(NaiveTime::MIN).and_utc();
        let draws = rng.gen_range(MIN_ATTEMPTS_PER_DAY..=MAX_ATTEMPTS_PER_DAY);

        for _ in 0..draws {
            let user = &users[rng.gen_range(0..users.len())];
            let quiz = &quizzes[rng.gen_range(0..quizzes.len())];

            if score::Model::exists_on_day(&txn, user.id, quiz.id, day).await? {
                log::debug!("{} already took quiz {} on {day}", user.username, quiz.id);
                stats.skipped += 1;
                continue;
            }

            if !content.contains_key(&quiz.id) {
                let mut loaded = Vec::new();
                for q in question::Model::find_by_quiz(&txn, quiz.id).await? {
                    let choices = choice::Model::find_by_question(&txn, q.id).await?;
                    loaded.push((q, choices));
                }
                content.insert(quiz.id, loaded);
            }
            let questions = content.get(&quiz.id).map(Vec::as_slice).unwrap_or_default();

            let attempt = score::Model::count_by_user_and_quiz(&txn, user.id, quiz.id).await? as i64 + 1;
            let completed_at = completion_time(rng, day_start, now);
            let pending =
                score::Model::create_pending(&txn, user.id, quiz.id, attempt, completed_at).await?;

            let mut marked = Vec::with_capacity(questions.len());
            for (q, choices) in questions {
                if choices.is_empty() {
                    continue;
                }
                let idx = pick_choice(rng, choices);
                let selected = &choices[idx];

                answer::Model::create(&txn, pending.id, q.id, selected.id, selected.is_correct).await?;
                user_answer::Model::create(&txn, pending.id, q.id, idx as i32, selected.is_correct)
                    .await?;
                marked.push((q.points, selected.is_correct));
            }

            let percent = grade::score_attempt(&marked);
            let passed = grade::is_passing(percent, quiz.passing_score);
            let max_seconds = (i64::from(quiz.duration_minutes) * 60).max(60);
            let time_taken = rng.gen_range(60..=max_seconds);

            pending.finalize(&txn, percent, time_taken, passed).await?;
            stats.created += 1;
        }
    }

    txn.commit().await?;
    log::info!(
        "Generated {} quiz attempts ({} duplicate draws skipped)",
        stats.created,
        stats.skipped
    );
    Ok(stats)
}
