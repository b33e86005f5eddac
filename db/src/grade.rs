//! Scoring arithmetic shared by attempt generation and its checks.

/// Threshold applied when a quiz has no passing score of its own.
pub const DEFAULT_PASSING_SCORE: i32 = 70;

/// Helper to compute percentage safely.
pub fn percentage(earned: f64, total: f64) -> f64 {
    if total <= 0.0 {
        0.0
    } else {
        (earned * 100.0) / total
    }
}

/// Rounds to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage score for a set of `(points, is_correct)` answers.
///
/// Only correctly answered questions contribute to the earned points; a quiz
/// worth zero points scores 0.
pub fn score_attempt(answers: &[(i32, bool)]) -> f64 {
    let (earned, total) = answers
        .iter()
        .fold((0i64, 0i64), |(earned, total), &(points, correct)| {
            let points = i64::from(points);
            (if correct { earned + points } else { earned }, total + points)
        });
    round2(percentage(earned as f64, total as f64))
}

pub fn is_passing(score: f64, passing_score: Option<i32>) -> bool {
    score >= f64::from(passing_score.unwrap_or(DEFAULT_PASSING_SCORE))
}
