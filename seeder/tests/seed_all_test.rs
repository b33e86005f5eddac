use std::collections::{HashMap, HashSet};

use db::grade;
use db::models::{answer, chapter, choice, question, quiz, score, subject, user, user_answer};
use db::test_utils::setup_test_db;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use seeder::seed_all;
use seeder::seeds::subject::{SUBJECTS, ensure_subjects};

#[derive(Debug, PartialEq, Eq)]
struct ContentCounts {
    users: u64,
    admins: u64,
    subjects: u64,
    chapters: u64,
    quizzes: u64,
    questions: u64,
    choices: u64,
}

async fn content_counts(db: &DatabaseConnection) -> ContentCounts {
    let users = user::Entity::find().count(db).await.unwrap();
    let non_admins = user::Model::find_non_admins(db).await.unwrap().len() as u64;
    ContentCounts {
        users,
        admins: users - non_admins,
        subjects: subject::Entity::find().count(db).await.unwrap(),
        chapters: chapter::Entity::find().count(db).await.unwrap(),
        quizzes: quiz::Entity::find().count(db).await.unwrap(),
        questions: question::Entity::find().count(db).await.unwrap(),
        choices: choice::Entity::find().count(db).await.unwrap(),
    }
}

/// (scores, answers, user_answers)
async fn attempt_counts(db: &DatabaseConnection) -> (u64, u64, u64) {
    (
        score::Entity::find().count(db).await.unwrap(),
        answer::Entity::find().count(db).await.unwrap(),
        user_answer::Entity::find().count(db).await.unwrap(),
    )
}

#[tokio::test]
async fn test_seeding_empty_store_creates_full_hierarchy() {
    let db = setup_test_db().await;
    let mut rng = StdRng::seed_from_u64(2024);

    let report = seed_all(&db, &mut rng).await.expect("seeding failed");

    assert_eq!(
        content_counts(&db).await,
        ContentCounts {
            users: 6,
            admins: 1,
            subjects: 5,
            chapters: 25,
            quizzes: 125,
            questions: 625,
            choices: 2500,
        }
    );
    assert_eq!(report.users_created, 5);
    assert_eq!(report.subjects, 5);
    assert_eq!(report.chapters, 25);
    assert_eq!(report.quizzes, 125);
    assert_eq!(report.questions_created, 625);

    let scores = score::Entity::find().count(&db).await.unwrap();
    assert_eq!(scores, report.attempts.created);
    assert!(scores > 0 && scores <= 30 * 8, "scores = {scores}");
}

#[tokio::test]
async fn test_reseeding_keeps_content_counts() {
    let db = setup_test_db().await;
    let mut rng = StdRng::seed_from_u64(99);

    seed_all(&db, &mut rng).await.unwrap();
    let first = content_counts(&db).await;
    let first_attempts = attempt_counts(&db).await;

    let report = seed_all(&db, &mut rng).await.unwrap();
    let second = content_counts(&db).await;
    let second_attempts = attempt_counts(&db).await;

    assert_eq!(first, second);
    assert_eq!(report.users_created, 0);
    assert_eq!(report.questions_created, 0);

    // Only attempt history grows, one score plus one answer pair per question.
    assert_eq!(second_attempts.0 - first_attempts.0, report.attempts.created);
    assert_eq!(
        second_attempts.1 - first_attempts.1,
        second_attempts.2 - first_attempts.2
    );
    assert!(second_attempts.1 >= first_attempts.1 + report.attempts.created);

    let mut seen_days = HashSet::new();
    for s in score::Entity::find().all(&db).await.unwrap() {
        assert!(
            seen_days.insert((s.user_id, s.quiz_id, s.completed_at.date_naive())),
            "duplicate attempt after re-seed for user {} quiz {}",
            s.user_id,
            s.quiz_id
        );
    }
}

#[tokio::test]
async fn test_every_question_has_one_correct_of_four_choices() {
    let db = setup_test_db().await;
    let mut rng = StdRng::seed_from_u64(5);
    seed_all(&db, &mut rng).await.unwrap();

    let mut per_quiz: HashMap<i64, usize> = HashMap::new();
    for q in question::Entity::find().all(&db).await.unwrap() {
        *per_quiz.entry(q.quiz_id).or_default() += 1;
    }
    assert_eq!(per_quiz.len(), 125);
    assert!(per_quiz.values().all(|&n| n == 5));

    let mut per_question: HashMap<i64, (usize, usize)> = HashMap::new();
    for c in choice::Entity::find().all(&db).await.unwrap() {
        let entry = per_question.entry(c.question_id).or_default();
        entry.0 += 1;
        if c.is_correct {
            entry.1 += 1;
        }
    }
    assert_eq!(per_question.len(), 625);
    assert!(per_question.values().all(|&(total, correct)| total == 4 && correct == 1));
}

#[tokio::test]
async fn test_scores_match_their_answers() {
    let db = setup_test_db().await;
    let mut rng = StdRng::seed_from_u64(31337);
    seed_all(&db, &mut rng).await.unwrap();

    let quizzes: HashMap<i64, quiz::Model> = quiz::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|q| (q.id, q))
        .collect();
    let questions: HashMap<i64, question::Model> = question::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|q| (q.id, q))
        .collect();

    let scores = score::Entity::find()
        .order_by_asc(score::Column::Id)
        .all(&db)
        .await
        .unwrap();
    assert!(!scores.is_empty());

    let mut seen_days = HashSet::new();
    for s in &scores {
        let quiz = &quizzes[&s.quiz_id];
        let quiz_questions: Vec<&question::Model> =
            questions.values().filter(|q| q.quiz_id == quiz.id).collect();

        let answers = answer::Model::find_by_score(&db, s.id).await.unwrap();
        let user_answers = user_answer::Model::find_by_score(&db, s.id).await.unwrap();
        assert_eq!(answers.len(), quiz_questions.len());
        assert_eq!(user_answers.len(), quiz_questions.len());

        let total: i32 = quiz_questions.iter().map(|q| q.points).sum();
        let earned: i32 = answers
            .iter()
            .filter(|a| a.is_correct)
            .map(|a| questions[&a.question_id].points)
            .sum();
        let expected = grade::round2(grade::percentage(earned as f64, total as f64));
        assert_eq!(s.score, expected, "score {}", s.id);
        assert_eq!(s.passed, grade::is_passing(s.score, quiz.passing_score));
        assert!(s.time_taken_seconds >= 60);
        assert!(s.time_taken_seconds <= quiz.duration_minutes as i64 * 60);

        // Both answer records describe the same selection.
        for (a, ua) in answers.iter().zip(&user_answers) {
            assert_eq!(a.question_id, ua.question_id);
            assert_eq!(a.is_correct, ua.is_correct);
            let choices = choice::Model::find_by_question(&db, a.question_id).await.unwrap();
            assert_eq!(choices[ua.selected_option as usize].id, a.choice_id);
            assert_eq!(choices[ua.selected_option as usize].is_correct, a.is_correct);
        }

        assert!(
            seen_days.insert((s.user_id, s.quiz_id, s.completed_at.date_naive())),
            "duplicate attempt for user {} quiz {} on {}",
            s.user_id,
            s.quiz_id,
            s.completed_at.date_naive()
        );
    }
}

#[tokio::test]
async fn test_attempts_are_never_made_by_admin() {
    let db = setup_test_db().await;
    let mut rng = StdRng::seed_from_u64(8);
    seed_all(&db, &mut rng).await.unwrap();

    let admin = user::Model::find_by_email(&db, seeder::seeds::user::ADMIN_EMAIL)
        .await
        .unwrap()
        .unwrap();
    let scores = score::Entity::find().all(&db).await.unwrap();
    assert!(scores.iter().all(|s| s.user_id != admin.id));

    // Attempt numbers count up per (user, quiz).
    let mut by_pair: HashMap<(i64, i64), Vec<i64>> = HashMap::new();
    for s in scores {
        by_pair.entry((s.user_id, s.quiz_id)).or_default().push(s.attempt);
    }
    for attempts in by_pair.values_mut() {
        attempts.sort_unstable();
        let expected: Vec<i64> = (1..=attempts.len() as i64).collect();
        assert_eq!(*attempts, expected);
    }
}

#[tokio::test]
async fn test_subjects_are_created_once_each() {
    let db = setup_test_db().await;

    for _ in 0..3 {
        ensure_subjects(&db).await.unwrap();
    }

    let mut names: Vec<String> = subject::Entity::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    names.sort();
    let mut expected: Vec<String> = SUBJECTS.iter().map(|(n, _)| n.to_string()).collect();
    expected.sort();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_same_seed_produces_same_content() {
    async fn fingerprint(seed: u64) -> Vec<(i32, Vec<(i32, usize)>)> {
        let db = setup_test_db().await;
        let mut rng = StdRng::seed_from_u64(seed);
        seed_all(&db, &mut rng).await.unwrap();

        let mut out = Vec::new();
        for q in quiz::Entity::find()
            .order_by_asc(quiz::Column::Id)
            .all(&db)
            .await
            .unwrap()
        {
            let mut qs = Vec::new();
            for question in question::Model::find_by_quiz(&db, q.id).await.unwrap() {
                let choices = choice::Model::find_by_question(&db, question.id).await.unwrap();
                let correct = choices.iter().position(|c| c.is_correct).unwrap();
                qs.push((question.points, correct));
            }
            out.push((q.duration_minutes, qs));
        }
        out
    }

    assert_eq!(fingerprint(77).await, fingerprint(77).await);
}
