use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set};

/// One completed quiz attempt by a user, stored in the `scores` table.
///
/// A score is inserted with placeholder aggregates before its answers exist and
/// is finalised once every answer has been recorded.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scores")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who took the quiz.
    pub user_id: i64,
    /// ID of the quiz that was taken.
    pub quiz_id: i64,
    /// Attempt number for this (user, quiz) pair, starting at 1.
    pub attempt: i64,
    /// Percentage of points earned, rounded to two decimals.
    #[sea_orm(column_type = "Double")]
    pub score: f64,
    pub time_taken_seconds: i64,
    /// Whether `score` reached the quiz's passing threshold.
    pub passed: bool,
    /// When the attempt was submitted.
    pub completed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::quiz::Entity",
        from = "Column::QuizId",
        to = "super::quiz::Column::Id"
    )]
    Quiz,

    #[sea_orm(has_many = "super::answer::Entity")]
    Answers,

    #[sea_orm(has_many = "super::user_answer::Entity")]
    UserAnswers,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl Related<super::answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl Related<super::user_answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAnswers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts an attempt with a zero score, to be filled in by [`Model::finalize`].
    pub async fn create_pending<C: ConnectionTrait>(
        db: &C,
        user_id: i64,
        quiz_id: i64,
        attempt: i64,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, DbErr> {
        let active = ActiveModel {
            user_id: Set(user_id),
            quiz_id: Set(quiz_id),
            attempt: Set(attempt),
            score: Set(0.0),
            time_taken_seconds: Set(0),
            passed: Set(false),
            completed_at: Set(completed_at),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        active.insert(db).await
    }

    /// Writes the computed aggregates of an attempt.
    pub async fn finalize<C: ConnectionTrait>(
        self,
        db: &C,
        score: f64,
        time_taken_seconds: i64,
        passed: bool,
    ) -> Result<Self, DbErr> {
        let mut active: ActiveModel = self.into();
        active.score = Set(score);
        active.time_taken_seconds = Set(time_taken_seconds);
        active.passed = Set(passed);
        active.update(db).await
    }

    pub async fn find_by_user_and_quiz<C: ConnectionTrait>(
        db: &C,
        user_id: i64,
        quiz_id: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::QuizId.eq(quiz_id))
            .all(db)
            .await
    }

    pub async fn count_by_user_and_quiz<C: ConnectionTrait>(
        db: &C,
        user_id: i64,
        quiz_id: i64,
    ) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::QuizId.eq(quiz_id))
            .count(db)
            .await
    }

    /// Whether the user already completed this quiz on the given UTC calendar day.
    pub async fn exists_on_day<C: ConnectionTrait>(
        db: &C,
        user_id: i64,
        quiz_id: i64,
        day: NaiveDate,
    ) -> Result<bool, DbErr> {
        // Compared in Rust: stored timestamps are text and not reliably range-comparable.
        Ok(Self::find_by_user_and_quiz(db, user_id, quiz_id)
            .await?
            .iter()
            .any(|s| s.completed_at.date_naive() == day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{chapter, quiz, subject, user};
    use crate::test_utils::setup_test_db;
    use chrono::{Duration, TimeZone};

    async fn fixture(db: &DatabaseConnection) -> (user::Model, quiz::Model) {
        let u = user::Model::create(
            db,
            user::NewUser {
                username: "student1",
                email: "student1@example.com",
                first_name: "Test",
                last_name: "Student",
                qualification: None,
                date_of_birth: None,
                password: "password123",
                role: user::Role::User,
            },
        )
        .await
        .unwrap();
        let s = subject::Model::create(db, "History", None, None).await.unwrap();
        let c = chapter::Model::create(db, s.id, "Chapter 1", None, 1).await.unwrap();
        let q = quiz::Model::create(
            db,
            quiz::NewQuiz {
                chapter_id: c.id,
                title: "Quiz 1",
                description: None,
                duration_minutes: 20,
                passing_score: Some(70),
                start_date: Utc::now() - Duration::days(1),
                end_date: Utc::now() + Duration::days(30),
                is_active: true,
            },
        )
        .await
        .unwrap();
        (u, q)
    }

    #[tokio::test]
    async fn test_pending_score_is_finalized() {
        let db = setup_test_db().await;
        let (u, q) = fixture(&db).await;
        let at = Utc.with_ymd_and_hms(2026, 10, 1, 9, 30, 0).unwrap();

        let pending = Model::create_pending(&db, u.id, q.id, 1, at).await.unwrap();
        assert_eq!(pending.score, 0.0);
        assert!(!pending.passed);

        let done = pending.finalize(&db, 83.33, 540, true).await.unwrap();
        assert_eq!(done.score, 83.33);
        assert_eq!(done.time_taken_seconds, 540);
        assert!(done.passed);

        let stored = Entity::find_by_id(done.id).one(&db).await.unwrap().unwrap();
        assert_eq!(stored.score, 83.33);
        assert_eq!(stored.completed_at, at);
    }

    #[tokio::test]
    async fn test_exists_on_day_matches_calendar_day_only() {
        let db = setup_test_db().await;
        let (u, q) = fixture(&db).await;
        let at = Utc.with_ymd_and_hms(2026, 10, 1, 23, 59, 59).unwrap();
        Model::create_pending(&db, u.id, q.id, 1, at).await.unwrap();

        let day = at.date_naive();
        assert!(Model::exists_on_day(&db, u.id, q.id, day).await.unwrap());
        assert!(!Model::exists_on_day(&db, u.id, q.id, day.succ_opt().unwrap()).await.unwrap());
        assert!(!Model::exists_on_day(&db, u.id, q.id + 1, day).await.unwrap());
        assert_eq!(Model::count_by_user_and_quiz(&db, u.id, q.id).await.unwrap(), 1);
    }
}
