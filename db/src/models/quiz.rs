use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

/// A timed quiz attached to a chapter, stored in the `quizzes` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quizzes")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Foreign key to the owning chapter.
    pub chapter_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Time limit for one attempt.
    pub duration_minutes: i32,
    /// Minimum percentage needed to pass. `None` means the default of 70.
    pub passing_score: Option<i32>,
    /// Start of the window in which the quiz can be taken.
    pub start_date: DateTime<Utc>,
    /// End of the window in which the quiz can be taken.
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::chapter::Entity",
        from = "Column::ChapterId",
        to = "super::chapter::Column::Id"
    )]
    Chapter,

    #[sea_orm(has_many = "super::question::Entity")]
    Questions,

    #[sea_orm(has_many = "super::score::Entity")]
    Scores,
}

impl Related<super::chapter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chapter.def()
    }
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl Related<super::score::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields needed to create a quiz.
#[derive(Debug, Clone)]
pub struct NewQuiz<'a> {
    pub chapter_id: i64,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub duration_minutes: i32,
    pub passing_score: Option<i32>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
}

impl Model {
    pub async fn create<C: ConnectionTrait>(db: &C, new: NewQuiz<'_>) -> Result<Self, DbErr> {
        let active = ActiveModel {
            chapter_id: Set(new.chapter_id),
            title: Set(new.title.to_owned()),
            description: Set(new.description.map(str::to_owned)),
            duration_minutes: Set(new.duration_minutes),
            passing_score: Set(new.passing_score),
            start_date: Set(new.start_date),
            end_date: Set(new.end_date),
            is_active: Set(new.is_active),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        active.insert(db).await
    }

    pub async fn find_by_chapter<C: ConnectionTrait>(
        db: &C,
        chapter_id: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::ChapterId.eq(chapter_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn count_by_chapter<C: ConnectionTrait>(
        db: &C,
        chapter_id: i64,
    ) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::ChapterId.eq(chapter_id))
            .count(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{chapter, subject};
    use crate::test_utils::setup_test_db;
    use chrono::Duration;

    #[tokio::test]
    async fn test_create_and_count_by_chapter() {
        let db = setup_test_db().await;
        let s = subject::Model::create(&db, "Physics", None, None).await.unwrap();
        let c = chapter::Model::create(&db, s.id, "Chapter 1", None, 1).await.unwrap();
        let now = Utc::now();

        let quiz = Model::create(
            &db,
            NewQuiz {
                chapter_id: c.id,
                title: "Quiz 1",
                description: Some("Warm-up"),
                duration_minutes: 30,
                passing_score: None,
                start_date: now - Duration::days(1),
                end_date: now + Duration::days(30),
                is_active: true,
            },
        )
        .await
        .expect("Failed to create quiz");

        assert_eq!(quiz.chapter_id, c.id);
        assert_eq!(quiz.passing_score, None);
        assert!(crate::grade::is_passing(70.0, quiz.passing_score));
        assert!(!crate::grade::is_passing(69.99, quiz.passing_score));
        assert!(quiz.start_date < quiz.end_date);
        assert_eq!(Model::count_by_chapter(&db, c.id).await.unwrap(), 1);
        let ids: Vec<i64> = Model::find_by_chapter(&db, c.id).await.unwrap().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![quiz.id]);
    }
}
