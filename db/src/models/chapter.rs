use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

/// A chapter of a subject in the `chapters` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "chapters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subject_id: i64,
    pub name: String,
    pub description: Option<String>,
    /// 1-based ordering within the subject.
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::SubjectId",
        to = "super::subject::Column::Id"
    )]
    Subject,

    #[sea_orm(has_many = "super::quiz::Entity")]
    Quizzes,
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quizzes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        subject_id: i64,
        name: &str,
        description: Option<&str>,
        position: i32,
    ) -> Result<Self, DbErr> {
        let active = ActiveModel {
            subject_id: Set(subject_id),
            name: Set(name.to_owned()),
            description: Set(description.map(str::to_owned)),
            position: Set(position),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        active.insert(db).await
    }

    /// Chapters of a subject ordered by position, then ID.
    pub async fn find_by_subject<C: ConnectionTrait>(
        db: &C,
        subject_id: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::SubjectId.eq(subject_id))
            .order_by_asc(Column::Position)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn count_by_subject<C: ConnectionTrait>(
        db: &C,
        subject_id: i64,
    ) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::SubjectId.eq(subject_id))
            .count(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::subject;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_find_by_subject_is_ordered_by_position() {
        let db = setup_test_db().await;
        let maths = subject::Model::create(&db, "Mathematics", None, None).await.unwrap();
        let other = subject::Model::create(&db, "Biology", None, None).await.unwrap();

        Model::create(&db, maths.id, "Second", None, 2).await.unwrap();
        Model::create(&db, maths.id, "First", None, 1).await.unwrap();
        Model::create(&db, other.id, "Elsewhere", None, 1).await.unwrap();

        let chapters = Model::find_by_subject(&db, maths.id).await.unwrap();
        let names: Vec<&str> = chapters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["First", "Second"]);

        assert_eq!(Model::count_by_subject(&db, maths.id).await.unwrap(), 2);
        assert_eq!(Model::count_by_subject(&db, other.id).await.unwrap(), 1);
    }
}
