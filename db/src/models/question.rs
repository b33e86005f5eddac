use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

/// A single multiple-choice question in the `questions` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub quiz_id: i64,
    pub text: String,
    /// Shown to the user after answering.
    pub explanation: Option<String>,
    /// Weight of the question in the quiz total.
    pub points: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quiz::Entity",
        from = "Column::QuizId",
        to = "super::quiz::Column::Id"
    )]
    Quiz,

    #[sea_orm(has_many = "super::choice::Entity")]
    Choices,
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl Related<super::choice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Choices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        quiz_id: i64,
        text: &str,
        explanation: Option<&str>,
        points: i32,
    ) -> Result<Self, DbErr> {
        let active = ActiveModel {
            quiz_id: Set(quiz_id),
            text: Set(text.to_owned()),
            explanation: Set(explanation.map(str::to_owned)),
            points: Set(points),
            ..Default::default()
        };
        active.insert(db).await
    }

    pub async fn find_by_quiz<C: ConnectionTrait>(db: &C, quiz_id: i64) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::QuizId.eq(quiz_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn count_by_quiz<C: ConnectionTrait>(db: &C, quiz_id: i64) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::QuizId.eq(quiz_id))
            .count(db)
            .await
    }
}
