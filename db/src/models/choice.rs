use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};

/// One selectable option of a question, stored in the `choices` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "choices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::question::Entity",
        from = "Column::QuestionId",
        to = "super::question::Column::Id"
    )]
    Question,
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        question_id: i64,
        text: &str,
        is_correct: bool,
    ) -> Result<Self, DbErr> {
        let active = ActiveModel {
            question_id: Set(question_id),
            text: Set(text.to_owned()),
            is_correct: Set(is_correct),
            ..Default::default()
        };
        active.insert(db).await
    }

    /// Choices of a question in insertion order; the position in this list is
    /// the option ordinal recorded in `user_answers`.
    pub async fn find_by_question<C: ConnectionTrait>(
        db: &C,
        question_id: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::QuestionId.eq(question_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }
}
