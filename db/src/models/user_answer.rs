use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};

/// The option selected for one question of an attempt, by ordinal position.
///
/// Carries the same fact as [`super::answer::Model`] for consumers that
/// address choices by position instead of ID.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub score_id: i64,
    pub question_id: i64,
    /// 0-based index into the question's choices ordered by ID.
    pub selected_option: i32,
    pub is_correct: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::score::Entity",
        from = "Column::ScoreId",
        to = "super::score::Column::Id"
    )]
    Score,

    #[sea_orm(
        belongs_to = "super::question::Entity",
        from = "Column::QuestionId",
        to = "super::question::Column::Id"
    )]
    Question,
}

impl Related<super::score::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Score.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        score_id: i64,
        question_id: i64,
        selected_option: i32,
        is_correct: bool,
    ) -> Result<Self, DbErr> {
        let active = ActiveModel {
            score_id: Set(score_id),
            question_id: Set(question_id),
            selected_option: Set(selected_option),
            is_correct: Set(is_correct),
            ..Default::default()
        };
        active.insert(db).await
    }

    pub async fn find_by_score<C: ConnectionTrait>(db: &C, score_id: i64) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::ScoreId.eq(score_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }
}
