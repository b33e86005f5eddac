use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};

/// The choice selected for one question of an attempt, by choice ID.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub score_id: i64,
    pub question_id: i64,
    pub choice_id: i64,
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

    #[sea_orm(
        belongs_to = "super::choice::Entity",
        from = "Column::ChoiceId",
        to = "super::choice::Column::Id"
    )]
    Choice,
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
        choice_id: i64,
        is_correct: bool,
    ) -> Result<Self, DbErr> {
        let active = ActiveModel {
            score_id: Set(score_id),
            question_id: Set(question_id),
            choice_id: Set(choice_id),
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
