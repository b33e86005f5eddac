use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set};

/// A top-level subject in the `subjects` table (e.g. "Physics").
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique display name.
    pub name: String,
    pub description: Option<String>,
    /// Cover image shown on the subject card.
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::chapter::Entity")]
    Chapters,
}

impl Related<super::chapter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chapters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        name: &str,
        description: Option<&str>,
        image_url: Option<&str>,
    ) -> Result<Self, DbErr> {
        let active = ActiveModel {
            name: Set(name.to_owned()),
            description: Set(description.map(str::to_owned)),
            image_url: Set(image_url.map(str::to_owned)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        active.insert(db).await
    }

    pub async fn find_by_name<C: ConnectionTrait>(
        db: &C,
        name: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find().filter(Column::Name.eq(name)).one(db).await
    }
}
