use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610180007_create_scores"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("scores"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("user_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("quiz_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("attempt")).integer().not_null().default(1))
                    .col(ColumnDef::new(Alias::new("score")).double().not_null().default(0.0))
                    .col(ColumnDef::new(Alias::new("time_taken_seconds")).integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("passed")).boolean().not_null().default(false))
                    .col(ColumnDef::new(Alias::new("completed_at")).timestamp().not_null())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("scores"), Alias::new("user_id"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("scores"), Alias::new("quiz_id"))
                            .to(Alias::new("quizzes"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scores_user_quiz")
                    .table(Alias::new("scores"))
                    .col(Alias::new("user_id"))
                    .col(Alias::new("quiz_id"))
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("scores")).to_owned())
            .await
    }
}
