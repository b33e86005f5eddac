use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610180009_create_user_answers"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("user_answers"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("score_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("question_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("selected_option")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("is_correct")).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("user_answers"), Alias::new("score_id"))
                            .to(Alias::new("scores"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("user_answers"), Alias::new("question_id"))
                            .to(Alias::new("questions"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("user_answers")).to_owned())
            .await
    }
}
