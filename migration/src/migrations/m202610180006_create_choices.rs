use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610180006_create_choices"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("choices"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("question_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("text")).string().not_null())
                    .col(ColumnDef::new(Alias::new("is_correct")).boolean().not_null().default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("choices"), Alias::new("question_id"))
                            .to(Alias::new("questions"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("choices")).to_owned())
            .await
    }
}
