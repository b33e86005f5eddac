use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610180004_create_quizzes"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("quizzes"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("chapter_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("title")).string().not_null())
                    .col(ColumnDef::new(Alias::new("description")).text().null())
                    .col(ColumnDef::new(Alias::new("duration_minutes")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("passing_score")).integer().null())
                    .col(ColumnDef::new(Alias::new("start_date")).timestamp().not_null())
                    .col(ColumnDef::new(Alias::new("end_date")).timestamp().not_null())
                    .col(ColumnDef::new(Alias::new("is_active")).boolean().not_null().default(true))
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("quizzes"), Alias::new("chapter_id"))
                            .to(Alias::new("chapters"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("quizzes")).to_owned())
            .await
    }
}
