use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202610180001_create_users::Migration),
            Box::new(migrations::m202610180002_create_subjects::Migration),
            Box::new(migrations::m202610180003_create_chapters::Migration),
            Box::new(migrations::m202610180004_create_quizzes::Migration),
            Box::new(migrations::m202610180005_create_questions::Migration),
            Box::new(migrations::m202610180006_create_choices::Migration),
            Box::new(migrations::m202610180007_create_scores::Migration),
            Box::new(migrations::m202610180008_create_answers::Migration),
            Box::new(migrations::m202610180009_create_user_answers::Migration),
        ]
    }
}
