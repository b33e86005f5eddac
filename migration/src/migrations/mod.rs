pub mod m202610180001_create_users;
pub mod m202610180002_create_subjects;
pub mod m202610180003_create_chapters;
pub mod m202610180004_create_quizzes;
pub mod m202610180005_create_questions;
pub mod m202610180006_create_choices;
pub mod m202610180007_create_scores;
pub mod m202610180008_create_answers;
pub mod m202610180009_create_user_answers;
