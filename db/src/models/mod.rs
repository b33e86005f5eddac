pub mod answer;
pub mod chapter;
pub mod choice;
pub mod question;
pub mod quiz;
pub mod score;
pub mod subject;
pub mod user;
pub mod user_answer;

pub use answer::Entity as Answer;
pub use chapter::Entity as Chapter;
pub use choice::Entity as Choice;
pub use question::Entity as Question;
pub use quiz::Entity as Quiz;
pub use score::Entity as Score;
pub use subject::Entity as Subject;
pub use user::Entity as User;
pub use user_answer::Entity as UserAnswer;
