pub mod attempt;
pub mod chapter;
pub mod question;
pub mod quiz;
pub mod subject;
pub mod user;
