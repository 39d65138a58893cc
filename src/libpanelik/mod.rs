pub mod cards;
pub mod editor;
pub mod fixtures;
pub mod quizzes;
