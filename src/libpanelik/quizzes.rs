use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStatus {
    Published,
    Draft,
    Archived,
}

impl QuizStatus {
    pub fn label(&self) -> &'static str {
        match self {
            QuizStatus::Published => "Opublikowany",
            QuizStatus::Draft => "Szkic",
            QuizStatus::Archived => "Zarchiwizowany",
        }
    }
}

impl fmt::Display for QuizStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub questions: Vec<String>,
    pub status: QuizStatus,
    pub created_at: String,
}

/// One line of the quiz table.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizRow {
    pub id: String,
    pub title: String,
    pub question_count: usize,
    pub status: QuizStatus,
    pub created_at: String,
}

impl From<&Quiz> for QuizRow {
    fn from(quiz: &Quiz) -> Self {
        QuizRow {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            question_count: quiz.questions.len(),
            status: quiz.status,
            created_at: quiz.created_at.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_counts_questions() {
        let quiz = Quiz {
            id: "q1".into(),
            title: "Emocje".into(),
            questions: vec!["a".into(), "b".into(), "c".into()],
            status: QuizStatus::Draft,
            created_at: "2024-03-01".into(),
        };
        let row = QuizRow::from(&quiz);
        assert_eq!(row.question_count, 3);
        assert_eq!(row.status.to_string(), "Szkic");
        assert_eq!(row.created_at, "2024-03-01");
    }

    #[test]
    fn status_round_trips_by_variant_name() {
        let json = serde_json::to_string(&QuizStatus::Archived).unwrap();
        assert_eq!(json, "\"Archived\"");
        let back: QuizStatus = serde_json::from_str("\"Published\"").unwrap();
        assert_eq!(back, QuizStatus::Published);
    }
}
