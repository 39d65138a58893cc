use crate::libpanelik::cards::Card;
use crate::libpanelik::quizzes::{Quiz, QuizStatus};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;
use thiserror::Error;

pub const DEFAULT_SEED: u64 = 2024;
pub const MIN_QUESTIONS: usize = 3;
pub const MAX_QUESTIONS: usize = 8;

const CARDS: [(&str, &str, &str, &str); 6] = [
    (
        "pc1",
        "Potwór złości",
        "Gdy się złościsz, potwór rośnie. Policz do dziesięciu, a zmaleje.",
        "angry monster",
    ),
    (
        "pc2",
        "Smutny kotek",
        "Kotek tęskni za przyjacielem. Przytul go i porozmawiaj.",
        "sad kitten",
    ),
    (
        "pc3",
        "Wesoły słonik",
        "Słonik śmieje się tak głośno, że słychać go w całym lesie.",
        "happy elephant",
    ),
    (
        "pc4",
        "Przestraszona sowa",
        "Sowa boi się ciemności, chociaż w nocy widzi najlepiej.",
        "scared owl",
    ),
    (
        "pc5",
        "Zdziwiona żaba",
        "Żaba zobaczyła tęczę pierwszy raz w życiu.",
        "surprised frog",
    ),
    (
        "pc6",
        "Spokojny żółw",
        "Żółw oddycha powoli i nigdzie się nie spieszy.",
        "calm turtle",
    ),
];

const QUIZZES: [(&str, &str, QuizStatus, &str); 5] = [
    ("q1", "Jak się czujesz?", QuizStatus::Published, "2024-01-15"),
    ("q2", "Przyjaciele z lasu", QuizStatus::Draft, "2024-02-03"),
    ("q3", "Co robić, gdy się złościsz", QuizStatus::Published, "2024-02-28"),
    ("q4", "Emocje w przedszkolu", QuizStatus::Archived, "2023-11-09"),
    ("q5", "Dobre słowa", QuizStatus::Draft, "2024-03-12"),
];

const QUESTION_POOL: [&str; 10] = [
    "Co czujesz, gdy ktoś zabierze ci zabawkę?",
    "Jak możesz pomóc smutnemu koledze?",
    "Co robi twoje ciało, kiedy się boisz?",
    "Kiedy ostatnio bardzo się cieszyłeś?",
    "Jak możesz uspokoić potwora złości?",
    "Komu mówisz, gdy coś cię martwi?",
    "Jakiego koloru jest radość?",
    "Co możesz powiedzieć, gdy kogoś przeprosisz?",
    "Jak wygląda zdziwiona buzia?",
    "Co pomaga ci zasnąć, gdy się denerwujesz?",
];

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("cannot read fixtures")]
    Read(#[from] std::io::Error),
    #[error("malformed fixtures: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid fixtures: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Seed data for both pages.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub cards: Vec<Card>,
    pub quizzes: Vec<Quiz>,
}

impl Dataset {
    pub fn from_json(json: &str) -> Result<Dataset, FixtureError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        let problems = dataset.problems();
        if problems.is_empty() {
            Ok(dataset)
        } else {
            Err(FixtureError::Invalid(problems))
        }
    }

    pub fn load(path: &Path) -> Result<Dataset, FixtureError> {
        info!("[Setup] Reading fixtures from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, FixtureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Lists everything wrong with the dataset. Empty means valid.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let mut seen = HashSet::new();
        for (idx, card) in self.cards.iter().enumerate() {
            if card.id.is_empty() {
                problems.push(format!("card #{} has an empty id", idx + 1));
            } else if !seen.insert(card.id.as_str()) {
                problems.push(format!("card id `{}` is used more than once", card.id));
            }
            if card.title.trim().is_empty() {
                problems.push(format!("card #{} has an empty title", idx + 1));
            }
        }

        let mut seen = HashSet::new();
        for (idx, quiz) in self.quizzes.iter().enumerate() {
            if quiz.id.is_empty() {
                problems.push(format!("quiz #{} has an empty id", idx + 1));
            } else if !seen.insert(quiz.id.as_str()) {
                problems.push(format!("quiz id `{}` is used more than once", quiz.id));
            }
            if quiz.title.trim().is_empty() {
                problems.push(format!("quiz #{} has an empty title", idx + 1));
            }
        }

        problems
    }
}

/// Builds the built-in dataset. Question lists are drawn from `seed`, so the
/// same seed always gives the same quizzes.
pub fn seeded(seed: u64) -> Dataset {
    let now = Instant::now();
    let mut rng = StdRng::seed_from_u64(seed);

    let cards = CARDS
        .iter()
        .map(|(id, title, description, hint)| Card {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image_url: format!("https://placehold.co/320x240.png?text={}", id),
            image_hint: hint.to_string(),
        })
        .collect();

    let quizzes = QUIZZES
        .iter()
        .map(|(id, title, status, created_at)| {
            let count = rng.random_range(MIN_QUESTIONS..=MAX_QUESTIONS);
            let mut pool = QUESTION_POOL.to_vec();
            pool.shuffle(&mut rng);
            Quiz {
                id: id.to_string(),
                title: title.to_string(),
                questions: pool.into_iter().take(count).map(String::from).collect(),
                status: *status,
                created_at: created_at.to_string(),
            }
        })
        .collect();

    debug!(
        "[Setup] Generated fixtures (seed {}) in {} ms.",
        seed,
        now.elapsed().as_millis()
    );
    Dataset { cards, quizzes }
}
