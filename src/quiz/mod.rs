pub mod question;

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::AppError;
use crate::vocab::VocabularyStore;

pub use question::{build_question, Choice, QuizQuestion, CHOICE_COUNT};

/// Serves quiz questions from whatever vocabulary store it is given.
pub struct QuizService {
    store: Arc<dyn VocabularyStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn VocabularyStore>) -> Self {
        Self { store }
    }

    pub async fn random_question(&self) -> Result<QuizQuestion, AppError> {
        // ThreadRng is !Send and cannot be held across the store read.
        let mut rng = StdRng::from_entropy();
        self.random_question_with(&mut rng).await
    }

    pub async fn random_question_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<QuizQuestion, AppError> {
        let pool = self.store.list_all().await?;
        tracing::debug!("Building question from {} entries", pool.len());
        build_question(&pool, rng)
    }
}

/// The client echoes `correct_index` back, so no state is consulted here.
/// `word_id` is only recorded in the log.
pub fn check_answer(word_id: &str, choice_index: usize, correct_index: usize) -> bool {
    let correct = choice_index == correct_index;
    tracing::info!(
        word_id,
        choice_index,
        correct_index,
        correct,
        "Answer checked"
    );
    correct
}

/// Parses a choice index taken from a request path.
pub fn parse_index(name: &str, raw: &str) -> Result<usize, AppError> {
    raw.parse::<usize>().map_err(|_| {
        AppError::InvalidArgument(format!(
            "{} must be a non-negative integer, got '{}'",
            name, raw
        ))
    })
}
