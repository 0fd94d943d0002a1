use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::AppError;
use crate::vocab::{EntryId, VocabEntry};

/// Number of options shown per question: the answer plus two distractors.
pub const CHOICE_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    pub id: EntryId,
    pub image_link: String,
    pub label: String,
    pub translation: String,
}

impl From<&VocabEntry> for Choice {
    fn from(entry: &VocabEntry) -> Self {
        Self {
            id: entry.id.clone(),
            image_link: entry.image_link.clone(),
            label: entry.word.clone(),
            translation: entry.translation.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizQuestion {
    pub id: EntryId,
    /// The word being learned, i.e. the translation spoken in `audio_link`.
    pub word: String,
    pub audio_link: String,
    pub choices: Vec<Choice>,
    pub correct_index: usize,
}

impl QuizQuestion {
    pub fn correct_choice(&self) -> Option<&Choice> {
        self.choices.get(self.correct_index)
    }
}

/// Keeps the first entry for every id.
fn distinct_by_id(pool: &[VocabEntry]) -> Vec<&VocabEntry> {
    let mut seen = HashSet::new();
    pool.iter().filter(|e| seen.insert(&e.id)).collect()
}

/// Builds one question out of `pool`.
///
/// The answer is drawn uniformly from the pool and the distractors uniformly
/// from the rest, without replacement. The answer is then placed at a uniform
/// slot among the shuffled distractors, so `correct_index` is known by
/// construction and never depends on comparing image links.
pub fn build_question<R: Rng + ?Sized>(
    pool: &[VocabEntry],
    rng: &mut R,
) -> Result<QuizQuestion, AppError> {
    let pool = distinct_by_id(pool);
    if pool.len() < CHOICE_COUNT {
        return Err(AppError::InsufficientData {
            available: pool.len(),
            required: CHOICE_COUNT,
        });
    }

    let answer_pos = rng.gen_range(0..pool.len());
    let answer = pool[answer_pos];

    let others: Vec<&VocabEntry> = pool
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != answer_pos)
        .map(|(_, e)| *e)
        .collect();

    let mut picked: Vec<&VocabEntry> = others
        .choose_multiple(rng, CHOICE_COUNT - 1)
        .copied()
        .collect();
    picked.shuffle(rng);

    let correct_index = rng.gen_range(0..CHOICE_COUNT);
    picked.insert(correct_index, answer);

    Ok(QuizQuestion {
        id: answer.id.clone(),
        word: answer.translation.clone(),
        audio_link: answer.audio_link.clone(),
        choices: picked.into_iter().map(Choice::from).collect(),
        correct_index,
    })
}
