use linguazoo_types::{AnimalCollection, AnimalRecord, Language, canonical_key};
use rand::Rng;

/// One hangman round: a word, an optional clue, and the letters guessed
/// so far.
#[derive(Debug, Clone)]
pub struct GameRound {
    word: String,
    clue: String,
    correct: Vec<char>,
    wrong: Vec<char>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Hit,
    Miss,
    /// Letter was already guessed; not re-recorded.
    Repeat,
}

impl GameRound {
    pub fn new(word: &str, clue: &str) -> Self {
        Self {
            word: canonical_key(word),
            clue: clue.trim().to_string(),
            correct: Vec::new(),
            wrong: Vec::new(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn clue(&self) -> &str {
        &self.clue
    }

    pub fn wrong_guesses(&self) -> &[char] {
        &self.wrong
    }

    pub fn guess(&mut self, letter: char) -> Guess {
        let letter = letter.to_ascii_uppercase();

        if self.correct.contains(&letter) || self.wrong.contains(&letter) {
            return Guess::Repeat;
        }

        if self.word.contains(letter) {
            self.correct.push(letter);
            Guess::Hit
        } else {
            self.wrong.push(letter);
            Guess::Miss
        }
    }

    /// The word with unguessed letters masked. Non-letter characters
    /// (spaces in multi-word names) are always shown.
    pub fn masked(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if !c.is_alphabetic() || self.correct.contains(&c) {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    pub fn is_won(&self) -> bool {
        self.word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| self.correct.contains(&c))
    }

    pub fn is_lost(&self, max_wrong: usize) -> bool {
        self.wrong.len() >= max_wrong
    }
}

/// Pick a random animal for the next round, never repeating the previous
/// pick when the collection has more than one record.
pub fn pick_random<'a>(
    collection: &'a AnimalCollection,
    last: Option<&AnimalRecord>,
) -> Option<&'a AnimalRecord> {
    let records = collection.records();

    match records.len() {
        0 => None,
        1 => Some(&records[0]),
        n => {
            let mut rng = rand::thread_rng();
            loop {
                let candidate = &records[rng.gen_range(0..n)];
                let repeated = last.is_some_and(|prev| {
                    canonical_key(&candidate.name_id) == canonical_key(&prev.name_id)
                });
                if !repeated {
                    return Some(candidate);
                }
            }
        }
    }
}

/// Word to guess for a record under the active language toggle.
pub fn word_for(record: &AnimalRecord, language: Language) -> &str {
    record.name_in(language)
}
