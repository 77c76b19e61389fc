//! Word lists for the puzzle
//!
//! The [`WordBank`] holds the answer list and the accepted-guess list. Loading
//! fails soft: any problem with the configured lists falls back to the
//! built-in [`DEFAULT_WORDS`].

mod defaults;
pub mod loader;

pub use defaults::DEFAULT_WORDS;

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Answer and accepted-guess lists
///
/// Never empty: constructors substitute the built-in list when needed.
#[derive(Debug, Clone)]
pub struct WordBank {
    answers: Vec<Word>,
    guesses: Vec<Word>,
    accepted: FxHashSet<String>,
}

/// Result of loading a bank from external sources
#[derive(Debug, Clone)]
pub struct BankLoad {
    pub bank: WordBank,
    /// True when a source could not be read and the built-in list was used
    pub used_fallback: bool,
}

impl WordBank {
    /// Build a bank from already-parsed lists
    ///
    /// An empty answer list is replaced by the built-in words; an empty guess
    /// list falls back to the answers. Accepted guesses are the union of both.
    #[must_use]
    pub fn new(answers: Vec<Word>, guesses: Vec<Word>) -> Self {
        let answers = if answers.is_empty() {
            debug!("answer list empty, using built-in words");
            loader::words_from_slice(DEFAULT_WORDS)
        } else {
            answers
        };
        let guesses = if guesses.is_empty() {
            answers.clone()
        } else {
            guesses
        };

        let accepted = answers
            .iter()
            .chain(&guesses)
            .map(|w| w.text().to_string())
            .collect();

        Self {
            answers,
            guesses,
            accepted,
        }
    }

    /// Bank made only of the built-in list
    #[must_use]
    pub fn builtin() -> Self {
        let words = loader::words_from_slice(DEFAULT_WORDS);
        Self::new(words.clone(), words)
    }

    /// Build a bank from loaded lists
    ///
    /// If either source failed to load, both lists become the built-in words.
    #[must_use]
    pub fn from_sources(
        answers: io::Result<Vec<Word>>,
        guesses: io::Result<Vec<Word>>,
    ) -> BankLoad {
        match (answers, guesses) {
            (Ok(answers), Ok(guesses)) => BankLoad {
                bank: Self::new(answers, guesses),
                used_fallback: false,
            },
            (answers, guesses) => {
                if let Err(e) = answers.as_ref().and(guesses.as_ref()) {
                    warn!("word list load failed, using built-in list: {e}");
                }
                BankLoad {
                    bank: Self::builtin(),
                    used_fallback: true,
                }
            }
        }
    }

    /// Load the bank from optional file paths
    ///
    /// With no paths configured the built-in list is used without a warning.
    #[must_use]
    pub fn load(answers: Option<&Path>, guesses: Option<&Path>) -> BankLoad {
        let Some(answers_path) = answers else {
            return BankLoad {
                bank: Self::builtin(),
                used_fallback: false,
            };
        };

        let answer_words = loader::load_from_file(answers_path);
        let guess_words = match guesses {
            Some(path) => loader::load_from_file(path),
            // An empty guess list means "same as the answers"
            None => Ok(Vec::new()),
        };

        let load = Self::from_sources(answer_words, guess_words);
        debug!(
            answers = load.bank.answers.len(),
            guesses = load.bank.guesses.len(),
            fallback = load.used_fallback,
            "word bank loaded"
        );
        load
    }

    /// Candidate target words
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Guess list as loaded; see [`Self::is_accepted`] for the full accepted set
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Whether a word may be submitted as a guess
    #[must_use]
    pub fn is_accepted(&self, word: &Word) -> bool {
        self.accepted.contains(word.text())
    }

    /// Pick a uniformly random answer
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.answers[rng.random_range(0..self.answers.len())]
    }

    /// Pick an answer from a seed (`seed mod len`)
    ///
    /// Stable for a given seed and answer ordering, which is what makes the
    /// daily puzzle identical for everyone on the same day.
    #[must_use]
    pub fn pick_deterministic(&self, seed: u64) -> &Word {
        let index = seed % self.answers.len() as u64;
        &self.answers[index as usize]
    }

    /// Pick `n` distinct answers
    ///
    /// When `n` exceeds the answer count, the remainder is padded with random
    /// picks that may repeat.
    pub fn pick_unique_set<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Word> {
        let unique = n.min(self.answers.len());
        let mut picked: Vec<Word> = rand::seq::index::sample(rng, self.answers.len(), unique)
            .into_iter()
            .map(|i| self.answers[i].clone())
            .collect();

        while picked.len() < n {
            picked.push(self.pick_random(rng).clone());
        }
        picked
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    fn words(list: &[&str]) -> Vec<Word> {
        loader::words_from_slice(list)
    }

    #[test]
    fn default_words_are_valid() {
        assert_eq!(DEFAULT_WORDS.len(), 72);
        for &word in DEFAULT_WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
        let unique: FxHashSet<_> = DEFAULT_WORDS.iter().collect();
        assert_eq!(unique.len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn empty_answers_fall_back_to_builtin() {
        let bank = WordBank::new(Vec::new(), Vec::new());
        assert_eq!(bank.answers().len(), DEFAULT_WORDS.len());
        assert_eq!(bank.guesses().len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn empty_guesses_fall_back_to_answers() {
        let bank = WordBank::new(words(&["crane", "slate"]), Vec::new());
        assert_eq!(bank.guesses(), bank.answers());
        assert!(bank.is_accepted(&Word::new("slate").unwrap()));
        assert!(!bank.is_accepted(&Word::new("about").unwrap()));
    }

    #[test]
    fn accepted_is_union_of_lists() {
        let bank = WordBank::new(words(&["crane"]), words(&["slate"]));
        assert!(bank.is_accepted(&Word::new("crane").unwrap()));
        assert!(bank.is_accepted(&Word::new("slate").unwrap()));
    }

    #[test]
    fn failed_source_uses_builtin_for_both() {
        let missing = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let load = WordBank::from_sources(Ok(words(&["crane", "slate"])), missing);
        assert!(load.used_fallback);
        assert_eq!(load.bank.answers().len(), DEFAULT_WORDS.len());
        assert_eq!(load.bank.guesses().len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn sources_filtered_to_empty_use_builtin() {
        let filtered = loader::parse_word_list("x\ny\n");
        let load = WordBank::from_sources(Ok(filtered), Ok(Vec::new()));
        assert!(!load.used_fallback);
        assert_eq!(load.bank.answers().len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn load_from_paths() {
        let mut answers = tempfile::NamedTempFile::new().unwrap();
        writeln!(answers, "crane\nslate").unwrap();
        let mut guesses = tempfile::NamedTempFile::new().unwrap();
        writeln!(guesses, "about\nxylyl\n").unwrap();

        let load = WordBank::load(Some(answers.path()), Some(guesses.path()));
        assert!(!load.used_fallback);
        assert_eq!(load.bank.answers().len(), 2);
        assert!(load.bank.is_accepted(&Word::new("xylyl").unwrap()));
        assert!(load.bank.is_accepted(&Word::new("crane").unwrap()));
    }

    #[test]
    fn load_missing_path_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let load = WordBank::load(Some(&dir.path().join("nope.txt")), None);
        assert!(load.used_fallback);
    }

    #[test]
    fn load_without_paths_is_builtin() {
        let load = WordBank::load(None, None);
        assert!(!load.used_fallback);
        assert_eq!(load.bank.answers().len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn deterministic_pick_is_seed_mod_len() {
        let bank = WordBank::new(words(&["crane", "slate", "about"]), Vec::new());
        assert_eq!(bank.pick_deterministic(0).text(), "crane");
        assert_eq!(bank.pick_deterministic(4).text(), "slate");
        assert_eq!(bank.pick_deterministic(3_000_000_002).text(), "about");
        assert_eq!(bank.pick_deterministic(7), bank.pick_deterministic(7));
    }

    #[test]
    fn random_pick_comes_from_answers() {
        let bank = WordBank::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = bank.pick_random(&mut rng);
            assert!(bank.answers().contains(word));
        }
    }

    #[test]
    fn unique_set_has_no_duplicates() {
        let bank = WordBank::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let set = bank.pick_unique_set(8, &mut rng);
        assert_eq!(set.len(), 8);
        let distinct: FxHashSet<_> = set.iter().map(Word::text).collect();
        assert_eq!(distinct.len(), 8);
    }

    #[test]
    fn unique_set_pads_when_bank_too_small() {
        let bank = WordBank::new(words(&["crane", "slate"]), Vec::new());
        let mut rng = StdRng::seed_from_u64(1);
        let set = bank.pick_unique_set(4, &mut rng);
        assert_eq!(set.len(), 4);
        assert_ne!(set[0], set[1]);
        assert!(set.iter().all(|w| bank.answers().contains(w)));
    }
}
