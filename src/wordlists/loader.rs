//! Word list loading utilities
//!
//! Parses line-delimited word lists from files or text, and converts the
//! built-in constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a line-delimited word list
///
/// Each line is trimmed and lowercased; anything that is not exactly five
/// letters `a-z` afterwards is dropped.
///
/// # Examples
/// ```
/// use wordgame::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("Crane\r\n  slate \nno\nsh0rt\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "crane");
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Load words from a file
///
/// Returns the valid words, skipping any invalid lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordgame::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordgame::wordlists::loader::words_from_slice;
/// use wordgame::wordlists::DEFAULT_WORDS;
///
/// let words = words_from_slice(DEFAULT_WORDS);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_trims_lowercases_and_filters() {
        let words = parse_word_list("  ABOUT\r\nheart\n\nbad-1\nlonger\n   \nzebra  ");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["about", "heart", "zebra"]);
    }

    #[test]
    fn parse_empty_text() {
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list("\n\n\n").is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate\nnope").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt")).is_err());
    }
}
