use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::LoadError;
use crate::search;

const FIELD_SEPARATOR: char = ';';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordRecord {
    pub word: String,
    pub pronunciation: String,
    /// Empty when the line has only two fields
    pub translation: String,
}

impl WordRecord {
    /// Parse `word;pronunciation[;translation]`. Lines with fewer than two
    /// fields yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.trim().split(FIELD_SEPARATOR);
        let word = fields.next()?;
        let pronunciation = fields.next()?;
        let translation = fields.next().unwrap_or_default();

        Some(Self {
            word: word.to_string(),
            pronunciation: pronunciation.to_string(),
            translation: translation.to_string(),
        })
    }
}

/// Shuffled word list. The order is fixed once loaded.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    records: Vec<WordRecord>,
}

impl WordList {
    /// Parse every well-formed line of `content`, dropping the rest
    pub fn parse(content: &str) -> Self {
        let records = content.lines().filter_map(WordRecord::parse_line).collect();
        Self { records }
    }

    /// Load and shuffle a word file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        Self::load_with_rng(path, &mut rand::rng())
    }

    pub fn load_with_rng<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> Result<Self, LoadError> {
        tracing::info!("Loading words from {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let mut list = Self::parse(&content);
        if list.is_empty() {
            return Err(LoadError::Empty(path.to_path_buf()));
        }

        list.shuffle(rng);
        tracing::info!("Loaded {} words", list.len());
        Ok(list)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.records.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WordRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordRecord> {
        self.records.iter()
    }

    /// Index of the first record whose word or translation equals `term`,
    /// ignoring case
    pub fn find(&self, term: &str) -> Option<usize> {
        search::find(&self.records, term)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn record(word: &str, pronunciation: &str, translation: &str) -> WordRecord {
        WordRecord {
            word: word.to_string(),
            pronunciation: pronunciation.to_string(),
            translation: translation.to_string(),
        }
    }

    #[test]
    fn parses_field_counts() {
        assert_eq!(WordRecord::parse_line("Hund"), None);
        assert_eq!(WordRecord::parse_line(""), None);
        assert_eq!(
            WordRecord::parse_line("Hund;hunt"),
            Some(record("Hund", "hunt", ""))
        );
        assert_eq!(
            WordRecord::parse_line("Hund;hunt;dog"),
            Some(record("Hund", "hunt", "dog"))
        );
        assert_eq!(
            WordRecord::parse_line("Hund;hunt;dog;extra"),
            Some(record("Hund", "hunt", "dog"))
        );
    }

    #[test]
    fn trims_line_ends() {
        assert_eq!(
            WordRecord::parse_line("  Katze;kat-se;cat\r"),
            Some(record("Katze", "kat-se", "cat"))
        );
    }

    #[test]
    fn parse_skips_malformed_lines() {
        let list = WordList::parse("Hund;hunt;dog\nnonsense\n\nKatze;kat-se\n");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1), Some(&record("Katze", "kat-se", "")));
    }

    #[test]
    fn load_contains_every_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "Hund;hunt;dog\nKatze;kat-se;cat\n").unwrap();

        let list = WordList::load(&path).unwrap();
        let got: HashSet<_> = list.iter().cloned().collect();
        let want: HashSet<_> = [
            record("Hund", "hunt", "dog"),
            record("Katze", "kat-se", "cat"),
        ]
        .into_iter()
        .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn seeded_shuffle_is_a_permutation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let content: String = (0..50).map(|i| format!("w{i};p{i};t{i}\n")).collect();
        fs::write(&path, &content).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let list = WordList::load_with_rng(&path, &mut rng).unwrap();

        let mut words: Vec<_> = list.iter().map(|r| r.word.clone()).collect();
        words.sort();
        let mut want: Vec<_> = (0..50).map(|i| format!("w{i}")).collect();
        want.sort();
        assert_eq!(words, want);
    }

    fn numbered_file(dir: &Path, n: usize) -> std::path::PathBuf {
        let path = dir.join("words.txt");
        let content: String = (0..n).map(|i| format!("w{i};p{i};t{i}\n")).collect();
        fs::write(&path, content).unwrap();
        path
    }

    fn load_words(path: &Path, seed: u64) -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        let list = WordList::load_with_rng(path, &mut rng).unwrap();
        list.iter().map(|r| r.word.clone()).collect()
    }

    #[test]
    fn load_does_not_keep_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = numbered_file(dir.path(), 50);

        let file_order: Vec<_> = (0..50).map(|i| format!("w{i}")).collect();
        assert_ne!(load_words(&path, 7), file_order);
    }

    #[test]
    fn different_seeds_give_different_orders() {
        let dir = tempfile::tempdir().unwrap();
        let path = numbered_file(dir.path(), 50);

        assert_ne!(load_words(&path, 7), load_words(&path, 8));
        assert_eq!(load_words(&path, 7), load_words(&path, 7));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = WordList::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn file_without_records_is_empty_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "just\nsingle\nfields\n").unwrap();

        let err = WordList::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Empty(_)));
        assert_eq!(err.to_string(), "Error: No words found in file");
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, [0xff, 0xfe, b';', b'x']).unwrap();

        let err = WordList::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
