use unicode_normalization::UnicodeNormalization;

use crate::word::WordRecord;

/// Canonical form used on both sides of a comparison: trimmed, NFKC, lowercase
pub fn normalize(text: &str) -> String {
    text.trim().nfkc().collect::<String>().to_lowercase()
}

/// Linear scan in list order over `word` and `translation`
pub fn find(records: &[WordRecord], term: &str) -> Option<usize> {
    let term = normalize(term);
    if term.is_empty() {
        return None;
    }

    records
        .iter()
        .position(|r| normalize(&r.word) == term || normalize(&r.translation) == term)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<WordRecord> {
        [
            ("Hund", "hunt", "dog"),
            ("Katze", "kat-se", "cat"),
            ("Kater", "ka-ter", "cat"),
            ("Straße", "shtra-se", ""),
        ]
        .into_iter()
        .map(|(w, p, t)| WordRecord {
            word: w.to_string(),
            pronunciation: p.to_string(),
            translation: t.to_string(),
        })
        .collect()
    }

    #[test]
    fn matches_word_or_translation() {
        assert_eq!(find(&records(), "hund"), Some(0));
        assert_eq!(find(&records(), "DOG"), Some(0));
        assert_eq!(find(&records(), "  katze "), Some(1));
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(find(&records(), "cat"), Some(1));
    }

    #[test]
    fn exact_not_substring() {
        assert_eq!(find(&records(), "kat"), None);
        assert_eq!(find(&records(), "zzz"), None);
    }

    #[test]
    fn blank_term_never_matches_empty_translation() {
        assert_eq!(find(&records(), ""), None);
        assert_eq!(find(&records(), "   "), None);
    }

    #[test]
    fn compares_non_ascii_case_insensitively() {
        assert_eq!(find(&records(), "STRAßE"), Some(3));
    }
}
