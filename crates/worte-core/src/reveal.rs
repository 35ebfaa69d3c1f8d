use crate::word::WordRecord;

/// How much of the current record is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealLevel {
    /// Word only
    #[default]
    Compact,
    /// Word and pronunciation
    Expanded,
    /// Word, pronunciation and translation
    Full,
}

impl RevealLevel {
    /// Next level, wrapping from `Full` back to `Compact`
    pub fn next(self) -> Self {
        match self {
            RevealLevel::Compact => RevealLevel::Expanded,
            RevealLevel::Expanded => RevealLevel::Full,
            RevealLevel::Full => RevealLevel::Compact,
        }
    }
}

/// Result of one advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Same word, one more field shown
    Revealed(RevealLevel),
    /// Moved on to the word at this index
    NextWord(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    cursor: usize,
    level: RevealLevel,
}

impl RevealState {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn level(&self) -> RevealLevel {
        self.level
    }

    /// Back to the first word, compact
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Show the word at `index`, compact
    pub fn jump(&mut self, index: usize) {
        self.cursor = index;
        self.level = RevealLevel::Compact;
    }

    /// Advance one step over a list of `len` records. `len` must be non-zero.
    pub fn advance(&mut self, len: usize) -> Step {
        debug_assert!(len > 0);

        self.level = self.level.next();
        if self.level == RevealLevel::Compact {
            self.cursor = (self.cursor + 1) % len;
            Step::NextWord(self.cursor)
        } else {
            Step::Revealed(self.level)
        }
    }

    /// Visible text for `record` at the current level
    pub fn render(&self, record: &WordRecord) -> String {
        match self.level {
            RevealLevel::Compact => record.word.clone(),
            RevealLevel::Expanded => format!("{}\n\n{}", record.word, record.pronunciation),
            RevealLevel::Full => format!(
                "{}\n\n{}\n\n{}",
                record.word, record.pronunciation, record.translation
            ),
        }
    }
}
