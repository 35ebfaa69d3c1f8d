use std::path::{Path, PathBuf};
use std::time::Instant;

use worte_config::{Config, ConfigStore, Language};
use worte_types::{CardView, Notice, SpeechRequest};

use crate::debounce::Debounce;
use crate::reveal::{RevealLevel, RevealState, Step};
use crate::search;
use crate::word::WordList;

/// Why an input left the session untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    EmptyList,
    Debounced,
    MenuStrip,
    BlankTerm,
}

/// What an operation did to the session
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Revealed(RevealLevel),
    NextWord(usize),
    Jumped(usize),
    NotFound(String),
    Loaded { path: PathBuf, count: usize },
    LoadFailed(String),
    LanguageChanged(String),
    UnsupportedLanguage(String),
    Ignored(Ignored),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub change: Change,
    pub view: CardView,
}

impl Update {
    /// Message the shell should surface next to the card, if any
    pub fn notice(&self) -> Option<Notice> {
        match &self.change {
            Change::NotFound(_) => Some(Notice::Info("Keine Ergebnisse gefunden".to_string())),
            Change::LoadFailed(msg) => Some(Notice::Error(msg.clone())),
            Change::UnsupportedLanguage(code) => {
                Some(Notice::Error(format!("Unbekannte Sprache: {code}")))
            }
            Change::LanguageChanged(code) => {
                let name = Language::find(code).map_or(code.as_str(), |l| l.name);
                Some(Notice::Info(format!("Sprache: {name}")))
            }
            _ => None,
        }
    }

    /// Whether the visible card differs from before the operation
    pub fn redraw(&self) -> bool {
        !matches!(
            self.change,
            Change::Ignored(_) | Change::NotFound(_) | Change::UnsupportedLanguage(_)
        )
    }
}

/// One running flashcard session: word list, reveal state and the persisted
/// config. Owned by a single event loop.
pub struct Session {
    config: Config,
    store: ConfigStore,
    words: WordList,
    reveal: RevealState,
    debounce: Debounce,
    muted: bool,
    /// Shown instead of a card while the list is empty
    message: Option<String>,
}

impl Session {
    pub fn new(config: Config, store: ConfigStore) -> Self {
        let debounce = Debounce::new(config.ui.click_delay());
        Self {
            config,
            store,
            words: WordList::default(),
            reveal: RevealState::default(),
            debounce,
            muted: false,
            message: None,
        }
    }

    /// Build a session and load the configured word file
    pub fn start(config: Config, store: ConfigStore) -> (Self, Update) {
        let mut session = Self::new(config, store);
        let path = session.config.current_file.clone();
        let change = session.load(&path, false);
        let update = session.update(change);
        (session, update)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn cursor(&self) -> usize {
        self.reveal.cursor()
    }

    pub fn level(&self) -> RevealLevel {
        self.reveal.level()
    }

    /// Disable speech for this run without touching the stored config
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Replace the word list with the contents of `path`
    pub fn load_words(&mut self, path: impl AsRef<Path>) -> Update {
        let change = self.load(path.as_ref(), true);
        self.update(change)
    }

    /// Replace the word list with an in-memory one, keeping its order
    pub fn replace_words(&mut self, words: WordList) -> Update {
        self.words = words;
        self.reveal.reset();
        self.message = None;
        let change = Change::Loaded {
            path: self.config.current_file.clone(),
            count: self.words.len(),
        };
        self.update(change)
    }

    fn load(&mut self, path: &Path, persist: bool) -> Change {
        match WordList::load(path) {
            Ok(words) => {
                let count = words.len();
                self.words = words;
                self.reveal.reset();
                self.message = None;

                if persist {
                    self.config.current_file = path.to_path_buf();
                    self.persist();
                }

                Change::Loaded {
                    path: path.to_path_buf(),
                    count,
                }
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {e}", e.path().display());
                self.words = WordList::default();
                self.reveal.reset();
                let msg = e.to_string();
                self.message = Some(msg.clone());
                Change::LoadFailed(msg)
            }
        }
    }

    pub fn advance(&mut self) -> Update {
        self.advance_at(Instant::now())
    }

    /// Advance the reveal cycle as if the input arrived at `now`
    pub fn advance_at(&mut self, now: Instant) -> Update {
        let change = self.step(now);
        self.update(change)
    }

    fn step(&mut self, now: Instant) -> Change {
        if self.words.is_empty() {
            return Change::Ignored(Ignored::EmptyList);
        }
        if !self.debounce.accept(now) {
            tracing::trace!("Dropping advance inside debounce window");
            return Change::Ignored(Ignored::Debounced);
        }

        match self.reveal.advance(self.words.len()) {
            Step::Revealed(level) => Change::Revealed(level),
            Step::NextWord(index) => Change::NextWord(index),
        }
    }

    pub fn click(&mut self, y: f64) -> Update {
        self.click_at(y, Instant::now())
    }

    /// Pointer click; the strip at the top belongs to the menu bar
    pub fn click_at(&mut self, y: f64, now: Instant) -> Update {
        if y < self.config.ui.menu_strip_height {
            return self.update(Change::Ignored(Ignored::MenuStrip));
        }
        self.advance_at(now)
    }

    /// Jump to the first record whose word or translation equals `term`
    pub fn search(&mut self, term: &str) -> Update {
        let change = if self.words.is_empty() {
            Change::Ignored(Ignored::EmptyList)
        } else if search::normalize(term).is_empty() {
            Change::Ignored(Ignored::BlankTerm)
        } else {
            match self.words.find(term) {
                Some(index) => {
                    tracing::debug!("Search '{term}' matched index {index}");
                    self.reveal.jump(index);
                    Change::Jumped(index)
                }
                None => {
                    tracing::debug!("Search '{term}' found nothing");
                    Change::NotFound(term.trim().to_string())
                }
            }
        };
        self.update(change)
    }

    pub fn select_language(&mut self, code: &str) -> Update {
        let change = match Language::find(code) {
            Some(lang) => {
                self.config.lang = lang.code.to_string();
                self.persist();
                tracing::info!("Language set to {}", lang.code);
                Change::LanguageChanged(lang.code.to_string())
            }
            None => Change::UnsupportedLanguage(code.trim().to_string()),
        };
        self.update(change)
    }

    /// Speech request for the current word. Only available while the card
    /// shows the bare word.
    pub fn speak_current(&self) -> Option<SpeechRequest> {
        if !self.speech_available() {
            return None;
        }

        let record = self.words.get(self.reveal.cursor())?;
        Some(SpeechRequest {
            text: record.word.clone(),
            lang: self.config.lang.clone(),
        })
    }

    fn speech_available(&self) -> bool {
        !self.muted
            && self.config.speech.enabled
            && !self.words.is_empty()
            && self.reveal.level() == RevealLevel::Compact
    }

    pub fn view(&self) -> CardView {
        let language = self.config.lang.clone();

        match self.words.get(self.reveal.cursor()) {
            Some(record) => CardView {
                text: self.reveal.render(record),
                total: self.words.len(),
                position: self.reveal.cursor() + 1,
                speakable: self.speech_available(),
                language,
            },
            None => CardView {
                text: self.message.clone().unwrap_or_default(),
                language,
                ..CardView::default()
            },
        }
    }

    fn update(&self, change: Change) -> Update {
        Update {
            change,
            view: self.view(),
        }
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.config) {
            tracing::warn!("Failed to save config: {e:#}");
        }
    }
}
