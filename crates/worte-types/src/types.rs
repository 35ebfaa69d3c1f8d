use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    UiEvent(UiEvent),
    ShowCard(CardView),
    Notice(Notice),
    BackendReady,
}

/// Input coming from the shell
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Advance without coordinates (keyboard, terminal)
    Advance,
    /// Pointer click, `y` measured from the top of the window
    Click { y: f64 },
    Search(String),
    OpenFile(PathBuf),
    SelectLanguage(String),
    Speak,
    Close,
}

/// Everything the shell needs to draw the current card
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardView {
    pub text: String,
    pub total: usize,
    /// 1-based, 0 when the list is empty
    pub position: usize,
    /// Speech button visibility
    pub speakable: bool,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// Immutable hand-off to the speech worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub text: String,
    pub lang: String,
}
