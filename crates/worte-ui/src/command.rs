use std::path::PathBuf;

use worte_types::UiEvent;

/// One line typed into the shell
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Forwarded to the backend
    Event(UiEvent),
    Help,
    Languages,
    Invalid(String),
}

/// Map a typed line onto a command.
///
/// An empty line advances the card, `/term` searches (the same as typing a
/// bare word), and `:name args` runs a named command.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();

    if line.is_empty() {
        return Command::Event(UiEvent::Advance);
    }

    if let Some(term) = line.strip_prefix('/') {
        return search(term);
    }

    let Some(rest) = line.strip_prefix(':') else {
        return search(line);
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "n" | "next" => Command::Event(UiEvent::Advance),
        "click" => match arg.parse::<f64>() {
            Ok(y) => Command::Event(UiEvent::Click { y }),
            Err(_) => Command::Invalid(format!("Ungültige Koordinate: {arg}")),
        },
        "f" | "find" | "search" => search(arg),
        "o" | "open" => {
            if arg.is_empty() {
                Command::Invalid("Dateiname fehlt".to_string())
            } else {
                Command::Event(UiEvent::OpenFile(PathBuf::from(arg)))
            }
        }
        "l" | "lang" => {
            if arg.is_empty() {
                Command::Languages
            } else {
                Command::Event(UiEvent::SelectLanguage(arg.to_string()))
            }
        }
        "s" | "speak" => Command::Event(UiEvent::Speak),
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Event(UiEvent::Close),
        other => Command::Invalid(format!("Unbekannter Befehl: :{other}")),
    }
}

fn search(term: &str) -> Command {
    let term = term.trim();
    if term.is_empty() {
        Command::Invalid("Suchbegriff fehlt".to_string())
    } else {
        Command::Event(UiEvent::Search(term.to_string()))
    }
}
