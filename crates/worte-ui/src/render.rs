use worte_config::LANGUAGES;
use worte_types::{CardView, Notice};

pub const TITLE: &str = "Worte lernen";

pub const HELP: &str = "\
Enter           nächste Stufe / nächstes Wort
/WORT, WORT     Übersetzung suchen
:open DATEI     Datei öffnen
:lang [CODE]    Sprache anzeigen / wählen
:speak, :s      Wort vorlesen
:help           diese Hilfe
:quit           Beenden";

pub fn render_card(view: &CardView) -> String {
    let mut out = format!(
        "Gesamt: {}    Aktuell: {}    [{}]\n\n",
        view.total, view.position, view.language
    );

    for line in view.text.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
    }

    if view.speakable {
        out.push_str("\n🔊 Wort vorlesen (:s)\n");
    }
    out
}

pub fn render_notice(notice: &Notice) -> String {
    match notice {
        Notice::Info(msg) => format!("* {msg}"),
        Notice::Error(msg) => format!("! {msg}"),
    }
}

/// Language table with the active one marked
pub fn render_languages(active: &str) -> String {
    LANGUAGES
        .iter()
        .map(|lang| {
            let mark = if lang.code == active { '*' } else { ' ' };
            format!("{mark} {}  {}", lang.code, lang.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
