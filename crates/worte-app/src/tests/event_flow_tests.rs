use std::fs;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use worte_config::{Config, ConfigStore};
use worte_core::Session;
use worte_speech::SpeechQueue;
use worte_types::{AppEvent, CardView, Notice, SpeechRequest, UiEvent};

use crate::events::event_loop;

struct Harness {
    _dir: TempDir,
    ui_tx: AsyncSender<AppEvent>,
    app_rx: AsyncReceiver<AppEvent>,
    speech_rx: AsyncReceiver<SpeechRequest>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl Harness {
    fn start(words: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("words.txt");
        fs::write(&file, words).unwrap();

        let mut config = Config {
            current_file: file,
            ..Config::default()
        };
        config.ui.click_delay_ms = 0;
        let store = ConfigStore::new(dir.path().join("config.json"));
        let (session, startup) = Session::start(config, store);

        let (ui_tx, ui_rx) = kanal::unbounded_async();
        let (app_tx, app_rx) = kanal::unbounded_async();
        let (queue, speech_rx) = SpeechQueue::new(1);

        let handle = tokio::spawn(event_loop(
            session,
            vec![startup],
            ui_rx,
            app_tx,
            Some(queue),
            CancellationToken::new(),
        ));

        Self {
            _dir: dir,
            ui_tx,
            app_rx,
            speech_rx,
            handle,
        }
    }

    async fn send(&self, event: UiEvent) {
        self.ui_tx.send(AppEvent::UiEvent(event)).await.unwrap();
    }

    async fn next(&self) -> AppEvent {
        match timeout(Duration::from_secs(2), self.app_rx.recv()).await {
            Ok(Ok(event)) => event,
            Ok(Err(e)) => panic!("Channel error: {e}"),
            Err(_) => panic!("Timeout - event never arrived!"),
        }
    }

    async fn next_card(&self) -> CardView {
        match self.next().await {
            AppEvent::ShowCard(view) => view,
            other => panic!("Wrong event type: {other:?}"),
        }
    }

    /// Skip the startup card and ready marker
    async fn ready(&self) -> CardView {
        let view = self.next_card().await;
        assert!(matches!(self.next().await, AppEvent::BackendReady));
        view
    }
}

#[tokio::test]
async fn startup_shows_first_card() {
    let h = Harness::start("Hund;hunt;dog\n");
    let view = h.ready().await;

    assert_eq!(view.text, "Hund");
    assert_eq!(view.total, 1);
    assert_eq!(view.position, 1);
    assert!(view.speakable);
}

#[tokio::test]
async fn missing_file_shows_message_and_notice() {
    let h = Harness::start("Hund;hunt;dog\n");
    h.ready().await;

    h.send(UiEvent::OpenFile("/definitely/not/here.txt".into()))
        .await;
    let view = h.next_card().await;
    assert!(view.text.contains("not found"));
    assert!(matches!(h.next().await, AppEvent::Notice(Notice::Error(_))));
}

#[tokio::test]
async fn advances_reveal_fields() {
    let h = Harness::start("Hund;hunt;dog\n");
    h.ready().await;

    h.send(UiEvent::Advance).await;
    assert_eq!(h.next_card().await.text, "Hund\n\nhunt");
    h.send(UiEvent::Advance).await;
    assert_eq!(h.next_card().await.text, "Hund\n\nhunt\n\ndog");
    h.send(UiEvent::Advance).await;
    assert_eq!(h.next_card().await.text, "Hund");
}

#[tokio::test]
async fn search_miss_sends_only_a_notice() {
    let h = Harness::start("Hund;hunt;dog\n");
    h.ready().await;

    h.send(UiEvent::Search("zzz".to_string())).await;
    assert_eq!(
        h.next().await,
        AppEvent::Notice(Notice::Info("Keine Ergebnisse gefunden".to_string()))
    );
}

#[tokio::test]
async fn speak_only_at_compact_level() {
    let h = Harness::start("Hund;hunt;dog\n");
    h.ready().await;

    h.send(UiEvent::Advance).await;
    h.next_card().await;
    h.send(UiEvent::Speak).await;
    h.send(UiEvent::Advance).await;
    h.next_card().await;
    h.send(UiEvent::Advance).await;
    h.next_card().await;
    assert!(h.speech_rx.is_empty());

    h.send(UiEvent::Speak).await;
    let request = timeout(Duration::from_secs(2), h.speech_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        request,
        SpeechRequest {
            text: "Hund".to_string(),
            lang: "ru".to_string(),
        }
    );
}

#[tokio::test]
async fn close_ends_the_loop() {
    let h = Harness::start("Hund;hunt;dog\n");
    h.ready().await;

    h.send(UiEvent::Close).await;
    let result = timeout(Duration::from_secs(2), h.handle).await;
    assert!(matches!(result, Ok(Ok(Ok(())))));
}
