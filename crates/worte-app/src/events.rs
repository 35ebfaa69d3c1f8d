use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use worte_core::{Session, Update};
use worte_speech::SpeechQueue;
use worte_types::{AppEvent, UiEvent};

pub mod publish;
pub mod speak;

use publish::publish_update;
use speak::handle_speak;

/// App's main loop. Sole owner of the session.
pub async fn event_loop(
    mut session: Session,
    initial: Vec<Update>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    speech: Option<SpeechQueue>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    if speech.is_none() {
        session.set_muted(true);
    }

    for update in &initial {
        if let Some(notice) = update.notice() {
            app_to_ui_tx.send(AppEvent::Notice(notice)).await?;
        }
    }
    app_to_ui_tx.send(AppEvent::ShowCard(session.view())).await?;
    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        if !handle_events(&mut session, speech.as_ref(), &app_to_ui_tx, event).await? {
            break;
        }
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

/// Returns false once the shell asked to close
async fn handle_events(
    session: &mut Session,
    speech: Option<&SpeechQueue>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    let AppEvent::UiEvent(event) = event else {
        // Backend-to-shell events only
        return Ok(true);
    };

    let update = match event {
        UiEvent::Advance => session.advance(),
        UiEvent::Click { y } => session.click(y),
        UiEvent::Search(term) => session.search(&term),
        UiEvent::OpenFile(path) => {
            tracing::info!("Opening {}", path.display());
            session.load_words(path)
        }
        UiEvent::SelectLanguage(code) => session.select_language(&code),
        UiEvent::Speak => {
            handle_speak(session, speech);
            return Ok(true);
        }
        UiEvent::Close => {
            tracing::info!("Close requested");
            return Ok(false);
        }
    };

    publish_update(&update, app_to_ui_tx).await?;
    Ok(true)
}
