use std::io::BufRead;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use worte_types::{AppEvent, UiEvent};

pub mod command;
pub mod render;

pub use command::{Command, parse_command};

/// Terminal shell on stdin/stdout
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    println!("{}  (:help)", render::TITLE);
    shell_loop(spawn_stdin_reader(), app_to_ui_rx, ui_to_app_tx, cancel).await
}

/// Stdin is read on a plain thread so a pending read never holds up runtime
/// shutdown.
fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::bounded(16);

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
        tracing::debug!("[UI] stdin closed");
    });

    rx.to_async()
}

/// Shell loop over any line source. Ends on `:quit`, end of input,
/// cancellation or a close from the backend.
pub async fn shell_loop(
    input_rx: AsyncReceiver<String>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut language = String::new();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else { break };
                if !handle_app_event(event, &mut language) {
                    break;
                }
            }
            line = input_rx.recv() => {
                let Ok(line) = line else {
                    ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await.ok();
                    break;
                };

                match parse_command(&line) {
                    Command::Event(event) => {
                        let close = event == UiEvent::Close;
                        ui_to_app_tx.send(AppEvent::UiEvent(event)).await?;
                        if close {
                            break;
                        }
                    }
                    Command::Help => println!("{}", render::HELP),
                    Command::Languages => println!("{}", render::render_languages(&language)),
                    Command::Invalid(msg) => println!("! {msg}"),
                }
            }
        }
    }

    tracing::info!("[UI] Shell closed");
    Ok(())
}

/// Returns false when the shell should exit
fn handle_app_event(event: AppEvent, language: &mut String) -> bool {
    match event {
        AppEvent::ShowCard(view) => {
            language.clone_from(&view.language);
            println!("{}", render::render_card(&view));
        }
        AppEvent::Notice(notice) => {
            println!("{}", render::render_notice(&notice));
        }
        AppEvent::BackendReady => {
            tracing::debug!("[UI] Backend ready");
        }
        AppEvent::UiEvent(UiEvent::Close) => return false,
        _ => {}
    }
    true
}
