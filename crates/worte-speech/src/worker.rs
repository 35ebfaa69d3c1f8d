use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use worte_types::SpeechRequest;

use crate::SpeechPipeline;

/// Sending side of the speech worker. Requests are dropped while the queue
/// is full so speech never piles up behind a slow player.
#[derive(Clone)]
pub struct SpeechQueue {
    tx: AsyncSender<SpeechRequest>,
}

impl SpeechQueue {
    pub fn new(capacity: usize) -> (Self, AsyncReceiver<SpeechRequest>) {
        let (tx, rx) = kanal::bounded_async(capacity);
        (Self { tx }, rx)
    }

    /// Returns false when the request was dropped
    pub fn submit(&self, request: SpeechRequest) -> bool {
        match self.tx.try_send(request) {
            Ok(true) => true,
            Ok(false) => {
                tracing::debug!("Speech busy, dropping request");
                false
            }
            Err(e) => {
                tracing::warn!("Speech worker gone: {e}");
                false
            }
        }
    }
}

/// Speech worker. Runs one request at a time; failures are logged and the
/// loop keeps going.
pub async fn speech_loop(
    pipeline: SpeechPipeline,
    rx: AsyncReceiver<SpeechRequest>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[SPEECH] Worker started");

    loop {
        let request = tokio::select! {
            _ = cancel.cancelled() => break,
            request = rx.recv() => match request {
                Ok(request) => request,
                Err(_) => break,
            },
        };

        tokio::select! {
            _ = cancel.cancelled() => break,
            result = pipeline.speak(&request) => {
                if let Err(e) = result {
                    tracing::warn!("[SPEECH] '{}' failed: {e}", request.text);
                }
            }
        }
    }

    tracing::info!("[SPEECH] Worker stopping");
    Ok(())
}
