use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use worte_config::speech::SpeechConfig;
use worte_core::{Session, Update};
use worte_speech::{SpeechPipeline, SpeechQueue, speech_loop};
use worte_types::AppEvent;

use crate::events::event_loop;

/// Pending speech requests; anything beyond this is dropped
const SPEECH_QUEUE_CAPACITY: usize = 1;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64), // cards and notices
            ui_to_app: kanal::bounded_async(64), // typed commands
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new() -> Self {
        Self {
            channels: ChannelSet::new(),
            cancel_token: CancellationToken::new(),
        }
    }

    /// Start the event loop (owning `session`), the shell and, when
    /// enabled, the speech worker
    pub fn spawn_tasks(
        &self,
        session: Session,
        initial: Vec<Update>,
        speech: &SpeechConfig,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        let speech_queue = if speech.enabled {
            match SpeechPipeline::from_config(speech) {
                Ok(pipeline) => {
                    let (queue, rx) = SpeechQueue::new(SPEECH_QUEUE_CAPACITY);
                    tasks.spawn(speech_loop(pipeline, rx, self.cancel_token.child_token()));
                    Some(queue)
                }
                Err(e) => {
                    tracing::error!("Speech disabled: {e}");
                    None
                }
            }
        } else {
            tracing::info!("Speech disabled in config");
            None
        };

        // Event loop
        tasks.spawn(event_loop(
            session,
            initial,
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            speech_queue,
            self.cancel_token.child_token(),
        ));

        // UI loop
        tasks.spawn(worte_ui::ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}
